pub mod braille;
pub mod render;

pub use render::render;

pub mod input;
pub mod physics;
pub mod state;

pub use input::{InputAction, KeyboardState};
pub use state::{Game, Player, PADDLE_MARGIN};

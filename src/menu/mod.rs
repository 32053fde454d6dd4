// Menu module for Pong
// Start screen: item selection and the actions handed back to the driver

pub mod input;
pub mod render;
pub mod state;

pub use state::{ItemAction, Menu, MenuExit};

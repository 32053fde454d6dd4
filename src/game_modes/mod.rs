mod common;
mod local;

pub use common::FrameLimiter;

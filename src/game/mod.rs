pub mod input;
pub mod physics;
pub mod state;

pub use input::{poll_input, InputAction};
pub use physics::{update, FrameEvents};
pub use state::{Bird, GameState, Pipe};

//! Wire shapes of the game backend's HTTP API.
mod ack;
mod level;
mod status;

pub use ack::*;
pub use level::*;
pub use status::*;

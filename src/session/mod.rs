//! Client-side game loop.
//!
//! A [`Session`] owns one [`crate::round::Round`], the running
//! [`crate::round::Scoreboard`] and the computer's RNG. It is driven by
//! [`Input`]s (landmark frames from an external detector, key presses) and by
//! a once-per-second tick that only exists while a countdown is running.
mod input;
mod key;
mod session;

#[cfg(feature = "native")]
mod render;
#[cfg(feature = "native")]
mod runtime;

pub use input::*;
pub use key::*;
pub use session::*;

#[cfg(feature = "native")]
pub use runtime::*;

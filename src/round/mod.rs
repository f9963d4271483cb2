//! One countdown-to-resolution cycle of Rock-Paper-Scissors.
//!
//! [`Round`] moves through [`Phase`]s `Idle → CountingDown → Locked → Resolved`
//! and back to `Idle` on reset. It owns no timer: whoever drives it calls
//! [`Round::tick`] once per second and [`Round::observe`] once per classified
//! frame. [`Scoreboard`] tallies resolved rounds across a session.
mod phase;
mod round;
mod scoreboard;
mod winner;

pub use phase::*;
pub use round::*;
pub use scoreboard::*;
pub use winner::*;

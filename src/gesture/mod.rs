//! Hand gesture recognition from landmark geometry.
//!
//! An external hand-pose detector produces one [`Hand`] per detected hand per
//! video frame. The [`Classifier`] counts extended [`Finger`]s with fixed
//! tip-vs-joint comparisons and maps the resulting [`Fingers`] set onto a
//! [`Gesture`]. No learning, no smoothing across frames.
mod classifier;
mod finger;
mod fingers;
mod gesture;
mod hand;
mod landmark;

pub use classifier::*;
pub use finger::*;
pub use fingers::*;
pub use gesture::*;
pub use hand::*;
pub use landmark::*;

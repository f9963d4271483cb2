//! Page router of the polling view.
//!
//! [`App`] is the whole view state. [`App::update`] is a pure transition:
//! it takes an [`Event`] and hands back the next state plus the backend
//! [`Request`]s to fire. The runtime performs those requests and feeds
//! their outcomes back in as events.
mod app;
mod event;
mod page;
mod request;

#[cfg(feature = "native")]
mod render;
#[cfg(feature = "native")]
mod runtime;

pub use app::*;
pub use event::*;
pub use page::*;
pub use request::*;

#[cfg(feature = "native")]
pub use runtime::*;

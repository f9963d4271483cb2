//! HTTP side of the polling view.
mod backend;
mod http;
mod ticker;

pub use backend::*;
pub use http::*;
pub use ticker::*;

use super::page::Page;
use crate::dto::Level;

/// Side effects asked for by a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    /// `GET /state`, answered with the page that was showing when it left
    Poll(Page),
    Start,
    Difficulty(Level),
    Reset,
    /// `GET /frame`, to tell whether the video stream is up
    CheckStream,
}

impl std::fmt::Display for Request {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Poll(page) => write!(f, "poll ({})", page),
            Self::Start => write!(f, "start"),
            Self::Difficulty(level) => write!(f, "difficulty {}", level.path()),
            Self::Reset => write!(f, "reset"),
            Self::CheckStream => write!(f, "check stream"),
        }
    }
}

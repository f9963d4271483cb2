use super::page::Page;
use crate::dto::Level;
use crate::dto::Status;

/// Everything that can happen to the view: user commands, the poll timer,
/// and outcomes of earlier requests.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Begin,
    Choose(Level),
    Back,
    Play,
    Reset,
    Again,
    Home,
    Quit,
    Tick,
    Polled { origin: Page, status: Status },
    Unreachable,
    StreamFailed(String),
    StreamRestored,
}

/// Commands typed at the view's prompt.
impl TryFrom<&str> for Event {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "begin" | "b" => Ok(Self::Begin),
            "back" => Ok(Self::Back),
            "play" | "p" => Ok(Self::Play),
            "reset" | "r" => Ok(Self::Reset),
            "again" | "a" => Ok(Self::Again),
            "home" | "h" => Ok(Self::Home),
            "quit" | "q" | "exit" => Ok(Self::Quit),
            other => Level::try_from(other)
                .map(Self::Choose)
                .map_err(|_| format!("unknown command: {}", s.trim())),
        }
    }
}

use super::event::Event;
use super::page::Page;
use super::request::Request;
use crate::dto::Level;
use crate::dto::Status;

/// View state: which page is showing, the last snapshot polled while on it,
/// the difficulty picked on the way in, and the one stream error message.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct App {
    page: Page,
    status: Option<Status>,
    level: Option<Level>,
    stream: Option<String>,
    feed: String,
}

impl From<String> for App {
    /// start on the welcome page, showing the given video stream URL
    fn from(feed: String) -> Self {
        Self {
            feed,
            ..Self::default()
        }
    }
}

impl App {
    pub fn update(self, event: Event) -> (Self, Vec<Request>) {
        match (self.page, event) {
            (_, Event::Tick) => {
                let mut requests = vec![Request::Poll(self.page)];
                if self.page == Page::Gameplay && self.stream.is_some() {
                    requests.push(Request::CheckStream);
                }
                (self, requests)
            }
            (_, Event::Polled { origin, status }) => (self.polled(origin, status), vec![]),
            (_, Event::Unreachable) => {
                log::debug!("backend unreachable, keeping last snapshot");
                (self, vec![])
            }
            (_, Event::StreamFailed(message)) => (
                Self {
                    stream: Some(message),
                    ..self
                },
                vec![],
            ),
            (_, Event::StreamRestored) => (Self { stream: None, ..self }, vec![]),

            (Page::Welcome, Event::Begin) => (self.goto(Page::Difficulty), vec![]),
            (Page::Difficulty, Event::Back) => (self.goto(Page::Welcome), vec![]),
            (Page::Difficulty, Event::Choose(level)) => (
                Self {
                    level: Some(level),
                    status: None,
                    ..self.goto(Page::Gameplay)
                },
                vec![Request::Difficulty(level), Request::CheckStream],
            ),
            (Page::Gameplay, Event::Play) => (self, vec![Request::Start]),
            (Page::Gameplay, Event::Reset) => (self, vec![Request::Reset]),
            (Page::Gameplay, Event::Home) => (self.goto(Page::Welcome), vec![]),
            (Page::Results, Event::Again) => (self.goto(Page::Difficulty), vec![Request::Reset]),
            (Page::Results, Event::Home) => (self.goto(Page::Welcome), vec![Request::Reset]),

            (page, event) => {
                log::debug!("ignoring {:?} on {}", event, page);
                (self, vec![])
            }
        }
    }

    pub fn page(&self) -> Page {
        self.page
    }
    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }
    pub fn level(&self) -> Option<Level> {
        self.level
    }
    pub fn stream(&self) -> Option<&str> {
        self.stream.as_deref()
    }
    pub fn feed(&self) -> &str {
        &self.feed
    }
}

impl App {
    fn goto(self, page: Page) -> Self {
        log::info!("{} -> {}", self.page, page);
        Self { page, ..self }
    }

    /// Answers to polls sent from another page are stale and dropped.
    /// A finished game moves gameplay on to the results.
    fn polled(self, origin: Page, status: Status) -> Self {
        if origin != self.page {
            log::debug!("dropping poll from {} while on {}", origin, self.page);
            return self;
        }
        let done = status.game_status.game_completed;
        let next = Self {
            status: Some(status),
            ..self
        };
        match (next.page, done) {
            (Page::Gameplay, true) => next.goto(Page::Results),
            _ => next,
        }
    }
}

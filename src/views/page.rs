/// The four screens of the view. Exactly one is shown at a time.
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq)]
pub enum Page {
    #[default]
    Welcome,
    Difficulty,
    Gameplay,
    Results,
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Welcome => write!(f, "welcome"),
            Self::Difficulty => write!(f, "difficulty"),
            Self::Gameplay => write!(f, "gameplay"),
            Self::Results => write!(f, "results"),
        }
    }
}

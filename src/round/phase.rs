#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    CountingDown,
    Locked,
    Resolved,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::CountingDown => write!(f, "counting-down"),
            Self::Locked => write!(f, "locked"),
            Self::Resolved => write!(f, "resolved"),
        }
    }
}

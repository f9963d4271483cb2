use crate::gesture::Gesture;
use serde::Deserialize;
use serde::Serialize;

/// Who took the round.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    Player,
    Computer,
    Draw,
}

impl Winner {
    /// Standard beats-relation. A player who never showed a readable
    /// gesture forfeits to the computer.
    pub fn of(player: Option<Gesture>, computer: Gesture) -> Self {
        match player.filter(Gesture::is_known) {
            None => Self::Computer,
            Some(p) if p == computer => Self::Draw,
            Some(p) if p.beats(&computer) => Self::Player,
            Some(_) => Self::Computer,
        }
    }
    pub fn verdict(&self) -> &'static str {
        match self {
            Self::Player => "You Win!",
            Self::Computer => "Computer Wins!",
            Self::Draw => "Draw",
        }
    }
}

impl std::fmt::Display for Winner {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Player => write!(f, "player"),
            Self::Computer => write!(f, "computer"),
            Self::Draw => write!(f, "draw"),
        }
    }
}

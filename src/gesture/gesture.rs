use super::finger::Finger;
use super::fingers::Fingers;
use serde::Deserialize;
use serde::Serialize;

/// What a hand is showing. Unknown means no classification was made.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Gesture {
    Rock,
    Paper,
    Scissors,
    Unknown,
}

impl Gesture {
    /// the three throws a player or the computer can commit to
    pub const fn choices() -> &'static [Self] {
        &[Self::Rock, Self::Paper, Self::Scissors]
    }
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
    /// the throw that beats this one
    pub const fn counter(&self) -> Self {
        match self {
            Self::Rock => Self::Paper,
            Self::Paper => Self::Scissors,
            Self::Scissors => Self::Rock,
            Self::Unknown => Self::Unknown,
        }
    }
    pub fn beats(&self, other: &Self) -> bool {
        self.is_known() && other.counter() == *self
    }
    pub fn draw<R: rand::Rng>(rng: &mut R) -> Self {
        match rng.random_range(0..3) {
            0 => Self::Rock,
            1 => Self::Paper,
            _ => Self::Scissors,
        }
    }
}

/// zero fingers is a fist, five is an open palm,
/// index and middle alone are scissors, anything else is unreadable
impl From<Fingers> for Gesture {
    fn from(fingers: Fingers) -> Self {
        let scissors = Fingers::empty()
            .with(Finger::Index)
            .with(Finger::Middle);
        match fingers {
            f if f == Fingers::empty() => Self::Rock,
            f if f == Fingers::full() => Self::Paper,
            f if f == scissors => Self::Scissors,
            _ => Self::Unknown,
        }
    }
}

impl TryFrom<&str> for Gesture {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "rock" => Ok(Self::Rock),
            "paper" => Ok(Self::Paper),
            "scissors" => Ok(Self::Scissors),
            "unknown" => Ok(Self::Unknown),
            _ => Err(format!("invalid gesture: {}", s)),
        }
    }
}
impl TryFrom<String> for Gesture {
    type Error = String;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::try_from(s.as_str())
    }
}
impl From<Gesture> for String {
    fn from(gesture: Gesture) -> Self {
        gesture.to_string()
    }
}

impl std::fmt::Display for Gesture {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Rock => write!(f, "Rock"),
            Self::Paper => write!(f, "Paper"),
            Self::Scissors => write!(f, "Scissors"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

impl crate::Arbitrary for Gesture {
    fn random() -> Self {
        Self::draw(&mut rand::rng())
    }
}

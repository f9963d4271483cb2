use serde::Deserialize;

/// Keyboard surface of the client-side game.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum Key {
    /// `R`: start a round, or throw the current one away and count again.
    /// Restarting clears the previous round, so there is no separate reset key.
    Restart,
    /// `Q` or `Esc`: stop the camera and leave
    Stop,
}

impl TryFrom<&str> for Key {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "r" => Ok(Self::Restart),
            "q" | "esc" | "escape" | "\u{1b}" => Ok(Self::Stop),
            _ => Err(format!("unbound key: {}", s)),
        }
    }
}
impl TryFrom<String> for Key {
    type Error = String;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::try_from(s.as_str())
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Restart => write!(f, "R"),
            Self::Stop => write!(f, "Q"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bindings() {
        assert_eq!(Key::try_from("r"), Ok(Key::Restart));
        assert_eq!(Key::try_from("R"), Ok(Key::Restart));
        assert_eq!(Key::try_from("q"), Ok(Key::Stop));
        assert_eq!(Key::try_from("Esc"), Ok(Key::Stop));
        assert_eq!(Key::try_from("\u{1b}"), Ok(Key::Stop));
        assert!(Key::try_from("x").is_err());
    }
}

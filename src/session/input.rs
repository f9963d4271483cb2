use super::key::Key;
use crate::gesture::Landmark;
use serde::Deserialize;

/// One line of input to a session.
///
/// Detectors send JSON: `{"type":"frame","landmarks":[{"x":..,"y":..,"z":..}, ...]}`
/// with `null` landmarks when no hand was found, and `{"type":"key","key":"r"}`.
/// A human at the terminal can just type the key.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Input {
    Frame {
        #[serde(default)]
        landmarks: Option<Vec<Landmark>>,
    },
    Key {
        key: Key,
    },
}

impl TryFrom<&str> for Input {
    type Error = String;
    fn try_from(line: &str) -> Result<Self, Self::Error> {
        let line = line.trim();
        match line.starts_with('{') {
            true => serde_json::from_str(line).map_err(|e| format!("invalid input: {}", e)),
            false => Key::try_from(line).map(|key| Self::Key { key }),
        }
    }
}

impl From<Key> for Input {
    fn from(key: Key) -> Self {
        Self::Key { key }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_keys() {
        assert_eq!(Input::try_from("r\n"), Ok(Input::from(Key::Restart)));
        assert_eq!(Input::try_from("esc"), Ok(Input::from(Key::Stop)));
    }

    #[test]
    fn json_key() {
        assert_eq!(
            Input::try_from(r#"{"type":"key","key":"q"}"#),
            Ok(Input::from(Key::Stop))
        );
    }

    #[test]
    fn frame_without_hand() {
        assert_eq!(
            Input::try_from(r#"{"type":"frame","landmarks":null}"#),
            Ok(Input::Frame { landmarks: None })
        );
        assert_eq!(
            Input::try_from(r#"{"type":"frame"}"#),
            Ok(Input::Frame { landmarks: None })
        );
    }

    #[test]
    fn frame_with_hand() {
        let line = r#"{"type":"frame","landmarks":[{"x":0.1,"y":0.2},{"x":0.3,"y":0.4,"z":0.5}]}"#;
        match Input::try_from(line) {
            Ok(Input::Frame { landmarks: Some(points) }) => {
                assert_eq!(points.len(), 2);
                assert_eq!(points[1], Landmark::from((0.3, 0.4, 0.5)));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn garbage() {
        assert!(Input::try_from("{not json").is_err());
        assert!(Input::try_from("hello").is_err());
    }
}

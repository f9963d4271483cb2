use super::level::Level;
use serde::Deserialize;
use serde::Serialize;

/// Body of `POST /start` and `POST /reset`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ack {
    pub ok: bool,
}

/// Body of `POST /difficulty/{level}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DifficultyAck {
    pub success: bool,
    pub difficulty: Level,
}

/// Body of `GET /health`. The simple backend also reports its camera.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Health {
    pub ok: bool,
    pub camera_open: Option<bool>,
}

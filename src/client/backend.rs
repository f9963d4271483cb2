use crate::dto::Ack;
use crate::dto::DifficultyAck;
use crate::dto::Health;
use crate::dto::Level;
use crate::dto::Status;
use bytes::Bytes;

/// Everything the view needs from the game backend.
/// Single-threaded: implementations may hold `!Send` clients.
#[async_trait::async_trait(?Send)]
pub trait Backend {
    /// `GET /state`
    async fn state(&self) -> anyhow::Result<Status>;
    /// `POST /start`
    async fn start(&self) -> anyhow::Result<Ack>;
    /// `POST /difficulty/{level}`
    async fn difficulty(&self, level: Level) -> anyhow::Result<DifficultyAck>;
    /// `POST /reset`
    async fn reset(&self) -> anyhow::Result<Ack>;
    /// `GET /frame`, one JPEG still
    async fn frame(&self) -> anyhow::Result<Bytes>;
    /// `GET /health`
    async fn health(&self) -> anyhow::Result<Health>;
    /// where the MJPEG stream can be watched
    fn video_feed(&self) -> String;
}

use super::backend::Backend;
use crate::dto::Ack;
use crate::dto::DifficultyAck;
use crate::dto::Health;
use crate::dto::Level;
use crate::dto::Status;
use awc::Client;
use awc::ClientRequest;
use bytes::Bytes;
use serde::de::DeserializeOwned;

/// [`Backend`] over plain HTTP. Non-2xx answers are errors; there are no
/// retries and no timeouts beyond the client defaults.
pub struct Http {
    base: String,
    client: Client,
}

impl From<&str> for Http {
    fn from(base: &str) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
            client: Client::default(),
        }
    }
}

impl Http {
    pub fn base(&self) -> &str {
        &self.base
    }
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    async fn get(&self, path: &str) -> anyhow::Result<Bytes> {
        self.send(self.client.get(self.url(path))).await
    }

    async fn post(&self, path: &str) -> anyhow::Result<Bytes> {
        self.send(self.client.post(self.url(path))).await
    }

    async fn send(&self, request: ClientRequest) -> anyhow::Result<Bytes> {
        let what = format!("{} {}", request.get_method(), request.get_uri());
        log::debug!("{}", what);
        let mut response = request
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("{}: {}", what, e))?;
        let status = response.status();
        let bytes = response
            .body()
            .await
            .map_err(|e| anyhow::anyhow!("{}: {}", what, e))?;
        match status.is_success() {
            true => Ok(bytes),
            false => Err(anyhow::anyhow!("{}: {}", what, status)),
        }
    }

    fn decode<T: DeserializeOwned>(path: &str, bytes: Bytes) -> anyhow::Result<T> {
        serde_json::from_slice(&bytes).map_err(|e| anyhow::anyhow!("{}: {}", path, e))
    }
}

#[async_trait::async_trait(?Send)]
impl Backend for Http {
    async fn state(&self) -> anyhow::Result<Status> {
        Self::decode("/state", self.get("/state").await?)
    }
    async fn start(&self) -> anyhow::Result<Ack> {
        Self::decode("/start", self.post("/start").await?)
    }
    async fn difficulty(&self, level: Level) -> anyhow::Result<DifficultyAck> {
        let path = format!("/difficulty/{}", level.path());
        Self::decode(&path, self.post(&path).await?)
    }
    async fn reset(&self) -> anyhow::Result<Ack> {
        Self::decode("/reset", self.post("/reset").await?)
    }
    async fn frame(&self) -> anyhow::Result<Bytes> {
        self.get("/frame").await
    }
    async fn health(&self) -> anyhow::Result<Health> {
        Self::decode("/health", self.get("/health").await?)
    }
    fn video_feed(&self) -> String {
        self.url("/video_feed")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::App;
    use actix_web::HttpResponse;
    use actix_web::HttpServer;
    use actix_web::web;

    const REDUCED: &str = r#"{"countdown":1,"game_started":false,"user_choice":null,"computer_choice":null,"winner":null}"#;

    async fn difficulty(level: web::Path<String>) -> HttpResponse {
        match Level::try_from(level.as_str()) {
            Ok(level) => HttpResponse::Ok().json(DifficultyAck {
                success: true,
                difficulty: level,
            }),
            Err(_) => HttpResponse::Ok().json(serde_json::json!({"success": false, "difficulty": "Easy"})),
        }
    }

    /// stub backend on an ephemeral port
    fn stub() -> Http {
        let server = HttpServer::new(|| {
            App::new()
                .route("/state", web::get().to(|| async { HttpResponse::Ok().content_type("application/json").body(REDUCED) }))
                .route("/start", web::post().to(|| async { HttpResponse::Ok().json(Ack { ok: true }) }))
                .route("/reset", web::post().to(|| async { HttpResponse::Ok().json(Ack { ok: true }) }))
                .route("/difficulty/{level}", web::post().to(difficulty))
                .route("/frame", web::get().to(|| async { HttpResponse::ServiceUnavailable().finish() }))
                .route("/health", web::get().to(|| async { HttpResponse::Ok().json(serde_json::json!({"ok": true, "camera_open": true})) }))
        })
        .workers(1)
        .bind("127.0.0.1:0")
        .unwrap();
        let addr = server.addrs()[0];
        actix_web::rt::spawn(server.run());
        Http::from(format!("http://{}/", addr).as_str())
    }

    #[actix_web::test]
    async fn reduced_state() {
        let http = stub();
        let status = http.state().await.unwrap();
        assert_eq!(status.armed, None);
        assert!(status.counting());
        assert_eq!(status.countdown, 1);
        assert!(!status.game_status.game_completed);
    }

    #[actix_web::test]
    async fn actions() {
        let http = stub();
        assert!(http.start().await.unwrap().ok);
        assert!(http.reset().await.unwrap().ok);
        let ack = http.difficulty(Level::Hard).await.unwrap();
        assert!(ack.success);
        assert_eq!(ack.difficulty, Level::Hard);
        assert!(http.health().await.unwrap().ok);
    }

    #[actix_web::test]
    async fn non_success_is_an_error() {
        let http = stub();
        assert!(http.frame().await.is_err());
    }

    #[actix_web::test]
    async fn unreachable_backend() {
        let http = Http::from("http://127.0.0.1:1");
        assert!(http.state().await.is_err());
    }

    #[actix_web::test]
    async fn stream_url() {
        let http = Http::from("http://127.0.0.1:5002/");
        assert_eq!(http.base(), "http://127.0.0.1:5002");
        assert_eq!(http.video_feed(), "http://127.0.0.1:5002/video_feed");
    }
}

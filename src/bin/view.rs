//! View Binary
//!
//! Terminal front end for the game backend. Polls `/state` on a fixed
//! period and routes between the welcome, difficulty, gameplay and results
//! pages from commands typed on stdin.

use clap::Parser;
use roshambo::client::Backend;
use roshambo::client::Http;
use roshambo::*;
use std::rc::Rc;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// base URL of the game backend
    #[arg(long, env = "ROSHAMBO_BACKEND", default_value = BACKEND)]
    backend: String,
    /// milliseconds between two state polls
    #[arg(long, env = "ROSHAMBO_INTERVAL_MS", default_value_t = POLL.as_millis() as u64)]
    interval_ms: u64,
    /// terminal log level; the log file always gets debug
    #[arg(long, env = "ROSHAMBO_LOG", default_value = "info")]
    log_level: log::LevelFilter,
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    log(args.log_level)?;
    kys();
    let http = Rc::new(Http::from(args.backend.as_str()));
    match http.health().await {
        Ok(health) => log::info!("backend at {} is up (camera: {:?})", http.base(), health.camera_open),
        Err(e) => log::warn!("backend at {} not answering yet: {}", http.base(), e),
    }
    views::run(http, std::time::Duration::from_millis(args.interval_ms)).await
}

//! Rock-Paper-Scissors played with hand gestures.
//!
//! - [`gesture`] turns a hand landmark set into a [`gesture::Gesture`]
//! - [`round`] runs the countdown → lock → resolve state machine
//! - [`session`] drives a round from landmark frames, keys and a timer
//! - [`dto`] mirrors the backend's JSON game status
//! - [`views`] is the page router of the polling view
//! - [`client`] talks HTTP to the backend and schedules polls
pub mod dto;
pub mod gesture;
pub mod round;
pub mod session;
pub mod views;

#[cfg(feature = "native")]
pub mod client;

#[cfg(all(feature = "client", target_arch = "wasm32"))]
pub mod wasm;

// ============================================================================
// ROUND PARAMETERS
// ============================================================================
/// Countdown length in ticks before the player's gesture is locked.
pub const COUNTDOWN: u8 = 3;
/// Period of one countdown tick.
pub const TICK: std::time::Duration = std::time::Duration::from_secs(1);

// ============================================================================
// HAND LANDMARKS
// ============================================================================
/// Landmarks per detected hand, in MediaPipe hand order.
pub const LANDMARKS: usize = 21;

// ============================================================================
// BACKEND
// ============================================================================
/// Where the polling view looks for the game backend by default.
pub const BACKEND: &str = "http://127.0.0.1:5002";
/// Period between two `/state` polls.
pub const POLL: std::time::Duration = std::time::Duration::from_secs(1);

/// Random instance generation for tests and computer moves.
pub trait Arbitrary {
    fn random() -> Self;
}

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` and writes DEBUG to file, `level` to the terminal.
#[cfg(feature = "native")]
pub fn log(level: log::LevelFilter) -> anyhow::Result<()> {
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time))?,
    );
    let term = simplelog::TermLogger::new(
        level,
        config.clone(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}

/// Register Ctrl+C handler for immediate (non-graceful) termination.
/// Must be called from within a tokio runtime.
#[cfg(feature = "native")]
pub fn kys() {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            println!();
            log::warn!("interrupt received, exiting immediately");
            std::process::exit(0);
        }
    });
}

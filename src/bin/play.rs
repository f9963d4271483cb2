//! Play Binary
//!
//! Client-side rock-paper-scissors. Reads landmark frames and keys as
//! lines on stdin, one JSON object per frame, or a bare `r` / `q`.

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use roshambo::*;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// seed the computer's moves for a reproducible session
    #[arg(long, env = "ROSHAMBO_SEED")]
    seed: Option<u64>,
    /// terminal log level; the log file always gets debug
    #[arg(long, env = "ROSHAMBO_LOG", default_value = "info")]
    log_level: log::LevelFilter,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    log(args.log_level)?;
    kys();
    let rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };
    let board = session::run(session::Session::from(rng), session::stdin()).await;
    println!("{}", board);
    Ok(())
}

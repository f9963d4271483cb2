use super::input::Input;
use super::session::Control;
use super::session::Session;
use crate::TICK;
use crate::round::Scoreboard;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::mpsc::UnboundedSender;
use tokio::time::Interval;

/// Drive a session until the user stops it or the input runs dry.
///
/// The countdown timer only exists while a round is counting down. When the
/// input closes mid-countdown the round is still allowed to finish.
pub async fn run(mut session: Session, mut inputs: UnboundedReceiver<Input>) -> Scoreboard {
    let mut timer: Option<Interval> = None;
    let mut open = true;
    let mut screen = session.to_string();
    println!("{}", screen);
    loop {
        let mut restart = false;
        tokio::select! {
            input = inputs.recv(), if open => match input {
                None => open = false,
                Some(input) => match session.handle(input) {
                    Control::Stop => break,
                    Control::Restart => restart = true,
                    Control::Continue => {}
                },
            },
            _ = tick(&mut timer) => {
                session.tick();
            }
        }
        timer = match (session.counting(), restart, timer) {
            (false, _, _) => None,
            (true, true, _) | (true, false, None) => Some(countdown()),
            (true, false, Some(timer)) => Some(timer),
        };
        if !open && timer.is_none() {
            break;
        }
        let next = session.to_string();
        if next != screen {
            screen = next;
            println!("{}", screen);
        }
    }
    log::info!("final score: {}", session.board());
    *session.board()
}

/// Read input lines from stdin on a dedicated thread. Lines that do not
/// parse are logged and skipped. The channel closes at end of input.
pub fn stdin() -> UnboundedReceiver<Input> {
    let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
    std::thread::spawn(move || read(std::io::stdin().lock(), tx));
    rx
}

fn read(lines: impl std::io::BufRead, tx: UnboundedSender<Input>) {
    for line in lines.lines().map_while(Result::ok) {
        if line.trim().is_empty() {
            continue;
        }
        match Input::try_from(line.as_str()) {
            Ok(input) => {
                if tx.send(input).is_err() {
                    break;
                }
            }
            Err(e) => log::warn!("{}", e),
        }
    }
}

/// first tick one full period after the countdown starts
fn countdown() -> Interval {
    tokio::time::interval_at(tokio::time::Instant::now() + TICK, TICK)
}

async fn tick(timer: &mut Option<Interval>) {
    match timer.as_mut() {
        Some(timer) => {
            timer.tick().await;
        }
        None => std::future::pending::<()>().await,
    }
}

use super::app::App;
use super::event::Event;
use super::request::Request;
use crate::client::Backend;
use crate::client::Ticker;
use std::rc::Rc;
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::mpsc::unbounded_channel;

/// Run the view until `quit` or end of input. Polls every `period` for as
/// long as the view is alive. Must run inside an actix system.
pub async fn run<B>(backend: Rc<B>, period: std::time::Duration) -> anyhow::Result<()>
where
    B: Backend + 'static,
{
    let (tx, mut rx) = unbounded_channel::<Event>();
    let _ticker = Ticker::spawn(period, tx.clone(), || Event::Tick);
    commands(tx.clone());
    let mut app = App::from(backend.video_feed());
    let mut screen = app.to_string();
    println!("{}", screen);
    while let Some(event) = rx.recv().await {
        if event == Event::Quit {
            break;
        }
        let (next, requests) = app.update(event);
        app = next;
        for request in requests {
            dispatch(backend.clone(), request, tx.clone());
        }
        let next = app.to_string();
        if next != screen {
            screen = next;
            println!("{}", screen);
        }
    }
    log::info!("leaving view on {}", app.page());
    Ok(())
}

/// Fire one request in the background; its outcome comes back as an event.
/// Action failures are only logged.
pub fn dispatch<B>(backend: Rc<B>, request: Request, tx: UnboundedSender<Event>)
where
    B: Backend + 'static,
{
    log::debug!("request {}", request);
    actix_web::rt::spawn(async move {
        let event = match request {
            Request::Poll(origin) => match backend.state().await {
                Ok(status) => Some(Event::Polled { origin, status }),
                Err(e) => {
                    log::debug!("poll failed: {}", e);
                    Some(Event::Unreachable)
                }
            },
            Request::CheckStream => match backend.frame().await {
                Ok(_) => Some(Event::StreamRestored),
                Err(e) => {
                    log::warn!("video stream unavailable: {}", e);
                    Some(Event::StreamFailed(format!("video stream unavailable at {}", backend.video_feed())))
                }
            },
            Request::Start => {
                if let Err(e) = backend.start().await {
                    log::warn!("start failed: {}", e);
                }
                None
            }
            Request::Reset => {
                if let Err(e) = backend.reset().await {
                    log::warn!("reset failed: {}", e);
                }
                None
            }
            Request::Difficulty(level) => {
                match backend.difficulty(level).await {
                    Ok(ack) => log::info!("difficulty {} accepted: {}", ack.difficulty, ack.success),
                    Err(e) => log::warn!("difficulty {} failed: {}", level, e),
                }
                None
            }
        };
        if let Some(event) = event {
            tx.send(event)
                .inspect_err(|e| log::debug!("view gone, dropping {:?}", e.0))
                .ok();
        }
    });
}

/// Read view commands from stdin on a dedicated thread.
/// End of input counts as `quit`.
fn commands(tx: UnboundedSender<Event>) {
    std::thread::spawn(move || read(std::io::stdin().lock(), tx));
}

fn read(lines: impl std::io::BufRead, tx: UnboundedSender<Event>) {
    for line in lines.lines().map_while(Result::ok) {
        if line.trim().is_empty() {
            continue;
        }
        match Event::try_from(line.as_str()) {
            Ok(event) => {
                if tx.send(event).is_err() {
                    return;
                }
            }
            Err(e) => log::warn!("{}", e),
        }
    }
    tx.send(Event::Quit).ok();
}

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

/// Periodic task that pushes an event into a loop's channel.
/// The first event fires immediately. Dropping the ticker cancels it,
/// so it never outlives whoever owns it.
pub struct Ticker(JoinHandle<()>);

impl Ticker {
    /// Must be called from within an actix (or tokio local) runtime.
    pub fn spawn<E, F>(period: std::time::Duration, tx: UnboundedSender<E>, event: F) -> Self
    where
        E: 'static,
        F: Fn() -> E + 'static,
    {
        Self(actix_web::rt::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if tx.send(event()).is_err() {
                    break;
                }
            }
        }))
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        log::debug!("stopping ticker");
        self.0.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[actix_web::test]
    async fn ticks_until_dropped() {
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        let ticker = Ticker::spawn(Duration::from_millis(5), tx, || ());
        assert_eq!(rx.recv().await, Some(()));
        assert_eq!(rx.recv().await, Some(()));
        drop(ticker);
        // the task owned the only sender; once aborted the channel closes
        while rx.recv().await.is_some() {}
    }
}

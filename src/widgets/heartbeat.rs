use std::time::Duration;

use tokio::{
    task::JoinHandle,
    time::{self, Instant, MissedTickBehavior},
};
use tracing::debug;

/// Recurring timer bound to its handle: dropping the handle cancels it.
///
/// The first tick fires one full `period` after spawning. The callback
/// returns `false` to stop the timer on its own.
#[derive(Debug)]
pub struct Heartbeat {
    handle: JoinHandle<()>,
}

impl Heartbeat {
    /// Must be called from inside a tokio runtime.
    pub fn spawn<F>(period: Duration, mut on_tick: F) -> Self
    where
        F: FnMut() -> bool + Send + 'static,
    {
        let first_tick = Instant::now() + period;
        let handle = tokio::spawn(async move {
            let mut interval = time::interval_at(first_tick, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if !on_tick() {
                    debug!("heartbeat stopped by its callback");
                    break;
                }
            }
        });
        Self { handle }
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for Heartbeat {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn ticks_after_each_full_period() {
        let ticks = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&ticks);
        let _heartbeat = Heartbeat::spawn(Duration::from_millis(100), move || {
            counter.fetch_add(1, Ordering::SeqCst);
            true
        });

        time::sleep(Duration::from_millis(99)).await;
        assert_eq!(ticks.load(Ordering::SeqCst), 0);

        time::sleep(Duration::from_millis(2)).await;
        assert_eq!(ticks.load(Ordering::SeqCst), 1);

        time::sleep(Duration::from_millis(200)).await;
        assert_eq!(ticks.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_handle_cancels_pending_ticks() {
        let ticks = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&ticks);
        let heartbeat = Heartbeat::spawn(Duration::from_millis(100), move || {
            counter.fetch_add(1, Ordering::SeqCst);
            true
        });

        time::sleep(Duration::from_millis(150)).await;
        drop(heartbeat);
        time::sleep(Duration::from_millis(1_000)).await;
        assert_eq!(ticks.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn callback_can_stop_the_timer() {
        let heartbeat = Heartbeat::spawn(Duration::from_millis(10), || false);
        time::sleep(Duration::from_millis(20)).await;
        tokio::task::yield_now().await;
        assert!(heartbeat.is_finished());
    }
}

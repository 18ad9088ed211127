use std::{
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::Duration,
};

use tracing::debug;

use crate::widgets::{carousel::Carousel, heartbeat::Heartbeat};

/// A mounted carousel with its auto-advance heartbeat.
///
/// At most one heartbeat is live per instance. Manual navigation replaces it
/// with a fresh one that waits a full period; dropping the instance cancels
/// it.
#[derive(Debug)]
pub struct AutoCarousel {
    state: Arc<Mutex<Carousel>>,
    period: Duration,
    heartbeat: Option<Heartbeat>,
}

fn lock(state: &Mutex<Carousel>) -> MutexGuard<'_, Carousel> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

impl AutoCarousel {
    /// Must be called from inside a tokio runtime.
    pub fn mount(carousel: Carousel, period: Duration) -> Self {
        let state = Arc::new(Mutex::new(carousel));
        let heartbeat = spawn_heartbeat(&state, period);
        debug!("carousel mounted with a {period:?} heartbeat");
        Self {
            state,
            period,
            heartbeat: Some(heartbeat),
        }
    }

    pub fn snapshot(&self) -> Carousel {
        lock(&self.state).clone()
    }

    pub fn prev(&mut self) {
        lock(&self.state).prev();
        self.restart_heartbeat();
    }

    pub fn next(&mut self) {
        lock(&self.state).next();
        self.restart_heartbeat();
    }

    pub fn goto_page(&mut self, index: usize) {
        lock(&self.state).goto_page(index);
        self.restart_heartbeat();
    }

    /// Keeps the heartbeat's phase.
    pub fn resize(&mut self, viewport_width: u32) {
        lock(&self.state).resize(viewport_width);
    }

    pub fn reset_items(&mut self, item_count: usize) {
        lock(&self.state).reset_items(item_count);
    }

    fn restart_heartbeat(&mut self) {
        // Cancel before scheduling so two heartbeats never overlap.
        self.heartbeat.take();
        self.heartbeat = Some(spawn_heartbeat(&self.state, self.period));
    }
}

impl Drop for AutoCarousel {
    fn drop(&mut self) {
        if self.heartbeat.take().is_some() {
            debug!("carousel unmounted, heartbeat cancelled");
        }
    }
}

fn spawn_heartbeat(state: &Arc<Mutex<Carousel>>, period: Duration) -> Heartbeat {
    let token = lock(state).reset_token();
    let state = Arc::clone(state);
    Heartbeat::spawn(period, move || {
        let mut carousel = lock(&state);
        // A manual navigation happened after this heartbeat was scheduled.
        if carousel.reset_token() != token {
            return false;
        }
        carousel.auto_advance();
        true
    })
}

#[cfg(test)]
mod tests {
    use tokio::time;

    use super::*;
    use crate::widgets::carousel::{AUTO_ADVANCE_INTERVAL, PROPERTIES_PER_PAGE};

    fn mounted(item_count: usize) -> AutoCarousel {
        AutoCarousel::mount(
            Carousel::new(item_count, PROPERTIES_PER_PAGE, 1280),
            AUTO_ADVANCE_INTERVAL,
        )
    }

    #[tokio::test(start_paused = true)]
    async fn heartbeat_advances_and_wraps() {
        let carousel = mounted(5);
        assert_eq!(carousel.snapshot().max_index(), 2);

        time::sleep(Duration::from_millis(5_001)).await;
        assert_eq!(carousel.snapshot().start(), 1);

        time::sleep(AUTO_ADVANCE_INTERVAL).await;
        assert_eq!(carousel.snapshot().start(), 2);

        time::sleep(AUTO_ADVANCE_INTERVAL).await;
        assert_eq!(carousel.snapshot().start(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn manual_navigation_restarts_the_full_delay() {
        let mut carousel = mounted(6);

        time::sleep(Duration::from_millis(4_000)).await;
        carousel.next();
        assert_eq!(carousel.snapshot().start(), 1);

        // The original heartbeat would have fired at 5s.
        time::sleep(Duration::from_millis(4_000)).await;
        assert_eq!(carousel.snapshot().start(), 1);

        // The replacement fires 5s after the click.
        time::sleep(Duration::from_millis(1_001)).await;
        assert_eq!(carousel.snapshot().start(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn resize_keeps_the_heartbeat_phase() {
        let mut carousel = mounted(9);

        time::sleep(Duration::from_millis(3_000)).await;
        carousel.resize(320);
        assert_eq!(carousel.snapshot().items_per_page(), 1);

        time::sleep(Duration::from_millis(2_001)).await;
        assert_eq!(carousel.snapshot().start(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn unmounting_cancels_the_heartbeat() {
        let carousel = mounted(9);
        let state = Arc::clone(&carousel.state);

        drop(carousel);
        time::sleep(Duration::from_secs(60)).await;
        assert_eq!(lock(&state).start(), 0);
    }
}

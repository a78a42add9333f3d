//! View Reload Timer
//!
//! Runs a view's content loader when the view starts and then every
//! [`RELOAD_INTERVAL`] until the view is torn down.

use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

/// Period between reloads
pub const RELOAD_INTERVAL: Duration = Duration::from_millis(30_000);

/// Repeating content reload owned by one view
///
/// At most one loop runs per timer. Dropping the timer stops the loop.
#[derive(Debug)]
pub struct ReloadTimer {
    period: Duration,
    handle: Option<JoinHandle<()>>,
}

impl ReloadTimer {
    /// Create a timer with the standard 30 second period
    pub fn new() -> Self {
        Self::with_period(RELOAD_INTERVAL)
    }

    /// Create a timer with a custom period
    ///
    /// A zero period is refused and replaced by [`RELOAD_INTERVAL`].
    pub fn with_period(period: Duration) -> Self {
        let period = if period.is_zero() {
            tracing::warn!(
                "Reload period must be non-zero, using {:?}",
                RELOAD_INTERVAL
            );
            RELOAD_INTERVAL
        } else {
            period
        };

        Self {
            period,
            handle: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Whether a reload loop is armed
    pub fn is_active(&self) -> bool {
        self.handle.is_some()
    }

    /// Load content now, then on every tick
    ///
    /// The loader runs synchronously before this returns. Its return value is
    /// dropped, so a loader reporting a failure does not stop later ticks.
    /// Without a loader nothing is armed. Calling `start` while a loop is
    /// already armed does nothing. Must be called inside a tokio runtime.
    pub fn start<F, T>(&mut self, load_content: Option<F>)
    where
        F: FnMut() -> T + Send + 'static,
    {
        let Some(mut load_content) = load_content else {
            tracing::debug!("No content loader, reload timer not armed");
            return;
        };

        if self.handle.is_some() {
            tracing::warn!("Reload timer already armed, ignoring start");
            return;
        }

        let _ = load_content();

        let period = self.period;
        self.handle = Some(tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                tracing::debug!("Reloading view content");
                let _ = load_content();
            }
        }));

        tracing::info!("Reload timer armed every {:?}", period);
    }

    /// Cancel the reload loop; no-op when none is armed
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            tracing::info!("Reload timer stopped");
        }
    }
}

impl Default for ReloadTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ReloadTimer {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counting_loader() -> (Arc<AtomicUsize>, impl FnMut() + Send + 'static) {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);
        (count, move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[tokio::test(start_paused = true)]
    async fn test_loads_immediately_then_every_period() {
        let (count, loader) = counting_loader();
        let mut timer = ReloadTimer::new();

        timer.start(Some(loader));
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert!(timer.is_active());

        tokio::time::sleep(Duration::from_millis(29_000)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);

        tokio::time::sleep(Duration::from_millis(1_001)).await;
        assert_eq!(count.load(Ordering::SeqCst), 2);

        tokio::time::sleep(RELOAD_INTERVAL).await;
        assert_eq!(count.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_prevents_further_loads() {
        let (count, loader) = counting_loader();
        let mut timer = ReloadTimer::new();

        timer.start(Some(loader));
        tokio::time::sleep(Duration::from_millis(30_001)).await;
        assert_eq!(count.load(Ordering::SeqCst), 2);

        timer.stop();
        assert!(!timer.is_active());

        tokio::time::sleep(RELOAD_INTERVAL * 10).await;
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_stops_loop() {
        let (count, loader) = counting_loader();
        {
            let mut timer = ReloadTimer::new();
            timer.start(Some(loader));
        }

        tokio::time::sleep(RELOAD_INTERVAL * 3).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_stop_without_start() {
        let mut timer = ReloadTimer::new();
        timer.stop();
        timer.stop();
        assert!(!timer.is_active());
    }

    #[test]
    fn test_start_without_loader_arms_nothing() {
        let mut timer = ReloadTimer::new();
        timer.start(None::<fn()>);
        assert!(!timer.is_active());
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_start_is_ignored() {
        let (count, loader) = counting_loader();
        let (other_count, other_loader) = counting_loader();
        let mut timer = ReloadTimer::new();

        timer.start(Some(loader));
        timer.start(Some(other_loader));
        assert_eq!(other_count.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(30_001)).await;
        assert_eq!(count.load(Ordering::SeqCst), 2);
        assert_eq!(other_count.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_period_falls_back_to_default() {
        let (count, loader) = counting_loader();
        let mut timer = ReloadTimer::with_period(Duration::ZERO);
        assert_eq!(timer.period(), RELOAD_INTERVAL);

        timer.start(Some(loader));
        tokio::time::sleep(RELOAD_INTERVAL * 4 + Duration::from_millis(1)).await;

        assert!(timer.is_active());
        assert_eq!(count.load(Ordering::SeqCst), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_loads_keep_ticking() {
        let attempts = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&attempts);
        let loader = move || -> Result<(), String> {
            counter.fetch_add(1, Ordering::SeqCst);
            Err("endpoint unreachable".to_string())
        };

        let mut timer = ReloadTimer::with_period(Duration::from_secs(1));
        timer.start(Some(loader));

        tokio::time::sleep(Duration::from_millis(3_500)).await;
        assert_eq!(attempts.load(Ordering::SeqCst), 4);
    }
}

//! Chart View
//!
//! A dashboard view that shows a themed chart and reloads its content on a
//! timer. The host calls [`ChartView::initialize`] when the view appears and
//! [`ChartView::teardown`] (or drops the view) when it goes away.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use crate::reload::ReloadTimer;
use crate::theme::{watch_theme, ChartRenderer, ThemeFlag, ThemedChart};

/// Themed chart plus reload loop, owned by one view
pub struct ChartView<R> {
    chart: Arc<Mutex<ThemedChart<R>>>,
    reload: ReloadTimer,
    theme_watcher: Option<JoinHandle<()>>,
}

impl<R> ChartView<R>
where
    R: ChartRenderer + Send + 'static,
{
    pub fn new(chart: ThemedChart<R>) -> Self {
        Self::with_reload_period(chart, crate::reload::RELOAD_INTERVAL)
    }

    pub fn with_reload_period(chart: ThemedChart<R>, period: Duration) -> Self {
        Self {
            chart: Arc::new(Mutex::new(chart)),
            reload: ReloadTimer::with_period(period),
            theme_watcher: None,
        }
    }

    /// Shared handle to the chart, e.g. for a loader that updates its data
    pub fn chart(&self) -> Arc<Mutex<ThemedChart<R>>> {
        Arc::clone(&self.chart)
    }

    /// Apply the current theme, follow later theme changes and start reloading
    ///
    /// A second call while the view is live does not start another watcher or
    /// reload loop.
    pub async fn initialize<F, T>(&mut self, flag: &ThemeFlag, load_content: Option<F>)
    where
        F: FnMut() -> T + Send + 'static,
    {
        let mut receiver = flag.subscribe();
        let dark = *receiver.borrow_and_update();
        self.chart.lock().await.refresh_theme(dark);

        if self.theme_watcher.is_none() {
            self.theme_watcher = Some(watch_theme(Arc::clone(&self.chart), receiver));
        }

        self.reload.start(load_content);
    }

    pub fn is_live(&self) -> bool {
        self.theme_watcher.is_some() || self.reload.is_active()
    }

    /// Stop reloading and stop following the theme flag
    pub fn teardown(&mut self) {
        self.reload.stop();
        if let Some(watcher) = self.theme_watcher.take() {
            watcher.abort();
            tracing::debug!("Theme watcher stopped");
        }
    }
}

impl<R> Drop for ChartView<R> {
    fn drop(&mut self) {
        self.reload.stop();
        if let Some(watcher) = self.theme_watcher.take() {
            watcher.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ChartOptions;
    use serde_json::Value;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting_renderer(count: Arc<AtomicUsize>) -> impl FnMut(&Value, &ChartOptions) + Send {
        move |_: &Value, _: &ChartOptions| {
            count.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[tokio::test]
    async fn test_initialize_and_teardown() {
        let renders = Arc::new(AtomicUsize::new(0));
        let chart = ThemedChart::new(
            Value::Null,
            ChartOptions::default(),
            counting_renderer(Arc::clone(&renders)),
        );
        let mut view = ChartView::new(chart);
        let flag = ThemeFlag::new(true);

        view.initialize(&flag, Some(|| ())).await;
        assert!(view.is_live());
        assert_eq!(renders.load(Ordering::SeqCst), 1);
        assert_eq!(view.chart().lock().await.dark(), Some(true));

        view.teardown();
        assert!(!view.is_live());

        // Changes after teardown are not followed
        flag.set_dark(false);
        tokio::task::yield_now().await;
        assert_eq!(view.chart().lock().await.dark(), Some(true));
    }

    #[tokio::test]
    async fn test_without_loader_only_themes() {
        let chart = ThemedChart::new(
            Value::Null,
            ChartOptions::default(),
            |_: &Value, _: &ChartOptions| {},
        );
        let mut view = ChartView::new(chart);

        view.initialize(&ThemeFlag::default(), None::<fn()>).await;
        assert!(view.is_live());
        assert_eq!(view.chart().lock().await.dark(), Some(false));
    }

    #[tokio::test]
    async fn test_change_during_first_render_is_followed() {
        let flag = ThemeFlag::new(false);
        let renders = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&renders);
        let flipper = flag.clone();
        let chart = ThemedChart::new(
            Value::Null,
            ChartOptions::default(),
            move |_: &Value, _: &ChartOptions| {
                if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                    flipper.set_dark(true);
                }
            },
        );
        let mut view = ChartView::new(chart);

        view.initialize(&flag, None::<fn()>).await;
        for _ in 0..20 {
            tokio::task::yield_now().await;
        }

        assert_eq!(view.chart().lock().await.dark(), Some(true));
        assert_eq!(renders.load(Ordering::SeqCst), 2);
    }
}

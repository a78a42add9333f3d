//! Themed chart
//!
//! Owns a chart's data and options, recolors the options when the theme
//! flag changes and hands the result to the renderer.

use serde_json::Value;
use std::sync::Arc;
use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;

use super::chart::ChartOptions;
use super::colors::AxisColorPolicy;

/// Draws a chart from its data and options
pub trait ChartRenderer {
    fn render_chart(&mut self, data: &Value, options: &ChartOptions);
}

impl<F> ChartRenderer for F
where
    F: FnMut(&Value, &ChartOptions),
{
    fn render_chart(&mut self, data: &Value, options: &ChartOptions) {
        self(data, options)
    }
}

/// Dashboard-wide dark mode flag
///
/// Cloning gives another handle to the same flag. Watchers stop once every
/// handle is dropped.
#[derive(Debug, Clone)]
pub struct ThemeFlag {
    sender: Arc<watch::Sender<bool>>,
}

impl ThemeFlag {
    pub fn new(dark: bool) -> Self {
        let (sender, _) = watch::channel(dark);
        Self {
            sender: Arc::new(sender),
        }
    }

    pub fn is_dark(&self) -> bool {
        *self.sender.borrow()
    }

    /// Set the flag; returns true when the value changed
    ///
    /// Watchers are only notified on an actual change.
    pub fn set_dark(&self, dark: bool) -> bool {
        self.sender.send_if_modified(|current| {
            if *current == dark {
                false
            } else {
                *current = dark;
                true
            }
        })
    }

    /// Flip the flag and return the new value
    pub fn toggle(&self) -> bool {
        let dark = !self.is_dark();
        self.set_dark(dark);
        dark
    }

    /// Receiver that sees changes made after this call
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.sender.subscribe()
    }
}

impl Default for ThemeFlag {
    fn default() -> Self {
        Self::new(false)
    }
}

/// A chart whose colors follow the theme flag
pub struct ThemedChart<R> {
    data: Value,
    options: ChartOptions,
    renderer: R,
    policy: AxisColorPolicy,
    dark: Option<bool>,
}

impl<R: ChartRenderer> ThemedChart<R> {
    pub fn new(data: Value, options: ChartOptions, renderer: R) -> Self {
        Self {
            data,
            options,
            renderer,
            policy: AxisColorPolicy::default(),
            dark: None,
        }
    }

    /// Use a different axis color policy
    pub fn with_policy(mut self, policy: AxisColorPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Apply the flag's current value
    pub fn initialize(&mut self, flag: &ThemeFlag) {
        self.refresh_theme(flag.is_dark());
    }

    /// Recolor the options for `dark` and redraw
    ///
    /// The options are updated and the renderer has been called by the time
    /// this returns.
    pub fn refresh_theme(&mut self, dark: bool) -> &ChartOptions {
        self.options.apply_theme(dark, self.policy);
        self.dark = Some(dark);

        tracing::debug!(dark, policy = ?self.policy, "Redrawing chart for theme");
        self.renderer.render_chart(&self.data, &self.options);

        &self.options
    }

    /// Replace the data and redraw with the last applied theme
    ///
    /// Before the first theme refresh this only stores the data.
    pub fn update_data(&mut self, data: Value) {
        self.data = data;
        if let Some(dark) = self.dark {
            self.refresh_theme(dark);
        }
    }

    pub fn data(&self) -> &Value {
        &self.data
    }

    pub fn options(&self) -> &ChartOptions {
        &self.options
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn policy(&self) -> AxisColorPolicy {
        self.policy
    }

    /// Theme mode of the last refresh, `None` before the first one
    pub fn dark(&self) -> Option<bool> {
        self.dark
    }
}

/// Redraw `chart` every time the flag behind `receiver` changes
///
/// Take the receiver from [`ThemeFlag::subscribe`] before reading the value
/// for the first draw, so a change in between is still seen here. Runs until
/// every handle to the flag is dropped or the returned task is aborted.
pub fn watch_theme<R>(
    chart: Arc<Mutex<ThemedChart<R>>>,
    mut receiver: watch::Receiver<bool>,
) -> JoinHandle<()>
where
    R: ChartRenderer + Send + 'static,
{
    tokio::spawn(async move {
        while receiver.changed().await.is_ok() {
            let dark = *receiver.borrow_and_update();
            chart.lock().await.refresh_theme(dark);
        }

        tracing::debug!("Theme flag dropped, theme watcher exiting");
    })
}

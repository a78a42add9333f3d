//! Chart Theming
//!
//! Keeps chart colors in step with the dashboard's dark/light theme.
//!
//! ## Architecture
//!
//! - **Colors**: The fixed RGBA table and the per-axis color policy
//! - **Chart**: Serde model of chart options and the pure recolor functions
//! - **Adapter**: [`ThemedChart`] owns options, redraws on [`ThemeFlag`] changes
//! - **Palette**: Brand colors of the UI itself
//!
//! ## Flow
//!
//! 1. The hosting view subscribes to the flag, then draws with its value
//! 2. [`watch_theme`] takes that subscription and calls
//!    [`ThemedChart::refresh_theme`] on every later change
//! 3. Each refresh recolors `scales.yAxes`, `scales.xAxes` and the legend,
//!    then calls the [`ChartRenderer`]

mod adapter;
mod chart;
mod colors;
mod palette;

pub use adapter::{watch_theme, ChartRenderer, ThemeFlag, ThemedChart};
pub use chart::{
    apply_legend_theme, apply_theme, apply_theme_with, AxisConfig, ChartOptions, GridLines,
    LegendConfig, LegendLabels, Scales, Ticks,
};
pub use colors::{AxisColorPolicy, ChartPalette, ColorPair, CHART_PALETTE};
pub use palette::{UiPalette, UiTheme};

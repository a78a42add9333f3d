//! # Guildboard
//!
//! Dashboard core for a Discord levels bot: theme-aware charts, views that
//! reload their content on a timer, the route table, and GraphQL access to
//! the bot backend.
//!
//! ## Modules
//!
//! - [`theme`]: Chart recoloring for dark/light mode and the UI palette
//! - [`reload`]: Repeating content reload owned by a view
//! - [`view`]: A chart view combining both
//! - [`router`]: Path to view mapping
//! - [`graphql`]: Client for the backend's GraphQL endpoint
//! - [`color`]: Hex to CSS color conversion
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use guildboard::theme::{ChartOptions, ThemeFlag, ThemedChart};
//! use guildboard::view::ChartView;
//!
//! #[tokio::main]
//! async fn main() {
//!     let flag = ThemeFlag::new(false);
//!     let chart = ThemedChart::new(
//!         serde_json::json!({ "labels": [] }),
//!         ChartOptions::default(),
//!         |_: &serde_json::Value, options: &ChartOptions| println!("{:?}", options),
//!     );
//!
//!     let mut view = ChartView::new(chart);
//!     view.initialize(&flag, Some(|| println!("loading"))).await;
//!
//!     // Every chart following the flag redraws
//!     flag.toggle();
//!
//!     view.teardown();
//! }
//! ```

pub mod color;
pub mod config;
pub mod graphql;
pub mod reload;
pub mod router;
pub mod theme;
pub mod view;

pub use color::{hex_to_rgb, ColorError};

pub use config::{
    ApiConfig, Config, ConfigError, LoadedConfig, LoggingConfig, ReloadConfig, ThemeConfig,
};

pub use graphql::{GraphQlClient, GraphQlError, GraphQlResult};

pub use reload::{ReloadTimer, RELOAD_INTERVAL};

pub use router::{Route, Router};

pub use theme::{
    apply_legend_theme, apply_theme, AxisColorPolicy, AxisConfig, ChartOptions, ChartRenderer,
    LegendConfig, ThemeFlag, ThemedChart, UiTheme,
};

pub use view::ChartView;

//! Guildboard CLI
//!
//! Command-line access to the dashboard core:
//! - Apply the chart theme to an options file
//! - Convert colors and resolve routes
//! - Poll a GraphQL query the way dashboard views do

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use guildboard::config::{generate_default_config, Config, LoadedConfig, LoggingConfig};
use guildboard::{hex_to_rgb, ChartOptions, GraphQlClient, ReloadTimer, Route, ThemeFlag, ThemedChart};

#[derive(Parser)]
#[command(name = "guildboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Dashboard core for a Discord levels bot")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Force dark mode
    #[arg(long, global = true)]
    pub dark: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Apply the chart theme to a JSON options file and print the result
    Theme {
        /// Chart options JSON file
        file: PathBuf,
    },

    /// Convert a hex color to CSS rgb()/rgba()
    Color {
        /// Hex color, e.g. #00a2ff
        hex: String,
        /// Alpha between 0 and 1
        #[arg(short, long)]
        alpha: Option<f64>,
    },

    /// Show which view a path opens
    Route {
        /// Browser path, e.g. /servers/42
        path: String,
    },

    /// Run a GraphQL query now and on every reload tick until Ctrl-C
    Watch {
        /// GraphQL query text
        query: String,
        /// Query variables as JSON
        #[arg(short, long)]
        variables: Option<String>,
    },

    /// Print the default config file
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let LoadedConfig {
        mut config,
        source,
        warnings,
    } = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if cli.dark {
        config.theme.dark = true;
    }

    init_logging(&config.logging);

    match &source {
        Some(path) => tracing::info!("Loaded config from {:?}", path),
        None => tracing::info!("Using default config with environment overrides"),
    }
    for warning in &warnings {
        tracing::warn!("{}", warning);
    }

    match cli.command {
        Commands::Theme { file } => theme(&config, &file),
        Commands::Color { hex, alpha } => {
            println!("{}", hex_to_rgb(&hex, alpha)?);
            Ok(())
        }
        Commands::Route { path } => {
            println!("{}", Route::resolve(&path));
            Ok(())
        }
        Commands::Watch { query, variables } => watch(&config, query, variables).await,
        Commands::Config => {
            print!("{}", generate_default_config());
            Ok(())
        }
    }
}

fn init_logging(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| format!("guildboard={}", logging.level)),
    );

    // Logs go to stderr so command output stays clean on stdout
    if logging.format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn theme(config: &Config, file: &Path) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {:?}", file))?;
    let options: ChartOptions = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse chart options in {:?}", file))?;

    let flag = ThemeFlag::new(config.theme.dark);
    let mut chart = ThemedChart::new(
        Value::Null,
        options,
        |_: &Value, options: &ChartOptions| match serde_json::to_string_pretty(options) {
            Ok(json) => println!("{}", json),
            Err(e) => tracing::error!("Failed to serialize chart options: {}", e),
        },
    )
    .with_policy(config.theme.axis_policy);

    chart.initialize(&flag);
    Ok(())
}

async fn watch(config: &Config, query: String, variables: Option<String>) -> anyhow::Result<()> {
    let variables: Option<Value> = variables
        .map(|v| serde_json::from_str(&v))
        .transpose()
        .context("Variables must be valid JSON")?;

    let client = GraphQlClient::new(&config.api)?;
    tracing::info!("Watching {} every {:?}", client.endpoint(), config.reload.interval());

    let handle = tokio::runtime::Handle::current();
    let load_content = move || {
        let client = client.clone();
        let query = query.clone();
        let variables = variables.clone();
        handle.spawn(async move {
            match client.request::<Value>(&query, variables.as_ref()).await {
                Ok(data) => {
                    let now = chrono::Local::now().format("%H:%M:%S");
                    println!("[{}] {}", now, data);
                }
                Err(e) => tracing::error!("Query failed: {}", e),
            }
        })
    };

    let mut timer = ReloadTimer::with_period(config.reload.interval());
    timer.start(Some(load_content));

    tokio::signal::ctrl_c().await?;
    timer.stop();
    tracing::info!("Stopped watching");

    Ok(())
}

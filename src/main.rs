//! PhysioHMS - desktop administrative console for a physiotherapy clinic.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use eframe::egui;
use physio_console as app;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use app::config::{AppConfig, ConfigLoadResult, LoggingConfig};
use app::ui::ConsoleApp;

/// Desktop administrative console for a physiotherapy clinic.
#[derive(Parser)]
#[command(name = "physio-console")]
struct Cli {
    /// Use config.toml from current directory (dev mode)
    #[arg(long)]
    dev: bool,

    /// Explicit config file path
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// Console logging plus an optional daily-rolling log file.
///
/// The returned guard must live until exit so buffered lines are flushed.
fn init_tracing(logging: &LoggingConfig) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let (file_layer, guard) = match &logging.directory {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "physio-console.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (Some(fmt::layer().with_ansi(false).with_writer(writer)), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(file_layer)
        .init();

    guard
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = match cli.config {
        Some(path) => path,
        None if cli.dev => PathBuf::from("config.toml"),
        None => AppConfig::default_path(),
    };

    let loaded = AppConfig::try_load(&config_path);
    let (config, initial_error) = match &loaded {
        ConfigLoadResult::Loaded(config) => (config.clone(), None),
        ConfigLoadResult::Missing => (AppConfig::default(), None),
        ConfigLoadResult::Invalid(e) => (AppConfig::default(), Some(format!("Configuration ignored: {e}"))),
    };

    let _guard = init_tracing(&config.logging);
    tracing::info!("PhysioHMS console starting...");
    tracing::info!("Config path: {:?}", config_path);
    match loaded {
        ConfigLoadResult::Loaded(_) => tracing::info!("Config loaded successfully"),
        ConfigLoadResult::Missing => tracing::info!("Config missing, using defaults"),
        ConfigLoadResult::Invalid(e) => tracing::warn!("Config invalid, using defaults: {}", e),
    }

    // Runtime for simulated request latency
    let rt = tokio::runtime::Runtime::new().context("failed to create tokio runtime")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("PhysioHMS")
            .with_inner_size([1280.0, 820.0])
            .with_min_inner_size([960.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "PhysioHMS",
        options,
        Box::new(|cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(ConsoleApp::new(config, config_path, rt, initial_error)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("failed to run console window: {e}"))
}

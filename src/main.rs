// Blueprint - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. config.toml loading and logging initialisation
// 3. Company catalog loading (built-in or user-supplied)
// 4. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` can use
// `crate::app::...`, `crate::ui::...` etc.
pub use blueprint::app;
pub use blueprint::core;
pub use blueprint::platform;
pub use blueprint::ui;
pub use blueprint::util;

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Initial record layout selectable on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ViewArg {
    Grid,
    List,
}

/// Initial page selectable on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum PageArg {
    Directory,
    Dashboard,
}

/// Blueprint Directory - browse companies with a sort and filter side panel.
#[derive(Parser, Debug)]
#[command(name = "Blueprint", version, about)]
struct Cli {
    /// JSON file of company records to show instead of the built-in samples.
    #[arg(short = 'c', long = "catalog")]
    catalog: Option<PathBuf>,

    /// Start in dark mode.
    #[arg(long, conflicts_with = "light")]
    dark: bool,

    /// Start in light mode.
    #[arg(long)]
    light: bool,

    /// Initial record layout.
    #[arg(long, value_enum)]
    view: Option<ViewArg>,

    /// Page to open at startup.
    #[arg(long, value_enum)]
    page: Option<PageArg>,

    /// Read settings from this file instead of the platform config.toml.
    #[arg(long = "config")]
    config: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Config is read before logging exists; its warnings are logged after init.
    let platform_paths = platform::config::PlatformPaths::resolve();
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| platform_paths.config_file.clone());
    let (config, config_warnings) = platform::config::load_config(&config_path);

    util::logging::init(
        cli.debug,
        config.log_level.as_deref(),
        config.log_file.as_deref(),
    );

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        config = %config_path.display(),
        "Blueprint starting"
    );
    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Config warning");
    }

    // Catalog: CLI override > config > built-in samples
    let catalog_path = cli.catalog.clone().or_else(|| config.catalog.clone());
    let (companies, catalog_error) = app::catalog_mgr::load_companies(catalog_path.as_deref());

    let mut state = app::state::AppState::new(companies, cli.debug);
    state.dark_mode = if cli.dark {
        true
    } else if cli.light {
        false
    } else {
        config.dark_mode
    };
    state.view_mode = match cli.view {
        Some(ViewArg::Grid) => core::model::ViewMode::Grid,
        Some(ViewArg::List) => core::model::ViewMode::List,
        None => config.view_mode,
    };
    let route = match cli.page {
        Some(PageArg::Dashboard) => app::navigation::Route::Dashboard,
        Some(PageArg::Directory) | None => app::navigation::Route::Directory,
    };
    state.apply_startup(route, config.menu_open);

    if let Some(e) = catalog_error {
        let e = util::error::DirectoryError::from(e);
        state.status_message = format!("{e}. Showing built-in companies.");
    } else if !config_warnings.is_empty() {
        state.status_message = format!(
            "{} config warning(s); see log. {}",
            config_warnings.len(),
            state.status_message
        );
    }

    tracing::info!(companies = state.companies.len(), "Ready to launch GUI");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([480.0, 400.0])
            .with_icon(ui::icon::icon_data(util::constants::ICON_SIZE)),
        ..Default::default()
    };

    let font_size = config.font_size;
    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(gui::DirectoryApp::new(state, font_size)))
        }),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch Blueprint GUI: {e}");
        std::process::exit(1);
    }
}

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use theme_tweaker::cli::CliArgs;
use theme_tweaker::config::TweakerConfig;
use theme_tweaker::config_paths;
use theme_tweaker::model::{Session, UiMode, UI_MODE_KEY};
use theme_tweaker::presets::PresetStore;
use theme_tweaker::provider::FileThemeSource;
use theme_tweaker::storage::{JsonFileStore, KeyValueStore};
use theme_tweaker::view::ViewOptions;

mod runtime;

use runtime::App;

fn main() -> Result<()> {
    let args = CliArgs::parse();
    let save_config = args.save_config;
    theme_tweaker::tracing::init(!args.no_file_log);

    let stored = TweakerConfig::load();
    let config = args.into_config(&stored).map_err(anyhow::Error::msg)?;
    if save_config {
        config.to_stored().save().map_err(anyhow::Error::msg)?;
    }
    if config.file_logging {
        if let Some(log) = config_paths::log_file() {
            tracing::info!("Logging to {}", log.display());
        }
    }

    let store = JsonFileStore::open_default().context("Failed to open the preferences store")?;
    let presets = PresetStore::load(&store);
    let mode = store
        .get(UI_MODE_KEY)
        .and_then(|value| value.as_str().map(UiMode::parse))
        .unwrap_or_default();
    let session = Session::new(presets, mode);

    let mut source =
        FileThemeSource::new(config.theme_path.clone()).with_scan_roots(config.scan_roots.clone());
    if let Some(dir) = config.uploads_dir.clone() {
        source = source.with_uploads_dir(dir);
    }
    tracing::debug!(
        "Starting on {} with {} scan roots",
        config.theme_path.display(),
        config.scan_roots.len()
    );

    App::new(
        session,
        Arc::new(source),
        Box::new(store),
        ViewOptions { ansi: config.ansi },
    )
    .run()
}

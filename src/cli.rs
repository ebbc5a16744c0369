//! Command-line argument parsing
//!
//! Flags override the values stored in `config.yaml`.

use clap::Parser;
use std::path::PathBuf;

use crate::config::TweakerConfig;

/// Interactive editor for dark/light theme palettes
#[derive(Parser, Debug)]
#[command(
    name = "theme-tweaker",
    version,
    about = "Interactive editor for dark/light theme palettes"
)]
pub struct CliArgs {
    /// Theme file to edit
    #[arg(short = 'p', long, value_name = "FILE")]
    pub path: Option<PathBuf>,

    /// Directory to search for theme files (repeatable)
    #[arg(long = "scan-root", value_name = "DIR")]
    pub scan_roots: Vec<PathBuf>,

    /// Where uploaded themes are stored
    #[arg(long, value_name = "DIR")]
    pub uploads_dir: Option<PathBuf>,

    /// Disable the debug log file
    #[arg(long)]
    pub no_file_log: bool,

    /// Write the effective settings back to config.yaml
    #[arg(long)]
    pub save_config: bool,

    /// Draw plain swatches (no ANSI colors)
    #[arg(long)]
    pub plain: bool,
}

/// Settings the runtime starts with
#[derive(Debug, Clone, PartialEq)]
pub struct StartupConfig {
    /// Initial active theme path
    pub theme_path: PathBuf,
    pub scan_roots: Vec<PathBuf>,
    pub uploads_dir: Option<PathBuf>,
    pub file_logging: bool,
    pub ansi: bool,
}

impl CliArgs {
    /// Merge the arguments over the stored config
    pub fn into_config(self, stored: &TweakerConfig) -> Result<StartupConfig, String> {
        let theme_path = self
            .path
            .or_else(|| stored.theme_path.clone())
            .ok_or_else(|| "No theme file given (use --path or set theme_path)".to_string())?;

        let scan_roots = if !self.scan_roots.is_empty() {
            self.scan_roots
        } else if !stored.scan_roots.is_empty() {
            stored.scan_roots.clone()
        } else {
            // Default to the directory holding the theme
            theme_path
                .parent()
                .filter(|dir| !dir.as_os_str().is_empty())
                .map(|dir| vec![dir.to_path_buf()])
                .unwrap_or_else(|| vec![PathBuf::from(".")])
        };

        let uploads_dir = self
            .uploads_dir
            .or_else(|| stored.resolved_uploads_dir());

        Ok(StartupConfig {
            theme_path,
            scan_roots,
            uploads_dir,
            file_logging: !self.no_file_log,
            ansi: !self.plain,
        })
    }
}

impl StartupConfig {
    /// Stored form of these settings
    pub fn to_stored(&self) -> TweakerConfig {
        TweakerConfig {
            theme_path: Some(self.theme_path.clone()),
            scan_roots: self.scan_roots.clone(),
            uploads_dir: self.uploads_dir.clone(),
        }
    }
}

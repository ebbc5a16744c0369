//! Theme source collaborators
//!
//! The editing session never touches the file system directly. It asks a
//! [`ThemeSource`] to load, save, list and upload themes, and an
//! [`ActivePath`] which file is being edited. [`FileThemeSource`] implements
//! both against local JSON files.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use thiserror::Error;

use crate::theme::ThemeDocument;

/// Directory depth searched below each scan root
pub const MAX_SCAN_DEPTH: usize = 6;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid theme JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Path must be an existing file: {0}")]
    NotAFile(String),

    #[error("File must be a .json: {0}")]
    NotJson(String),

    #[error("Invalid upload name: {0:?}")]
    InvalidName(String),

    #[error("No uploads directory available")]
    NoUploadsDir,

    #[error("Active path lock poisoned")]
    Poisoned,
}

impl<T> From<PoisonError<T>> for ProviderError {
    fn from(_: PoisonError<T>) -> Self {
        ProviderError::Poisoned
    }
}

/// Where theme documents come from and go to
pub trait ThemeSource: Send + Sync {
    fn load(&self) -> Result<ThemeDocument, ProviderError>;
    fn save(&self, doc: &ThemeDocument) -> Result<(), ProviderError>;
    fn list_candidates(&self) -> Result<Vec<String>, ProviderError>;
    /// Store an uploaded theme, returning its path
    fn upload(&self, name: &str, content: &str) -> Result<String, ProviderError>;
}

/// Which theme file is being edited
pub trait ActivePath: Send + Sync {
    fn get(&self) -> String;
    /// Switch files; the effective path may differ from the requested one
    fn set(&self, requested: &str) -> Result<String, ProviderError>;
}

/// Themes stored as JSON files on the local file system
#[derive(Debug)]
pub struct FileThemeSource {
    active: Mutex<PathBuf>,
    scan_roots: Vec<PathBuf>,
    uploads_dir: Option<PathBuf>,
}

impl FileThemeSource {
    pub fn new(active: PathBuf) -> Self {
        Self {
            active: Mutex::new(active),
            scan_roots: Vec::new(),
            uploads_dir: None,
        }
    }

    /// Set the directories searched by `list_candidates` (builder pattern)
    pub fn with_scan_roots(mut self, roots: Vec<PathBuf>) -> Self {
        self.scan_roots = roots;
        self
    }

    /// Set where uploads are stored (builder pattern)
    pub fn with_uploads_dir(mut self, dir: PathBuf) -> Self {
        self.uploads_dir = Some(dir);
        self
    }

    pub fn active_path(&self) -> Result<PathBuf, ProviderError> {
        Ok(self.active.lock()?.clone())
    }
}

/// Read and parse a theme file
pub fn read_theme(path: &Path) -> Result<ThemeDocument, ProviderError> {
    let content = std::fs::read_to_string(path).map_err(|source| ProviderError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(ThemeDocument::from_json(&content)?)
}

/// Write a theme file, keeping a timestamped copy of the previous content
pub fn write_theme(path: &Path, doc: &ThemeDocument) -> Result<(), ProviderError> {
    let write_err = |source| ProviderError::Write {
        path: path.to_path_buf(),
        source,
    };

    if path.exists() {
        let stamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
        let backup = backup_path(path, &stamp.to_string());
        std::fs::copy(path, &backup).map_err(|source| ProviderError::Write {
            path: backup.clone(),
            source,
        })?;
        tracing::debug!("Backed up {} to {}", path.display(), backup.display());
    }

    let content = doc.to_json_pretty()?;
    std::fs::write(path, content).map_err(write_err)
}

/// `theme.json` -> `theme.json.bak.<stamp>`
pub fn backup_path(path: &Path, stamp: &str) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(format!(".bak.{}", stamp));
    path.with_file_name(name)
}

/// Expand a leading `~` to the home directory
pub fn expand_home(raw: &str) -> PathBuf {
    if raw == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    } else if let Some(rest) = raw.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(raw)
}

fn has_json_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with('.'))
}

fn scan_dir(dir: &Path, depth: usize, found: &mut BTreeSet<String>) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        tracing::debug!("Skipping unreadable directory {}", dir.display());
        return;
    };

    for entry in entries.filter_map(|e| e.ok()) {
        let path = entry.path();
        if is_hidden(&path) {
            continue;
        }
        if path.is_dir() {
            if depth < MAX_SCAN_DEPTH {
                scan_dir(&path, depth + 1, found);
            }
        } else if has_json_extension(&path) && read_theme(&path).is_ok() {
            found.insert(path.to_string_lossy().to_string());
        }
    }
}

/// Reduce an uploaded file name to a safe `.json` base name
pub fn sanitize_upload_name(name: &str) -> Result<String, ProviderError> {
    let base = name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .trim();
    if base.is_empty() || base == "." || base == ".." || base.starts_with('.') {
        return Err(ProviderError::InvalidName(name.to_string()));
    }
    if has_json_extension(Path::new(base)) {
        Ok(base.to_string())
    } else {
        Ok(format!("{}.json", base))
    }
}

impl ThemeSource for FileThemeSource {
    fn load(&self) -> Result<ThemeDocument, ProviderError> {
        let path = self.active_path()?;
        tracing::info!("Loading theme from {}", path.display());
        read_theme(&path)
    }

    fn save(&self, doc: &ThemeDocument) -> Result<(), ProviderError> {
        let path = self.active_path()?;
        write_theme(&path, doc)?;
        tracing::info!("Saved theme to {}", path.display());
        Ok(())
    }

    fn list_candidates(&self) -> Result<Vec<String>, ProviderError> {
        let mut found = BTreeSet::new();
        for root in &self.scan_roots {
            scan_dir(root, 0, &mut found);
        }
        tracing::debug!("Scan found {} themes", found.len());
        Ok(found.into_iter().collect())
    }

    fn upload(&self, name: &str, content: &str) -> Result<String, ProviderError> {
        let dir = self.uploads_dir.as_ref().ok_or(ProviderError::NoUploadsDir)?;
        let file_name = sanitize_upload_name(name)?;
        // Reject anything that would fail to load afterwards
        ThemeDocument::from_json(content)?;

        std::fs::create_dir_all(dir).map_err(|source| ProviderError::Write {
            path: dir.clone(),
            source,
        })?;

        let mut target = dir.join(&file_name);
        if target.exists() {
            let stamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
            target = dir.join(format!("{}-{}", stamp, file_name));
        }
        std::fs::write(&target, content).map_err(|source| ProviderError::Write {
            path: target.clone(),
            source,
        })?;

        tracing::info!("Stored upload {} at {}", name, target.display());
        Ok(target.to_string_lossy().to_string())
    }
}

impl ActivePath for FileThemeSource {
    fn get(&self) -> String {
        self.active_path()
            .map(|p| p.to_string_lossy().to_string())
            .unwrap_or_default()
    }

    fn set(&self, requested: &str) -> Result<String, ProviderError> {
        let path = expand_home(requested.trim());
        if !path.is_file() {
            return Err(ProviderError::NotAFile(path.display().to_string()));
        }
        if !has_json_extension(&path) {
            return Err(ProviderError::NotJson(path.display().to_string()));
        }
        read_theme(&path)?;

        let effective = path.to_string_lossy().to_string();
        *self.active.lock()? = path;
        tracing::info!("Active theme path set to {}", effective);
        Ok(effective)
    }
}

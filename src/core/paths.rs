//! File system locations used by the CLI.

use std::path::{Path, PathBuf};

/// Path: ~/.config/mlb-sandbox/catalog.json (platform config dir)
pub fn default_catalog_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".config");
        home
    });
    base.join("mlb-sandbox").join("catalog.json")
}

/// Return `path` if it points at an existing file.
pub fn existing_file(path: &Path) -> Option<PathBuf> {
    path.is_file().then(|| path.to_path_buf())
}

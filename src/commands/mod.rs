//! Command implementations for the MLB roster sandbox CLI

pub mod bench;
pub mod build;
pub mod eligible;
pub mod matchup;


use std::path::PathBuf;

use crate::{
    core::{default_catalog_path, existing_file},
    error::SandboxError,
    Result, CATALOG_ENV_VAR,
};

/// Resolve the catalog file: explicit flag, then environment, then the
/// default config location if a catalog has been saved there.
pub fn resolve_catalog_path(catalog: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = catalog {
        return Ok(path);
    }

    if let Ok(value) = std::env::var(CATALOG_ENV_VAR) {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }

    existing_file(&default_catalog_path()).ok_or_else(|| SandboxError::MissingCatalog {
        env_var: CATALOG_ENV_VAR.to_string(),
    })
}

//! Core utilities for the MLB roster sandbox CLI
//!
//! - `paths`: Default file locations

pub mod paths;

pub use paths::{default_catalog_path, existing_file};

//! Strongly typed baseball domain values, parsed once at ingestion.

pub mod filters;
pub mod position;
pub mod slot;
pub mod team;

//! Error types for the MLB roster sandbox

use thiserror::Error;

use crate::cli::types::slot::Slot;

pub type Result<T> = std::result::Result<T, SandboxError>;

#[derive(Error, Debug)]
pub enum SandboxError {
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot play {position} at {slot}")]
    PositionMismatch { position: String, slot: Slot },

    #[error("Over salary cap: projected ${projected:.1}M exceeds limit ${cap:.1}M")]
    SalaryCapExceeded { projected: f64, cap: f64 },

    #[error("Invalid slot: {slot}")]
    InvalidSlot { slot: String },

    #[error("Invalid player {name}: {reason}")]
    InvalidPlayer { name: String, reason: String },

    #[error("Player not found: {name}")]
    PlayerNotFound { name: String },

    #[error("Catalog path not provided and {env_var} environment variable not set")]
    MissingCatalog { env_var: String },

    #[error("Cannot compare a {left} with a {right}")]
    MismatchedStatTypes {
        left: &'static str,
        right: &'static str,
    },

    #[error("No stat line for player: {name}")]
    MissingStats { name: String },

    #[error("Invalid step '{step}': {reason}")]
    InvalidStep { step: String, reason: String },
}

impl SandboxError {
    /// True for the two placement rejections a user can trigger by dropping a
    /// player in the wrong place. Neither leaves any trace on the roster.
    pub fn is_placement_rejection(&self) -> bool {
        matches!(
            self,
            SandboxError::PositionMismatch { .. } | SandboxError::SalaryCapExceeded { .. }
        )
    }
}

//! Club identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The two clubs whose rosters make up the player catalog.
///
/// # Examples
///
/// ```rust
/// use mlb_sandbox::Team;
///
/// assert_eq!(Team::Bluejays.mlb_id(), 141);
/// assert_eq!(Team::Dodgers.to_string(), "dodgers");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    Bluejays,
    Dodgers,
}

impl Team {
    pub const ALL: [Team; 2] = [Team::Bluejays, Team::Dodgers];

    /// Team id on the MLB stats API.
    pub fn mlb_id(&self) -> u32 {
        match self {
            Team::Bluejays => 141,
            Team::Dodgers => 119,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Team::Bluejays => "Blue Jays",
            Team::Dodgers => "Dodgers",
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Team::Bluejays => "bluejays",
            Team::Dodgers => "dodgers",
        };
        write!(f, "{}", s)
    }
}

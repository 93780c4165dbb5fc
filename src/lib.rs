//! MLB Roster Sandbox Library
//!
//! The rules engine behind a drag-and-drop baseball roster builder:
//! position eligibility, a salary cap, batting order bookkeeping and a
//! same-team infield chemistry bonus, plus the player catalog that feeds it.
//!
//! ## Features
//!
//! - **Eligibility**: Which raw position tags may fill which of the ten slots
//! - **Salary Cap**: Placements that would push payroll past $150M are refused
//! - **Batting Order**: Derived from fielded non-pitchers, manually reorderable
//! - **Chemistry**: A 10% score bonus for an all-one-team infield
//! - **Matchups**: Stat comparison rows for two players of the same kind
//!
//! ## Quick Start
//!
//! ```rust
//! use mlb_sandbox::{catalog::Player, roster::RosterBuilder, Slot, Team};
//!
//! # fn example() -> mlb_sandbox::Result<()> {
//! let mut roster = RosterBuilder::new();
//! let bo = Player::new("Bo Bichette", Team::Bluejays, "SS".parse().unwrap(), 20.0, 5.0);
//!
//! roster.place_player(bo, Slot::Shortstop)?;
//! assert_eq!(roster.totals().salary, 20.0);
//! assert_eq!(roster.lineup().names(), &["Bo Bichette".to_string()]);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Environment Configuration
//!
//! Point the CLI at a catalog file to avoid passing `--catalog` every time:
//! ```bash
//! export MLB_SANDBOX_CATALOG=~/rosters/catalog.json
//! ```

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod matchup;
pub mod roster;
pub mod sandbox;

// Re-export commonly used types
pub use cli::types::{filters::PositionFilter, position::PositionTag, slot::Slot, team::Team};
pub use error::{Result, SandboxError};
pub use roster::{RosterBuilder, CHEMISTRY_BONUS, SALARY_CAP};
pub use sandbox::Sandbox;

pub const CATALOG_ENV_VAR: &str = "MLB_SANDBOX_CATALOG";

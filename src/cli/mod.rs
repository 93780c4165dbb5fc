//! CLI argument definitions and parsing.

pub mod types;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::commands::build::Step;
use types::{filters::PositionFilter, position::PositionTag, team::Team};

/// Catalog location shared between commands
#[derive(Debug, Args)]
pub struct CatalogArgs {
    /// Player catalog JSON file (or set `MLB_SANDBOX_CATALOG` env var).
    #[clap(long, short)]
    pub catalog: Option<PathBuf>,
}

#[derive(Debug, Parser)]
#[clap(name = "mlb-sandbox", about = "MLB roster sandbox")]
pub struct MlbSandbox {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the slots a position tag may be placed into.
    Eligible {
        /// Raw position tag, e.g. `SS`, `OF`, `TWP`.
        #[clap(long, short)]
        position: PositionTag,
    },

    /// Build a roster by replaying placement steps, then print the result.
    ///
    /// Steps run in order: `place:NAME=SLOT`, `remove:SLOT`,
    /// `swap:INDEX:DIR` (1-based index, DIR `-1` or `+1`) and `clear`.
    /// Rejected steps are logged and skipped.
    Build {
        #[clap(flatten)]
        catalog: CatalogArgs,

        /// Output the final roster as JSON instead of text.
        #[clap(long)]
        json: bool,

        /// Steps to apply.
        steps: Vec<Step>,
    },

    /// Show unplaced players for one team.
    Bench {
        #[clap(flatten)]
        catalog: CatalogArgs,

        /// Team to list.
        #[clap(long, short)]
        team: Team,

        /// Position filter: ALL, C, DH, IF, OF or an exact tag.
        #[clap(long, short, default_value = "ALL")]
        position: PositionFilter,

        /// Filter by player name (substring match).
        #[clap(long, short = 'n', default_value = "")]
        name: String,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Compare two players' season stat lines.
    Matchup {
        #[clap(flatten)]
        catalog: CatalogArgs,

        /// First player's full name.
        left: String,

        /// Second player's full name.
        right: String,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}

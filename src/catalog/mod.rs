//! Player catalog and bench for the roster sandbox
//!
//! This module owns the inbound side of the sandbox:
//! - `models`: Player and stat line structures
//! - `bench`: The pool of players not currently on the field
//!
//! The catalog document mirrors the `/api/players` payload of the web front
//! end: one array of players per team key.

pub mod bench;
pub mod models;


pub use bench::Bench;
pub use models::{Player, StatLine};

use crate::cli::types::team::Team;
use crate::error::{Result, SandboxError};
use models::PlayerRecord;
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

/// Pre-validated players grouped by team.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    players: BTreeMap<Team, Vec<Player>>,
}

impl Catalog {
    /// Build a catalog from already-constructed players.
    ///
    /// Player names identify lineup entries, so they must be unique.
    pub fn new(players: Vec<Player>) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut grouped: BTreeMap<Team, Vec<Player>> = BTreeMap::new();

        for player in players {
            player.validate()?;
            if !seen.insert(player.name.to_ascii_lowercase()) {
                return Err(SandboxError::InvalidPlayer {
                    name: player.name,
                    reason: "duplicate player name".to_string(),
                });
            }
            grouped.entry(player.team).or_default().push(player);
        }

        Ok(Self { players: grouped })
    }

    /// Parse a catalog document: `{"bluejays": [...], "dodgers": [...]}`.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let groups: BTreeMap<Team, Vec<PlayerRecord>> = serde_json::from_str(json)?;

        let mut players = Vec::new();
        for (team, records) in groups {
            for record in records {
                players.push(record.into_player(team)?);
            }
        }

        Self::new(players)
    }

    /// Read and parse a catalog file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&contents)?;
        tracing::debug!(
            path = %path.display(),
            players = catalog.len(),
            "loaded player catalog"
        );
        Ok(catalog)
    }

    pub fn team(&self, team: Team) -> &[Player] {
        self.players.get(&team).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All players, grouped by team in [`Team::ALL`] order.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.values().flatten()
    }

    /// Case-insensitive exact name lookup.
    pub fn find(&self, name: &str) -> Option<&Player> {
        self.players()
            .find(|p| p.name.eq_ignore_ascii_case(name.trim()))
    }

    pub fn len(&self) -> usize {
        self.players.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

//! The pool of unplaced players.

use super::{Catalog, Player};
use crate::cli::types::{filters::PositionFilter, team::Team};
use crate::error::{Result, SandboxError};

/// Players available to be dragged onto the field.
///
/// Players evicted from the field come back here; a name is never held twice.
#[derive(Debug, Clone, Default)]
pub struct Bench {
    players: Vec<Player>,
}

impl Bench {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self {
            players: catalog.players().cloned().collect(),
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn get(&self, name: &str) -> Option<&Player> {
        self.index_of(name).map(|i| &self.players[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }

    /// Remove a player from the bench.
    pub fn take(&mut self, name: &str) -> Result<Player> {
        let index = self
            .index_of(name)
            .ok_or_else(|| SandboxError::PlayerNotFound {
                name: name.to_string(),
            })?;
        Ok(self.players.remove(index))
    }

    /// Return a player to the end of the bench. Returns false if already present.
    pub fn restore(&mut self, player: Player) -> bool {
        if self.contains(&player.name) {
            return false;
        }
        tracing::debug!(player = %player.name, "returned to bench");
        self.players.push(player);
        true
    }

    /// Players of `team` matching the position filter whose name contains
    /// `name_query` (case-insensitive).
    pub fn filtered<'a>(
        &'a self,
        team: Team,
        position: &'a PositionFilter,
        name_query: &str,
    ) -> impl Iterator<Item = &'a Player> + 'a {
        let query = name_query.trim().to_uppercase();
        self.players.iter().filter(move |p| {
            p.team == team && position.matches(&p.position) && p.name.to_uppercase().contains(&query)
        })
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        let name = name.trim();
        self.players
            .iter()
            .position(|p| p.name.eq_ignore_ascii_case(name))
    }
}

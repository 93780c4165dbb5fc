//! A roster-building session: the bench of unplaced players plus the field.

use crate::catalog::{Bench, Catalog, Player};
use crate::cli::types::slot::Slot;
use crate::error::{Result, SandboxError};
use crate::roster::{Direction, Placement, RosterBuilder, RosterSnapshot};

/// Owns the bench and the roster and keeps them consistent: every player is
/// in exactly one of the two, and anyone evicted from the field goes back to
/// the bench.
#[derive(Debug, Clone, Default)]
pub struct Sandbox {
    bench: Bench,
    roster: RosterBuilder,
}

impl Sandbox {
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            bench: Bench::from_catalog(catalog),
            roster: RosterBuilder::new(),
        }
    }

    pub fn bench(&self) -> &Bench {
        &self.bench
    }

    pub fn roster(&self) -> &RosterBuilder {
        &self.roster
    }

    /// Place the named player, taken from the bench or moved from another slot.
    ///
    /// On rejection both the bench and the field are left as they were.
    pub fn place(&mut self, name: &str, slot: Slot) -> Result<Placement> {
        let (player, from_bench) = match self.bench.get(name) {
            Some(p) => (p.clone(), true),
            None => {
                let fielded = self
                    .roster
                    .occupants()
                    .find(|(_, p)| p.name.eq_ignore_ascii_case(name.trim()))
                    .map(|(_, p)| p.clone())
                    .ok_or_else(|| SandboxError::PlayerNotFound {
                        name: name.to_string(),
                    })?;
                (fielded, false)
            }
        };

        let placed_name = player.name.clone();
        let placement = self.roster.place_player(player, slot)?;

        if from_bench {
            self.bench.take(&placed_name)?;
        }
        if let Some(evicted) = &placement.evicted {
            self.bench.restore(evicted.clone());
        }
        Ok(placement)
    }

    /// Vacate `slot`, sending its occupant back to the bench.
    pub fn remove(&mut self, slot: Slot) -> Option<Player> {
        let removed = self.roster.remove_player(slot)?;
        self.bench.restore(removed.clone());
        Some(removed)
    }

    pub fn move_in_lineup(&mut self, index: usize, direction: Direction) -> bool {
        self.roster.move_in_lineup(index, direction)
    }

    /// Empty the field; every evicted player returns to the bench once.
    pub fn clear_all(&mut self) -> Vec<Player> {
        let evicted = self.roster.clear_all();
        for player in &evicted {
            self.bench.restore(player.clone());
        }
        evicted
    }

    pub fn snapshot(&self) -> RosterSnapshot {
        self.roster.snapshot()
    }
}

//! Roster builder: slot occupancy, salary cap, batting order and scoring
//!
//! The builder is an explicitly owned session object. Every mutating call
//! validates first, then mutates, then recomputes the lineup and totals
//! before returning, so callers always observe a consistent state.
//!
//! - `eligibility`: Which position tags may fill which slots
//! - `lineup`: Batting order reconciliation and manual reordering
//! - `snapshot`: Aggregates and serializable views for rendering

pub mod eligibility;
pub mod lineup;
pub mod snapshot;

#[cfg(test)]
mod tests;

pub use eligibility::{can_place, can_place_raw, eligible_slots};
pub use lineup::{Direction, Lineup};
pub use snapshot::{LineupEntry, RosterSnapshot, Totals};

use crate::catalog::Player;
use crate::cli::types::slot::Slot;
use crate::error::{Result, SandboxError};

/// Maximum combined salary of fielded players, in millions.
pub const SALARY_CAP: f64 = 150.0;

/// Score multiplier when the whole infield comes from one team.
pub const CHEMISTRY_BONUS: f64 = 1.1;

/// Outcome of a successful placement.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub slot: Slot,
    /// Previous occupant of `slot`, who must go back to the bench.
    pub evicted: Option<Player>,
    /// Slot the player vacated if they were already on the field.
    pub moved_from: Option<Slot>,
}

/// Owns the fielded players and the batting order derived from them.
#[derive(Debug, Clone, Default)]
pub struct RosterBuilder {
    occupants: [Option<Player>; Slot::COUNT],
    lineup: Lineup,
    totals: Totals,
}

impl RosterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Position eligibility of `player` for `slot`. No side effects.
    pub fn can_place(player: &Player, slot: Slot) -> bool {
        can_place(&player.position, slot)
    }

    /// Put `player` into `slot`.
    ///
    /// Fails with `PositionMismatch` or `SalaryCapExceeded` (checked in that
    /// order) and leaves the roster untouched. A player already fielded
    /// elsewhere is moved rather than duplicated.
    pub fn place_player(&mut self, player: Player, slot: Slot) -> Result<Placement> {
        if !Self::can_place(&player, slot) {
            tracing::debug!(player = %player.name, %slot, "position mismatch");
            return Err(SandboxError::PositionMismatch {
                position: player.position.to_string(),
                slot,
            });
        }

        let moved_from = self.slot_of(&player.name).filter(|s| *s != slot);
        let existing_salary = self.occupant(slot).map_or(0.0, |p| p.salary);
        let moving_salary = moved_from
            .and_then(|s| self.occupant(s))
            .map_or(0.0, |p| p.salary);

        let projected = self.salary_sum() - existing_salary - moving_salary + player.salary;
        if projected > SALARY_CAP {
            tracing::debug!(player = %player.name, %slot, projected, "salary cap exceeded");
            return Err(SandboxError::SalaryCapExceeded {
                projected,
                cap: SALARY_CAP,
            });
        }

        if let Some(from) = moved_from {
            self.occupants[from.index()] = None;
        }

        let name = player.name.clone();
        let previous = self.occupants[slot.index()].replace(player);
        // Re-placing someone into the slot they already hold is not an eviction.
        let evicted = previous.filter(|p| p.name != name);

        self.recompute();

        tracing::debug!(
            player = %name,
            slot = %slot,
            evicted = evicted.as_ref().map(|p| p.name.as_str()),
            total_salary = self.totals.salary,
            "placed player"
        );

        Ok(Placement {
            slot,
            evicted,
            moved_from,
        })
    }

    /// Vacate `slot`, returning its former occupant.
    pub fn remove_player(&mut self, slot: Slot) -> Option<Player> {
        let removed = self.occupants[slot.index()].take();
        if removed.is_some() {
            self.recompute();
        }
        removed
    }

    /// Swap lineup entry `index` with its neighbour. Out-of-range moves are no-ops.
    pub fn move_in_lineup(&mut self, index: usize, direction: Direction) -> bool {
        self.lineup.move_entry(index, direction)
    }

    /// Vacate every slot. Returns the evicted players in slot order.
    pub fn clear_all(&mut self) -> Vec<Player> {
        let evicted: Vec<Player> = self
            .occupants
            .iter_mut()
            .filter_map(Option::take)
            .collect();

        self.lineup.clear();
        self.recompute();

        if !evicted.is_empty() {
            tracing::info!(evicted = evicted.len(), "field cleared");
        }
        evicted
    }

    pub fn occupant(&self, slot: Slot) -> Option<&Player> {
        self.occupants[slot.index()].as_ref()
    }

    /// Occupied slots in [`Slot::ALL`] order.
    pub fn occupants(&self) -> impl Iterator<Item = (Slot, &Player)> {
        Slot::ALL
            .into_iter()
            .zip(self.occupants.iter())
            .filter_map(|(slot, p)| p.as_ref().map(|p| (slot, p)))
    }

    pub fn slot_of(&self, name: &str) -> Option<Slot> {
        self.occupants()
            .find(|(_, p)| p.name == name)
            .map(|(slot, _)| slot)
    }

    pub fn lineup(&self) -> &Lineup {
        &self.lineup
    }

    pub fn totals(&self) -> Totals {
        self.totals
    }

    pub fn is_empty(&self) -> bool {
        self.occupants.iter().all(Option::is_none)
    }

    pub fn snapshot(&self) -> RosterSnapshot {
        RosterSnapshot::capture(self)
    }

    fn salary_sum(&self) -> f64 {
        self.occupants().map(|(_, p)| p.salary).sum()
    }

    /// True when all four infield slots hold players from the same team.
    fn chemistry_active(&self) -> bool {
        let mut teams = Slot::INFIELD
            .iter()
            .map(|slot| self.occupant(*slot).map(|p| p.team));

        match teams.next() {
            Some(Some(first)) => teams.all(|team| team == Some(first)),
            _ => false,
        }
    }

    fn recompute(&mut self) {
        let salary = self.salary_sum();
        let base_score: f64 = self.occupants().map(|(_, p)| p.score).sum();
        let chemistry_active = self.chemistry_active();

        self.totals = Totals {
            score: if chemistry_active {
                base_score * CHEMISTRY_BONUS
            } else {
                base_score
            },
            salary,
            over_budget: salary > SALARY_CAP,
            chemistry_active,
        };

        // Pitchers never bat; a two-way player hits only when slotted at DH.
        let batters: Vec<String> = self
            .occupants()
            .filter(|(slot, _)| *slot != Slot::Pitcher)
            .map(|(_, p)| p.name.clone())
            .collect();
        self.lineup.sync(batters.iter().map(String::as_str));
    }
}

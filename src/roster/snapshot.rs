//! Read-only views of the roster for a presentation layer.

use super::{RosterBuilder, SALARY_CAP};
use crate::catalog::Player;
use crate::cli::types::slot::Slot;
use serde::Serialize;
use std::collections::BTreeMap;

/// Aggregates recomputed after every roster change.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Totals {
    /// Sum of occupant scores, including the chemistry bonus when active.
    pub score: f64,
    pub salary: f64,
    pub over_budget: bool,
    pub chemistry_active: bool,
}

impl Totals {
    /// Share of the cap in use, capped at 100 for display.
    pub fn salary_percent(&self) -> f64 {
        (self.salary / SALARY_CAP * 100.0).min(100.0)
    }
}

/// One batter in the order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineupEntry {
    /// 1-based batting position.
    pub order: usize,
    pub name: String,
    pub slot: Slot,
    pub headline: String,
}

/// Everything a renderer needs after a mutation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterSnapshot {
    pub occupants: BTreeMap<Slot, Player>,
    pub lineup: Vec<LineupEntry>,
    pub total_score: f64,
    pub total_salary: f64,
    pub salary_cap: f64,
    pub salary_percent: f64,
    pub over_budget: bool,
    pub chemistry_active: bool,
}

impl RosterSnapshot {
    pub(super) fn capture(roster: &RosterBuilder) -> Self {
        let occupants: BTreeMap<Slot, Player> = roster
            .occupants()
            .map(|(slot, player)| (slot, player.clone()))
            .collect();

        let lineup = roster
            .lineup()
            .names()
            .iter()
            .enumerate()
            .filter_map(|(i, name)| {
                let slot = roster.slot_of(name)?;
                let player = roster.occupant(slot)?;
                Some(LineupEntry {
                    order: i + 1,
                    name: name.clone(),
                    slot,
                    headline: player.description_headline().to_string(),
                })
            })
            .collect();

        let totals = roster.totals();
        Self {
            occupants,
            lineup,
            total_score: totals.score,
            total_salary: totals.salary,
            salary_cap: SALARY_CAP,
            salary_percent: totals.salary_percent(),
            over_budget: totals.over_budget,
            chemistry_active: totals.chemistry_active,
        }
    }
}

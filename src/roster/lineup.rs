//! Batting order bookkeeping.

use crate::error::SandboxError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Direction of a manual lineup move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards the top of the order (index - 1).
    Up,
    /// Towards the bottom of the order (index + 1).
    Down,
}

impl Direction {
    /// Index reached by moving `index` one step, if it stays within `len`.
    fn apply(self, index: usize, len: usize) -> Option<usize> {
        let target = match self {
            Direction::Up => index.checked_sub(1)?,
            Direction::Down => index.checked_add(1)?,
        };
        (index < len && target < len).then_some(target)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => write!(f, "-1"),
            Direction::Down => write!(f, "+1"),
        }
    }
}

impl FromStr for Direction {
    type Err = SandboxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "-1" | "up" => Ok(Direction::Up),
            "+1" | "1" | "down" => Ok(Direction::Down),
            _ => Err(SandboxError::InvalidStep {
                step: s.to_string(),
                reason: "direction must be -1/up or +1/down".to_string(),
            }),
        }
    }
}

/// Ordered batting sequence of fielded non-pitchers, keyed by player name.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Lineup {
    names: Vec<String>,
}

impl Lineup {
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Reconcile with the current set of batters.
    ///
    /// Names no longer batting are dropped in place; new batters are appended
    /// in the order `batters` yields them. Everyone else keeps their spot.
    pub(crate) fn sync<'a>(&mut self, batters: impl IntoIterator<Item = &'a str>) {
        let batters: Vec<&str> = batters.into_iter().collect();

        self.names.retain(|name| batters.contains(&name.as_str()));
        for name in batters {
            if self.position_of(name).is_none() {
                self.names.push(name.to_string());
            }
        }
    }

    /// Swap the entry at `index` with its neighbour. Out-of-range moves are
    /// ignored; returns whether anything changed.
    pub fn move_entry(&mut self, index: usize, direction: Direction) -> bool {
        match direction.apply(index, self.names.len()) {
            Some(target) => {
                self.names.swap(index, target);
                true
            }
            None => false,
        }
    }

    pub(crate) fn clear(&mut self) {
        self.names.clear();
    }
}

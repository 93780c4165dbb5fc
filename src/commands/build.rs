//! Roster build command implementation
//!
//! Replays a sequence of user actions against a fresh sandbox, the way the
//! web front end applies drops, double-clicks and lineup arrows one at a
//! time, then reports the resulting roster.

use std::fmt;
use std::str::FromStr;

use crate::{
    catalog::Catalog,
    error::SandboxError,
    roster::{Direction, RosterSnapshot},
    sandbox::Sandbox,
    Result, Slot,
};

/// A single user action.
///
/// Syntax: `place:NAME=SLOT`, `remove:SLOT`, `swap:INDEX:DIR` (DIR is `-1`,
/// `+1`, `up` or `down`; INDEX is 1-based) and `clear`.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Place { name: String, slot: Slot },
    Remove(Slot),
    Swap { index: usize, direction: Direction },
    Clear,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Place { name, slot } => write!(f, "place:{}={}", name, slot),
            Step::Remove(slot) => write!(f, "remove:{}", slot),
            Step::Swap { index, direction } => write!(f, "swap:{}:{}", index + 1, direction),
            Step::Clear => write!(f, "clear"),
        }
    }
}

impl FromStr for Step {
    type Err = SandboxError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = |reason: &str| SandboxError::InvalidStep {
            step: s.to_string(),
            reason: reason.to_string(),
        };

        let (verb, rest) = s.split_once(':').unwrap_or((s, ""));
        match verb.trim().to_lowercase().as_str() {
            "place" => {
                let (name, slot) = rest
                    .rsplit_once('=')
                    .ok_or_else(|| invalid("expected place:NAME=SLOT"))?;
                if name.trim().is_empty() {
                    return Err(invalid("player name is empty"));
                }
                Ok(Step::Place {
                    name: name.trim().to_string(),
                    slot: slot.parse()?,
                })
            }
            "remove" => Ok(Step::Remove(rest.parse()?)),
            "swap" => {
                let (index, direction) = rest
                    .split_once(':')
                    .ok_or_else(|| invalid("expected swap:INDEX:DIR"))?;
                let index: usize = index
                    .trim()
                    .parse()
                    .map_err(|_| invalid("index must be a positive number"))?;
                let index = index
                    .checked_sub(1)
                    .ok_or_else(|| invalid("index is 1-based"))?;
                Ok(Step::Swap {
                    index,
                    direction: direction.parse()?,
                })
            }
            "clear" if rest.trim().is_empty() => Ok(Step::Clear),
            _ => Err(invalid("unknown action")),
        }
    }
}

/// What happened when a step was applied.
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    Placed { evicted: Option<String> },
    Removed(Option<String>),
    Swapped(bool),
    Cleared(Vec<String>),
    Rejected(String),
}

/// Apply `steps` in order. Rejected steps are reported and skipped.
pub fn run_steps(sandbox: &mut Sandbox, steps: &[Step]) -> Vec<StepOutcome> {
    steps
        .iter()
        .map(|step| {
            let outcome = match step {
                Step::Place { name, slot } => match sandbox.place(name, *slot) {
                    Ok(placement) => StepOutcome::Placed {
                        evicted: placement.evicted.map(|p| p.name),
                    },
                    Err(e) => StepOutcome::Rejected(e.to_string()),
                },
                Step::Remove(slot) => StepOutcome::Removed(sandbox.remove(*slot).map(|p| p.name)),
                Step::Swap { index, direction } => {
                    StepOutcome::Swapped(sandbox.move_in_lineup(*index, *direction))
                }
                Step::Clear => StepOutcome::Cleared(
                    sandbox.clear_all().into_iter().map(|p| p.name).collect(),
                ),
            };

            if let StepOutcome::Rejected(reason) = &outcome {
                tracing::warn!(step = %step, %reason, "step rejected");
            }
            outcome
        })
        .collect()
}

/// Plain-text rendering of a roster snapshot.
pub fn render_snapshot(snapshot: &RosterSnapshot) -> String {
    let mut out = String::from("Field:\n");
    for slot in Slot::ALL {
        match snapshot.occupants.get(&slot) {
            Some(p) => out.push_str(&format!(
                "  {:<3} {} (${:.1}M, {:.1})\n",
                slot.as_str(),
                p.name,
                p.salary,
                p.score
            )),
            None => out.push_str(&format!("  {:<3} -\n", slot.as_str())),
        }
    }

    out.push_str("Lineup:\n");
    if snapshot.lineup.is_empty() {
        out.push_str("  Place fielders to fill the lineup.\n");
    }
    for entry in &snapshot.lineup {
        out.push_str(&format!("  {}. {} ({})", entry.order, entry.name, entry.slot));
        if !entry.headline.is_empty() {
            out.push_str(&format!("  {}", entry.headline));
        }
        out.push('\n');
    }

    out.push_str(&format!("Score: {:.1}", snapshot.total_score));
    if snapshot.chemistry_active {
        out.push_str("  [infield chemistry +10%]");
    }
    out.push('\n');

    out.push_str(&format!(
        "Salary: ${:.1}M / ${:.1}M ({:.0}%)",
        snapshot.total_salary, snapshot.salary_cap, snapshot.salary_percent
    ));
    if snapshot.over_budget {
        out.push_str("  OVER BUDGET");
    }
    out.push('\n');
    out
}

/// Handle the build command
pub fn handle_build(catalog: &Catalog, steps: &[Step], as_json: bool) -> Result<()> {
    let mut sandbox = Sandbox::new(catalog);
    let outcomes = run_steps(&mut sandbox, steps);

    let rejected = outcomes
        .iter()
        .filter(|o| matches!(o, StepOutcome::Rejected(_)))
        .count();
    tracing::info!(steps = steps.len(), rejected, "roster built");

    let snapshot = sandbox.snapshot();
    if as_json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        print!("{}", render_snapshot(&snapshot));
    }
    Ok(())
}

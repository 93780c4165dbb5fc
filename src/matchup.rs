//! Head-to-head comparison data for two selected players.
//!
//! Produces the metric rows a grouped bar chart is drawn from; drawing the
//! chart is left to the presentation layer.

use crate::catalog::{Player, StatLine};
use crate::error::{Result, SandboxError};
use serde::Serialize;


/// Headroom applied above the tallest bar.
pub const AXIS_HEADROOM: f64 = 1.1;

/// One metric with both players' values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricRow {
    pub metric: &'static str,
    pub left: f64,
    pub right: f64,
}

/// Comparison of two players of the same kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Matchup {
    pub left: String,
    pub right: String,
    pub kind: &'static str,
    pub rows: Vec<MetricRow>,
}

impl Matchup {
    /// Upper bound of the value axis.
    pub fn axis_max(&self) -> f64 {
        axis_max(&self.rows)
    }
}

fn metrics(stats: &StatLine) -> [(&'static str, Option<f64>); 4] {
    match *stats {
        StatLine::Hitter { avg, obp, slg, ops } => {
            [("AVG", avg), ("OBP", obp), ("SLG", slg), ("OPS", ops)]
        }
        StatLine::Pitcher { era, whip, k9, bb9 } => {
            [("ERA", era), ("WHIP", whip), ("K9", k9), ("BB9", bb9)]
        }
    }
}

fn stats_of(player: &Player) -> Result<&StatLine> {
    player
        .stats
        .as_ref()
        .ok_or_else(|| SandboxError::MissingStats {
            name: player.name.clone(),
        })
}

/// Build comparison rows for `left` vs `right`.
///
/// Hitters compare AVG/OBP/SLG/OPS, pitchers ERA/WHIP/K9/BB9. Missing values
/// are charted as zero. A hitter cannot be compared with a pitcher.
pub fn compare(left: &Player, right: &Player) -> Result<Matchup> {
    let l = stats_of(left)?;
    let r = stats_of(right)?;

    if l.kind() != r.kind() {
        return Err(SandboxError::MismatchedStatTypes {
            left: l.kind(),
            right: r.kind(),
        });
    }

    let rows = metrics(l)
        .into_iter()
        .zip(metrics(r))
        .map(|((metric, lv), (_, rv))| MetricRow {
            metric,
            left: lv.unwrap_or(0.0),
            right: rv.unwrap_or(0.0),
        })
        .collect();

    Ok(Matchup {
        left: left.name.clone(),
        right: right.name.clone(),
        kind: l.kind(),
        rows,
    })
}

/// Largest value across both players, scaled by [`AXIS_HEADROOM`].
pub fn axis_max(rows: &[MetricRow]) -> f64 {
    rows.iter()
        .map(|row| row.left.max(row.right))
        .fold(0.0, f64::max)
        * AXIS_HEADROOM
}

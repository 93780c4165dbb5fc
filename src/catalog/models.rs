//! Data models for the player catalog

use crate::cli::types::{position::PositionTag, team::Team};
use crate::error::{Result, SandboxError};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A player as supplied by the roster source.
///
/// Numeric fields are parsed once when the catalog is loaded; nothing in the
/// roster engine ever mutates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub team: Team,
    pub position: PositionTag,
    /// Salary in millions of dollars.
    pub salary: f64,
    pub score: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<StatLine>,
}

impl Player {
    pub fn new(
        name: impl Into<String>,
        team: Team,
        position: PositionTag,
        salary: f64,
        score: f64,
    ) -> Self {
        Self {
            name: name.into(),
            team,
            position,
            salary,
            score,
            description: String::new(),
            img: None,
            stats: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_stats(mut self, stats: StatLine) -> Self {
        self.stats = Some(stats);
        self
    }

    /// First `|`-separated segment of the description, shown beside lineup entries.
    pub fn description_headline(&self) -> &str {
        self.description
            .split('|')
            .next()
            .unwrap_or("")
            .trim()
    }

    /// Reject values the roster arithmetic cannot work with.
    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: &str| SandboxError::InvalidPlayer {
            name: self.name.clone(),
            reason: reason.to_string(),
        };

        if self.name.trim().is_empty() {
            return Err(invalid("name is empty"));
        }
        if !self.salary.is_finite() || self.salary < 0.0 {
            return Err(invalid("salary must be a non-negative number"));
        }
        if !self.score.is_finite() {
            return Err(invalid("score must be a finite number"));
        }
        Ok(())
    }
}

/// Season stat line used for head-to-head comparison.
///
/// Values the source reports as `N/A` (or omits) deserialize to `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StatLine {
    Hitter {
        #[serde(default, deserialize_with = "lenient_f64")]
        avg: Option<f64>,
        #[serde(default, deserialize_with = "lenient_f64")]
        obp: Option<f64>,
        #[serde(default, deserialize_with = "lenient_f64")]
        slg: Option<f64>,
        #[serde(default, deserialize_with = "lenient_f64")]
        ops: Option<f64>,
    },
    Pitcher {
        #[serde(default, deserialize_with = "lenient_f64")]
        era: Option<f64>,
        #[serde(default, deserialize_with = "lenient_f64")]
        whip: Option<f64>,
        #[serde(default, deserialize_with = "lenient_f64")]
        k9: Option<f64>,
        #[serde(default, deserialize_with = "lenient_f64")]
        bb9: Option<f64>,
    },
}

impl StatLine {
    pub fn kind(&self) -> &'static str {
        match self {
            StatLine::Hitter { .. } => "hitter",
            StatLine::Pitcher { .. } => "pitcher",
        }
    }
}

/// Accepts a number, a numeric string such as `".285"`, or anything else as `None`.
fn lenient_f64<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|v| v.is_finite()))
}

/// Player record as it appears inside a team group of the catalog document.
///
/// `team` may be omitted, in which case the group key is used.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct PlayerRecord {
    pub name: String,
    #[serde(default)]
    pub team: Option<Team>,
    pub position: PositionTag,
    pub salary: f64,
    pub score: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub img: Option<String>,
    #[serde(default)]
    pub stats: Option<StatLine>,
}

impl PlayerRecord {
    pub(crate) fn into_player(self, group: Team) -> Result<Player> {
        if let Some(team) = self.team {
            if team != group {
                return Err(SandboxError::InvalidPlayer {
                    name: self.name,
                    reason: format!("listed under {} but plays for {}", group, team),
                });
            }
        }

        let player = Player {
            name: self.name,
            team: group,
            position: self.position,
            salary: self.salary,
            score: self.score,
            description: self.description,
            img: self.img,
            stats: self.stats,
        };
        player.validate()?;
        Ok(player)
    }
}

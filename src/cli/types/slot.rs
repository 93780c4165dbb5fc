//! Roster slots on the field.

use crate::error::{Result, SandboxError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the ten fixed roster slots: nine defensive roles plus DH.
///
/// Declaration order is the enumeration order used everywhere a stable
/// order is needed (snapshots, eviction lists, lineup discovery).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Slot {
    #[serde(rename = "P")]
    Pitcher,
    #[serde(rename = "C")]
    Catcher,
    #[serde(rename = "1B")]
    FirstBase,
    #[serde(rename = "2B")]
    SecondBase,
    #[serde(rename = "3B")]
    ThirdBase,
    #[serde(rename = "SS")]
    Shortstop,
    #[serde(rename = "LF")]
    LeftField,
    #[serde(rename = "CF")]
    CenterField,
    #[serde(rename = "RF")]
    RightField,
    #[serde(rename = "DH")]
    DesignatedHitter,
}

impl Slot {
    pub const COUNT: usize = 10;

    pub const ALL: [Slot; Slot::COUNT] = [
        Slot::Pitcher,
        Slot::Catcher,
        Slot::FirstBase,
        Slot::SecondBase,
        Slot::ThirdBase,
        Slot::Shortstop,
        Slot::LeftField,
        Slot::CenterField,
        Slot::RightField,
        Slot::DesignatedHitter,
    ];

    /// The four slots checked for the same-team chemistry bonus.
    pub const INFIELD: [Slot; 4] = [
        Slot::FirstBase,
        Slot::SecondBase,
        Slot::ThirdBase,
        Slot::Shortstop,
    ];

    pub fn is_infield(&self) -> bool {
        Self::INFIELD.contains(self)
    }

    pub fn is_outfield(&self) -> bool {
        matches!(self, Slot::LeftField | Slot::CenterField | Slot::RightField)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Slot::Pitcher => "P",
            Slot::Catcher => "C",
            Slot::FirstBase => "1B",
            Slot::SecondBase => "2B",
            Slot::ThirdBase => "3B",
            Slot::Shortstop => "SS",
            Slot::LeftField => "LF",
            Slot::CenterField => "CF",
            Slot::RightField => "RF",
            Slot::DesignatedHitter => "DH",
        }
    }

    /// Position in [`Slot::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Slot {
    type Err = SandboxError;

    fn from_str(s: &str) -> Result<Self> {
        let upper = s.trim().to_uppercase();
        Slot::ALL
            .into_iter()
            .find(|slot| slot.as_str() == upper)
            .ok_or_else(|| SandboxError::InvalidSlot {
                slot: s.to_string(),
            })
    }
}

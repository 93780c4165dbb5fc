//! Baseball position tags and utilities.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Raw eligibility tag carried by a player.
///
/// Tags come straight from the roster source (`primaryPosition.abbreviation`
/// on the MLB stats API) and describe what a player *can* play, which is
/// broader than the single slot they end up occupying.
///
/// # Tag Types
///
/// - **Pitchers**: P, SP, RP
/// - **Two-way**: TWP (eligible everywhere but catcher)
/// - **Individual fielders**: C, 1B, 2B, 3B, SS, LF, CF, RF
/// - **Groups**: IF (any infield slot), OF (any outfield slot)
/// - **Hitting only**: DH
///
/// Unknown tags are kept verbatim as [`PositionTag::Other`] rather than
/// rejected, so parsing never fails.
///
/// # Examples
///
/// ```rust
/// use mlb_sandbox::PositionTag;
///
/// let tag: PositionTag = "ss".parse().unwrap();
/// assert_eq!(tag, PositionTag::Shortstop);
/// assert_eq!(tag.to_string(), "SS");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PositionTag {
    Pitcher,
    StartingPitcher,
    ReliefPitcher,
    TwoWayPlayer,
    Catcher,
    FirstBase,
    SecondBase,
    ThirdBase,
    Shortstop,
    Infield,
    LeftField,
    CenterField,
    RightField,
    Outfield,
    DesignatedHitter,
    Other(String),
}

impl PositionTag {
    /// Pitchers who never hit: P, SP and RP. TWP is deliberately excluded.
    pub fn is_pure_pitcher(&self) -> bool {
        matches!(
            self,
            PositionTag::Pitcher | PositionTag::StartingPitcher | PositionTag::ReliefPitcher
        )
    }

    /// Canonical abbreviation for this tag.
    pub fn as_str(&self) -> &str {
        match self {
            PositionTag::Pitcher => "P",
            PositionTag::StartingPitcher => "SP",
            PositionTag::ReliefPitcher => "RP",
            PositionTag::TwoWayPlayer => "TWP",
            PositionTag::Catcher => "C",
            PositionTag::FirstBase => "1B",
            PositionTag::SecondBase => "2B",
            PositionTag::ThirdBase => "3B",
            PositionTag::Shortstop => "SS",
            PositionTag::Infield => "IF",
            PositionTag::LeftField => "LF",
            PositionTag::CenterField => "CF",
            PositionTag::RightField => "RF",
            PositionTag::Outfield => "OF",
            PositionTag::DesignatedHitter => "DH",
            PositionTag::Other(raw) => raw,
        }
    }
}

impl fmt::Display for PositionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PositionTag {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = match s.trim().to_uppercase().as_str() {
            "P" => PositionTag::Pitcher,
            "SP" => PositionTag::StartingPitcher,
            "RP" => PositionTag::ReliefPitcher,
            "TWP" => PositionTag::TwoWayPlayer,
            "C" => PositionTag::Catcher,
            "1B" => PositionTag::FirstBase,
            "2B" => PositionTag::SecondBase,
            "3B" => PositionTag::ThirdBase,
            "SS" => PositionTag::Shortstop,
            "IF" => PositionTag::Infield,
            "LF" => PositionTag::LeftField,
            "CF" => PositionTag::CenterField,
            "RF" => PositionTag::RightField,
            "OF" => PositionTag::Outfield,
            "DH" => PositionTag::DesignatedHitter,
            _ => PositionTag::Other(s.trim().to_string()),
        };
        Ok(tag)
    }
}

impl From<String> for PositionTag {
    fn from(s: String) -> Self {
        match s.parse() {
            Ok(tag) => tag,
            Err(never) => match never {},
        }
    }
}

impl From<PositionTag> for String {
    fn from(tag: PositionTag) -> Self {
        tag.to_string()
    }
}

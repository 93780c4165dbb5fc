//! Filter types for the bench of unplaced players.

use super::position::PositionTag;
use std::fmt;
use std::str::FromStr;

/// Position filter applied to the bench.
///
/// Group filters (`IF`, `OF`) match every tag that is eligible for at least
/// one slot in the group, including two-way players. `DH` shows everyone,
/// since almost any hitter can be slotted there.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PositionFilter {
    #[default]
    All,
    DesignatedHitter,
    Infield,
    Outfield,
    /// Exact tag match, including `C`.
    Exact(PositionTag),
}

impl PositionFilter {
    pub fn matches(&self, tag: &PositionTag) -> bool {
        match self {
            PositionFilter::All | PositionFilter::DesignatedHitter => true,
            PositionFilter::Infield => matches!(
                tag,
                PositionTag::FirstBase
                    | PositionTag::SecondBase
                    | PositionTag::ThirdBase
                    | PositionTag::Shortstop
                    | PositionTag::Infield
                    | PositionTag::TwoWayPlayer
            ),
            PositionFilter::Outfield => matches!(
                tag,
                PositionTag::LeftField
                    | PositionTag::CenterField
                    | PositionTag::RightField
                    | PositionTag::Outfield
                    | PositionTag::TwoWayPlayer
            ),
            PositionFilter::Exact(wanted) => wanted == tag,
        }
    }
}

impl fmt::Display for PositionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionFilter::All => write!(f, "ALL"),
            PositionFilter::DesignatedHitter => write!(f, "DH"),
            PositionFilter::Infield => write!(f, "IF"),
            PositionFilter::Outfield => write!(f, "OF"),
            PositionFilter::Exact(tag) => write!(f, "{}", tag),
        }
    }
}

impl FromStr for PositionFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let filter = match s.trim().to_uppercase().as_str() {
            "ALL" | "" => PositionFilter::All,
            "DH" => PositionFilter::DesignatedHitter,
            "IF" => PositionFilter::Infield,
            "OF" => PositionFilter::Outfield,
            _ => PositionFilter::Exact(s.parse()?),
        };
        Ok(filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(s: &str) -> PositionTag {
        s.parse().unwrap()
    }

    #[test]
    fn test_all_and_dh_match_everything() {
        for raw in ["P", "C", "SS", "OF", "TWP", "UT"] {
            assert!(PositionFilter::All.matches(&tag(raw)));
            assert!(PositionFilter::DesignatedHitter.matches(&tag(raw)));
        }
    }

    #[test]
    fn test_group_filters() {
        let infield: PositionFilter = "IF".parse().unwrap();
        assert!(infield.matches(&tag("2B")));
        assert!(infield.matches(&tag("IF")));
        assert!(infield.matches(&tag("TWP")));
        assert!(!infield.matches(&tag("LF")));
        assert!(!infield.matches(&tag("C")));

        let outfield: PositionFilter = "of".parse().unwrap();
        assert!(outfield.matches(&tag("RF")));
        assert!(outfield.matches(&tag("TWP")));
        assert!(!outfield.matches(&tag("SS")));
    }

    #[test]
    fn test_exact_filters() {
        let catcher: PositionFilter = "C".parse().unwrap();
        assert_eq!(catcher, PositionFilter::Exact(PositionTag::Catcher));
        assert!(catcher.matches(&tag("C")));
        assert!(!catcher.matches(&tag("1B")));

        let pitcher: PositionFilter = "P".parse().unwrap();
        assert!(pitcher.matches(&tag("P")));
        assert!(!pitcher.matches(&tag("SP")));
    }
}

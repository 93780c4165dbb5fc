//! Position eligibility rules.

use crate::cli::types::{position::PositionTag, slot::Slot};

/// Whether a player tagged `tag` may occupy `slot`.
///
/// | slot        | eligible tags                 |
/// |-------------|-------------------------------|
/// | P           | P, SP, RP, TWP                |
/// | C           | C                             |
/// | 1B/2B/3B/SS | that tag, IF, TWP             |
/// | LF/CF/RF    | that tag, OF, TWP             |
/// | DH          | anything but P, SP, RP        |
pub fn can_place(tag: &PositionTag, slot: Slot) -> bool {
    use PositionTag as T;

    match (slot, tag) {
        (Slot::Pitcher, t) => t.is_pure_pitcher() || *t == T::TwoWayPlayer,
        (Slot::Catcher, t) => *t == T::Catcher,
        (Slot::DesignatedHitter, t) => !t.is_pure_pitcher(),
        (s, T::TwoWayPlayer) => s.is_infield() || s.is_outfield(),
        (s, T::Infield) => s.is_infield(),
        (s, T::Outfield) => s.is_outfield(),
        (Slot::FirstBase, T::FirstBase)
        | (Slot::SecondBase, T::SecondBase)
        | (Slot::ThirdBase, T::ThirdBase)
        | (Slot::Shortstop, T::Shortstop)
        | (Slot::LeftField, T::LeftField)
        | (Slot::CenterField, T::CenterField)
        | (Slot::RightField, T::RightField) => true,
        _ => false,
    }
}

/// String-level eligibility check. Unknown slot labels are never eligible.
pub fn can_place_raw(position: &str, slot: &str) -> bool {
    let Ok(slot) = slot.parse::<Slot>() else {
        return false;
    };
    match position.parse::<PositionTag>() {
        Ok(tag) => can_place(&tag, slot),
        Err(never) => match never {},
    }
}

/// Every slot `tag` may occupy, in [`Slot::ALL`] order.
pub fn eligible_slots(tag: &PositionTag) -> Vec<Slot> {
    Slot::ALL
        .into_iter()
        .filter(|slot| can_place(tag, *slot))
        .collect()
}

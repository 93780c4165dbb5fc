//! Eligible slots command implementation

use crate::{roster::eligible_slots, PositionTag, Slot};

/// Slots a player with `position` may be dropped into.
pub fn eligible_labels(position: &PositionTag) -> Vec<&'static str> {
    eligible_slots(position).iter().map(Slot::as_str).collect()
}

/// Handle the eligible command
pub fn handle_eligible(position: &PositionTag) {
    let labels = eligible_labels(position);
    if labels.is_empty() {
        println!("{} cannot fill any slot", position);
    } else {
        println!("{}: {}", position, labels.join(", "));
    }
}

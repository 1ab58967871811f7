// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Garmin Pilot lookup tables.

use crate::core::GroupCategory;

/// Plain check item (`title` + `action`).
pub const CHECK_ITEM: u32 = 0;
/// Free-text note item (`title`).
pub const NOTE_ITEM: u32 = 1;

/// Live-data item types and the sentinel response text standing for them.
pub const LIVE_DATA_TOKENS: [(u32, &str); 10] = [
    (2, "%LOCAL_ALTIMETER%"),
    (3, "%DEPARTURE_ATIS_FREQ%"),
    (4, "%DEPARTURE_CLEARANCE_FREQ%"),
    (5, "%DEPARTURE_GROUND_FREQ%"),
    (6, "%DEPARTURE_TOWER_FREQ%"),
    (7, "%ARRIVAL_ATIS_FREQ%"),
    (8, "%ARRIVAL_TOWER_FREQ%"),
    (9, "%SCRATCHPAD_ATIS%"),
    (10, "%SCRATCHPAD_CRAFT%"),
    (11, "%SCRATCHPAD_PIREP%"),
];

/// Sentinel token for a live-data item type.
pub fn live_data_token(item_type: u32) -> Option<&'static str> {
    LIVE_DATA_TOKENS
        .iter()
        .find(|(t, _)| *t == item_type)
        .map(|(_, token)| *token)
}

/// Live-data item type for an exact sentinel token.
pub fn live_data_type(token: &str) -> Option<u32> {
    LIVE_DATA_TOKENS
        .iter()
        .find(|(_, t)| *t == token)
        .map(|(item_type, _)| *item_type)
}

/// Checklist `type` per category, with the subtype names in subtype order.
/// The last subtype of each category is its catch-all.
const CATEGORIES: [(GroupCategory, u32, &[&str]); 3] = [
    (
        GroupCategory::Normal,
        0,
        &[
            "Preflight",
            "Before Start",
            "Before Takeoff",
            "Cruise",
            "Descent",
            "Landing",
            "Other",
        ],
    ),
    (
        GroupCategory::Emergency,
        1,
        &["Engine", "Electrical", "Fire", "Other"],
    ),
    (GroupCategory::Abnormal, 2, &["General", "Other"]),
];

fn category_entry(category: GroupCategory) -> (u32, &'static [&'static str]) {
    CATEGORIES
        .iter()
        .find(|(c, _, _)| *c == category)
        .map(|(_, kind, names)| (*kind, *names))
        .unwrap_or((0, &[]))
}

/// Group a Garmin `(type, subtype)` pair belongs to.
pub fn group_for(kind: u32, subtype: u32) -> Option<(GroupCategory, &'static str)> {
    let (category, _, names) = CATEGORIES.iter().find(|(_, k, _)| *k == kind)?;
    let name = names.get(usize::try_from(subtype).ok()?)?;
    Some((*category, *name))
}

/// Fallback group for an unknown pair: the catch-all of the pair's
/// category, or of Normal when the type itself is unknown.
pub fn fallback_group(kind: u32) -> (GroupCategory, &'static str) {
    let category = CATEGORIES
        .iter()
        .find(|(_, k, _)| *k == kind)
        .map_or(GroupCategory::Normal, |(c, _, _)| *c);
    (category, catch_all(category).1)
}

/// `(type, subtype)` for a group, matching its name case-insensitively.
pub fn pair_for(category: GroupCategory, name: &str) -> Option<(u32, u32)> {
    let (kind, names) = category_entry(category);
    names
        .iter()
        .position(|n| n.eq_ignore_ascii_case(name.trim()))
        .and_then(|i| u32::try_from(i).ok())
        .map(|subtype| (kind, subtype))
}

/// Catch-all `(type, subtype)` and name of a category.
pub fn catch_all(category: GroupCategory) -> ((u32, u32), &'static str) {
    let (kind, names) = category_entry(category);
    let last = names.len().saturating_sub(1);
    let name = names.last().copied().unwrap_or("Other");
    ((kind, u32::try_from(last).unwrap_or(0)), name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_live_data_tokens_are_bidirectional() {
        for (item_type, token) in LIVE_DATA_TOKENS {
            assert_eq!(live_data_token(item_type), Some(token));
            assert_eq!(live_data_type(token), Some(item_type));
        }
        assert_eq!(live_data_token(CHECK_ITEM), None);
        assert_eq!(live_data_type("%local_altimeter%"), None);
    }

    #[test]
    fn test_group_table() {
        assert_eq!(group_for(0, 0), Some((GroupCategory::Normal, "Preflight")));
        assert_eq!(group_for(1, 2), Some((GroupCategory::Emergency, "Fire")));
        assert_eq!(group_for(2, 0), Some((GroupCategory::Abnormal, "General")));
        assert_eq!(group_for(2, 5), None);
        assert_eq!(group_for(9, 0), None);
    }

    #[test]
    fn test_pair_for_and_catch_all() {
        assert_eq!(pair_for(GroupCategory::Normal, "before takeoff"), Some((0, 2)));
        assert_eq!(pair_for(GroupCategory::Emergency, "Preflight"), None);
        assert_eq!(catch_all(GroupCategory::Normal), ((0, 6), "Other"));
        assert_eq!(catch_all(GroupCategory::Emergency), ((1, 3), "Other"));
        assert_eq!(catch_all(GroupCategory::Abnormal), ((2, 1), "Other"));
        assert_eq!(fallback_group(1), (GroupCategory::Emergency, "Other"));
        assert_eq!(fallback_group(42), (GroupCategory::Normal, "Other"));
    }
}

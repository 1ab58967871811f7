// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Helpers shared by several codecs.
//!
//! - prefix/suffix detection for decorated text (`** TITLE **`, `NOTE: ...`)
//! - the annotation merge rule used by ForeFlight and Garmin Pilot, which
//!   fold notes, warnings and cautions into the item they annotate

use crate::core::{ChecklistItem, ItemType};

/// Prefix marking a warning inside merged annotation text.
pub const WARNING_PREFIX: &str = "WARNING: ";
/// Prefix marking a caution inside merged annotation text.
pub const CAUTION_PREFIX: &str = "CAUTION: ";

/// Reverse a prefix to build its mirrored suffix (`"** "` -> `" **"`).
pub fn mirror(prefix: &str) -> String {
    prefix.chars().rev().collect()
}

/// Return the inner text when `text` is wrapped in `prefix` ... `suffix`.
///
/// The prefix and suffix must not overlap.
pub fn strip_affixes<'a>(text: &'a str, prefix: &str, suffix: &str) -> Option<&'a str> {
    if prefix.is_empty() && suffix.is_empty() {
        return None;
    }
    if text.len() < prefix.len() + suffix.len() {
        return None;
    }
    text.strip_prefix(prefix)?.strip_suffix(suffix)
}

/// Return the rest of `text` after a non-empty `prefix`.
pub fn strip_marker<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    if prefix.is_empty() {
        return None;
    }
    text.strip_prefix(prefix)
}

/// Render an annotation item as a single prefixed line.
///
/// Returns `None` for items that are not annotations.
pub fn annotation_line(item: &ChecklistItem) -> Option<String> {
    match item.item_type() {
        ItemType::Note => Some(item.text().to_string()),
        ItemType::Warning => Some(format!("{WARNING_PREFIX}{}", item.text())),
        ItemType::Caution => Some(format!("{CAUTION_PREFIX}{}", item.text())),
        _ => None,
    }
}

/// Turn a prefixed annotation line back into a note, warning or caution.
pub fn parse_annotation_line(line: &str, indent: u8) -> ChecklistItem {
    let item = if let Some(text) = strip_marker(line, WARNING_PREFIX) {
        ChecklistItem::warning(text)
    } else if let Some(text) = strip_marker(line, CAUTION_PREFIX) {
        ChecklistItem::caution(text)
    } else {
        ChecklistItem::note(line)
    };
    item.with_indent(indent)
}

/// Split merged annotation text back into one item per line.
pub fn split_annotations(text: &str, indent: u8) -> Vec<ChecklistItem> {
    if text.is_empty() {
        return Vec::new();
    }
    text.split('\n')
        .map(|line| parse_annotation_line(line, indent))
        .collect()
}

/// Whether `note` should be folded into the entry produced for `target`.
///
/// The target must be a title or challenge item and the note must sit
/// exactly one level deeper. Callers only pass a target while the run of
/// annotations following it is unbroken, so a note right after another
/// merged note at the same indent keeps merging into the same target.
pub fn should_merge_notes(target: &ChecklistItem, note: &ChecklistItem) -> bool {
    let target_type = target.item_type();
    if !(target_type == ItemType::Title || target_type.is_challenge()) {
        return false;
    }
    note.item_type().is_annotation() && !note.centered && note.indent == target.indent + 1
}

/// Append a line to newline-separated annotation text.
pub fn push_line(buffer: &mut String, line: &str) {
    if !buffer.is_empty() {
        buffer.push('\n');
    }
    buffer.push_str(line);
}

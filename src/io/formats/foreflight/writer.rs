// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Model to ForeFlight document.
//!
//! ForeFlight has no standalone notes inside a checklist: annotations hang
//! off the `note` of a check item or the `detail` of a comment. A run of
//! notes, warnings and cautions directly below a title or challenge item is
//! folded into it; anything else becomes a detail-only comment.

use super::cipher;
use super::schema::{
    CategoryGroup, ChecklistEntry, Container, Item, Metadata, Payload, SubGroup, COMMENT_TYPE,
    CONTAINER_TYPE, SCHEMA_VERSION,
};
use crate::core::model::new_id;
use crate::core::{ChecklistFile, ChecklistItem, GroupCategory, ItemKind};
use crate::io::formats::utils::{annotation_line, push_line, should_merge_notes};
use crate::Result;

/// Category order of the top-level groups.
const CATEGORY_ORDER: [GroupCategory; 3] = [
    GroupCategory::Normal,
    GroupCategory::Abnormal,
    GroupCategory::Emergency,
];

/// Encrypt a checklist file into `.fmd` bytes.
pub fn serialize(file: &ChecklistFile) -> Result<Vec<u8>> {
    let json = serde_json::to_vec(&to_container(file))
        .map_err(|e| crate::CodecError::Other(format!("failed to encode ForeFlight JSON: {e}")))?;
    cipher::encrypt(&json)
}

/// Build the plaintext document.
pub fn to_container(file: &ChecklistFile) -> Container {
    if !file.metadata.copyright.is_empty() {
        tracing::warn!(
            file = %file.name,
            "ForeFlight has no copyright field, dropping it"
        );
    }

    let groups = CATEGORY_ORDER
        .iter()
        .filter_map(|&category| {
            let items: Vec<SubGroup> = file
                .groups
                .iter()
                .filter(|g| g.category == category)
                .map(|g| SubGroup {
                    object_id: new_id(),
                    title: g.name.clone(),
                    items: g
                        .checklists
                        .iter()
                        .map(|c| ChecklistEntry {
                            object_id: new_id(),
                            title: c.name.clone(),
                            items: write_items(&c.items),
                        })
                        .collect(),
                })
                .collect();
            (!items.is_empty()).then(|| CategoryGroup {
                object_id: new_id(),
                group_type: serde_json::Value::String(category.as_str().to_string()),
                items,
            })
        })
        .collect();

    Container {
        kind: CONTAINER_TYPE.to_string(),
        payload: Payload {
            object_id: new_id(),
            schema_version: SCHEMA_VERSION.to_string(),
            metadata: Metadata {
                name: file.name.clone(),
                detail: file.metadata.make_model.clone(),
                tail_number: file.metadata.aircraft_registration.clone(),
            },
            groups,
        },
    }
}

/// Which entry the current run of annotations belongs to.
enum Attach<'a> {
    /// Merge into the last entry, which came from this item
    Target(&'a ChecklistItem),
    /// The last entry is a detail-only comment for annotations at this indent
    Standalone(u8),
    None,
}

/// Convert checklist items, applying the annotation merge rule.
pub fn write_items(items: &[ChecklistItem]) -> Vec<Item> {
    let mut out: Vec<Item> = Vec::new();
    let mut attach = Attach::None;

    for item in items {
        let Some(line) = annotation_line(item) else {
            out.push(entry_for(item));
            // An untitled comment carrying detail reads back as annotations
            attach = match &item.kind {
                ItemKind::Title(text) if text.is_empty() => Attach::None,
                _ => Attach::Target(item),
            };
            continue;
        };

        let merged = match (&attach, out.last_mut()) {
            (Attach::Target(target), Some(entry)) if should_merge_notes(target, item) => {
                let field = if entry.is_comment() {
                    &mut entry.detail
                } else {
                    &mut entry.note
                };
                push_line(field.get_or_insert_with(String::new), &line);
                true
            }
            (Attach::Standalone(indent), Some(entry)) if *indent == item.indent => {
                push_line(entry.detail.get_or_insert_with(String::new), &line);
                true
            }
            _ => false,
        };
        if !merged {
            out.push(Item {
                object_id: new_id(),
                kind: Some(COMMENT_TYPE.to_string()),
                title: String::new(),
                detail: Some(line),
                note: None,
            });
            attach = Attach::Standalone(item.indent);
        }
    }
    out
}

fn entry_for(item: &ChecklistItem) -> Item {
    let mut entry = Item {
        object_id: new_id(),
        ..Item::default()
    };
    match &item.kind {
        ItemKind::Title(text) => {
            entry.kind = Some(COMMENT_TYPE.to_string());
            entry.title = text.clone();
        }
        ItemKind::ChallengeResponse {
            challenge,
            response,
        } => {
            entry.title = challenge.clone();
            if !response.is_empty() {
                entry.detail = Some(response.clone());
            }
        }
        ItemKind::ChallengeOnly(text) => entry.title = text.clone(),
        // Annotations never reach here
        ItemKind::Note(text) | ItemKind::Warning(text) | ItemKind::Caution(text) => {
            entry.kind = Some(COMMENT_TYPE.to_string());
            entry.detail = Some(text.clone());
        }
    }
    entry
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(items: &[Item]) -> Vec<(bool, &str, Option<&str>, Option<&str>)> {
        items
            .iter()
            .map(|i| (i.is_comment(), i.title.as_str(), i.detail.as_deref(), i.note.as_deref()))
            .collect()
    }

    #[test]
    fn test_notes_merge_into_challenge_and_title() {
        let items = write_items(&[
            ChecklistItem::title("Cabin"),
            ChecklistItem::warning("Hot").with_indent(1),
            ChecklistItem::challenge_response("Fuel", "ON"),
            ChecklistItem::note("Both tanks").with_indent(1),
            ChecklistItem::caution("Vent").with_indent(1),
        ]);
        assert_eq!(
            summary(&items),
            vec![
                (true, "Cabin", Some("WARNING: Hot"), None),
                (false, "Fuel", Some("ON"), Some("Both tanks\nCAUTION: Vent")),
            ]
        );
    }

    #[test]
    fn test_note_at_same_indent_is_standalone() {
        // Characterizes the merge rule: a note at the target's own indent
        // does not attach to it, and consecutive such notes share one comment
        let items = write_items(&[
            ChecklistItem::challenge("Belts"),
            ChecklistItem::note("first"),
            ChecklistItem::note("second"),
            ChecklistItem::note("deeper").with_indent(1),
        ]);
        assert_eq!(
            summary(&items),
            vec![
                (false, "Belts", None, None),
                (true, "", Some("first\nsecond"), None),
                (true, "", Some("deeper"), None),
            ]
        );
    }

    #[test]
    fn test_note_after_note_never_merges_into_note() {
        let items = write_items(&[
            ChecklistItem::note("lead"),
            ChecklistItem::note("child").with_indent(1),
        ]);
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_empty_title_keeps_its_annotations_apart() {
        let items = write_items(&[
            ChecklistItem::title(""),
            ChecklistItem::note("under").with_indent(1),
        ]);
        assert_eq!(
            summary(&items),
            vec![(true, "", None, None), (true, "", Some("under"), None)]
        );
    }

    #[test]
    fn test_broken_run_stops_merging() {
        let items = write_items(&[
            ChecklistItem::challenge("Mags"),
            ChecklistItem::note("standalone").with_indent(2),
            ChecklistItem::note("would merge").with_indent(1),
        ]);
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].note, None);
    }

    #[test]
    fn test_empty_categories_are_skipped() {
        use crate::core::{ChecklistGroup, Format, ParsedChecklistFile};
        let mut parsed = ParsedChecklistFile::new("x", Format::ForeFlight);
        parsed
            .groups
            .push(ChecklistGroup::new("Fire", GroupCategory::Emergency));
        let container = to_container(&parsed.into_file());
        assert_eq!(container.payload.groups.len(), 1);
        assert_eq!(container.payload.groups[0].group_type, "emergency");
    }
}

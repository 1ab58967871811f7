// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Model to Garmin Pilot package.

use super::archive;
use super::schema::{
    Package, PackageChecklist, PackageItem, DATA_MODEL_VERSION, PACKAGE_TYPE,
    PACKAGE_TYPE_VERSION,
};
use super::tables::{catch_all, live_data_type, pair_for, CHECK_ITEM, NOTE_ITEM};
use crate::core::model::new_id;
use crate::core::{ChecklistFile, ChecklistItem, ItemKind};
use crate::io::formats::utils::{annotation_line, push_line, should_merge_notes};
use crate::{CodecError, Result};

/// Serialize to `.gplt` bytes. Blocking; the codec runs it off the async
/// runtime.
pub fn serialize(file: &ChecklistFile) -> Result<Vec<u8>> {
    let json = serde_json::to_vec_pretty(&to_package(file))
        .map_err(|e| CodecError::Other(format!("failed to encode content.json: {e}")))?;
    archive::pack(&json)
}

/// Build `content.json`.
pub fn to_package(file: &ChecklistFile) -> Package {
    let mut package = Package {
        data_model_version: DATA_MODEL_VERSION,
        package_type_version: PACKAGE_TYPE_VERSION,
        kind: PACKAGE_TYPE.to_string(),
        name: file.name.clone(),
        checklists: Vec::new(),
        checklist_items: Vec::new(),
    };

    for group in &file.groups {
        let (kind, subtype) = pair_for(group.category, &group.name).unwrap_or_else(|| {
            let (pair, name) = catch_all(group.category);
            tracing::warn!(
                group = %group.name,
                category = group.category.as_str(),
                "no Garmin Pilot checklist type for group, using {name}"
            );
            pair
        });

        for checklist in &group.checklists {
            let items = write_items(&checklist.items);
            package.checklists.push(PackageChecklist {
                uuid: new_id(),
                name: checklist.name.clone(),
                kind,
                subtype,
                checklist_items: items.iter().map(|i| i.uuid.clone()).collect(),
            });
            package.checklist_items.extend(items);
        }
    }
    package
}

/// Convert checklist items, folding annotations into the check item above.
pub fn write_items(items: &[ChecklistItem]) -> Vec<PackageItem> {
    let mut out: Vec<PackageItem> = Vec::new();
    let mut target: Option<&ChecklistItem> = None;

    for item in items {
        if let Some(line) = annotation_line(item) {
            let merged = match (target, out.last_mut()) {
                (Some(t), Some(last)) if should_merge_notes(t, item) => {
                    push_line(&mut last.notes, &line);
                    true
                }
                _ => false,
            };
            if !merged {
                out.push(note_item(line));
                target = None;
            }
            continue;
        }

        match &item.kind {
            ItemKind::Title(text) => {
                tracing::debug!(title = %text, "Garmin Pilot has no titles, writing a note");
                out.push(note_item(text.clone()));
                target = None;
            }
            ItemKind::ChallengeResponse {
                challenge,
                response,
            } => {
                let (item_type, action) = match live_data_type(response) {
                    Some(item_type) => (item_type, String::new()),
                    None => (CHECK_ITEM, response.clone()),
                };
                out.push(PackageItem {
                    uuid: new_id(),
                    item_type,
                    title: challenge.clone(),
                    action,
                    notes: String::new(),
                });
                target = Some(item);
            }
            ItemKind::ChallengeOnly(text) => {
                out.push(PackageItem {
                    uuid: new_id(),
                    item_type: CHECK_ITEM,
                    title: text.clone(),
                    action: String::new(),
                    notes: String::new(),
                });
                target = Some(item);
            }
            ItemKind::Note(_) | ItemKind::Warning(_) | ItemKind::Caution(_) => {}
        }
    }
    out
}

fn note_item(title: String) -> PackageItem {
    PackageItem {
        uuid: new_id(),
        item_type: NOTE_ITEM,
        title,
        action: String::new(),
        notes: String::new(),
    }
}

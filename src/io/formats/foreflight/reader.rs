// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! ForeFlight document to model.

use super::cipher;
use super::schema::{CategoryGroup, Container, Item, CONTAINER_TYPE, SCHEMA_VERSION};
use crate::core::model::file_stem;
use crate::core::{
    Checklist, ChecklistGroup, ChecklistItem, Format, GroupCategory, ParsedChecklistFile,
};
use crate::io::formats::utils::split_annotations;
use crate::{CodecError, Result};

/// Decrypt and parse a `.fmd` buffer.
pub fn parse(data: &[u8], file_name: &str) -> Result<ParsedChecklistFile> {
    let plaintext = cipher::decrypt(data)?;
    let container: Container = serde_json::from_slice(&plaintext)?;
    from_container(container, file_name)
}

/// Convert an already-decrypted document.
pub fn from_container(container: Container, file_name: &str) -> Result<ParsedChecklistFile> {
    if container.kind != CONTAINER_TYPE {
        return Err(CodecError::malformed_header(
            "ForeFlight",
            format!("unexpected container type {:?}", container.kind),
        ));
    }
    let payload = container.payload;
    if payload.schema_version != SCHEMA_VERSION {
        return Err(CodecError::malformed_header(
            "ForeFlight",
            format!("unsupported schema version {:?}", payload.schema_version),
        ));
    }

    let name = if payload.metadata.name.is_empty() {
        file_stem(file_name).to_string()
    } else {
        payload.metadata.name
    };
    let mut file = ParsedChecklistFile::new(name, Format::ForeFlight);
    file.metadata.make_model = payload.metadata.detail;
    file.metadata.aircraft_registration = payload.metadata.tail_number;

    for top in payload.groups {
        let category = category_of(&top);
        for sub in top.items {
            let checklists = sub
                .items
                .into_iter()
                .map(|entry| {
                    Checklist::new(entry.title)
                        .with_items(entry.items.iter().flat_map(read_item).collect())
                })
                .collect();
            file.groups
                .push(ChecklistGroup::new(sub.title, category).with_checklists(checklists));
        }
    }

    tracing::debug!(
        groups = file.groups.len(),
        checklists = file.checklist_count(),
        "parsed ForeFlight file"
    );
    Ok(file)
}

/// Map `groupType`, given either as a name or as a number.
pub fn category_of(group: &CategoryGroup) -> GroupCategory {
    match &group.group_type {
        serde_json::Value::String(s) => match s.to_ascii_lowercase().as_str() {
            "abnormal" => GroupCategory::Abnormal,
            "emergency" => GroupCategory::Emergency,
            _ => GroupCategory::Normal,
        },
        serde_json::Value::Number(n) => match n.as_i64() {
            Some(1) => GroupCategory::Abnormal,
            Some(2) => GroupCategory::Emergency,
            _ => GroupCategory::Normal,
        },
        _ => GroupCategory::Normal,
    }
}

/// Expand one ForeFlight item into model items.
fn read_item(item: &Item) -> Vec<ChecklistItem> {
    let detail = item.detail.as_deref().unwrap_or_default();
    if item.is_comment() {
        if item.title.is_empty() {
            if detail.is_empty() {
                // Bare comment: an untitled section break
                return vec![ChecklistItem::title("")];
            }
            return split_annotations(detail, 0);
        }
        let mut items = vec![ChecklistItem::title(&item.title)];
        items.extend(split_annotations(detail, 1));
        return items;
    }

    let head = if detail.is_empty() {
        ChecklistItem::challenge(&item.title)
    } else {
        ChecklistItem::challenge_response(&item.title, detail)
    };
    let mut items = vec![head];
    items.extend(split_annotations(
        item.note.as_deref().unwrap_or_default(),
        1,
    ));
    items
}

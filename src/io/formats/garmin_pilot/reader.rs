// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Garmin Pilot package to model.

use std::collections::HashMap;

use super::archive;
use super::schema::{Package, PackageItem, PACKAGE_TYPE};
use super::tables::{fallback_group, group_for, live_data_token, CHECK_ITEM, NOTE_ITEM};
use crate::core::model::file_stem;
use crate::core::{
    Checklist, ChecklistGroup, ChecklistItem, Format, GroupCategory, ParsedChecklistFile,
};
use crate::io::formats::utils::{parse_annotation_line, split_annotations};
use crate::{CodecError, Result};

/// Parse a `.gplt` buffer. Blocking; the codec runs it off the async runtime.
pub fn parse(data: &[u8], file_name: &str) -> Result<ParsedChecklistFile> {
    let content = archive::unpack(data)?;
    let package: Package = serde_json::from_slice(&content)?;
    from_package(package, file_name)
}

/// Convert a decoded `content.json`.
pub fn from_package(package: Package, file_name: &str) -> Result<ParsedChecklistFile> {
    if package.kind != PACKAGE_TYPE {
        return Err(CodecError::schema(
            "Garmin Pilot content.json",
            format!("unexpected package type {:?}", package.kind),
        ));
    }

    let items: HashMap<&str, &PackageItem> = package
        .checklist_items
        .iter()
        .map(|item| (item.uuid.as_str(), item))
        .collect();

    let mut checklists: Vec<_> = package.checklists.iter().collect();
    // Stable: equal keys keep their input order
    checklists.sort_by_key(|c| (c.kind, c.subtype));

    let name = if package.name.is_empty() {
        file_stem(file_name).to_string()
    } else {
        package.name.clone()
    };
    let mut file = ParsedChecklistFile::new(name, Format::GarminPilot);
    let mut group_index: HashMap<(GroupCategory, &'static str), usize> = HashMap::new();

    for source in checklists {
        let key = group_for(source.kind, source.subtype).unwrap_or_else(|| {
            let fallback = fallback_group(source.kind);
            tracing::warn!(
                checklist = %source.name,
                kind = source.kind,
                subtype = source.subtype,
                "unknown Garmin Pilot checklist type, using {}",
                fallback.1
            );
            fallback
        });

        let mut checklist = Checklist::new(&source.name);
        for uuid in &source.checklist_items {
            let item = items.get(uuid.as_str()).ok_or_else(|| {
                CodecError::schema(
                    format!("Garmin Pilot checklist {:?}", source.name),
                    format!("reference to missing item {uuid}"),
                )
            })?;
            checklist.items.extend(read_item(item)?);
        }

        let index = *group_index.entry(key).or_insert_with(|| {
            file.groups.push(ChecklistGroup::new(key.1, key.0));
            file.groups.len() - 1
        });
        file.groups[index].checklists.push(checklist);
    }

    tracing::debug!(
        groups = file.groups.len(),
        checklists = file.checklist_count(),
        "parsed Garmin Pilot package"
    );
    Ok(file)
}

fn read_item(item: &PackageItem) -> Result<Vec<ChecklistItem>> {
    let head = match item.item_type {
        CHECK_ITEM if item.action.is_empty() => ChecklistItem::challenge(&item.title),
        CHECK_ITEM => ChecklistItem::challenge_response(&item.title, &item.action),
        NOTE_ITEM => return Ok(vec![parse_annotation_line(&item.title, 0)]),
        other => match live_data_token(other) {
            Some(token) => ChecklistItem::challenge_response(&item.title, token),
            None => {
                return Err(CodecError::schema(
                    format!("Garmin Pilot item {}", item.uuid),
                    format!("unknown item type {other}"),
                ))
            }
        },
    };
    let mut items = vec![head];
    items.extend(split_annotations(&item.notes, 1));
    Ok(items)
}

// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Legacy third-party JSON schema, accepted on input only.
//!
//! Groups and checklists carry a `title`, items a `prompt`/`expectation`
//! pair and an `ITEM_*` type token.

use serde::Deserialize;

use crate::core::model::file_stem;
use crate::core::{
    Checklist, ChecklistGroup, ChecklistItem, Format, GroupCategory, ParsedChecklistFile,
};
use crate::{CodecError, Result};

/// Prefix shared by all legacy item type tokens.
pub const ITEM_TYPE_PREFIX: &str = "ITEM_";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyFile {
    #[serde(default)]
    pub groups: Vec<LegacyGroup>,
    #[serde(default)]
    pub metadata: LegacyMetadata,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyMetadata {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub make_and_model: String,
    #[serde(default)]
    pub aircraft_info: String,
    #[serde(default)]
    pub copyright_info: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LegacyGroup {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub checklists: Vec<LegacyChecklist>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LegacyChecklist {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub items: Vec<LegacyItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LegacyItem {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub expectation: String,
    #[serde(default)]
    pub indent: u8,
    #[serde(default)]
    pub centered: bool,
}

/// Whether a parsed JSON document uses the legacy schema.
///
/// Legacy when any group has `title` but no `name`, or any item's `type`
/// starts with `ITEM_`.
pub fn is_legacy(value: &serde_json::Value) -> bool {
    let Some(groups) = value.get("groups").and_then(|g| g.as_array()) else {
        return false;
    };
    groups.iter().any(|group| {
        let titled = group.get("title").is_some() && group.get("name").is_none();
        titled
            || group
                .get("checklists")
                .and_then(|c| c.as_array())
                .into_iter()
                .flatten()
                .filter_map(|checklist| checklist.get("items").and_then(|i| i.as_array()))
                .flatten()
                .filter_map(|item| item.get("type").and_then(|t| t.as_str()))
                .any(|kind| kind.starts_with(ITEM_TYPE_PREFIX))
    })
}

fn category_of(category: Option<&str>) -> GroupCategory {
    let Some(raw) = category else {
        return GroupCategory::Normal;
    };
    let name = raw.to_ascii_lowercase();
    match name.trim_start_matches("category_") {
        "emergency" => GroupCategory::Emergency,
        "abnormal" => GroupCategory::Abnormal,
        _ => GroupCategory::Normal,
    }
}

/// Map one legacy item; `None` for spacers.
fn convert_item(item: LegacyItem, location: &str) -> Result<Option<ChecklistItem>> {
    let converted = match item.kind.as_str() {
        "ITEM_CHALLENGE" => ChecklistItem::challenge(item.prompt),
        "ITEM_CHALLENGE_RESPONSE" => ChecklistItem::challenge_response(item.prompt, item.expectation),
        "ITEM_TITLE" => ChecklistItem::title(item.prompt),
        "ITEM_WARNING" => ChecklistItem::warning(item.prompt),
        "ITEM_CAUTION" => ChecklistItem::caution(item.prompt),
        "ITEM_NOTE" | "ITEM_PLAINTEXT" => ChecklistItem::note(item.prompt),
        "ITEM_SPACE" => return Ok(None),
        other => {
            return Err(CodecError::schema(
                location,
                format!("unsupported legacy item type {other:?}"),
            ))
        }
    };
    Ok(Some(
        converted
            .with_centered(item.centered)
            .with_indent(item.indent),
    ))
}

impl LegacyFile {
    /// Build the model.
    pub fn into_model(self, file_name: &str) -> Result<ParsedChecklistFile> {
        let name = if self.metadata.name.is_empty() {
            file_stem(file_name).to_string()
        } else {
            self.metadata.name
        };
        let mut file = ParsedChecklistFile::new(name, Format::Json);
        file.metadata.make_model = self.metadata.make_and_model;
        file.metadata.aircraft_registration = self.metadata.aircraft_info;
        file.metadata.copyright = self.metadata.copyright_info;

        for group in self.groups {
            let mut out = ChecklistGroup::new(group.title, category_of(group.category.as_deref()));
            for checklist in group.checklists {
                let location = format!("legacy checklist {:?}", checklist.title);
                let mut items = Vec::with_capacity(checklist.items.len());
                for item in checklist.items {
                    if let Some(item) = convert_item(item, &location)? {
                        items.push(item);
                    }
                }
                out.checklists
                    .push(Checklist::new(checklist.title).with_items(items));
            }
            file.groups.push(out);
        }
        Ok(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_detection() {
        assert!(is_legacy(&json!({"groups": [{"title": "G", "checklists": []}]})));
        assert!(is_legacy(&json!({"groups": [{"name": "G", "checklists": [
            {"name": "C", "items": [{"type": "ITEM_NOTE"}]}
        ]}]})));
        assert!(!is_legacy(&json!({"groups": [{"name": "G", "checklists": [
            {"name": "C", "items": [{"type": "note"}]}
        ]}]})));
        assert!(!is_legacy(&json!({"groups": []})));
        assert!(!is_legacy(&json!([1, 2])));
    }

    #[test]
    fn test_item_mapping() {
        let value = json!({
            "groups": [{"title": "G", "category": "CATEGORY_EMERGENCY", "checklists": [{"title": "C", "items": [
                {"type": "ITEM_TITLE", "prompt": "X"},
                {"type": "ITEM_SPACE"},
                {"type": "ITEM_CHALLENGE_RESPONSE", "prompt": "Fuel", "expectation": "ON", "indent": 1},
                {"type": "ITEM_PLAINTEXT", "prompt": "Plain"},
                {"type": "ITEM_CHALLENGE", "prompt": "Belts", "centered": true}
            ]}]}],
            "metadata": {"name": "Legacy", "makeAndModel": "C150", "aircraftInfo": "N150", "copyrightInfo": "me"}
        });
        let legacy: LegacyFile = serde_json::from_value(value).unwrap();
        let file = legacy.into_model("x.json").unwrap();
        assert_eq!(file.name, "Legacy");
        assert_eq!(file.metadata.make_model, "C150");
        assert_eq!(file.metadata.aircraft_registration, "N150");
        assert_eq!(file.metadata.copyright, "me");
        assert_eq!(file.groups[0].category, GroupCategory::Emergency);
        assert_eq!(
            file.groups[0].checklists[0].items,
            vec![
                ChecklistItem::title("X"),
                ChecklistItem::challenge_response("Fuel", "ON").with_indent(1),
                ChecklistItem::note("Plain"),
                ChecklistItem::challenge("Belts").with_centered(true),
            ]
        );
    }

    #[test]
    fn test_unknown_item_type_is_rejected() {
        let value = json!({"groups": [{"title": "G", "checklists": [{"title": "C", "items": [
            {"type": "ITEM_UNKNOWN", "prompt": "?"}
        ]}]}]});
        let legacy: LegacyFile = serde_json::from_value(value).unwrap();
        assert!(matches!(
            legacy.into_model("x.json"),
            Err(CodecError::SchemaViolation { .. })
        ));
    }
}

// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! The tool's own JSON schema.
//!
//! The model carries no serde derives; these records are the wire shape
//! and convert to and from it.

use serde::{Deserialize, Serialize};

use crate::core::model::file_stem;
use crate::core::{
    Checklist, ChecklistFile, ChecklistGroup, ChecklistItem, Format, GroupCategory, ItemKind,
    ItemType, ParsedChecklistFile,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonFile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub format: String,
    pub groups: Vec<JsonGroup>,
    #[serde(default)]
    pub metadata: JsonMetadata,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonGroup {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: JsonCategory,
    #[serde(default)]
    pub checklists: Vec<JsonChecklist>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonCategory {
    #[default]
    Normal,
    Emergency,
    Abnormal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonChecklist {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub items: Vec<JsonItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonItem {
    #[serde(rename = "type")]
    pub kind: JsonItemType,
    #[serde(default)]
    pub challenge_text: String,
    #[serde(default)]
    pub response_text: String,
    #[serde(default)]
    pub indent: u8,
    #[serde(default)]
    pub centered: bool,
    #[serde(default)]
    pub collapsible: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JsonItemType {
    ChallengeResponse,
    ChallengeOnly,
    Title,
    Note,
    Warning,
    Caution,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonMetadata {
    #[serde(default)]
    pub aircraft_registration: String,
    #[serde(default)]
    pub make_model: String,
    #[serde(default)]
    pub copyright: String,
}

impl From<GroupCategory> for JsonCategory {
    fn from(category: GroupCategory) -> Self {
        match category {
            GroupCategory::Normal => JsonCategory::Normal,
            GroupCategory::Emergency => JsonCategory::Emergency,
            GroupCategory::Abnormal => JsonCategory::Abnormal,
        }
    }
}

impl From<JsonCategory> for GroupCategory {
    fn from(category: JsonCategory) -> Self {
        match category {
            JsonCategory::Normal => GroupCategory::Normal,
            JsonCategory::Emergency => GroupCategory::Emergency,
            JsonCategory::Abnormal => GroupCategory::Abnormal,
        }
    }
}

impl From<ItemType> for JsonItemType {
    fn from(item_type: ItemType) -> Self {
        match item_type {
            ItemType::ChallengeResponse => JsonItemType::ChallengeResponse,
            ItemType::ChallengeOnly => JsonItemType::ChallengeOnly,
            ItemType::Title => JsonItemType::Title,
            ItemType::Note => JsonItemType::Note,
            ItemType::Warning => JsonItemType::Warning,
            ItemType::Caution => JsonItemType::Caution,
        }
    }
}

impl From<JsonItemType> for ItemType {
    fn from(kind: JsonItemType) -> Self {
        match kind {
            JsonItemType::ChallengeResponse => ItemType::ChallengeResponse,
            JsonItemType::ChallengeOnly => ItemType::ChallengeOnly,
            JsonItemType::Title => ItemType::Title,
            JsonItemType::Note => ItemType::Note,
            JsonItemType::Warning => ItemType::Warning,
            JsonItemType::Caution => ItemType::Caution,
        }
    }
}

impl JsonFile {
    /// Project a file onto the wire shape, dropping runtime-only fields.
    pub fn from_model(file: &ChecklistFile) -> Self {
        Self {
            name: file.name.clone(),
            format: file.format.as_str().to_string(),
            groups: file
                .groups
                .iter()
                .map(|g| JsonGroup {
                    id: g.id.clone(),
                    name: g.name.clone(),
                    category: g.category.into(),
                    checklists: g
                        .checklists
                        .iter()
                        .map(|c| JsonChecklist {
                            id: c.id.clone(),
                            name: c.name.clone(),
                            items: c.items.iter().map(JsonItem::from_model).collect(),
                        })
                        .collect(),
                })
                .collect(),
            metadata: JsonMetadata {
                aircraft_registration: file.metadata.aircraft_registration.clone(),
                make_model: file.metadata.make_model.clone(),
                copyright: file.metadata.copyright.clone(),
            },
        }
    }

    /// Build the model; stored ids are ignored and regenerated.
    pub fn into_model(self, file_name: &str) -> ParsedChecklistFile {
        let name = if self.name.is_empty() {
            file_stem(file_name).to_string()
        } else {
            self.name
        };
        let mut file = ParsedChecklistFile::new(name, Format::Json);
        file.metadata.aircraft_registration = self.metadata.aircraft_registration;
        file.metadata.make_model = self.metadata.make_model;
        file.metadata.copyright = self.metadata.copyright;
        file.groups = self
            .groups
            .into_iter()
            .map(|g| {
                ChecklistGroup::new(g.name, g.category.into()).with_checklists(
                    g.checklists
                        .into_iter()
                        .map(|c| {
                            Checklist::new(c.name)
                                .with_items(c.items.into_iter().map(JsonItem::into_model).collect())
                        })
                        .collect(),
                )
            })
            .collect();
        file
    }
}

impl JsonItem {
    fn from_model(item: &ChecklistItem) -> Self {
        Self {
            kind: item.item_type().into(),
            challenge_text: item.text().to_string(),
            response_text: item.response().unwrap_or_default().to_string(),
            indent: item.indent,
            centered: item.centered,
            collapsible: item.collapsible,
        }
    }

    fn into_model(self) -> ChecklistItem {
        ChecklistItem::new(ItemKind::from_parts(
            self.kind.into(),
            self.challenge_text,
            self.response_text,
        ))
        .with_centered(self.centered)
        .with_indent(self.indent)
        .with_collapsible(self.collapsible)
    }
}

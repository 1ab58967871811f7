// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Serde shapes of the decrypted ForeFlight document.
//!
//! ```text
//! { type: "checklist",
//!   payload: { objectId, schemaVersion: "1.0",
//!              metadata: { name, detail, tailNumber },
//!              groups: [ { objectId, groupType,          per category
//!                          items: [ { objectId, title,    model group
//!                                     items: [ { objectId, title,   checklist
//!                                                items: [ item ] } ] } ] } ] } }
//! ```

use serde::{Deserialize, Serialize};

/// Value of the top-level `type` field.
pub const CONTAINER_TYPE: &str = "checklist";
/// Only supported `schemaVersion`.
pub const SCHEMA_VERSION: &str = "1.0";
/// Item `type` for non-check content.
pub const COMMENT_TYPE: &str = "comment";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Container {
    #[serde(rename = "type")]
    pub kind: String,
    pub payload: Payload,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payload {
    #[serde(default)]
    pub object_id: String,
    pub schema_version: String,
    #[serde(default)]
    pub metadata: Metadata,
    #[serde(default)]
    pub groups: Vec<CategoryGroup>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub detail: String,
    #[serde(default)]
    pub tail_number: String,
}

/// Top-level group, one per category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryGroup {
    #[serde(default)]
    pub object_id: String,
    /// String (`"normal"`, ...) or number (1 abnormal, 2 emergency)
    #[serde(default)]
    pub group_type: serde_json::Value,
    #[serde(default)]
    pub items: Vec<SubGroup>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubGroup {
    #[serde(default)]
    pub object_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub items: Vec<ChecklistEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistEntry {
    #[serde(default)]
    pub object_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub items: Vec<Item>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(default)]
    pub object_id: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Item {
    pub fn is_comment(&self) -> bool {
        self.kind.as_deref() == Some(COMMENT_TYPE)
    }
}

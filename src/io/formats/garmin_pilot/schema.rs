// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Serde shapes of `content.json`.
//!
//! Checklists reference their items by UUID; items live in one flat list.

use serde::{Deserialize, Serialize};

/// Value of the top-level `type` field.
pub const PACKAGE_TYPE: &str = "checklistPkg";
pub const DATA_MODEL_VERSION: u32 = 1;
pub const PACKAGE_TYPE_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    #[serde(default)]
    pub data_model_version: u32,
    #[serde(default)]
    pub package_type_version: u32,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub checklists: Vec<PackageChecklist>,
    #[serde(default)]
    pub checklist_items: Vec<PackageItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageChecklist {
    pub uuid: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: u32,
    #[serde(default)]
    pub subtype: u32,
    /// Item UUIDs in order
    #[serde(default)]
    pub checklist_items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageItem {
    pub uuid: String,
    pub item_type: u32,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub action: String,
    /// Newline-separated annotations attached to a check item
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub notes: String,
}

// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Unified in-memory checklist model.
//!
//! Every codec reads into and writes from these types. Hierarchy inside a
//! checklist is implicit: items are a flat sequence and an item's parent is
//! the nearest preceding item with a strictly lower indent. Use
//! [`Checklist::parent_of`] when a tree view is needed instead of storing one.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::Format;

/// Deepest indent level an item may have.
pub const MAX_INDENT: u8 = 3;

/// Generate a fresh identifier for groups, checklists and files.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Field-less discriminant of [`ItemKind`], used by format lookup tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemType {
    ChallengeResponse,
    ChallengeOnly,
    Title,
    Note,
    Warning,
    Caution,
}

impl ItemType {
    /// Notes, warnings and cautions annotate the item before them.
    pub fn is_annotation(&self) -> bool {
        matches!(self, ItemType::Note | ItemType::Warning | ItemType::Caution)
    }

    /// Items that are checked off by the pilot.
    pub fn is_challenge(&self) -> bool {
        matches!(self, ItemType::ChallengeResponse | ItemType::ChallengeOnly)
    }
}

/// Content of a checklist line; which text fields exist depends on the kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemKind {
    ChallengeResponse { challenge: String, response: String },
    ChallengeOnly(String),
    Title(String),
    Note(String),
    Warning(String),
    Caution(String),
}

impl ItemKind {
    /// Build a kind of the given type from a primary text and optional response.
    ///
    /// The response is only kept for [`ItemType::ChallengeResponse`].
    pub fn from_parts(item_type: ItemType, text: impl Into<String>, response: impl Into<String>) -> Self {
        let text = text.into();
        match item_type {
            ItemType::ChallengeResponse => ItemKind::ChallengeResponse {
                challenge: text,
                response: response.into(),
            },
            ItemType::ChallengeOnly => ItemKind::ChallengeOnly(text),
            ItemType::Title => ItemKind::Title(text),
            ItemType::Note => ItemKind::Note(text),
            ItemType::Warning => ItemKind::Warning(text),
            ItemType::Caution => ItemKind::Caution(text),
        }
    }

    pub fn item_type(&self) -> ItemType {
        match self {
            ItemKind::ChallengeResponse { .. } => ItemType::ChallengeResponse,
            ItemKind::ChallengeOnly(_) => ItemType::ChallengeOnly,
            ItemKind::Title(_) => ItemType::Title,
            ItemKind::Note(_) => ItemType::Note,
            ItemKind::Warning(_) => ItemType::Warning,
            ItemKind::Caution(_) => ItemType::Caution,
        }
    }

    /// The challenge text, or the only text for non-challenge kinds.
    pub fn text(&self) -> &str {
        match self {
            ItemKind::ChallengeResponse { challenge, .. } => challenge,
            ItemKind::ChallengeOnly(text)
            | ItemKind::Title(text)
            | ItemKind::Note(text)
            | ItemKind::Warning(text)
            | ItemKind::Caution(text) => text,
        }
    }

    /// The response text, only present on challenge/response items.
    pub fn response(&self) -> Option<&str> {
        match self {
            ItemKind::ChallengeResponse { response, .. } => Some(response),
            _ => None,
        }
    }
}

/// One line of a checklist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistItem {
    pub kind: ItemKind,
    /// Nesting depth, 0..=[`MAX_INDENT`]
    pub indent: u8,
    /// Rendered centered; indent is ignored
    pub centered: bool,
    /// Editor hint only
    pub collapsible: bool,
}

impl ChecklistItem {
    pub fn new(kind: ItemKind) -> Self {
        Self {
            kind,
            indent: 0,
            centered: false,
            collapsible: false,
        }
    }

    pub fn challenge_response(challenge: impl Into<String>, response: impl Into<String>) -> Self {
        Self::new(ItemKind::ChallengeResponse {
            challenge: challenge.into(),
            response: response.into(),
        })
    }

    pub fn challenge(text: impl Into<String>) -> Self {
        Self::new(ItemKind::ChallengeOnly(text.into()))
    }

    pub fn title(text: impl Into<String>) -> Self {
        Self::new(ItemKind::Title(text.into()))
    }

    pub fn note(text: impl Into<String>) -> Self {
        Self::new(ItemKind::Note(text.into()))
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(ItemKind::Warning(text.into()))
    }

    pub fn caution(text: impl Into<String>) -> Self {
        Self::new(ItemKind::Caution(text.into()))
    }

    /// Set the indent, clamped to [`MAX_INDENT`]. Ignored on centered items.
    pub fn with_indent(mut self, indent: u8) -> Self {
        self.indent = if self.centered {
            0
        } else {
            indent.min(MAX_INDENT)
        };
        self
    }

    /// Mark the item centered, which resets its indent.
    pub fn with_centered(mut self, centered: bool) -> Self {
        self.centered = centered;
        if centered {
            self.indent = 0;
        }
        self
    }

    pub fn with_collapsible(mut self, collapsible: bool) -> Self {
        self.collapsible = collapsible;
        self
    }

    pub fn item_type(&self) -> ItemType {
        self.kind.item_type()
    }

    pub fn text(&self) -> &str {
        self.kind.text()
    }

    pub fn response(&self) -> Option<&str> {
        self.kind.response()
    }
}

/// Color/category hint for a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GroupCategory {
    #[default]
    Normal,
    Emergency,
    Abnormal,
}

impl GroupCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            GroupCategory::Normal => "normal",
            GroupCategory::Emergency => "emergency",
            GroupCategory::Abnormal => "abnormal",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checklist {
    pub id: String,
    pub name: String,
    pub items: Vec<ChecklistItem>,
}

impl Checklist {
    /// Create an empty checklist with a fresh id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            name: name.into(),
            items: Vec::new(),
        }
    }

    pub fn with_items(mut self, items: Vec<ChecklistItem>) -> Self {
        self.items = items;
        self
    }

    /// Index of the implicit parent of `index`: the nearest preceding item
    /// with a strictly lower indent.
    pub fn parent_of(&self, index: usize) -> Option<usize> {
        let indent = self.items.get(index)?.indent;
        self.items[..index]
            .iter()
            .rposition(|item| item.indent < indent)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistGroup {
    pub id: String,
    pub name: String,
    pub category: GroupCategory,
    pub checklists: Vec<Checklist>,
}

impl ChecklistGroup {
    /// Create an empty group with a fresh id.
    pub fn new(name: impl Into<String>, category: GroupCategory) -> Self {
        Self {
            id: new_id(),
            name: name.into(),
            category,
            checklists: Vec::new(),
        }
    }

    pub fn with_checklists(mut self, checklists: Vec<Checklist>) -> Self {
        self.checklists = checklists;
        self
    }
}

/// Free-text file metadata; empty strings when absent.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChecklistFileMetadata {
    pub aircraft_registration: String,
    pub make_model: String,
    pub copyright: String,
}

/// A checklist file as produced by a codec, without runtime-only fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedChecklistFile {
    pub name: String,
    pub format: Format,
    pub file_path: Option<String>,
    pub groups: Vec<ChecklistGroup>,
    pub metadata: ChecklistFileMetadata,
}

impl ParsedChecklistFile {
    pub fn new(name: impl Into<String>, format: Format) -> Self {
        Self {
            name: name.into(),
            format,
            file_path: None,
            groups: Vec::new(),
            metadata: ChecklistFileMetadata::default(),
        }
    }

    /// Stamp the runtime-only fields, producing an editable file.
    pub fn into_file(self) -> ChecklistFile {
        ChecklistFile {
            id: new_id(),
            name: self.name,
            format: self.format,
            file_path: self.file_path,
            groups: self.groups,
            metadata: self.metadata,
            last_modified: Utc::now(),
            dirty: false,
        }
    }

    /// Total number of checklists across all groups.
    pub fn checklist_count(&self) -> usize {
        self.groups.iter().map(|g| g.checklists.len()).sum()
    }
}

/// Root of the model as held by the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistFile {
    pub id: String,
    pub name: String,
    pub format: Format,
    pub file_path: Option<String>,
    pub groups: Vec<ChecklistGroup>,
    pub metadata: ChecklistFileMetadata,
    pub last_modified: DateTime<Utc>,
    pub dirty: bool,
}

impl ChecklistFile {
    /// Project away `id`, `dirty` and `last_modified`.
    pub fn to_parsed(&self) -> ParsedChecklistFile {
        ParsedChecklistFile {
            name: self.name.clone(),
            format: self.format,
            file_path: self.file_path.clone(),
            groups: self.groups.clone(),
            metadata: self.metadata.clone(),
        }
    }
}

/// Strip the directory and extension from a logical file name.
pub fn file_stem(file_name: &str) -> &str {
    let base = file_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(file_name);
    match base.rfind('.') {
        Some(pos) if pos > 0 => &base[..pos],
        _ => base,
    }
}

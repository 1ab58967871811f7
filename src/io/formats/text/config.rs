// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Configuration record for the line-oriented text formats.
//!
//! One [`TextFormatConfig`] fully describes a vendor dialect: how checklist
//! and item lines are numbered, how items are decorated and how long lines
//! are wrapped. The Dynon/AFS and GRT presets are built in; other dialects
//! can be loaded from TOML.
//!
//! # Example
//!
//! ```no_run
//! use efiscodec::io::formats::text::TextFormatConfig;
//!
//! let config = TextFormatConfig::from_toml_str(r#"
//!     max_line_length = 32
//!     uppercase = true
//! "#).unwrap();
//! assert_eq!(config.max_line_length, Some(32));
//! ```

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{CodecError, Result};

/// Placeholder for the checklist counter in line templates.
pub const CHECKLIST_NUM: &str = "checklistNum";
/// Placeholder for the item counter in line templates.
pub const ITEM_NUM: &str = "itemNum";

/// Description of a text checklist dialect.
///
/// Missing TOML keys fall back to the Dynon preset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextFormatConfig {
    /// Line prefix for checklist headers, may contain `{{checklistNum}}`
    pub checklist_template: String,
    /// Regex recognizing checklist headers, optional named group `checklistNum`
    pub checklist_regex: String,
    /// Line prefix for items, may contain `{{checklistNum}}` and `{{itemNum}}`
    pub item_template: String,
    /// Regex recognizing item lines, optional named groups `checklistNum`/`itemNum`
    pub item_regex: String,
    pub zero_based_checklists: bool,
    pub zero_based_items: bool,
    /// Spaces per indent level
    pub indent_width: usize,
    /// Maximum displayed width of an item line, excluding the numbering prefix
    pub max_line_length: Option<usize>,
    /// Separator between group and checklist name in headers
    pub group_separator: String,
    /// Write the first group's checklists without a group name
    pub omit_first_group_name: bool,
    pub note_prefix: String,
    pub warning_prefix: String,
    pub caution_prefix: String,
    /// Title prefix; the suffix is its mirror image
    pub title_prefix: String,
    pub response_separator: String,
    /// Marker starting a wrapped continuation line
    pub wrap_marker: String,
    pub comment_prefix: Option<String>,
    pub uppercase: bool,
    /// Start each checklist with a blank item line
    pub leading_blank_item: bool,
    /// Append a "Checklist Info" checklist carrying file metadata
    pub metadata_block: bool,
}

impl Default for TextFormatConfig {
    fn default() -> Self {
        Self::dynon()
    }
}

impl TextFormatConfig {
    /// Dynon SkyView / AFS dialect.
    pub fn dynon() -> Self {
        Self {
            checklist_template: "CHKLST{{checklistNum}}.TITLE,".to_string(),
            checklist_regex: r"^CHKLST(?P<checklistNum>\d+)\.TITLE,".to_string(),
            item_template: "CHKLST{{checklistNum}}.LINE{{itemNum}},".to_string(),
            item_regex: r"^CHKLST(?P<checklistNum>\d+)\.LINE(?P<itemNum>\d+),".to_string(),
            zero_based_checklists: true,
            zero_based_items: true,
            indent_width: 2,
            max_line_length: Some(40),
            group_separator: ": ".to_string(),
            omit_first_group_name: false,
            note_prefix: "NOTE: ".to_string(),
            warning_prefix: "WARNING: ".to_string(),
            caution_prefix: "CAUTION: ".to_string(),
            title_prefix: "** ".to_string(),
            response_separator: " - ".to_string(),
            wrap_marker: "+ ".to_string(),
            comment_prefix: Some("#".to_string()),
            uppercase: false,
            leading_blank_item: true,
            metadata_block: true,
        }
    }

    /// GRT dialect.
    pub fn grt() -> Self {
        Self {
            checklist_template: "LIST ".to_string(),
            checklist_regex: r"^LIST(?:\s|$)".to_string(),
            item_template: "ITEM ".to_string(),
            item_regex: r"^ITEM(?:\s|$)".to_string(),
            max_line_length: None,
            response_separator: " ... ".to_string(),
            uppercase: true,
            leading_blank_item: false,
            metadata_block: false,
            ..Self::dynon()
        }
    }

    /// Load a dialect from TOML.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| CodecError::invalid_config(e.to_string()))
    }

    /// First checklist number.
    pub fn checklist_base(&self) -> usize {
        if self.zero_based_checklists {
            0
        } else {
            1
        }
    }

    /// First item number within a checklist.
    pub fn item_base(&self) -> usize {
        if self.zero_based_items {
            0
        } else {
            1
        }
    }

    /// Title suffix, the mirror image of the prefix.
    pub fn title_suffix(&self) -> String {
        crate::io::formats::utils::mirror(&self.title_prefix)
    }

    /// Compile the checklist and item regexes.
    pub fn compile(&self) -> Result<(Regex, Regex)> {
        let compile = |pattern: &str, what: &str| {
            Regex::new(pattern)
                .map_err(|e| CodecError::invalid_config(format!("invalid {what} regex: {e}")))
        };
        Ok((
            compile(&self.checklist_regex, "checklist")?,
            compile(&self.item_regex, "item")?,
        ))
    }

    /// Check that the dialect is internally consistent.
    ///
    /// Templates must render lines their own regexes recognize, and must
    /// carry every number the regexes validate.
    pub fn validate(&self) -> Result<()> {
        let (checklist_re, item_re) = self.compile()?;

        if self.indent_width == 0 {
            return Err(CodecError::invalid_config("indent_width must be at least 1"));
        }
        if self.max_line_length == Some(0) {
            return Err(CodecError::invalid_config("max_line_length must be at least 1"));
        }
        if self.max_line_length.is_some() && self.wrap_marker.is_empty() {
            return Err(CodecError::invalid_config(
                "wrap_marker is required when max_line_length is set",
            ));
        }
        if self.response_separator.trim().is_empty() {
            return Err(CodecError::invalid_config(
                "response_separator must contain a visible character",
            ));
        }

        let placeholders = [
            (&checklist_re, &self.checklist_template, "checklist", CHECKLIST_NUM),
            (&item_re, &self.item_template, "item", CHECKLIST_NUM),
            (&item_re, &self.item_template, "item", ITEM_NUM),
        ];
        for (re, template, what, name) in placeholders {
            let has_group = re.capture_names().flatten().any(|n| n == name);
            if has_group && !template.contains(&placeholder(name)) {
                return Err(CodecError::invalid_config(format!(
                    "{what} template {template:?} is missing {}",
                    placeholder(name)
                )));
            }
        }

        let header = self.render_checklist_prefix(self.checklist_base());
        if !checklist_re.is_match(&format!("{header}Title")) {
            return Err(CodecError::invalid_config(format!(
                "checklist regex does not match rendered header {header:?}"
            )));
        }
        let item = self.render_item_prefix(self.checklist_base(), self.item_base());
        if !item_re.is_match(&format!("{item}Text")) {
            return Err(CodecError::invalid_config(format!(
                "item regex does not match rendered item {item:?}"
            )));
        }
        if checklist_re.is_match(&item) {
            return Err(CodecError::invalid_config(
                "checklist regex also matches item lines",
            ));
        }
        Ok(())
    }

    /// Render the prefix of a checklist header line.
    pub fn render_checklist_prefix(&self, checklist_num: usize) -> String {
        self.checklist_template
            .replace(&placeholder(CHECKLIST_NUM), &checklist_num.to_string())
    }

    /// Render the prefix of an item line.
    pub fn render_item_prefix(&self, checklist_num: usize, item_num: usize) -> String {
        self.item_template
            .replace(&placeholder(CHECKLIST_NUM), &checklist_num.to_string())
            .replace(&placeholder(ITEM_NUM), &item_num.to_string())
    }
}

fn placeholder(name: &str) -> String {
    format!("{{{{{name}}}}}")
}

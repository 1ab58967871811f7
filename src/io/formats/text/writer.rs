// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Text checklist writer.
//!
//! Each logical item is composed into one string (decoration, challenge,
//! separator, response), then split into physical lines no wider than the
//! configured maximum. Every physical line gets its own numbered prefix.
//!
//! Continuation lines start with the wrap marker at the indentation of the
//! item's first line. An item whose own text starts with the marker and
//! directly follows an item at the same indent is indistinguishable from a
//! continuation and reads back joined to it.

use super::config::TextFormatConfig;
use super::METADATA_CHECKLIST;
use crate::core::{ChecklistFile, ChecklistItem, ItemKind};

/// Padding on each side of a centered item that does not fit the width.
const CENTER_FALLBACK_PADDING: usize = 2;

pub struct TextWriter<'a> {
    config: &'a TextFormatConfig,
    out: String,
    checklist_num: usize,
    item_num: usize,
}

impl<'a> TextWriter<'a> {
    pub fn new(config: &'a TextFormatConfig) -> Self {
        Self {
            config,
            out: String::new(),
            checklist_num: config.checklist_base(),
            item_num: config.item_base(),
        }
    }

    /// Serialize a complete file.
    pub fn write(mut self, file: &ChecklistFile) -> String {
        for (index, group) in file.groups.iter().enumerate() {
            let show_group = !(index == 0 && self.config.omit_first_group_name);
            for checklist in &group.checklists {
                let title = if show_group {
                    format!("{}{}{}", group.name, self.config.group_separator, checklist.name)
                } else {
                    checklist.name.clone()
                };
                self.begin_checklist(&title);
                for item in &checklist.items {
                    self.write_item(item);
                }
            }
        }

        if self.config.metadata_block {
            self.write_metadata(file);
        }

        tracing::debug!(
            groups = file.groups.len(),
            bytes = self.out.len(),
            "serialized text checklist file"
        );
        self.out
    }

    fn begin_checklist(&mut self, title: &str) {
        let prefix = self.config.render_checklist_prefix(self.checklist_num);
        let title = self.case(title);
        self.push_line(&prefix, &title);
        self.checklist_num += 1;
        self.item_num = self.config.item_base();
        if self.config.leading_blank_item {
            self.push_item_line("");
        }
    }

    fn write_metadata(&mut self, file: &ChecklistFile) {
        let generated = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string();
        self.begin_checklist(METADATA_CHECKLIST);
        let pairs = [
            ("File", file.name.as_str()),
            ("Make/Model", file.metadata.make_model.as_str()),
            ("Registration", file.metadata.aircraft_registration.as_str()),
            ("Copyright", file.metadata.copyright.as_str()),
            ("Generated", generated.as_str()),
        ];
        for (key, value) in pairs {
            self.write_item(&ChecklistItem::challenge_response(key, value));
        }
    }

    fn write_item(&mut self, item: &ChecklistItem) {
        // Outer spaces would be read back as indentation or centering
        let composed = self.case(&compose(self.config, item));
        let text = composed.trim_matches(' ');
        if item.centered {
            let len = text.chars().count();
            let padding = match self.config.max_line_length {
                Some(max) if len + 2 * CENTER_FALLBACK_PADDING <= max => (max - len) / 2,
                _ => CENTER_FALLBACK_PADDING,
            };
            let pad = " ".repeat(padding);
            self.push_item_line(&format!("{pad}{text}{pad}"));
            return;
        }

        let indent = " ".repeat(usize::from(item.indent) * self.config.indent_width);
        let Some(max) = self.config.max_line_length else {
            self.push_item_line(&format!("{indent}{text}"));
            return;
        };

        let marker = &self.config.wrap_marker;
        let first_width = max.saturating_sub(indent.len()).max(1);
        let rest_width = max.saturating_sub(indent.len() + marker.chars().count()).max(1);
        for (index, chunk) in wrap(text, first_width, rest_width).into_iter().enumerate() {
            if index == 0 {
                self.push_item_line(&format!("{indent}{chunk}"));
            } else {
                self.push_item_line(&format!("{indent}{marker}{chunk}"));
            }
        }
    }

    fn push_item_line(&mut self, content: &str) {
        let prefix = self
            .config
            .render_item_prefix(self.checklist_num.saturating_sub(1), self.item_num);
        self.push_line(&prefix, content);
        self.item_num += 1;
    }

    fn push_line(&mut self, prefix: &str, content: &str) {
        self.out.push_str(prefix);
        self.out.push_str(content);
        self.out.push('\n');
    }

    fn case(&self, text: &str) -> String {
        if self.config.uppercase {
            text.to_uppercase()
        } else {
            text.to_string()
        }
    }
}

/// Compose the full decorated text of an item.
pub fn compose(config: &TextFormatConfig, item: &ChecklistItem) -> String {
    match &item.kind {
        ItemKind::ChallengeResponse {
            challenge,
            response,
        } => {
            if response.is_empty() {
                format!("{challenge}{}", config.response_separator.trim_end())
            } else {
                format!("{challenge}{}{response}", config.response_separator)
            }
        }
        ItemKind::ChallengeOnly(text) => text.clone(),
        ItemKind::Title(text) => format!("{}{text}{}", config.title_prefix, config.title_suffix()),
        ItemKind::Note(text) => format!("{}{text}", config.note_prefix),
        ItemKind::Warning(text) => format!("{}{text}", config.warning_prefix),
        ItemKind::Caution(text) => format!("{}{text}", config.caution_prefix),
    }
}

/// Split `text` into chunks of at most `first_width` characters for the
/// first chunk and `rest_width` for the others.
///
/// Breaks at the last space that keeps the chunk within width, dropping that
/// space; a word longer than the width is broken at the limit.
pub fn wrap(text: &str, first_width: usize, rest_width: usize) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut rest = text;
    let mut width = first_width.max(1);
    loop {
        let Some((limit, next)) = rest.char_indices().nth(width) else {
            chunks.push(rest);
            return chunks;
        };
        // The char at `limit` may itself be the break point
        match rest[..limit + next.len_utf8()].rfind(' ') {
            Some(pos) if pos > 0 => {
                chunks.push(&rest[..pos]);
                rest = &rest[pos + 1..];
            }
            _ => {
                chunks.push(&rest[..limit]);
                rest = &rest[limit..];
            }
        }
        width = rest_width.max(1);
    }
}

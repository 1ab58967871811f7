// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Text checklist reader.
//!
//! Lines are consumed one at a time. Checklist headers open a new
//! checklist, item lines accumulate into a pending logical item until the
//! next item that does not continue it; wrapped continuations are joined
//! back with a single space. Numbers embedded in the line prefixes are
//! checked against running counters.

use regex::{Captures, Regex};

use super::config::{TextFormatConfig, CHECKLIST_NUM, ITEM_NUM};
use super::METADATA_CHECKLIST;
use crate::core::model::{file_stem, MAX_INDENT};
use crate::core::{
    Checklist, ChecklistFileMetadata, ChecklistGroup, ChecklistItem, Format, GroupCategory,
    ParsedChecklistFile,
};
use crate::io::formats::utils::{strip_affixes, strip_marker};
use crate::{CodecError, Result};

/// Group used for checklists whose header names no group.
pub const DEFAULT_GROUP: &str = "Checklists";

/// A logical item still collecting wrapped lines.
struct PendingItem {
    text: String,
    /// Leading spaces of the first physical line
    leading: usize,
    indent: u8,
    centered: bool,
}

struct OpenChecklist {
    number: usize,
    checklist: Checklist,
    next_item: usize,
    pending: Option<PendingItem>,
}

pub struct TextReader<'a> {
    config: &'a TextFormatConfig,
    checklist_re: Regex,
    item_re: Regex,
    title_suffix: String,
    groups: Vec<ChecklistGroup>,
    current: Option<OpenChecklist>,
    next_checklist: usize,
    first_header: bool,
}

impl<'a> TextReader<'a> {
    pub fn new(config: &'a TextFormatConfig) -> Result<Self> {
        let (checklist_re, item_re) = config.compile()?;
        Ok(Self {
            config,
            checklist_re,
            item_re,
            title_suffix: config.title_suffix(),
            groups: Vec::new(),
            current: None,
            next_checklist: config.checklist_base(),
            first_header: true,
        })
    }

    /// Parse a complete text buffer.
    pub fn parse(mut self, text: &str, file_name: &str, format: Format) -> Result<ParsedChecklistFile> {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        for (index, raw) in text.split('\n').enumerate() {
            let line = raw.strip_suffix('\r').unwrap_or(raw);
            self.read_line(index + 1, line)?;
        }
        self.close_checklist();

        let mut file = ParsedChecklistFile::new(file_stem(file_name), format);
        if let Some(info) = self.take_metadata_checklist() {
            apply_metadata(&mut file.name, &mut file.metadata, &info);
        }
        file.groups = self.groups;

        tracing::debug!(
            format = %format,
            groups = file.groups.len(),
            checklists = file.checklist_count(),
            "parsed text checklist file"
        );
        Ok(file)
    }

    fn read_line(&mut self, line_no: usize, line: &str) -> Result<()> {
        let trimmed = line.trim_start();
        if trimmed.trim_end().is_empty() {
            return Ok(());
        }
        if let Some(prefix) = self.config.comment_prefix.as_deref() {
            if !prefix.is_empty() && trimmed.starts_with(prefix) {
                return Ok(());
            }
        }

        if let Some(caps) = self.checklist_re.captures(trimmed) {
            let number = captured_number(&caps, CHECKLIST_NUM, line_no, line)?;
            let rest = &trimmed[caps.get(0).map_or(0, |m| m.end())..];
            return self.open_checklist(line_no, line, number, rest.trim());
        }

        if let Some(caps) = self.item_re.captures(trimmed) {
            let checklist_num = captured_number(&caps, CHECKLIST_NUM, line_no, line)?;
            let item_num = captured_number(&caps, ITEM_NUM, line_no, line)?;
            let content = &trimmed[caps.get(0).map_or(0, |m| m.end())..];
            return self.read_item(line_no, line, checklist_num, item_num, content);
        }

        Err(CodecError::schema(
            format!("line {line_no}"),
            format!("unrecognized line {line:?}"),
        ))
    }

    fn open_checklist(
        &mut self,
        line_no: usize,
        line: &str,
        number: Option<usize>,
        title: &str,
    ) -> Result<()> {
        if let Some(found) = number {
            if found != self.next_checklist {
                return Err(CodecError::positional(
                    line_no,
                    format!("checklist {}", self.next_checklist),
                    line,
                ));
            }
        }
        self.close_checklist();

        let (group_name, checklist_name) = match title.split_once(&self.config.group_separator) {
            Some((group, name)) if !self.config.group_separator.is_empty() => {
                (Some(group.trim()), name.trim())
            }
            _ => (None, title),
        };
        let group_name = match group_name {
            Some(_) if self.first_header && self.config.omit_first_group_name => None,
            other => other,
        };
        self.first_header = false;

        let same_group = match (group_name, self.groups.last()) {
            (Some(name), Some(last)) => last.name == name,
            (None, Some(_)) => true,
            (_, None) => false,
        };
        if !same_group {
            let name = group_name.unwrap_or(DEFAULT_GROUP);
            self.groups
                .push(ChecklistGroup::new(name, GroupCategory::Normal));
        }

        self.current = Some(OpenChecklist {
            number: self.next_checklist,
            checklist: Checklist::new(checklist_name),
            next_item: self.config.item_base(),
            pending: None,
        });
        self.next_checklist += 1;
        Ok(())
    }

    fn read_item(
        &mut self,
        line_no: usize,
        line: &str,
        checklist_num: Option<usize>,
        item_num: Option<usize>,
        content: &str,
    ) -> Result<()> {
        let Some(open) = self.current.as_mut() else {
            return Err(CodecError::positional(line_no, "checklist header", line));
        };
        if let Some(found) = checklist_num {
            if found != open.number {
                return Err(CodecError::positional(
                    line_no,
                    format!("checklist {}", open.number),
                    line,
                ));
            }
        }
        if let Some(found) = item_num {
            if found != open.next_item {
                return Err(CodecError::positional(
                    line_no,
                    format!("item {}", open.next_item),
                    line,
                ));
            }
        }
        open.next_item += 1;

        let leading = content.len() - content.trim_start_matches(' ').len();
        let trailing = content.len() - content.trim_end_matches(' ').len();
        let body = content.trim_matches(' ');
        if body.is_empty() {
            // Spacer; also covers the leading blank line
            flush(open, self.config, &self.title_suffix);
            return Ok(());
        }
        let centered = trailing > 0 && trailing == leading;

        // Continuations repeat the first line's indentation exactly
        let marker = self.config.wrap_marker.as_str();
        if !centered && !marker.is_empty() {
            if let (Some(rest), Some(pending)) = (body.strip_prefix(marker), open.pending.as_mut()) {
                if !pending.centered && pending.leading == leading {
                    pending.text.push(' ');
                    pending.text.push_str(rest);
                    return Ok(());
                }
            }
        }

        flush(open, self.config, &self.title_suffix);
        let indent = if centered {
            0
        } else {
            (leading / self.config.indent_width).min(usize::from(MAX_INDENT)) as u8
        };
        open.pending = Some(PendingItem {
            text: body.to_string(),
            leading,
            indent,
            centered,
        });
        Ok(())
    }

    fn close_checklist(&mut self) {
        if let Some(mut open) = self.current.take() {
            flush(&mut open, self.config, &self.title_suffix);
            if let Some(group) = self.groups.last_mut() {
                group.checklists.push(open.checklist);
            }
        }
    }

    /// Remove a trailing metadata checklist from the group tree.
    fn take_metadata_checklist(&mut self) -> Option<Checklist> {
        let group = self.groups.last_mut()?;
        let is_info = group
            .checklists
            .last()
            .is_some_and(|c| c.name.eq_ignore_ascii_case(METADATA_CHECKLIST));
        if !is_info {
            return None;
        }
        let info = group.checklists.pop();
        if group.checklists.is_empty() {
            self.groups.pop();
        }
        info
    }
}

fn captured_number(
    caps: &Captures<'_>,
    name: &str,
    line_no: usize,
    line: &str,
) -> Result<Option<usize>> {
    caps.name(name)
        .map(|m| {
            m.as_str()
                .parse::<usize>()
                .map_err(|_| CodecError::positional(line_no, format!("numeric {name}"), line))
        })
        .transpose()
}

fn flush(open: &mut OpenChecklist, config: &TextFormatConfig, title_suffix: &str) {
    if let Some(pending) = open.pending.take() {
        let item = classify(config, title_suffix, &pending.text)
            .with_indent(pending.indent)
            .with_centered(pending.centered);
        open.checklist.items.push(item);
    }
}

/// Classify the complete text of a logical item.
pub fn classify(config: &TextFormatConfig, title_suffix: &str, text: &str) -> ChecklistItem {
    if let Some(rest) = strip_marker(text, &config.note_prefix) {
        return ChecklistItem::note(rest);
    }
    if let Some(inner) = strip_affixes(text, &config.title_prefix, title_suffix) {
        return ChecklistItem::title(inner);
    }
    if let Some(rest) = strip_marker(text, &config.warning_prefix) {
        return ChecklistItem::warning(rest);
    }
    if let Some(rest) = strip_marker(text, &config.caution_prefix) {
        return ChecklistItem::caution(rest);
    }
    if let Some((challenge, response)) = text.split_once(&config.response_separator) {
        return ChecklistItem::challenge_response(challenge, response);
    }
    // An empty response is written without the separator's trailing space
    let bare = config.response_separator.trim_end();
    if let Some(challenge) = text.strip_suffix(bare) {
        if !challenge.is_empty() {
            return ChecklistItem::challenge_response(challenge, "");
        }
    }
    ChecklistItem::challenge(text)
}

/// Copy `key - value` pairs of the metadata checklist into the file.
fn apply_metadata(name: &mut String, metadata: &mut ChecklistFileMetadata, info: &Checklist) {
    for item in &info.items {
        let Some(value) = item.response() else {
            continue;
        };
        match item.text().to_ascii_lowercase().as_str() {
            "file" if !value.is_empty() => *name = value.to_string(),
            "make/model" => metadata.make_model = value.to_string(),
            "registration" => metadata.aircraft_registration = value.to_string(),
            "copyright" => metadata.copyright = value.to_string(),
            _ => {}
        }
    }
}

// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Garmin ACE writer.
//!
//! Mirrors the reader grammar. Some avionics reject empty containers, so
//! groups without any non-empty checklist and checklists without items are
//! left out entirely.

use byteorder::{ByteOrder, LittleEndian};

use super::constants::*;
use super::reader::checksum;
use crate::core::{Checklist, ChecklistFile, ChecklistGroup, ChecklistItem, ItemKind};

/// Encode text as Latin-1, replacing anything outside it with `?`.
fn latin1(text: &str) -> impl Iterator<Item = u8> + '_ {
    text.chars()
        .map(|c| u8::try_from(u32::from(c)).unwrap_or(b'?'))
}

struct AceWriter {
    out: Vec<u8>,
}

impl AceWriter {
    fn new() -> Self {
        Self { out: Vec::new() }
    }

    fn write_line(&mut self, marker: &[u8], text: &str) {
        self.out.extend_from_slice(marker);
        self.out.extend(latin1(text));
        self.out.extend_from_slice(CRLF);
    }

    fn write_metadata_line(&mut self, text: &str) {
        // Never empty: some units choke on blank metadata lines
        let text = if text.is_empty() { " " } else { text };
        self.write_line(b"", text);
    }

    fn write_group(&mut self, group: &ChecklistGroup) {
        self.write_line(GROUP_START, &group.name);
        for checklist in &group.checklists {
            if checklist.items.is_empty() {
                tracing::debug!(checklist = %checklist.name, "omitting empty ACE checklist");
                continue;
            }
            self.write_checklist(checklist);
        }
        self.write_line(GROUP_END, "");
    }

    fn write_checklist(&mut self, checklist: &Checklist) {
        self.write_line(CHECKLIST_START, &checklist.name);
        for item in &checklist.items {
            self.write_item(item);
        }
        self.write_line(CHECKLIST_END, "");
    }

    fn write_item(&mut self, item: &ChecklistItem) {
        let indent = if item.centered {
            CENTERED_INDENT
        } else {
            b'0' + item.indent.min(3)
        };
        let marker = [item_type_byte(item.item_type()), indent];
        let text = match &item.kind {
            ItemKind::ChallengeResponse {
                challenge,
                response,
            } => format!("{challenge}{RESPONSE_SEPARATOR}{response}"),
            other => other.text().to_string(),
        };
        self.write_line(&marker, &text);
    }

    fn finish(mut self) -> Vec<u8> {
        let crc = checksum(&self.out);
        let mut tail = [0u8; CHECKSUM_LEN];
        LittleEndian::write_u32(&mut tail, !crc);
        self.out.extend_from_slice(&tail);
        self.out
    }
}

/// Serialize a checklist file to ACE bytes.
pub fn serialize(file: &ChecklistFile) -> Vec<u8> {
    let mut writer = AceWriter::new();
    writer.out.extend_from_slice(&ACE_MAGIC);
    writer.out.extend_from_slice(&DEFAULT_INDICES);
    writer.out.extend_from_slice(CRLF);

    writer.write_metadata_line(&file.name);
    writer.write_metadata_line(&file.metadata.make_model);
    writer.write_metadata_line(&file.metadata.aircraft_registration);
    // Manufacturer is not part of the model
    writer.write_metadata_line("");
    writer.write_metadata_line(&file.metadata.copyright);

    for group in &file.groups {
        if group.checklists.iter().all(|c| c.items.is_empty()) {
            tracing::debug!(group = %group.name, "omitting empty ACE group");
            continue;
        }
        writer.write_group(group);
    }
    writer.write_line(FILE_END, "");
    writer.finish()
}

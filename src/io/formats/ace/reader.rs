// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Garmin ACE reader.
//!
//! # ACE Structure
//!
//! ```text
//! F0 F0 F0 F0 00 01          magic
//! <grp> <chk> CRLF           default group/checklist indices (ignored)
//! name CRLF                  five metadata lines
//! make/model CRLF
//! registration CRLF
//! manufacturer CRLF          (discarded)
//! copyright CRLF
//! <0title CRLF               group start
//!   (0title CRLF             checklist start
//!     TI text CRLF           item: type byte, indent byte, Latin-1 text
//!   ) CRLF
//! > CRLF
//! END CRLF
//! crc32                      4 bytes, little-endian, bitwise inverted
//! ```

use byteorder::{ByteOrder, LittleEndian};

use super::constants::*;
use crate::core::model::file_stem;
use crate::core::{
    Checklist, ChecklistGroup, ChecklistItem, Format, GroupCategory, ItemKind, ItemType,
    ParsedChecklistFile,
};
use crate::{CodecError, Result};

/// Cursor over the CRLF-delimited body of an ACE file.
struct LineReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> LineReader<'a> {
    fn new(data: &'a [u8], pos: usize) -> Self {
        Self { data, pos }
    }

    fn read_bytes(&mut self, len: usize) -> Result<&'a [u8]> {
        let available = self.data.len().saturating_sub(self.pos);
        if available < len {
            return Err(CodecError::truncated(len, available, self.pos));
        }
        let bytes = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(bytes)
    }

    /// Read up to the next CRLF, consuming the terminator.
    fn read_line(&mut self) -> Result<(usize, &'a [u8])> {
        let start = self.pos;
        let rest = &self.data[start..];
        let end = rest
            .windows(CRLF.len())
            .position(|w| w == CRLF)
            .ok_or_else(|| CodecError::truncated(CRLF.len(), rest.len(), start))?;
        self.pos = start + end + CRLF.len();
        Ok((start, &rest[..end]))
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.data.len()
    }
}

/// Compute the ACE checksum over `body`.
pub fn checksum(body: &[u8]) -> u32 {
    crc32fast::hash(body)
}

/// Verify the trailing inverted CRC32 of a complete ACE buffer.
pub fn verify_checksum(data: &[u8]) -> Result<()> {
    if data.len() < CHECKSUM_LEN {
        return Err(CodecError::truncated(CHECKSUM_LEN, data.len(), 0));
    }
    let (body, tail) = data.split_at(data.len() - CHECKSUM_LEN);
    let expected = !LittleEndian::read_u32(tail);
    let actual = checksum(body);
    if expected != actual {
        return Err(CodecError::checksum_mismatch(expected, actual));
    }
    Ok(())
}

/// Decode Latin-1 bytes.
fn latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

/// Metadata lines are written as a single space when empty.
fn metadata_text(bytes: &[u8]) -> String {
    if bytes == b" " {
        String::new()
    } else {
        latin1(bytes)
    }
}

/// Parse a complete ACE buffer.
pub fn parse(data: &[u8], file_name: &str) -> Result<ParsedChecklistFile> {
    let min_len = ACE_MAGIC.len() + CHECKSUM_LEN;
    if data.len() < min_len {
        return Err(CodecError::truncated(min_len, data.len(), 0));
    }
    if data[..ACE_MAGIC.len()] != ACE_MAGIC {
        return Err(CodecError::malformed_header(
            "ACE",
            format!("bad magic bytes {:02x?}", &data[..ACE_MAGIC.len()]),
        ));
    }
    verify_checksum(data)?;

    let body = &data[..data.len() - CHECKSUM_LEN];
    let mut reader = LineReader::new(body, ACE_MAGIC.len());

    reader.read_bytes(DEFAULT_INDICES.len())?;
    let (offset, blank) = reader.read_line()?;
    if !blank.is_empty() {
        return Err(CodecError::malformed_header(
            "ACE",
            format!("expected blank line after default indices at offset {offset}"),
        ));
    }

    let mut metadata_lines = Vec::with_capacity(METADATA_LINES);
    for _ in 0..METADATA_LINES {
        let (_, line) = reader.read_line()?;
        metadata_lines.push(metadata_text(line));
    }

    let name = if metadata_lines[0].is_empty() {
        file_stem(file_name).to_string()
    } else {
        metadata_lines[0].clone()
    };
    let mut file = ParsedChecklistFile::new(name, Format::Ace);
    file.metadata.make_model = metadata_lines[1].clone();
    file.metadata.aircraft_registration = metadata_lines[2].clone();
    file.metadata.copyright = metadata_lines[4].clone();

    loop {
        let (offset, line) = reader.read_line()?;
        if line == FILE_END {
            break;
        }
        let title = line.strip_prefix(GROUP_START).ok_or_else(|| {
            CodecError::schema(
                format!("ACE offset {offset}"),
                format!("expected group start or END, found {:?}", latin1(line)),
            )
        })?;
        file.groups.push(read_group(&mut reader, latin1(title))?);
    }

    if !reader.is_at_end() {
        return Err(CodecError::schema(
            format!("ACE offset {}", reader.pos),
            "unexpected data after END",
        ));
    }

    tracing::debug!(
        groups = file.groups.len(),
        checklists = file.checklist_count(),
        "parsed ACE file"
    );
    Ok(file)
}

fn read_group(reader: &mut LineReader<'_>, name: String) -> Result<ChecklistGroup> {
    let mut group = ChecklistGroup::new(name, GroupCategory::Normal);
    loop {
        let (offset, line) = reader.read_line()?;
        if line == GROUP_END {
            return Ok(group);
        }
        let title = line.strip_prefix(CHECKLIST_START).ok_or_else(|| {
            CodecError::schema(
                format!("ACE offset {offset}"),
                format!("expected checklist start or group end, found {:?}", latin1(line)),
            )
        })?;
        group.checklists.push(read_checklist(reader, latin1(title))?);
    }
}

fn read_checklist(reader: &mut LineReader<'_>, name: String) -> Result<Checklist> {
    let mut checklist = Checklist::new(name);
    loop {
        let (offset, line) = reader.read_line()?;
        if line == CHECKLIST_END {
            return Ok(checklist);
        }
        if line.is_empty() {
            // Spacer line
            continue;
        }
        checklist.items.push(parse_item(line, offset)?);
    }
}

fn parse_item(line: &[u8], offset: usize) -> Result<ChecklistItem> {
    if line.len() < 2 {
        return Err(CodecError::truncated(2, line.len(), offset));
    }
    let item_type = item_type_from_byte(line[0]).ok_or_else(|| {
        CodecError::schema(
            format!("ACE offset {offset}"),
            format!("unknown item type byte {:#04x}", line[0]),
        )
    })?;
    let (indent, centered) = match line[1] {
        CENTERED_INDENT => (0, true),
        digit @ b'0'..=b'3' => (digit - b'0', false),
        other => {
            return Err(CodecError::schema(
                format!("ACE offset {}", offset + 1),
                format!("invalid indent byte {other:#04x}"),
            ))
        }
    };

    let text = latin1(&line[2..]);
    let kind = match item_type {
        ItemType::ChallengeResponse => match text.split_once(RESPONSE_SEPARATOR) {
            Some((challenge, response)) => ItemKind::ChallengeResponse {
                challenge: challenge.to_string(),
                response: response.to_string(),
            },
            None => ItemKind::ChallengeResponse {
                challenge: text,
                response: String::new(),
            },
        },
        other => ItemKind::from_parts(other, text, ""),
    };

    Ok(ChecklistItem::new(kind)
        .with_indent(indent)
        .with_centered(centered))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finish(mut body: Vec<u8>) -> Vec<u8> {
        let crc = checksum(&body);
        let mut tail = [0u8; 4];
        LittleEndian::write_u32(&mut tail, !crc);
        body.extend_from_slice(&tail);
        body
    }

    fn sample_body(items: &[u8]) -> Vec<u8> {
        let mut body = ACE_MAGIC.to_vec();
        body.extend_from_slice(b"\x00\x00\r\n");
        body.extend_from_slice(b"C172\r\nCessna 172\r\nN12345\r\n \r\n \r\n");
        body.extend_from_slice(b"<0Normal\r\n(0Preflight\r\n");
        body.extend_from_slice(items);
        body.extend_from_slice(b")\r\n>\r\nEND\r\n");
        body
    }

    #[test]
    fn test_parse_minimal_file() {
        let data = finish(sample_body(b"r0Parking Brake~SET\r\n\r\nn1Check ~ twice\r\ntcEngine\r\n"));
        let file = parse(&data, "c172.ace").unwrap();

        assert_eq!(file.name, "C172");
        assert_eq!(file.metadata.make_model, "Cessna 172");
        assert_eq!(file.metadata.aircraft_registration, "N12345");
        assert_eq!(file.metadata.copyright, "");
        assert_eq!(file.groups.len(), 1);

        let items = &file.groups[0].checklists[0].items;
        assert_eq!(items.len(), 3, "spacer line must not produce an item");
        assert_eq!(items[0], ChecklistItem::challenge_response("Parking Brake", "SET"));
        assert_eq!(items[1], ChecklistItem::note("Check ~ twice").with_indent(1));
        assert_eq!(items[2], ChecklistItem::title("Engine").with_centered(true));
    }

    #[test]
    fn test_only_first_tilde_splits_response() {
        let data = finish(sample_body(b"r2Mixture~RICH ~ FULL\r\n"));
        let file = parse(&data, "x.ace").unwrap();
        let item = &file.groups[0].checklists[0].items[0];
        assert_eq!(item.text(), "Mixture");
        assert_eq!(item.response(), Some("RICH ~ FULL"));
        assert_eq!(item.indent, 2);
    }

    #[test]
    fn test_plain_text_byte_reads_as_note() {
        let data = finish(sample_body(b"p0Plain\r\n"));
        let file = parse(&data, "x.ace").unwrap();
        assert_eq!(file.groups[0].checklists[0].items[0], ChecklistItem::note("Plain"));
    }

    #[test]
    fn test_unknown_type_byte_is_fatal() {
        let data = finish(sample_body(b"z0Bogus\r\n"));
        let err = parse(&data, "x.ace").unwrap_err();
        assert!(matches!(err, CodecError::SchemaViolation { .. }), "{err}");
    }

    #[test]
    fn test_invalid_indent_byte() {
        let data = finish(sample_body(b"n7Deep\r\n"));
        assert!(matches!(
            parse(&data, "x.ace"),
            Err(CodecError::SchemaViolation { .. })
        ));
    }

    #[test]
    fn test_checksum_mismatch_detected() {
        let mut data = finish(sample_body(b"n0Note\r\n"));
        let last = data.len() - 1;
        data[last] ^= 0xFF;
        assert!(matches!(
            parse(&data, "x.ace"),
            Err(CodecError::ChecksumMismatch { .. })
        ));
    }

    #[test]
    fn test_bad_magic() {
        let mut body = sample_body(b"");
        body[0] = b'X';
        let data = finish(body);
        assert!(matches!(
            parse(&data, "x.ace"),
            Err(CodecError::MalformedHeader { .. })
        ));
    }

    #[test]
    fn test_truncated_file() {
        assert!(matches!(
            parse(&ACE_MAGIC, "x.ace"),
            Err(CodecError::TruncatedInput { .. })
        ));

        // Valid checksum, but the body stops before END
        let mut body = ACE_MAGIC.to_vec();
        body.extend_from_slice(b"\x00\x00\r\nname\r\n");
        let data = finish(body);
        assert!(matches!(
            parse(&data, "x.ace"),
            Err(CodecError::TruncatedInput { .. })
        ));
    }

    #[test]
    fn test_blank_name_falls_back_to_file_stem() {
        let mut body = ACE_MAGIC.to_vec();
        body.extend_from_slice(b"\x00\x00\r\n \r\n \r\n \r\n \r\n \r\nEND\r\n");
        let file = parse(&finish(body), "dir/My Plane.ace").unwrap();
        assert_eq!(file.name, "My Plane");
        assert!(file.groups.is_empty());
    }

    #[test]
    fn test_latin1_text() {
        let data = finish(sample_body(b"n0Temp 15\xb0C\r\n"));
        let file = parse(&data, "x.ace").unwrap();
        assert_eq!(file.groups[0].checklists[0].items[0].text(), "Temp 15°C");
    }
}

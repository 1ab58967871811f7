// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Garmin ACE format constants.
//!
//! Single source of truth for the markers shared by the reader and writer.

use crate::core::ItemType;

/// ACE file magic bytes.
pub const ACE_MAGIC: [u8; 6] = [0xF0, 0xF0, 0xF0, 0xF0, 0x00, 0x01];

/// Default group/checklist index bytes written after the magic.
pub const DEFAULT_INDICES: [u8; 2] = [0x00, 0x00];

/// Line terminator used throughout the file.
pub const CRLF: &[u8] = b"\r\n";

/// Group start marker, followed by the group title.
pub const GROUP_START: &[u8] = b"<0";
/// Line closing a group.
pub const GROUP_END: &[u8] = b">";
/// Checklist start marker, followed by the checklist title.
pub const CHECKLIST_START: &[u8] = b"(0";
/// Line closing a checklist.
pub const CHECKLIST_END: &[u8] = b")";
/// Line closing the file, before the checksum.
pub const FILE_END: &[u8] = b"END";

/// Indent byte meaning "centered".
pub const CENTERED_INDENT: u8 = b'c';

/// Separator between challenge and response text.
pub const RESPONSE_SEPARATOR: char = '~';

/// Trailing checksum length.
pub const CHECKSUM_LEN: usize = 4;

/// Number of metadata lines after the header.
pub const METADATA_LINES: usize = 5;

/// Map an item type byte to the model type.
pub fn item_type_from_byte(byte: u8) -> Option<ItemType> {
    match byte {
        b'w' => Some(ItemType::Warning),
        b'a' => Some(ItemType::Caution),
        b'n' | b'p' => Some(ItemType::Note),
        b'c' => Some(ItemType::ChallengeOnly),
        b'r' => Some(ItemType::ChallengeResponse),
        b't' => Some(ItemType::Title),
        _ => None,
    }
}

/// Map a model type to the byte written for it.
pub fn item_type_byte(item_type: ItemType) -> u8 {
    match item_type {
        ItemType::Warning => b'w',
        ItemType::Caution => b'a',
        ItemType::Note => b'n',
        ItemType::ChallengeOnly => b'c',
        ItemType::ChallengeResponse => b'r',
        ItemType::Title => b't',
    }
}

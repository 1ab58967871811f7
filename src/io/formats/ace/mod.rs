// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Garmin ACE binary checklist format.

pub mod constants;
pub mod reader;
pub mod writer;

pub use reader::verify_checksum;

use crate::core::{ChecklistFile, Format, ParsedChecklistFile};
use crate::io::traits::{CodecOutput, SyncCodec};
use crate::Result;

/// Codec for Garmin `.ace` files.
#[derive(Debug, Clone, Copy, Default)]
pub struct AceCodec;

impl SyncCodec for AceCodec {
    fn format(&self) -> Format {
        Format::Ace
    }

    fn parse(&self, data: &[u8], file_name: &str) -> Result<ParsedChecklistFile> {
        reader::parse(data, file_name)
    }

    fn serialize(&self, file: &ChecklistFile) -> Result<CodecOutput> {
        Ok(CodecOutput::Bytes(writer::serialize(file)))
    }
}

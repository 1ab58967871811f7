// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! JSON checklist files.
//!
//! Two input schemas are accepted and told apart by shape: the tool's own
//! ([`schema`]) and a legacy third-party one ([`legacy`]). Output is always
//! the own schema, pretty-printed.

pub mod legacy;
pub mod schema;

use crate::core::{ChecklistFile, Format, ParsedChecklistFile};
use crate::io::traits::{CodecOutput, SyncCodec};
use crate::{CodecError, Result};

use legacy::LegacyFile;
use schema::JsonFile;

/// Codec for `.json` checklist files.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl SyncCodec for JsonCodec {
    fn format(&self) -> Format {
        Format::Json
    }

    fn parse(&self, data: &[u8], file_name: &str) -> Result<ParsedChecklistFile> {
        let value: serde_json::Value = serde_json::from_slice(data)?;
        let file = if legacy::is_legacy(&value) {
            tracing::debug!(file = file_name, "reading legacy JSON schema");
            serde_json::from_value::<LegacyFile>(value)?.into_model(file_name)?
        } else {
            serde_json::from_value::<JsonFile>(value)?.into_model(file_name)
        };
        tracing::debug!(
            groups = file.groups.len(),
            checklists = file.checklist_count(),
            "parsed JSON checklist file"
        );
        Ok(file)
    }

    fn serialize(&self, file: &ChecklistFile) -> Result<CodecOutput> {
        serde_json::to_string_pretty(&JsonFile::from_model(file))
            .map(CodecOutput::Text)
            .map_err(|e| CodecError::Other(format!("failed to encode JSON: {e}")))
    }
}

// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Line-oriented text checklist formats (Dynon/AFS, GRT).
//!
//! Both vendors use the same structure: numbered checklist header lines
//! followed by numbered item lines. A single engine handles them,
//! parametrized by a [`TextFormatConfig`].
//!
//! # Example
//!
//! ```no_run
//! use efiscodec::io::formats::text::TextCodec;
//! use efiscodec::io::traits::SyncCodec;
//!
//! let codec = TextCodec::dynon();
//! let file = codec.parse(b"CHKLST0.TITLE,Preflight\nCHKLST0.LINE0,\n", "c172.afd")?;
//! assert_eq!(file.groups[0].checklists[0].name, "Preflight");
//! # Ok::<(), efiscodec::CodecError>(())
//! ```

pub mod config;
pub mod reader;
pub mod writer;

pub use config::TextFormatConfig;

use crate::core::{ChecklistFile, Format, ParsedChecklistFile};
use crate::io::traits::{CodecOutput, SyncCodec};
use crate::{CodecError, Result};

/// Title of the checklist carrying file metadata.
pub const METADATA_CHECKLIST: &str = "Checklist Info";

/// Text codec for one dialect.
#[derive(Debug, Clone)]
pub struct TextCodec {
    format: Format,
    config: TextFormatConfig,
}

impl TextCodec {
    /// Create a codec from a custom dialect, validating it first.
    ///
    /// # Errors
    ///
    /// Returns `CodecError::InvalidConfig` if the dialect is inconsistent,
    /// or `CodecError::UnsupportedFormat` if `format` is not a text format.
    pub fn new(format: Format, config: TextFormatConfig) -> Result<Self> {
        if !matches!(format, Format::Dynon | Format::Grt) {
            return Err(CodecError::unsupported(format!(
                "{format} is not a text format"
            )));
        }
        config.validate()?;
        Ok(Self { format, config })
    }

    /// Dynon SkyView / AFS codec.
    pub fn dynon() -> Self {
        Self {
            format: Format::Dynon,
            config: TextFormatConfig::dynon(),
        }
    }

    /// GRT codec.
    pub fn grt() -> Self {
        Self {
            format: Format::Grt,
            config: TextFormatConfig::grt(),
        }
    }

    pub fn config(&self) -> &TextFormatConfig {
        &self.config
    }

    /// Serialize straight to a string.
    pub fn serialize_text(&self, file: &ChecklistFile) -> String {
        writer::TextWriter::new(&self.config).write(file)
    }
}

impl SyncCodec for TextCodec {
    fn format(&self) -> Format {
        self.format
    }

    fn parse(&self, data: &[u8], file_name: &str) -> Result<ParsedChecklistFile> {
        let text = std::str::from_utf8(data).map_err(|e| {
            CodecError::schema(
                format!("byte {}", e.valid_up_to()),
                "text checklist is not valid UTF-8",
            )
        })?;
        reader::TextReader::new(&self.config)?.parse(text, file_name, self.format)
    }

    fn serialize(&self, file: &ChecklistFile) -> Result<CodecOutput> {
        Ok(CodecOutput::Text(self.serialize_text(file)))
    }
}

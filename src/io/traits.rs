// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core traits for checklist codecs.
//!
//! Codecs come in two capabilities. [`SyncCodec`] is for formats whose
//! parse/serialize is plain CPU work (ACE, text, ForeFlight, JSON).
//! [`AsyncCodec`] is for formats whose primitives are asynchronous (Garmin
//! Pilot archives, PDF assembly). Keeping them as separate traits means a
//! caller cannot reach a synchronous path that would have to fail at runtime.
//!
//! Codecs never touch the filesystem: they receive a byte buffer and the
//! logical file name, and return the model or the bytes to write.

use async_trait::async_trait;

use crate::core::{ChecklistFile, Format, ParsedChecklistFile};
use crate::Result;

/// Serialized form of a checklist file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecOutput {
    /// Binary formats (ACE, ForeFlight, Garmin Pilot, PDF)
    Bytes(Vec<u8>),
    /// Text formats (Dynon, GRT, JSON)
    Text(String),
}

impl CodecOutput {
    /// Get the output as bytes, UTF-8 encoding text output.
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            CodecOutput::Bytes(bytes) => bytes,
            CodecOutput::Text(text) => text.into_bytes(),
        }
    }

    /// Borrow the text, if this is text output.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CodecOutput::Text(text) => Some(text),
            CodecOutput::Bytes(_) => None,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            CodecOutput::Bytes(bytes) => bytes.len(),
            CodecOutput::Text(text) => text.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A codec whose operations complete synchronously.
///
/// # Example
///
/// ```no_run
/// use efiscodec::io::traits::SyncCodec;
///
/// fn describe(codec: &dyn SyncCodec) {
///     println!("Format: {}", codec.format());
/// }
/// ```
pub trait SyncCodec: Send + Sync {
    /// The format this codec handles.
    fn format(&self) -> Format;

    /// Parse a whole buffer into the model.
    fn parse(&self, data: &[u8], file_name: &str) -> Result<ParsedChecklistFile>;

    /// Serialize the model. Pure: the file is not modified.
    fn serialize(&self, file: &ChecklistFile) -> Result<CodecOutput>;
}

/// A codec whose operations must be awaited.
///
/// No partial results are exposed: the future resolves to the full model
/// or output, or to an error.
#[async_trait]
pub trait AsyncCodec: Send + Sync {
    /// The format this codec handles.
    fn format(&self) -> Format;

    /// Parse a whole buffer into the model.
    async fn parse(&self, data: &[u8], file_name: &str) -> Result<ParsedChecklistFile>;

    /// Serialize the model.
    async fn serialize(&self, file: &ChecklistFile) -> Result<CodecOutput>;
}

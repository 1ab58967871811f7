// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! One-way PDF export.
//!
//! Layout lives in [`generator`]; drawing is delegated to a caller-supplied
//! [`DocumentWriter`]. Without a writer factory the codec cannot produce
//! output, and PDFs are never parsed.

pub mod generator;
pub mod writer;

#[cfg(test)]
pub(crate) mod recording;

use std::sync::Arc;

use async_trait::async_trait;

use crate::core::{ChecklistFile, Format, ParsedChecklistFile};
use crate::io::traits::{AsyncCodec, CodecOutput};
use crate::{CodecError, Result};

pub use generator::PdfGenerator;
pub use writer::{Color, DocumentWriter, FontStyle, PageSize};

/// Builds a fresh document writer per export.
pub type WriterFactory = Arc<dyn Fn() -> Box<dyn DocumentWriter> + Send + Sync>;

/// Export-only codec for PDF.
#[derive(Clone, Default)]
pub struct PdfCodec {
    factory: Option<WriterFactory>,
}

impl std::fmt::Debug for PdfCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PdfCodec")
            .field("has_writer", &self.factory.is_some())
            .finish()
    }
}

impl PdfCodec {
    /// A codec that can only report that export is unavailable.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_writer<F>(factory: F) -> Self
    where
        F: Fn() -> Box<dyn DocumentWriter> + Send + Sync + 'static,
    {
        Self {
            factory: Some(Arc::new(factory)),
        }
    }

    pub fn has_writer(&self) -> bool {
        self.factory.is_some()
    }
}

#[async_trait]
impl AsyncCodec for PdfCodec {
    fn format(&self) -> Format {
        Format::Pdf
    }

    async fn parse(&self, _data: &[u8], _file_name: &str) -> Result<ParsedChecklistFile> {
        Err(CodecError::unsupported("PDF import"))
    }

    async fn serialize(&self, file: &ChecklistFile) -> Result<CodecOutput> {
        let factory = self
            .factory
            .as_ref()
            .ok_or_else(|| CodecError::unsupported("PDF export without a document writer"))?;
        let mut writer = factory();
        PdfGenerator::new(writer.as_mut()).render(file);
        let bytes = writer.finish().await?;
        tracing::debug!(file = %file.name, bytes = bytes.len(), "rendered PDF");
        Ok(CodecOutput::Bytes(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Checklist, ChecklistGroup, ChecklistItem, GroupCategory};
    use super::recording::RecordingWriter;

    #[tokio::test]
    async fn test_parse_is_unsupported() {
        let err = PdfCodec::new().parse(b"%PDF-1.7", "x.pdf").await.unwrap_err();
        assert!(matches!(err, CodecError::UnsupportedFormat { .. }));
    }

    #[tokio::test]
    async fn test_serialize_without_writer_is_unsupported() {
        let file = ParsedChecklistFile::new("x", Format::Json).into_file();
        let err = PdfCodec::new().serialize(&file).await.unwrap_err();
        assert!(matches!(err, CodecError::UnsupportedFormat { .. }));
    }

    #[tokio::test]
    async fn test_serialize_with_writer() {
        let mut parsed = ParsedChecklistFile::new("x", Format::Json);
        parsed.groups = vec![ChecklistGroup::new("G", GroupCategory::Normal).with_checklists(
            vec![Checklist::new("C").with_items(vec![ChecklistItem::challenge("Belts")])],
        )];
        let codec = PdfCodec::with_writer(|| Box::new(RecordingWriter::default()));
        assert!(codec.has_writer());

        let bytes = codec.serialize(&parsed.into_file()).await.unwrap().into_bytes();
        assert!(bytes.starts_with(b"%PDF recorded"));
    }
}

// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Format registry.
//!
//! Maps each [`Format`] to its codec and dispatches detected files to the
//! right one. The default registry carries every built-in codec; PDF export
//! only works once a document writer has been supplied.
//!
//! # Example
//!
//! ```no_run
//! use efiscodec::io::registry::global_registry;
//! use efiscodec::Format;
//!
//! # async fn run(data: Vec<u8>) -> efiscodec::Result<()> {
//! let registry = global_registry();
//! let parsed = registry.parse(&data, "c172.ace").await?;
//! let json = registry.serialize(&parsed.into_file(), Format::Json).await?;
//! # Ok(())
//! # }
//! ```

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use crate::core::{ChecklistFile, Format, ParsedChecklistFile};
use crate::io::detection::detect_format;
use crate::io::formats::pdf::DocumentWriter;
use crate::io::formats::text::TextFormatConfig;
use crate::io::formats::{
    AceCodec, ForeFlightCodec, GarminPilotCodec, JsonCodec, PdfCodec, TextCodec,
};
use crate::io::traits::{AsyncCodec, CodecOutput, SyncCodec};
use crate::{CodecError, Result};

/// A codec as stored in the registry.
#[derive(Clone)]
pub enum RegisteredCodec {
    Sync(Arc<dyn SyncCodec>),
    Async(Arc<dyn AsyncCodec>),
}

impl std::fmt::Debug for RegisteredCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegisteredCodec::Sync(codec) => write!(f, "Sync({})", codec.format()),
            RegisteredCodec::Async(codec) => write!(f, "Async({})", codec.format()),
        }
    }
}

impl RegisteredCodec {
    pub fn format(&self) -> Format {
        match self {
            RegisteredCodec::Sync(codec) => codec.format(),
            RegisteredCodec::Async(codec) => codec.format(),
        }
    }

    pub fn is_async(&self) -> bool {
        matches!(self, RegisteredCodec::Async(_))
    }

    /// Parse through either capability; sync codecs complete immediately.
    pub async fn parse(&self, data: &[u8], file_name: &str) -> Result<ParsedChecklistFile> {
        match self {
            RegisteredCodec::Sync(codec) => codec.parse(data, file_name),
            RegisteredCodec::Async(codec) => codec.parse(data, file_name).await,
        }
    }

    pub async fn serialize(&self, file: &ChecklistFile) -> Result<CodecOutput> {
        match self {
            RegisteredCodec::Sync(codec) => codec.serialize(file),
            RegisteredCodec::Async(codec) => codec.serialize(file).await,
        }
    }
}

/// Registry of codecs keyed by format.
#[derive(Debug, Clone)]
pub struct FormatRegistry {
    codecs: HashMap<Format, RegisteredCodec>,
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl FormatRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            codecs: HashMap::new(),
        }
    }

    /// Create a registry holding every built-in codec.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register_sync(AceCodec);
        registry.register_sync(JsonCodec);
        registry.register_sync(TextCodec::dynon());
        registry.register_sync(TextCodec::grt());
        registry.register_sync(ForeFlightCodec);
        registry.register_async(GarminPilotCodec);
        registry.register_async(PdfCodec::new());
        registry
    }

    /// Register a synchronous codec, replacing any codec for its format.
    pub fn register_sync<C: SyncCodec + 'static>(&mut self, codec: C) {
        self.codecs
            .insert(codec.format(), RegisteredCodec::Sync(Arc::new(codec)));
    }

    /// Register an asynchronous codec, replacing any codec for its format.
    pub fn register_async<C: AsyncCodec + 'static>(&mut self, codec: C) {
        self.codecs
            .insert(codec.format(), RegisteredCodec::Async(Arc::new(codec)));
    }

    /// Enable PDF export with the given document writer factory.
    pub fn set_pdf_writer<F>(&mut self, factory: F)
    where
        F: Fn() -> Box<dyn DocumentWriter> + Send + Sync + 'static,
    {
        self.register_async(PdfCodec::with_writer(factory));
    }

    /// Replace the text dialect used for `format`.
    pub fn set_text_config(&mut self, format: Format, config: TextFormatConfig) -> Result<()> {
        self.register_sync(TextCodec::new(format, config)?);
        Ok(())
    }

    pub fn detect(&self, file_name: &str, peek: Option<&[u8]>) -> Option<Format> {
        detect_format(file_name, peek)
    }

    /// Look up the codec for a format.
    pub fn codec(&self, format: Format) -> Result<&RegisteredCodec> {
        self.codecs
            .get(&format)
            .ok_or_else(|| CodecError::unsupported(format!("no codec registered for {format}")))
    }

    /// Registered formats, in [`Format::ALL`] order.
    pub fn formats(&self) -> Vec<Format> {
        Format::ALL
            .into_iter()
            .filter(|f| self.codecs.contains_key(f))
            .collect()
    }

    /// Detect the format of `data` and parse it.
    pub async fn parse(&self, data: &[u8], file_name: &str) -> Result<ParsedChecklistFile> {
        let format = self.detect(file_name, Some(data)).ok_or_else(|| {
            CodecError::unsupported(format!("unrecognized checklist file {file_name:?}"))
        })?;
        if !format.is_importable() {
            return Err(CodecError::unsupported(format!("{format} import")));
        }
        tracing::debug!(file = file_name, format = %format, bytes = data.len(), "parsing");
        self.codec(format)?
            .parse(data, file_name)
            .await
            .inspect_err(|e| {
                tracing::debug!(
                    file = file_name,
                    format = %format,
                    fields = ?e.log_fields(),
                    "parse failed"
                )
            })
    }

    pub async fn serialize(&self, file: &ChecklistFile, format: Format) -> Result<CodecOutput> {
        tracing::debug!(file = %file.name, format = %format, "serializing");
        self.codec(format)?.serialize(file).await
    }
}

static GLOBAL_REGISTRY: OnceLock<FormatRegistry> = OnceLock::new();

/// Shared registry with the built-in codecs and no PDF writer.
///
/// Build a [`FormatRegistry`] directly to customize text dialects or enable
/// PDF export.
pub fn global_registry() -> &'static FormatRegistry {
    GLOBAL_REGISTRY.get_or_init(FormatRegistry::with_builtins)
}

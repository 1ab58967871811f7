// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # efiscodec
//!
//! Aircraft checklist conversion library.
//!
//! Checklists are read into one unified model and written back out in the
//! format of another avionics ecosystem:
//! - **Garmin ACE** binary in [`io::formats::ace`](crate::io::formats::ace)
//! - **Dynon/AFS and GRT** text in [`io::formats::text`](crate::io::formats::text)
//! - **ForeFlight** encrypted containers in [`io::formats::foreflight`](crate::io::formats::foreflight)
//! - **Garmin Pilot** packages in [`io::formats::garmin_pilot`](crate::io::formats::garmin_pilot)
//! - **JSON**, own and legacy schemas, in [`io::formats::json`](crate::io::formats::json)
//! - **PDF** export in [`io::formats::pdf`](crate::io::formats::pdf)
//!
//! ## Architecture
//!
//! - `core/` - Unified model, format identifiers, and the error type
//! - `io/traits.rs` - `SyncCodec` / `AsyncCodec` capabilities
//! - `io/detection.rs` - Format detection from file name and content
//! - `io/registry.rs` - Format-to-codec registry and dispatch
//! - `io/formats/` - One module per format
//!
//! Codecs never touch the filesystem: they take a byte buffer and a logical
//! file name and return the model, or take the model and return bytes.
//!
//! ## Example: Converting ACE to JSON
//!
//! ```rust,no_run
//! # async fn run(data: Vec<u8>) -> efiscodec::Result<()> {
//! use efiscodec::{global_registry, Format};
//!
//! let registry = global_registry();
//! let parsed = registry.parse(&data, "c172.ace").await?;
//! let output = registry.serialize(&parsed.into_file(), Format::Json).await?;
//! println!("{}", output.as_text().unwrap_or_default());
//! # Ok(())
//! # }
//! ```
//!
//! ## Example: Synchronous codecs
//!
//! ```rust,no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use efiscodec::io::formats::AceCodec;
//! use efiscodec::SyncCodec;
//!
//! let data = std::fs::read("c172.ace")?;
//! let parsed = AceCodec.parse(&data, "c172.ace")?;
//! println!("{} checklists", parsed.checklist_count());
//! # Ok(())
//! # }
//! ```

// Core types
pub mod core;

// Re-export core types for convenience
pub use core::{
    Checklist, ChecklistFile, ChecklistFileMetadata, ChecklistGroup, ChecklistItem, CodecError,
    Format, GroupCategory, ItemKind, ItemType, ParsedChecklistFile, Result,
};

// Codecs, detection, registry
pub mod io;

pub use io::formats::text::TextFormatConfig;
pub use io::{
    detect_format, global_registry, AsyncCodec, CodecOutput, FormatRegistry, RegisteredCodec,
    SyncCodec,
};

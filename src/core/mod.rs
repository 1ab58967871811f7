// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core types used throughout efiscodec.
//!
//! This module provides the foundational types for the library:
//! - [`CodecError`] - Typed failures shared by every codec
//! - [`model`] - The unified checklist model
//! - [`Format`] - On-disk format identifier

pub mod error;
pub mod model;

pub use error::{CodecError, Result};
pub use model::{
    Checklist, ChecklistFile, ChecklistFileMetadata, ChecklistGroup, ChecklistItem,
    GroupCategory, ItemKind, ItemType, ParsedChecklistFile,
};

/// On-disk checklist format identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// Garmin ACE binary
    Ace,
    /// The tool's own JSON (and the legacy third-party JSON on input)
    Json,
    /// Dynon SkyView / AFS text
    Dynon,
    /// GRT text
    Grt,
    /// ForeFlight encrypted container
    ForeFlight,
    /// Garmin Pilot gzip+tar package
    GarminPilot,
    /// PDF, export only
    Pdf,
}

/// Error returned when parsing a `Format` from string fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseFormatError {
    _private: (),
}

impl std::fmt::Display for ParseFormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid format name, expected one of 'ace', 'json', 'dynon', 'grt', 'foreflight', 'garmin-pilot', 'pdf'"
        )
    }
}

impl std::error::Error for ParseFormatError {}

impl std::str::FromStr for Format {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ace" => Ok(Format::Ace),
            "json" => Ok(Format::Json),
            "dynon" | "afs" | "afd" => Ok(Format::Dynon),
            "grt" => Ok(Format::Grt),
            "foreflight" | "fmd" => Ok(Format::ForeFlight),
            "garmin-pilot" | "garminpilot" | "gplt" => Ok(Format::GarminPilot),
            "pdf" => Ok(Format::Pdf),
            _ => Err(ParseFormatError { _private: () }),
        }
    }
}

impl Format {
    /// All formats, in registry order.
    pub const ALL: [Format; 7] = [
        Format::Ace,
        Format::Json,
        Format::Dynon,
        Format::Grt,
        Format::ForeFlight,
        Format::GarminPilot,
        Format::Pdf,
    ];

    /// Convert to string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Ace => "ace",
            Format::Json => "json",
            Format::Dynon => "dynon",
            Format::Grt => "grt",
            Format::ForeFlight => "foreflight",
            Format::GarminPilot => "garmin-pilot",
            Format::Pdf => "pdf",
        }
    }

    /// File extension written for this format, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Format::Ace => "ace",
            Format::Json => "json",
            Format::Dynon => "afd",
            Format::Grt => "txt",
            Format::ForeFlight => "fmd",
            Format::GarminPilot => "gplt",
            Format::Pdf => "pdf",
        }
    }

    /// Whether files of this format can be read back into the model.
    pub fn is_importable(&self) -> bool {
        !matches!(self, Format::Pdf)
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

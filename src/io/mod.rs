// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! I/O layer for checklist formats.
//!
//! This module provides the codec traits, format detection, the registry
//! that ties them together, and the format implementations themselves.

pub mod detection;
pub mod formats;
pub mod registry;

// Traits for format codecs
pub mod traits;

// Re-exports
pub use detection::detect_format;
pub use registry::{global_registry, FormatRegistry, RegisteredCodec};
pub use traits::{AsyncCodec, CodecOutput, SyncCodec};

// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Checklist format implementations.
//!
//! - [`ace`]: Garmin ACE binary
//! - [`text`]: Dynon/AFS and GRT text, driven by one templated engine
//! - [`foreflight`]: ForeFlight encrypted JSON container
//! - [`garmin_pilot`]: Garmin Pilot gzip+tar package
//! - [`json`]: own JSON schema, plus legacy JSON on input
//! - [`pdf`]: one-way PDF export

pub mod ace;
pub mod foreflight;
pub mod garmin_pilot;
pub mod json;
pub mod pdf;
pub mod text;
pub mod utils;

pub use ace::AceCodec;
pub use foreflight::ForeFlightCodec;
pub use garmin_pilot::GarminPilotCodec;
pub use json::JsonCodec;
pub use pdf::PdfCodec;
pub use text::TextCodec;

// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Format detection from the logical file name and an optional content peek.
//!
//! The extension decides for every format except `.txt`, which both text
//! dialects use. Those files are told apart by their first discriminating
//! line. When the extension is unknown, magic bytes are checked instead.
//!
//! # Example
//!
//! ```rust
//! use efiscodec::io::detection::detect_format;
//! use efiscodec::Format;
//!
//! assert_eq!(detect_format("c172.ace", None), Some(Format::Ace));
//! assert_eq!(detect_format("list.txt", Some(b"LIST Preflight\n")), Some(Format::Grt));
//! ```

use regex::Regex;

use crate::core::Format;
use crate::io::formats::ace::constants::ACE_MAGIC;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];
const PDF_MAGIC: &[u8] = b"%PDF";

/// Detect the format of a file.
///
/// Returns `None` when neither the extension nor the content identifies a
/// known format.
pub fn detect_format(file_name: &str, peek: Option<&[u8]>) -> Option<Format> {
    match extension(file_name).as_deref() {
        Some("ace") => Some(Format::Ace),
        Some("json") => Some(Format::Json),
        Some("afd") => Some(Format::Dynon),
        Some("fmd") => Some(Format::ForeFlight),
        Some("gplt") => Some(Format::GarminPilot),
        Some("pdf") => Some(Format::Pdf),
        Some("txt") => Some(peek.and_then(detect_text_dialect).unwrap_or(Format::Dynon)),
        _ => peek.and_then(detect_from_magic),
    }
}

fn extension(file_name: &str) -> Option<String> {
    let base = file_name.rsplit(['/', '\\']).next().unwrap_or(file_name);
    let (stem, ext) = base.rsplit_once('.')?;
    if stem.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// Distinguish Dynon from GRT by the first line that matches either
/// dialect's numbering.
pub fn detect_text_dialect(data: &[u8]) -> Option<Format> {
    let dynon = Regex::new(r"^CHKLST\d+\.").ok()?;
    let grt = Regex::new(r"^(LIST|ITEM)\b").ok()?;
    let text = String::from_utf8_lossy(data);

    for line in text.lines() {
        let line = line.trim_start_matches('\u{feff}').trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with("//") {
            continue;
        }
        if dynon.is_match(line) {
            return Some(Format::Dynon);
        }
        if grt.is_match(line) {
            return Some(Format::Grt);
        }
    }
    None
}

/// Fallback for files without a recognized extension.
fn detect_from_magic(data: &[u8]) -> Option<Format> {
    if data.starts_with(&ACE_MAGIC) {
        return Some(Format::Ace);
    }
    if data.starts_with(&GZIP_MAGIC) {
        return Some(Format::GarminPilot);
    }
    if data.starts_with(PDF_MAGIC) {
        return Some(Format::Pdf);
    }
    let first = data
        .iter()
        .copied()
        .find(|b| !b.is_ascii_whitespace())?;
    match first {
        b'{' => Some(Format::Json),
        _ => detect_text_dialect(data),
    }
}

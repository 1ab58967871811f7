// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Common utilities for CLI commands.

use std::path::Path;

use anyhow::Context as _;
use efiscodec::{Format, FormatRegistry, ParsedChecklistFile};

pub use anyhow::Result as CliResult;
pub type Result<T = ()> = CliResult<T>;

/// Logical file name handed to codecs: the path's final component.
pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Read a file and detect its format.
pub fn read_input(path: &Path) -> Result<(Vec<u8>, String, Format)> {
    let data = std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let name = file_name(path);
    let format = efiscodec::detect_format(&name, Some(&data))
        .with_context(|| format!("cannot detect the checklist format of {}", path.display()))?;
    Ok((data, name, format))
}

/// Read and parse a checklist file.
pub async fn parse_file(registry: &FormatRegistry, path: &Path) -> Result<ParsedChecklistFile> {
    let (data, name, format) = read_input(path)?;
    tracing::info!(file = %path.display(), format = %format, "reading");
    registry
        .codec(format)?
        .parse(&data, &name)
        .await
        .with_context(|| format!("failed to parse {} as {format}", path.display()))
}

/// Count challenge items and annotations across a file.
pub fn item_count(file: &ParsedChecklistFile) -> usize {
    file.groups
        .iter()
        .flat_map(|g| &g.checklists)
        .map(|c| c.items.len())
        .sum()
}

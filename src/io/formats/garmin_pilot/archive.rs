// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Garmin Pilot package container: a gzip-compressed tar archive holding
//! exactly one `content.json` entry.

use std::io::Read;

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use tar::{Archive, Builder, Header};

use crate::{CodecError, Result};

/// Name of the only entry in the archive.
pub const CONTENT_ENTRY: &str = "content.json";

const CONTEXT: &str = "Garmin Pilot archive";

/// Wrap `content` into a `.gplt` archive.
pub fn pack(content: &[u8]) -> Result<Vec<u8>> {
    let encoder = GzEncoder::new(Vec::new(), Compression::default());
    let mut builder = Builder::new(encoder);

    let mut header = Header::new_gnu();
    header.set_size(content.len() as u64);
    header.set_mode(0o644);
    header.set_mtime(0);
    header.set_cksum();
    builder
        .append_data(&mut header, CONTENT_ENTRY, content)
        .map_err(|e| CodecError::Other(format!("failed to write {CONTENT_ENTRY}: {e}")))?;

    let encoder = builder
        .into_inner()
        .map_err(|e| CodecError::Other(format!("failed to finish tar archive: {e}")))?;
    encoder
        .finish()
        .map_err(|e| CodecError::Other(format!("failed to finish gzip stream: {e}")))
}

/// Extract `content.json` from a `.gplt` archive.
///
/// # Errors
///
/// Returns `CodecError::SchemaViolation` if the data is not a gzip tar
/// archive, or if it holds anything but a single `content.json`.
pub fn unpack(data: &[u8]) -> Result<Vec<u8>> {
    let mut archive = Archive::new(GzDecoder::new(data));
    let mut content: Option<Vec<u8>> = None;

    let entries = archive
        .entries()
        .map_err(|e| CodecError::schema(CONTEXT, e.to_string()))?;
    for entry in entries {
        let mut entry = entry.map_err(|e| CodecError::schema(CONTEXT, e.to_string()))?;
        let path = entry
            .path()
            .map_err(|e| CodecError::schema(CONTEXT, e.to_string()))?
            .to_string_lossy()
            .to_string();
        let name = path.strip_prefix("./").unwrap_or(&path);
        if name != CONTENT_ENTRY {
            return Err(CodecError::schema(
                CONTEXT,
                format!("unexpected entry {path:?}"),
            ));
        }
        if content.is_some() {
            return Err(CodecError::schema(
                CONTEXT,
                format!("duplicate {CONTENT_ENTRY}"),
            ));
        }
        let mut bytes = Vec::new();
        entry
            .read_to_end(&mut bytes)
            .map_err(|e| CodecError::schema(CONTEXT, e.to_string()))?;
        content = Some(bytes);
    }

    content.ok_or_else(|| CodecError::schema(CONTEXT, format!("missing {CONTENT_ENTRY}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn archive_with(entries: &[(&str, &[u8])]) -> Vec<u8> {
        let mut builder = Builder::new(GzEncoder::new(Vec::new(), Compression::default()));
        for (name, bytes) in entries {
            let mut header = Header::new_gnu();
            header.set_size(bytes.len() as u64);
            header.set_mode(0o644);
            header.set_cksum();
            builder.append_data(&mut header, name, *bytes).unwrap();
        }
        builder.into_inner().unwrap().finish().unwrap()
    }

    #[test]
    fn test_pack_unpack() {
        let packed = pack(br#"{"a":1}"#).unwrap();
        assert_eq!(&packed[..2], &[0x1f, 0x8b], "gzip magic");
        assert_eq!(unpack(&packed).unwrap(), br#"{"a":1}"#.to_vec());
    }

    #[test]
    fn test_extra_entry_is_rejected() {
        let data = archive_with(&[(CONTENT_ENTRY, b"{}"), ("other.txt", b"x")]);
        assert!(matches!(unpack(&data), Err(CodecError::SchemaViolation { .. })));
    }

    #[test]
    fn test_missing_content_is_rejected() {
        let data = archive_with(&[("other.txt", b"x")]);
        assert!(matches!(unpack(&data), Err(CodecError::SchemaViolation { .. })));
        let empty = archive_with(&[]);
        assert!(matches!(unpack(&empty), Err(CodecError::SchemaViolation { .. })));
    }

    #[test]
    fn test_not_gzip() {
        assert!(matches!(
            unpack(b"plain text"),
            Err(CodecError::SchemaViolation { .. })
        ));
    }
}

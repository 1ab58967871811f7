// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! ForeFlight `.fmd` checklist container.
//!
//! An AES-encrypted JSON document. The conversion is lossy: ForeFlight has
//! no indentation, centering or copyright, and annotations are attached to
//! the item above them.

pub mod cipher;
pub mod reader;
pub mod schema;
pub mod writer;

pub use cipher::{decrypt, encrypt};

use crate::core::{ChecklistFile, Format, ParsedChecklistFile};
use crate::io::traits::{CodecOutput, SyncCodec};
use crate::Result;

/// Codec for ForeFlight `.fmd` files.
#[derive(Debug, Clone, Copy, Default)]
pub struct ForeFlightCodec;

impl SyncCodec for ForeFlightCodec {
    fn format(&self) -> Format {
        Format::ForeFlight
    }

    fn parse(&self, data: &[u8], file_name: &str) -> Result<ParsedChecklistFile> {
        reader::parse(data, file_name)
    }

    fn serialize(&self, file: &ChecklistFile) -> Result<CodecOutput> {
        writer::serialize(file).map(CodecOutput::Bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Checklist, ChecklistGroup, ChecklistItem, GroupCategory};

    #[test]
    fn test_empty_title_round_trip() {
        let mut parsed = ParsedChecklistFile::new("PA28", Format::ForeFlight);
        parsed.groups = vec![ChecklistGroup::new("Normal", GroupCategory::Normal)
            .with_checklists(vec![Checklist::new("Start").with_items(vec![
                ChecklistItem::title(""),
                ChecklistItem::note("Brief passengers").with_indent(1),
                ChecklistItem::challenge("Beacon"),
            ])])];

        let codec = ForeFlightCodec;
        let bytes = codec.serialize(&parsed.into_file()).unwrap().into_bytes();
        let reparsed = codec.parse(&bytes, "PA28.fmd").unwrap();
        // ForeFlight has no indentation for standalone annotations
        assert_eq!(
            reparsed.groups[0].checklists[0].items,
            vec![
                ChecklistItem::title(""),
                ChecklistItem::note("Brief passengers"),
                ChecklistItem::challenge("Beacon"),
            ]
        );
    }

    #[test]
    fn test_round_trip_of_merge_normalized_items() {
        let items = vec![
            ChecklistItem::title("Before Start"),
            ChecklistItem::note("Brief passengers").with_indent(1),
            ChecklistItem::challenge_response("Seats", "LOCKED"),
            ChecklistItem::warning("Check latch").with_indent(1),
            ChecklistItem::challenge("Beacon"),
            ChecklistItem::caution("Loose items"),
        ];
        let mut parsed = ParsedChecklistFile::new("PA28", Format::ForeFlight);
        parsed.metadata.make_model = "Piper Archer".to_string();
        parsed.metadata.aircraft_registration = "N8154".to_string();
        parsed.groups = vec![
            ChecklistGroup::new("Normal", GroupCategory::Normal)
                .with_checklists(vec![Checklist::new("Start").with_items(items.clone())]),
            ChecklistGroup::new("Fire", GroupCategory::Emergency)
                .with_checklists(vec![Checklist::new("Cabin Fire")]),
        ];

        let codec = ForeFlightCodec;
        let bytes = codec.serialize(&parsed.clone().into_file()).unwrap().into_bytes();
        let reparsed = codec.parse(&bytes, "PA28.fmd").unwrap();

        assert_eq!(reparsed.name, "PA28");
        assert_eq!(reparsed.metadata, parsed.metadata);
        assert_eq!(reparsed.groups.len(), 2);
        assert_eq!(reparsed.groups[0].checklists[0].items, items);
        assert_eq!(reparsed.groups[1].category, GroupCategory::Emergency);
        assert_eq!(reparsed.groups[1].name, "Fire");
    }
}

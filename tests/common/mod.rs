// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Common utilities for integration tests.

#![allow(dead_code)]

use efiscodec::{
    Checklist, ChecklistFile, ChecklistGroup, ChecklistItem, Format, GroupCategory,
    ParsedChecklistFile,
};

// ============================================================================
// Fixture Builder
// ============================================================================

/// Fluent builder for checklist files used across integration tests.
#[derive(Debug, Clone)]
pub struct FixtureBuilder {
    file: ParsedChecklistFile,
}

impl FixtureBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            file: ParsedChecklistFile::new(name, Format::Json),
        }
    }

    pub fn make_model(mut self, value: &str) -> Self {
        self.file.metadata.make_model = value.to_string();
        self
    }

    pub fn registration(mut self, value: &str) -> Self {
        self.file.metadata.aircraft_registration = value.to_string();
        self
    }

    pub fn copyright(mut self, value: &str) -> Self {
        self.file.metadata.copyright = value.to_string();
        self
    }

    /// Add a group holding one checklist.
    pub fn checklist(
        mut self,
        group: &str,
        category: GroupCategory,
        name: &str,
        items: Vec<ChecklistItem>,
    ) -> Self {
        let checklist = Checklist::new(name).with_items(items);
        match self
            .file
            .groups
            .iter_mut()
            .find(|g| g.name == group && g.category == category)
        {
            Some(existing) => existing.checklists.push(checklist),
            None => self
                .file
                .groups
                .push(ChecklistGroup::new(group, category).with_checklists(vec![checklist])),
        }
        self
    }

    pub fn parsed(self) -> ParsedChecklistFile {
        self.file
    }

    pub fn build(self) -> ChecklistFile {
        self.file.into_file()
    }
}

// ============================================================================
// Standard Fixtures
// ============================================================================

/// Checks only, no annotations: survives every format unchanged.
pub fn simple_items() -> Vec<ChecklistItem> {
    vec![
        ChecklistItem::challenge_response("Fuel Selector", "BOTH"),
        ChecklistItem::challenge_response("Mixture", "RICH"),
        ChecklistItem::challenge("Seat Belts"),
    ]
}

/// A file every format can carry without loss.
pub fn simple_file() -> ChecklistFile {
    FixtureBuilder::new("C172")
        .make_model("Cessna 172S")
        .registration("N12345")
        .checklist("Preflight", GroupCategory::Normal, "Cabin", simple_items())
        .checklist(
            "Fire",
            GroupCategory::Emergency,
            "Engine Fire",
            vec![
                ChecklistItem::challenge_response("Mixture", "CUTOFF"),
                ChecklistItem::challenge_response("Fuel Shutoff", "OFF"),
            ],
        )
        .build()
}

/// Every item type, with indentation, for the formats that keep layout.
pub fn rich_items() -> Vec<ChecklistItem> {
    vec![
        ChecklistItem::title("Before Start"),
        ChecklistItem::challenge_response("Brakes", "SET"),
        ChecklistItem::note("Hold firmly").with_indent(1),
        ChecklistItem::challenge("Circuit Breakers"),
        ChecklistItem::warning("Propeller area clear").with_indent(1),
        ChecklistItem::caution("Avionics off").with_indent(1),
        ChecklistItem::challenge_response("Beacon", "ON").with_indent(1),
    ]
}

pub fn rich_file() -> ChecklistFile {
    FixtureBuilder::new("SR22")
        .make_model("Cirrus SR22")
        .registration("N22SR")
        .copyright("(c) 2026 Flight Dept")
        .checklist("Normal", GroupCategory::Normal, "Engine Start", rich_items())
        .checklist(
            "Normal",
            GroupCategory::Normal,
            "Taxi",
            vec![ChecklistItem::challenge_response("Brakes", "CHECK")],
        )
        .build()
}

// ============================================================================
// Assertions
// ============================================================================

/// All items of a file, in document order.
pub fn all_items(file: &ParsedChecklistFile) -> Vec<ChecklistItem> {
    file.groups
        .iter()
        .flat_map(|g| &g.checklists)
        .flat_map(|c| c.items.iter().cloned())
        .collect()
}

/// Checklist names per group, for structural comparison.
pub fn outline(groups: &[ChecklistGroup]) -> Vec<(String, Vec<String>)> {
    groups
        .iter()
        .map(|g| {
            (
                g.name.clone(),
                g.checklists.iter().map(|c| c.name.clone()).collect(),
            )
        })
        .collect()
}

/// Upper-case every text field, as the GRT dialect does on output.
pub fn uppercased(items: &[ChecklistItem]) -> Vec<ChecklistItem> {
    items
        .iter()
        .map(|item| {
            let kind = efiscodec::ItemKind::from_parts(
                item.item_type(),
                item.text().to_uppercase(),
                item.response().unwrap_or_default().to_uppercase(),
            );
            ChecklistItem::new(kind)
                .with_centered(item.centered)
                .with_indent(item.indent)
                .with_collapsible(item.collapsible)
        })
        .collect()
}

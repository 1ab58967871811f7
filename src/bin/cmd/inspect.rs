// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Inspect command - show file name, metadata, groups and checklists.

use std::path::PathBuf;

use clap::Args;

use crate::common::{item_count, parse_file, Result};
use efiscodec::FormatRegistry;

/// Inspect file contents.
#[derive(Args, Clone, Debug)]
pub struct InspectCmd {
    /// Input file
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// List every item, not just counts
    #[arg(long)]
    items: bool,
}

impl InspectCmd {
    pub async fn run(self) -> Result<()> {
        let registry = FormatRegistry::with_builtins();
        let file = parse_file(&registry, &self.input).await?;

        println!("=== {} ===", self.input.display());
        println!("Name: {}", file.name);
        println!("Format: {}", file.format);
        let metadata = &file.metadata;
        for (label, value) in [
            ("Make/Model", &metadata.make_model),
            ("Registration", &metadata.aircraft_registration),
            ("Copyright", &metadata.copyright),
        ] {
            if !value.is_empty() {
                println!("{label}: {value}");
            }
        }
        println!(
            "Groups: {}, checklists: {}, items: {}",
            file.groups.len(),
            file.checklist_count(),
            item_count(&file)
        );

        for group in &file.groups {
            println!();
            println!("[{}] {}", group.category.as_str(), group.name);
            for checklist in &group.checklists {
                println!("  {} ({} items)", checklist.name, checklist.items.len());
                if self.items {
                    for item in &checklist.items {
                        let pad = "  ".repeat(usize::from(item.indent));
                        match item.response() {
                            Some(response) => println!("      {pad}{} - {response}", item.text()),
                            None => println!("      {pad}{:?}: {}", item.item_type(), item.text()),
                        }
                    }
                }
            }
        }

        Ok(())
    }
}

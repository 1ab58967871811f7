// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Convert command - read a checklist file and write it in another format.

use std::path::PathBuf;

use anyhow::{bail, Context as _};
use clap::Args;

use crate::common::{file_name, parse_file, Result};
use efiscodec::{Format, FormatRegistry, TextFormatConfig};

/// Convert a checklist file.
#[derive(Args, Clone, Debug)]
pub struct ConvertCmd {
    /// Input file; its format is detected
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output file
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Target format (defaults to the output extension)
    #[arg(long, value_name = "FORMAT")]
    to: Option<Format>,

    /// TOML dialect overriding the Dynon/GRT text layout
    #[arg(long, value_name = "TOML")]
    text_config: Option<PathBuf>,
}

impl ConvertCmd {
    pub async fn run(self) -> Result<()> {
        let target = match self.to {
            Some(format) => format,
            None => efiscodec::detect_format(&file_name(&self.output), None).with_context(|| {
                format!(
                    "cannot infer the target format from {}, pass --to",
                    self.output.display()
                )
            })?,
        };

        let mut registry = FormatRegistry::with_builtins();
        if let Some(path) = &self.text_config {
            if !matches!(target, Format::Dynon | Format::Grt) {
                bail!("--text-config only applies to dynon and grt output, not {target}");
            }
            let source = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let config = TextFormatConfig::from_toml_str(&source)?;
            registry.set_text_config(target, config)?;
        }

        let parsed = parse_file(&registry, &self.input).await?;
        let source = parsed.format;
        let file = parsed.into_file();
        let output = registry
            .serialize(&file, target)
            .await
            .with_context(|| format!("failed to write {target}"))?;

        std::fs::write(&self.output, output.into_bytes())
            .with_context(|| format!("failed to write {}", self.output.display()))?;
        tracing::info!(
            from = %source,
            to = %target,
            output = %self.output.display(),
            "converted"
        );
        println!(
            "Converted {} ({source}) -> {} ({target})",
            self.input.display(),
            self.output.display()
        );
        Ok(())
    }
}

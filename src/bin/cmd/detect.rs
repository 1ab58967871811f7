// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Detect command - print the format of a file.

use std::path::PathBuf;

use clap::Args;

use crate::common::{read_input, Result};

/// Print the detected format.
#[derive(Args, Clone, Debug)]
pub struct DetectCmd {
    /// Input file
    #[arg(value_name = "FILE")]
    input: PathBuf,
}

impl DetectCmd {
    pub fn run(self) -> Result<()> {
        let (_, _, format) = read_input(&self.input)?;
        println!("{format}");
        Ok(())
    }
}

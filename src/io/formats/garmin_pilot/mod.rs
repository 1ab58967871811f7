// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Garmin Pilot `.gplt` checklist package.
//!
//! Compression and archive handling is blocking work, so the codec is an
//! [`AsyncCodec`] that moves it onto tokio's blocking pool when polled
//! inside a tokio runtime, and runs it inline otherwise. The conversion
//! is lossy: titles become notes, and only the group names Garmin Pilot
//! knows survive as groups.

pub mod archive;
pub mod reader;
pub mod schema;
pub mod tables;
pub mod writer;

use async_trait::async_trait;

use crate::core::{ChecklistFile, Format, ParsedChecklistFile};
use crate::io::traits::{AsyncCodec, CodecOutput};
use crate::{CodecError, Result};

/// Codec for Garmin Pilot `.gplt` packages.
#[derive(Debug, Clone, Copy, Default)]
pub struct GarminPilotCodec;

fn join_error(e: tokio::task::JoinError) -> CodecError {
    CodecError::Other(format!("Garmin Pilot task failed: {e}"))
}

/// Run blocking work on the current runtime's blocking pool, or inline
/// when there is no tokio runtime.
async fn run_blocking<T, F>(work: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    match tokio::runtime::Handle::try_current() {
        Ok(handle) => handle.spawn_blocking(work).await.map_err(join_error)?,
        Err(_) => work(),
    }
}

#[async_trait]
impl AsyncCodec for GarminPilotCodec {
    fn format(&self) -> Format {
        Format::GarminPilot
    }

    async fn parse(&self, data: &[u8], file_name: &str) -> Result<ParsedChecklistFile> {
        let data = data.to_vec();
        let file_name = file_name.to_string();
        run_blocking(move || reader::parse(&data, &file_name)).await
    }

    async fn serialize(&self, file: &ChecklistFile) -> Result<CodecOutput> {
        let file = file.clone();
        run_blocking(move || writer::serialize(&file))
            .await
            .map(CodecOutput::Bytes)
    }
}

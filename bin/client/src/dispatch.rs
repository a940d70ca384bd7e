use crate::backend::FileBackend;
use crate::error::{output_failed, FetchError};
use crate::output::{OutputSink, Payload};
use clap::Subcommand;
use common::FileId;
use log::info;
use std::io::Write;

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Retrieve file metadata
    Stat {
        /// File UUID
        id: FileId,
    },
    /// Retrieve file contents
    Read {
        /// File UUID
        id: FileId,
    },
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Stat { .. } => "stat",
            Command::Read { .. } => "read",
        }
    }
}

/// Run one command against one backend and hand the result to the sink.
/// Nothing reaches the sink unless the backend call succeeded.
pub fn run<W: Write>(
    command: &Command,
    backend: &dyn FileBackend,
    sink: &mut OutputSink<W>,
) -> Result<(), FetchError> {
    let payload = match command {
        Command::Stat { id } => {
            info!("Fetching metadata for {}", id);
            Payload::Metadata(backend.stat(id)?)
        }
        Command::Read { id } => {
            info!("Fetching content for {}", id);
            Payload::Content(backend.read(id)?)
        }
    };

    sink.write(&payload)
        .map_err(|e| output_failed(&format!("Failed to write {} output", command.name()), e))
}

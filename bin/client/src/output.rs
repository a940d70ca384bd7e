use crate::constants::STDOUT_SENTINEL;
use common::FileMetadata;
use log::info;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// Where a successful result ends up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    File(PathBuf),
}

impl Destination {
    /// Parse the `--output` argument, `-` meaning standard output
    pub fn from_arg(arg: &str) -> Self {
        if arg == STDOUT_SENTINEL {
            Destination::Stdout
        } else {
            Destination::File(PathBuf::from(arg))
        }
    }
}

/// Result of a successful request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    Metadata(FileMetadata),
    Content(Vec<u8>),
}

impl Payload {
    fn label(&self) -> &'static str {
        match self {
            Payload::Metadata(_) => "Metadata",
            Payload::Content(_) => "Content",
        }
    }

    /// Bytes stored when the payload goes to a file
    fn to_file_bytes(&self) -> Vec<u8> {
        match self {
            Payload::Metadata(metadata) => render_metadata(metadata).into_bytes(),
            Payload::Content(content) => content.clone(),
        }
    }

    /// Text printed when the payload goes to standard output
    /// Content is decoded lossily: invalid UTF-8 becomes U+FFFD instead of failing
    fn to_console_text(&self) -> String {
        match self {
            Payload::Metadata(metadata) => render_metadata(metadata),
            Payload::Content(content) => {
                let mut text = String::from_utf8_lossy(content).into_owned();
                text.push('\n');
                text
            }
        }
    }
}

/// Render metadata with the fixed four-field template
pub fn render_metadata(metadata: &FileMetadata) -> String {
    format!(
        "File Metadata:\n- Name: {}\n- Size: {} bytes\n- MIME Type: {}\n- Created: {}\n",
        metadata.name, metadata.size, metadata.mime_type, metadata.created_at
    )
}

/// Writes payloads to a destination
/// `console` receives either the payload itself (stdout) or a confirmation line (file)
pub struct OutputSink<W: Write> {
    destination: Destination,
    console: W,
}

impl<W: Write> OutputSink<W> {
    pub fn new(destination: Destination, console: W) -> Self {
        Self {
            destination,
            console,
        }
    }

    pub fn write(&mut self, payload: &Payload) -> io::Result<()> {
        match &self.destination {
            Destination::Stdout => {
                self.console
                    .write_all(payload.to_console_text().as_bytes())?;
            }
            Destination::File(path) => {
                let bytes = payload.to_file_bytes();
                // Overwrites any existing file
                fs::write(path, &bytes)?;
                info!("Wrote {} bytes to {}", bytes.len(), path.display());
                writeln!(
                    self.console,
                    "{} saved to {}",
                    payload.label(),
                    path.display()
                )?;
            }
        }
        self.console.flush()
    }

    #[cfg(test)]
    fn into_console(self) -> W {
        self.console
    }
}

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Fields printed by `stat`
#[derive(Debug, PartialEq, Eq)]
pub struct PrintedMetadata {
    pub name: String,
    pub size: u64,
    pub mime_type: String,
    pub created: String,
}

pub fn parse_metadata(stdout: &str) -> Result<PrintedMetadata> {
    let mut lines = stdout.lines();
    if lines.next() != Some("File Metadata:") {
        anyhow::bail!("Unexpected stat output:\n{}", stdout);
    }

    let mut field = |prefix: &str| -> Result<String> {
        let line = lines
            .next()
            .with_context(|| format!("Missing '{}' line in stat output", prefix))?;
        line.strip_prefix(prefix)
            .map(str::to_string)
            .with_context(|| format!("Expected '{}' but found '{}'", prefix, line))
    };

    let name = field("- Name: ")?;
    let size = field("- Size: ")?;
    let mime_type = field("- MIME Type: ")?;
    let created = field("- Created: ")?;

    let size = size
        .strip_suffix(" bytes")
        .and_then(|s| s.parse().ok())
        .with_context(|| format!("Invalid size line: {}", size))?;

    Ok(PrintedMetadata {
        name,
        size,
        mime_type,
        created,
    })
}

pub fn validate_metadata_match(rest: &str, grpc: &str) -> Result<PrintedMetadata> {
    let rest = parse_metadata(rest).context("REST stat output")?;
    let grpc = parse_metadata(grpc).context("gRPC stat output")?;
    if rest != grpc {
        anyhow::bail!("Backends disagree on metadata:\n{:?}\n{:?}", rest, grpc);
    }
    println!("  ✓ Metadata matches: {} ({} bytes)", rest.name, rest.size);
    Ok(rest)
}

pub fn validate_content_match(
    rest_file: &Path,
    grpc_file: &Path,
    metadata: &PrintedMetadata,
) -> Result<()> {
    let rest = fs::read(rest_file)
        .with_context(|| format!("Failed to read REST output: {:?}", rest_file))?;
    let grpc = fs::read(grpc_file)
        .with_context(|| format!("Failed to read gRPC output: {:?}", grpc_file))?;

    if rest != grpc {
        anyhow::bail!(
            "Backends returned different content ({} vs {} bytes)",
            rest.len(),
            grpc.len()
        );
    }
    println!("  ✓ Content matches across backends");

    if rest.len() as u64 != metadata.size {
        anyhow::bail!(
            "Content is {} bytes but metadata reports {}",
            rest.len(),
            metadata.size
        );
    }
    println!("  ✓ Content size matches metadata");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_metadata() {
        let stdout = "File Metadata:\n- Name: a.txt\n- Size: 12 bytes\n- MIME Type: text/plain\n- Created: 2024-01-01T12:00:00\n";
        let parsed = parse_metadata(stdout).unwrap();
        assert_eq!(parsed.name, "a.txt");
        assert_eq!(parsed.size, 12);
        assert_eq!(parsed.mime_type, "text/plain");
        assert_eq!(parsed.created, "2024-01-01T12:00:00");
    }

    #[test]
    fn test_parse_metadata_rejects_messages() {
        assert!(parse_metadata("File not found. Please check the UUID and try again.\n").is_err());
        assert!(parse_metadata("File Metadata:\n- Name: a.txt\n- Size: many bytes\n").is_err());
    }
}

pub mod file_id;

pub use file_id::{FileId, FileIdValidationError};

use serde::{Deserialize, Serialize};

/// Metadata of a remote file, as returned by the `stat` operation
/// Field names on the wire follow the file service: `mimetype`, `create_datetime`
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct FileMetadata {
    pub name: String,
    pub size: u64, // bytes
    #[serde(rename = "mimetype")]
    pub mime_type: String,
    #[serde(rename = "create_datetime")]
    pub created_at: String, // passed through verbatim, never parsed
}

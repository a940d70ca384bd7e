use std::fmt;
use std::str::FromStr;

/// Error type for file identifier validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileIdValidationError {
    Empty,
}

impl FileIdValidationError {
    pub fn message(&self) -> &'static str {
        match self {
            FileIdValidationError::Empty => "File id cannot be empty",
        }
    }
}

impl fmt::Display for FileIdValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for FileIdValidationError {}

/// Opaque identifier of a remote file.
///
/// The client never interprets the id; it is only checked for emptiness and
/// handed to the backend as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileId(String);

impl FileId {
    pub fn new(id: impl Into<String>) -> Result<Self, FileIdValidationError> {
        let id = id.into();
        validate_file_id(&id)?;
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Validate a file identifier
fn validate_file_id(id: &str) -> Result<(), FileIdValidationError> {
    if id.is_empty() {
        return Err(FileIdValidationError::Empty);
    }
    Ok(())
}

impl FromStr for FileId {
    type Err = FileIdValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

//! Transport adapters for the file service

pub mod grpc;
pub mod rest;

use crate::config::ClientConfig;
use crate::error::FetchError;
use clap::ValueEnum;
use common::{FileId, FileMetadata};
use grpc::GrpcBackend;
use rest::RestBackend;

/// Operations every file service backend supports.
/// Implementations classify their own failures; callers only ever see `FetchError`.
pub trait FileBackend {
    /// Fetch the metadata of a file
    fn stat(&self, id: &FileId) -> Result<FileMetadata, FetchError>;

    /// Fetch the raw content of a file
    fn read(&self, id: &FileId) -> Result<Vec<u8>, FetchError>;
}

/// Backend type
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BackendKind {
    Grpc,
    Rest,
}

impl BackendKind {
    /// Initialize the backend selected by the configuration
    pub fn initialize(self, config: &ClientConfig) -> Box<dyn FileBackend> {
        match self {
            BackendKind::Grpc => Box::new(GrpcBackend::new(config.grpc_server.clone())),
            BackendKind::Rest => Box::new(RestBackend::new(config.base_url.clone())),
        }
    }
}

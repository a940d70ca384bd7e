//! gRPC contract of the file service

pub mod file {
    tonic::include_proto!("file");
}

use common::FileMetadata;

pub use file::{
    file_service_client::FileServiceClient,
    file_service_server::{FileService, FileServiceServer},
    ReadReply, ReadRequest, StatReply, StatRequest,
};

impl From<StatReply> for FileMetadata {
    fn from(reply: StatReply) -> Self {
        FileMetadata {
            name: reply.name,
            size: reply.size,
            mime_type: reply.mimetype,
            created_at: reply.create_datetime,
        }
    }
}

impl From<FileMetadata> for StatReply {
    fn from(metadata: FileMetadata) -> Self {
        StatReply {
            name: metadata.name,
            size: metadata.size,
            mimetype: metadata.mime_type,
            create_datetime: metadata.created_at,
        }
    }
}

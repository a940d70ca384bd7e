//! gRPC backend
//!
//! Each call opens its own channel on a single-threaded runtime and tears both
//! down before returning, whatever the result.

use super::FileBackend;
use crate::error::{not_found, unexpected, unreachable, FetchError};
use common::{FileId, FileMetadata};
use log::info;
use proto::{FileServiceClient, ReadRequest, StatRequest};
use std::future::Future;
use tonic::transport::{Channel, Endpoint};
use tonic::{Code, Status};

pub struct GrpcBackend {
    server: String,
}

impl GrpcBackend {
    pub fn new(server: String) -> Self {
        Self { server }
    }

    /// The server is given as `host:port`; tonic needs a URI
    fn endpoint_uri(&self) -> String {
        if self.server.contains("://") {
            self.server.clone()
        } else {
            format!("http://{}", self.server)
        }
    }

    /// Run one RPC on a channel scoped to this call
    fn call<T, F, Fut>(&self, operation: &str, rpc: F) -> Result<T, FetchError>
    where
        F: FnOnce(FileServiceClient<Channel>) -> Fut,
        Fut: Future<Output = Result<T, Status>>,
    {
        let context = format!("gRPC error during {} request", operation);

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| unexpected("Failed to start gRPC runtime", e))?;

        runtime.block_on(async {
            let endpoint =
                Endpoint::from_shared(self.endpoint_uri()).map_err(|e| unreachable(&context, e))?;
            info!("Connecting to gRPC server {}", self.server);
            let channel = endpoint
                .connect()
                .await
                .map_err(|e| unreachable(&context, e))?;
            rpc(FileServiceClient::new(channel))
                .await
                .map_err(|status| classify_status(&context, status))
        })
    }
}

/// NOT_FOUND is the only status that means the file is missing;
/// every other status is reported as an unreachable server
fn classify_status(context: &str, status: Status) -> FetchError {
    match status.code() {
        Code::NotFound => not_found(context, status),
        _ => unreachable(context, status),
    }
}

impl FileBackend for GrpcBackend {
    fn stat(&self, id: &FileId) -> Result<FileMetadata, FetchError> {
        let request = StatRequest {
            uuid: id.to_string(),
        };
        self.call("stat", |mut client| async move {
            let reply = client.stat(request).await?;
            Ok(FileMetadata::from(reply.into_inner()))
        })
    }

    fn read(&self, id: &FileId) -> Result<Vec<u8>, FetchError> {
        let request = ReadRequest {
            uuid: id.to_string(),
        };
        self.call("read", |mut client| async move {
            let reply = client.read(request).await?;
            Ok(reply.into_inner().content)
        })
    }
}

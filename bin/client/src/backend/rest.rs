//! REST backend over blocking HTTP

use super::FileBackend;
use crate::constants::{FILE_ENDPOINT, READ_ENDPOINT, STAT_ENDPOINT};
use crate::error::{not_found, unexpected, unreachable, FetchError};
use common::{FileId, FileMetadata};
use log::info;
use reqwest::blocking::{Client, Response};
use reqwest::{StatusCode, Url};
use std::error::Error;
use std::io;

pub struct RestBackend {
    base_url: String,
}

impl RestBackend {
    pub fn new(base_url: String) -> Self {
        Self { base_url }
    }

    /// Build `{base_url}/file/{id}/{operation}/`
    /// A trailing slash on the base URL is tolerated and the id is percent-encoded
    fn endpoint_url(&self, id: &FileId, operation: &str) -> Result<Url, FetchError> {
        let mut url =
            Url::parse(&self.base_url).map_err(|e| unexpected("Invalid base URL", e))?;
        url.path_segments_mut()
            .map_err(|_| unexpected("Invalid base URL", &self.base_url))?
            .pop_if_empty()
            .extend([FILE_ENDPOINT, id.as_str(), operation, ""]);
        Ok(url)
    }

    /// Issue a GET and classify any non-success response
    fn get(&self, id: &FileId, operation: &str) -> Result<Response, FetchError> {
        let context = format!("Error during REST {} request", operation);
        let url = self.endpoint_url(id, operation)?;

        let client = Client::builder()
            .build()
            .map_err(|e| unexpected("Failed to build HTTP client", e))?;

        info!("GET {}", url);
        let response = client
            .get(url)
            .send()
            .map_err(|e| classify_transport_error(&context, e))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(not_found(&context, status));
        }
        if !status.is_success() {
            return Err(unexpected(&context, status));
        }
        Ok(response)
    }
}

/// Failures before any response arrived mean the server could not be reached;
/// anything else reqwest reports is unexpected
fn classify_transport_error(context: &str, e: reqwest::Error) -> FetchError {
    if e.is_connect() || e.is_timeout() || e.is_request() || is_connection_lost(&e) {
        unreachable(context, e)
    } else {
        unexpected(context, e)
    }
}

/// The peer reset or aborted the connection somewhere in the error chain
fn is_connection_lost(e: &(dyn Error + 'static)) -> bool {
    let mut source = Some(e);
    while let Some(err) = source {
        if let Some(io) = err.downcast_ref::<io::Error>() {
            if matches!(
                io.kind(),
                io::ErrorKind::ConnectionReset
                    | io::ErrorKind::ConnectionAborted
                    | io::ErrorKind::UnexpectedEof
            ) {
                return true;
            }
        }
        source = err.source();
    }
    false
}

impl FileBackend for RestBackend {
    fn stat(&self, id: &FileId) -> Result<FileMetadata, FetchError> {
        self.get(id, STAT_ENDPOINT)?
            .json::<FileMetadata>()
            .map_err(|e| unexpected("Malformed REST stat response", e))
    }

    fn read(&self, id: &FileId) -> Result<Vec<u8>, FetchError> {
        let body = self
            .get(id, READ_ENDPOINT)?
            .bytes()
            .map_err(|e| unexpected("Failed to read REST response body", e))?;
        Ok(body.to_vec())
    }
}

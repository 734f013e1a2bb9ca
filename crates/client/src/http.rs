//! HTTP transport for the upload backend.
//!
//! Implements [`UploadTransport`] with `reqwest` against the backend's
//! contract: JSON init/complete on `POST /files/upload`, raw chunk
//! bytes on `PATCH` to the per-session chunk endpoint with a
//! `Content-Range` header.

use reqwest::header::{CONTENT_RANGE, CONTENT_TYPE};
use std::future::Future;
use std::pin::Pin;
use tracing::debug;

use uplift_protocol::{
    CompleteUploadRequest, ErrorBody, FileDescriptor, InitUploadRequest, InitUploadResponse,
};
use uplift_transfer::ChunkRange;

use crate::config::ClientConfig;
use crate::transport::{TransportError, UploadTransport};
use crate::types::UploadSession;

/// Path of the init/complete endpoint, relative to the API base.
const UPLOAD_PATH: &str = "/files/upload";

/// Production transport speaking HTTP to the upload backend.
pub struct HttpTransport {
    client: reqwest::Client,
    api_base: String,
    auth_token: String,
}

impl HttpTransport {
    /// Creates a transport bound to the configured backend.
    ///
    /// A missing credential is tolerated here: the session machine
    /// refuses to issue requests without one, so an unauthenticated
    /// transport never reaches the network.
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base: config.api_base.clone(),
            auth_token: config.auth_token.clone().unwrap_or_default(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }

    /// Maps a non-success response to [`TransportError::Rejected`],
    /// preferring the backend's `{"message": ...}` body over the status
    /// reason.
    async fn rejection(resp: reqwest::Response) -> TransportError {
        let status = resp.status();
        let message = match resp.json::<ErrorBody>().await {
            Ok(body) if !body.message.is_empty() => body.message,
            _ => status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string(),
        };
        TransportError::Rejected {
            status: status.as_u16(),
            message,
        }
    }
}

impl UploadTransport for HttpTransport {
    fn init(
        &self,
        req: &InitUploadRequest,
    ) -> Pin<Box<dyn Future<Output = Result<InitUploadResponse, TransportError>> + Send + '_>>
    {
        let url = self.endpoint(UPLOAD_PATH);
        let req = req.clone();

        Box::pin(async move {
            debug!(filename = %req.filename, file_size = req.file_size, "init upload");
            let resp = self
                .client
                .post(&url)
                .bearer_auth(&self.auth_token)
                .json(&req)
                .send()
                .await
                .map_err(|e| TransportError::Network(e.to_string()))?;

            if !resp.status().is_success() {
                return Err(Self::rejection(resp).await);
            }

            resp.json::<InitUploadResponse>()
                .await
                .map_err(|e| TransportError::Network(e.to_string()))
        })
    }

    fn send_chunk(
        &self,
        session: &UploadSession,
        range: &ChunkRange,
        total_size: u64,
        bytes: &[u8],
    ) -> Pin<Box<dyn Future<Output = Result<(), TransportError>> + Send + '_>> {
        let url = self.endpoint(&session.chunk_url);
        let upload_id = session.id.clone();
        let index = range.index;
        // Inclusive end offset, RFC 7233 style: bytes <start>-<end-1>/<total>.
        let content_range = format!("bytes {}-{}/{}", range.start, range.end - 1, total_size);
        let body = bytes.to_vec();

        Box::pin(async move {
            debug!(
                upload_id = %upload_id,
                chunk = index,
                range = %content_range,
                "send chunk"
            );
            let resp = self
                .client
                .patch(&url)
                .bearer_auth(&self.auth_token)
                .header(CONTENT_RANGE, content_range)
                .header(CONTENT_TYPE, "application/octet-stream")
                .body(body)
                .send()
                .await
                .map_err(|e| TransportError::Network(e.to_string()))?;

            if !resp.status().is_success() {
                return Err(Self::rejection(resp).await);
            }
            Ok(())
        })
    }

    fn complete(
        &self,
        req: &CompleteUploadRequest,
    ) -> Pin<Box<dyn Future<Output = Result<FileDescriptor, TransportError>> + Send + '_>> {
        let url = self.endpoint(UPLOAD_PATH);
        let req = req.clone();

        Box::pin(async move {
            debug!(upload_id = %req.upload_id, "complete upload");
            let resp = self
                .client
                .post(&url)
                .bearer_auth(&self.auth_token)
                .json(&req)
                .send()
                .await
                .map_err(|e| TransportError::Network(e.to_string()))?;

            if !resp.status().is_success() {
                return Err(Self::rejection(resp).await);
            }

            resp.json::<FileDescriptor>()
                .await
                .map_err(|e| TransportError::Network(e.to_string()))
        })
    }
}

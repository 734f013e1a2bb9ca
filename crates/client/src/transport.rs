//! Transport seam for the three remote upload operations.
//!
//! The session machine drives uploads through [`UploadTransport`],
//! keeping state logic decoupled from HTTP and testable with scripted
//! mocks. [`crate::HttpTransport`] is the production implementation.

use std::future::Future;
use std::pin::Pin;

use uplift_protocol::{
    CompleteUploadRequest, FileDescriptor, InitUploadRequest, InitUploadResponse,
};
use uplift_transfer::ChunkRange;

use crate::types::UploadSession;

/// Errors surfaced by a transport implementation.
///
/// The two variants are deliberately distinct: a network failure means
/// no usable response arrived, a rejection means the server answered
/// and said no.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Connect failure, timeout, or an interrupted/unparseable body.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("server rejected request ({status}): {message}")]
    Rejected { status: u16, message: String },
}

impl TransportError {
    /// The server-provided message when there is one, else the
    /// transport-level description.
    pub fn message(&self) -> String {
        match self {
            TransportError::Network(msg) => msg.clone(),
            TransportError::Rejected { message, .. } => message.clone(),
        }
    }
}

/// Abstract access to the remote upload endpoint.
///
/// Implementations perform exactly one network operation per call and
/// never retry internally; retry policy, if any, belongs to the caller.
pub trait UploadTransport: Send + Sync {
    /// Negotiates a new upload session.
    fn init(
        &self,
        req: &InitUploadRequest,
    ) -> Pin<Box<dyn Future<Output = Result<InitUploadResponse, TransportError>> + Send + '_>>;

    /// Transfers one byte range.
    ///
    /// `bytes.len()` must equal `range.len()`; callers guarantee this by
    /// slicing exactly the planned range from the source file. The
    /// request declares the byte offsets and `total_size` so the server
    /// can validate placement independently of call order.
    fn send_chunk(
        &self,
        session: &UploadSession,
        range: &ChunkRange,
        total_size: u64,
        bytes: &[u8],
    ) -> Pin<Box<dyn Future<Output = Result<(), TransportError>> + Send + '_>>;

    /// Finalizes the session into a durable remote object.
    fn complete(
        &self,
        req: &CompleteUploadRequest,
    ) -> Pin<Box<dyn Future<Output = Result<FileDescriptor, TransportError>> + Send + '_>>;
}

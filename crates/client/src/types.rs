//! Data types for the upload session flow.

use std::path::Path;

use uplift_protocol::{FileDescriptor, InitUploadResponse};
use uplift_transfer::UploadProgress;

/// The local file selected for upload.
///
/// Immutable input, captured once per session.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadTarget {
    pub filename: String,
    pub total_size: u64,
    pub mime_type: String,
}

impl UploadTarget {
    pub fn new(
        filename: impl Into<String>,
        total_size: u64,
        mime_type: impl Into<String>,
    ) -> Self {
        Self {
            filename: filename.into(),
            total_size,
            mime_type: mime_type.into(),
        }
    }

    /// Builds a target from a file on disk: name from the final path
    /// component, size from metadata, MIME type guessed from the
    /// extension.
    pub async fn from_path(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let metadata = tokio::fs::metadata(path).await?;
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let mime_type = path
            .extension()
            .and_then(|e| e.to_str())
            .map(mime_for_extension)
            .unwrap_or("application/octet-stream");

        Ok(Self::new(filename, metadata.len(), mime_type))
    }
}

fn mime_for_extension(ext: &str) -> &'static str {
    match ext.to_ascii_lowercase().as_str() {
        "txt" | "log" => "text/plain",
        "json" => "application/json",
        "pdf" => "application/pdf",
        "zip" => "application/zip",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "mp4" => "video/mp4",
        "mp3" => "audio/mpeg",
        _ => "application/octet-stream",
    }
}

/// Server-confirmed context for one upload session.
///
/// Built from a successful init response; immutable for the session's
/// lifetime and dropped when the machine reaches a terminal state.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadSession {
    /// Opaque session id assigned by the backend.
    pub id: String,
    /// Chunk size the plan must use: the server override when present
    /// and positive, else the configured default.
    pub chunk_size: u64,
    /// Chunk endpoint path with the session id already substituted.
    pub chunk_url: String,
}

impl UploadSession {
    pub(crate) fn from_init(resp: InitUploadResponse, default_chunk_size: u64) -> Self {
        let chunk_size = resp
            .chunk_size
            .filter(|&size| size > 0)
            .unwrap_or(default_chunk_size);
        Self {
            chunk_url: resp.chunk_url(),
            id: resp.upload_id,
            chunk_size,
        }
    }
}

/// Event delivered to the host over the notification channel.
///
/// For a successful run the causal order is `Ready`, `Status`/`Progress`
/// interleavings, then `Success`; on failure `Error` replaces everything
/// after the last confirmed event.
#[derive(Debug, Clone, PartialEq)]
pub enum UploadEvent {
    /// The machine is constructed and ready to accept `start`.
    Ready,
    /// Human-readable phase description.
    Status(String),
    /// Byte-level progress after a confirmed chunk.
    Progress(UploadProgress),
    /// Terminal: the finalized object descriptor.
    Success(FileDescriptor),
    /// Terminal: human-readable failure, carrying the server message
    /// when one was available.
    Error(String),
}

use serde::{Deserialize, Serialize};

/// Placeholder the backend embeds in `upload_url` templates.
pub const UPLOAD_ID_PLACEHOLDER: &str = "{upload_id}";

// ---------------------------------------------------------------------------
// Request payloads
// ---------------------------------------------------------------------------

/// Starts a new upload session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InitUploadRequest {
    pub filename: String,
    pub file_size: u64,
    pub file_type: String,
}

/// Finalizes an upload session.
///
/// The backend distinguishes init from completion by the body shape:
/// both are POSTed to the same endpoint, but completion carries only
/// the session id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompleteUploadRequest {
    pub upload_id: String,
}

// ---------------------------------------------------------------------------
// Response payloads
// ---------------------------------------------------------------------------

/// Acknowledges upload initialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InitUploadResponse {
    pub upload_id: String,
    /// Server-side chunk size override. Absent or zero means the client
    /// keeps its configured default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chunk_size: Option<u64>,
    /// Chunk endpoint template containing the literal `{upload_id}`
    /// placeholder, e.g. `/files/upload/chunk/{upload_id}`.
    pub upload_url: String,
}

impl InitUploadResponse {
    /// Returns the chunk endpoint path with the session id substituted.
    pub fn chunk_url(&self) -> String {
        self.upload_url.replace(UPLOAD_ID_PLACEHOLDER, &self.upload_id)
    }
}

/// The finalized object descriptor returned by completion.
///
/// Only `id` is guaranteed; the backend may add fields over time, so
/// everything else is defaulted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileDescriptor {
    pub id: i64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub filename: String,
    #[serde(default, skip_serializing_if = "is_zero_i64")]
    pub size_bytes: i64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
}

/// Error payload shape shared by all three operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn is_zero_i64(v: &i64) -> bool {
    *v == 0
}

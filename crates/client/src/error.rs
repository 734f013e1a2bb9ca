//! Upload error types.
//!
//! Every variant is terminal for the machine instance that produced it:
//! nothing is retried internally, and a new upload requires a fresh
//! machine.

/// Errors produced during an upload session.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UploadError {
    /// No credential was configured; the remote endpoint was never
    /// contacted.
    #[error("authentication token missing")]
    AuthMissing,

    /// The target failed local validation before any network call.
    #[error("invalid upload target: {0}")]
    InvalidTarget(String),

    /// Init was rejected or unreachable; no session was created.
    #[error("upload initialization failed: {0}")]
    Init(String),

    /// A specific chunk was rejected or unreachable; the session is
    /// abandoned at that index and later chunks never start.
    #[error("chunk upload failed at index {index} of {total_chunks} chunks: {message}")]
    Chunk {
        index: usize,
        total_chunks: usize,
        message: String,
    },

    /// Finalization was rejected or unreachable. The remote object may
    /// exist unfinalized; this client does not resolve that window.
    #[error("upload completion failed: {0}")]
    Complete(String),

    /// The host cancelled the session between operations.
    #[error("cancelled")]
    Cancelled,

    /// Reading the local file failed before or between transfers.
    #[error("local read failed: {0}")]
    Source(String),

    /// `start` was invoked on a machine already driven to a terminal
    /// state; one machine drives exactly one upload.
    #[error("upload already started; create a new machine per upload")]
    AlreadyStarted,
}

impl From<uplift_transfer::TransferError> for UploadError {
    fn from(err: uplift_transfer::TransferError) -> Self {
        UploadError::Source(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunk_error_display_carries_server_message() {
        let err = UploadError::Chunk {
            index: 1,
            total_chunks: 3,
            message: "disk full".into(),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("index 1 of 3"));
        assert!(rendered.contains("disk full"));
    }

    #[test]
    fn transfer_error_converts_to_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: UploadError = uplift_transfer::TransferError::Io(io).into();
        assert!(matches!(err, UploadError::Source(_)));
        assert!(err.to_string().contains("gone"));
    }
}

//! Byte-range planning, file slicing and progress arithmetic for
//! chunked uploads.
//!
//! Everything here is transport-agnostic: the planner and progress
//! reporter are pure functions, and [`RangeReader`] only touches the
//! local filesystem. Session and network logic live in `uplift-client`.

mod plan;
mod progress;
mod reader;

pub use plan::{ChunkRange, plan_ranges};
pub use progress::{UploadProgress, report};
pub use reader::RangeReader;

/// Default chunk size: 5 MiB.
///
/// The backend may override this per session via the init response;
/// the planner must always use the confirmed value, never this default.
pub const DEFAULT_CHUNK_SIZE: u64 = 5 * 1024 * 1024;

/// Errors produced by the transfer crate.
#[derive(Debug, thiserror::Error)]
pub enum TransferError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("file shrank while reading chunk {index}: expected {expected} bytes")]
    ShortRead { index: usize, expected: u64 },
}

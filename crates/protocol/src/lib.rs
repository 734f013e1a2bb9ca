//! Wire payload types for the uplift chunked upload protocol.
//!
//! These structs mirror the JSON bodies exchanged with the upload
//! backend (snake_case field names, matching its pydantic models).
//! Transport and session logic live in `uplift-client`; this crate is
//! serialization only.

pub mod messages;

pub use messages::{
    CompleteUploadRequest, ErrorBody, FileDescriptor, InitUploadRequest, InitUploadResponse,
    UPLOAD_ID_PLACEHOLDER,
};

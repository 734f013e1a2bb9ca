//! Client-side driver for a resumable chunked file upload protocol.
//!
//! This crate implements the **upload session logic**: negotiating a
//! session with the backend, streaming the file as sequential byte-range
//! chunks, and finalizing the transfer into a durable remote object. It
//! is a library crate with no UI dependencies; the embedding host
//! receives [`UploadEvent`]s over a channel and renders them however it
//! likes.
//!
//! # Pipeline
//!
//! 1. **Init**: negotiate an upload session (`POST /files/upload`)
//! 2. **Transfer**: send byte-range chunks, one at a time, in order
//! 3. **Complete**: finalize the session into a remote file object
//!
//! The network seam is the [`UploadTransport`] trait; [`HttpTransport`]
//! is the production implementation, and tests drive the machine with
//! scripted mocks.

pub mod config;
pub mod error;
pub mod http;
pub mod session;
pub mod transport;
pub mod types;

pub use config::ClientConfig;
pub use error::UploadError;
pub use http::HttpTransport;
pub use session::{SessionState, UploadSessionMachine};
pub use transport::{TransportError, UploadTransport};
pub use types::{UploadEvent, UploadSession, UploadTarget};

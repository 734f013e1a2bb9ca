//! Upload session state machine.
//!
//! One machine drives exactly one upload: init, strictly sequential
//! chunk transfers in ascending byte order, then completion. Terminal
//! states are never left; a new upload requires a new machine.
//!
//! Chunk transfers are deliberately sequential (one outstanding network
//! call at a time), trading throughput for a linear protocol the server
//! can validate with simple contiguous-range checks.

use std::path::Path;
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use uplift_protocol::{CompleteUploadRequest, FileDescriptor, InitUploadRequest};
use uplift_transfer::{RangeReader, plan_ranges, report};

use crate::config::ClientConfig;
use crate::error::UploadError;
use crate::transport::UploadTransport;
use crate::types::{UploadEvent, UploadSession, UploadTarget};

/// Lifecycle state of an upload session machine.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// Constructed, `start` not yet called.
    Idle,
    /// Negotiating the session with the backend.
    Initiating,
    /// Streaming chunks.
    Transferring,
    /// All chunks confirmed; finalizing.
    Completing,
    /// Terminal: the upload finished and the backend returned the
    /// finalized object descriptor.
    Done(FileDescriptor),
    /// Terminal: the upload failed; later operations never ran.
    Failed(UploadError),
}

/// Drives one upload session from `Idle` to `Done` or `Failed`.
pub struct UploadSessionMachine {
    config: ClientConfig,
    transport: Arc<dyn UploadTransport>,
    events: mpsc::Sender<UploadEvent>,
    cancel: CancellationToken,
    state: SessionState,
}

impl UploadSessionMachine {
    /// Creates a machine and announces readiness to the host.
    pub fn new(
        config: ClientConfig,
        transport: Arc<dyn UploadTransport>,
        events: mpsc::Sender<UploadEvent>,
        cancel: CancellationToken,
    ) -> Self {
        // Ready is independent of `start`; the host uses it to know the
        // machine exists and the channel works.
        let _ = events.try_send(UploadEvent::Ready);
        Self {
            config,
            transport,
            events,
            cancel,
            state: SessionState::Idle,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Runs the whole session: init, sequential chunks, completion.
    ///
    /// Drives the machine to a terminal state and returns the finalized
    /// descriptor on success. Calling `start` again afterwards returns
    /// [`UploadError::AlreadyStarted`] and leaves the terminal state
    /// untouched.
    pub async fn start(
        &mut self,
        target: &UploadTarget,
        path: &Path,
    ) -> Result<FileDescriptor, UploadError> {
        if self.state != SessionState::Idle {
            return Err(UploadError::AlreadyStarted);
        }

        match self.run(target, path).await {
            Ok(descriptor) => {
                info!(id = descriptor.id, "upload finalized");
                self.state = SessionState::Done(descriptor.clone());
                self.emit(UploadEvent::Success(descriptor.clone())).await;
                Ok(descriptor)
            }
            Err(err) => {
                warn!(error = %err, "upload failed");
                self.state = SessionState::Failed(err.clone());
                self.emit(UploadEvent::Error(err.to_string())).await;
                Err(err)
            }
        }
    }

    async fn run(
        &mut self,
        target: &UploadTarget,
        path: &Path,
    ) -> Result<FileDescriptor, UploadError> {
        if target.filename.is_empty() {
            return Err(UploadError::InvalidTarget("filename is empty".into()));
        }
        // The credential is supplied by the host; without one the remote
        // endpoint is never contacted.
        if self.config.credential().is_none() {
            return Err(UploadError::AuthMissing);
        }

        self.state = SessionState::Initiating;
        self.emit(UploadEvent::Status("Initializing upload...".into()))
            .await;

        let mut reader = RangeReader::open(path).await?;
        if reader.size() != target.total_size {
            return Err(UploadError::InvalidTarget(format!(
                "file is {} bytes but target declares {}",
                reader.size(),
                target.total_size
            )));
        }

        self.ensure_live()?;
        let init_req = InitUploadRequest {
            filename: target.filename.clone(),
            file_size: target.total_size,
            file_type: target.mime_type.clone(),
        };
        let init = self
            .transport
            .init(&init_req)
            .await
            .map_err(|e| UploadError::Init(e.message()))?;

        let session = UploadSession::from_init(init, self.config.default_chunk_size);
        info!(
            upload_id = %session.id,
            chunk_size = session.chunk_size,
            total_size = target.total_size,
            "upload session created"
        );
        self.emit(UploadEvent::Status(format!(
            "Upload ID: {}, starting chunk upload.",
            session.id
        )))
        .await;

        self.state = SessionState::Transferring;
        // Chunk count comes from the server-confirmed chunk size, so
        // progress never drifts when the server overrides the default.
        let ranges = plan_ranges(target.total_size, session.chunk_size);
        let total_chunks = ranges.len();
        let mut bytes_sent = 0u64;

        if ranges.is_empty() {
            // Zero-byte upload: nothing to send, 100% by definition.
            self.emit(UploadEvent::Progress(report(0, 0, 0, 0))).await;
        }

        for range in &ranges {
            self.ensure_live()?;

            let bytes = reader.read_range(range).await?;
            self.transport
                .send_chunk(&session, range, target.total_size, &bytes)
                .await
                .map_err(|e| UploadError::Chunk {
                    index: range.index,
                    total_chunks,
                    message: e.message(),
                })?;

            bytes_sent += range.len();
            debug!(
                upload_id = %session.id,
                chunk = range.index,
                bytes_sent,
                "chunk confirmed"
            );
            self.emit(UploadEvent::Progress(report(
                bytes_sent,
                target.total_size,
                range.index,
                total_chunks,
            )))
            .await;
        }

        self.state = SessionState::Completing;
        self.emit(UploadEvent::Status(
            "All chunks uploaded, finalizing...".into(),
        ))
        .await;

        self.ensure_live()?;
        self.transport
            .complete(&CompleteUploadRequest {
                upload_id: session.id.clone(),
            })
            .await
            .map_err(|e| UploadError::Complete(e.message()))
    }

    /// Refuses to issue the next operation once the host has cancelled.
    /// An operation already in flight runs to completion; its result is
    /// discarded by the caller.
    fn ensure_live(&self) -> Result<(), UploadError> {
        if self.cancel.is_cancelled() {
            Err(UploadError::Cancelled)
        } else {
            Ok(())
        }
    }

    async fn emit(&self, event: UploadEvent) {
        // A dropped receiver never fails the upload.
        let _ = self.events.send(event).await;
    }
}

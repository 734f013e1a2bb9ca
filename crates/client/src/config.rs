//! Client configuration.
//!
//! Everything a session needs is passed in explicitly, with no ambient
//! globals, so multiple sessions can run with independent settings and
//! tests can inject fixed values.

use uplift_transfer::DEFAULT_CHUNK_SIZE;

/// Configuration for upload sessions against one backend.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the upload API, stored without a trailing slash.
    pub api_base: String,
    /// Bearer credential presented on every request.
    ///
    /// The credential is supplied, not acquired, by this client. A
    /// missing or empty token fails the session before any network call.
    pub auth_token: Option<String>,
    /// Chunk size used when the backend does not override it at init.
    pub default_chunk_size: u64,
}

impl ClientConfig {
    /// Creates a configuration with the default chunk size (5 MiB).
    pub fn new(api_base: impl Into<String>, auth_token: Option<String>) -> Self {
        let mut api_base = api_base.into();
        while api_base.ends_with('/') {
            api_base.pop();
        }
        Self {
            api_base,
            auth_token,
            default_chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    /// Overrides the default chunk size.
    pub fn with_chunk_size(mut self, chunk_size: u64) -> Self {
        self.default_chunk_size = chunk_size;
        self
    }

    /// Returns the credential if one is configured and non-empty.
    pub fn credential(&self) -> Option<&str> {
        self.auth_token.as_deref().filter(|t| !t.is_empty())
    }
}

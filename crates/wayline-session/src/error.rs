//! Error types for the session layer.

/// Errors that can occur while persisting a session.
///
/// Note the asymmetry: writing can fail loudly (the caller logs and
/// carries on), but *reading* never produces an error — a record that
/// cannot be read is treated as absent. See
/// [`SessionStore::restore`](crate::SessionStore::restore).
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The backing store rejected a read or write.
    #[error("session storage failed: {0}")]
    Storage(#[from] std::io::Error),

    /// The record could not be serialized for writing.
    #[error("session record encode failed: {0}")]
    Encode(#[from] serde_json::Error),
}

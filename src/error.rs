use thiserror::Error;

/// Errors raised while parsing pinch lengths or hashing a ring.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KnotError {
    #[error("invalid pinch length {token:?}")]
    InvalidInput { token: String },

    #[error("malformed ring of length {len}: {reason}")]
    MalformedRing { len: usize, reason: &'static str },
}

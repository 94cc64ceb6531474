//! Error types for the Schnorr signature scheme.

use thiserror::Error;

/// Errors raised while decoding a signature into its `(R, s)` parts.
///
/// [`verify`](crate::verify) never returns these; it folds every failure
/// into `false`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchnorrError {
    /// The signature is not exactly `point_len + scalar_len` bytes.
    #[error("invalid signature length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// The commitment point or the response scalar failed to decode.
    #[error(transparent)]
    Group(#[from] curve::Error),
}

//! Error type shared by every group implementation.

use thiserror::Error;

/// Failures raised by decoding, embedding and curve construction.
///
/// Rejection-sampling loops (`pick`, `embed`, [`crate::random::int`]) never
/// surface these: a failed draw is simply retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A point encoding has the wrong length.
    #[error("invalid point encoding: expected {expected} bytes, got {actual}")]
    InvalidEncoding { expected: usize, actual: usize },

    /// A Weierstrass point encoding does not start with the uncompressed
    /// point marker `0x04`.
    #[error("invalid point header byte {0:#04x}, only uncompressed points are accepted")]
    InvalidHeader(u8),

    /// No curve point corresponds to the encoding.
    #[error("encoding does not correspond to a curve point")]
    PointDecodeFailure,

    /// Decoded coordinates do not satisfy the curve equation, or a coordinate
    /// is not reduced modulo the field prime.
    #[error("point is not on the curve")]
    PointNotOnCurve,

    /// A scalar encoding is wider than the group's fixed scalar width.
    #[error("scalar encoding too long: {len} bytes, at most {max} allowed")]
    InvalidScalarEncoding { len: usize, max: usize },

    /// The payload handed to `embed` does not fit into a point.
    #[error("data too long to embed: {len} bytes, at most {max} allowed")]
    DataTooLong { len: usize, max: usize },

    /// The length byte recovered by `data` is larger than what `embed` can
    /// ever produce.
    #[error("invalid embedded data length {len}, at most {max} allowed")]
    InvalidEmbeddedLength { len: usize, max: usize },

    /// A curve configuration could not be turned into a group.
    #[error("invalid curve configuration: {0}")]
    InvalidConfig(String),
}

/// Result alias used across the crate.
pub type Result<T> = core::result::Result<T, Error>;

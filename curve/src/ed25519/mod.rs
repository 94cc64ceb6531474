//! The Ed25519 group: prime-order subgroup of the twisted Edwards curve
//! birationally equivalent to Curve25519.

mod curve;
mod point;
mod scalar;

pub use curve::Ed25519;
pub use point::Ed25519Point;
pub use scalar::Ed25519Scalar;

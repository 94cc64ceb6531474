//! Prime-order groups on short Weierstrass curves `y^2 = x^3 + a*x + b`.
//!
//! A [`Weierstrass`] group is built from a [`CurveConfig`]; [`params`]
//! provides the NIST P-224, P-256, P-384 and P-521 configurations. Points
//! use the ANSI X9.62 uncompressed encoding and scalars are big-endian.

mod curve;
pub mod params;
mod point;
mod scalar;

pub use curve::Weierstrass;
pub use params::CurveConfig;
pub use point::WeierstrassPoint;
pub use scalar::WeierstrassScalar;

//! Prime-order elliptic curve groups behind a common scalar/point interface.
//!
//! This crate provides the [`Group`], [`Scalar`] and [`Point`] traits and two
//! families implementing them: the [`Ed25519`] twisted Edwards group and
//! short [`Weierstrass`] curves configured from [`CurveConfig`] (with the NIST
//! curves in [`weierstrass::params`]). Randomness is always injected through
//! [`rand::RngCore`]; see [`random`] for the sampling helpers.
//!
//! ```
//! use curve::{Ed25519, Group, Point, Scalar};
//!
//! let group = Ed25519::new();
//! let mut rng = rand::rng();
//! let mut k = group.scalar();
//! k.pick(&mut rng);
//! let public = group.point().mul_base(&k);
//! assert!(!public.is_null());
//! ```

pub mod ed25519;
mod error;
mod field;
mod group;
pub mod random;
pub mod weierstrass;

pub use ed25519::{Ed25519, Ed25519Point, Ed25519Scalar};
pub use error::{Error, Result};
pub use group::{Group, Point, Scalar};
pub use weierstrass::{CurveConfig, Weierstrass, WeierstrassPoint, WeierstrassScalar};

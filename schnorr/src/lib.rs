//! Schnorr signatures over any [`curve::Group`].
//!
//! Signing and verification only use the abstract scalar/point interface, so
//! the same code serves Ed25519 and every configured Weierstrass curve.
//!
//! # Overview
//!
//! To sign `msg` with private scalar `sk` and public point `pk = sk * G`:
//! 1. Pick a random nonce `r` and compute `R = r * G`
//! 2. Compute the challenge `c = SHA-512(R || pk || msg)` reduced mod `n`
//! 3. Compute `s = sk * c + r`
//! 4. Output `marshal(R) || marshal(s)`
//!
//! Verification recomputes `c` and accepts iff `s * G == c * pk + R`.
//!
//! # Example
//!
//! ```
//! use curve::weierstrass::params;
//! use curve::{Group, Point, Weierstrass};
//!
//! let group = Weierstrass::new(&params::p256()).expect("valid parameters");
//! let mut rng = rand::rng();
//! let private = group.new_key(&mut rng);
//! let public = group.point().mul_base(&private);
//!
//! let sig = schnorr::sign(&group, &private, b"message");
//! assert_eq!(sig.len(), schnorr::signature_len(&group));
//! assert!(schnorr::verify(&group, &public, b"message", &sig));
//! assert!(!schnorr::verify(&group, &public, b"massage", &sig));
//! ```
//!
//! # Security Considerations
//!
//! - Use a cryptographically secure random source for nonces
//! - Each signature must use a fresh nonce
//! - [`verify`] reports malformed and invalid signatures alike as `false`;
//!   use [`Signature::from_bytes`] to tell them apart

mod constants;
mod errors;
mod keys;
mod signatures;


pub use constants::HASH_SIZE;
pub use errors::SchnorrError;
pub use keys::KeyPair;
pub use signatures::{Signature, hash_schnorr, sign, sign_with_rng, signature_len, verify};

//! Key pairs bound to a group.

use core::fmt;

use curve::{Group, Point};
use rand::RngCore;

use crate::signatures::{sign_with_rng, verify};

/// A private scalar together with its public point `private * G`.
///
/// # Example
///
/// ```
/// use curve::Ed25519;
/// use schnorr::KeyPair;
///
/// let keys = KeyPair::generate(Ed25519::new());
/// let sig = keys.sign(b"hello");
/// assert!(keys.verify(b"hello", &sig));
/// ```
#[derive(Clone)]
pub struct KeyPair<G: Group> {
    group: G,
    private: G::Scalar,
    public: G::Point,
}

impl<G: Group> KeyPair<G> {
    /// Generates a key with [`Group::new_key`] from the thread-local RNG.
    pub fn generate(group: G) -> Self {
        Self::generate_with_rng(group, &mut rand::rng())
    }

    pub fn generate_with_rng<R: RngCore + ?Sized>(group: G, rng: &mut R) -> Self {
        let private = group.new_key(rng);
        Self::from_private(group, private)
    }

    /// Derives the public point of an existing private scalar.
    pub fn from_private(group: G, private: G::Scalar) -> Self {
        let public = group.point().mul_base(&private);
        KeyPair {
            group,
            private,
            public,
        }
    }

    pub fn group(&self) -> &G {
        &self.group
    }

    pub fn private(&self) -> &G::Scalar {
        &self.private
    }

    pub fn public(&self) -> &G::Point {
        &self.public
    }

    pub fn sign(&self, msg: &[u8]) -> Vec<u8> {
        self.sign_with_rng(msg, &mut rand::rng())
    }

    pub fn sign_with_rng<R: RngCore + ?Sized>(&self, msg: &[u8], rng: &mut R) -> Vec<u8> {
        sign_with_rng(&self.group, &self.private, msg, rng)
    }

    /// Verifies `sig` against this pair's public point.
    pub fn verify(&self, msg: &[u8], sig: &[u8]) -> bool {
        verify(&self.group, &self.public, msg, sig)
    }
}

impl<G: Group> fmt::Debug for KeyPair<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("group", &self.group.name())
            .field("public", &self.public)
            .finish_non_exhaustive()
    }
}

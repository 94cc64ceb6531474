//! Signing, verification and challenge hashing, generic over any [`Group`].

use core::fmt;

use curve::{Group, Point, Scalar};
use rand::RngCore;
use sha2::{Digest, Sha512};
use tracing::debug;

use crate::constants::HASH_SIZE;
use crate::errors::SchnorrError;

/// A decoded Schnorr signature `(R, s)`.
///
/// The signature satisfies `s * G == c * pk + R` where
/// `c = H(R || pk || msg)` is the challenge.
pub struct Signature<G: Group> {
    /// The commitment `R = r * G` for the signing nonce `r`.
    pub r: G::Point,
    /// The response `s = sk * c + r`.
    pub s: G::Scalar,
}

impl<G: Group> Signature<G> {
    /// Splits `bytes` into a marshaled point followed by a marshaled scalar.
    pub fn from_bytes(group: &G, bytes: &[u8]) -> Result<Self, SchnorrError> {
        let point_len = group.point_len();
        let expected = signature_len(group);
        if bytes.len() != expected {
            return Err(SchnorrError::InvalidLength {
                expected,
                actual: bytes.len(),
            });
        }

        let mut r = group.point();
        r.unmarshal_binary(&bytes[..point_len])?;
        let mut s = group.scalar();
        s.unmarshal_binary(&bytes[point_len..])?;

        Ok(Signature { r, s })
    }

    /// `marshal(R) || marshal(s)`.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = self.r.marshal_binary();
        out.extend_from_slice(&self.s.marshal_binary());
        out
    }
}

impl<G: Group> Clone for Signature<G> {
    fn clone(&self) -> Self {
        Signature {
            r: self.r.clone(),
            s: self.s.clone(),
        }
    }
}

impl<G: Group> PartialEq for Signature<G> {
    fn eq(&self, other: &Self) -> bool {
        self.r == other.r && self.s == other.s
    }
}

impl<G: Group> fmt::Debug for Signature<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signature")
            .field("r", &self.r)
            .field("s", &self.s)
            .finish()
    }
}

/// Total length in bytes of a signature over `group`.
#[inline]
pub fn signature_len<G: Group>(group: &G) -> usize {
    group.point_len() + group.scalar_len()
}

/// Hashes the concatenation of `inputs` with SHA-512 and reduces the digest
/// into a scalar of `group`, using the group's own byte order.
pub fn hash_schnorr<G: Group>(group: &G, inputs: &[&[u8]]) -> G::Scalar {
    let mut hasher = Sha512::new();
    for input in inputs {
        hasher.update(input);
    }
    let digest = hasher.finalize();
    debug_assert_eq!(digest.len(), HASH_SIZE);

    let mut challenge = group.scalar();
    challenge.set_bytes(&digest);
    challenge
}

fn challenge<G: Group>(group: &G, r: &G::Point, public: &G::Point, msg: &[u8]) -> G::Scalar {
    let r = r.marshal_binary();
    let public = public.marshal_binary();
    hash_schnorr(group, &[r.as_slice(), public.as_slice(), msg])
}

/// Signs `msg` with `private`, drawing the nonce from the thread-local RNG.
///
/// Returns `marshal(R) || marshal(s)`.
pub fn sign<G: Group>(group: &G, private: &G::Scalar, msg: &[u8]) -> Vec<u8> {
    sign_with_rng(group, private, msg, &mut rand::rng())
}

/// Signs `msg` with `private`, drawing the nonce from `rng`.
pub fn sign_with_rng<G: Group, R: RngCore + ?Sized>(
    group: &G,
    private: &G::Scalar,
    msg: &[u8],
    rng: &mut R,
) -> Vec<u8> {
    let mut nonce = group.scalar();
    nonce.pick(rng);

    let r = group.point().mul_base(&nonce);
    let public = group.point().mul_base(private);
    let c = challenge(group, &r, &public, msg);
    let s = private.mul(&c).add(&nonce);

    Signature::<G> { r, s }.to_bytes()
}

/// Checks `sig` against `public` and `msg`.
///
/// Returns `false` for malformed signatures as well as for signatures that do
/// not satisfy the verification equation.
pub fn verify<G: Group>(group: &G, public: &G::Point, msg: &[u8], sig: &[u8]) -> bool {
    let sig = match Signature::from_bytes(group, sig) {
        Ok(sig) => sig,
        Err(err) => {
            debug!(group = group.name(), %err, "rejecting malformed signature");
            return false;
        }
    };

    let c = challenge(group, &sig.r, public, msg);
    let lhs = group.point().mul_base(&sig.s);
    let rhs = public.mul(&c).add(&sig.r);

    if lhs != rhs {
        debug!(group = group.name(), "signature equation does not hold");
        return false;
    }
    true
}

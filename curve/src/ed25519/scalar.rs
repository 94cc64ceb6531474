//! Scalars modulo the Ed25519 prime subgroup order
//! n = 2^252 + 27742317777372353535851937790883648493.
//!
//! Encoded as 32 little-endian bytes.

use core::fmt::{self, Debug, Display, Formatter};
use std::sync::Arc;

use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand::RngCore;

use super::curve::{EdwardsParams, ENCODING_LEN};
use crate::field::{to_bytes_le_padded, PrimeField};
use crate::{random, Error, Result, Scalar};

/// Scalar of the [`Ed25519`](super::Ed25519) group.
///
/// Arithmetic results are always reduced. The only unreduced values are
/// clamped private keys from [`Group::new_key`](crate::Group::new_key), which
/// are kept verbatim so that their encoding shows the clamping bits.
#[derive(Clone)]
pub struct Ed25519Scalar {
    curve: Arc<EdwardsParams>,
    value: BigUint,
}

impl Ed25519Scalar {
    pub(crate) fn new(curve: Arc<EdwardsParams>) -> Self {
        Ed25519Scalar {
            curve,
            value: BigUint::zero(),
        }
    }

    /// The stored integer, as used for point multiplication.
    #[inline]
    pub(crate) fn value(&self) -> &BigUint {
        &self.value
    }

    #[inline]
    fn order(&self) -> &PrimeField {
        &self.curve.order
    }

    #[inline]
    fn with_value(&self, value: BigUint) -> Self {
        Ed25519Scalar {
            curve: Arc::clone(&self.curve),
            value,
        }
    }

    /// Stores a 32-byte little-endian integer without reducing it.
    pub(crate) fn set_raw_le(&mut self, bytes: &[u8; ENCODING_LEN]) {
        self.value = BigUint::from_bytes_le(bytes);
    }
}

impl Scalar for Ed25519Scalar {
    fn zero(&mut self) -> &mut Self {
        self.value = BigUint::zero();
        self
    }

    fn one(&mut self) -> &mut Self {
        self.value = BigUint::one();
        self
    }

    fn set_int64(&mut self, v: i64) -> &mut Self {
        let magnitude = BigUint::from(v.unsigned_abs());
        self.value = if v < 0 {
            self.order().neg(&magnitude)
        } else {
            self.order().reduce(&magnitude)
        };
        self
    }

    fn set_bytes(&mut self, bytes: &[u8]) -> &mut Self {
        self.value = self.order().reduce(&BigUint::from_bytes_le(bytes));
        self
    }

    fn pick<R: RngCore + ?Sized>(&mut self, rng: &mut R) -> &mut Self {
        self.value = random::int(self.order().modulus(), rng);
        self
    }

    fn add(&self, rhs: &Self) -> Self {
        self.with_value(self.order().add(&self.value, &rhs.value))
    }

    fn sub(&self, rhs: &Self) -> Self {
        self.with_value(self.order().sub(&self.value, &rhs.value))
    }

    fn neg(&self) -> Self {
        self.with_value(self.order().neg(&self.value))
    }

    fn mul(&self, rhs: &Self) -> Self {
        self.with_value(self.order().mul(&self.value, &rhs.value))
    }

    fn div(&self, rhs: &Self) -> Self {
        self.with_value(self.order().div(&self.value, &rhs.value))
    }

    fn inv(&self) -> Self {
        let reduced = self.order().reduce(&self.value);
        self.with_value(self.order().inv(&reduced))
    }

    fn is_zero(&self) -> bool {
        self.order().reduce(&self.value).is_zero()
    }

    fn marshal_size(&self) -> usize {
        ENCODING_LEN
    }

    fn marshal_binary(&self) -> Vec<u8> {
        to_bytes_le_padded(&self.value, ENCODING_LEN)
    }

    fn unmarshal_binary(&mut self, bytes: &[u8]) -> Result<()> {
        if bytes.len() > ENCODING_LEN {
            return Err(Error::InvalidScalarEncoding {
                len: bytes.len(),
                max: ENCODING_LEN,
            });
        }
        self.value = self.order().reduce(&BigUint::from_bytes_le(bytes));
        Ok(())
    }
}

impl PartialEq for Ed25519Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.order().reduce(&self.value) == self.order().reduce(&other.value)
    }
}

impl Eq for Ed25519Scalar {}

impl Display for Ed25519Scalar {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for byte in self.marshal_binary() {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl Debug for Ed25519Scalar {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Ed25519Scalar({})", self)
    }
}

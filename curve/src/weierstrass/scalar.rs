use core::fmt::{self, Debug, Display, Formatter};
use std::sync::Arc;

use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand::RngCore;

use super::curve::WeierstrassParams;
use crate::field::{to_bytes_be_padded, PrimeField};
use crate::{random, Error, Result, Scalar};

/// Scalar of a [`Weierstrass`](super::Weierstrass) group, reduced mod the
/// curve order and encoded big-endian at the group's scalar width.
#[derive(Clone)]
pub struct WeierstrassScalar {
    curve: Arc<WeierstrassParams>,
    value: BigUint,
}

impl WeierstrassScalar {
    pub(crate) fn new(curve: Arc<WeierstrassParams>) -> Self {
        WeierstrassScalar {
            curve,
            value: BigUint::zero(),
        }
    }

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
        WeierstrassScalar {
            curve: Arc::clone(&self.curve),
            value,
        }
    }
}

impl Scalar for WeierstrassScalar {
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
        self.value = self.order().reduce(&BigUint::from_bytes_be(bytes));
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
        self.with_value(self.order().inv(&self.value))
    }

    fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    fn marshal_size(&self) -> usize {
        self.curve.scalar_len()
    }

    fn marshal_binary(&self) -> Vec<u8> {
        to_bytes_be_padded(&self.value, self.curve.scalar_len())
    }

    fn unmarshal_binary(&mut self, bytes: &[u8]) -> Result<()> {
        let max = self.curve.scalar_len();
        if bytes.len() > max {
            return Err(Error::InvalidScalarEncoding {
                len: bytes.len(),
                max,
            });
        }
        self.value = self.order().reduce(&BigUint::from_bytes_be(bytes));
        Ok(())
    }
}

impl PartialEq for WeierstrassScalar {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for WeierstrassScalar {}

impl Display for WeierstrassScalar {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for byte in self.marshal_binary() {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl Debug for WeierstrassScalar {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "WeierstrassScalar({})", self)
    }
}

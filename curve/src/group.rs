use core::fmt::{Debug, Display};

use num_bigint::BigUint;
use rand::RngCore;

use crate::Result;

/// A prime-order group together with its scalar field.
///
/// A `Group` is an immutable parameter bundle. Scalars and points obtained
/// from it share that bundle and start out as zero and the identity.
pub trait Group: Clone + Debug {
    type Scalar: Scalar;
    type Point: Point<Scalar = Self::Scalar>;

    fn name(&self) -> &str;

    /// Width in bytes of a marshaled scalar.
    fn scalar_len(&self) -> usize;

    /// Width in bytes of a marshaled point.
    fn point_len(&self) -> usize;

    /// A new scalar set to zero.
    fn scalar(&self) -> Self::Scalar;

    /// A new point set to the identity.
    fn point(&self) -> Self::Point;

    /// A fresh private key.
    #[inline]
    fn new_key<R: RngCore + ?Sized>(&self, rng: &mut R) -> Self::Scalar {
        let mut key = self.scalar();
        key.pick(rng);
        key
    }
}

/// An element of the scalar field `Z/nZ`.
///
/// Loaders (`zero`, `set_bytes`, `pick`, ...) overwrite the receiver and
/// return it for chaining. Arithmetic returns a new value and leaves both
/// operands untouched.
pub trait Scalar: Clone + PartialEq + Debug + Display {
    fn zero(&mut self) -> &mut Self;
    fn one(&mut self) -> &mut Self;

    /// Deep copy of `other` into `self`.
    #[inline]
    fn set(&mut self, other: &Self) -> &mut Self {
        self.clone_from(other);
        self
    }

    /// Small signed integer; negative values wrap to `n - |v|`.
    fn set_int64(&mut self, v: i64) -> &mut Self;

    /// Arbitrary-length bytes in the group's scalar endianness, reduced mod `n`.
    fn set_bytes(&mut self, bytes: &[u8]) -> &mut Self;

    /// Uniform value in `(0, n)`.
    fn pick<R: RngCore + ?Sized>(&mut self, rng: &mut R) -> &mut Self;

    fn add(&self, rhs: &Self) -> Self;
    fn sub(&self, rhs: &Self) -> Self;
    fn neg(&self) -> Self;
    fn mul(&self, rhs: &Self) -> Self;

    /// `self * rhs^{-1}`. Division by zero yields zero.
    fn div(&self, rhs: &Self) -> Self;

    /// Multiplicative inverse. The inverse of zero is zero.
    fn inv(&self) -> Self;

    fn is_zero(&self) -> bool;

    fn marshal_size(&self) -> usize;
    fn marshal_binary(&self) -> Vec<u8>;
    fn unmarshal_binary(&mut self, bytes: &[u8]) -> Result<()>;
}

/// An element of the group.
pub trait Point: Clone + PartialEq + Debug + Display {
    type Scalar: Scalar;

    /// Sets the identity.
    fn null(&mut self) -> &mut Self;

    /// Sets the standard generator.
    fn base(&mut self) -> &mut Self;

    /// Deep copy of `other` into `self`.
    #[inline]
    fn set(&mut self, other: &Self) -> &mut Self {
        self.clone_from(other);
        self
    }

    fn is_null(&self) -> bool;

    /// A uniformly random point of the prime-order subgroup.
    fn pick<R: RngCore + ?Sized>(&mut self, rng: &mut R) -> &mut Self;

    /// Maximum payload accepted by [`Point::embed`].
    fn embed_len(&self) -> usize;

    /// Encodes `data` into a random point; `data.len() <= embed_len()`.
    ///
    /// An empty payload behaves like [`Point::pick`] and stores no length,
    /// so [`Point::data`] is only meaningful for non-empty payloads.
    fn embed<R: RngCore + ?Sized>(&mut self, data: &[u8], rng: &mut R) -> Result<&mut Self>;

    /// Recovers the payload stored by [`Point::embed`].
    fn data(&self) -> Result<Vec<u8>>;

    fn add(&self, rhs: &Self) -> Self;
    fn sub(&self, rhs: &Self) -> Self;
    fn neg(&self) -> Self;

    /// `s * self`.
    fn mul(&self, s: &Self::Scalar) -> Self;

    /// `s * G` for the generator `G` of this point's group.
    fn mul_base(&self, s: &Self::Scalar) -> Self;

    fn marshal_size(&self) -> usize;
    fn marshal_binary(&self) -> Vec<u8>;
    fn unmarshal_binary(&mut self, bytes: &[u8]) -> Result<()>;
}

/// Internal point representation whose group law is evaluated against the
/// curve parameters in `Curve`.
pub(crate) trait GroupLaw: Sized + Clone {
    type Curve;

    fn identity(curve: &Self::Curve) -> Self;
    fn is_identity(&self, curve: &Self::Curve) -> bool;
    fn double(&self, curve: &Self::Curve) -> Self;
    fn add(&self, rhs: &Self, curve: &Self::Curve) -> Self;

    /// Fixed 4-bit window multiplication, most significant window first.
    fn scalar_mul(&self, k: &BigUint, curve: &Self::Curve) -> Self {
        if self.is_identity(curve) || k.bits() == 0 {
            return Self::identity(curve);
        }

        let mut table = Vec::with_capacity(16);
        table.push(Self::identity(curve));
        table.push(self.clone());
        for i in 2..16 {
            let next = if i % 2 == 0 {
                table[i / 2].double(curve)
            } else {
                table[i - 1].add(self, curve)
            };
            table.push(next);
        }

        let mut result = Self::identity(curve);
        for byte in k.to_bytes_be() {
            for window in [byte >> 4, byte & 0x0f] {
                result = result.double(curve);
                result = result.double(curve);
                result = result.double(curve);
                result = result.double(curve);
                if window != 0 {
                    result = result.add(&table[window as usize], curve);
                }
            }
        }

        result
    }

    /// `k * self` for a small `k`.
    fn mul_u64(&self, k: u64, curve: &Self::Curve) -> Self {
        self.scalar_mul(&BigUint::from(k), curve)
    }
}

use core::fmt::{self, Debug, Display, Formatter};
use std::sync::Arc;

use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand::RngCore;
use tracing::trace;

use super::curve::{EdwardsParams, ENCODING_LEN};
use super::Ed25519Scalar;
use crate::field::{is_odd, to_bytes_le_padded, PrimeField};
use crate::group::GroupLaw;
use crate::{Error, Point, Result};

const COFACTOR: u64 = 8;

/// Extended twisted Edwards coordinates (X:Y:Z:T) with x = X/Z, y = Y/Z and
/// x*y = T/Z. The identity is (0:1:1:0).
#[derive(Clone, Debug)]
pub(crate) struct Extended {
    x: BigUint,
    y: BigUint,
    z: BigUint,
    t: BigUint,
}

impl Extended {
    pub(crate) fn from_affine(x: BigUint, y: BigUint, field: &PrimeField) -> Self {
        let t = field.mul(&x, &y);
        Extended {
            x,
            y,
            z: BigUint::one(),
            t,
        }
    }

    pub(crate) fn to_affine(&self, field: &PrimeField) -> (BigUint, BigUint) {
        let z_inv = field.inv(&self.z);
        (field.mul(&self.x, &z_inv), field.mul(&self.y, &z_inv))
    }

    fn negate(&self, field: &PrimeField) -> Self {
        Extended {
            x: field.neg(&self.x),
            y: self.y.clone(),
            z: self.z.clone(),
            t: field.neg(&self.t),
        }
    }

    /// Projective equality: X1*Z2 == X2*Z1 and Y1*Z2 == Y2*Z1.
    fn equals(&self, other: &Self, field: &PrimeField) -> bool {
        field.mul(&self.x, &other.z) == field.mul(&other.x, &self.z)
            && field.mul(&self.y, &other.z) == field.mul(&other.y, &self.z)
    }

    /// RFC 8032 compressed form: little-endian y with the parity of x in the
    /// top bit of the last byte.
    fn encode(&self, field: &PrimeField) -> Vec<u8> {
        let (x, y) = self.to_affine(field);
        let mut bytes = to_bytes_le_padded(&y, ENCODING_LEN);
        if is_odd(&x) {
            bytes[ENCODING_LEN - 1] |= 0x80;
        }
        bytes
    }

    fn decode(bytes: &[u8], curve: &EdwardsParams) -> Result<Self> {
        if bytes.len() != ENCODING_LEN {
            return Err(Error::InvalidEncoding {
                expected: ENCODING_LEN,
                actual: bytes.len(),
            });
        }

        let mut buf = [0u8; ENCODING_LEN];
        buf.copy_from_slice(bytes);
        let x_odd = buf[ENCODING_LEN - 1] >> 7 == 1;
        buf[ENCODING_LEN - 1] &= 0x7f;

        let field = &curve.field;
        let y = BigUint::from_bytes_le(&buf);
        if &y >= field.modulus() {
            return Err(Error::PointDecodeFailure);
        }

        // x^2 = (y^2 - 1) / (d y^2 + 1)
        let one = BigUint::one();
        let yy = field.square(&y);
        let u = field.sub(&yy, &one);
        let v = field.add(&field.mul(&curve.d, &yy), &one);
        let mut x = field
            .sqrt(&field.div(&u, &v))
            .ok_or(Error::PointDecodeFailure)?;

        if x.is_zero() && x_odd {
            return Err(Error::PointDecodeFailure);
        }
        if is_odd(&x) != x_odd {
            x = field.neg(&x);
        }

        Ok(Extended::from_affine(x, y, field))
    }
}

impl GroupLaw for Extended {
    type Curve = EdwardsParams;

    fn identity(_curve: &EdwardsParams) -> Self {
        Extended {
            x: BigUint::zero(),
            y: BigUint::one(),
            z: BigUint::one(),
            t: BigUint::zero(),
        }
    }

    #[inline]
    fn is_identity(&self, _curve: &EdwardsParams) -> bool {
        self.x.is_zero() && self.y == self.z
    }

    /// dbl-2008-hwcd with a = -1.
    fn double(&self, curve: &EdwardsParams) -> Self {
        let f = &curve.field;
        let a = f.square(&self.x);
        let b = f.square(&self.y);
        let zz = f.square(&self.z);
        let c = f.add(&zz, &zz);
        let d = f.neg(&a);
        let xy = f.add(&self.x, &self.y);
        let e = f.sub(&f.sub(&f.square(&xy), &a), &b);
        let g = f.add(&d, &b);
        let ff = f.sub(&g, &c);
        let h = f.sub(&d, &b);

        Extended {
            x: f.mul(&e, &ff),
            y: f.mul(&g, &h),
            z: f.mul(&ff, &g),
            t: f.mul(&e, &h),
        }
    }

    /// add-2008-hwcd-3 with a = -1, k = 2d. Complete on Ed25519.
    fn add(&self, rhs: &Self, curve: &EdwardsParams) -> Self {
        let f = &curve.field;
        let a = f.mul(&f.sub(&self.y, &self.x), &f.sub(&rhs.y, &rhs.x));
        let b = f.mul(&f.add(&self.y, &self.x), &f.add(&rhs.y, &rhs.x));
        let c = f.mul(&f.mul(&self.t, &curve.d2), &rhs.t);
        let zz = f.mul(&self.z, &rhs.z);
        let d = f.add(&zz, &zz);
        let e = f.sub(&b, &a);
        let ff = f.sub(&d, &c);
        let g = f.add(&d, &c);
        let h = f.add(&b, &a);

        Extended {
            x: f.mul(&e, &ff),
            y: f.mul(&g, &h),
            z: f.mul(&ff, &g),
            t: f.mul(&e, &h),
        }
    }
}

/// A point of the Ed25519 curve.
///
/// Points decoded from arbitrary bytes are only guaranteed to lie on the
/// curve, not in the prime-order subgroup; [`Point::embed`] and
/// [`Point::pick`] always produce subgroup points.
#[derive(Clone)]
pub struct Ed25519Point {
    curve: Arc<EdwardsParams>,
    point: Extended,
}

impl Ed25519Point {
    pub(crate) fn new(curve: Arc<EdwardsParams>) -> Self {
        let point = Extended::identity(&curve);
        Ed25519Point { curve, point }
    }

    #[inline]
    fn with_point(&self, point: Extended) -> Self {
        Ed25519Point {
            curve: Arc::clone(&self.curve),
            point,
        }
    }

    /// Rejection sampling over random encodings. An empty payload selects a
    /// uniformly random subgroup point by clearing the cofactor; otherwise the
    /// candidate itself must already have order `n`.
    fn embed_unchecked<R: RngCore + ?Sized>(&mut self, data: &[u8], rng: &mut R) {
        let curve = &*self.curve;
        loop {
            let mut bytes = [0u8; ENCODING_LEN];
            rng.fill_bytes(&mut bytes);

            if !data.is_empty() {
                bytes[0] = data.len() as u8;
                bytes[1..1 + data.len()].copy_from_slice(data);
            }

            let candidate = match Extended::decode(&bytes, curve) {
                Ok(candidate) => candidate,
                Err(_) => {
                    trace!("random encoding is not a curve point, retrying");
                    continue;
                }
            };

            if data.is_empty() {
                let cleared = candidate.mul_u64(COFACTOR, curve);
                if cleared.is_identity(curve) {
                    trace!("candidate in small-order subgroup, retrying");
                    continue;
                }
                self.point = cleared;
                return;
            }

            if candidate
                .scalar_mul(curve.order.modulus(), curve)
                .is_identity(curve)
            {
                self.point = candidate;
                return;
            }
            trace!("candidate outside prime-order subgroup, retrying");
        }
    }
}

impl Point for Ed25519Point {
    type Scalar = Ed25519Scalar;

    fn null(&mut self) -> &mut Self {
        self.point = Extended::identity(&self.curve);
        self
    }

    fn base(&mut self) -> &mut Self {
        self.point = self.curve.base.clone();
        self
    }

    fn is_null(&self) -> bool {
        self.point.is_identity(&self.curve)
    }

    fn pick<R: RngCore + ?Sized>(&mut self, rng: &mut R) -> &mut Self {
        self.embed_unchecked(&[], rng);
        self
    }

    /// 29 bytes: the top byte stays random, the low byte holds the length.
    fn embed_len(&self) -> usize {
        (255 - 8 - 8) / 8
    }

    fn embed<R: RngCore + ?Sized>(&mut self, data: &[u8], rng: &mut R) -> Result<&mut Self> {
        let max = self.embed_len();
        if data.len() > max {
            return Err(Error::DataTooLong {
                len: data.len(),
                max,
            });
        }
        self.embed_unchecked(data, rng);
        Ok(self)
    }

    fn data(&self) -> Result<Vec<u8>> {
        let bytes = self.marshal_binary();
        let len = bytes[0] as usize;
        let max = self.embed_len();
        if len > max {
            return Err(Error::InvalidEmbeddedLength { len, max });
        }
        Ok(bytes[1..1 + len].to_vec())
    }

    fn add(&self, rhs: &Self) -> Self {
        self.with_point(self.point.add(&rhs.point, &self.curve))
    }

    fn sub(&self, rhs: &Self) -> Self {
        let neg = rhs.point.negate(&self.curve.field);
        self.with_point(self.point.add(&neg, &self.curve))
    }

    fn neg(&self) -> Self {
        self.with_point(self.point.negate(&self.curve.field))
    }

    fn mul(&self, s: &Ed25519Scalar) -> Self {
        self.with_point(self.point.scalar_mul(s.value(), &self.curve))
    }

    fn mul_base(&self, s: &Ed25519Scalar) -> Self {
        self.with_point(self.curve.base.scalar_mul(s.value(), &self.curve))
    }

    fn marshal_size(&self) -> usize {
        ENCODING_LEN
    }

    fn marshal_binary(&self) -> Vec<u8> {
        self.point.encode(&self.curve.field)
    }

    fn unmarshal_binary(&mut self, bytes: &[u8]) -> Result<()> {
        self.point = Extended::decode(bytes, &self.curve)?;
        Ok(())
    }
}

impl PartialEq for Ed25519Point {
    fn eq(&self, other: &Self) -> bool {
        self.point.equals(&other.point, &self.curve.field)
    }
}

impl Eq for Ed25519Point {}

impl Display for Ed25519Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for byte in self.marshal_binary() {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl Debug for Ed25519Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Ed25519Point({})", self)
    }
}

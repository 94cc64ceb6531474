// -x^2 + y^2 = 1 + d*x^2*y^2 over GF(2^255 - 19), d = -121665/121666
// Prime subgroup order: 2^252 + 27742317777372353535851937790883648493
// Cofactor: 8
// Generator: (15112221349535400772501151409588531511454012693041857206046113283949847762202,
//             46316835694926478169428394003475163141307993866256225615783033603165251855960)

use std::sync::Arc;

use num_bigint::BigUint;
use num_traits::One;
use rand::RngCore;
use sha2::{Digest, Sha512};

use super::point::Extended;
use super::{Ed25519Point, Ed25519Scalar};
use crate::field::PrimeField;
use crate::Group;

const ORDER_LOW: &str = "27742317777372353535851937790883648493";
const GENERATOR_X: &str = "216936d3cd6e53fec0a4e231fdd6dc5c692cc7609525a7b2c9562d608f25d51a";

/// Size in bytes of both marshaled scalars and marshaled points.
pub(crate) const ENCODING_LEN: usize = 32;

/// Curve constants shared by every scalar and point of an [`Ed25519`] group.
#[derive(Debug)]
pub(crate) struct EdwardsParams {
    /// Coordinate field, p = 2^255 - 19.
    pub(crate) field: PrimeField,
    /// Prime subgroup order n.
    pub(crate) order: PrimeField,
    pub(crate) d: BigUint,
    /// 2*d, used by the extended-coordinate addition law.
    pub(crate) d2: BigUint,
    pub(crate) base: Extended,
}

impl EdwardsParams {
    fn new() -> Self {
        let p = (BigUint::one() << 255u32) - BigUint::from(19u32);
        let field = PrimeField::new(p);

        let low: BigUint = ORDER_LOW.parse().expect("hard-coded decimal constant");
        let order = PrimeField::new((BigUint::one() << 252u32) + low);

        let d = field.neg(&field.div(&BigUint::from(121665u32), &BigUint::from(121666u32)));
        let d2 = field.add(&d, &d);

        let gx = BigUint::parse_bytes(GENERATOR_X.as_bytes(), 16).expect("hard-coded hex constant");
        let gy = field.div(&BigUint::from(4u32), &BigUint::from(5u32));
        let base = Extended::from_affine(gx, gy, &field);

        EdwardsParams {
            field,
            order,
            d,
            d2,
            base,
        }
    }
}

/// The Ed25519 twisted Edwards group.
#[derive(Clone, Debug)]
pub struct Ed25519 {
    params: Arc<EdwardsParams>,
}

impl Ed25519 {
    pub fn new() -> Self {
        Ed25519 {
            params: Arc::new(EdwardsParams::new()),
        }
    }
}

impl Default for Ed25519 {
    fn default() -> Self {
        Self::new()
    }
}

impl Group for Ed25519 {
    type Scalar = Ed25519Scalar;
    type Point = Ed25519Point;

    fn name(&self) -> &str {
        "Ed25519"
    }

    fn scalar_len(&self) -> usize {
        ENCODING_LEN
    }

    fn point_len(&self) -> usize {
        ENCODING_LEN
    }

    fn scalar(&self) -> Ed25519Scalar {
        Ed25519Scalar::new(Arc::clone(&self.params))
    }

    fn point(&self) -> Ed25519Point {
        Ed25519Point::new(Arc::clone(&self.params))
    }

    /// Hashes 32 random bytes with SHA-512 and clamps the low half of the
    /// digest: the result is a multiple of the cofactor with bit 254 set.
    /// The clamped value is stored as-is, without reduction mod `n`.
    fn new_key<R: RngCore + ?Sized>(&self, rng: &mut R) -> Ed25519Scalar {
        let mut seed = [0u8; ENCODING_LEN];
        rng.fill_bytes(&mut seed);
        let digest = Sha512::digest(seed);

        let mut clamped = [0u8; ENCODING_LEN];
        clamped.copy_from_slice(&digest[..ENCODING_LEN]);
        clamped[0] &= 0xf8;
        clamped[31] &= 0x7f;
        clamped[31] |= 0x40;

        let mut key = self.scalar();
        key.set_raw_le(&clamped);
        key
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::group::GroupLaw;
    use crate::{Point, Scalar};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generator_on_curve() {
        let g = Ed25519::new();
        let params = &g.params;
        let f = &params.field;
        let (x, y) = params.base.to_affine(f);

        // -x^2 + y^2 = 1 + d x^2 y^2
        let xx = f.square(&x);
        let yy = f.square(&y);
        let lhs = f.sub(&yy, &xx);
        let rhs = f.add(&BigUint::one(), &f.mul(&params.d, &f.mul(&xx, &yy)));
        assert_eq!(lhs, rhs);
    }

    #[test]
    fn test_generator_has_prime_order() {
        let g = Ed25519::new();
        let mut one = g.scalar();
        one.one();
        assert!(!g.point().mul_base(&one).is_null());

        let order = g.params.order.modulus().clone();
        let torsion = g.params.base.scalar_mul(&order, &g.params);
        assert!(torsion.is_identity(&g.params));
    }

    #[test]
    fn test_new_key_clamping() {
        let g = Ed25519::new();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..32 {
            let key = g.new_key(&mut rng).marshal_binary();
            assert_eq!(key.len(), 32);
            assert_eq!(key[0] & 0x07, 0);
            assert_eq!(key[31] & 0x80, 0);
            assert_eq!(key[31] & 0x40, 0x40);
        }
    }

    #[test]
    fn test_new_key_public_key_in_subgroup() {
        let g = Ed25519::new();
        let mut rng = StdRng::seed_from_u64(3);
        let key = g.new_key(&mut rng);
        let public = g.point().mul_base(&key);

        let mut reduced = g.scalar();
        reduced.unmarshal_binary(&key.marshal_binary()).expect("32 bytes");
        assert_eq!(public, g.point().mul_base(&reduced));
    }

    #[test]
    fn test_lengths() {
        let g = Ed25519::new();
        assert_eq!(g.name(), "Ed25519");
        assert_eq!(g.scalar_len(), 32);
        assert_eq!(g.point_len(), 32);
        assert!(g.scalar().is_zero());
        assert!(g.point().is_null());
    }
}

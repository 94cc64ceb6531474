use core::fmt::{self, Debug, Display, Formatter};
use std::sync::Arc;

use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand::RngCore;
use tracing::trace;

use super::curve::WeierstrassParams;
use super::WeierstrassScalar;
use crate::field::to_bytes_be_padded;
use crate::group::GroupLaw;
use crate::{Error, Point, Result};

/// ANSI X9.62 tag for an uncompressed point.
const UNCOMPRESSED: u8 = 0x04;

/// Jacobian coordinates (X:Y:Z) with x = X/Z^2 and y = Y/Z^3. The identity
/// is any triple with Z = 0.
#[derive(Clone, Debug)]
struct Jacobian {
    x: BigUint,
    y: BigUint,
    z: BigUint,
}

impl Jacobian {
    fn from_affine(point: &WeierstrassPoint) -> Self {
        if point.infinity {
            return Jacobian::identity(&point.curve);
        }
        Jacobian {
            x: point.x.clone(),
            y: point.y.clone(),
            z: BigUint::one(),
        }
    }

    /// `None` for the identity.
    fn to_affine(&self, curve: &WeierstrassParams) -> Option<(BigUint, BigUint)> {
        if self.is_identity(curve) {
            return None;
        }
        let f = &curve.field;
        let z_inv = f.inv(&self.z);
        let z_inv2 = f.square(&z_inv);
        let z_inv3 = f.mul(&z_inv2, &z_inv);
        Some((f.mul(&self.x, &z_inv2), f.mul(&self.y, &z_inv3)))
    }
}

impl GroupLaw for Jacobian {
    type Curve = WeierstrassParams;

    fn identity(_curve: &WeierstrassParams) -> Self {
        Jacobian {
            x: BigUint::one(),
            y: BigUint::one(),
            z: BigUint::zero(),
        }
    }

    #[inline]
    fn is_identity(&self, _curve: &WeierstrassParams) -> bool {
        self.z.is_zero()
    }

    /// dbl-1998-cmo-2 for an arbitrary `a`.
    fn double(&self, curve: &WeierstrassParams) -> Self {
        if self.is_identity(curve) || self.y.is_zero() {
            return Jacobian::identity(curve);
        }
        let f = &curve.field;
        let xx = f.square(&self.x);
        let yy = f.square(&self.y);
        let yyyy = f.square(&yy);
        let zz = f.square(&self.z);

        let s = f.mul(&BigUint::from(4u32), &f.mul(&self.x, &yy));
        let m = f.add(
            &f.mul(&BigUint::from(3u32), &xx),
            &f.mul(&curve.a, &f.square(&zz)),
        );
        let x3 = f.sub(&f.square(&m), &f.add(&s, &s));
        let y3 = f.sub(
            &f.mul(&m, &f.sub(&s, &x3)),
            &f.mul(&BigUint::from(8u32), &yyyy),
        );
        let yz = f.mul(&self.y, &self.z);
        let z3 = f.add(&yz, &yz);

        Jacobian {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// add-1998-cmo-2, falling back to doubling when both inputs coincide.
    fn add(&self, rhs: &Self, curve: &WeierstrassParams) -> Self {
        if self.is_identity(curve) {
            return rhs.clone();
        }
        if rhs.is_identity(curve) {
            return self.clone();
        }
        let f = &curve.field;
        let z1z1 = f.square(&self.z);
        let z2z2 = f.square(&rhs.z);
        let u1 = f.mul(&self.x, &z2z2);
        let u2 = f.mul(&rhs.x, &z1z1);
        let s1 = f.mul(&self.y, &f.mul(&rhs.z, &z2z2));
        let s2 = f.mul(&rhs.y, &f.mul(&self.z, &z1z1));

        if u1 == u2 {
            return if s1 == s2 {
                self.double(curve)
            } else {
                Jacobian::identity(curve)
            };
        }

        let h = f.sub(&u2, &u1);
        let r = f.sub(&s2, &s1);
        let hh = f.square(&h);
        let hhh = f.mul(&h, &hh);
        let v = f.mul(&u1, &hh);

        let x3 = f.sub(&f.sub(&f.square(&r), &hhh), &f.add(&v, &v));
        let y3 = f.sub(&f.mul(&r, &f.sub(&v, &x3)), &f.mul(&s1, &hhh));
        let z3 = f.mul(&f.mul(&self.z, &rhs.z), &h);

        Jacobian {
            x: x3,
            y: y3,
            z: z3,
        }
    }
}

/// A point of a [`Weierstrass`](super::Weierstrass) curve in affine form.
///
/// The configured curves are expected to have prime order, so every point
/// on the curve lies in the group generated by the base point.
#[derive(Clone)]
pub struct WeierstrassPoint {
    curve: Arc<WeierstrassParams>,
    x: BigUint,
    y: BigUint,
    infinity: bool,
}

/// Whether `n * G` is the identity, with `n` the configured group order.
pub(super) fn order_annihilates_base(curve: &WeierstrassParams) -> bool {
    let base = Jacobian {
        x: curve.gx.clone(),
        y: curve.gy.clone(),
        z: BigUint::one(),
    };
    base.scalar_mul(curve.order.modulus(), curve).is_identity(curve)
}

impl WeierstrassPoint {
    pub(crate) fn new(curve: Arc<WeierstrassParams>) -> Self {
        WeierstrassPoint {
            curve,
            x: BigUint::zero(),
            y: BigUint::zero(),
            infinity: true,
        }
    }

    fn with_jacobian(&self, point: &Jacobian) -> Self {
        let mut out = WeierstrassPoint::new(Arc::clone(&self.curve));
        if let Some((x, y)) = point.to_affine(&self.curve) {
            out.x = x;
            out.y = y;
            out.infinity = false;
        }
        out
    }

    fn base_jacobian(&self) -> Jacobian {
        Jacobian {
            x: self.curve.gx.clone(),
            y: self.curve.gy.clone(),
            z: BigUint::one(),
        }
    }

    #[inline]
    fn coord_len(&self) -> usize {
        self.curve.coord_len()
    }

    fn embed_unchecked<R: RngCore + ?Sized>(&mut self, data: &[u8], rng: &mut R) {
        let curve = Arc::clone(&self.curve);
        let f = &curve.field;
        let l = self.coord_len();
        let bits = f.bits() as usize;
        let excess = l * 8 - bits;

        loop {
            let mut bytes = vec![0u8; l];
            rng.fill_bytes(&mut bytes);
            bytes[..excess / 8].fill(0);
            if excess % 8 != 0 {
                bytes[excess / 8] &= 0xff >> (excess % 8);
            }

            if !data.is_empty() {
                bytes[l - 1] = data.len() as u8;
                bytes[l - 1 - data.len()..l - 1].copy_from_slice(data);
            }

            let x = BigUint::from_bytes_be(&bytes);
            if &x >= f.modulus() {
                trace!("x candidate not below p, retrying");
                continue;
            }

            let y2 = curve.rhs(&x);
            let mut y = match f.sqrt(&y2) {
                Some(y) => y,
                None => {
                    trace!("x candidate has no matching y, retrying");
                    continue;
                }
            };

            let mut branch = [0u8; 1];
            rng.fill_bytes(&mut branch);
            if branch[0] & 0x80 != 0 {
                y = f.neg(&y);
            }

            if f.square(&y) != y2 {
                trace!("square root check failed, retrying");
                continue;
            }

            self.x = x;
            self.y = y;
            self.infinity = false;
            return;
        }
    }
}

impl Point for WeierstrassPoint {
    type Scalar = WeierstrassScalar;

    fn null(&mut self) -> &mut Self {
        self.x = BigUint::zero();
        self.y = BigUint::zero();
        self.infinity = true;
        self
    }

    fn base(&mut self) -> &mut Self {
        self.x = self.curve.gx.clone();
        self.y = self.curve.gy.clone();
        self.infinity = false;
        self
    }

    #[inline]
    fn is_null(&self) -> bool {
        self.infinity
    }

    fn pick<R: RngCore + ?Sized>(&mut self, rng: &mut R) -> &mut Self {
        self.embed_unchecked(&[], rng);
        self
    }

    /// The low byte of `x` holds the length and the top byte stays random.
    fn embed_len(&self) -> usize {
        (self.curve.field.bits() as usize).saturating_sub(16) / 8
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
        let l = self.coord_len();
        let bytes = to_bytes_be_padded(&self.x, l);
        let len = bytes[l - 1] as usize;
        let max = self.embed_len();
        if len > max {
            return Err(Error::InvalidEmbeddedLength { len, max });
        }
        Ok(bytes[l - 1 - len..l - 1].to_vec())
    }

    fn add(&self, rhs: &Self) -> Self {
        let sum = Jacobian::from_affine(self).add(&Jacobian::from_affine(rhs), &self.curve);
        self.with_jacobian(&sum)
    }

    fn sub(&self, rhs: &Self) -> Self {
        self.add(&rhs.neg())
    }

    fn neg(&self) -> Self {
        let mut out = self.clone();
        if !out.infinity {
            out.y = self.curve.field.neg(&self.y);
        }
        out
    }

    fn mul(&self, s: &WeierstrassScalar) -> Self {
        let product = Jacobian::from_affine(self).scalar_mul(s.value(), &self.curve);
        self.with_jacobian(&product)
    }

    fn mul_base(&self, s: &WeierstrassScalar) -> Self {
        let product = self.base_jacobian().scalar_mul(s.value(), &self.curve);
        self.with_jacobian(&product)
    }

    fn marshal_size(&self) -> usize {
        self.curve.point_len()
    }

    fn marshal_binary(&self) -> Vec<u8> {
        let l = self.coord_len();
        let mut out = Vec::with_capacity(self.curve.point_len());
        out.push(UNCOMPRESSED);
        if self.infinity {
            out.resize(2 * l + 1, 0);
        } else {
            out.extend_from_slice(&to_bytes_be_padded(&self.x, l));
            out.extend_from_slice(&to_bytes_be_padded(&self.y, l));
        }
        out
    }

    fn unmarshal_binary(&mut self, bytes: &[u8]) -> Result<()> {
        let l = self.coord_len();
        let expected = self.curve.point_len();
        if bytes.len() != expected {
            return Err(Error::InvalidEncoding {
                expected,
                actual: bytes.len(),
            });
        }
        if bytes[0] != UNCOMPRESSED {
            return Err(Error::InvalidHeader(bytes[0]));
        }

        let payload = &bytes[1..];
        if payload.iter().all(|&b| b == 0) {
            self.null();
            return Ok(());
        }

        let x = BigUint::from_bytes_be(&payload[..l]);
        let y = BigUint::from_bytes_be(&payload[l..]);
        if !self.curve.is_on_curve(&x, &y) {
            return Err(Error::PointNotOnCurve);
        }

        self.x = x;
        self.y = y;
        self.infinity = false;
        Ok(())
    }
}

impl PartialEq for WeierstrassPoint {
    fn eq(&self, other: &Self) -> bool {
        match (self.infinity, other.infinity) {
            (true, true) => true,
            (false, false) => self.x == other.x && self.y == other.y,
            _ => false,
        }
    }
}

impl Eq for WeierstrassPoint {}

impl Display for WeierstrassPoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.infinity {
            return write!(f, "(0,0)");
        }
        write!(f, "({},{})", self.x, self.y)
    }
}

impl Debug for WeierstrassPoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "WeierstrassPoint[{}]{}", self.curve.name, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weierstrass::{params, CurveConfig, Weierstrass};
    use crate::{Group, Scalar};
    use hex_literal::hex;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn p256() -> Weierstrass {
        Weierstrass::new(&params::p256()).expect("valid config")
    }

    fn toy() -> Weierstrass {
        // y^2 = x^3 + x + 4 over GF(23), prime order 29
        let config = CurveConfig {
            name: "toy".into(),
            bit_size: 5,
            gx: "0".into(),
            gy: "2".into(),
            p: "17".into(),
            a: Some("1".into()),
            b: "4".into(),
            n: "1d".into(),
        };
        Weierstrass::new(&config).expect("valid config")
    }

    fn scalar(g: &Weierstrass, v: i64) -> WeierstrassScalar {
        let mut s = g.scalar();
        s.set_int64(v);
        s
    }

    #[test]
    fn test_base_encoding() {
        let g = p256();
        let mut base = g.point();
        base.base();
        let expected = hex!(
            "04"
            "6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296"
            "4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5"
        );
        assert_eq!(base.marshal_binary(), expected.to_vec());
    }

    #[test]
    fn test_identity_encoding() {
        let g = p256();
        let bytes = g.point().marshal_binary();
        assert_eq!(bytes.len(), 65);
        assert_eq!(bytes[0], 0x04);
        assert!(bytes[1..].iter().all(|&b| b == 0));

        let mut decoded = g.point();
        decoded.base();
        decoded.unmarshal_binary(&bytes).expect("identity");
        assert!(decoded.is_null());
    }

    #[test]
    fn test_double_base_vector() {
        let g = p256();
        let two_g = g.point().mul_base(&scalar(&g, 2));
        let expected = hex!(
            "04"
            "7cf27b188d034f7e8a52380304b51ac3c08969e277f21b35a60b48fc47669978"
            "07775510db8ed040293d9ac69f7430dbba7dade63ce982299e04b79d227873d1"
        );
        assert_eq!(two_g.marshal_binary(), expected.to_vec());
    }

    #[test]
    fn test_marshal_round_trip() {
        let mut rng = StdRng::seed_from_u64(21);
        for config in [params::p224(), params::p256(), params::p384(), params::p521()] {
            let g = Weierstrass::new(&config).expect("valid config");
            let mut p = g.point();
            p.pick(&mut rng);
            let bytes = p.marshal_binary();
            assert_eq!(bytes.len(), g.point_len());

            let mut decoded = g.point();
            decoded.unmarshal_binary(&bytes).expect("valid encoding");
            assert_eq!(decoded, p, "{}", g.name());
        }
    }

    #[test]
    fn test_unmarshal_rejects_bad_header() {
        let g = p256();
        let mut base = g.point();
        base.base();
        let mut bytes = base.marshal_binary();
        bytes[0] = 0x02;
        let mut p = g.point();
        assert_eq!(p.unmarshal_binary(&bytes), Err(Error::InvalidHeader(0x02)));
    }

    #[test]
    fn test_unmarshal_rejects_wrong_length() {
        let g = p256();
        let mut p = g.point();
        assert_eq!(
            p.unmarshal_binary(&[0x04; 33]),
            Err(Error::InvalidEncoding {
                expected: 65,
                actual: 33
            })
        );
    }

    #[test]
    fn test_unmarshal_rejects_off_curve() {
        let g = p256();
        let mut base = g.point();
        base.base();
        let mut bytes = base.marshal_binary();
        bytes[64] ^= 1;
        let mut p = g.point();
        assert_eq!(p.unmarshal_binary(&bytes), Err(Error::PointNotOnCurve));
    }

    #[test]
    fn test_unmarshal_rejects_coordinate_out_of_range() {
        let g = toy();
        let mut p = g.point();
        // (0, 2 + 23): congruent to the generator but not reduced
        assert_eq!(
            p.unmarshal_binary(&[0x04, 0x00, 25]),
            Err(Error::PointNotOnCurve)
        );
        p.unmarshal_binary(&[0x04, 0x00, 0x02]).expect("generator");
        let mut base = g.point();
        base.base();
        assert_eq!(p, base);
    }

    #[test]
    fn test_group_law() {
        let g = p256();
        let mut base = g.point();
        base.base();

        assert_eq!(base.add(&g.point()), base);
        assert_eq!(g.point().add(&base), base);
        assert!(base.add(&base.neg()).is_null());
        assert!(base.sub(&base).is_null());
        assert_eq!(base.add(&base), base.mul(&scalar(&g, 2)));
        assert_eq!(
            base.add(&base).add(&base),
            g.point().mul_base(&scalar(&g, 3))
        );
        assert!(base.mul(&g.scalar()).is_null());
        assert!(g.point().mul(&scalar(&g, 7)).is_null());
    }

    #[test]
    fn test_order_annihilates_base() {
        for config in [params::p224(), params::p256(), params::p384(), params::p521()] {
            let g = Weierstrass::new(&config).expect("valid config");
            assert!(order_annihilates_base(&g.point().curve), "{}", config.name);

            let mut base = g.point();
            base.base();
            let minus_one = scalar(&g, -1);
            assert_eq!(base.mul(&minus_one), base.neg(), "{}", config.name);
            assert!(base.mul(&minus_one).add(&base).is_null(), "{}", config.name);
        }
    }

    #[test]
    fn test_toy_curve_cycles() {
        let g = toy();
        let mut base = g.point();
        base.base();

        let mut acc = g.point();
        for i in 1..29 {
            acc = acc.add(&base);
            assert!(!acc.is_null(), "{i} * G");
            assert_eq!(acc, base.mul(&scalar(&g, i)));
        }
        assert!(acc.add(&base).is_null());
    }

    #[test]
    fn test_embed_data_round_trip() {
        let mut rng = StdRng::seed_from_u64(22);
        for config in [params::p224(), params::p256(), params::p384(), params::p521()] {
            let g = Weierstrass::new(&config).expect("valid config");
            let p = g.point();
            let max = p.embed_len();
            for len in [1, 3, max] {
                let payload: Vec<u8> = (0..len as u8).map(|b| b.wrapping_mul(37)).collect();
                let mut p = g.point();
                p.embed(&payload, &mut rng).expect("fits");
                assert!(!p.is_null());
                assert_eq!(p.data().expect("valid length"), payload, "{}", g.name());

                let mut decoded = g.point();
                decoded.unmarshal_binary(&p.marshal_binary()).expect("on curve");
                assert_eq!(decoded, p);
            }
        }
    }

    #[test]
    fn test_embed_len() {
        let cases = [
            (params::p224(), 26),
            (params::p256(), 30),
            (params::p384(), 46),
            (params::p521(), 63),
        ];
        for (config, len) in cases {
            let g = Weierstrass::new(&config).expect("valid config");
            assert_eq!(g.point().embed_len(), len);
        }
        assert_eq!(toy().point().embed_len(), 0);
    }

    #[test]
    fn test_embed_rejects_long_data() {
        let g = p256();
        let mut rng = StdRng::seed_from_u64(23);
        let mut p = g.point();
        let err = p.embed(&[0u8; 31], &mut rng).unwrap_err();
        assert_eq!(err, Error::DataTooLong { len: 31, max: 30 });
    }

    #[test]
    fn test_data_rejects_bad_length_byte() {
        let g = p256();
        let mut base = g.point();
        base.base();
        // x of the generator ends in 0x96 = 150
        assert_eq!(
            base.data(),
            Err(Error::InvalidEmbeddedLength { len: 150, max: 30 })
        );
    }

    #[test]
    fn test_pick_on_toy_curve() {
        let g = toy();
        let mut rng = StdRng::seed_from_u64(24);
        for _ in 0..16 {
            let mut p = g.point();
            p.pick(&mut rng);
            let mut decoded = g.point();
            decoded.unmarshal_binary(&p.marshal_binary()).expect("on curve");
            assert_eq!(decoded, p);
            assert_eq!(p.mul(&scalar(&g, 28)), p.neg());
        }
    }

    #[test]
    fn test_display() {
        let g = toy();
        let mut base = g.point();
        assert_eq!(base.to_string(), "(0,0)");
        base.base();
        assert_eq!(base.to_string(), "(0,2)");
    }
}

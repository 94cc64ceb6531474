use std::sync::Arc;

use num_bigint::BigUint;
use num_traits::Zero;
use tracing::debug;

use super::params::CurveConfig;
use super::point;
use super::{WeierstrassPoint, WeierstrassScalar};
use crate::field::PrimeField;
use crate::{Error, Group, Result};

/// Parsed curve constants shared by every scalar and point of a
/// [`Weierstrass`] group.
#[derive(Debug)]
pub(crate) struct WeierstrassParams {
    pub(crate) name: String,
    pub(crate) bit_size: usize,
    pub(crate) field: PrimeField,
    pub(crate) order: PrimeField,
    pub(crate) a: BigUint,
    pub(crate) b: BigUint,
    pub(crate) gx: BigUint,
    pub(crate) gy: BigUint,
}

impl WeierstrassParams {
    /// Bytes per affine coordinate.
    #[inline]
    pub(crate) fn coord_len(&self) -> usize {
        (self.bit_size + 7) >> 3
    }

    /// ANSI X9.62: 1 header byte plus 2 coordinates.
    #[inline]
    pub(crate) fn point_len(&self) -> usize {
        2 * self.coord_len() + 1
    }

    #[inline]
    pub(crate) fn scalar_len(&self) -> usize {
        self.order.byte_len()
    }

    /// x^3 + a*x + b mod p.
    pub(crate) fn rhs(&self, x: &BigUint) -> BigUint {
        let f = &self.field;
        let x3 = f.mul(&f.square(x), x);
        f.add(&f.add(&x3, &f.mul(&self.a, x)), &self.b)
    }

    /// Reduced coordinates satisfying y^2 = x^3 + a*x + b.
    pub(crate) fn is_on_curve(&self, x: &BigUint, y: &BigUint) -> bool {
        let p = self.field.modulus();
        x < p && y < p && self.field.square(y) == self.rhs(x)
    }
}

fn parse_hex(field: &str, value: &str) -> Result<BigUint> {
    let digits = value.trim();
    let digits = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
        .unwrap_or(digits);
    BigUint::parse_bytes(digits.as_bytes(), 16)
        .ok_or_else(|| Error::InvalidConfig(format!("`{field}` is not a hex number: {value:?}")))
}

/// A prime-order group on a short Weierstrass curve, built from a
/// [`CurveConfig`].
#[derive(Clone, Debug)]
pub struct Weierstrass {
    params: Arc<WeierstrassParams>,
}

impl Weierstrass {
    /// Parses and validates `config`. The generator must lie on the curve and
    /// have order `n`.
    pub fn new(config: &CurveConfig) -> Result<Self> {
        let p = parse_hex("p", &config.p)?;
        let n = parse_hex("n", &config.n)?;
        if p <= BigUint::from(3u32) || !p.bit(0) {
            return Err(Error::InvalidConfig("`p` must be an odd prime above 3".into()));
        }
        if n <= BigUint::from(1u32) {
            return Err(Error::InvalidConfig("`n` must be larger than 1".into()));
        }
        if config.bit_size == 0 || (config.bit_size as u64) < p.bits() {
            return Err(Error::InvalidConfig(format!(
                "bit size {} cannot hold a {}-bit prime",
                config.bit_size,
                p.bits()
            )));
        }

        let field = PrimeField::new(p);
        let a = match &config.a {
            Some(a) => parse_hex("a", a)?,
            None => field.sub(&BigUint::zero(), &BigUint::from(3u32)),
        };
        let b = parse_hex("b", &config.b)?;
        let gx = parse_hex("gx", &config.gx)?;
        let gy = parse_hex("gy", &config.gy)?;

        for (name, value) in [("a", &a), ("b", &b)] {
            if value >= field.modulus() {
                return Err(Error::InvalidConfig(format!("`{name}` is not reduced mod p")));
            }
        }

        let params = WeierstrassParams {
            name: config.name.clone(),
            bit_size: config.bit_size,
            field,
            order: PrimeField::new(n),
            a,
            b,
            gx,
            gy,
        };

        if !params.is_on_curve(&params.gx, &params.gy) {
            return Err(Error::InvalidConfig(format!(
                "generator of {} is not on the curve",
                config.name
            )));
        }
        if !point::order_annihilates_base(&params) {
            return Err(Error::InvalidConfig(format!(
                "`n` is not the order of the generator of {}",
                config.name
            )));
        }

        debug!(
            name = %params.name,
            bit_size = params.bit_size,
            scalar_len = params.scalar_len(),
            point_len = params.point_len(),
            "constructed weierstrass group"
        );

        Ok(Weierstrass {
            params: Arc::new(params),
        })
    }

    /// Bytes per affine coordinate in the X9.62 encoding.
    pub fn coord_len(&self) -> usize {
        self.params.coord_len()
    }

    /// Whether `(x, y)` are reduced coordinates of a point on this curve.
    pub fn is_on_curve(&self, x: &BigUint, y: &BigUint) -> bool {
        self.params.is_on_curve(x, y)
    }
}

impl Group for Weierstrass {
    type Scalar = WeierstrassScalar;
    type Point = WeierstrassPoint;

    fn name(&self) -> &str {
        &self.params.name
    }

    fn scalar_len(&self) -> usize {
        self.params.scalar_len()
    }

    fn point_len(&self) -> usize {
        self.params.point_len()
    }

    fn scalar(&self) -> WeierstrassScalar {
        WeierstrassScalar::new(Arc::clone(&self.params))
    }

    fn point(&self) -> WeierstrassPoint {
        WeierstrassPoint::new(Arc::clone(&self.params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weierstrass::params;

    fn toy() -> CurveConfig {
        // y^2 = x^3 + x + 4 over GF(23), 29 points
        CurveConfig {
            name: "toy".into(),
            bit_size: 5,
            gx: "0".into(),
            gy: "2".into(),
            p: "17".into(),
            a: Some("1".into()),
            b: "4".into(),
            n: "1d".into(),
        }
    }

    #[test]
    fn test_nist_lengths() {
        let cases = [
            (params::p224(), 28, 57),
            (params::p256(), 32, 65),
            (params::p384(), 48, 97),
            (params::p521(), 66, 133),
        ];
        for (config, scalar_len, point_len) in cases {
            let g = Weierstrass::new(&config).expect("valid config");
            assert_eq!(g.name(), config.name);
            assert_eq!(g.scalar_len(), scalar_len);
            assert_eq!(g.point_len(), point_len);
        }
    }

    #[test]
    fn test_family_default_a() {
        let g = Weierstrass::new(&params::p256()).expect("valid config");
        let p = g.params.field.modulus();
        assert_eq!(&g.params.a + BigUint::from(3u32), *p);
    }

    #[test]
    fn test_toy_curve() {
        let g = Weierstrass::new(&toy()).expect("valid config");
        assert!(g.is_on_curve(&BigUint::from(0u32), &BigUint::from(2u32)));
        assert!(g.is_on_curve(&BigUint::from(0u32), &BigUint::from(21u32)));
        assert!(!g.is_on_curve(&BigUint::from(0u32), &BigUint::from(25u32)));
        assert_eq!(g.coord_len(), 1);
        assert_eq!(g.point_len(), 3);
        assert_eq!(g.scalar_len(), 1);
    }

    #[test]
    fn test_rejects_generator_off_curve() {
        let mut config = toy();
        config.gy = "3".into();
        assert!(matches!(
            Weierstrass::new(&config),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_rejects_bad_hex() {
        let mut config = params::p256();
        config.b = "not hex".into();
        assert!(matches!(
            Weierstrass::new(&config),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_rejects_small_bit_size() {
        let mut config = params::p256();
        config.bit_size = 128;
        assert!(matches!(
            Weierstrass::new(&config),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_rejects_wrong_order() {
        let mut config = toy();
        config.n = "1c".into();
        assert!(matches!(
            Weierstrass::new(&config),
            Err(Error::InvalidConfig(_))
        ));

        // P-521 order with one `ff` byte dropped
        let mut config = params::p521();
        config.n = format!("01{}", &config.n[4..]);
        assert_eq!(config.n.len(), 130);
        assert!(matches!(
            Weierstrass::new(&config),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_accepts_prefixed_hex() {
        let mut config = params::p256();
        config.n = format!("0x{}", config.n);
        assert!(Weierstrass::new(&config).is_ok());
    }
}

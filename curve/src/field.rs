//! Arithmetic modulo a prime, on top of `num-bigint`.
//!
//! Every curve keeps two of these: one for the coordinate field `p` and one
//! for the group order `n`. Inputs to the arithmetic helpers may be
//! unreduced; outputs are always in `[0, modulus)`.

use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Integers modulo a fixed odd prime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct PrimeField {
    modulus: BigUint,
}

impl PrimeField {
    pub(crate) fn new(modulus: BigUint) -> Self {
        PrimeField { modulus }
    }

    #[inline]
    pub(crate) fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// Bit length of the modulus.
    #[inline]
    pub(crate) fn bits(&self) -> u64 {
        self.modulus.bits()
    }

    /// Number of bytes needed to hold any reduced element.
    #[inline]
    pub(crate) fn byte_len(&self) -> usize {
        ((self.bits() + 7) / 8) as usize
    }

    #[inline]
    pub(crate) fn reduce(&self, a: &BigUint) -> BigUint {
        a % &self.modulus
    }

    #[inline]
    pub(crate) fn add(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a + b) % &self.modulus
    }

    #[inline]
    pub(crate) fn sub(&self, a: &BigUint, b: &BigUint) -> BigUint {
        let b = b % &self.modulus;
        (a + &self.modulus - b) % &self.modulus
    }

    #[inline]
    pub(crate) fn neg(&self, a: &BigUint) -> BigUint {
        let a = a % &self.modulus;
        if a.is_zero() {
            a
        } else {
            &self.modulus - a
        }
    }

    #[inline]
    pub(crate) fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a * b) % &self.modulus
    }

    #[inline]
    pub(crate) fn square(&self, a: &BigUint) -> BigUint {
        (a * a) % &self.modulus
    }

    #[inline]
    pub(crate) fn pow(&self, a: &BigUint, exp: &BigUint) -> BigUint {
        a.modpow(exp, &self.modulus)
    }

    /// Multiplicative inverse via Fermat's little theorem. Zero maps to zero.
    pub(crate) fn inv(&self, a: &BigUint) -> BigUint {
        let exp = &self.modulus - BigUint::from(2u32);
        self.pow(a, &exp)
    }

    /// `a * b^{-1}`.
    pub(crate) fn div(&self, a: &BigUint, b: &BigUint) -> BigUint {
        self.mul(a, &self.inv(b))
    }

    /// Euler's criterion. Zero counts as a square.
    pub(crate) fn is_square(&self, a: &BigUint) -> bool {
        let a = self.reduce(a);
        if a.is_zero() {
            return true;
        }
        let exp = (&self.modulus - BigUint::one()) >> 1u32;
        self.pow(&a, &exp).is_one()
    }

    /// A square root of `a`, if one exists.
    ///
    /// Uses the direct exponentiation for `p = 3 (mod 4)`, Atkin's method for
    /// `p = 5 (mod 8)` and Tonelli-Shanks otherwise. The returned root is not
    /// normalized; callers pick the branch they need.
    pub(crate) fn sqrt(&self, a: &BigUint) -> Option<BigUint> {
        let a = self.reduce(a);
        if a.is_zero() {
            return Some(a);
        }
        if !self.is_square(&a) {
            return None;
        }

        let p = &self.modulus;
        let one = BigUint::one();
        let rem8 = p % BigUint::from(8u32);

        let root = if rem8 == BigUint::from(3u32) || rem8 == BigUint::from(7u32) {
            let exp = (p + &one) >> 2u32;
            self.pow(&a, &exp)
        } else if rem8 == BigUint::from(5u32) {
            let two_a = self.add(&a, &a);
            let exp = (p - BigUint::from(5u32)) >> 3u32;
            let v = self.pow(&two_a, &exp);
            let i = self.mul(&two_a, &self.square(&v));
            self.mul(&self.mul(&a, &v), &self.sub(&i, &one))
        } else {
            self.tonelli_shanks(&a)?
        };

        if self.square(&root) == a {
            Some(root)
        } else {
            None
        }
    }

    fn tonelli_shanks(&self, a: &BigUint) -> Option<BigUint> {
        let p = &self.modulus;
        let one = BigUint::one();
        let p_minus_one = p - &one;
        let s = p_minus_one.trailing_zeros()?;
        let q = &p_minus_one >> s;

        let mut z = BigUint::from(2u32);
        while self.is_square(&z) {
            z += &one;
        }

        let mut m = s;
        let mut c = self.pow(&z, &q);
        let mut t = self.pow(a, &q);
        let mut r = self.pow(a, &((&q + &one) >> 1u32));

        while !t.is_one() {
            let mut i = 0u64;
            let mut t2i = t.clone();
            while !t2i.is_one() {
                t2i = self.square(&t2i);
                i += 1;
                if i == m {
                    return None;
                }
            }

            let mut b = c.clone();
            for _ in 0..(m - i - 1) {
                b = self.square(&b);
            }

            m = i;
            c = self.square(&b);
            t = self.mul(&t, &c);
            r = self.mul(&r, &b);
        }

        Some(r)
    }
}

#[inline]
pub(crate) fn is_odd(a: &BigUint) -> bool {
    a.bit(0)
}

/// Little-endian encoding, zero padded to `len` bytes.
pub(crate) fn to_bytes_le_padded(a: &BigUint, len: usize) -> Vec<u8> {
    let mut bytes = a.to_bytes_le();
    bytes.resize(len, 0);
    bytes
}

/// Big-endian encoding, left zero padded to `len` bytes.
pub(crate) fn to_bytes_be_padded(a: &BigUint, len: usize) -> Vec<u8> {
    let bytes = a.to_bytes_be();
    if bytes.len() >= len {
        return bytes;
    }
    let mut out = vec![0u8; len - bytes.len()];
    out.extend_from_slice(&bytes);
    out
}

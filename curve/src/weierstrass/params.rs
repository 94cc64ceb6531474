//! Curve configurations for [`Weierstrass`](super::Weierstrass) groups.
//!
//! Numbers are big-endian hex strings, optionally prefixed with `0x`. The
//! named NIST parameter sets below follow SP 800-186 and leave `a` unset,
//! which selects the NIST family default `a = p - 3`.

use serde::{Deserialize, Serialize};

/// Parameters of a short Weierstrass curve `y^2 = x^3 + a*x + b mod p` with
/// a base point `(gx, gy)` of prime order `n`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurveConfig {
    pub name: String,
    /// Bit size of the coordinate field, drives the point encoding width.
    pub bit_size: usize,
    pub gx: String,
    pub gy: String,
    pub p: String,
    /// Curve coefficient `a`; `p - 3` when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a: Option<String>,
    pub b: String,
    pub n: String,
}

fn nist(name: &str, bit_size: usize, p: &str, b: &str, n: &str, gx: &str, gy: &str) -> CurveConfig {
    CurveConfig {
        name: name.to_owned(),
        bit_size,
        gx: gx.to_owned(),
        gy: gy.to_owned(),
        p: p.to_owned(),
        a: None,
        b: b.to_owned(),
        n: n.to_owned(),
    }
}

/// NIST P-224 (secp224r1).
pub fn p224() -> CurveConfig {
    nist(
        "P-224",
        224,
        "ffffffffffffffffffffffffffffffff000000000000000000000001",
        "b4050a850c04b3abf54132565044b0b7d7bfd8ba270b39432355ffb4",
        "ffffffffffffffffffffffffffff16a2e0b8f03e13dd29455c5c2a3d",
        "b70e0cbd6bb4bf7f321390b94a03c1d356c21122343280d6115c1d21",
        "bd376388b5f723fb4c22dfe6cd4375a05a07476444d5819985007e34",
    )
}

/// NIST P-256 (secp256r1, prime256v1).
pub fn p256() -> CurveConfig {
    nist(
        "P-256",
        256,
        "ffffffff00000001000000000000000000000000ffffffffffffffffffffffff",
        "5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b",
        "ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551",
        "6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296",
        "4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5",
    )
}

/// NIST P-384 (secp384r1).
pub fn p384() -> CurveConfig {
    nist(
        "P-384",
        384,
        "fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffeffffffff0000000000000000ffffffff",
        "b3312fa7e23ee7e4988e056be3f82d19181d9c6efe8141120314088f5013875ac656398d8a2ed19d2a85c8edd3ec2aef",
        "ffffffffffffffffffffffffffffffffffffffffffffffffc7634d81f4372ddf581a0db248b0a77aecec196accc52973",
        "aa87ca22be8b05378eb1c71ef320ad746e1d3b628ba79b9859f741e082542a385502f25dbf55296c3a545e3872760ab7",
        "3617de4a96262c6f5d9e98bf9292dc29f8f41dbd289a147ce9da3113b5f0b8c00a60b1ce1d7e819d7a431d7c90ea0e5f",
    )
}

/// NIST P-521 (secp521r1).
pub fn p521() -> CurveConfig {
    nist(
        "P-521",
        521,
        "01ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
        "0051953eb9618e1c9a1f929a21a0b68540eea2da725b99b315f3b8b489918ef109e156193951ec7e937b1652c0bd3bb1bf073573df883d2c34f1ef451fd46b503f00",
        "01fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffa51868783bf2f966b7fcc0148f709a5d03bb5c9b8899c47aebb6fb71e91386409",
        "00c6858e06b70404e9cd9e3ecb662395b4429c648139053fb521f828af606b4d3dbaa14b5e77efe75928fe1dc127a2ffa8de3348b3c1856a429bf97e7e31c2e5bd66",
        "011839296a789a3bc0045c8a5fb42c7d1bd998f54449579b446817afbd17273e662c97ee72995ef42640c550b9013fad0761353c7086a272c24088be94769fd16650",
    )
}

/// Looks up a named configuration, e.g. `"P-256"`. Case-insensitive.
pub fn by_name(name: &str) -> Option<CurveConfig> {
    match name.to_ascii_uppercase().as_str() {
        "P-224" | "P224" => Some(p224()),
        "P-256" | "P256" => Some(p256()),
        "P-384" | "P384" => Some(p384()),
        "P-521" | "P521" => Some(p521()),
        _ => None,
    }
}

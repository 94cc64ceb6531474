//! Uniform sampling from an injectable random-byte source.

use num_bigint::BigUint;
use num_traits::Zero;
use rand::RngCore;
use tracing::trace;

/// Draws `ceil(bit_len / 8)` random bytes holding a big-endian value of at
/// most `bit_len` bits.
///
/// With `exact` set, the top significant bit is forced on so the value has
/// exactly `bit_len` bits.
pub fn bits<R: RngCore + ?Sized>(bit_len: u64, exact: bool, rng: &mut R) -> Vec<u8> {
    let mut bytes = vec![0u8; ((bit_len + 7) >> 3) as usize];
    if bytes.is_empty() {
        return bytes;
    }
    rng.fill_bytes(&mut bytes);

    let high_bits = (bit_len & 7) as u32;
    if high_bits != 0 {
        bytes[0] &= !(0xffu8 << high_bits);
    }

    if exact {
        if high_bits != 0 {
            bytes[0] |= 1 << (high_bits - 1);
        } else {
            bytes[0] |= 0x80;
        }
    }

    bytes
}

/// Picks a uniform integer strictly between `0` and `modulus`.
///
/// Candidates of the modulus' bit length are drawn until one lands in range;
/// zero is rejected along with out-of-range values. `modulus` must be at
/// least 2.
pub fn int<R: RngCore + ?Sized>(modulus: &BigUint, rng: &mut R) -> BigUint {
    let bit_len = modulus.bits();
    loop {
        let candidate = BigUint::from_bytes_be(&bits(bit_len, false, rng));
        if !candidate.is_zero() && &candidate < modulus {
            return candidate;
        }
        trace!(bit_len, "random integer out of range, retrying");
    }
}

//! Constants used by the Schnorr signature scheme.

/// Size in bytes of the SHA-512 digest fed to the challenge derivation.
///
/// The digest is wider than any supported scalar field, so the challenge is
/// obtained by reducing it modulo the group order.
pub const HASH_SIZE: usize = 64;

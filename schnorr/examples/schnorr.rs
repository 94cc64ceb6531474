//! Signs and verifies a message on every built-in group.
//!
//! Run with `RUST_LOG=debug` to see group construction and rejected
//! signatures.

use curve::weierstrass::params;
use curve::{Ed25519, Group, Point, Weierstrass};
use rand::SeedableRng;
use rand::rngs::StdRng;
use schnorr::{KeyPair, Signature};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn run<G: Group>(group: G, rng: &mut StdRng) -> Result<(), schnorr::SchnorrError> {
    let keys = KeyPair::generate_with_rng(group, rng);
    let msg = b"hello schnorr";

    let sig = keys.sign_with_rng(msg, rng);
    let decoded = Signature::from_bytes(keys.group(), &sig)?;
    info!(
        group = keys.group().name(),
        public = %keys.public(),
        commitment = %decoded.r,
        len = sig.len(),
        "signed message"
    );

    assert!(keys.verify(msg, &sig));
    assert!(!keys.verify(b"hello schnorr!", &sig));
    assert!(!keys.public().is_null());
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut rng = StdRng::seed_from_u64(42);
    run(Ed25519::new(), &mut rng)?;
    for name in ["P-224", "P-256", "P-384", "P-521"] {
        let config = params::by_name(name).ok_or("unknown curve")?;
        run(Weierstrass::new(&config)?, &mut rng)?;
    }
    Ok(())
}

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use curve::weierstrass::params;
use curve::{Ed25519, Group, Scalar, Weierstrass};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn random_pair<G: Group>(group: &G, rng: &mut StdRng) -> (G::Scalar, G::Scalar) {
    let mut a = group.scalar();
    a.pick(rng);
    let mut b = group.scalar();
    b.pick(rng);
    (a, b)
}

fn bench_scalar_ops<G: Group>(c: &mut Criterion, group: &G) {
    let mut rng = StdRng::seed_from_u64(42);
    let (a, b) = random_pair(group, &mut rng);
    let name = group.name().to_lowercase();

    c.bench_function(&format!("{name}_scalar_mul"), |bencher| {
        bencher.iter(|| black_box(black_box(&a).mul(black_box(&b))))
    });
    c.bench_function(&format!("{name}_scalar_inv"), |bencher| {
        bencher.iter(|| black_box(black_box(&a).inv()))
    });
    c.bench_function(&format!("{name}_scalar_pick"), |bencher| {
        let mut s = group.scalar();
        bencher.iter(|| {
            s.pick(&mut rng);
        })
    });
}

fn bench_ed25519(c: &mut Criterion) {
    bench_scalar_ops(c, &Ed25519::new());
}

fn bench_p256(c: &mut Criterion) {
    let group = Weierstrass::new(&params::p256()).expect("P-256 parameters are valid");
    bench_scalar_ops(c, &group);
}

criterion_group!(benches, bench_ed25519, bench_p256);
criterion_main!(benches);

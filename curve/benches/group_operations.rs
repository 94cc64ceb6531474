use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use curve::weierstrass::params;
use curve::{Ed25519, Group, Point, Scalar, Weierstrass};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_point_add<G: Group>(c: &mut Criterion, group: &G) {
    let mut rng = StdRng::seed_from_u64(42);
    let mut p = group.point();
    p.pick(&mut rng);
    let mut q = group.point();
    q.base();

    c.bench_function(&format!("{}_point_add", group.name()), |bencher| {
        bencher.iter(|| black_box(black_box(&p).add(black_box(&q))))
    });
}

fn bench_scalar_mul<G: Group>(c: &mut Criterion, group: &G) {
    let mut rng = StdRng::seed_from_u64(42);
    let mut k = group.scalar();
    k.pick(&mut rng);
    let mut p = group.point();
    p.pick(&mut rng);

    c.bench_function(&format!("{}_scalar_mul", group.name()), |bencher| {
        bencher.iter(|| black_box(black_box(&p).mul(black_box(&k))))
    });
    c.bench_function(&format!("{}_scalar_mul_base", group.name()), |bencher| {
        bencher.iter(|| black_box(group.point().mul_base(black_box(&k))))
    });
}

fn bench_embed<G: Group>(c: &mut Criterion, group: &G) {
    let mut bench_group = c.benchmark_group(format!("{}_embed", group.name()));
    let max = group.point().embed_len();

    for size in [0, max / 2, max] {
        let payload = vec![0xa5u8; size];
        let mut rng = StdRng::seed_from_u64(12345);
        bench_group.bench_with_input(BenchmarkId::from_parameter(size), &size, |bencher, _| {
            let mut p = group.point();
            bencher.iter(|| {
                p.embed(black_box(&payload), &mut rng)
                    .expect("payload fits")
                    .is_null()
            })
        });
    }
    bench_group.finish();
}

fn bench_ed25519(c: &mut Criterion) {
    let group = Ed25519::new();
    bench_point_add(c, &group);
    bench_scalar_mul(c, &group);
    bench_embed(c, &group);
}

fn bench_nist(c: &mut Criterion) {
    for config in [params::p256(), params::p384()] {
        let group = Weierstrass::new(&config).expect("NIST parameters are valid");
        bench_point_add(c, &group);
        bench_scalar_mul(c, &group);
        bench_embed(c, &group);
    }
}

criterion_group!(benches, bench_ed25519, bench_nist);
criterion_main!(benches);

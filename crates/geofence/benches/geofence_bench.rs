//! Criterion benchmarks for fence containment and Haversine distance.
//! Focus sizes: vertices in {4, 16, 64, 256, 1024}.
//! Results land under target/criterion.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use geofence::{calculate_distance, is_within_geo_fence, Coordinate, GeoFence};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Star-shaped ring around a site centre with jittered radii (degrees).
fn random_fence(n: usize, seed: u64) -> GeoFence {
    let mut rng = StdRng::seed_from_u64(seed);
    let centre = Coordinate::new(12.97, 77.59);
    let coordinates = (0..n)
        .map(|i| {
            let theta = i as f64 / n as f64 * std::f64::consts::TAU;
            let r = 0.01 * rng.gen_range(0.6..1.4);
            Coordinate::new(centre.latitude + r * theta.cos(), centre.longitude + r * theta.sin())
        })
        .collect();
    GeoFence::new(true, coordinates)
}

fn random_fix(rng: &mut StdRng) -> Coordinate {
    Coordinate::new(12.97 + rng.gen_range(-0.02..0.02), 77.59 + rng.gen_range(-0.02..0.02))
}

fn bench_fence(c: &mut Criterion) {
    let mut group = c.benchmark_group("geofence");
    for &n in &[4usize, 16, 64, 256, 1024] {
        let fence = random_fence(n, 43);
        group.bench_with_input(BenchmarkId::new("is_within_geo_fence", n), &n, |b, _| {
            let mut rng = StdRng::seed_from_u64(44);
            b.iter_batched(
                || random_fix(&mut rng),
                |fix| black_box(is_within_geo_fence(fix, &fence)),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_distance(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(45);
    c.bench_function("calculate_distance", |b| {
        b.iter_batched(
            || (random_fix(&mut rng), random_fix(&mut rng)),
            |(a, z)| black_box(calculate_distance(a, z)),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_fence, bench_distance);
criterion_main!(benches);

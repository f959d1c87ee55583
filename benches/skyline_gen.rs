//! Criterion benchmarks for skyline generation.
//!
//! Generation runs once at startup, but it sits on the first-frame path, so
//! it should stay comfortably under a frame even at ten times the default
//! building count.
//!
//! Run with: cargo bench --bench skyline_gen

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use cityrise::procgen::skyline::{generate_skyline, SkylineConfig};

fn bench_generate_skyline(c: &mut Criterion) {
    let mut group = c.benchmark_group("skyline_generation");

    for count in [40usize, 400] {
        let config = SkylineConfig {
            count,
            ..Default::default()
        };
        group.bench_with_input(BenchmarkId::from_parameter(count), &config, |b, config| {
            b.iter(|| {
                let mut rng = StdRng::seed_from_u64(black_box(42));
                black_box(generate_skyline(config, &mut rng))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_generate_skyline);
criterion_main!(benches);

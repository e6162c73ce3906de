use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use selectors::selection::{generate, median_of_medians, randomized_select, Distribution};

const SIZES: [usize; 4] = [100, 1_000, 5_000, 20_000];

fn bench_selectors(c: &mut Criterion) {
    let mut input_rng = ChaCha8Rng::seed_from_u64(0x5E1E_C7ED);

    for distribution in Distribution::ALL {
        let mut group = c.benchmark_group(format!("select_median/{}", distribution));

        for &size in &SIZES {
            let data = generate(distribution, size, &mut input_rng);
            let k = size / 2;

            group.bench_with_input(BenchmarkId::new("deterministic", size), &data, |b, data| {
                b.iter(|| median_of_medians(black_box(data), black_box(k)))
            });

            let mut rng = ChaCha8Rng::seed_from_u64(size as u64);
            group.bench_with_input(BenchmarkId::new("randomized", size), &data, |b, data| {
                b.iter(|| randomized_select(black_box(data), black_box(k), &mut rng))
            });
        }

        group.finish();
    }
}

criterion_group!(benches, bench_selectors);
criterion_main!(benches);

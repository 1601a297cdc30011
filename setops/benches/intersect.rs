use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use setops::{intersect, intersect_all, intersect_iter};

const SIZES: [usize; 3] = [1_000, 10_000, 100_000];

fn generate_sorted(rng: &mut StdRng, len: usize, universe: u32) -> Vec<u32> {
    let mut values: Vec<u32> = (0..len).map(|_| rng.gen_range(0..universe)).collect();
    values.sort_unstable();
    values
}

pub fn benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0x5e70_5e75);
    let mut group = c.benchmark_group("intersect");
    for len in SIZES {
        // Universe twice the length gives roughly a third of values in common.
        let universe = (len * 2) as u32;
        let a = generate_sorted(&mut rng, len, universe);
        let b = generate_sorted(&mut rng, len, universe);
        let third = generate_sorted(&mut rng, len / 4, universe);

        group.bench_with_input(BenchmarkId::new("slices", len), &len, |bencher, _| {
            bencher.iter(|| intersect(black_box(&a), black_box(&b)))
        });
        group.bench_with_input(BenchmarkId::new("iter", len), &len, |bencher, _| {
            bencher.iter(|| intersect_iter(black_box(&a), black_box(&b)).count())
        });
        group.bench_with_input(BenchmarkId::new("all_three", len), &len, |bencher, _| {
            bencher.iter(|| intersect_all(black_box(&[&a[..], &b[..], &third[..]])))
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark);
criterion_main!(benches);

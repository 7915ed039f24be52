use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::Rng;
use sparse_vector::SparseVector;

// returns n random (index, value) entries with indices below len
fn build_entries(n: usize, len: u32) -> Vec<(u32, f64)> {
    let mut rng = rand::thread_rng();
    (0..n).map(|_| (rng.gen_range(0..len), rng.gen())).collect()
}

#[inline]
fn build_sparse_vector(entries: &[(u32, f64)], len: u32) -> SparseVector<f64> {
    let mut sv = SparseVector::new(len as usize);
    for (index, value) in entries.iter().copied() {
        sv.emplace_back(index, value).unwrap();
    }
    sv
}

fn bench_sparse_vector(c: &mut Criterion) {
    let weights = vec![
        1_000,     //
        10_000,    //
        100_000,   //
        1_000_000, //
    ];
    let len = 1 << 24;

    let mut group = c.benchmark_group("SparseVector");
    for n in weights.iter().copied() {
        let entries = build_entries(n, len);
        group.bench_function(BenchmarkId::new("EmplaceBack", n), |b| {
            b.iter(|| build_sparse_vector(&entries, len).weight())
        });
        group.bench_function(BenchmarkId::new("Sort", n), |b| {
            b.iter_batched(
                || build_sparse_vector(&entries, len),
                |mut sv| {
                    sv.sort();
                    sv
                },
                BatchSize::LargeInput,
            )
        });
        group.bench_function(BenchmarkId::new("Iter", n), |b| {
            let sv = build_sparse_vector(&entries, len);
            b.iter(|| sv.iter().map(|(_, value)| value).sum::<f64>())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sparse_vector);
criterion_main!(benches);

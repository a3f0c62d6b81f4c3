use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rowmul::{Matrix, multiply, multiply_naive};

fn fixture(size: usize, modulus: i64) -> Matrix<i64> {
    let data = (0..size * size).map(|i| i as i64 % modulus).collect();
    Matrix::from_vec(size, size, data).unwrap()
}

fn bench_worker_counts(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiply");

    for size in [64, 128, 256] {
        let a = fixture(size, 17);
        let b = fixture(size, 13);

        group.bench_with_input(BenchmarkId::new("naive", size), &size, |bench, _| {
            bench.iter(|| multiply_naive(black_box(&a), black_box(&b)).unwrap())
        });

        for workers in [1, 2, 4, 8] {
            group.bench_with_input(
                BenchmarkId::new(format!("threads_{}", workers), size),
                &size,
                |bench, _| bench.iter(|| multiply(black_box(&a), black_box(&b), workers).unwrap()),
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_worker_counts);
criterion_main!(benches);

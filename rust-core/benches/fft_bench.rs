use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use vibration_fft::{transform, Complex64, FftEngine};

fn make_signal(n: usize) -> Vec<Complex64> {
    (0..n)
        .map(|i| Complex64::new((i as f64 * 0.05).sin(), 0.0))
        .collect()
}

fn bench_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform");
    for &n in &[64, 1024, 16384] {
        let signal = make_signal(n);
        group.bench_with_input(BenchmarkId::new("sequential", n), &signal, |b, s| {
            b.iter(|| {
                let mut buffer = s.clone();
                transform(black_box(&mut buffer)).unwrap();
                buffer
            });
        });

        let engine = FftEngine::new(n).unwrap().with_parallel_cutoff(1024);
        group.bench_with_input(BenchmarkId::new("parallel", n), &signal, |b, s| {
            b.iter(|| {
                let mut buffer = s.clone();
                engine.process(black_box(&mut buffer)).unwrap();
                buffer
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_transform);
criterion_main!(benches);

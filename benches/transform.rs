use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use vardct::{Dct, Resampler, TransformSize};

fn bench_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("dct");
    for size in TransformSize::ALL.into_iter().filter(|s| s.len() >= 8) {
        let dct = Dct::with_size(size);
        let samples: Vec<f64> = (0..size.len()).map(|i| (i as f64 * 0.37).sin() * 128.0).collect();

        group.bench_with_input(BenchmarkId::new("forward", size.len()), &samples, |b, x| {
            let mut buf = x.clone();
            b.iter(|| {
                buf.copy_from_slice(x);
                dct.forward_in_place(black_box(&mut buf)).unwrap();
            })
        });
        group.bench_with_input(BenchmarkId::new("inverse", size.len()), &samples, |b, x| {
            let mut buf = x.clone();
            b.iter(|| {
                buf.copy_from_slice(x);
                dct.inverse_in_place(black_box(&mut buf)).unwrap();
            })
        });
    }
    group.finish();
}

fn bench_resample(c: &mut Criterion) {
    let mut group = c.benchmark_group("resample");
    for (from, to) in [(256, 32), (256, 16), (32, 256), (256, 1)] {
        let resampler = Resampler::new(from, to).unwrap();
        let coeffs = vec![1.0; from];
        let mut out = vec![0.0; to];
        group.bench_function(format!("{from}->{to}"), |b| {
            b.iter(|| resampler.apply_into(black_box(&coeffs), &mut out).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_transform, bench_resample);
criterion_main!(benches);

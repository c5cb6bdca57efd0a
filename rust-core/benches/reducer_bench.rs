//! Spectrum reduction benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use frequency_data::{ReducerConfig, SpectrumReducer};

fn bench_reduce(c: &mut Criterion) {
    // 30 seconds of a 440 Hz tone at 44.1 kHz
    let samples: Vec<f64> = (0..44100 * 30)
        .map(|i| (i as f64 * 440.0 * 2.0 * std::f64::consts::PI / 44100.0).sin() * 16000.0)
        .collect();

    let reducer = SpectrumReducer::new(&ReducerConfig::default()).unwrap();
    c.bench_function("reduce_30s_default", |b| {
        b.iter(|| reducer.reduce(black_box(&samples)).unwrap());
    });

    let mut single = SpectrumReducer::new(&ReducerConfig::default()).unwrap();
    let window = &samples[..1024];
    c.bench_function("reduce_window_1024", |b| {
        b.iter(|| single.reduce_window(black_box(window)).unwrap());
    });
}

criterion_group!(benches, bench_reduce);
criterion_main!(benches);

use clock_interval::{format, try_parse, ParseStrategy, TimeFormat};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

// Use the dev-dependency crate for helpers
use test_helpers::{ms, ROUND_TRIP_LIMIT_MS};

const SAMPLE_SIZE: usize = 1_000;

// Helper to create reproducible millisecond-exact inputs
fn sample_seconds(seed: u64) -> Vec<f64> {
    let mut rng = fastrand::Rng::with_seed(seed);
    (0..SAMPLE_SIZE)
        .map(|_| {
            let secs = ms(rng.u64(0..ROUND_TRIP_LIMIT_MS));
            if rng.bool() {
                -secs
            } else {
                secs
            }
        })
        .collect()
}

fn bench_format(c: &mut Criterion) {
    let inputs = sample_seconds(0x5eed);
    let mut group = c.benchmark_group("format");
    group.throughput(Throughput::Elements(inputs.len() as u64));

    for fmt in TimeFormat::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(fmt), &inputs, |b, inputs| {
            b.iter(|| {
                for &secs in inputs {
                    black_box(format(black_box(secs), fmt));
                }
            })
        });
    }
    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let texts: Vec<String> = sample_seconds(0xc10c)
        .into_iter()
        .map(|secs| format(secs, TimeFormat::HourMinSecMs))
        .collect();
    let strict = ParseStrategy::strict();

    let mut group = c.benchmark_group("parse");
    group.throughput(Throughput::Elements(texts.len() as u64));

    group.bench_function("permissive", |b| {
        b.iter(|| {
            for text in &texts {
                let _ = black_box(try_parse(black_box(text)));
            }
        })
    });
    group.bench_function("strict", |b| {
        b.iter(|| {
            for text in &texts {
                let _ = black_box(strict.parse(black_box(text)));
            }
        })
    });
    group.finish();
}

criterion_group!(benches, bench_format, bench_parse);
criterion_main!(benches);

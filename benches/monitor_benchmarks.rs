use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use tremor_core::monitor::history::AmplitudeHistory;
use tremor_core::monitor::{classify, StatusBands};

fn benchmark_classifier(c: &mut Criterion) {
    let mut group = c.benchmark_group("classifier");
    group.throughput(Throughput::Elements(1000));

    group.bench_function("classify_sweep", |b| {
        b.iter(|| {
            for i in 0..1000 {
                let amplitude = 30.0 + (i as f32) * 0.07;
                black_box(classify(black_box(amplitude)));
            }
        });
    });

    group.bench_function("classify_custom_bands", |b| {
        let bands = StatusBands {
            mild_floor: 35.0,
            severe_floor: 75.0,
        };
        b.iter(|| {
            for i in 0..1000 {
                let amplitude = 30.0 + (i as f32) * 0.07;
                black_box(bands.classify(black_box(amplitude)));
            }
        });
    });

    group.finish();
}

fn benchmark_history(c: &mut Criterion) {
    let mut group = c.benchmark_group("history");
    group.throughput(Throughput::Elements(1000));

    group.bench_function("push_with_eviction", |b| {
        let mut history = AmplitudeHistory::new(20);
        b.iter(|| {
            for i in 0..1000 {
                history.push(black_box(30.0 + (i % 70) as f32));
            }
        });
    });

    group.bench_function("snapshot_values", |b| {
        let mut history = AmplitudeHistory::new(20);
        for i in 0..20 {
            history.push(30.0 + i as f32);
        }
        b.iter(|| black_box(history.values()));
    });

    group.finish();
}

criterion_group!(benches, benchmark_classifier, benchmark_history);
criterion_main!(benches);

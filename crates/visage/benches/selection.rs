//! Benchmarks for portrait selection

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use visage::{Config, Library, RandomMode};

fn bench_default_library(c: &mut Criterion) {
    visage::library().expect("bundled portraits should load");

    let mut group = c.benchmark_group("default_library");
    group.bench_function("random_portrait", |b| {
        b.iter(|| black_box(visage::random_portrait()))
    });
    group.bench_function("random_man", |b| b.iter(|| black_box(visage::random_man())));
    group.bench_function("random_woman", |b| {
        b.iter(|| black_box(visage::random_woman()))
    });
    group.finish();
}

fn bench_random_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_mode");

    for (name, mode) in [
        ("shared_entropy", RandomMode::Entropy),
        ("shared_seeded", RandomMode::Seeded(1)),
        ("thread_local", RandomMode::ThreadLocal),
    ] {
        let library = Library::bundled(&Config::new().random(mode)).unwrap();
        group.bench_function(name, |b| b.iter(|| black_box(library.random_portrait())));
    }

    group.finish();
}

fn bench_load(c: &mut Criterion) {
    c.bench_function("load_bundled", |b| {
        b.iter(|| black_box(Library::bundled(&Config::default())))
    });
}

criterion_group!(benches, bench_default_library, bench_random_modes, bench_load);
criterion_main!(benches);

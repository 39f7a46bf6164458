use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use katgen_api::{Emitter, VectorSource};
use katgen_emit::StaticDataEmitter;
use katgen_parse::SuiteExtractor;
use katgen_tests::fixtures;

fn bench_suite_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("suite-extraction");
    let extractor = SuiteExtractor::default();

    for blocks in [1usize, 16, 256].iter() {
        let corpus = fixtures::suite_corpus(*blocks);
        group.bench_with_input(BenchmarkId::new("blocks", blocks), blocks, |b, _| {
            b.iter(|| {
                let _ = extractor.extract(&corpus);
            });
        });
    }

    group.finish();
}

fn bench_emission(c: &mut Criterion) {
    let mut group = c.benchmark_group("header-emission");
    let emitter = StaticDataEmitter::chacha20();

    for records in [1usize, 16, 256].iter() {
        let set: Vec<_> = (0..*records)
            .map(|i| fixtures::chacha20_record(&format!("Cipher Test Vector #{i}"), i as u32))
            .collect();
        group.bench_with_input(BenchmarkId::new("records", records), records, |b, _| {
            b.iter(|| {
                let _ = emitter.emit(&set);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_suite_extraction, bench_emission);
criterion_main!(benches);

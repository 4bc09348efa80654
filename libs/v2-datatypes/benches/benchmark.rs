//! Criterion benchmarks for the temporal and address parsers

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::time::Duration;
use v2fhir_datatypes::{parse_instant, parse_time, DatatypeConverter, FhirType, V2Tag, V2Type};

fn custom_criterion() -> Criterion {
    Criterion::default()
        .sample_size(20)
        .warm_up_time(Duration::from_millis(100))
        .measurement_time(Duration::from_secs(1))
        .nresamples(1000)
        .noise_threshold(0.05)
}

fn st(value: &str) -> V2Type {
    V2Type::primitive(V2Tag::ST, value)
}

fn bench_timestamps(c: &mut Criterion) {
    c.bench_function("timestamp_compact", |b| {
        b.iter(|| parse_instant(black_box("20200301123045.1234-0500")))
    });

    c.bench_function("timestamp_iso_fallback", |b| {
        b.iter(|| parse_instant(black_box("2020-03-01T12:30:45.123Z")))
    });

    c.bench_function("time_only", |b| {
        b.iter(|| parse_time(black_box("123045.12-0500")))
    });
}

fn bench_addresses(c: &mut Criterion) {
    let converter = DatatypeConverter::default();
    let structured = V2Type::composite(
        V2Tag::XAD,
        ["123 Main St", "Apt 4", "Springfield", "IL", "62704", "USA", "H"].map(st),
    );
    let free_text = st("200 Oak Ave., Suite 200, Albany, New York 12207, USA");
    let multi_line = st("100 Main St\nSpringfield, IL 62704");

    c.bench_function("address_structured", |b| {
        b.iter(|| converter.convert(FhirType::Address, black_box(&structured)))
    });

    c.bench_function("address_free_text", |b| {
        b.iter(|| converter.convert(FhirType::Address, black_box(&free_text)))
    });

    c.bench_function("address_multi_line", |b| {
        b.iter(|| converter.convert(FhirType::Address, black_box(&multi_line)))
    });
}

criterion_group! {
    name = benches;
    config = custom_criterion();
    targets = bench_timestamps, bench_addresses
}
criterion_main!(benches);

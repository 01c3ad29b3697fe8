use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use iso8601_engine::{canonical, parse};
use std::hint::black_box;

const INPUTS: &[(&str, &str)] = &[
    ("century", "20"),
    ("year", "2021"),
    ("calendar", "2021-06-15"),
    ("calendar-basic", "20210615"),
    ("ordinal", "2021-166"),
    ("week-day", "2021-W24-2"),
    ("sub-year", "2021-34"),
    ("time", "T10:30:15.25+05:30"),
    ("date-time", "2021-06-15T10:30:15.1234567Z"),
    ("rejected", "200912"),
];

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for &(name, spec) in INPUTS {
        group.throughput(Throughput::Bytes(spec.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), spec, |b, spec| {
            b.iter(|| parse(black_box(spec)))
        });
    }
    group.finish();
}

fn bench_canonical(c: &mut Criterion) {
    let mut group = c.benchmark_group("canonical");
    for &(name, spec) in INPUTS {
        // The rejected input has nothing to format
        let Ok(value) = parse(spec) else { continue };
        group.bench_with_input(BenchmarkId::from_parameter(name), &value, |b, value| {
            b.iter(|| canonical(black_box(value)))
        });
    }
    group.finish();
}

fn bench_compare(c: &mut Criterion) {
    let year = parse("2021").unwrap();
    let instant = parse("2021-06-15T10:30Z").unwrap();
    let quarter = parse("2021-34").unwrap();
    c.bench_function("contains/date-time", |b| {
        b.iter(|| black_box(&year).contains(black_box(&instant)))
    });
    c.bench_function("overlaps/date", |b| {
        b.iter(|| black_box(&year).overlaps(black_box(&quarter)))
    });
}

criterion_group!(benches, bench_parse, bench_canonical, bench_compare);
criterion_main!(benches);

#![expect(clippy::panic)]

use codspeed_criterion_compat::{Criterion, Throughput, criterion_group, criterion_main};
use oxsdatetime::{TemporalSubtype, TemporalValue, compare, parse, serialize};
use std::hint::black_box;

const LITERALS: &[(TemporalSubtype, &str)] = &[
    (TemporalSubtype::DateTime, "2024-01-01T00:30:00+01:00"),
    (TemporalSubtype::DateTime, "1999-12-31T24:00:00.123456789Z"),
    (TemporalSubtype::DateTime, "-0044-03-15T12:00:00"),
    (TemporalSubtype::Time, "23:30:00-05:30"),
    (TemporalSubtype::Date, "2024-02-29"),
    (TemporalSubtype::GYearMonth, "2000-01-14:00"),
    (TemporalSubtype::GYear, "12345"),
    (TemporalSubtype::GMonthDay, "--12-25Z"),
    (TemporalSubtype::GMonth, "--05"),
    (TemporalSubtype::GDay, "---31+13:00"),
];

fn parse_values() -> Vec<TemporalValue> {
    LITERALS
        .iter()
        .map(|(subtype, literal)| {
            parse(literal, *subtype).unwrap_or_else(|e| panic!("{literal}: {e}"))
        })
        .collect()
}

fn temporal_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    group.throughput(Throughput::Elements(LITERALS.len() as u64));
    group.bench_function("parse temporal literals", |b| {
        b.iter(|| {
            for (subtype, literal) in LITERALS {
                black_box(parse(literal, *subtype).is_ok());
            }
        })
    });
    group.bench_function("parse invalid temporal literals", |b| {
        b.iter(|| {
            for literal in ["2023-02-29T00:00:00", "2024-01-01T12:30", "2024-01-01T25:00:00"] {
                black_box(parse(literal, TemporalSubtype::DateTime).is_err());
            }
        })
    });
}

fn temporal_serialize(c: &mut Criterion) {
    let values = parse_values();
    c.bench_function("serialize temporal values", |b| {
        b.iter(|| {
            for value in &values {
                black_box(serialize(value));
            }
        })
    });
}

fn temporal_compare(c: &mut Criterion) {
    let values = parse_values();
    c.bench_function("compare temporal values", |b| {
        b.iter(|| {
            for left in &values {
                for right in &values {
                    black_box(compare(left, right));
                }
            }
        })
    });
}

criterion_group!(
    temporal,
    temporal_parse,
    temporal_serialize,
    temporal_compare
);
criterion_main!(temporal);

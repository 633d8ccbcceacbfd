use criterion::{black_box, criterion_group, criterion_main, Criterion};
use cron_rrule::{CronExpression, Options};

// ---------------------------------------------------------------------------
// Parse benchmarks
// ---------------------------------------------------------------------------

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    group.bench_function("simple", |b| {
        b.iter(|| CronExpression::parse(black_box("0 12 * * 1,3,5")).unwrap());
    });

    group.bench_function("six_fields", |b| {
        b.iter(|| CronExpression::parse(black_box("0,15,30,45 9,12,17 1,15 1,4,7,10 * ?")).unwrap());
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// Translate benchmarks
// ---------------------------------------------------------------------------

fn bench_translate(c: &mut Criterion) {
    let mut group = c.benchmark_group("translate");
    let strict = Options::default();
    let lenient = Options::lenient();

    group.bench_function("weekly", |b| {
        b.iter(|| cron_rrule::translate_with(black_box("0 12 * * 1,3,5"), &strict).unwrap());
    });

    group.bench_function("minute_step", |b| {
        b.iter(|| cron_rrule::translate_with(black_box("*/1 * * * *"), &strict).unwrap());
    });

    group.bench_function("lenient", |b| {
        b.iter(|| cron_rrule::translate_with(black_box("0 9 * * 1,7"), &lenient).unwrap());
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// Display benchmark
// ---------------------------------------------------------------------------

fn bench_display(c: &mut Criterion) {
    let mut group = c.benchmark_group("display");

    let rule = cron_rrule::translate("0 9 25 12 ?").unwrap();

    group.bench_function("to_string", |b| {
        b.iter(|| black_box(&rule).to_string());
    });

    group.finish();
}

criterion_group!(benches, bench_parse, bench_translate, bench_display);
criterion_main!(benches);

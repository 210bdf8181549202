use criterion::{Criterion, criterion_group, criterion_main};
use logcollector::fmt::{format_record, render};
use std::hint::black_box;

fn bench_format_record(c: &mut Criterion) {
    let mut group = c.benchmark_group("fmt::format_record");

    group.bench_function("short", |b| {
        b.iter(|| {
            format_record(
                black_box("2026-08-28 10:15:00"),
                black_box(4),
                black_box("Net::Tick"),
                black_box(42),
                black_box("socket ready"),
            )
        });
    });

    group.bench_function("long_message", |b| {
        b.iter(|| {
            format_record(
                black_box("2026-08-28 10:15:00"),
                black_box(2),
                black_box("UNetDriver::TickDispatch"),
                black_box(1031),
                black_box(
                    "Connection to 10.32.1.7:7777 lost after 3 retries; \
                     last ack 2026-08-28 10:14:51, pending reliable bunches 14",
                ),
            )
        });
    });

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    // Includes the Local::now() stamp, the cost a fallback record actually pays
    c.bench_function("fmt::render", |b| {
        b.iter(|| render(black_box(5), black_box("Game::Start"), black_box(7), black_box("hello")));
    });
}

criterion_group!(benches, bench_format_record, bench_render);
criterion_main!(benches);

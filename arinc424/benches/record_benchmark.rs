use std::fs;
use std::hint::black_box;

use arinc424::records::{self, Lines, PROCEDURE_LEG};
use criterion::{criterion_group, criterion_main, Criterion, Throughput};

const SID: &str = "SUSAP KJFKK6DDEEZZ55RW04L 010         0  EY    VA                     0440        + 00500     18000                 0      123451912";
const RUNWAY: &str = "SUSAP KJFKK6GRW04L                                                                                                         305541709";

/// Benchmark classifying and decoding a single line
fn bench_records(c: &mut Criterion) {
    c.bench_function("classify", |b| {
        b.iter(|| records::classify(black_box(SID.as_bytes())))
    });

    c.bench_function("classify rejected", |b| {
        b.iter(|| records::classify(black_box(RUNWAY.as_bytes())))
    });

    c.bench_function("procedure leg", |b| {
        b.iter(|| arinc424::decode(black_box(SID), &PROCEDURE_LEG))
    });

    c.bench_function("procedure leg to csv", |b| {
        b.iter(|| arinc424::decode(black_box(SID), &PROCEDURE_LEG).to_csv_row())
    });
}

/// Benchmark decoding the 50MB FAA file
fn bench_faa_cifp(c: &mut Criterion) {
    // Load file once
    let data = fs::read("FAACIFP18").expect("FAACIFP18 should be readable");
    let mut group = c.benchmark_group("FAA CIFP");

    // Tell Criterion the throughput for MB/s measurement
    group.throughput(Throughput::Bytes(data.len() as u64));

    // Benchmark: Just classify the lines (baseline)
    group.bench_function("baseline", |b| {
        b.iter(|| {
            let count = Lines::new(&data).count();
            black_box(count)
        })
    });

    // Benchmark: Decode all procedure legs
    group.bench_function("procedure legs", |b| {
        b.iter(|| {
            let mut count = 0;
            for (_, bytes) in Lines::new(&data) {
                if arinc424::decode_bytes(bytes, &PROCEDURE_LEG).is_ok() {
                    count += 1;
                }
            }
            black_box(count)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_records, bench_faa_cifp);
criterion_main!(benches);

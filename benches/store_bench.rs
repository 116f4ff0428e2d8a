//! Benchmarks for the appointment store
//!
//! Run with: cargo bench

use careconnect::{Appointment, AppointmentId, AppointmentStatus, AppointmentStore};
use chrono::{Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion, Throughput};

fn create_test_appointments(count: usize) -> Vec<Appointment> {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap();
    (0..count)
        .map(|i| {
            Appointment::new(
                i as i64,
                start + Duration::minutes(30 * i as i64),
                format!("Visit {i}"),
                AppointmentStatus::Scheduled,
            )
        })
        .collect()
}

fn bench_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("load");

    for size in [100, 1000, 10000] {
        let records = create_test_appointments(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("replace_all_{}", size), |b| {
            b.iter_batched(
                || records.clone(),
                |records| AppointmentStore::from_records(black_box(records)),
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_mutations(c: &mut Criterion) {
    let mut group = c.benchmark_group("mutations");

    for size in [100, 1000, 10000] {
        let store = AppointmentStore::from_records(create_test_appointments(size));
        let middle = AppointmentId(size as i64 / 2);
        let replacement = store.get(middle).cloned().unwrap();

        group.bench_function(format!("replace_{}", size), |b| {
            let mut store = store.clone();
            b.iter(|| store.replace(black_box(middle), replacement.clone()).unwrap())
        });

        group.bench_function(format!("remove_{}", size), |b| {
            b.iter_batched(
                || store.clone(),
                |mut store| store.remove(black_box(middle)),
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_load, bench_mutations);
criterion_main!(benches);

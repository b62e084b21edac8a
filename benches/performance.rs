use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use polychrome_core::{
    config::ScheduleConfig,
    ledger::{FieldUpdate, TrackerState},
    projection::series::build_series,
    storage::{JsonFileStore, TrackerStore},
    SummaryService,
};
use tempfile::tempdir;

fn sample_state() -> TrackerState {
    let mut state = TrackerState::default();
    state.apply(FieldUpdate::Polychromes(18_400));
    state.apply(FieldUpdate::EncryptedTapes(14));
    state.apply(FieldUpdate::LimitedPityCount(33));
    state.apply(FieldUpdate::PolychromePass(true));
    state
}

fn bench_series(c: &mut Criterion) {
    c.bench_function("series_365_days", |b| {
        b.iter(|| build_series(black_box(365), true, true))
    });

    let state = sample_state();
    let schedule = ScheduleConfig::default();
    let today = NaiveDate::from_ymd_opt(2025, 4, 22).unwrap();
    c.bench_function("planner_report_294_days", |b| {
        b.iter(|| SummaryService::report(&state, black_box(294), &schedule, today))
    });
}

fn bench_store_io(c: &mut Criterion) {
    let dir = tempdir().expect("tempdir");
    let backend = JsonFileStore::new(Some(dir.path().to_path_buf())).expect("json store");
    let mut store = TrackerStore::open(Box::new(backend));

    c.bench_function("tracker_field_update", |b| {
        let mut value = 0u64;
        b.iter(|| {
            value += 160;
            store
                .update(FieldUpdate::Polychromes(black_box(value)))
                .expect("save tracker record");
        })
    });
}

criterion_group!(benches, bench_series, bench_store_io);
criterion_main!(benches);

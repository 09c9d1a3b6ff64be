//! Performance benchmarks for the OEE engine.
//!
//! The accounting core is invoked by live-dashboard polling endpoints, so it
//! has to stay comfortably sub-millisecond:
//! - Pure accumulate + calculate for one machine: < 10μs mean
//! - Full /report round trip, one machine: < 100μs mean
//! - Full /report round trip, 50-machine plant: < 2ms mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

use oee_engine::api::{AppState, create_router};
use oee_engine::config::{ConfigLoader, ShiftCatalog};
use oee_engine::engine::{accumulate, aggregate, calculate_oee, resolve_shift_window};
use oee_engine::models::{DowntimeEvent, JobRunInterval, ProductionCountSample};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

fn dt(h: u32, m: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, 10)
        .unwrap()
        .and_hms_opt(h, m, 0)
        .unwrap()
}

/// Creates a test state with the standard three-shift catalog.
fn create_test_state() -> AppState {
    AppState::new(ConfigLoader::from_catalog(ShiftCatalog::standard_three_shift()))
}

/// A realistic run: open since shift start, a couple of stoppages, counts
/// reported every half hour.
fn create_job_run() -> JobRunInterval {
    JobRunInterval {
        start: dt(6, 0),
        end: None,
        standard_cycle_seconds: Decimal::new(30, 0),
        target_quantity: 800,
        downtime_events: vec![
            DowntimeEvent {
                start: dt(8, 0),
                end: Some(dt(8, 20)),
                reason_category: Some("Unplanned".to_string()),
            },
            DowntimeEvent {
                start: dt(10, 0),
                end: Some(dt(10, 15)),
                reason_category: Some("Setup".to_string()),
            },
        ],
        production_counts: (0..16)
            .map(|i| ProductionCountSample {
                timestamp: dt(6 + i / 2, (i % 2) * 30),
                good_count: 45,
                reject_count: 2,
            })
            .collect(),
    }
}

/// Creates a /report body covering `machine_count` machines.
fn create_report_body(machine_count: usize) -> String {
    let machines: Vec<serde_json::Value> = (0..machine_count)
        .map(|i| {
            serde_json::json!({
                "id": format!("M-{:02}", i + 1),
                "name": format!("Machine {}", i + 1),
                "job_runs": [
                    {
                        "start": "2026-03-10T06:00:00",
                        "end": null,
                        "standard_cycle_seconds": "30",
                        "target_quantity": 800,
                        "downtime_events": [
                            {
                                "start": "2026-03-10T08:00:00",
                                "end": "2026-03-10T08:20:00",
                                "reason_category": "Unplanned"
                            }
                        ],
                        "production_counts": [
                            {"timestamp": "2026-03-10T09:00:00", "good_count": 240, "reject_count": 8}
                        ]
                    }
                ]
            })
        })
        .collect();

    serde_json::json!({
        "now": "2026-03-10T13:00:00",
        "machines": machines
    })
    .to_string()
}

/// Benchmark: pure accumulate + calculate for one machine.
///
/// Target: < 10μs mean
fn bench_accumulate_and_calculate(c: &mut Criterion) {
    let catalog = ShiftCatalog::standard_three_shift();
    let now = dt(13, 0);
    let window = resolve_shift_window(now, catalog.shifts(), None, None);
    let runs = vec![create_job_run()];

    c.bench_function("accumulate_and_calculate", |b| {
        b.iter(|| {
            let acc = accumulate(black_box(&window), black_box(&runs), black_box(now));
            let totals = aggregate([acc]);
            black_box(calculate_oee(
                window.loading_seconds(),
                totals.unplanned_downtime_seconds,
                totals.total_count,
                totals.good_count,
                totals.avg_standard_cycle_seconds.max(Decimal::ONE),
            ))
        })
    });
}

/// Benchmark: full /report round trip with one machine.
///
/// Target: < 100μs mean
fn bench_report_single_machine(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();
    let router = create_router(state);
    let body = create_report_body(1);

    c.bench_function("report_single_machine", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/report")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

/// Benchmark: full /report round trip at plant scale.
///
/// Target: < 2ms mean for 50 machines
fn bench_report_plant_scale(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();
    let router = create_router(state);

    let mut group = c.benchmark_group("report_plant_scale");
    for machine_count in [10usize, 50] {
        let body = create_report_body(machine_count);
        group.throughput(Throughput::Elements(machine_count as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(machine_count),
            &body,
            |b, body| {
                b.to_async(&rt).iter(|| async {
                    let router = router.clone();
                    let response = router
                        .oneshot(
                            Request::builder()
                                .method("POST")
                                .uri("/report")
                                .header("Content-Type", "application/json")
                                .body(Body::from(body.clone()))
                                .unwrap(),
                        )
                        .await
                        .unwrap();
                    black_box(response)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_accumulate_and_calculate,
    bench_report_single_machine,
    bench_report_plant_scale
);
criterion_main!(benches);

//! Performance benchmarks for the dashboard statistics engine.
//!
//! This benchmark suite covers the engine directly and through the router:
//! - Dashboard aggregates over growing employee lists
//! - Upcoming birthday scan
//! - GET /stats round trip against a seeded in-memory store
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use std::sync::Arc;

use chrono::{Days, NaiveDate};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use hr_dashboard::api::{AppState, create_router};
use hr_dashboard::clock::FixedClock;
use hr_dashboard::models::{Employee, EmploymentStatus};
use hr_dashboard::stats::StatsEngine;
use hr_dashboard::store::{IdScheme, InMemoryEmployeeRepository};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

const DEPARTMENTS: [&str; 5] = [
    "(CYDD) Child and Youth Development Division",
    "(SWD) Social Welfare Division",
    "(AFD) Administrative and Finance Division",
    "(PDD) Planning and Development Division",
    "Records",
];

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
}

/// Builds `count` employees spread across departments, statuses, and
/// birthdays throughout the year.
fn generate_employees(count: usize) -> Vec<Employee> {
    let epoch = NaiveDate::from_ymd_opt(1980, 1, 1).unwrap();

    (0..count)
        .map(|i| {
            let mut employee = Employee::new(
                format!("EMP-{:03}", i + 1),
                format!("Employee {}", i + 1),
                DEPARTMENTS[i % DEPARTMENTS.len()],
            );
            employee.status = Some(EmploymentStatus::ALL[i % EmploymentStatus::ALL.len()]);
            employee.birth_date = epoch.checked_add_days(Days::new((i as u64 * 37) % 9000));
            employee.performance_rating = (i % 7 != 0).then(|| (i % 50) as f64 / 10.0);
            employee.training_hours = Some((i % 40) as u32);
            employee.refresh_age(today());
            employee
        })
        .collect()
}

/// Benchmark: Full dashboard aggregate at several list sizes.
fn bench_dashboard(c: &mut Criterion) {
    let engine = StatsEngine::default();
    let mut group = c.benchmark_group("dashboard");

    for count in [10, 100, 1000, 10_000].iter() {
        let employees = generate_employees(*count);

        group.throughput(Throughput::Elements(*count as u64));
        group.bench_with_input(BenchmarkId::new("employees", count), count, |b, _| {
            b.iter(|| black_box(engine.dashboard(black_box(&employees))))
        });
    }

    group.finish();
}

/// Benchmark: Upcoming birthdays at several list sizes.
fn bench_upcoming_birthdays(c: &mut Criterion) {
    let engine = StatsEngine::default();
    let mut group = c.benchmark_group("upcoming_birthdays");

    for count in [100, 1000, 10_000].iter() {
        let employees = generate_employees(*count);

        group.throughput(Throughput::Elements(*count as u64));
        group.bench_with_input(BenchmarkId::new("employees", count), count, |b, _| {
            b.iter(|| black_box(engine.upcoming_birthdays(black_box(&employees), today())))
        });
    }

    group.finish();
}

/// Benchmark: GET /stats through the router with 1000 stored employees.
fn bench_stats_endpoint(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let repository =
        InMemoryEmployeeRepository::with_employees(IdScheme::default(), generate_employees(1000))
            .unwrap();
    let state = AppState::new(Arc::new(repository), StatsEngine::default())
        .with_clock(Arc::new(FixedClock(today())));
    let router = create_router(state);

    let mut group = c.benchmark_group("api");
    group.sample_size(50);

    group.bench_function("stats_1000", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("GET")
                        .uri("/stats")
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_dashboard,
    bench_upcoming_birthdays,
    bench_stats_endpoint,
);
criterion_main!(benches);

//! Performance benchmarks for the rodeo scheduler
//!
//! These benchmarks measure single scheduling attempts across roster shapes
//! and the parallel race driver end to end.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rodeoforge::prelude::*;
use tokio::runtime::Runtime;

fn roster(males: usize, females: usize) -> Vec<Team> {
    let mut teams = Vec::new();
    for i in 0..males {
        teams.push(Team::new(
            Person::new(format!("M{i} first")),
            Person::new(format!("M{i} second")),
            Gender::Male,
        ));
    }
    for i in 0..females {
        teams.push(Team::new(
            Person::new(format!("F{i} first")),
            Person::new(format!("F{i} second")),
            Gender::Female,
        ));
    }
    teams
}

/// Benchmark single deterministic scheduling attempts
fn bench_make_rodeo(c: &mut Criterion) {
    let mut group = c.benchmark_group("make_rodeo");

    let cases = [
        ("6_teams_3_rounds", roster(6, 0), SchedulerConfig::new(3, 3)),
        ("8_team_round_robin", roster(8, 0), SchedulerConfig::new(8, 5)),
        ("12_teams_split", roster(6, 6), SchedulerConfig::new(4, 6)),
    ];

    for (name, teams, config) in cases {
        group.bench_function(BenchmarkId::from_parameter(name), |b| {
            b.iter(|| {
                let tournament = make_rodeo(black_box(&teams), Utc::now(), config).unwrap();
                black_box(tournament)
            })
        });
    }

    group.finish();
}

/// Benchmark the parallel race driver
fn bench_race_driver(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let teams = roster(8, 0);
    let scheduler = RodeoScheduler::new(SchedulerConfig::new(8, 5));

    c.bench_function("race_4_attempts_8_teams", |b| {
        b.iter(|| {
            rt.block_on(async {
                let tournament = scheduler
                    .first_valid_tournament(Duration::from_secs(5), 4, &teams, Utc::now())
                    .await
                    .unwrap();
                black_box(tournament)
            })
        })
    });
}

criterion_group!(benches, bench_make_rodeo, bench_race_driver);
criterion_main!(benches);

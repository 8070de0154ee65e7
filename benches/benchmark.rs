use criterion::{black_box, criterion_group, criterion_main, Criterion};
use league_core::config::StandingsConfig;
use league_core::fixture::Fixture;
use league_core::match_result::{InningsEntry, MatchResult, ScoreCard};
use league_core::overs::{to_overs_decimal, OversValue};
use league_core::standings::{calculate_stage_tables, calculate_standings};
use league_core::team::Team;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Double round robin between `team_count` teams split into two groups,
/// with every fixture completed.
fn create_season(team_count: usize) -> (Vec<Team>, Vec<Fixture>, Vec<MatchResult>) {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let teams: Vec<Team> = (0..team_count)
        .map(|i| Team::new(format!("T{}", i), format!("Team {}", i)))
        .collect();

    let mut fixtures = Vec::new();
    let mut results = Vec::new();
    for home in 0..team_count {
        for away in 0..team_count {
            if home == away {
                continue;
            }
            let id = format!("f{}", fixtures.len());
            let stage = if home % 2 == away % 2 { "Group A" } else { "Group B" };
            let fixture = Fixture::new(id.clone(), teams[home].id.clone(), teams[away].id.clone());
            fixtures.push(fixture.with_stage(stage));

            let runs_a = rng.gen_range(90..220);
            let runs_b = rng.gen_range(90..220);
            let overs_b = format!("{}.{}", rng.gen_range(12..20), rng.gen_range(0..6));
            let winner = match runs_a.cmp(&runs_b) {
                std::cmp::Ordering::Greater => Some(teams[home].id.as_str()),
                std::cmp::Ordering::Less => Some(teams[away].id.as_str()),
                std::cmp::Ordering::Equal => None,
            };
            results.push(MatchResult::new(
                id,
                winner,
                ScoreCard::flat(
                    InningsEntry::new(runs_a, 6, "20.0"),
                    InningsEntry::new(runs_b, 8, overs_b),
                ),
            ));
        }
    }

    (teams, fixtures, results)
}

fn bench_to_overs_decimal(c: &mut Criterion) {
    let overs = OversValue::from("19.4");

    c.bench_function("to_overs_decimal", |b| b.iter(|| to_overs_decimal(black_box(Some(&overs)))));
}

fn bench_standings(c: &mut Criterion) {
    let (teams, fixtures, results) = create_season(10);
    let config = StandingsConfig::default();

    c.bench_function("standings_10_teams_double_round_robin", |b| {
        b.iter(|| {
            calculate_standings(
                black_box(&teams),
                black_box(&fixtures),
                black_box(&results),
                &config,
            )
        })
    });
}

fn bench_large_league(c: &mut Criterion) {
    let (teams, fixtures, results) = create_season(64);
    let config = StandingsConfig::default();

    c.bench_function("standings_64_teams", |b| {
        b.iter(|| {
            calculate_standings(
                black_box(&teams),
                black_box(&fixtures),
                black_box(&results),
                &config,
            )
        })
    });

    c.bench_function("stage_tables_64_teams", |b| {
        b.iter(|| {
            calculate_stage_tables(
                black_box(&teams),
                black_box(&fixtures),
                black_box(&results),
                &config,
            )
        })
    });
}

criterion_group!(benches, bench_to_overs_decimal, bench_standings, bench_large_league);
criterion_main!(benches);

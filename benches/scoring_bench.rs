//! Criterion benchmarks for the scoring pipeline.
//!
//! Uses synthetic evaluations (random notes, penalties and timings) to
//! measure per-judge, session and final-result computation.

use combat_score::catalog::{Difficulty, RuleCatalog, ARTISTIC_CRITERIA};
use combat_score::engine::{InMemoryEvaluationStore, ScoringEngine};
use combat_score::judge::{JudgeCalculator, JudgeEvaluation, Phrase, ScoringConfig};
use combat_score::ledger::InMemoryLedger;
use combat_score::session::SessionAggregator;
use combat_score::types::{JudgeId, PerformanceId, SessionType};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// ===========================================================================
// Synthetic evaluations
// ===========================================================================

const ACTION_PENALTIES: [&str; 3] = ["g1_mal_maitrisee", "g1_sortie", "g2_dangereuse"];

fn random_evaluation<R: Rng>(
    rng: &mut R,
    performance: PerformanceId,
    judge: JudgeId,
    session: SessionType,
    phrases: usize,
) -> JudgeEvaluation {
    let mut evaluation = JudgeEvaluation::new(performance, judge, session, "T1_DUEL")
        .with_durations(
            Some(rng.random_range(150..260)),
            Some(rng.random_range(60..140)),
        )
        .with_global_penalty("g1_retard", rng.random_range(0..2))
        .with_global_penalty("g2_reglement", rng.random_range(0..2));

    for _ in 0..phrases {
        let difficulty = Difficulty::ALL[rng.random_range(0..Difficulty::ALL.len())];
        let mut phrase = Phrase::new(difficulty, rng.random_range(0.0..=5.0));
        if rng.random_bool(0.1) {
            let id = ACTION_PENALTIES[rng.random_range(0..ACTION_PENALTIES.len())];
            phrase.set_action_penalty(id, 1);
        }
        evaluation = evaluation.with_phrase(phrase);
    }

    if session == SessionType::Free {
        for criterion in ARTISTIC_CRITERIA {
            evaluation = evaluation.with_artistic_score(criterion.id, rng.random_range(0.0..=5.0));
        }
    }
    evaluation
}

fn random_panel(
    seed: u64,
    performance: PerformanceId,
    judges: u64,
    phrases: usize,
) -> Vec<JudgeEvaluation> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut evaluations = Vec::new();
    for session in SessionType::ALL {
        for judge in 1..=judges {
            evaluations.push(random_evaluation(
                &mut rng,
                performance,
                JudgeId(judge),
                session,
                phrases,
            ));
        }
    }
    evaluations
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_per_judge(c: &mut Criterion) {
    let mut group = c.benchmark_group("per_judge");
    let catalog = RuleCatalog::standard();
    let config = ScoringConfig::default();

    for phrases in [10, 40, 160] {
        let mut rng = StdRng::seed_from_u64(42);
        let evaluation =
            random_evaluation(&mut rng, PerformanceId(1), JudgeId(1), SessionType::Free, phrases);
        group.bench_with_input(BenchmarkId::from_parameter(phrases), &evaluation, |b, e| {
            b.iter(|| JudgeCalculator::compute(black_box(e), &catalog, &config))
        });
    }
    group.finish();
}

fn bench_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("session_aggregate");
    let catalog = RuleCatalog::standard();
    let config = ScoringConfig::default();

    for judges in [3, 5, 9] {
        let panel = random_panel(42, PerformanceId(1), judges, 40);
        group.bench_with_input(BenchmarkId::from_parameter(judges), &panel, |b, p| {
            b.iter(|| {
                SessionAggregator::aggregate(
                    PerformanceId(1),
                    SessionType::Technical,
                    black_box(p),
                    &catalog,
                    &config,
                )
            })
        });
    }
    group.finish();
}

fn bench_final_results(c: &mut Criterion) {
    let mut group = c.benchmark_group("final_results");
    group.sample_size(10);

    for performances in [10u64, 50] {
        let engine =
            ScoringEngine::standard(InMemoryEvaluationStore::new(), InMemoryLedger::new())
                .expect("standard engine");
        let ids: Vec<PerformanceId> = (1..=performances).map(PerformanceId).collect();
        for &id in &ids {
            for evaluation in random_panel(id.0, id, 5, 30) {
                engine.source().submit(evaluation).expect("in-memory submit");
            }
        }
        group.bench_with_input(BenchmarkId::from_parameter(performances), &ids, |b, ids| {
            b.iter(|| engine.compute_final_results(black_box(ids)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_per_judge, bench_session, bench_final_results);
criterion_main!(benches);

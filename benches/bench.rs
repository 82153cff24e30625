// Criterion benchmarks for SafeNest Match

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use safenest_match::core::{compatibility_score, is_eligible, MatchEngine};
use safenest_match::models::{
    ChildRecord, ChildStatus, FamilyProfile, IncomeBracket, NeedsSet, PreferenceSet,
    ScoringWeights,
};

fn create_candidate(id: usize) -> ChildRecord {
    let cities = ["Tunis", "Sousse", "Sfax", "Bizerte"];
    let tags = ["medical", "therapy", "disability", "education"];

    ChildRecord {
        id: id.to_string(),
        city: cities[id % cities.len()].to_string(),
        age_min: (id % 12) as u8,
        age_max: (id % 12) as u8 + 4,
        needs: NeedsSet {
            required_supports: tags.iter().take(id % 3).map(|s| s.to_string()).collect(),
        },
        has_siblings: Some(id % 2 == 0),
        status: ChildStatus::Available,
        created_by: None,
        created_at: None,
    }
}

fn create_family() -> FamilyProfile {
    FamilyProfile {
        principal_id: "bench_family".to_string(),
        full_name: "Bench Family".to_string(),
        city: "Tunis".to_string(),
        household_size: 4,
        income_bracket: IncomeBracket::Middle,
        experience: None,
        preferences: Some(PreferenceSet {
            age_min: 2,
            age_max: 14,
            accepts_siblings: true,
            can_relocate: false,
            supports: ["medical".to_string(), "therapy".to_string()]
                .into_iter()
                .collect(),
            availability: None,
        }),
    }
}

fn bench_eligibility(c: &mut Criterion) {
    let family = create_family();
    let candidate = create_candidate(1);

    c.bench_function("is_eligible", |b| {
        b.iter(|| is_eligible(black_box(&candidate), black_box(&family)));
    });
}

fn bench_scoring(c: &mut Criterion) {
    let family = create_family();
    let candidate = create_candidate(1);
    let weights = ScoringWeights::default();

    c.bench_function("compatibility_score", |b| {
        b.iter(|| {
            compatibility_score(black_box(&candidate), black_box(&family), black_box(&weights))
        });
    });
}

fn bench_suggest(c: &mut Criterion) {
    let engine = MatchEngine::with_default_weights();
    let family = create_family();

    let mut group = c.benchmark_group("matching");

    for candidate_count in [10, 50, 100, 500, 1000].iter() {
        let candidates: Vec<ChildRecord> = (0..*candidate_count).map(create_candidate).collect();

        group.bench_with_input(
            BenchmarkId::new("suggest", candidate_count),
            candidate_count,
            |b, _| {
                b.iter(|| {
                    engine.suggest(
                        black_box(&family),
                        black_box(candidates.clone()),
                        black_box(10),
                    )
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_eligibility, bench_scoring, bench_suggest);
criterion_main!(benches);

// Criterion benchmarks for Mentra Algo

use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use mentra_algo::core::{
    calculate_company_score, calculate_prospect_score, normalize_company_sizes, rank,
    validate_criteria, DEFAULT_RANK_LIMIT,
};
use mentra_algo::models::{CandidateCompany, CandidateContact, Criteria, Prospect, ScoringWeights};

fn create_prospect(id: usize) -> Prospect {
    let titles = ["VP of Sales", "Head of Talent", "Sales Director", "Accountant"];
    let seniorities = ["vp", "director", "manager", "entry"];
    let industries = ["SaaS", "FinTech", "Logistics"];
    let sizes = ["11-50", "51-200", "201-500"];

    Prospect {
        company: CandidateCompany {
            name: Some(format!("Company {}", id)),
            domain: Some(format!("company{}.test", id)),
            industry: Some(industries[id % industries.len()].to_string()),
            company_size: Some(sizes[id % sizes.len()].to_string()),
            funding_stage: Some("Series B".to_string()),
            technologies_used: vec!["Salesforce".to_string()],
            city: Some("Austin".to_string()),
            country: Some("USA".to_string()),
            ..Default::default()
        },
        contact: CandidateContact {
            full_name: Some(format!("Contact {}", id)),
            job_title: Some(titles[id % titles.len()].to_string()),
            seniority: Some(seniorities[id % seniorities.len()].to_string()),
            department: Some("Sales".to_string()),
            ..Default::default()
        },
        match_score: 0,
        match_reasons: Vec::new(),
    }
}

fn create_criteria() -> Criteria {
    Criteria {
        job_titles: vec!["VP of Sales".to_string(), "Head of Talent".to_string()],
        industries: vec!["SaaS".to_string()],
        seniorities: vec!["vp".to_string(), "director".to_string()],
        company_sizes: vec!["51-200".to_string()],
        locations: vec!["Austin".to_string()],
        funding_stages: vec!["Series B".to_string()],
        technologies: vec!["Salesforce".to_string()],
        ..Default::default()
    }
}

fn bench_normalize_company_sizes(c: &mut Criterion) {
    let raw = vec![
        "51-200".to_string(),
        "50-60".to_string(),
        "200+".to_string(),
        "9999+".to_string(),
        "enterprise".to_string(),
    ];

    c.bench_function("normalize_company_sizes", |b| {
        b.iter(|| normalize_company_sizes(black_box(&raw)));
    });
}

fn bench_validate_criteria(c: &mut Criterion) {
    let raw = Criteria {
        job_titles: vec![" VP of Sales ".to_string(), "VP of Sales".to_string()],
        seniorities: vec!["vp".to_string(), "emperor".to_string()],
        company_sizes: vec!["50-60".to_string(), "1000+".to_string()],
        funding_stages: vec!["Series A".to_string(), "Pre-seed".to_string()],
        ..Default::default()
    };

    c.bench_function("validate_criteria", |b| {
        b.iter(|| validate_criteria(black_box(&raw)));
    });
}

fn bench_company_score(c: &mut Criterion) {
    let company = create_prospect(0).company;

    c.bench_function("company_score", |b| {
        b.iter(|| calculate_company_score(black_box(&company)));
    });
}

fn bench_prospect_score(c: &mut Criterion) {
    let prospect = create_prospect(0);
    let criteria = create_criteria();
    let weights = ScoringWeights::default();

    c.bench_function("prospect_score", |b| {
        b.iter(|| calculate_prospect_score(black_box(&prospect), &criteria, &weights));
    });
}

fn bench_scoring_pipeline(c: &mut Criterion) {
    let criteria = create_criteria();
    let weights = ScoringWeights::default();

    let mut group = c.benchmark_group("scoring");

    for prospect_count in [10, 50, 100, 500, 1000].iter() {
        let prospects: Vec<Prospect> = (0..*prospect_count).map(create_prospect).collect();

        group.bench_with_input(
            BenchmarkId::new("score_and_rank", prospect_count),
            prospect_count,
            |b, _| {
                b.iter(|| {
                    let scored: Vec<Prospect> = black_box(&prospects)
                        .iter()
                        .cloned()
                        .map(|mut prospect| {
                            let result =
                                calculate_prospect_score(&prospect, &criteria, &weights);
                            prospect.match_score = result.score;
                            prospect.match_reasons = result.reasons;
                            prospect
                        })
                        .collect();
                    rank(scored, DEFAULT_RANK_LIMIT)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_normalize_company_sizes,
    bench_validate_criteria,
    bench_company_score,
    bench_prospect_score,
    bench_scoring_pipeline
);

criterion_main!(benches);

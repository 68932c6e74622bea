//! Criterion benchmarks for the local search path.
//!
//! - classify: vocabulary scan plus intent rules
//! - score: full pass over the fixture pool
//! - score_large_pool: scoring cost as the pool grows

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

use alumni_search::directory::CandidatePool;
use alumni_search::directory::fixtures::default_pool;
use alumni_search::search::{ProjectFilters, classify, score, search_projects};

const QUERIES: &[&str] = &[
    "Who is in Boston?",
    "Is anyone in FinTech Nexus?",
    "startup looking for marketing help",
    "react native developer",
    "microsoft",
    "hello there",
];

// =============================================================================
// Classification Benchmarks
// =============================================================================

fn classify_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");

    for query in QUERIES {
        group.bench_with_input(BenchmarkId::new("query", query), query, |b, query| {
            b.iter(|| classify(black_box(query)));
        });
    }

    // Long free text: every vocabulary term is scanned over the whole input
    for size in [10, 100, 1000] {
        let input = "tell me about design in seattle ".repeat(size);
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_with_input(BenchmarkId::new("text_size", size), &input, |b, input| {
            b.iter(|| classify(black_box(input)));
        });
    }

    group.finish();
}

// =============================================================================
// Scoring Benchmarks
// =============================================================================

fn score_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("score");
    let pool = default_pool();

    for text in QUERIES {
        let query = classify(text);
        group.bench_with_input(BenchmarkId::new("fixtures", text), &query, |b, query| {
            b.iter(|| score(black_box(query), black_box(&pool)));
        });
    }

    group.finish();
}

fn large_pool(copies: usize) -> CandidatePool {
    let base = default_pool();
    let mut pool = CandidatePool::new();
    for i in 0..copies {
        pool.members.extend(base.members.iter().cloned().map(|mut m| {
            m.id += (i * 100) as u64;
            m
        }));
        pool.projects.extend(base.projects.iter().cloned());
        pool.organizations.extend(base.organizations.iter().cloned());
    }
    pool
}

fn large_pool_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("score_large_pool");
    let query = classify("who knows react in san francisco at stripe");

    for copies in [10, 100, 1000] {
        let pool = large_pool(copies);
        group.throughput(Throughput::Elements(pool.len() as u64));
        group.bench_with_input(BenchmarkId::new("members", copies * 10), &pool, |b, pool| {
            b.iter(|| score(black_box(&query), black_box(pool)));
        });
    }

    group.finish();
}

fn project_search_benchmarks(c: &mut Criterion) {
    let pool = large_pool(100);
    let filters = ProjectFilters::new();
    c.bench_function("search_projects_300", |b| {
        b.iter(|| {
            search_projects(
                black_box("startup mvp needs a developer and design help"),
                &pool.projects,
                &filters,
            )
        });
    });
}

criterion_group!(
    benches,
    classify_benchmarks,
    score_benchmarks,
    large_pool_benchmarks,
    project_search_benchmarks,
);

criterion_main!(benches);

//! Benchmarks for condition matching
//!
//! Tests performance of:
//! - Literal and predicate conditions
//! - Lists of alternatives with disabled entries
//! - Advanced include/exclude conditions
//! - Deserializing and converting stored conditions

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use serde_json::json;
use value_condition::prelude::*;

// ============================================================================
// SIMPLE CONDITIONS
// ============================================================================

fn bench_simple(c: &mut Criterion) {
    let mut group = c.benchmark_group("simple");

    let literal = ValueCondition::Literal(42_i64);
    group.bench_function("literal_hit", |b| b.iter(|| literal.matches(black_box(&42))));
    group.bench_function("literal_miss", |b| b.iter(|| literal.matches(black_box(&7))));

    let predicate = ValueCondition::predicate(|v: &i64| v % 7 == 0);
    group.bench_function("predicate", |b| b.iter(|| predicate.matches(black_box(&49))));

    group.bench_function("absent", |b| {
        b.iter(|| value_condition_matches::<i64>(black_box(&1), None))
    });

    group.finish();
}

// ============================================================================
// LISTS
// ============================================================================

fn bench_lists(c: &mut Criterion) {
    let mut group = c.benchmark_group("list");

    for size in [4_i64, 32, 256] {
        let list = ValueCondition::list((0..size).map(|i| {
            if i % 4 == 0 {
                ValueCondition::Disabled
            } else {
                ValueCondition::Literal(i)
            }
        }));

        group.bench_with_input(BenchmarkId::new("miss", size), &list, |b, list| {
            b.iter(|| list.matches(black_box(&-1)))
        });
        group.bench_with_input(BenchmarkId::new("last_hit", size), &list, |b, list| {
            b.iter(|| list.matches(black_box(&(size - 1))))
        });
    }

    group.finish();
}

// ============================================================================
// ADVANCED
// ============================================================================

fn bench_advanced(c: &mut Criterion) {
    let mut group = c.benchmark_group("advanced");

    let cond = ValueCondition::from(
        AdvancedCondition::builder()
            .include_when(|v: &i64| *v >= 18)
            .include_value(16)
            .exclude_value(21)
            .exclude_when(|v: &i64| *v > 120)
            .build(),
    );
    group.bench_function("included", |b| b.iter(|| cond.matches(black_box(&30))));
    group.bench_function("excluded", |b| b.iter(|| cond.matches(black_box(&21))));

    let exclude_only = ValueCondition::from(
        AdvancedCondition::builder()
            .include(ValueCondition::Disabled)
            .exclude_value(0)
            .build(),
    );
    group.bench_function("exclude_only", |b| {
        b.iter(|| exclude_only.matches(black_box(&5)))
    });

    group.finish();
}

// ============================================================================
// STORED CONDITIONS
// ============================================================================

fn bench_stored(c: &mut Criterion) {
    let mut group = c.benchmark_group("stored");

    let stored = json!({
        "condition": "advanced",
        "include": [
            {"condition": "literal", "value": "eu-west-1"},
            {"condition": "literal", "value": "us-east-1"}
        ],
        "exclude": {"condition": "disabled"}
    });

    group.bench_function("load_and_convert", |b| {
        b.iter(|| {
            SerializableCondition::<String>::from_json(black_box(stored.clone()))
                .map(SerializableCondition::into_condition)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_simple, bench_lists, bench_advanced, bench_stored);
criterion_main!(benches);

use chrono::Utc;

use super::*;

fn result(category: &str, passed: bool) -> CheckResult {
    let category = Category::new(category);
    if passed {
        CheckResult::passed("check", "", category, Utc::now())
    } else {
        CheckResult::failed("check", "", category, Utc::now())
    }
}

#[test]
fn no_failures_yields_two_messages() {
    let results = vec![result("frontend", true), result("backend", true)];
    let recommendations = synthesize(&results);

    assert_eq!(recommendations, vec![ALL_PASSED, READY_TO_PROCEED]);
}

#[test]
fn empty_results_count_as_no_failures() {
    assert_eq!(synthesize(&[]).len(), 2);
}

#[test]
fn failures_in_two_categories_yield_three_messages() {
    let results = vec![
        result("frontend", false),
        result("frontend", false),
        result("backend", true),
        result("ai-integration", false),
    ];
    let recommendations = synthesize(&results);

    assert_eq!(recommendations.len(), 3);
    assert!(recommendations[0].starts_with("frontend: 2 failed checks"));
    assert!(recommendations[1].starts_with("ai-integration: 1 failed check,"));
    assert_eq!(recommendations[2], FIX_AND_RERUN);
}

#[test]
fn category_order_follows_first_appearance_in_results() {
    // database appears first, but only fails after frontend does.
    let results = vec![
        result("database", true),
        result("frontend", false),
        result("database", false),
    ];
    let recommendations = synthesize(&results);

    assert!(recommendations[0].starts_with("database:"));
    assert!(recommendations[1].starts_with("frontend:"));
}

#[test]
fn categories_without_failures_are_skipped() {
    let results = vec![
        result("startup-script", true),
        result("backend", false),
        result("frontend", true),
    ];
    let recommendations = synthesize(&results);

    assert_eq!(recommendations.len(), 2);
    assert!(recommendations[0].starts_with("backend:"));
}

use chrono::Utc;

use super::*;
use crate::report::ReportBuilder;
use crate::rules::Category;

fn result(name: &str, category: &str, passed: bool, details: &str) -> CheckResult {
    let category = Category::new(category);
    if passed {
        CheckResult::passed(name, details, category, Utc::now())
    } else {
        CheckResult::failed(name, details, category, Utc::now())
    }
}

fn sample_report() -> Report {
    ReportBuilder::new(vec![
        result("exists: App.tsx", "frontend", true, "file exists (1 B)"),
        result("lines: App.tsx", "frontend", false, "only 3 lines (required: 25)"),
        result("exists: server.js", "backend", true, "file exists (2 B)"),
    ])
    .build()
}

#[test]
fn text_lists_every_result_under_category_headers() {
    let output = TextFormatter::new(ColorMode::Never)
        .format(&sample_report())
        .unwrap();

    assert!(output.starts_with("frontend\n"));
    assert!(output.contains("  ✓ exists: App.tsx: file exists (1 B)"));
    assert!(output.contains("  ✗ lines: App.tsx: only 3 lines (required: 25)"));
    assert!(output.contains("\nbackend\n"));
}

#[test]
fn text_preserves_evaluation_order() {
    let output = TextFormatter::new(ColorMode::Never)
        .format(&sample_report())
        .unwrap();

    let first = output.find("exists: App.tsx").unwrap();
    let second = output.find("lines: App.tsx").unwrap();
    let third = output.find("exists: server.js").unwrap();
    assert!(first < second && second < third);
}

#[test]
fn text_summary_shows_rate_and_tier() {
    let output = TextFormatter::new(ColorMode::Never)
        .format(&sample_report())
        .unwrap();

    assert!(output.contains("Summary: 3 checks, 2 passed, 1 failed"));
    assert!(output.contains("Pass rate: 66.7%"));
    assert!(output.contains("Quality: Poor (<70%)"));
    assert!(output.contains("  frontend: 1/2 (50.0%)"));
    assert!(output.contains("  backend: 1/1 (100.0%)"));
    assert!(output.contains("Recommendations:\n  - frontend: 1 failed check"));
}

#[test]
fn text_empty_report_has_defined_rate_line() {
    let output = TextFormatter::new(ColorMode::Never)
        .format(&ReportBuilder::new(Vec::new()).build())
        .unwrap();

    assert!(output.contains("Summary: 0 checks, 0 passed, 0 failed"));
    assert!(output.contains("Pass rate: n/a"));
    assert!(!output.contains("Categories:"));
}

#[test]
fn text_colors_when_forced() {
    let output = TextFormatter::new(ColorMode::Always)
        .format(&sample_report())
        .unwrap();
    assert!(output.contains("\x1b[32m✓\x1b[0m"));
    assert!(output.contains("\x1b[31m✗\x1b[0m"));
}

#[test]
fn text_never_mode_has_no_escape_codes() {
    let output = TextFormatter::new(ColorMode::Never)
        .format(&sample_report())
        .unwrap();
    assert!(!output.contains('\x1b'));
}

#[test]
fn text_interleaved_categories_get_one_section_each() {
    let report = ReportBuilder::new(vec![
        result("exists: App.tsx", "frontend", true, "file exists (1 B)"),
        result("exists: server.js", "backend", true, "file exists (2 B)"),
        result("entries: components/ui", "frontend", false, "2 entries (required: 8)"),
    ])
    .build();
    let output = TextFormatter::new(ColorMode::Never).format(&report).unwrap();

    assert_eq!(output.matches("frontend\n").count(), 1);
    assert_eq!(output.matches("backend\n").count(), 1);

    let frontend = output.find("frontend\n").unwrap();
    let ui = output.find("entries: components/ui").unwrap();
    let backend = output.find("backend\n").unwrap();
    let server = output.find("exists: server.js").unwrap();
    assert!(frontend < ui && ui < backend && backend < server);
}

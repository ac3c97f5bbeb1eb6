use chrono::Utc;

use super::*;
use crate::checker::CheckResult;
use crate::report::ReportBuilder;
use crate::rules::Category;

#[test]
fn json_output_matches_persisted_report() {
    let results = vec![
        CheckResult::passed(
            "exists: a",
            "file exists (1 B)",
            Category::new("frontend"),
            Utc::now(),
        ),
        CheckResult::failed("exists: b", "file not found", Category::new("backend"), Utc::now()),
    ];
    let report = ReportBuilder::new(results).build();

    let output = JsonFormatter.format(&report).unwrap();
    assert_eq!(output, report.to_json().unwrap());

    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["summary"]["totalChecks"], 2);
    assert_eq!(parsed["results"][1]["passed"], false);
}

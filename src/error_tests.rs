use std::path::PathBuf;

use super::*;

#[test]
fn error_display_config() {
    let err = ConformError::Config("missing category".to_string());
    assert_eq!(err.to_string(), "Configuration error: missing category");
}

#[test]
fn error_display_file_read() {
    let err = ConformError::FileRead {
        path: PathBuf::from(".conform-guard.toml"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
    };
    assert!(err.to_string().contains(".conform-guard.toml"));
}

#[test]
fn error_display_root_not_found() {
    let err = ConformError::RootNotFound {
        path: PathBuf::from("missing/project"),
    };
    assert!(err.to_string().contains("missing/project"));
}

#[test]
fn error_display_target_escapes_root() {
    let err = ConformError::TargetEscapesRoot {
        target: "../secrets".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Rule target escapes the project root: ../secrets"
    );
}

#[test]
fn report_write_keeps_io_source() {
    use std::error::Error as _;

    let err = ConformError::ReportWrite {
        path: PathBuf::from("out/report.json"),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    };
    assert!(err.to_string().contains("out/report.json"));
    assert!(err.source().is_some());
}

#[test]
fn io_error_converts_via_from() {
    let err: ConformError = std::io::Error::other("boom").into();
    assert!(matches!(err, ConformError::Io(_)));
}

#[test]
fn stage_names_failing_pipeline_stage() {
    assert_eq!(ConformError::Config("x".into()).stage(), "configuration");
    assert_eq!(
        ConformError::RootNotFound {
            path: PathBuf::from("x")
        }
        .stage(),
        "project root"
    );
    assert_eq!(
        ConformError::ReportWrite {
            path: PathBuf::from("x"),
            source: std::io::Error::other("x"),
        }
        .stage(),
        "report"
    );
    assert_eq!(ConformError::DivisionUndefined.stage(), "aggregation");
}

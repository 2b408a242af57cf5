use std::fs;

use jobboard_core::{group_jobs, RawJobRow};
use jobboard_engine::{decode_feed, load_feed, FeedError};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

const FEED: &str = r#"[
    {"id": "job-0", "jobTitle": "Engineer", "mainSkill": "Backend", "level": "1",
     "guild": "Eng", "country": "A", "jobCode": "ENG1A", "validJobRootId": 1},
    {"id": "job-1", "jobTitle": "Engineer", "mainSkill": "Backend", "level": "1",
     "guild": "Eng", "country": "M", "jobCode": "ENG1M", "validJobRootId": 1}
]"#;

#[test]
fn decodes_camel_case_rows_and_ignores_extra_fields() {
    let rows = decode_feed(FEED.as_bytes()).expect("decode");

    assert_eq!(
        rows[0],
        RawJobRow {
            job_title: "Engineer".to_string(),
            main_skill: "Backend".to_string(),
            level: "1".to_string(),
            guild: "Eng".to_string(),
            country: "A".to_string(),
            job_code: "ENG1A".to_string(),
            valid_job_root_id: 1,
        }
    );
    assert_eq!(rows.len(), 2);

    let jobs = group_jobs(&rows);
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].id, "ENG1");
    assert_eq!(jobs[0].level.label(), "1-Senior");
}

#[test]
fn empty_array_is_an_empty_feed() {
    assert!(decode_feed(b"[]").unwrap().is_empty());
}

#[test]
fn missing_required_field_is_reported_with_position() {
    let err = decode_feed(br#"[{"jobTitle": "x"}]"#).unwrap_err();
    match err {
        FeedError::Json { line, message, .. } => {
            assert_eq!(line, 1);
            assert!(message.contains("missing field"), "{message}");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn load_feed_reads_file_and_reports_missing_path() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("jobs.json");
    fs::write(&path, FEED).unwrap();
    assert_eq!(load_feed(&path).unwrap().len(), 2);

    let missing = temp.path().join("absent.json");
    assert!(matches!(load_feed(&missing), Err(FeedError::Io { .. })));
}

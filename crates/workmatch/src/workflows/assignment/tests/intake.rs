use crate::workflows::assignment::domain::{AccountStatus, TaskStatus};
use crate::workflows::assignment::intake::{
    self, IntakeError, RawTaskDocument, RawWorkerDocument,
};

fn worker_document(id: &str) -> RawWorkerDocument {
    RawWorkerDocument {
        id: Some(id.to_string()),
        full_name: Some("Sam Doe".to_string()),
        email: Some(format!("{id}@workmatch.dev")),
        skills: Some(vec!["Python".to_string()]),
        account_status: Some("active".to_string()),
        joined_on: None,
    }
}

#[test]
fn absent_skill_list_becomes_empty_set() {
    let mut document = worker_document("sam");
    document.skills = None;

    let profile = intake::worker_from_document(document).expect("document parses");

    assert!(profile.skills.is_empty());
    assert_eq!(profile.account_status, AccountStatus::Active);
}

#[test]
fn blank_skill_entries_are_dropped() {
    let mut document = worker_document("sam");
    document.skills = Some(vec!["  ".to_string(), "Python ".to_string()]);

    let profile = intake::worker_from_document(document).expect("document parses");

    assert_eq!(profile.skills, vec!["Python"]);
}

#[test]
fn missing_name_falls_back_to_id() {
    let mut document = worker_document("sam");
    document.full_name = None;

    let profile = intake::worker_from_document(document).expect("document parses");

    assert_eq!(profile.full_name, "sam");
}

#[test]
fn missing_id_is_rejected() {
    let mut document = worker_document("sam");
    document.id = Some("   ".to_string());

    let err = intake::worker_from_document(document).expect_err("blank id rejected");

    assert!(matches!(err, IntakeError::MissingField("id")));
}

#[test]
fn unknown_account_status_keeps_raw_value() {
    let mut document = worker_document("sam");
    document.account_status = Some("frozen".to_string());

    let err = intake::worker_from_document(document).expect_err("unknown status rejected");

    assert!(err.to_string().contains("frozen"));
}

#[test]
fn missing_account_status_defaults_to_pending() {
    let mut document = worker_document("sam");
    document.account_status = None;

    let profile = intake::worker_from_document(document).expect("document parses");

    assert_eq!(profile.account_status, AccountStatus::Pending);
}

#[test]
fn task_status_accepts_legacy_spellings() {
    for raw in ["in-progress", "in_progress", "In-Progress"] {
        let status = intake::parse_task_status(raw).expect("legacy spelling parses");
        assert_eq!(status, TaskStatus::InProgress);
    }
}

#[test]
fn task_document_defaults_to_available() {
    let snapshot = intake::task_from_document(RawTaskDocument {
        id: Some("t-9".to_string()),
        assigned_to: Some("".to_string()),
        status: None,
    })
    .expect("document parses");

    assert_eq!(snapshot.status, TaskStatus::Available);
    assert!(snapshot.assigned_to.is_none());
    assert!(!snapshot.status.counts_toward_workload());
}

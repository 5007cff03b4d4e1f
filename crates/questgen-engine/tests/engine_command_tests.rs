//! Command dispatch and run logging

use chrono::{Duration, NaiveDate};
use questgen_core::logging_facility::test_capture::init_test_capture;
use questgen_core::model::QuestRequest;
use questgen_core_types::schema::{EVENT_END, EVENT_END_ERROR, EVENT_START};
use questgen_engine::commands::{apply_engine_command, EngineCommand, EngineCommandResult};
use rusqlite::Connection;
use std::fs;
use tempfile::TempDir;

const REFERENCE_YAML: &str = r#"
schema_version: 0
realms: [Arendale]
treasures:
  - name: A
    value: 10
  - name: B
    value: 15
  - name: C
    value: 20
"#;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2030, 4, 1).unwrap()
}

fn import(dir: &TempDir, conn: &mut Connection) {
    let path = dir.path().join("reference.yaml");
    fs::write(&path, REFERENCE_YAML).unwrap();
    let result = apply_engine_command(EngineCommand::ImportReference { path }, conn).unwrap();
    let EngineCommandResult::ReferenceImported(summary) = result else {
        panic!("Expected ReferenceImported")
    };
    assert_eq!((summary.realms, summary.treasures), (1, 3));
}

fn create(conn: &mut Connection, realm: &str) -> questgen_store::Result<EngineCommandResult> {
    apply_engine_command(
        EngineCommand::CreateQuest {
            request: QuestRequest {
                day: today() + Duration::days(2),
                realm: realm.to_string(),
                theme: "Siege".to_string(),
                amount: 20,
                seed: None,
            },
            today: today(),
        },
        conn,
    )
}

#[test]
fn test_import_then_create() {
    let dir = TempDir::new().unwrap();
    let mut conn = Connection::open(dir.path().join("store.sqlite")).unwrap();
    import(&dir, &mut conn);

    let EngineCommandResult::QuestCreated(outcome) = create(&mut conn, "Arendale").unwrap() else {
        panic!("Expected QuestCreated")
    };
    assert_eq!(outcome.quest.theme, "Siege");
    assert!(outcome.total_value >= 20);
}

#[test]
fn test_run_logs_start_and_end() {
    let capture = init_test_capture();
    let dir = TempDir::new().unwrap();
    let mut conn = Connection::open(dir.path().join("store.sqlite")).unwrap();
    import(&dir, &mut conn);

    create(&mut conn, "Arendale").unwrap();
    assert!(create(&mut conn, "Nowhere").is_err());

    capture.assert_event_exists("create_quest", EVENT_START);
    capture.assert_event_exists("create_quest", EVENT_END);
    let aborted = capture.count_events(|e| {
        e.op.as_deref() == Some("create_quest")
            && e.event.as_deref() == Some(EVENT_END_ERROR)
            && e.fields.get("err_code").map(String::as_str) == Some("ERR_UNKNOWN_REALM")
            && e.fields.get("state").map(String::as_str) == Some("validating")
    });
    assert!(aborted >= 1);
}

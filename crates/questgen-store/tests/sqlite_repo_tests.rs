// Integration tests for the SQLite QuestStore adapter

use chrono::NaiveDate;
use questgen_core::model::{Loot, LootKey, Quest};
use questgen_core::{QgErrorKind, QuestStore};
use questgen_store::SqliteQuestStore;
use rusqlite::Connection;

fn setup_test_db() -> Connection {
    let conn = questgen_store::db::open_in_memory().expect("in-memory database");
    questgen_store::schema::apply_schema(&conn).unwrap();
    conn.execute_batch(
        r#"
        INSERT INTO Realm (realm) VALUES ('Arendale');
        INSERT INTO treasure (treasure, sql) VALUES ('C', 20), ('A', 10), ('B', 15);
        "#,
    )
    .unwrap();
    conn
}

fn quest() -> Quest {
    Quest::new("Hunt", "Arendale", NaiveDate::from_ymd_opt(2031, 7, 4).unwrap())
}

#[test]
fn test_schema_creates_all_tables() {
    let conn = setup_test_db();
    let mut stmt = conn
        .prepare("SELECT name FROM sqlite_master WHERE type='table'")
        .unwrap();
    let tables = stmt
        .query_map([], |row| row.get::<_, String>(0))
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap();

    for expected in questgen_store::schema::TABLES {
        assert!(tables.iter().any(|t| t == expected), "Missing table: {}", expected);
    }
}

#[test]
fn test_realm_exists_exact_match() {
    let conn = setup_test_db();
    let store = SqliteQuestStore::new(&conn);
    assert!(store.realm_exists("Arendale").unwrap());
    assert!(!store.realm_exists("ARENDALE").unwrap());
    assert!(!store.realm_exists("Narnia").unwrap());
}

#[test]
fn test_total_and_kinds() {
    let conn = setup_test_db();
    let store = SqliteQuestStore::new(&conn);
    assert_eq!(store.total_treasure_value().unwrap(), 45);

    let kinds = store.treasure_kinds().unwrap();
    let names: Vec<_> = kinds.iter().map(|k| k.name.as_str()).collect();
    assert_eq!(names, vec!["A", "B", "C"]);
    assert_eq!(kinds[1].value, 15);
}

#[test]
fn test_total_of_empty_table_is_zero() {
    let conn = questgen_store::db::open_in_memory().unwrap();
    questgen_store::schema::apply_schema(&conn).unwrap();
    let store = SqliteQuestStore::new(&conn);
    assert_eq!(store.total_treasure_value().unwrap(), 0);
}

#[test]
fn test_insert_quest_allows_duplicates() {
    let conn = setup_test_db();
    let mut store = SqliteQuestStore::new(&conn);
    store.insert_quest(&quest()).unwrap();
    store.insert_quest(&quest()).unwrap();

    let (count, day): (i64, String) = conn
        .query_row("SELECT COUNT(*), MAX(day) FROM quest", [], |row| {
            Ok((row.get(0)?, row.get(1)?))
        })
        .unwrap();
    assert_eq!(count, 2);
    assert_eq!(day, "2031-07-04");
}

#[test]
fn test_max_loot_id_scope() {
    let conn = setup_test_db();
    let mut store = SqliteQuestStore::new(&conn);
    let a = LootKey::for_quest(&quest(), "A");
    let b = LootKey::for_quest(&quest(), "B");

    assert_eq!(store.max_loot_id(&a).unwrap(), None);
    store.insert_loot(&Loot::new(1, a.clone())).unwrap();
    store.insert_loot(&Loot::new(2, a.clone())).unwrap();

    assert_eq!(store.max_loot_id(&a).unwrap(), Some(2));
    assert_eq!(store.max_loot_id(&b).unwrap(), None);

    let other_day = Quest::new("Hunt", "Arendale", NaiveDate::from_ymd_opt(2031, 7, 5).unwrap());
    assert_eq!(
        store
            .max_loot_id(&LootKey::for_quest(&other_day, "A"))
            .unwrap(),
        None
    );
}

#[test]
fn test_insert_loot_for_unknown_treasure_fails() {
    let conn = setup_test_db();
    let mut store = SqliteQuestStore::new(&conn);
    let err = store
        .insert_loot(&Loot::new(1, LootKey::for_quest(&quest(), "Dragon")))
        .unwrap_err();
    assert_eq!(err.kind(), QgErrorKind::Persistence);
    assert_eq!(err.op(), Some("insert_loot"));
}

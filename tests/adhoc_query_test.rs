//! Ad-hoc query mapping into arbitrary result types

use daolite::prelude::*;
use std::sync::Arc;

#[derive(Debug, Clone, Default, PartialEq, Entity)]
struct Student {
    #[primary_key]
    id: i64,
    name: String,
    age: i64,
}

// not an entity: no table, no primary key, just a row-mapping target
#[derive(Debug, Clone, Default, PartialEq, FromRow)]
struct NameTag {
    name: String,
    nickname: String,
}

fn seeded_provider() -> Arc<dyn ConnectionProvider> {
    let provider = SharedProvider::open_in_memory().expect("in-memory database");
    provider
        .acquire()
        .expect("connection")
        .execute_batch(
            "CREATE TABLE student (id INTEGER PRIMARY KEY, name TEXT NOT NULL, age INTEGER NOT NULL);
             INSERT INTO student (id, name, age) VALUES (1, 'Ann', 20);
             INSERT INTO student (id, name, age) VALUES (2, 'Bob', 22);
             INSERT INTO student (id, name, age) VALUES (3, 'Cay', 17);",
        )
        .expect("schema");
    Arc::new(provider)
}

#[test]
fn maps_each_result_row_into_a_fresh_instance() {
    let provider = seeded_provider();
    let adults: Vec<Student> = dao_core::query(
        provider.as_ref(),
        "SELECT id, name, age FROM student WHERE age >= ? ORDER BY id",
        rusqlite::params![18i64],
    )
    .unwrap();

    assert_eq!(adults.len(), 2);
    assert_eq!(adults[0].name, "Ann");
    assert_eq!(adults[1].name, "Bob");
}

#[test]
fn unmatched_columns_are_ignored_and_unmatched_fields_default() {
    let provider = seeded_provider();

    // `age` matches no NameTag field; `nickname` matches no result column
    let tags: Vec<NameTag> = dao_core::query(
        provider.as_ref(),
        "SELECT name, age FROM student ORDER BY id",
        &[],
    )
    .unwrap();

    assert_eq!(
        tags,
        vec![
            NameTag {
                name: "Ann".to_string(),
                nickname: String::new(),
            },
            NameTag {
                name: "Bob".to_string(),
                nickname: String::new(),
            },
            NameTag {
                name: "Cay".to_string(),
                nickname: String::new(),
            },
        ]
    );
}

#[test]
fn repository_exposes_the_same_escape_hatch() {
    let provider = seeded_provider();
    let repo: Repository<Student> =
        Repository::new(provider, &LogicalDeleteConfig::default()).expect("repository");

    let youngest: Vec<Student> = repo
        .query_as(
            "SELECT id, name, age FROM student WHERE age < ?",
            rusqlite::params![18i64],
        )
        .unwrap();
    assert_eq!(youngest.len(), 1);
    assert_eq!(youngest[0].name, "Cay");

    // an entity type still works as an ad-hoc target with a partial column list
    let partial: Vec<Student> = repo
        .query_as(
            "SELECT id, name FROM student WHERE id = ?",
            rusqlite::params![1i64],
        )
        .unwrap();
    assert_eq!(
        partial,
        vec![Student {
            id: 1,
            name: "Ann".to_string(),
            age: 0,
        }]
    );
}

#[test]
fn malformed_sql_is_an_error() {
    let provider = seeded_provider();
    let result: Result<Vec<Student>, DaoError> =
        dao_core::query(provider.as_ref(), "SELEC id FROM student", &[]);
    assert!(matches!(result, Err(DaoError::Execution { .. })));
}

//! End-to-end inserts against an in-memory SQLite database.

use sqlstmt_core::{BuildError, Insert, InsertId, Raw, ValueEntry};
use sqlstmt_sqlite::{ExecError, SqliteExecutor};

async fn setup() -> SqliteExecutor {
    let executor = SqliteExecutor::connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory SQLite pool");
    for ddl in [
        "CREATE TABLE teams (id INTEGER PRIMARY KEY, slug TEXT NOT NULL UNIQUE)",
        "CREATE TABLE users (
             id INTEGER PRIMARY KEY,
             name TEXT NOT NULL UNIQUE,
             age INTEGER,
             team_id INTEGER
         )",
    ] {
        sqlx::query(ddl).execute(executor.pool()).await.unwrap();
    }
    executor
}

fn user(name: &str, age: i64) -> Insert {
    Insert::with_pairs([
        ("name", ValueEntry::from(name)),
        ("age", ValueEntry::from(age)),
    ])
    .into("users")
}

#[tokio::test]
async fn test_insert_returns_row_ids() {
    let executor = setup().await;

    let first = user("Alice", 30).execute(&executor).await.unwrap();
    let second = user("Bob", 41).execute(&executor).await.unwrap();

    assert_eq!(first, InsertId::Int(1));
    assert_eq!(second, InsertId::Int(2));

    let (name, age): (String, i64) = sqlx::query_as("SELECT name, age FROM users WHERE id = ?")
        .bind(1_i64)
        .fetch_one(executor.pool())
        .await
        .unwrap();
    assert_eq!(name, "Alice");
    assert_eq!(age, 30);
}

#[tokio::test]
async fn test_fragment_values_are_bound_in_order() {
    let executor = setup().await;
    Insert::with_pairs([("slug", "core")])
        .into("teams")
        .execute(&executor)
        .await
        .unwrap();
    Insert::with_pairs([("slug", "infra")])
        .into("teams")
        .execute(&executor)
        .await
        .unwrap();

    user("Carol", 25)
        .columns(&["name", "team_id", "age"])
        .values([
            ValueEntry::from("Carol"),
            ValueEntry::from(Raw::with_values(
                "(SELECT id FROM teams WHERE slug = ?)",
                vec!["infra"],
            )),
            ValueEntry::from(25_i64),
        ])
        .execute(&executor)
        .await
        .unwrap();

    let (team_id, age): (i64, i64) =
        sqlx::query_as("SELECT team_id, age FROM users WHERE name = 'Carol'")
            .fetch_one(executor.pool())
            .await
            .unwrap();
    assert_eq!(team_id, 2);
    assert_eq!(age, 25);
}

#[tokio::test]
async fn test_unique_violation_passes_through() {
    let executor = setup().await;
    user("Alice", 30).execute(&executor).await.unwrap();

    let err = user("Alice", 31).execute(&executor).await.unwrap_err();

    assert!(matches!(err, ExecError::Database(sqlx::Error::Database(_))));
    assert!(err.is_unique_violation());
}

#[tokio::test]
async fn test_ignore_is_not_rewritten_for_sqlite() {
    let executor = setup().await;

    let err = user("Alice", 30).ignore().execute(&executor).await.unwrap_err();

    assert!(matches!(err, ExecError::Database(_)));
    assert!(!err.is_unique_violation());
}

#[tokio::test]
async fn test_build_error_is_reported_before_execution() {
    let executor = setup().await;

    let err = Insert::with_pairs([("name", "Alice")])
        .execute(&executor)
        .await
        .unwrap_err();

    assert!(matches!(err, ExecError::Build(BuildError::MissingTable)));

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
        .fetch_one(executor.pool())
        .await
        .unwrap();
    assert_eq!(count, 0);
}

//! End-to-end load against a live PostgreSQL.
//!
//! Requires the database from `config::database_url()` to be reachable, with
//! the role allowed to drop and create tables. Run with:
//!
//! ```text
//! cargo test --test pg_roundtrip -- --ignored
//! ```
//!
//! The test owns the five tables and rebuilds them from scratch.

use std::path::Path;

use songplay_etl::db::{queries, schema};
use songplay_etl::types::User;
use songplay_etl::{config, db, pipeline};

#[tokio::test]
#[ignore = "requires a local PostgreSQL at config::database_url()"]
async fn full_load_round_trip() {
    let mut conn = db::connect(&config::database_url()).await.unwrap();
    schema::drop_tables(&mut conn).await.unwrap();
    schema::create_tables(&mut conn).await.unwrap();

    let song_data = Path::new("tests/fixtures/song_data");
    let log_data = Path::new("tests/fixtures/log_data");

    pipeline::run(&mut conn, song_data, log_data).await.unwrap();

    // Three song files, five NextSong events across two log files.
    assert_eq!(count(&mut conn, "songs").await, 3);
    assert_eq!(count(&mut conn, "artists").await, 3);
    assert_eq!(count(&mut conn, "time").await, 5);
    assert_eq!(count(&mut conn, "users").await, 3);
    assert_eq!(count(&mut conn, "songplays").await, 5);

    // Three of the five plays reference catalogued songs.
    let matched: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM songplays WHERE song_id IS NOT NULL")
            .fetch_one(&mut conn)
            .await
            .unwrap();
    assert_eq!(matched, 3);

    // The lookup is exact on title, artist name, and duration.
    let hit = queries::find_song(&mut conn, Some("Golden Hour"), Some("Harbour Lane"), Some(221.12934))
        .await
        .unwrap();
    assert_eq!(
        hit,
        Some(("SOGHT5A12AB0187C33".to_string(), "ARGHT5A1187B9A7BBA".to_string()))
    );
    let near_miss =
        queries::find_song(&mut conn, Some("Golden Hour"), Some("Harbour Lane"), Some(221.0))
            .await
            .unwrap();
    assert_eq!(near_miss, None);
    let null_title = queries::find_song(&mut conn, None, Some("Harbour Lane"), Some(221.12934))
        .await
        .unwrap();
    assert_eq!(null_title, None);

    // Re-running the whole job duplicates only the fact table.
    pipeline::run(&mut conn, song_data, log_data).await.unwrap();
    assert_eq!(count(&mut conn, "songs").await, 3);
    assert_eq!(count(&mut conn, "artists").await, 3);
    assert_eq!(count(&mut conn, "time").await, 5);
    assert_eq!(count(&mut conn, "users").await, 3);
    assert_eq!(count(&mut conn, "songplays").await, 10);

    // Users take the latest write on conflict.
    let free = User {
        user_id: 999,
        first_name: Some("Nova".to_string()),
        last_name: Some("Reed".to_string()),
        gender: Some("F".to_string()),
        level: Some("free".to_string()),
    };
    queries::insert_user(&mut conn, &free).await.unwrap();
    let paid = User {
        level: Some("paid".to_string()),
        ..free
    };
    queries::insert_user(&mut conn, &paid).await.unwrap();

    let level: Option<String> = sqlx::query_scalar("SELECT level FROM users WHERE user_id = 999")
        .fetch_one(&mut conn)
        .await
        .unwrap();
    assert_eq!(level.as_deref(), Some("paid"));
}

async fn count(conn: &mut sqlx::PgConnection, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(conn)
        .await
        .unwrap()
}

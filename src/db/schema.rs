//! Star-schema DDL for the five tables, plus setup/teardown helpers.
//!
//! `songplays` is the fact table; `users`, `songs`, `artists`, and `time`
//! are the dimensions it points into.

use sqlx::PgConnection;

use crate::error::EtlResult;

/// Fact table: one row per playback event, append-only (generated key).
pub const CREATE_SONGPLAYS: &str = r"
    CREATE TABLE IF NOT EXISTS songplays (
        songplay_id SERIAL PRIMARY KEY,
        start_time  TIMESTAMP,
        user_id     INT NOT NULL,
        level       VARCHAR,
        song_id     VARCHAR,
        artist_id   VARCHAR,
        session_id  INT,
        location    VARCHAR,
        user_agent  VARCHAR
    )";

/// Dimension: application users, latest-known subscription level.
pub const CREATE_USERS: &str = r"
    CREATE TABLE IF NOT EXISTS users (
        user_id    INT PRIMARY KEY,
        first_name VARCHAR,
        last_name  VARCHAR,
        gender     VARCHAR,
        level      VARCHAR
    )";

/// Dimension: catalogued songs.
pub const CREATE_SONGS: &str = r"
    CREATE TABLE IF NOT EXISTS songs (
        song_id   VARCHAR PRIMARY KEY,
        title     VARCHAR NOT NULL,
        artist_id VARCHAR,
        year      INT,
        duration  DOUBLE PRECISION
    )";

/// Dimension: catalogued artists.
pub const CREATE_ARTISTS: &str = r"
    CREATE TABLE IF NOT EXISTS artists (
        artist_id VARCHAR PRIMARY KEY,
        name      VARCHAR NOT NULL,
        location  VARCHAR,
        latitude  DOUBLE PRECISION,
        longitude DOUBLE PRECISION
    )";

/// Dimension: event timestamps broken out into calendar units.
pub const CREATE_TIME: &str = r"
    CREATE TABLE IF NOT EXISTS time (
        start_time TIMESTAMP PRIMARY KEY,
        hour       INT,
        day        INT,
        week       INT,
        month      INT,
        year       INT,
        weekday    INT
    )";

pub const DROP_SONGPLAYS: &str = "DROP TABLE IF EXISTS songplays";
pub const DROP_USERS: &str = "DROP TABLE IF EXISTS users";
pub const DROP_SONGS: &str = "DROP TABLE IF EXISTS songs";
pub const DROP_ARTISTS: &str = "DROP TABLE IF EXISTS artists";
pub const DROP_TIME: &str = "DROP TABLE IF EXISTS time";

/// All CREATE statements, executed in this order.
pub const CREATE_TABLE_QUERIES: [&str; 5] = [
    CREATE_SONGPLAYS,
    CREATE_USERS,
    CREATE_SONGS,
    CREATE_ARTISTS,
    CREATE_TIME,
];

/// All DROP statements, executed in this order.
pub const DROP_TABLE_QUERIES: [&str; 5] = [
    DROP_SONGPLAYS,
    DROP_USERS,
    DROP_SONGS,
    DROP_ARTISTS,
    DROP_TIME,
];

/// Create every table that does not already exist.
pub async fn create_tables(conn: &mut PgConnection) -> EtlResult<()> {
    for query in CREATE_TABLE_QUERIES {
        sqlx::query(query).execute(&mut *conn).await?;
    }
    Ok(())
}

/// Drop every table that exists.
pub async fn drop_tables(conn: &mut PgConnection) -> EtlResult<()> {
    for query in DROP_TABLE_QUERIES {
        sqlx::query(query).execute(&mut *conn).await?;
    }
    Ok(())
}

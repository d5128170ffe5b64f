//! Row-level statements and the song/artist resolution lookup.
//!
//! Conflict policy is per table:
//! - `songs`, `artists`, `time`: first write wins, re-inserts are no-ops
//! - `users`: last write wins on the descriptive columns
//! - `songplays`: append-only, every insert lands as a new row

use sqlx::PgConnection;

use crate::error::EtlResult;
use crate::types::{Artist, Song, Songplay, TimeRow, User};

pub const SONG_INSERT: &str = r"
    INSERT INTO songs (song_id, title, artist_id, year, duration)
    VALUES ($1, $2, $3, $4, $5)
    ON CONFLICT (song_id) DO NOTHING";

pub const ARTIST_INSERT: &str = r"
    INSERT INTO artists (artist_id, name, location, latitude, longitude)
    VALUES ($1, $2, $3, $4, $5)
    ON CONFLICT (artist_id) DO NOTHING";

pub const TIME_INSERT: &str = r"
    INSERT INTO time (start_time, hour, day, week, month, year, weekday)
    VALUES ($1, $2, $3, $4, $5, $6, $7)
    ON CONFLICT (start_time) DO NOTHING";

pub const USER_INSERT: &str = r"
    INSERT INTO users (user_id, first_name, last_name, gender, level)
    VALUES ($1, $2, $3, $4, $5)
    ON CONFLICT (user_id) DO UPDATE
    SET (first_name, last_name, gender, level) =
        (EXCLUDED.first_name, EXCLUDED.last_name, EXCLUDED.gender, EXCLUDED.level)";

pub const SONGPLAY_INSERT: &str = r"
    INSERT INTO songplays
        (start_time, user_id, level, song_id, artist_id, session_id, location, user_agent)
    VALUES ($1, $2, $3, $4, $5, $6, $7, $8)";

/// Exact-match lookup pairing a played title/artist/length with catalog ids.
pub const SONG_SELECT: &str = r"
    SELECT songs.song_id, artists.artist_id
    FROM songs
    JOIN artists ON songs.artist_id = artists.artist_id
    WHERE songs.title = $1
      AND artists.name = $2
      AND songs.duration = $3";

/// Insert one `songs` row; a duplicate key is a no-op.
pub async fn insert_song(conn: &mut PgConnection, song: &Song) -> EtlResult<()> {
    sqlx::query(SONG_INSERT)
        .bind(&song.song_id)
        .bind(&song.title)
        .bind(&song.artist_id)
        .bind(song.year)
        .bind(song.duration)
        .execute(&mut *conn)
        .await?;
    Ok(())
}

/// Insert one `artists` row; a duplicate key is a no-op.
pub async fn insert_artist(conn: &mut PgConnection, artist: &Artist) -> EtlResult<()> {
    sqlx::query(ARTIST_INSERT)
        .bind(&artist.artist_id)
        .bind(&artist.name)
        .bind(&artist.location)
        .bind(artist.latitude)
        .bind(artist.longitude)
        .execute(&mut *conn)
        .await?;
    Ok(())
}

/// Insert one `time` row; a duplicate timestamp is a no-op.
pub async fn insert_time(conn: &mut PgConnection, time: &TimeRow) -> EtlResult<()> {
    sqlx::query(TIME_INSERT)
        .bind(time.start_time)
        .bind(time.hour)
        .bind(time.day)
        .bind(time.week)
        .bind(time.month)
        .bind(time.year)
        .bind(time.weekday)
        .execute(&mut *conn)
        .await?;
    Ok(())
}

/// Insert or update one `users` row; on conflict the new descriptive columns
/// replace the stored ones, so the latest event wins.
pub async fn insert_user(conn: &mut PgConnection, user: &User) -> EtlResult<()> {
    sqlx::query(USER_INSERT)
        .bind(user.user_id)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.gender)
        .bind(&user.level)
        .execute(&mut *conn)
        .await?;
    Ok(())
}

/// Append one `songplays` row; the key is generated, duplicates are allowed.
pub async fn insert_songplay(conn: &mut PgConnection, songplay: &Songplay) -> EtlResult<()> {
    sqlx::query(SONGPLAY_INSERT)
        .bind(songplay.start_time)
        .bind(songplay.user_id)
        .bind(&songplay.level)
        .bind(&songplay.song_id)
        .bind(&songplay.artist_id)
        .bind(songplay.session_id)
        .bind(&songplay.location)
        .bind(&songplay.user_agent)
        .execute(&mut *conn)
        .await?;
    Ok(())
}

/// Resolve a play against the catalog on exact title, artist name, and
/// duration. Returns `(song_id, artist_id)` for the match, or `None` when
/// nothing matches (a null title, artist, or length never matches).
pub async fn find_song(
    conn: &mut PgConnection,
    title: Option<&str>,
    artist: Option<&str>,
    length: Option<f64>,
) -> EtlResult<Option<(String, String)>> {
    let found = sqlx::query_as::<_, (String, String)>(SONG_SELECT)
        .bind(title)
        .bind(artist)
        .bind(length)
        .fetch_optional(&mut *conn)
        .await?;
    Ok(found)
}

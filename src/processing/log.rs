//! Transformations from activity-log events into dimension and fact rows.
//!
//! Rules:
//! - Only `"NextSong"` events describe playback; every other page is dropped
//!   before any row derivation.
//! - The event timestamp is epoch milliseconds interpreted as UTC; all time
//!   fields derive from that one conversion.
//! - `userId` arrives as text and must parse as an integer once the playback
//!   filter has run.

use chrono::{DateTime, Datelike, NaiveDateTime, Timelike};

use crate::error::{EtlError, EtlResult};
use crate::types::{LogRecord, Songplay, TimeRow, User};

/// Page value marking a playback event.
pub const NEXT_SONG: &str = "NextSong";

/// True when the event is a playback (`page == "NextSong"`, exact match).
pub fn is_next_song(record: &LogRecord) -> bool {
    record.page == NEXT_SONG
}

/// Convert epoch milliseconds to a UTC datetime, millisecond precision kept.
pub fn start_time(ts: i64) -> EtlResult<NaiveDateTime> {
    DateTime::from_timestamp_millis(ts)
        .map(|dt| dt.naive_utc())
        .ok_or(EtlError::TimestampOutOfRange { ts })
}

/// Derive the full `time` dimension row for an event timestamp.
///
/// Week is the ISO week number while year is the calendar year, so the two
/// disagree around year boundaries. Weekday counts Monday = 0 through
/// Sunday = 6.
pub fn time_row(ts: i64) -> EtlResult<TimeRow> {
    let start = start_time(ts)?;
    Ok(TimeRow {
        start_time: start,
        hour: start.hour() as i32,
        day: start.day() as i32,
        week: start.iso_week().week() as i32,
        month: start.month() as i32,
        year: start.year(),
        weekday: start.weekday().num_days_from_monday() as i32,
    })
}

/// Derive the `users` dimension row.
///
/// Fails when the id is empty or not an integer; logged-out events carry an
/// empty id, but those never reach this point once filtered.
pub fn user_row(record: &LogRecord) -> EtlResult<User> {
    Ok(User {
        user_id: parse_user_id(&record.user_id)?,
        first_name: record.first_name.clone(),
        last_name: record.last_name.clone(),
        gender: record.gender.clone(),
        level: record.level.clone(),
    })
}

/// Assemble the `songplays` fact row, with the ids produced by the catalog
/// lookup (both null when nothing matched).
pub fn songplay_row(
    record: &LogRecord,
    song_id: Option<String>,
    artist_id: Option<String>,
) -> EtlResult<Songplay> {
    Ok(Songplay {
        start_time: start_time(record.ts)?,
        user_id: parse_user_id(&record.user_id)?,
        level: record.level.clone(),
        song_id,
        artist_id,
        session_id: record.session_id,
        location: record.location.clone(),
        user_agent: record.user_agent.clone(),
    })
}

fn parse_user_id(raw: &str) -> EtlResult<i32> {
    raw.trim()
        .parse()
        .map_err(|e: std::num::ParseIntError| EtlError::InvalidField {
            field: "userId",
            raw: raw.to_string(),
            message: e.to_string(),
        })
}

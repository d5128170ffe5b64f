//! Core data model types.
//!
//! Two layers live here: raw records deserialized straight from the JSON
//! sources ([`SongRecord`], [`LogRecord`]), and the typed rows the load step
//! binds into the star schema ([`Song`], [`Artist`], [`User`], [`TimeRow`],
//! [`Songplay`]).

use chrono::NaiveDateTime;
use serde::Deserialize;

/// Raw contents of one song-metadata file (a single JSON object).
///
/// Field names follow the source files. Unknown keys (e.g. `num_songs`) are
/// ignored; location and coordinates may be null or absent.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SongRecord {
    /// Stable song identifier.
    pub song_id: String,
    /// Song title.
    pub title: String,
    /// Identifier of the performing artist.
    pub artist_id: String,
    /// Release year (0 when unknown in the source data).
    pub year: i32,
    /// Track length in seconds.
    pub duration: f64,
    /// Artist display name.
    pub artist_name: String,
    /// Free-text artist location.
    #[serde(default)]
    pub artist_location: Option<String>,
    /// Latitude of the artist location.
    #[serde(default)]
    pub artist_latitude: Option<f64>,
    /// Longitude of the artist location.
    #[serde(default)]
    pub artist_longitude: Option<f64>,
}

/// Raw contents of one activity-log line.
///
/// The source serializes keys in camelCase and writes `userId` sometimes as a
/// string, sometimes as a number; deserialization accepts both (and maps
/// null/missing to an empty string). Strict validation of the id happens in
/// the transform step, after non-playback lines have been filtered out.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogRecord {
    /// Page the event was recorded on; playback events carry `"NextSong"`.
    pub page: String,
    /// Event time as epoch milliseconds (UTC).
    pub ts: i64,
    /// User identifier as it appears in the log.
    #[serde(default, deserialize_with = "lenient_user_id")]
    pub user_id: String,
    /// Browser session identifier.
    pub session_id: i32,
    /// User first name.
    #[serde(default)]
    pub first_name: Option<String>,
    /// User last name.
    #[serde(default)]
    pub last_name: Option<String>,
    /// User gender code.
    #[serde(default)]
    pub gender: Option<String>,
    /// Subscription level at event time (`"free"` or `"paid"`).
    #[serde(default)]
    pub level: Option<String>,
    /// Title of the song being played, if any.
    #[serde(default)]
    pub song: Option<String>,
    /// Name of the artist being played, if any.
    #[serde(default)]
    pub artist: Option<String>,
    /// Reported playback length in seconds.
    #[serde(default)]
    pub length: Option<f64>,
    /// User location string.
    #[serde(default)]
    pub location: Option<String>,
    /// Browser user-agent string.
    #[serde(default)]
    pub user_agent: Option<String>,
}

/// One row of the `songs` dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct Song {
    /// Primary key.
    pub song_id: String,
    /// Song title.
    pub title: String,
    /// Owning artist identifier.
    pub artist_id: String,
    /// Release year.
    pub year: i32,
    /// Track length in seconds.
    pub duration: f64,
}

/// One row of the `artists` dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct Artist {
    /// Primary key.
    pub artist_id: String,
    /// Artist display name.
    pub name: String,
    /// Free-text location.
    pub location: Option<String>,
    /// Latitude.
    pub latitude: Option<f64>,
    /// Longitude.
    pub longitude: Option<f64>,
}

/// One row of the `users` dimension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Primary key, parsed from the log's string or numeric id.
    pub user_id: i32,
    /// First name.
    pub first_name: Option<String>,
    /// Last name.
    pub last_name: Option<String>,
    /// Gender code.
    pub gender: Option<String>,
    /// Subscription level at the time of the latest event seen.
    pub level: Option<String>,
}

/// One row of the `time` dimension, keyed by the event timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeRow {
    /// Event time (UTC), millisecond precision preserved.
    pub start_time: NaiveDateTime,
    /// Hour of day, 0-23.
    pub hour: i32,
    /// Day of month, 1-31.
    pub day: i32,
    /// ISO week number, 1-53.
    pub week: i32,
    /// Calendar month, 1-12.
    pub month: i32,
    /// Calendar year.
    pub year: i32,
    /// Day of week, Monday = 0 through Sunday = 6.
    pub weekday: i32,
}

/// One row of the `songplays` fact table.
///
/// `song_id` and `artist_id` are null unless the play matched a catalogued
/// song exactly on title, artist name, and duration.
#[derive(Debug, Clone, PartialEq)]
pub struct Songplay {
    /// Event time (UTC).
    pub start_time: NaiveDateTime,
    /// Playing user.
    pub user_id: i32,
    /// Subscription level at event time.
    pub level: Option<String>,
    /// Matched song, if resolved.
    pub song_id: Option<String>,
    /// Matched artist, if resolved.
    pub artist_id: Option<String>,
    /// Browser session identifier.
    pub session_id: i32,
    /// User location string.
    pub location: Option<String>,
    /// Browser user-agent string.
    pub user_agent: Option<String>,
}

/// Accepts `userId` as a JSON string or number; null and missing become `""`.
fn lenient_user_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(i64),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Text(text)) => text,
        Some(Raw::Number(number)) => number.to_string(),
        None => String::new(),
    })
}

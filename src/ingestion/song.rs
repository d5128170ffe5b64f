//! Song-metadata file ingestion.
//!
//! Each file in the song tree holds exactly one JSON object describing a song
//! and its artist. Trailing content after the object is rejected.

use std::fs;
use std::path::Path;

use crate::error::{EtlError, EtlResult};
use crate::types::SongRecord;

/// Read and parse a single-record song-metadata file.
pub fn read_song_file(path: impl AsRef<Path>) -> EtlResult<SongRecord> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    song_record_from_str(&text).map_err(|err| match err {
        EtlError::MalformedRecord { message } => EtlError::MalformedRecord {
            message: format!("{}: {message}", path.display()),
        },
        other => other,
    })
}

/// Parse a song record from an in-memory JSON string.
pub fn song_record_from_str(input: &str) -> EtlResult<SongRecord> {
    serde_json::from_str(input).map_err(|e| EtlError::MalformedRecord {
        message: e.to_string(),
    })
}

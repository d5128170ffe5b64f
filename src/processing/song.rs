//! Projections from song-metadata records into dimension rows.

use crate::types::{Artist, Song, SongRecord};

/// Project the `songs` dimension row out of a metadata record.
pub fn song_row(record: &SongRecord) -> Song {
    Song {
        song_id: record.song_id.clone(),
        title: record.title.clone(),
        artist_id: record.artist_id.clone(),
        year: record.year,
        duration: record.duration,
    }
}

/// Project the `artists` dimension row out of a metadata record.
pub fn artist_row(record: &SongRecord) -> Artist {
    Artist {
        artist_id: record.artist_id.clone(),
        name: record.artist_name.clone(),
        location: record.artist_location.clone(),
        latitude: record.artist_latitude,
        longitude: record.artist_longitude,
    }
}

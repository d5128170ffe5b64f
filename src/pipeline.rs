//! Run orchestration: discovery, per-file transform, and load.
//!
//! A run is two phases over one connection. Song-metadata files go first so
//! the catalog is populated before any play is resolved against it; activity
//! logs follow. Files are processed strictly in discovery order, one at a
//! time, and progress is reported after each file.

use std::path::Path;

use async_trait::async_trait;
use sqlx::PgConnection;
use tracing::{debug, info};

use crate::config;
use crate::db::queries;
use crate::error::EtlResult;
use crate::ingestion::{discover_files, read_log_file, read_song_file};
use crate::processing::{artist_row, is_next_song, song_row, songplay_row, time_row, user_row};

/// Per-file processing step driven by [`process_directory`].
#[async_trait]
pub trait FileProcessor {
    /// Parse one discovered file, transform its records, and load the rows.
    async fn process(&mut self, conn: &mut PgConnection, path: &Path) -> EtlResult<()>;
}

/// Loads song-metadata files into the `songs` and `artists` dimensions.
#[derive(Debug, Default)]
pub struct SongFiles;

#[async_trait]
impl FileProcessor for SongFiles {
    async fn process(&mut self, conn: &mut PgConnection, path: &Path) -> EtlResult<()> {
        let record = read_song_file(path)?;
        queries::insert_song(conn, &song_row(&record)).await?;
        queries::insert_artist(conn, &artist_row(&record)).await?;
        Ok(())
    }
}

/// Loads activity-log files into `time`, `users`, and `songplays`.
///
/// Counters accumulate across files and feed the run summary.
#[derive(Debug, Default)]
pub struct LogFiles {
    /// Playback events loaded into `songplays`.
    pub events: u64,
    /// Lines discarded by the page filter.
    pub skipped: u64,
    /// Events loaded with null ids because no catalog entry matched.
    pub unresolved: u64,
}

#[async_trait]
impl FileProcessor for LogFiles {
    async fn process(&mut self, conn: &mut PgConnection, path: &Path) -> EtlResult<()> {
        let records = read_log_file(path)?;
        let total = records.len();
        let events: Vec<_> = records.into_iter().filter(is_next_song).collect();
        self.skipped += (total - events.len()) as u64;

        for record in &events {
            queries::insert_time(conn, &time_row(record.ts)?).await?;
        }
        for record in &events {
            queries::insert_user(conn, &user_row(record)?).await?;
        }
        for record in &events {
            let resolved = queries::find_song(
                conn,
                record.song.as_deref(),
                record.artist.as_deref(),
                record.length,
            )
            .await?;
            let (song_id, artist_id) = match resolved {
                Some((song_id, artist_id)) => (Some(song_id), Some(artist_id)),
                None => {
                    self.unresolved += 1;
                    (None, None)
                }
            };
            queries::insert_songplay(conn, &songplay_row(record, song_id, artist_id)?).await?;
        }
        self.events += events.len() as u64;
        Ok(())
    }
}

/// Discover matching files under `root` and run `processor` over each one in
/// sequence. Returns the number of files processed.
pub async fn process_directory<P: FileProcessor>(
    conn: &mut PgConnection,
    root: &Path,
    processor: &mut P,
) -> EtlResult<usize> {
    let files = discover_files(root, config::DATA_FILE_EXTENSION)?;
    info!("{} files found in {}", files.len(), root.display());

    for (i, path) in files.iter().enumerate() {
        debug!("processing {}", path.display());
        processor.process(conn, path).await?;
        info!("{}/{} files processed.", i + 1, files.len());
    }
    Ok(files.len())
}

/// Run the full two-phase load: song files first, then activity logs.
pub async fn run(conn: &mut PgConnection, song_data: &Path, log_data: &Path) -> EtlResult<()> {
    process_directory(conn, song_data, &mut SongFiles).await?;

    let mut logs = LogFiles::default();
    process_directory(conn, log_data, &mut logs).await?;
    info!(
        "log load complete: {} playback events, {} lines filtered out, {} plays without a catalog match",
        logs.events, logs.skipped, logs.unresolved
    );
    Ok(())
}

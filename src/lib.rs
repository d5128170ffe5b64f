//! `songplay-etl` is a one-shot batch ETL job that loads a directory of raw
//! JSON music-streaming data into a PostgreSQL star schema built around
//! song plays.
//!
//! The primary entrypoint is [`pipeline::run`], which walks two directory
//! trees and loads five tables over a single serial connection:
//!
//! **Inputs (discovered recursively, `.json` files only):**
//!
//! - **Song metadata**: one JSON object per file describing a song and its
//!   artist
//! - **Activity logs**: newline-delimited JSON, one listening event per line
//!
//! **Outputs (star schema):**
//!
//! - `songplays`: fact table, one row per `"NextSong"` event
//! - `users`, `songs`, `artists`, `time`: dimension tables
//!
//! Dimension re-inserts are no-ops except `users`, where the latest event
//! wins. Each fact row is resolved against the song catalog by exact title,
//! artist name, and duration; unmatched plays keep null ids.
//!
//! ## Quick example: full run
//!
//! ```no_run
//! use std::path::Path;
//!
//! use songplay_etl::{config, db, pipeline};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), songplay_etl::EtlError> {
//! let mut conn = db::connect(&config::database_url()).await?;
//! pipeline::run(
//!     &mut conn,
//!     Path::new(config::SONG_DATA_DIR),
//!     Path::new(config::LOG_DATA_DIR),
//! )
//! .await?;
//! # Ok(())
//! # }
//! ```
//!
//! The parse and transform layers work without a database, which is how the
//! bulk of the crate is tested:
//!
//! ```rust
//! use songplay_etl::ingestion::song_record_from_str;
//! use songplay_etl::processing::{artist_row, song_row};
//!
//! # fn main() -> Result<(), songplay_etl::EtlError> {
//! let record = song_record_from_str(
//!     r#"{"song_id":"SOGHT5A12AB0187C33","title":"Golden Hour",
//!         "artist_id":"ARGHT5A1187B9A7BBA","artist_name":"Harbour Lane",
//!         "year":2014,"duration":221.12934}"#,
//! )?;
//! assert_eq!(song_row(&record).year, 2014);
//! assert_eq!(artist_row(&record).name, "Harbour Lane");
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`ingestion`]: file discovery and per-file parsing into typed records
//! - [`processing`]: pure transformations from records to table rows
//! - [`db`]: connection handling, schema DDL, and row statements
//! - [`pipeline`]: the two-phase driver tying the above together
//! - [`config`]: fixed connection parameters and data directories
//! - [`types`]: raw record and table row types
//! - [`error`]: the error enum shared by every layer

pub mod config;
pub mod db;
pub mod error;
pub mod ingestion;
pub mod pipeline;
pub mod processing;
pub mod types;

pub use error::{EtlError, EtlResult};

//! File discovery and per-file parsing into typed records.
//!
//! - [`discover`]: recursive traversal with a fixed extension filter
//! - [`song`]: single-record song-metadata files
//! - [`log`]: newline-delimited activity-log files
//!
//! Parsing is strict: a record missing a required field, or carrying a value
//! of the wrong type, fails the file rather than producing a partial record.

pub mod discover;
pub mod log;
pub mod song;

pub use discover::discover_files;
pub use log::{log_records_from_str, read_log_file};
pub use song::{read_song_file, song_record_from_str};

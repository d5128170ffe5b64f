//! Fixed run configuration.
//!
//! Connection parameters and data directories are compile-time constants;
//! there is no flag or environment configuration in this version. The single
//! connection built from them is passed explicitly to every component.

/// Database server host.
pub const DB_HOST: &str = "127.0.0.1";

/// Target database name.
pub const DB_NAME: &str = "songplays";

/// Database role used for the run.
pub const DB_USER: &str = "student";

/// Password for [`DB_USER`].
pub const DB_PASSWORD: &str = "student";

/// Root of the single-record song-metadata tree.
pub const SONG_DATA_DIR: &str = "data/song_data";

/// Root of the newline-delimited activity-log tree.
pub const LOG_DATA_DIR: &str = "data/log_data";

/// Extension (without the dot) selecting data files during discovery.
/// The match is exact and case-sensitive.
pub const DATA_FILE_EXTENSION: &str = "json";

/// Connection URL assembled from the fixed constants.
pub fn database_url() -> String {
    format!("postgres://{DB_USER}:{DB_PASSWORD}@{DB_HOST}/{DB_NAME}")
}

//! In-memory transformations from raw records to star-schema rows.
//!
//! The processing layer is pure: it never touches the filesystem or the
//! database, which keeps every rule here testable without external state.
//!
//! Currently implemented:
//!
//! - [`song`]: projections from song-metadata records ([`song_row`], [`artist_row`])
//! - [`log`]: playback filtering and row derivation ([`is_next_song`],
//!   [`time_row`], [`user_row`], [`songplay_row`])
//!
//! ## Example: filter → derive
//!
//! ```rust
//! use songplay_etl::ingestion::log_records_from_str;
//! use songplay_etl::processing::{is_next_song, time_row, user_row};
//!
//! # fn main() -> Result<(), songplay_etl::EtlError> {
//! let input = concat!(
//!     r#"{"page":"NextSong","ts":1541440009796,"userId":"44","sessionId":583,"firstName":"Sylvie","lastName":"Crane","gender":"F","level":"paid"}"#,
//!     "\n",
//!     r#"{"page":"Home","ts":1541440132796,"userId":"44","sessionId":583}"#,
//! );
//!
//! let events: Vec<_> = log_records_from_str(input)?
//!     .into_iter()
//!     .filter(is_next_song)
//!     .collect();
//! assert_eq!(events.len(), 1);
//!
//! let time = time_row(events[0].ts)?;
//! assert_eq!((time.hour, time.weekday), (17, 0));
//!
//! let user = user_row(&events[0])?;
//! assert_eq!(user.user_id, 44);
//! # Ok(())
//! # }
//! ```

pub mod log;
pub mod song;

pub use log::{is_next_song, songplay_row, start_time, time_row, user_row, NEXT_SONG};
pub use song::{artist_row, song_row};

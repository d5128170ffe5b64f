//! One-shot ETL entry point: load song metadata, then activity logs.

use std::path::Path;

use anyhow::{Context, Result};
use sqlx::Connection;
use tracing_subscriber::EnvFilter;

use songplay_etl::{config, db, pipeline};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let mut conn = db::connect(&config::database_url())
        .await
        .with_context(|| format!("failed to connect to database '{}'", config::DB_NAME))?;

    pipeline::run(
        &mut conn,
        Path::new(config::SONG_DATA_DIR),
        Path::new(config::LOG_DATA_DIR),
    )
    .await?;

    conn.close().await?;
    Ok(())
}

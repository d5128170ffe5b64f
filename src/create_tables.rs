//! Schema setup: drop the five tables if present, then create them fresh.
//!
//! Run this once before `etl` to start from an empty schema.

use anyhow::{Context, Result};
use sqlx::Connection;
use tracing::info;
use tracing_subscriber::EnvFilter;

use songplay_etl::db::schema;
use songplay_etl::{config, db};

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

    schema::drop_tables(&mut conn).await?;
    schema::create_tables(&mut conn).await?;
    info!(
        "schema ready: {} tables created in '{}'",
        schema::CREATE_TABLE_QUERIES.len(),
        config::DB_NAME
    );

    conn.close().await?;
    Ok(())
}

//! PostgreSQL access: the run's single connection, schema DDL, and per-row
//! statements.
//!
//! The load model is strictly serial: one [`PgConnection`], no pool, one
//! statement in flight at a time, each statement committing on its own.

pub mod queries;
pub mod schema;

use sqlx::{Connection, PgConnection};

use crate::error::EtlResult;

/// Open the single connection used for the whole run.
pub async fn connect(url: &str) -> EtlResult<PgConnection> {
    Ok(PgConnection::connect(url).await?)
}

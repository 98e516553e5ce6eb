//! Postgres pool construction and schema bootstrap.

use anyhow::Context;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use sweetshop_core::DomainError;

/// Connect a pool to the given database URL.
pub async fn connect(database_url: &str) -> anyhow::Result<PgPool> {
    PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await
        .context("failed to connect to postgres")
}

/// Create the two tables if they do not exist yet.
///
/// Idempotent; there is no migration framework and no migration history.
/// The schema is small enough to bootstrap in place.
pub async fn ensure_schema(pool: &PgPool) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id UUID PRIMARY KEY,
            username VARCHAR(50) NOT NULL UNIQUE,
            email VARCHAR(120) NOT NULL UNIQUE,
            password_hash TEXT NOT NULL,
            role VARCHAR(10) NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await
    .context("failed to create users table")?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS sweets (
            id UUID PRIMARY KEY,
            name VARCHAR(100) NOT NULL,
            category VARCHAR(50) NOT NULL,
            price NUMERIC(8, 2) NOT NULL,
            quantity BIGINT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await
    .context("failed to create sweets table")?;

    tracing::info!("database schema ensured");
    Ok(())
}

/// Map a sqlx error to the domain taxonomy.
///
/// Unique-constraint violations become `Conflict` (registration races);
/// everything else is an opaque storage fault.
pub(crate) fn map_sqlx_error(err: sqlx::Error) -> DomainError {
    if let sqlx::Error::Database(db) = &err {
        if db.is_unique_violation() {
            return DomainError::conflict("username or email already registered");
        }
    }
    DomainError::storage(err.to_string())
}

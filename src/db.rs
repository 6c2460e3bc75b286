use anyhow::Result;
use sea_orm::{DatabaseConnection, SqlxPostgresConnector};
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;

use crate::config::AppConfig;

pub type DbPool = sqlx::PgPool;
pub type OrmConn = DatabaseConnection;

/// Create the Postgres pool. Connections are handed out per request and go
/// back to the pool when the guard drops, on success and error paths alike.
pub async fn create_pool(config: &AppConfig) -> Result<DbPool> {
    let pool = pool_options(config)
        .connect(&config.database_url)
        .await?;
    Ok(pool)
}

/// Same pool settings, but no connection is opened until first use.
pub fn create_lazy_pool(config: &AppConfig) -> Result<DbPool> {
    let pool = pool_options(config).connect_lazy(&config.database_url)?;
    Ok(pool)
}

fn pool_options(config: &AppConfig) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(5))
}

/// Wrap an existing sqlx pool in a SeaORM connection so both layers share
/// the same connections.
pub fn orm_from_pool(pool: &DbPool) -> OrmConn {
    SqlxPostgresConnector::from_sqlx_postgres_pool(pool.clone())
}

pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

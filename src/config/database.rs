//! Database configuration module.
//!
//! This module handles the `SQLite` connection and table creation using `SeaORM`. Tables are
//! generated from the entity definitions with `Schema::create_table_from_entity`, each guarded by
//! `IF NOT EXISTS` so that initialization can run on every startup without touching existing data.

use crate::entities::{Administrator, Car, Check, Client};
use crate::errors::{Error, Result};
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, EntityTrait, Schema};
use tracing::{debug, info, instrument};

/// Fallback location of the store when nothing else is configured.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://carssale.db?mode=rwc";

/// Resolves the database URL.
///
/// `DATABASE_URL` from the environment wins, then the value from `config.toml`,
/// then [`DEFAULT_DATABASE_URL`].
#[must_use]
pub fn get_database_url(configured: Option<&str>) -> String {
    std::env::var("DATABASE_URL")
        .ok()
        .or_else(|| configured.map(ToString::to_string))
        .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string())
}

/// Opens the store and makes sure the schema exists.
///
/// Any failure here is fatal for the process and is reported as [`Error::FatalStore`].
#[instrument]
pub async fn init_store(database_url: &str) -> Result<DatabaseConnection> {
    debug!("Opening store at {}", database_url);
    let db = Database::connect(database_url)
        .await
        .map_err(|e| Error::FatalStore {
            message: format!("failed to open database at {database_url}: {e}"),
        })?;

    create_tables(&db).await.map_err(|e| Error::FatalStore {
        message: format!("failed to create schema: {e}"),
    })?;

    info!("Store initialized.");
    Ok(db)
}

/// Creates all tables that do not exist yet.
///
/// Order matters: `checks` references the other three tables.
pub async fn create_tables<C: ConnectionTrait>(db: &C) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    create_table_if_missing(db, &schema, Client).await?;
    create_table_if_missing(db, &schema, Administrator).await?;
    create_table_if_missing(db, &schema, Car).await?;
    create_table_if_missing(db, &schema, Check).await?;

    debug!("Database tables ensured.");
    Ok(())
}

async fn create_table_if_missing<C, E>(db: &C, schema: &Schema, entity: E) -> Result<()>
where
    C: ConnectionTrait,
    E: EntityTrait,
{
    let mut statement = schema.create_table_from_entity(entity);
    statement.if_not_exists();
    db.execute(db.get_database_backend().build(&statement)).await?;
    Ok(())
}

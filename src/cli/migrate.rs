use anyhow::Result;
use sqlx::{Sqlite, migrate::MigrateDatabase};

use crate::config::Config;

/// Create the database file when missing and apply every pending migration.
pub async fn migrate(config: &Config) -> Result<()> {
    tracing::info!("Running database migrations...");

    if !Sqlite::database_exists(&config.database.url).await? {
        tracing::info!("Database does not exist, creating: {}", config.database.url);
        Sqlite::create_database(&config.database.url).await?;
    }

    let pool = crate::db::create_write_pool(&config.database.url).await?;
    larder_db::migrate(&pool).await?;
    pool.close().await;

    tracing::info!("Migrations completed successfully");

    Ok(())
}

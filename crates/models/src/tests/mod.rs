
use anyhow::Result;
use configs::DatabaseConfig;
use sea_orm::DatabaseConnection;
use tempfile::TempDir;

use crate::db::connect_and_migrate;

/// Config pointing at a fresh SQLite file; the file goes away with the `TempDir`.
pub fn temp_db_config() -> Result<(DatabaseConfig, TempDir)> {
    let dir = tempfile::Builder::new().prefix("rpg_models_").tempdir()?;
    let cfg = DatabaseConfig {
        url: format!("sqlite://{}?mode=rwc", dir.path().join("rpg.db").display()),
        max_connections: 4,
        ..DatabaseConfig::default()
    };
    Ok((cfg, dir))
}

/// Setup test database with migrations. Keep the `TempDir` alive for the test.
pub async fn setup_test_db() -> Result<(DatabaseConnection, DatabaseConfig, TempDir)> {
    let (cfg, dir) = temp_db_config()?;
    let db = connect_and_migrate(&cfg).await?;
    Ok((db, cfg, dir))
}

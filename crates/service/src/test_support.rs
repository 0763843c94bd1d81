#![cfg(test)]
use configs::DatabaseConfig;
use sea_orm::DatabaseConnection;
use tempfile::TempDir;

/// Fresh migrated SQLite file per call, so tests never share rows.
/// Dropping the `TempDir` removes the file.
pub async fn get_db() -> Result<(DatabaseConnection, TempDir), anyhow::Error> {
    let dir = tempfile::Builder::new().prefix("rpg_service_").tempdir()?;
    let cfg = DatabaseConfig {
        url: format!("sqlite://{}?mode=rwc", dir.path().join("rpg.db").display()),
        max_connections: 4,
        ..DatabaseConfig::default()
    };
    let db = models::db::connect_and_migrate(&cfg).await?;
    Ok((db, dir))
}

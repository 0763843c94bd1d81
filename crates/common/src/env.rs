//! Environment/runtime helpers
//!
//! Sanity checks to ensure expected directories exist at startup.

use std::path::Path;

use tracing::{info, warn};

/// Ensure the directory holding the database file exists.
///
/// `None` means the database does not live on disk (e.g. in-memory SQLite),
/// in which case nothing is created.
pub async fn ensure_data_dir(db_file: Option<&Path>) -> anyhow::Result<()> {
    let Some(file) = db_file else {
        warn!("database is not file-backed; records will not survive a restart");
        return Ok(());
    };
    let Some(dir) = file.parent().filter(|p| !p.as_os_str().is_empty()) else {
        return Ok(());
    };
    if tokio::fs::metadata(dir).await.is_err() {
        info!(data_dir = %dir.display(), "creating data directory");
    }
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", dir.display()))?;
    Ok(())
}

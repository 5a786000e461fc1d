//! Database location
//!
//! The register lives in a fixed-name file beside the executable unless the
//! caller points elsewhere with `--db`.

use dnevnik_store::db::DB_FILE_NAME;
use std::path::{Path, PathBuf};

/// Resolve the database path from an optional explicit override
pub fn resolve_db_path(
    explicit: Option<PathBuf>,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    if let Some(path) = explicit {
        return Ok(path);
    }

    let exe = std::env::current_exe()?;
    let app_dir = exe.parent().unwrap_or_else(|| Path::new("."));
    Ok(default_db_path(app_dir))
}

/// `dnevnik.db` inside `app_dir`
pub fn default_db_path(app_dir: &Path) -> PathBuf {
    app_dir.join(DB_FILE_NAME)
}

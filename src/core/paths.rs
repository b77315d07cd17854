use dirs::home_dir;
use std::{env, fs, path::Path, path::PathBuf};

use crate::errors::Result;

const DEFAULT_DIR_NAME: &str = ".bank_core";
const ACCOUNTS_DIR: &str = "accounts";

/// Returns the application-specific data directory, defaulting to
/// `~/.bank_core`. The `BANK_CORE_HOME` environment variable overrides it.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("BANK_CORE_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Absolute path to the accounts storage root.
pub fn accounts_dir() -> PathBuf {
    app_data_dir().join(ACCOUNTS_DIR)
}

/// Creates `path` (and parents) when absent.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

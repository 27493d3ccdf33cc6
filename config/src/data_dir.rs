//! Resolve `$XDG_DATA_HOME` (or `~/.local/share`) and the credential file under it.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::LoadError;

/// Environment variable that overrides the base data directory.
pub const DATA_HOME_ENV: &str = "XDG_DATA_HOME";

/// Application directory under the data directory that owns `auth.json`.
pub const APP_DIR: &str = "opencode";

/// Credential file name inside [`APP_DIR`].
pub const AUTH_FILE: &str = "auth.json";

/// Picks the data directory from an `XDG_DATA_HOME` value and a home directory.
///
/// An empty override counts as unset. The `~/.local/share` fallback is used on every
/// platform, since that is where the credential writer puts the file.
pub fn data_dir_from(xdg: Option<OsString>, home: Option<PathBuf>) -> Result<PathBuf, LoadError> {
    if let Some(dir) = xdg.filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    let home = home.ok_or_else(|| LoadError::DataDir("home directory not found".to_string()))?;
    Ok(home.join(".local").join("share"))
}

/// Data directory for the current process environment.
pub fn data_dir() -> Result<PathBuf, LoadError> {
    data_dir_from(std::env::var_os(DATA_HOME_ENV), dirs::home_dir())
}

/// `<data_dir>/opencode/auth.json`.
pub fn auth_path(data_dir: &Path) -> PathBuf {
    data_dir.join(APP_DIR).join(AUTH_FILE)
}

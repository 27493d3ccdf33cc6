//! Locate and load the credential store that OpenCode keeps under its data directory.
//!
//! The file is owned by another component; this crate only reads it:
//! `$XDG_DATA_HOME/opencode/auth.json`, falling back to `~/.local/share/opencode/auth.json`.

mod data_dir;
#[cfg(feature = "tracing-init")]
pub mod logging;

use std::path::{Path, PathBuf};
use thiserror::Error;

pub use data_dir::{auth_path, data_dir, data_dir_from, APP_DIR, AUTH_FILE, DATA_HOME_ENV};

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("data dir: {0}")]
    DataDir(String),
    #[error("read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Reads and parses the credential store at `path`.
///
/// The document is returned untyped; interpreting provider entries is up to the caller.
pub async fn load_auth_store(path: &Path) -> Result<serde_json::Value, LoadError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    serde_json::from_str(&content).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Resolves the credential path (`data_dir` if given, else from the environment) and loads it.
pub async fn load_default_auth_store(
    data_dir: Option<&Path>,
) -> Result<serde_json::Value, LoadError> {
    let path = match data_dir {
        Some(dir) => auth_path(dir),
        None => auth_path(&self::data_dir()?),
    };
    tracing::debug!(path = %path.display(), "loading credential store");
    load_auth_store(&path).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_auth(dir: &Path, content: &str) {
        let app_dir = dir.join(APP_DIR);
        std::fs::create_dir_all(&app_dir).unwrap();
        std::fs::write(app_dir.join(AUTH_FILE), content).unwrap();
    }

    #[tokio::test]
    async fn loads_valid_store() {
        let dir = tempfile::tempdir().unwrap();
        write_auth(
            dir.path(),
            r#"{"github-copilot":{"type":"oauth","access":"gho_abc","refresh":"ghr_def"}}"#,
        );

        let store = load_default_auth_store(Some(dir.path())).await.unwrap();
        assert_eq!(store["github-copilot"]["access"], "gho_abc");
    }

    #[tokio::test]
    async fn missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_default_auth_store(Some(dir.path())).await;
        assert!(matches!(result, Err(LoadError::Read { .. })));
    }

    #[tokio::test]
    async fn invalid_json_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        write_auth(dir.path(), "{ not json");
        let result = load_default_auth_store(Some(dir.path())).await;
        assert!(matches!(result, Err(LoadError::Parse { .. })));
    }

    #[tokio::test]
    async fn directory_in_place_of_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join(APP_DIR).join(AUTH_FILE)).unwrap();
        let result = load_default_auth_store(Some(dir.path())).await;
        assert!(matches!(result, Err(LoadError::Read { .. })));
    }

    #[test]
    fn errors_name_the_path() {
        let err = LoadError::Read {
            path: PathBuf::from("/x/auth.json"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(err.to_string().contains("/x/auth.json"));
    }
}

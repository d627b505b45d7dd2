//! Application directory helpers anchored to a single `.caloriepred` folder.
//!
//! Config and log files live under the OS config directory (e.g.
//! `%APPDATA%` on Windows), with a `CALORIEPRED_CONFIG_HOME` override for
//! tests or portable setups.

use std::path::PathBuf;

use directories::BaseDirs;
use thiserror::Error;

/// Name of the application directory that lives under the OS config root.
pub const APP_DIR_NAME: &str = ".caloriepred";

/// Environment variable that relocates the application directory.
pub const CONFIG_HOME_ENV: &str = "CALORIEPRED_CONFIG_HOME";

/// Errors that can occur while resolving or preparing application directories.
#[derive(Debug, Error)]
pub enum AppDirError {
    /// No suitable base config directory could be resolved.
    #[error("No suitable base config directory available for application files")]
    NoBaseDir,
    /// Failed to create the application directory.
    #[error("Failed to create application directory at {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Return the root `.caloriepred` directory, creating it if needed.
pub fn app_root_dir() -> Result<PathBuf, AppDirError> {
    let base = config_base_dir().ok_or(AppDirError::NoBaseDir)?;
    let path = base.join(APP_DIR_NAME);
    std::fs::create_dir_all(&path).map_err(|source| AppDirError::CreateDir {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

/// Return the logs directory inside the `.caloriepred` root, creating it if needed.
pub fn logs_dir() -> Result<PathBuf, AppDirError> {
    let path = app_root_dir()?.join("logs");
    std::fs::create_dir_all(&path).map_err(|source| AppDirError::CreateDir {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

fn config_base_dir() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(CONFIG_HOME_ENV) {
        return Some(PathBuf::from(path));
    }
    BaseDirs::new().map(|dirs| dirs.config_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_dir_name_is_hidden_folder() {
        assert!(APP_DIR_NAME.starts_with('.'));
    }

    #[test]
    fn logs_dir_is_under_app_root() {
        // Only exercise the path arithmetic when a base dir resolves; CI
        // containers without a home directory skip the assertion.
        if let (Ok(root), Ok(logs)) = (app_root_dir(), logs_dir()) {
            assert!(logs.starts_with(&root));
            assert_eq!(logs.file_name().and_then(|n| n.to_str()), Some("logs"));
        }
    }
}

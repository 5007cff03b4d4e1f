//! Account database resolution
//!
//! Each store account owns one SQLite file under the data directory,
//! `<data_dir>/<user>.sqlite`. An explicit database path overrides the
//! per-account lookup.

#![allow(clippy::result_large_err)]

use crate::db;
use crate::errors::{connection_error, Result};
use rusqlite::Connection;
use std::path::{Path, PathBuf};

/// Account used when the caller does not name one
pub const DEFAULT_ACCOUNT: &str = "questgen";

/// Data directory used when none is configured
pub const DEFAULT_DATA_DIR: &str = ".questgen";

/// Resolves which database file a run connects to
#[derive(Debug, Clone)]
pub struct AccountLocator {
    data_dir: PathBuf,
    db_override: Option<PathBuf>,
}

impl AccountLocator {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            db_override: None,
        }
    }

    /// Always use `path`, whatever account is requested
    pub fn with_db_override(mut self, path: Option<PathBuf>) -> Self {
        self.db_override = path;
        self
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Database file for `user`
    pub fn database_path(&self, user: &str) -> Result<PathBuf> {
        if let Some(path) = &self.db_override {
            return Ok(path.clone());
        }
        if !is_valid_account_name(user) {
            return Err(connection_error(user, "invalid account name"));
        }
        Ok(self.data_dir.join(format!("{}.sqlite", user)))
    }

    /// Open the existing database of `user` for a quest run
    pub fn connect(&self, user: &str) -> Result<Connection> {
        let path = self.database_path(user)?;
        tracing::debug!(account = user, path = %path.display(), "connecting");
        db::open_existing(&path)
    }

    /// Open the database of `user`, creating the file and its directory if needed
    pub fn connect_or_create(&self, user: &str) -> Result<Connection> {
        let path = self.database_path(user)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| crate::errors::io_error("create_data_dir", e))?;
        }
        db::open(&path)
    }
}

impl Default for AccountLocator {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_DIR)
    }
}

/// Account names become file names, so keep them to a safe alphabet
fn is_valid_account_name(user: &str) -> bool {
    !user.is_empty()
        && user
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.')
        && !user.starts_with('.')
}

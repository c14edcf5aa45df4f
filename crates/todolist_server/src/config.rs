//! Environment-driven server configuration.
//!
//! | Variable | Default |
//! |---|---|
//! | `TODOLIST_BIND` | `127.0.0.1` |
//! | `PORT` | `3000` |
//! | `TODOLIST_DB_PATH` | `todolist.sqlite3` (`:memory:` for a throwaway DB) |
//! | `TODOLIST_LOG_LEVEL` | `debug` in debug builds, `info` in release |
//! | `TODOLIST_LOG_DIR` | unset: log to stderr |

use rusqlite::Connection;
use std::env;
use std::error::Error;
use std::fmt::{Display, Formatter};
use todolist_core::db::{open_db, open_db_in_memory, DbResult};
use todolist_core::default_log_level;

const DEFAULT_BIND: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DB_PATH: &str = "todolist.sqlite3";
const IN_MEMORY_DB_PATH: &str = ":memory:";

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPort(value) => {
                write!(f, "PORT must be an integer in 0-65535, got `{value}`")
            }
        }
    }
}

impl Error for ConfigError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind: String,
    pub port: u16,
    pub db_path: String,
    pub log_level: String,
    pub log_dir: Option<String>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a config from any variable source; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let port = match var("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(value))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            bind: var("TODOLIST_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string()),
            port,
            db_path: var("TODOLIST_DB_PATH").unwrap_or_else(|| DEFAULT_DB_PATH.to_string()),
            log_level: var("TODOLIST_LOG_LEVEL")
                .unwrap_or_else(|| default_log_level().to_string()),
            log_dir: var("TODOLIST_LOG_DIR"),
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }

    /// Opens the configured database with migrations applied.
    pub fn open_db(&self) -> DbResult<Connection> {
        if self.db_path == IN_MEMORY_DB_PATH {
            open_db_in_memory()
        } else {
            open_db(&self.db_path)
        }
    }
}

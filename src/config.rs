//! Configuration management for the contact directory.
//!
//! This module handles loading and validating configuration from environment
//! variables. Everything is optional with a sensible default; the assistant
//! must start with no environment at all.

use crate::book::DEFAULT_BIRTHDAY_WINDOW_DAYS;
use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Default snapshot file name, relative to the working directory.
pub const DEFAULT_SNAPSHOT_PATH: &str = "addressbook.json";

/// Configuration for the contact directory assistant.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the snapshot file (default: "addressbook.json")
    pub snapshot_path: String,

    /// Congratulation window in days for the `birthdays` command (default: 7)
    pub birthday_window_days: u32,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ADDRESS_BOOK_PATH`: snapshot file path (default: "addressbook.json")
    /// - `BIRTHDAY_WINDOW_DAYS`: congratulation window in days (default: 7)
    /// - `LOG_LEVEL`: logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Load .env if present, without failing when it isn't
        let _ = dotenvy::dotenv();

        let snapshot_path =
            env::var("ADDRESS_BOOK_PATH").unwrap_or_else(|_| DEFAULT_SNAPSHOT_PATH.to_string());

        let birthday_window_days =
            Self::parse_env_u32("BIRTHDAY_WINDOW_DAYS", DEFAULT_BIRTHDAY_WINDOW_DAYS)?;

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            snapshot_path,
            birthday_window_days,
            log_level,
        })
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            snapshot_path: DEFAULT_SNAPSHOT_PATH.to_string(),
            birthday_window_days: DEFAULT_BIRTHDAY_WINDOW_DAYS,
            log_level: "error".to_string(),
        }
    }
}

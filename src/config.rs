//! Configuration management for the contact book.
//!
//! Settings come from environment variables, optionally seeded from a `.env`
//! file. Everything has a default, so an empty environment is valid. The log
//! filter (`CONTACT_BOOK_LOG`) is read directly by the binary because logging
//! starts before configuration is loaded.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Default tracing filter when `CONTACT_BOOK_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Default REPL prompt.
pub const DEFAULT_PROMPT: &str = "Enter a command: ";

/// Configuration for the contact book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of `search` results to show (default: 5)
    pub search_max_results: usize,

    /// Minimum fuzzy match confidence for `search` (0-100, default: 30)
    pub search_min_confidence: u8,

    /// Prompt printed before each command (default: "Enter a command: ")
    pub prompt: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `SEARCH_MAX_RESULTS`: Max search results (default: 5)
    /// - `SEARCH_MIN_CONFIDENCE`: Min confidence score (default: 30)
    /// - `PROMPT`: REPL prompt (default: "Enter a command: ")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        let search_max_results = Self::parse_env_usize("SEARCH_MAX_RESULTS", 5)?;
        if search_max_results == 0 {
            return Err(ConfigError::InvalidValue {
                var: "SEARCH_MAX_RESULTS".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        let search_min_confidence = Self::parse_env_u8("SEARCH_MIN_CONFIDENCE", 30)?;
        if search_min_confidence > 100 {
            return Err(ConfigError::InvalidValue {
                var: "SEARCH_MIN_CONFIDENCE".to_string(),
                reason: "Must be between 0 and 100".to_string(),
            });
        }

        let prompt = env::var("PROMPT").unwrap_or_else(|_| DEFAULT_PROMPT.to_string());

        Ok(Config {
            search_max_results,
            search_min_confidence,
            prompt,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as u8 with a default value.
    fn parse_env_u8(var_name: &str, default: u8) -> ConfigResult<u8> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u8>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a number between 0-255, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            search_max_results: 5,
            search_min_confidence: 30,
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}

//! Configuration loaded from the environment.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

const DEFAULT_BOOK_PATH: &str = "addressbook.json";
const DEFAULT_LOG_LEVEL: &str = "error";

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Where the address book snapshot lives.
    pub book_path: PathBuf,

    /// Default tracing filter used when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Config {
    /// Reads configuration from the environment, loading `.env` first if
    /// one is present.
    ///
    /// `ADDRESS_BOOK_PATH` overrides the snapshot location and must be
    /// non-empty when set. `LOG_LEVEL` overrides the default filter.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` when a variable is set to an
    /// unusable value.
    pub fn from_env() -> ConfigResult<Self> {
        dotenvy::dotenv().ok();

        let book_path = match env::var("ADDRESS_BOOK_PATH") {
            Ok(value) => {
                if value.trim().is_empty() {
                    return Err(ConfigError::InvalidValue {
                        var: "ADDRESS_BOOK_PATH".to_string(),
                        reason: "must not be empty".to_string(),
                    });
                }
                PathBuf::from(value)
            }
            Err(_) => PathBuf::from(DEFAULT_BOOK_PATH),
        };

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());

        Ok(Self {
            book_path,
            log_level,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            book_path: PathBuf::from(DEFAULT_BOOK_PATH),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    /// Restores an environment variable to its original state on drop.
    struct EnvGuard {
        key: &'static str,
        original: Option<String>,
    }

    impl EnvGuard {
        fn set(key: &'static str, value: &str) -> Self {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }

        fn unset(key: &'static str) -> Self {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            match &self.original {
                Some(value) => env::set_var(self.key, value),
                None => env::remove_var(self.key),
            }
        }
    }

    #[test]
    #[serial]
    fn test_defaults_when_unset() {
        let _path = EnvGuard::unset("ADDRESS_BOOK_PATH");
        let _level = EnvGuard::unset("LOG_LEVEL");

        let config = Config::from_env().unwrap();
        assert_eq!(config.book_path, PathBuf::from("addressbook.json"));
        assert_eq!(config.log_level, "error");
    }

    #[test]
    #[serial]
    fn test_custom_book_path() {
        let _path = EnvGuard::set("ADDRESS_BOOK_PATH", "/tmp/contacts.json");

        let config = Config::from_env().unwrap();
        assert_eq!(config.book_path, PathBuf::from("/tmp/contacts.json"));
    }

    #[test]
    #[serial]
    fn test_empty_book_path_rejected() {
        let _path = EnvGuard::set("ADDRESS_BOOK_PATH", "   ");

        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("ADDRESS_BOOK_PATH"));
    }

    #[test]
    #[serial]
    fn test_log_level_override() {
        let _path = EnvGuard::unset("ADDRESS_BOOK_PATH");
        let _level = EnvGuard::set("LOG_LEVEL", "debug");

        let config = Config::from_env().unwrap();
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_default_impl() {
        let config = Config::default();
        assert_eq!(config.book_path, PathBuf::from("addressbook.json"));
        assert_eq!(config.log_level, "error");
    }
}

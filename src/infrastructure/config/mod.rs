use std::path::Path;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::error::{AppError, Result};

pub const DEFAULT_CONFIG_FILE: &str = "kicau.toml";
pub const ENV_PREFIX: &str = "KICAU_";

/// Database connection settings.
///
/// Resolution order: built-in defaults, then an optional TOML file, then
/// `KICAU_`-prefixed environment variables (e.g. `KICAU_HOST`, `KICAU_PORT`).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DbConfig {
    #[validate(length(min = 1))]
    pub host: String,

    #[validate(range(min = 1))]
    pub port: u16,

    #[validate(length(min = 1))]
    pub dbname: String,

    #[validate(length(min = 1))]
    pub user: String,

    pub password: String,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5432,
            dbname: "postgres".to_string(),
            user: "postgres".to_string(),
            password: String::new(),
        }
    }
}

/// Load configuration, layering an optional TOML file and the environment
/// over the defaults. An explicitly given file must exist.
pub fn load(file: Option<&Path>) -> Result<DbConfig> {
    let figment = Figment::from(Serialized::defaults(DbConfig::default()));

    let figment = match file {
        Some(path) => {
            if !path.exists() {
                return Err(AppError::ConfigError(format!(
                    "Config file {} not found",
                    path.display()
                )));
            }
            figment.merge(Toml::file(path))
        }
        None => figment.merge(Toml::file(DEFAULT_CONFIG_FILE)),
    };

    let config: DbConfig = figment
        .merge(Env::prefixed(ENV_PREFIX))
        .extract()
        .map_err(|e| AppError::ConfigError(e.to_string()))?;

    config
        .validate()
        .map_err(|e| AppError::ConfigError(e.to_string()))?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        figment::Jail::expect_with(|_jail| {
            let config = load(None).unwrap();
            assert_eq!(config.host, "localhost");
            assert_eq!(config.port, 5432);
            assert_eq!(config.dbname, "postgres");
            assert_eq!(config.user, "postgres");
            assert_eq!(config.password, "");
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_file_overrides_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                DEFAULT_CONFIG_FILE,
                r#"
                    host = "db.internal"
                    port = 5444
                "#,
            )?;
            jail.set_env("KICAU_PORT", "6000");
            jail.set_env("KICAU_PASSWORD", "hush");

            let config = load(None).unwrap();
            assert_eq!(config.host, "db.internal"); // file beats default
            assert_eq!(config.port, 6000); // env beats file
            assert_eq!(config.password, "hush");
            assert_eq!(config.user, "postgres"); // default survives
            Ok(())
        });
    }

    #[test]
    fn test_invalid_port_rejected() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("KICAU_PORT", "0");
            assert!(matches!(load(None), Err(AppError::ConfigError(_))));
            Ok(())
        });
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let err = load(Some(Path::new("/nonexistent/kicau.toml"))).unwrap_err();
        assert!(matches!(err, AppError::ConfigError(_)));
    }
}

use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("Invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Settings read from the environment once at start up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Config {
    pub(crate) database_url: String,
    pub(crate) port: u16,
    /// `None` when the prometheus endpoint is switched off with `METRICS_PORT=0`
    pub(crate) metrics_port: Option<u16>,
    pub(crate) db_max_connections: u32,
    pub(crate) run_migrations: bool,
}

fn parse_or<T, F>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
    }
}

impl Config {
    pub(crate) fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let metrics_port: u16 = parse_or(&lookup, "METRICS_PORT", 9091)?;
        Ok(Self {
            database_url,
            port: parse_or(&lookup, "PORT", 8080)?,
            metrics_port: (metrics_port != 0).then_some(metrics_port),
            db_max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", 10)?,
            run_migrations: parse_or(&lookup, "RUN_MIGRATIONS", true)?,
        })
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashMap;

    use super::{Config, ConfigError};

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults() {
        let config = config_from(&[("DATABASE_URL", "postgres://localhost/gdp")]).unwrap();
        assert_eq!(
            config,
            Config {
                database_url: "postgres://localhost/gdp".to_string(),
                port: 8080,
                metrics_port: Some(9091),
                db_max_connections: 10,
                run_migrations: true,
            }
        );
    }

    #[test]
    fn overrides() {
        let config = config_from(&[
            ("DATABASE_URL", "postgres://db/gdp"),
            ("PORT", "3000"),
            ("METRICS_PORT", "0"),
            ("DB_MAX_CONNECTIONS", " 4 "),
            ("RUN_MIGRATIONS", "false"),
        ])
        .unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.metrics_port, None);
        assert_eq!(config.db_max_connections, 4);
        assert!(!config.run_migrations);
    }

    #[test]
    fn errors() {
        assert_eq!(config_from(&[]), Err(ConfigError::Missing("DATABASE_URL")));
        assert_eq!(
            config_from(&[("DATABASE_URL", "postgres://db/gdp"), ("PORT", "http")]),
            Err(ConfigError::Invalid {
                name: "PORT",
                value: "http".to_string()
            })
        );
    }
}

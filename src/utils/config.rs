use std::{env, str::FromStr};

#[derive(Clone, Debug, PartialEq)]
pub struct DatabaseConfig {
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub name: String,
    pub max_connections: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub database: DatabaseConfig,
    pub app: AppConfig,
}

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} not set")]
    Missing(&'static str),
    #[error("invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

struct Vars<F>(F);

impl<F: Fn(&str) -> Option<String>> Vars<F> {
    fn required(&self, name: &'static str) -> Result<String, ConfigError> {
        (self.0)(name).ok_or(ConfigError::Missing(name))
    }

    fn or(&self, name: &'static str, default: &str) -> String {
        (self.0)(name).unwrap_or_else(|| default.to_string())
    }
}

fn parse<T: FromStr>(name: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .parse::<T>()
        .map_err(|_| ConfigError::Invalid { name, value })
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Reads every setting through `lookup`, so tests can supply a map instead of the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let vars = Vars(lookup);

        let database = DatabaseConfig {
            user: vars.required("DB_USER")?,
            password: vars.required("DB_PASSWORD")?,
            host: vars.required("DB_HOST")?,
            port: parse("DB_PORT", vars.required("DB_PORT")?)?,
            name: vars.required("DB_NAME")?,
            max_connections: parse("DB_MAX_CONNECTIONS", vars.or("DB_MAX_CONNECTIONS", "4"))?,
        };

        let app = AppConfig {
            host: vars.or("HOST", "0.0.0.0"),
            port: parse("PORT", vars.or("PORT", "8000"))?,
        };

        Ok(Self { database, app })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    const DATABASE: [(&str, &str); 5] = [
        ("DB_USER", "adboard"),
        ("DB_PASSWORD", "secret"),
        ("DB_HOST", "localhost"),
        ("DB_PORT", "5432"),
        ("DB_NAME", "adboard"),
    ];

    #[test]
    fn applies_defaults_for_optional_settings() {
        let config = Config::from_lookup(lookup(&DATABASE)).unwrap();

        assert_eq!(config.database.port, 5432);
        assert_eq!(config.database.max_connections, 4);
        assert_eq!(config.app.host, "0.0.0.0");
        assert_eq!(config.app.port, 8000);
    }

    #[test]
    fn reports_the_first_missing_variable() {
        let err = Config::from_lookup(lookup(&DATABASE[..2])).unwrap_err();

        assert_eq!(err, ConfigError::Missing("DB_HOST"));
        assert_eq!(err.to_string(), "DB_HOST not set");
    }

    #[test]
    fn rejects_a_non_numeric_port() {
        let mut pairs = DATABASE.to_vec();
        pairs.push(("PORT", "http"));

        let err = Config::from_lookup(lookup(&pairs)).unwrap_err();

        assert_eq!(
            err,
            ConfigError::Invalid {
                name: "PORT",
                value: "http".to_string()
            }
        );
    }
}

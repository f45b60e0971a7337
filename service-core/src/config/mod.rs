use crate::error::AppError;
use config::{Config as Cfg, File};
use serde::Deserialize;
use std::env;
use std::fmt::Display;
use std::str::FromStr;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    8000
}

impl Config {
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let config = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

/// Read an optional variable. Empty values count as unset.
pub fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Read a variable, falling back to `default` when it is unset.
pub fn env_or(key: &str, default: &str) -> String {
    env_opt(key).unwrap_or_else(|| default.to_string())
}

/// Read and parse a variable, falling back to `default` when it is unset.
///
/// A value that is present but does not parse is a configuration error.
pub fn env_parse<T>(key: &str, default: T) -> Result<T, AppError>
where
    T: FromStr,
    T::Err: Display,
{
    parse_value(key, env_opt(key), default)
}

fn parse_value<T>(key: &str, raw: Option<String>, default: T) -> Result<T, AppError>
where
    T: FromStr,
    T::Err: Display,
{
    match raw {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| {
            AppError::ConfigError(anyhow::anyhow!("{} has invalid value '{}': {}", key, raw, e))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_defaults_to_8000() {
        let config: Config = Cfg::builder().build().unwrap().try_deserialize().unwrap();
        assert_eq!(config.port, 8000);
    }

    #[test]
    fn parse_value_uses_default_when_unset() {
        let value: u64 = parse_value("TIMEOUT", None, 30).unwrap();
        assert_eq!(value, 30);
    }

    #[test]
    fn parse_value_parses_trimmed_input() {
        let value: bool = parse_value("STRICT", Some(" true ".to_string()), false).unwrap();
        assert!(value);
    }

    #[test]
    fn parse_value_rejects_garbage() {
        let result: Result<u64, _> = parse_value("TIMEOUT", Some("soon".to_string()), 30);
        let err = result.unwrap_err();
        assert!(matches!(err, AppError::ConfigError(_)));
        assert!(err.to_string().contains("TIMEOUT"));
    }

    #[test]
    fn env_or_falls_back_for_missing_variable() {
        assert_eq!(
            env_or("SERVICE_CORE_TEST_SURELY_UNSET_VARIABLE", "fallback"),
            "fallback"
        );
    }
}

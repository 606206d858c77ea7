use std::env;

use derive_more::Display;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5555;
const DEFAULT_DATABASE_URL: &str = "app.db";

#[derive(Debug, Display, PartialEq)]
pub enum ConfigError {
    #[display(fmt = "{} must be a port number, got {:?}", _0, _1)]
    InvalidPort(String, String),
    #[display(fmt = "{} must be a boolean, got {:?}", _0, _1)]
    InvalidBool(String, String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub debug: bool,
    /// Render JSON bodies indented over multiple lines.
    pub pretty_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            database_url: DEFAULT_DATABASE_URL.to_string(),
            debug: false,
            pretty_json: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Config, ConfigError> {
        Config::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars<F>(lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort("PORT".to_string(), value.clone()))?,
            None => defaults.port,
        };

        Ok(Config {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),
            debug: parse_bool("APP_DEBUG", lookup("APP_DEBUG"), defaults.debug)?,
            pretty_json: parse_bool("JSON_PRETTY", lookup("JSON_PRETTY"), defaults.pretty_json)?,
        })
    }

    pub fn log_filter(&self) -> &'static str {
        if self.debug {
            "debug"
        } else {
            "info"
        }
    }
}

fn parse_bool(key: &str, value: Option<String>, default: bool) -> Result<bool, ConfigError> {
    let value = match value {
        Some(value) => value,
        None => return Ok(default),
    };

    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool(key.to_string(), value)),
    }
}

use std::{path::PathBuf, str::FromStr};

use crate::i18n::Locale;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Env {
    #[default]
    Dev,
    Staging,
    Production,
}

impl Env {
    /// Read separately from the rest of the config so logging can be set up
    /// before anything else is parsed.
    pub fn from_env() -> Self {
        match var("ENVIRONMENT") {
            Ok(Some(env)) => match env.as_str() {
                "dev" => Env::Dev,
                "staging" => Env::Staging,
                "production" => Env::Production,
                _ => Env::Dev,
            },
            _ => Env::Dev,
        }
    }
}

pub struct ServerConfig {
    pub env: Env,
    pub port: u16,
    pub database_url: String,
    pub db_pool_size: usize,
    pub public_dir: PathBuf,
    /// Installs the verbose per-request logging middleware
    pub request_logging: bool,
    pub locale: Locale,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            env: Env::Dev,
            port: 3000,
            database_url: "comments.db".into(),
            db_pool_size: 4,
            public_dir: PathBuf::from("public"),
            request_logging: false,
            locale: Locale::En,
        }
    }
}

fn var(key: &str) -> Result<Option<String>, String> {
    match std::env::var(key) {
        Ok(env) => Ok(Some(env)),
        Err(e) => match e {
            std::env::VarError::NotPresent => Ok(None),
            std::env::VarError::NotUnicode(_) => Err(format!(
                "Could not get the environment variable `{key}` due to unicode error"
            )),
        },
    }
}

/// Parses `key` if it is set, falls back to `default` otherwise. Invalid values
/// abort startup.
fn parsed_var<T>(key: &str, default: T) -> T
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match var(key) {
        Ok(Some(val)) => match val.parse::<T>() {
            Ok(val) => val,
            Err(e) => {
                tracing::error!("Environment variable `{key}` has an invalid value `{val}`: {e}");
                std::process::exit(1)
            }
        },
        Ok(None) => {
            tracing::debug!("Missing environment variable `{key}`, using the default");
            default
        }
        Err(e) => {
            tracing::error!("{e}");
            std::process::exit(1)
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Flag(bool);

impl FromStr for Flag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(Flag(true)),
            "0" | "false" | "no" | "off" | "" => Ok(Flag(false)),
            other => Err(format!("`{other}` is not a boolean")),
        }
    }
}

impl ServerConfig {
    pub fn new_from_env() -> Self {
        let defaults = ServerConfig::default();

        let db_pool_size = parsed_var("DB_POOL_SIZE", defaults.db_pool_size);
        if db_pool_size == 0 {
            tracing::error!("Environment variable `DB_POOL_SIZE` must be at least 1");
            std::process::exit(1)
        }

        ServerConfig {
            env: Env::from_env(),
            port: parsed_var("PORT", defaults.port),
            database_url: parsed_var("DATABASE_URL", defaults.database_url),
            db_pool_size,
            public_dir: parsed_var("PUBLIC_DIR", defaults.public_dir),
            request_logging: parsed_var("REQUEST_LOGGING", Flag(defaults.request_logging)).0,
            locale: parsed_var("SITE_LOCALE", defaults.locale),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_flag_parsing() {
        assert_eq!("true".parse::<Flag>(), Ok(Flag(true)));
        assert_eq!(" ON ".parse::<Flag>(), Ok(Flag(true)));
        assert_eq!("1".parse::<Flag>(), Ok(Flag(true)));
        assert_eq!("false".parse::<Flag>(), Ok(Flag(false)));
        assert_eq!("".parse::<Flag>(), Ok(Flag(false)));
        assert!("maybe".parse::<Flag>().is_err());
    }

    #[test]
    fn test_missing_variable_falls_back_to_default() {
        assert_eq!(
            parsed_var("BOT_TRAPPER_TEST_SURELY_UNSET_VARIABLE", 42u16),
            42
        );
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 3000);
        assert_eq!(config.database_url, "comments.db");
        assert!(!config.request_logging);
        assert_eq!(config.locale, Locale::En);
        assert_eq!(config.env, Env::Dev);
    }
}

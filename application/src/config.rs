//! [`Config`]-related definitions.

use std::{num::NonZeroU32, time};

use config::{builder::DefaultState, ConfigBuilder, ConfigError};
use secrecy::SecretString;
use serde::{Deserialize, Deserializer};
use service::list;
use smart_default::SmartDefault;

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// REST backend configuration.
    pub backend: Backend,

    /// Lists configuration.
    pub list: List,

    /// Log configuration.
    pub log: Log,
}

impl Config {
    /// Creates a new [`Config`] by:
    /// - loading it from the provided `path` (if any);
    /// - merging it with the environment variables (if any);
    /// - using default values for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(path: impl AsRef<str>) -> Result<Self, ConfigError> {
        ConfigBuilder::<DefaultState>::default()
            .add_source(config::File::with_name(path.as_ref()).required(false))
            .add_source(config::Environment::with_prefix("CONF").separator("."))
            .build()?
            .try_deserialize()
    }
}

/// REST backend configuration.
#[derive(Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Backend {
    /// Base URL of the backend.
    #[default("http://127.0.0.1:3000".to_owned())]
    pub url: String,

    /// Timeout of a single request.
    #[default(time::Duration::from_secs(30))]
    #[serde(with = "humantime_serde")]
    pub timeout: time::Duration,

    /// Bearer token of the administrator.
    #[serde(deserialize_with = "secret")]
    pub token: Option<SecretString>,
}

/// Deserializes an optional [`SecretString`].
fn secret<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<SecretString>, D::Error> {
    Option::<String>::deserialize(deserializer)
        .map(|token| token.map(SecretString::from))
}

impl From<Backend> for service::infra::http::Config {
    fn from(value: Backend) -> Self {
        let Backend {
            url,
            timeout,
            token,
        } = value;
        Self {
            url,
            timeout,
            token,
        }
    }
}

/// Lists configuration.
#[derive(Clone, Copy, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct List {
    /// Quiescence window of the free text search.
    #[default(time::Duration::from_millis(400))]
    #[serde(with = "humantime_serde")]
    pub debounce: time::Duration,

    /// Distance to the bottom of a list, in pixels, below which the next
    /// page is loaded.
    #[default(list::DEFAULT_SCROLL_THRESHOLD)]
    pub scroll_threshold: NonZeroU32,

    /// Page size of infinitely scrolled lists.
    #[default(list::DEFAULT_PAGE_SIZE)]
    pub page_size: NonZeroU32,

    /// Page size of lists showing all the entities.
    #[default(list::DEFAULT_FULL_PAGE_SIZE)]
    pub full_page_size: NonZeroU32,
}

/// Log configuration.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Log {
    /// Log level.
    pub level: LogLevel,
}

/// Log level.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogLevel {
    /// Designates very low priority, often extremely verbose, information.
    Trace,

    /// Designates lower priority information.
    Debug,

    /// Designates useful information.
    #[default]
    Info,

    /// Designates hazardous situations.
    Warn,

    /// Designates very serious errors.
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}

#[cfg(test)]
mod spec {
    use std::time::Duration;

    use super::Config;

    #[test]
    fn defaults_without_file() {
        let conf = Config::new("definitely-missing.toml").unwrap();

        assert_eq!(conf.backend.url, "http://127.0.0.1:3000");
        assert_eq!(conf.backend.timeout, Duration::from_secs(30));
        assert!(conf.backend.token.is_none());
        assert_eq!(conf.list.debounce, Duration::from_millis(400));
        assert_eq!(conf.list.scroll_threshold.get(), 50);
        assert_eq!(conf.list.page_size.get(), 10);
        assert_eq!(conf.list.full_page_size.get(), 20);
    }

    #[test]
    fn rejects_zero_scroll_threshold() {
        let load = |toml: &str| {
            config::Config::builder()
                .add_source(config::File::from_str(
                    toml,
                    config::FileFormat::Toml,
                ))
                .build()
                .unwrap()
                .try_deserialize::<Config>()
        };

        assert!(load("[list]\nscroll_threshold = 0").is_err());
        assert_eq!(
            load("[list]\nscroll_threshold = 1")
                .unwrap()
                .list
                .scroll_threshold
                .get(),
            1,
        );
    }
}

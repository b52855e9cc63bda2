// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader.
//!
//! This module binds one [`ConfigSource`] to one [`ConfigParser`] and keeps the
//! most recently parsed [`ConfigMap`]. Typed access goes through [`ConfigAccess`].

use crate::domain::{ConfigAccess, ConfigError, ConfigMap, Literal, Result, ScopedConfig};
use crate::parser::WalnutParser;
use crate::ports::{ConfigParser, ConfigSource};
use std::fmt;
use std::io::Read;

/// A loaded configuration.
///
/// # Examples
///
/// ```rust
/// use walnut::prelude::*;
///
/// # fn main() -> Result<()> {
/// let config = Config::builder()
///     .with_reader(&b"server\n  port = 8080\n"[..])
///     .build()?;
///
/// assert_eq!(config.int64("server.port")?, 8080);
/// assert_eq!(config.select("server").int64("port")?, 8080);
/// # Ok(())
/// # }
/// ```
pub struct Config {
    source: Box<dyn ConfigSource>,
    parser: Box<dyn ConfigParser>,
    map: ConfigMap,
}

impl Config {
    /// Creates a new configuration builder.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Loads a configuration from `source` with the walnut parser.
    ///
    /// # Errors
    ///
    /// Returns the source's error if its bytes cannot be read, or
    /// [`ConfigError::Parse`] if the document is invalid.
    pub fn load(source: impl ConfigSource + 'static) -> Result<Self> {
        Self::builder().with_source(Box::new(source)).build()
    }

    /// Loads a configuration from a walnut file.
    #[cfg(feature = "file")]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        Self::builder().with_file(path)?.build()
    }

    fn read_map(source: &mut dyn ConfigSource, parser: &dyn ConfigParser) -> Result<ConfigMap> {
        let content = source.read()?;
        parser.parse(&content).map_err(|e| {
            tracing::debug!(source = source.name(), error = %e, "configuration rejected");
            ConfigError::from(e)
        })
    }

    /// Re-reads and re-parses the source.
    ///
    /// The current map is replaced only if both steps succeed; on failure the
    /// previous values stay in place and the error is returned.
    ///
    /// # Errors
    ///
    /// Returns the read or parse error. One-shot sources such as
    /// [`StreamSource`](crate::adapters::StreamSource) always fail here.
    pub fn reload(&mut self) -> Result<()> {
        match Self::read_map(self.source.as_mut(), self.parser.as_ref()) {
            Ok(map) => {
                tracing::debug!(source = self.source.name(), keys = map.len(), "configuration reloaded");
                self.map = map;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(
                    source = self.source.name(),
                    error = %e,
                    "reload failed, keeping previous configuration"
                );
                Err(e)
            }
        }
    }

    /// Returns the current map.
    pub fn map(&self) -> &ConfigMap {
        &self.map
    }

    /// Returns the name of the source this configuration was loaded from.
    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    /// Returns a view of all keys below `prefix`.
    pub fn select(&self, prefix: &str) -> ScopedConfig<'_> {
        self.map.select(prefix)
    }
}

impl ConfigAccess for Config {
    fn lookup(&self, key: &str) -> Option<&Literal> {
        self.map.lookup(key)
    }

    fn keys(&self) -> Vec<&str> {
        self.map.keys()
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("source", &self.source.name())
            .field("keys", &self.map.len())
            .finish()
    }
}

/// Builder for constructing a [`Config`].
///
/// A source is required. The parser defaults to [`WalnutParser`].
///
/// # Examples
///
/// ```rust,no_run
/// use walnut::service::ConfigBuilder;
///
/// # fn main() -> walnut::domain::Result<()> {
/// let config = ConfigBuilder::new()
///     .with_file("/etc/myapp/config.walnut")?
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct ConfigBuilder {
    source: Option<Box<dyn ConfigSource>>,
    parser: Option<Box<dyn ConfigParser>>,
}

impl ConfigBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the configuration source, replacing any previous one.
    pub fn with_source(mut self, source: Box<dyn ConfigSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Uses a walnut file as the configuration source.
    ///
    /// # Errors
    ///
    /// Returns a `SourceError` if the path cannot be resolved.
    #[cfg(feature = "file")]
    pub fn with_file(self, path: impl AsRef<std::path::Path>) -> Result<Self> {
        use crate::adapters::FileSource;
        let source = FileSource::from_file(path)?;
        Ok(self.with_source(Box::new(source)))
    }

    /// Uses a reader as a one-shot configuration source.
    pub fn with_reader<R: Read + Send + 'static>(self, reader: R) -> Self {
        use crate::adapters::StreamSource;
        self.with_source(Box::new(StreamSource::new(reader)))
    }

    /// Sets the parser.
    pub fn with_parser(mut self, parser: Box<dyn ConfigParser>) -> Self {
        self.parser = Some(parser);
        self
    }

    /// Reads and parses the source.
    ///
    /// # Errors
    ///
    /// Returns a `SourceError` if no source was set, the source's own error if it
    /// cannot be read, or [`ConfigError::Parse`] if the document is invalid.
    pub fn build(self) -> Result<Config> {
        let mut source = self
            .source
            .ok_or_else(|| ConfigError::source_error("config", "no configuration source set"))?;
        let parser = self
            .parser
            .unwrap_or_else(|| Box::new(WalnutParser));

        if let Some(path) = source.path() {
            if !parser.supports(path) {
                tracing::warn!(
                    path = %path.display(),
                    expected = ?parser.supported_extensions(),
                    "configuration file has an unexpected extension"
                );
            }
        }

        let map = Config::read_map(source.as_mut(), parser.as_ref())?;
        tracing::debug!(source = source.name(), keys = map.len(), "configuration loaded");

        Ok(Config {
            source,
            parser,
            map,
        })
    }
}

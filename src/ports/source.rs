// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration source trait definition.
//!
//! This module defines the `ConfigSource` trait, the port through which raw
//! configuration bytes enter the system. Sources know nothing about the format;
//! they only acquire bytes and report I/O failures.

use crate::domain::Result;

/// A trait for configuration sources.
///
/// A source hands out the complete contents of one document per call to
/// [`read`](ConfigSource::read). Re-readable sources (files) return fresh contents
/// on every call, which is what makes [`Config::reload`](crate::service::Config::reload)
/// work. One-shot sources (streams) fail on the second call.
///
/// # Thread Safety
///
/// Implementations must be `Send` so a loaded configuration can move between threads.
///
/// # Examples
///
/// ```rust
/// use walnut::ports::ConfigSource;
/// use walnut::domain::Result;
///
/// struct StaticSource(&'static str);
///
/// impl ConfigSource for StaticSource {
///     fn name(&self) -> &str {
///         "static"
///     }
///
///     fn read(&mut self) -> Result<Vec<u8>> {
///         Ok(self.0.as_bytes().to_vec())
///     }
/// }
///
/// let mut source = StaticSource("flag = true");
/// assert_eq!(source.read().unwrap(), b"flag = true");
/// ```
pub trait ConfigSource: Send {
    /// Returns the name of this source.
    ///
    /// The name is used in log output and error messages, e.g. `"file:/etc/app.walnut"`.
    fn name(&self) -> &str;

    /// Reads the complete document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::IoError`](crate::domain::ConfigError::IoError) or
    /// [`ConfigError::SourceError`](crate::domain::ConfigError::SourceError) when the
    /// bytes cannot be acquired.
    fn read(&mut self) -> Result<Vec<u8>>;

    /// Returns the path of the backing file, if there is one.
    fn path(&self) -> Option<&std::path::Path> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ConfigError;

    struct TestSource {
        reads: usize,
    }

    impl ConfigSource for TestSource {
        fn name(&self) -> &str {
            "test"
        }

        fn read(&mut self) -> Result<Vec<u8>> {
            self.reads += 1;
            if self.reads > 1 {
                return Err(ConfigError::source_error("test", "exhausted"));
            }
            Ok(b"key = 1".to_vec())
        }
    }

    #[test]
    fn test_config_source_name() {
        let source = TestSource { reads: 0 };
        assert_eq!(source.name(), "test");
        assert!(source.path().is_none());
    }

    #[test]
    fn test_config_source_read() {
        let mut source = TestSource { reads: 0 };
        assert_eq!(source.read().unwrap(), b"key = 1");
        assert!(matches!(
            source.read(),
            Err(ConfigError::SourceError { .. })
        ));
    }

    #[test]
    fn test_config_source_is_send() {
        fn assert_send<T: Send>() {}
        assert_send::<TestSource>();
        assert_send::<Box<dyn ConfigSource>>();
    }
}

// SPDX-License-Identifier: MIT OR Apache-2.0

//! File configuration source adapter.
//!
//! This module provides a source that reads a walnut document from disk, either
//! from an explicit path or from the OS-appropriate configuration directory.

use crate::domain::{ConfigError, Result};
use crate::ports::ConfigSource;
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

/// Maximum allowed size for a configuration file (10MB)
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// File name looked up by [`FileSource::from_default_location`].
pub const DEFAULT_FILE_NAME: &str = "config.walnut";

fn display_name(path: &Path) -> &str {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("<unknown>")
}

/// Configuration source backed by a file.
///
/// The path is canonicalized once at construction. Every call to
/// [`read`](ConfigSource::read) reads the file again, so a [`Config`] built on a
/// `FileSource` picks up edits on [`reload`].
///
/// [`Config`]: crate::service::Config
/// [`reload`]: crate::service::Config::reload
///
/// # Examples
///
/// ```rust,no_run
/// use walnut::adapters::FileSource;
///
/// // Load from a specific file
/// let source = FileSource::from_file("/etc/myapp/config.walnut").unwrap();
///
/// // Load from the default OS location
/// let source = FileSource::from_default_location("myapp", "com.example").unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct FileSource {
    /// Canonical path to the file
    file_path: PathBuf,
    /// Name reported to logs and errors
    name: String,
}

impl FileSource {
    /// Creates a file source from a specific path.
    ///
    /// # Errors
    ///
    /// Returns a `SourceError` if the path does not exist or cannot be resolved.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use walnut::adapters::FileSource;
    ///
    /// let source = FileSource::from_file("/etc/myapp/config.walnut").unwrap();
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file_path = path.as_ref();

        let canonical_path = file_path
            .canonicalize()
            .map_err(|e| ConfigError::SourceError {
                source_name: "file".to_string(),
                message: format!("Invalid or inaccessible path: {}", display_name(file_path)),
                source: Some(Box::new(e)),
            })?;

        tracing::debug!(path = %canonical_path.display(), "using configuration file");

        Ok(Self {
            name: format!("file:{}", canonical_path.display()),
            file_path: canonical_path,
        })
    }

    /// Creates a file source for `config.walnut` in the default OS configuration
    /// directory for the application.
    ///
    /// # Arguments
    ///
    /// * `app_name` - The application name (e.g., "myapp")
    /// * `qualifier` - The organization/qualifier (e.g., "com.example")
    pub fn from_default_location(app_name: &str, qualifier: &str) -> Result<Self> {
        Self::with_filename(app_name, qualifier, DEFAULT_FILE_NAME)
    }

    /// Creates a file source with a custom file name in the default location.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use walnut::adapters::FileSource;
    ///
    /// let source = FileSource::with_filename("myapp", "com.example", "settings.walnut").unwrap();
    /// ```
    pub fn with_filename(app_name: &str, qualifier: &str, filename: &str) -> Result<Self> {
        let proj_dirs = ProjectDirs::from(qualifier, "", app_name).ok_or_else(|| {
            ConfigError::source_error("file", "Failed to determine project directories")
        })?;

        Self::from_file(proj_dirs.config_dir().join(filename))
    }

    /// Returns the canonical path of the configuration file.
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }
}

impl ConfigSource for FileSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn read(&mut self) -> Result<Vec<u8>> {
        let metadata = fs::metadata(&self.file_path).map_err(|e| ConfigError::SourceError {
            source_name: self.name.clone(),
            message: format!(
                "Failed to read file metadata: {}",
                display_name(&self.file_path)
            ),
            source: Some(Box::new(e)),
        })?;

        if metadata.len() > MAX_FILE_SIZE {
            tracing::warn!(
                path = %self.file_path.display(),
                size = metadata.len(),
                "configuration file exceeds size limit"
            );
            return Err(ConfigError::source_error(
                &self.name,
                format!(
                    "Configuration file too large: {} bytes (max {} bytes)",
                    metadata.len(),
                    MAX_FILE_SIZE
                ),
            ));
        }

        let content = fs::read(&self.file_path).map_err(|e| ConfigError::SourceError {
            source_name: self.name.clone(),
            message: format!(
                "Failed to read configuration file: {}",
                display_name(&self.file_path)
            ),
            source: Some(Box::new(e)),
        })?;

        tracing::debug!(bytes = content.len(), source = %self.name, "read configuration file");
        Ok(content)
    }

    fn path(&self) -> Option<&Path> {
        Some(&self.file_path)
    }
}

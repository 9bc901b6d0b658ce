//! Error types for configuration loading.

use std::path::PathBuf;

use marginal_registry::RegistryError;
use thiserror::Error;

/// Errors raised while loading or compiling configuration.
///
/// These are the only errors the engine reports; annotation failures are
/// silent by construction.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing TOML syntax or shape.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// A prompt or remote-file pattern is not a valid regex.
	#[error("invalid pattern: {0}")]
	InvalidPattern(#[from] regex::Error),

	/// Tables, ring or classifier order refer to something that does not exist.
	#[error(transparent)]
	Registry(#[from] RegistryError),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

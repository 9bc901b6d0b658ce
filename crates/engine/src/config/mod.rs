//! TOML configuration.
//!
//! Every key is optional; an empty document yields the built-in setup:
//!
//! ```toml
//! annotators = ["light", "heavy", "none"]
//! classifiers = ["command", "original", "prompt", "symbol"]
//!
//! [widths]
//! documentation = 80
//! variable-value = 30
//!
//! [tables.heavy]
//! bookmark = "file"
//!
//! [command-categories]
//! switch-to-buffer = "buffer"
//!
//! [[prompt-categories]]
//! pattern = "\\bbuffer\\b"
//! category = "buffer"
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use marginal_annotators::DEFAULT_REMOTE_FILE_PATTERNS;
use marginal_primitives::{Category, Widths};
use marginal_registry::classify::{
	DEFAULT_COMMAND_CATEGORIES, DEFAULT_LISP_MODES, DEFAULT_ORDER, DEFAULT_OUTLINE_COMMANDS, DEFAULT_PROMPT_CATEGORIES,
};
use marginal_registry::tables::DEFAULT_RING;
use serde::Deserialize;

use crate::error::{ConfigError, Result};

mod compile;

/// Process-wide engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
	pub widths: Widths,
	/// Table ring; the first table is active.
	pub annotators: Vec<String>,
	/// Per-table `category = "annotator"` overrides.
	pub tables: BTreeMap<String, BTreeMap<Category, String>>,
	/// Classifier order.
	pub classifiers: Vec<String>,
	pub command_categories: BTreeMap<String, Category>,
	/// Ordered prompt rules; the first match wins.
	pub prompt_categories: Vec<PromptRule>,
	pub symbol: SymbolConfig,
	/// Paths matching any of these are never stat'ed.
	pub remote_file_patterns: Vec<String>,
}

/// A prompt pattern and the category it implies.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct PromptRule {
	pub pattern: String,
	pub category: Category,
}

/// Settings of the symbol classifier's command override.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct SymbolConfig {
	pub outline_commands: Vec<String>,
	pub lisp_modes: Vec<String>,
}

fn strings(items: &[&str]) -> Vec<String> {
	items.iter().map(|s| s.to_string()).collect()
}

impl Default for SymbolConfig {
	fn default() -> Self {
		Self {
			outline_commands: strings(DEFAULT_OUTLINE_COMMANDS),
			lisp_modes: strings(DEFAULT_LISP_MODES),
		}
	}
}

impl Default for Config {
	fn default() -> Self {
		Self {
			widths: Widths::default(),
			annotators: strings(DEFAULT_RING),
			tables: BTreeMap::new(),
			classifiers: strings(DEFAULT_ORDER),
			command_categories: DEFAULT_COMMAND_CATEGORIES
				.iter()
				.map(|(command, category)| (command.to_string(), Category::from_static(*category)))
				.collect(),
			prompt_categories: DEFAULT_PROMPT_CATEGORIES
				.iter()
				.map(|(pattern, category)| PromptRule {
					pattern: pattern.to_string(),
					category: Category::from_static(*category),
				})
				.collect(),
			symbol: SymbolConfig::default(),
			remote_file_patterns: strings(DEFAULT_REMOTE_FILE_PATTERNS),
		}
	}
}

impl Config {
	/// Parses a TOML document.
	pub fn from_toml_str(source: &str) -> Result<Self> {
		Ok(toml::from_str(source)?)
	}

	/// Reads and parses the TOML file at `path`.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let source = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		Self::from_toml_str(&source)
	}
}

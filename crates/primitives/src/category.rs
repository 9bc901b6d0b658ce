use std::borrow::Cow;
use std::fmt;

use serde::Deserialize;

/// Semantic tag selecting which annotator applies to a selection session.
///
/// The set is open: hosts and third-party annotators may introduce their own
/// categories with [`Category::new`]. The associated constants cover the
/// categories the built-in annotators and classifiers know about.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct Category(Cow<'static, str>);

impl Category {
	pub const BOOKMARK: Self = Self::from_static("bookmark");
	pub const BUFFER: Self = Self::from_static("buffer");
	pub const COMMAND: Self = Self::from_static("command");
	pub const CUSTOMIZE_GROUP: Self = Self::from_static("customize-group");
	pub const ENVIRONMENT_VARIABLE: Self = Self::from_static("environment-variable");
	pub const FACE: Self = Self::from_static("face");
	pub const FILE: Self = Self::from_static("file");
	pub const FUNCTION: Self = Self::from_static("function");
	pub const IMENU: Self = Self::from_static("imenu");
	pub const PACKAGE: Self = Self::from_static("package");
	pub const SYMBOL: Self = Self::from_static("symbol");
	pub const VARIABLE: Self = Self::from_static("variable");

	/// Creates a category from a static name without allocating.
	pub const fn from_static(name: &'static str) -> Self {
		Self(Cow::Borrowed(name))
	}

	/// Creates a category from an owned or borrowed name.
	pub fn new(name: impl Into<String>) -> Self {
		Self(Cow::Owned(name.into()))
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for Category {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl AsRef<str> for Category {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

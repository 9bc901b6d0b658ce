use std::fmt;
use std::sync::{Arc, LazyLock};

use marginal_primitives::Widths;
use regex::RegexSet;

use crate::sources::Sources;

/// Paths that are never stat'ed: TRAMP-style `/host:path` and URLs.
pub const DEFAULT_REMOTE_FILE_PATTERNS: &[&str] = &[r"^/[^/:|]+:", r"^[a-zA-Z][a-zA-Z0-9+.-]*://"];

static DEFAULT_REMOTE: LazyLock<RegexSet> =
	LazyLock::new(|| RegexSet::new(DEFAULT_REMOTE_FILE_PATTERNS).expect("built-in remote file patterns compile"));

/// Formatting settings shared by every annotator.
#[derive(Debug, Clone)]
pub struct Settings {
	pub widths: Widths,
	remote_files: RegexSet,
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			widths: Widths::default(),
			remote_files: DEFAULT_REMOTE.clone(),
		}
	}
}

impl Settings {
	pub fn new(widths: Widths, remote_file_patterns: &[impl AsRef<str>]) -> Result<Self, regex::Error> {
		Ok(Self {
			widths,
			remote_files: RegexSet::new(remote_file_patterns)?,
		})
	}

	pub fn with_widths(mut self, widths: Widths) -> Self {
		self.widths = widths;
		self
	}

	/// Whether `path` names a remote file that must not be stat'ed.
	pub fn is_remote(&self, path: &str) -> bool {
		self.remote_files.is_match(path)
	}
}

/// Host rule locating the completed fragment within the full input.
pub trait CompletionBoundaries: Send + Sync {
	/// Given the input before and after the cursor, returns the byte offset in
	/// `before` where the fragment starts and the byte offset in `after` where
	/// it ends.
	fn bounds(&self, before: &str, after: &str) -> (usize, usize);
}

/// The fragment is the whole input.
#[derive(Debug, Clone, Copy, Default)]
pub struct WholeInput;

impl CompletionBoundaries for WholeInput {
	fn bounds(&self, _before: &str, after: &str) -> (usize, usize) {
		(0, after.len())
	}
}

/// The fragment is the current path component.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileNameBoundaries;

impl CompletionBoundaries for FileNameBoundaries {
	fn bounds(&self, before: &str, after: &str) -> (usize, usize) {
		let start = before.rfind('/').map_or(0, |idx| idx + 1);
		let end = after.find('/').unwrap_or(after.len());
		(start, end)
	}
}

/// Snapshot of the selection session's input line.
#[derive(Clone)]
pub struct InputState {
	contents: String,
	cursor: usize,
	boundaries: Arc<dyn CompletionBoundaries>,
}

impl fmt::Debug for InputState {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("InputState").field("contents", &self.contents).field("cursor", &self.cursor).finish_non_exhaustive()
	}
}

impl InputState {
	/// Input with the cursor at the end, completed as a whole.
	pub fn new(contents: impl Into<String>) -> Self {
		let contents = contents.into();
		let cursor = contents.len();
		Self {
			contents,
			cursor,
			boundaries: Arc::new(WholeInput),
		}
	}

	/// Places the cursor at byte offset `cursor`, clamped to a character boundary.
	pub fn with_cursor(mut self, cursor: usize) -> Self {
		let mut cursor = cursor.min(self.contents.len());
		while !self.contents.is_char_boundary(cursor) {
			cursor -= 1;
		}
		self.cursor = cursor;
		self
	}

	pub fn with_boundaries(mut self, boundaries: Arc<dyn CompletionBoundaries>) -> Self {
		self.boundaries = boundaries;
		self
	}

	pub fn contents(&self) -> &str {
		&self.contents
	}

	pub fn cursor(&self) -> usize {
		self.cursor
	}

	/// Input split at the cursor.
	pub fn split(&self) -> (&str, &str) {
		self.contents.split_at(self.cursor)
	}

	pub fn boundaries(&self) -> &dyn CompletionBoundaries {
		&*self.boundaries
	}
}

/// Everything an annotator may read while annotating one candidate.
#[derive(Clone, Copy)]
pub struct AnnotationContext<'a> {
	pub sources: &'a Sources,
	pub settings: &'a Settings,
	/// Input line of the active session, if any.
	pub input: Option<&'a InputState>,
	/// Keymap context bindings are resolved in.
	pub keymap: Option<&'a str>,
}

impl<'a> AnnotationContext<'a> {
	pub fn new(sources: &'a Sources, settings: &'a Settings) -> Self {
		Self {
			sources,
			settings,
			input: None,
			keymap: None,
		}
	}

	pub fn with_input(mut self, input: Option<&'a InputState>) -> Self {
		self.input = input;
		self
	}

	pub fn with_keymap(mut self, keymap: Option<&'a str>) -> Self {
		self.keymap = keymap;
		self
	}

	pub fn widths(&self) -> &'a Widths {
		&self.settings.widths
	}
}

/// A displayed selection candidate.
///
/// `text` is what the selection surface shows. Some surfaces only show a
/// fragment of the real value (one path segment during incremental file
/// completion); such surfaces may attach the fully-qualified value in `full`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Candidate {
	text: String,
	full: Option<String>,
}

impl Candidate {
	pub fn new(text: impl Into<String>) -> Self {
		Self {
			text: text.into(),
			full: None,
		}
	}

	/// Attaches the fully-qualified value supplied by the selection surface.
	pub fn with_full(mut self, full: impl Into<String>) -> Self {
		self.full = Some(full.into());
		self
	}

	/// Text as displayed by the selection surface.
	pub fn text(&self) -> &str {
		&self.text
	}

	/// Fully-qualified value, when the surface provided one.
	pub fn full(&self) -> Option<&str> {
		self.full.as_deref()
	}
}

impl From<&str> for Candidate {
	fn from(text: &str) -> Self {
		Self::new(text)
	}
}

impl From<String> for Candidate {
	fn from(text: String) -> Self {
		Self::new(text)
	}
}

/// Shape of the collection a selection session completes against.
///
/// Used by the symbol classifier to recognise sessions over symbolic names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompletionSourceKind {
	/// The host's dedicated symbol completion table.
	SymbolTable,
	/// A table of interned symbols.
	Obarray,
	/// A plain list of candidates.
	List {
		/// Whether the first element is itself a symbol rather than a string.
		head_is_symbol: bool,
	},
	/// A programmatic completion function.
	Function,
	#[default]
	Unknown,
}

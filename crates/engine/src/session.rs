use std::fmt;
use std::sync::{Arc, OnceLock};

use arc_swap::ArcSwapOption;
use marginal_annotators::InputState;
use marginal_primitives::{Category, CompletionSourceKind};
use marginal_registry::{ClassifierChain, ClassifyContext, TableRing};
use tracing::trace;

/// State of one selection session, from its start until the host drops it.
///
/// Everything memoized here (resolved category, session-local table ring)
/// dies with the session. The input line is shared with every annotator bound
/// to the session, so they always read what the user has typed so far.
#[derive(Default)]
pub struct Session {
	command: Option<String>,
	prompt: String,
	source: CompletionSourceKind,
	origin_modes: Vec<String>,
	input: Arc<ArcSwapOption<InputState>>,
	keymap: Option<String>,
	classifiers: Option<Arc<ClassifierChain>>,
	original: OnceLock<Option<Category>>,
	resolved: OnceLock<Option<Category>>,
	ring_override: ArcSwapOption<TableRing>,
}

impl fmt::Debug for Session {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Session")
			.field("command", &self.command)
			.field("prompt", &self.prompt)
			.field("source", &self.source)
			.field("resolved", &self.resolved.get())
			.finish_non_exhaustive()
	}
}

impl Session {
	pub fn new(prompt: impl Into<String>) -> Self {
		Self {
			prompt: prompt.into(),
			..Self::default()
		}
	}

	pub fn with_source(mut self, source: CompletionSourceKind) -> Self {
		self.source = source;
		self
	}

	/// Mode of the buffer the session was started from, most specific first.
	pub fn with_origin_modes(mut self, modes: impl IntoIterator<Item = impl Into<String>>) -> Self {
		self.origin_modes = modes.into_iter().map(Into::into).collect();
		self
	}

	pub fn with_input(self, input: InputState) -> Self {
		self.set_input(input);
		self
	}

	pub fn with_keymap(mut self, keymap: impl Into<String>) -> Self {
		self.keymap = Some(keymap.into());
		self
	}

	/// Records the command that opened the session.
	pub(crate) fn set_command(&mut self, command: Option<&str>) {
		self.command = command.map(str::to_string);
	}

	/// Classifier chain used for this session instead of the process-wide one.
	pub fn with_classifiers(mut self, chain: ClassifierChain) -> Self {
		self.classifiers = Some(Arc::new(chain));
		self
	}

	/// Replaces the input line as the user types.
	pub fn set_input(&self, input: InputState) {
		self.input.store(Some(Arc::new(input)));
	}

	pub fn command(&self) -> Option<&str> {
		self.command.as_deref()
	}

	pub fn prompt(&self) -> &str {
		&self.prompt
	}

	pub fn source(&self) -> CompletionSourceKind {
		self.source
	}

	/// Current input line.
	pub fn input(&self) -> Option<Arc<InputState>> {
		self.input.load_full()
	}

	/// Live handle on the input line, updated by [`Session::set_input`].
	pub(crate) fn shared_input(&self) -> Arc<ArcSwapOption<InputState>> {
		self.input.clone()
	}

	/// Session-local classifier chain, if one was set.
	pub fn classifiers(&self) -> Option<&Arc<ClassifierChain>> {
		self.classifiers.as_ref()
	}

	pub fn keymap(&self) -> Option<&str> {
		self.keymap.as_deref()
	}

	/// Category the host itself reported, once it has been asked.
	pub fn original_category(&self) -> Option<&Category> {
		self.original.get().and_then(Option::as_ref)
	}

	/// Category resolved by the classifier chain, once it has run.
	pub fn resolved_category(&self) -> Option<&Category> {
		self.resolved.get().and_then(Option::as_ref)
	}

	/// Runs `classify` on the first call only; later calls return the memo.
	pub(crate) fn resolve(
		&self,
		original: impl FnOnce() -> Option<Category>,
		classify: impl FnOnce(&ClassifyContext<'_>) -> Option<Category>,
	) -> Option<&Category> {
		if let Some(resolved) = self.resolved.get() {
			trace!(category = ?resolved, "session category memo hit");
			return resolved.as_ref();
		}
		let original = self.original.get_or_init(original).as_ref();
		let cx = ClassifyContext {
			command: self.command(),
			original,
			prompt: &self.prompt,
			source: self.source,
			origin_modes: &self.origin_modes,
		};
		self.resolved.get_or_init(|| classify(&cx)).as_ref()
	}

	/// Session-local table ring set by a toggle during this session.
	pub fn ring_override(&self) -> Option<Arc<TableRing>> {
		self.ring_override.load_full()
	}

	pub(crate) fn set_ring_override(&self, ring: Arc<TableRing>) {
		self.ring_override.store(Some(ring));
	}
}

//! Ordered heuristics that infer the category of a selection session.

use std::fmt;
use std::sync::Arc;

use marginal_primitives::{Category, CompletionSourceKind};
use rustc_hash::FxHashMap as HashMap;
use tracing::trace;

use crate::error::RegistryError;

mod command;
mod original;
mod prompt;
mod symbol;

pub use command::{CommandClassifier, DEFAULT_COMMAND_CATEGORIES};
pub use original::OriginalClassifier;
pub use prompt::{DEFAULT_PROMPT_CATEGORIES, PromptClassifier, strip_prompt_hints};
pub use symbol::{DEFAULT_LISP_MODES, DEFAULT_OUTLINE_COMMANDS, SymbolClassifier};

/// Default classifier order.
pub const DEFAULT_ORDER: &[&str] = &[CommandClassifier::NAME, OriginalClassifier::NAME, PromptClassifier::NAME, SymbolClassifier::NAME];

/// Read-only view of a session handed to classifiers.
///
/// The host's original category is passed explicitly so classifiers can see
/// what the host said even after the engine replaced it with its own answer.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassifyContext<'a> {
	/// Command that opened the session.
	pub command: Option<&'a str>,
	/// Category reported by the host's own completion metadata.
	pub original: Option<&'a Category>,
	/// Prompt text of the selection session.
	pub prompt: &'a str,
	/// Shape of the collection being completed.
	pub source: CompletionSourceKind,
	/// Mode of the buffer the session was started from, then its ancestors.
	pub origin_modes: &'a [String],
}

/// A zero-argument heuristic over the session environment.
///
/// Implementations must not mutate anything: the chain may be re-run.
pub trait Classify: Send + Sync {
	fn name(&self) -> &str;

	fn classify(&self, cx: &ClassifyContext<'_>) -> Option<Category>;
}

/// Classifiers tried in order; the first to answer wins.
#[derive(Clone, Default)]
pub struct ClassifierChain {
	classifiers: Vec<Arc<dyn Classify>>,
}

impl fmt::Debug for ClassifierChain {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_list().entries(self.classifiers.iter().map(|c| c.name())).finish()
	}
}

impl ClassifierChain {
	pub fn new(classifiers: Vec<Arc<dyn Classify>>) -> Self {
		Self { classifiers }
	}

	pub fn classify(&self, cx: &ClassifyContext<'_>) -> Option<Category> {
		for classifier in &self.classifiers {
			if let Some(category) = classifier.classify(cx) {
				trace!(classifier = classifier.name(), %category, "classified session");
				return Some(category);
			}
		}
		trace!(command = cx.command, "no classifier matched");
		None
	}

	pub fn names(&self) -> Vec<&str> {
		self.classifiers.iter().map(|c| c.name()).collect()
	}

	pub fn is_empty(&self) -> bool {
		self.classifiers.is_empty()
	}
}

/// Named classifiers a chain can be assembled from.
#[derive(Clone, Default)]
pub struct ClassifierSet {
	by_name: HashMap<Box<str>, Arc<dyn Classify>>,
}

impl ClassifierSet {
	pub fn new() -> Self {
		Self::default()
	}

	/// The built-in classifiers with their default settings.
	pub fn builtin() -> Self {
		Self::new()
			.with(Arc::new(CommandClassifier::with_defaults()))
			.with(Arc::new(OriginalClassifier))
			.with(Arc::new(PromptClassifier::with_defaults()))
			.with(Arc::new(SymbolClassifier::with_defaults()))
	}

	/// Adds a classifier, replacing any previous one with the same name.
	pub fn insert(&mut self, classifier: Arc<dyn Classify>) {
		self.by_name.insert(classifier.name().into(), classifier);
	}

	pub fn with(mut self, classifier: Arc<dyn Classify>) -> Self {
		self.insert(classifier);
		self
	}

	pub fn get(&self, name: &str) -> Option<&Arc<dyn Classify>> {
		self.by_name.get(name)
	}

	/// Assembles a chain in the given order.
	pub fn chain(&self, order: &[impl AsRef<str>]) -> Result<ClassifierChain, RegistryError> {
		let classifiers = order
			.iter()
			.map(|name| {
				let name = name.as_ref();
				self.get(name).cloned().ok_or_else(|| RegistryError::UnknownClassifier(name.to_string()))
			})
			.collect::<Result<_, _>>()?;
		Ok(ClassifierChain::new(classifiers))
	}
}

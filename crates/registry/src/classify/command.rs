use marginal_primitives::Category;
use rustc_hash::FxHashMap as HashMap;

use super::{Classify, ClassifyContext};

/// Command to category overrides applied by default.
pub const DEFAULT_COMMAND_CATEGORIES: &[(&str, &str)] = &[("imenu", "imenu"), ("recentf-open", "file"), ("where-is", "command")];

/// Classifies by the command that opened the session.
#[derive(Debug, Clone, Default)]
pub struct CommandClassifier {
	categories: HashMap<String, Category>,
}

impl CommandClassifier {
	pub const NAME: &str = "command";

	pub fn new(categories: impl IntoIterator<Item = (String, Category)>) -> Self {
		Self {
			categories: categories.into_iter().collect(),
		}
	}

	pub fn with_defaults() -> Self {
		Self::new(DEFAULT_COMMAND_CATEGORIES.iter().map(|(command, category)| (command.to_string(), Category::new(*category))))
	}
}

impl Classify for CommandClassifier {
	fn name(&self) -> &str {
		Self::NAME
	}

	fn classify(&self, cx: &ClassifyContext<'_>) -> Option<Category> {
		self.categories.get(cx.command?).cloned()
	}
}

use marginal_primitives::{Category, CompletionSourceKind};

use super::{Classify, ClassifyContext};

/// Commands that list definitions of the current buffer.
pub const DEFAULT_OUTLINE_COMMANDS: &[&str] = &["imenu"];

/// Modes whose definitions are symbols.
pub const DEFAULT_LISP_MODES: &[&str] = &["emacs-lisp-mode", "lisp-mode", "lisp-interaction-mode", "lisp-data-mode", "scheme-mode"];

/// Recognises sessions completing symbolic names.
#[derive(Debug, Clone, Default)]
pub struct SymbolClassifier {
	outline_commands: Vec<String>,
	lisp_modes: Vec<String>,
}

impl SymbolClassifier {
	pub const NAME: &str = "symbol";

	pub fn new(outline_commands: Vec<String>, lisp_modes: Vec<String>) -> Self {
		Self { outline_commands, lisp_modes }
	}

	pub fn with_defaults() -> Self {
		Self::new(
			DEFAULT_OUTLINE_COMMANDS.iter().map(|s| s.to_string()).collect(),
			DEFAULT_LISP_MODES.iter().map(|s| s.to_string()).collect(),
		)
	}

	fn outline_in_lisp_buffer(&self, cx: &ClassifyContext<'_>) -> bool {
		let Some(command) = cx.command else {
			return false;
		};
		self.outline_commands.iter().any(|c| c == command) && cx.origin_modes.iter().any(|mode| self.lisp_modes.contains(mode))
	}
}

impl Classify for SymbolClassifier {
	fn name(&self) -> &str {
		Self::NAME
	}

	fn classify(&self, cx: &ClassifyContext<'_>) -> Option<Category> {
		let symbolic = matches!(
			cx.source,
			CompletionSourceKind::SymbolTable | CompletionSourceKind::Obarray | CompletionSourceKind::List { head_is_symbol: true }
		);
		(symbolic || self.outline_in_lisp_buffer(cx)).then_some(Category::SYMBOL)
	}
}

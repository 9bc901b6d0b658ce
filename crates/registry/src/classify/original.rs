use marginal_primitives::Category;

use super::{Classify, ClassifyContext};

/// Passes through the category the host already reported.
#[derive(Debug, Clone, Copy, Default)]
pub struct OriginalClassifier;

impl OriginalClassifier {
	pub const NAME: &str = "original";
}

impl Classify for OriginalClassifier {
	fn name(&self) -> &str {
		Self::NAME
	}

	fn classify(&self, cx: &ClassifyContext<'_>) -> Option<Category> {
		cx.original.cloned()
	}
}

use std::borrow::Cow;
use std::sync::LazyLock;

use marginal_primitives::Category;
use regex::{Regex, RegexBuilder};

use super::{Classify, ClassifyContext};

/// Prompt pattern rules applied by default, in priority order.
pub const DEFAULT_PROMPT_CATEGORIES: &[(&str, &str)] = &[
	(r"\bcustomize group\b", "customize-group"),
	(r"\bM-x\b", "command"),
	(r"\bpackage\b", "package"),
	(r"\bbookmark\b", "bookmark"),
	(r"\bcolor\b", "color"),
	(r"\bface\b", "face"),
	(r"\benvironment variable\b", "environment-variable"),
	(r"\b(?:function|hook to remove)\b", "function"),
	(r"\bvariable\b", "variable"),
	(r"\binput method\b", "input-method"),
	(r"\bcharset\b", "charset"),
	(r"\bcoding system\b", "coding-system"),
	(r"\bminor mode\b", "minor-mode"),
	(r"\bkill-ring\b", "kill-ring"),
	(r"\btab by name\b", "tab"),
	(r"\blibrary\b", "library"),
	(r"\btheme\b", "theme"),
];

static HINTS: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"(?i)\s*(?:\([^)]*\bdefault\b[^)]*\)|\[[^\]]*\])").expect("prompt hint pattern compiles"));

/// Removes `(default ...)` and `[...]` hints from a prompt.
pub fn strip_prompt_hints(prompt: &str) -> Cow<'_, str> {
	HINTS.replace_all(prompt, "")
}

/// Classifies by matching the prompt text against ordered pattern rules.
#[derive(Debug, Clone, Default)]
pub struct PromptClassifier {
	rules: Vec<(Regex, Category)>,
}

impl PromptClassifier {
	pub const NAME: &str = "prompt";

	/// Compiles `(pattern, category)` rules, matched case-insensitively.
	pub fn new<P, C>(rules: impl IntoIterator<Item = (P, C)>) -> Result<Self, regex::Error>
	where
		P: AsRef<str>,
		C: Into<Category>,
	{
		let rules = rules
			.into_iter()
			.map(|(pattern, category)| Ok((RegexBuilder::new(pattern.as_ref()).case_insensitive(true).build()?, category.into())))
			.collect::<Result<_, regex::Error>>()?;
		Ok(Self { rules })
	}

	pub fn with_defaults() -> Self {
		Self::new(DEFAULT_PROMPT_CATEGORIES.iter().map(|(pattern, category)| (*pattern, Category::from_static(*category))))
			.expect("built-in prompt patterns compile")
	}
}

impl Classify for PromptClassifier {
	fn name(&self) -> &str {
		Self::NAME
	}

	fn classify(&self, cx: &ClassifyContext<'_>) -> Option<Category> {
		let prompt = strip_prompt_hints(cx.prompt);
		self.rules.iter().find(|(pattern, _)| pattern.is_match(&prompt)).map(|(_, category)| category.clone())
	}
}

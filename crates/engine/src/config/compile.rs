use std::sync::Arc;

use marginal_annotators::{Settings, builtins};
use marginal_registry::tables;
use marginal_registry::{
	AnnotatorTable, ClassifierChain, ClassifierSet, CommandClassifier, Entry, OriginalClassifier, PromptClassifier, RegistryError,
	SymbolClassifier, TableRing,
};
use tracing::warn;

use super::Config;
use crate::error::Result;

/// Name accepted in `[tables.*]` to defer a category to the host.
const BUILTIN: &str = "builtin";

/// Configuration with patterns compiled and tables assembled.
pub(crate) struct Compiled {
	pub settings: Settings,
	pub ring: TableRing,
	pub chain: ClassifierChain,
}

impl Config {
	pub(crate) fn compile(&self) -> Result<Compiled> {
		Ok(Compiled {
			settings: Settings::new(self.widths.clone(), self.remote_file_patterns.as_slice())?,
			ring: self.ring()?,
			chain: self.chain()?,
		})
	}

	fn ring(&self) -> Result<TableRing> {
		for name in self.tables.keys().filter(|name| !self.annotators.contains(name)) {
			warn!(table = %name, "annotator table is not in the ring");
		}
		let tables = self.annotators.iter().map(|name| self.table(name).map(Arc::new)).collect::<Result<Vec<_>>>()?;
		Ok(TableRing::new(tables)?)
	}

	fn table(&self, name: &str) -> Result<AnnotatorTable> {
		let overrides = self.tables.get(name);
		let mut table = match (tables::by_name(name), overrides) {
			(Some(table), _) => table,
			(None, Some(_)) => AnnotatorTable::new(name),
			(None, None) => return Err(RegistryError::UnknownTable(name.to_string()).into()),
		};
		for (category, annotator) in overrides.into_iter().flatten() {
			table.insert(category.clone(), entry(annotator)?);
		}
		Ok(table)
	}

	fn chain(&self) -> Result<ClassifierChain> {
		let prompt = PromptClassifier::new(self.prompt_categories.iter().map(|rule| (&rule.pattern, rule.category.clone())))?;
		let set = ClassifierSet::new()
			.with(Arc::new(CommandClassifier::new(self.command_categories.clone())))
			.with(Arc::new(OriginalClassifier))
			.with(Arc::new(prompt))
			.with(Arc::new(SymbolClassifier::new(
				self.symbol.outline_commands.clone(),
				self.symbol.lisp_modes.clone(),
			)));
		Ok(set.chain(self.classifiers.as_slice())?)
	}
}

fn entry(annotator: &str) -> Result<Entry> {
	if annotator == BUILTIN {
		return Ok(Entry::Builtin);
	}
	builtins::by_name(annotator)
		.map(Entry::Annotator)
		.ok_or_else(|| RegistryError::UnknownAnnotator(annotator.to_string()).into())
}

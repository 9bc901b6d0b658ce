use std::fmt;

use indexmap::IndexMap;
use marginal_annotators::Annotator;
use marginal_primitives::Category;

/// What a table maps a category to.
#[derive(Clone)]
pub enum Entry {
	/// Annotate with this annotator.
	Annotator(Annotator),
	/// Defer to the host's own annotation function.
	Builtin,
}

impl Entry {
	pub fn name(&self) -> &str {
		match self {
			Self::Annotator(annotator) => annotator.name(),
			Self::Builtin => "builtin",
		}
	}
}

impl fmt::Debug for Entry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Annotator(annotator) => f.debug_tuple("Annotator").field(&annotator.name()).finish(),
			Self::Builtin => f.write_str("Builtin"),
		}
	}
}

impl From<Annotator> for Entry {
	fn from(annotator: Annotator) -> Self {
		Self::Annotator(annotator)
	}
}

/// Named, ordered mapping from category to annotator.
#[derive(Clone, Debug)]
pub struct AnnotatorTable {
	name: Box<str>,
	entries: IndexMap<Category, Entry>,
}

impl AnnotatorTable {
	pub fn new(name: impl Into<Box<str>>) -> Self {
		Self {
			name: name.into(),
			entries: IndexMap::new(),
		}
	}

	/// Builds a table from `extra` entries layered in front of `base`.
	///
	/// Categories present in both keep the entry from `extra`.
	pub fn layered(name: impl Into<Box<str>>, extra: impl IntoIterator<Item = (Category, Entry)>, base: &AnnotatorTable) -> Self {
		let mut table = Self::new(name);
		for (category, entry) in extra {
			table.entries.entry(category).or_insert(entry);
		}
		for (category, entry) in &base.entries {
			if !table.entries.contains_key(category) {
				table.entries.insert(category.clone(), entry.clone());
			}
		}
		table
	}

	/// Adds or replaces the entry for `category`.
	pub fn with(mut self, category: Category, entry: impl Into<Entry>) -> Self {
		self.insert(category, entry);
		self
	}

	/// Adds or replaces the entry for `category`, keeping its position.
	pub fn insert(&mut self, category: Category, entry: impl Into<Entry>) {
		self.entries.insert(category, entry.into());
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn lookup(&self, category: &Category) -> Option<&Entry> {
		self.entries.get(category)
	}

	/// Categories in table order.
	pub fn categories(&self) -> impl Iterator<Item = &Category> {
		self.entries.keys()
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

use std::sync::Arc;

use crate::error::RegistryError;
use crate::table::AnnotatorTable;

/// Ordered ring of annotator tables. The first table is active.
#[derive(Clone, Debug)]
pub struct TableRing {
	tables: Vec<Arc<AnnotatorTable>>,
}

impl TableRing {
	pub fn new(tables: Vec<Arc<AnnotatorTable>>) -> Result<Self, RegistryError> {
		if tables.is_empty() {
			return Err(RegistryError::EmptyRing);
		}
		Ok(Self { tables })
	}

	/// Ring whose active table is `first`, followed by `rest`.
	pub fn starting_with(first: Arc<AnnotatorTable>, rest: impl IntoIterator<Item = Arc<AnnotatorTable>>) -> Self {
		let mut tables = vec![first];
		tables.extend(rest);
		Self { tables }
	}

	/// The active table.
	pub fn active(&self) -> &Arc<AnnotatorTable> {
		&self.tables[0]
	}

	/// A new ring with the active table moved to the end.
	pub fn rotated(&self) -> Self {
		let mut tables = self.tables.clone();
		tables.rotate_left(1);
		Self { tables }
	}

	pub fn get(&self, name: &str) -> Option<&Arc<AnnotatorTable>> {
		self.tables.iter().find(|table| table.name() == name)
	}

	/// A new ring with the table named `name` replaced by `f(table)`.
	pub fn map_table(&self, name: &str, f: impl FnOnce(&AnnotatorTable) -> AnnotatorTable) -> Result<Self, RegistryError> {
		let idx = self
			.tables
			.iter()
			.position(|table| table.name() == name)
			.ok_or_else(|| RegistryError::UnknownTable(name.to_string()))?;
		let mut tables = self.tables.clone();
		tables[idx] = Arc::new(f(&tables[idx]));
		Ok(Self { tables })
	}

	pub fn names(&self) -> Vec<&str> {
		self.tables.iter().map(|table| table.name()).collect()
	}

	pub fn len(&self) -> usize {
		self.tables.len()
	}

	pub fn is_empty(&self) -> bool {
		self.tables.is_empty()
	}
}

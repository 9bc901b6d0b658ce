use std::sync::Arc;

use arc_swap::ArcSwap;
use marginal_primitives::Category;
use tracing::debug;

use crate::error::RegistryError;
use crate::ring::TableRing;
use crate::table::Entry;

/// Process-wide annotator ring.
///
/// Readers load a snapshot; writers publish a new ring. A session holding a
/// snapshot never observes a toggle or registration made after it loaded.
pub struct Registry {
	ring: ArcSwap<TableRing>,
}

impl Registry {
	pub fn new(ring: TableRing) -> Self {
		Self {
			ring: ArcSwap::from_pointee(ring),
		}
	}

	/// Current ring snapshot.
	pub fn ring(&self) -> Arc<TableRing> {
		self.ring.load_full()
	}

	/// Replaces the ring wholesale.
	pub fn replace(&self, ring: TableRing) {
		self.ring.store(Arc::new(ring));
	}

	/// Looks up `category` in the active table.
	pub fn lookup(&self, category: &Category) -> Option<Entry> {
		self.ring.load().active().lookup(category).cloned()
	}

	/// Rotates the ring by one table and returns the new ring.
	pub fn rotate(&self) -> Arc<TableRing> {
		self.ring.rcu(|ring| ring.rotated());
		self.ring.load_full()
	}

	/// Adds or replaces an entry in the table named `table`.
	///
	/// The table is looked up in the ring being replaced, so a concurrent
	/// [`Registry::replace`] that drops it is reported, not ignored.
	pub fn register(&self, table: &str, category: Category, entry: impl Into<Entry>) -> Result<(), RegistryError> {
		let entry = entry.into();
		let mut outcome = Ok(());
		self.ring.rcu(|ring| match ring.map_table(table, |old| old.clone().with(category.clone(), entry.clone())) {
			Ok(next) => {
				outcome = Ok(());
				next
			}
			Err(err) => {
				outcome = Err(err);
				TableRing::clone(ring)
			}
		});
		outcome?;
		debug!(table, %category, "registered annotator");
		Ok(())
	}
}

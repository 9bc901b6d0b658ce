use std::sync::Arc;

use arc_swap::ArcSwap;
use marginal_annotators::{Annotator, Settings, Sources};
use marginal_primitives::Category;
use marginal_registry::{ClassifierChain, Entry, Registry, TableRing};
use tracing::{debug, trace};

use crate::config::Config;
use crate::error::Result;
use crate::intercept::BoundAnnotator;
use crate::session::Session;

/// Classification, table lookup and toggling over a compiled configuration.
///
/// Configuration lives in swappable cells: a reconfiguration or a global
/// toggle publishes new values, and sessions already holding a snapshot keep
/// it.
pub struct Engine {
	sources: Arc<Sources>,
	settings: ArcSwap<Settings>,
	chain: ArcSwap<ClassifierChain>,
	registry: Registry,
}

impl Engine {
	pub fn new(config: &Config, sources: Sources) -> Result<Self> {
		let compiled = config.compile()?;
		Ok(Self {
			sources: Arc::new(sources),
			settings: ArcSwap::from_pointee(compiled.settings),
			chain: ArcSwap::from_pointee(compiled.chain),
			registry: Registry::new(compiled.ring),
		})
	}

	/// Replaces settings, classifiers and the table ring.
	///
	/// Nothing is replaced if `config` fails to compile.
	pub fn reconfigure(&self, config: &Config) -> Result<()> {
		let compiled = config.compile()?;
		self.settings.store(Arc::new(compiled.settings));
		self.chain.store(Arc::new(compiled.chain));
		self.registry.replace(compiled.ring);
		debug!(ring = ?config.annotators, classifiers = ?config.classifiers, "reconfigured annotation engine");
		Ok(())
	}

	/// Replaces the classifier chain, keeping everything else.
	pub fn replace_classifiers(&self, chain: ClassifierChain) {
		debug!(classifiers = ?chain.names(), "replaced classifier chain");
		self.chain.store(Arc::new(chain));
	}

	pub fn classifiers(&self) -> Arc<ClassifierChain> {
		self.chain.load_full()
	}

	pub fn registry(&self) -> &Registry {
		&self.registry
	}

	pub fn settings(&self) -> Arc<Settings> {
		self.settings.load_full()
	}

	pub fn sources(&self) -> &Arc<Sources> {
		&self.sources
	}

	/// Category of `session`, classified on first use and memoized.
	///
	/// The session's own classifier chain wins over the process-wide one.
	/// `original` supplies the host's own category; it is consulted at most once.
	pub fn category(&self, session: &Session, original: impl FnOnce() -> Option<Category>) -> Option<Category> {
		session
			.resolve(original, |cx| {
				let chain = session.classifiers().cloned().unwrap_or_else(|| self.chain.load_full());
				let category = chain.classify(cx);
				trace!(command = cx.command, prompt = cx.prompt, category = ?category, "resolved session category");
				category
			})
			.cloned()
	}

	/// Ring in effect for `session`: its own toggled ring, or the global one.
	pub fn ring(&self, session: Option<&Session>) -> Arc<TableRing> {
		session.and_then(Session::ring_override).unwrap_or_else(|| self.registry.ring())
	}

	/// Entry of the active table for the session's category.
	pub fn entry_for(&self, session: &Session, original: impl FnOnce() -> Option<Category>) -> Option<Entry> {
		let category = self.category(session, original)?;
		self.ring(Some(session)).active().lookup(&category).cloned()
	}

	/// Binds `annotator` to the current settings and the session's input.
	pub fn bind(&self, session: &Session, annotator: Annotator) -> BoundAnnotator {
		BoundAnnotator::new(annotator, self.sources.clone(), self.settings(), session)
	}

	/// Rotates the table ring by one.
	///
	/// With a session the rotation applies to that session only and is gone
	/// when the session ends; without one it changes the process-wide ring.
	pub fn toggle_annotators(&self, session: Option<&Session>) -> Arc<TableRing> {
		match session {
			Some(session) => {
				let ring = Arc::new(self.ring(Some(session)).rotated());
				session.set_ring_override(ring.clone());
				debug!(scope = "session", active = ring.active().name(), "toggled annotators");
				ring
			}
			None => {
				let ring = self.registry.rotate();
				debug!(scope = "global", active = ring.active().name(), "toggled annotators");
				ring
			}
		}
	}
}

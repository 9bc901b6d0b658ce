//! Host extension points the engine plugs into.
//!
//! The host exposes two seams: a metadata query for the active selection
//! session, answered by a stack of [`MetadataLayer`]s in front of the host's
//! own [`HostMetadata`], and a list of [`SessionStartHook`]s run whenever a
//! session opens. Layers see every query and must pass on the ones they do
//! not handle.

use std::fmt;
use std::sync::Arc;

use arc_swap::ArcSwap;
use marginal_primitives::Category;

use crate::intercept::BoundAnnotator;
use crate::session::Session;

/// Name of a completion metadata property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Property<'a> {
	Category,
	AnnotationFunction,
	Other(&'a str),
}

impl<'a> Property<'a> {
	pub fn from_name(name: &'a str) -> Self {
		match name {
			"category" => Self::Category,
			"annotation-function" => Self::AnnotationFunction,
			other => Self::Other(other),
		}
	}

	pub fn name(&self) -> &'a str {
		match self {
			Self::Category => "category",
			Self::AnnotationFunction => "annotation-function",
			Self::Other(name) => *name,
		}
	}
}

/// Value of a completion metadata property.
#[derive(Debug, Clone)]
pub enum MetadataValue {
	Category(Category),
	Annotator(BoundAnnotator),
	/// Any other host value, opaque to the engine.
	Other(String),
}

impl MetadataValue {
	pub fn as_category(&self) -> Option<&Category> {
		match self {
			Self::Category(category) => Some(category),
			_ => None,
		}
	}

	pub fn into_annotator(self) -> Option<BoundAnnotator> {
		match self {
			Self::Annotator(annotator) => Some(annotator),
			_ => None,
		}
	}
}

/// Answers metadata queries: the host's own table, or the rest of a layer stack.
pub trait HostMetadata {
	fn metadata(&self, session: &Session, property: Property<'_>) -> Option<MetadataValue>;
}

impl<F> HostMetadata for F
where
	F: Fn(&Session, Property<'_>) -> Option<MetadataValue>,
{
	fn metadata(&self, session: &Session, property: Property<'_>) -> Option<MetadataValue> {
		self(session, property)
	}
}

/// Host without any metadata of its own.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHostMetadata;

impl HostMetadata for NoHostMetadata {
	fn metadata(&self, _session: &Session, _property: Property<'_>) -> Option<MetadataValue> {
		None
	}
}

/// Middleware in front of the host's metadata query.
pub trait MetadataLayer: Send + Sync {
	fn name(&self) -> &str;

	/// Answers `property`, or defers to `next` for anything not handled.
	fn query(&self, session: &Session, property: Property<'_>, next: &dyn HostMetadata) -> Option<MetadataValue>;
}

/// Runs once when a selection session opens.
pub trait SessionStartHook: Send + Sync {
	fn name(&self) -> &str;

	/// `command` is the command that is opening the session.
	fn on_start(&self, session: &mut Session, command: Option<&str>);
}

/// Remaining layers of a stack, then the host.
struct Next<'a> {
	layers: &'a [Arc<dyn MetadataLayer>],
	host: &'a dyn HostMetadata,
}

impl HostMetadata for Next<'_> {
	fn metadata(&self, session: &Session, property: Property<'_>) -> Option<MetadataValue> {
		match self.layers.split_first() {
			Some((layer, layers)) => layer.query(session, property, &Next { layers, host: self.host }),
			None => self.host.metadata(session, property),
		}
	}
}

/// Installed layers and hooks.
///
/// Installation publishes a new list; queries in flight keep the list they
/// loaded.
#[derive(Default)]
pub struct ExtensionPoints {
	layers: ArcSwap<Vec<Arc<dyn MetadataLayer>>>,
	start_hooks: ArcSwap<Vec<Arc<dyn SessionStartHook>>>,
}

impl fmt::Debug for ExtensionPoints {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ExtensionPoints")
			.field("layers", &self.layers.load().iter().map(|l| l.name().to_string()).collect::<Vec<_>>())
			.field("start_hooks", &self.start_hooks.load().iter().map(|h| h.name().to_string()).collect::<Vec<_>>())
			.finish()
	}
}

impl ExtensionPoints {
	pub fn new() -> Self {
		Self::default()
	}

	/// Puts `layer` in front of the stack. Returns `false` if a layer with
	/// the same name is already installed.
	pub fn install_layer(&self, layer: Arc<dyn MetadataLayer>) -> bool {
		if self.has_layer(layer.name()) {
			return false;
		}
		self.layers.rcu(|layers| {
			let mut next = Vec::with_capacity(layers.len() + 1);
			next.push(layer.clone());
			next.extend(layers.iter().filter(|l| l.name() != layer.name()).cloned());
			next
		});
		true
	}

	/// Removes the layer named `name`. Returns `false` if it was not installed.
	pub fn remove_layer(&self, name: &str) -> bool {
		if !self.has_layer(name) {
			return false;
		}
		self.layers.rcu(|layers| layers.iter().filter(|l| l.name() != name).cloned().collect::<Vec<_>>());
		true
	}

	pub fn has_layer(&self, name: &str) -> bool {
		self.layers.load().iter().any(|l| l.name() == name)
	}

	/// Appends `hook`. Returns `false` if a hook with the same name is already installed.
	pub fn install_start_hook(&self, hook: Arc<dyn SessionStartHook>) -> bool {
		if self.has_start_hook(hook.name()) {
			return false;
		}
		self.start_hooks.rcu(|hooks| {
			let mut next: Vec<_> = hooks.iter().filter(|h| h.name() != hook.name()).cloned().collect();
			next.push(hook.clone());
			next
		});
		true
	}

	pub fn remove_start_hook(&self, name: &str) -> bool {
		if !self.has_start_hook(name) {
			return false;
		}
		self.start_hooks.rcu(|hooks| hooks.iter().filter(|h| h.name() != name).cloned().collect::<Vec<_>>());
		true
	}

	pub fn has_start_hook(&self, name: &str) -> bool {
		self.start_hooks.load().iter().any(|h| h.name() == name)
	}

	/// Runs every start hook for a session being opened by `command`.
	pub fn start_session(&self, session: &mut Session, command: Option<&str>) {
		for hook in self.start_hooks.load().iter() {
			hook.on_start(session, command);
		}
	}

	/// Answers `property` through the installed layers, falling back to `host`.
	pub fn query(&self, session: &Session, property: Property<'_>, host: &dyn HostMetadata) -> Option<MetadataValue> {
		let layers = self.layers.load();
		Next { layers: layers.as_slice(), host }.metadata(session, property)
	}
}

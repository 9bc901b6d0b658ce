//! The engine's metadata layer and session-start hook.

use std::fmt;
use std::sync::Arc;

use arc_swap::ArcSwapOption;
use marginal_annotators::{AnnotationContext, Annotator, InputState, Settings, Sources, annotate};
use marginal_primitives::{Annotation, Candidate, Category};
use marginal_registry::Entry;

use crate::engine::Engine;
use crate::hooks::{HostMetadata, MetadataLayer, MetadataValue, Property, SessionStartHook};
use crate::session::Session;

/// An annotator together with everything it reads, detached from the session.
///
/// This is what the host receives for `annotation-function`: it can be called
/// once per visible candidate for as long as the host likes. The input line is
/// read at each call, so fragments are resolved against the current input.
#[derive(Clone)]
pub struct BoundAnnotator {
	annotator: Annotator,
	sources: Arc<Sources>,
	settings: Arc<Settings>,
	input: Arc<ArcSwapOption<InputState>>,
	keymap: Option<String>,
}

impl fmt::Debug for BoundAnnotator {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("BoundAnnotator").field("annotator", &self.annotator.name()).finish_non_exhaustive()
	}
}

impl BoundAnnotator {
	pub(crate) fn new(annotator: Annotator, sources: Arc<Sources>, settings: Arc<Settings>, session: &Session) -> Self {
		Self {
			annotator,
			sources,
			settings,
			input: session.shared_input(),
			keymap: session.keymap().map(str::to_string),
		}
	}

	pub fn name(&self) -> &str {
		self.annotator.name()
	}

	/// Decoration for `candidate`, or `None` when there is nothing to show.
	pub fn annotate(&self, candidate: &Candidate) -> Option<Annotation> {
		let input = self.input.load_full();
		let cx = AnnotationContext::new(&self.sources, &self.settings)
			.with_input(input.as_deref())
			.with_keymap(self.keymap.as_deref());
		annotate(&*self.annotator, &cx, candidate)
	}
}

/// Answers `category` and `annotation-function`; passes everything else on.
pub struct AnnotationLayer {
	engine: Arc<Engine>,
}

impl AnnotationLayer {
	pub const NAME: &str = "marginal-annotations";

	pub fn new(engine: Arc<Engine>) -> Self {
		Self { engine }
	}
}

fn host_category(session: &Session, next: &dyn HostMetadata) -> Option<Category> {
	next.metadata(session, Property::Category).and_then(|value| value.as_category().cloned())
}

impl MetadataLayer for AnnotationLayer {
	fn name(&self) -> &str {
		Self::NAME
	}

	fn query(&self, session: &Session, property: Property<'_>, next: &dyn HostMetadata) -> Option<MetadataValue> {
		match property {
			Property::Category => self
				.engine
				.category(session, || host_category(session, next))
				.map(MetadataValue::Category)
				.or_else(|| next.metadata(session, property)),
			Property::AnnotationFunction => match self.engine.entry_for(session, || host_category(session, next)) {
				Some(Entry::Annotator(annotator)) => Some(MetadataValue::Annotator(self.engine.bind(session, annotator))),
				Some(Entry::Builtin) | None => next.metadata(session, property),
			},
			Property::Other(_) => next.metadata(session, property),
		}
	}
}

/// Records the command opening each session.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandCapture;

impl CommandCapture {
	pub const NAME: &str = "marginal-command";
}

impl SessionStartHook for CommandCapture {
	fn name(&self) -> &str {
		Self::NAME
	}

	fn on_start(&self, session: &mut Session, command: Option<&str>) {
		session.set_command(command);
	}
}

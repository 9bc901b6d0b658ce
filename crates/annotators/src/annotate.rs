use std::sync::Arc;

use marginal_primitives::{Annotation, Candidate};

use crate::context::AnnotationContext;
use crate::error::AnnotateError;

/// Produces the decoration for one displayed candidate.
///
/// Implementations must be side-effect free: the host calls them once per
/// visible candidate on every render pass.
pub trait Annotate: Send + Sync {
	/// Name used in configuration and diagnostics.
	fn name(&self) -> &str;

	fn annotate(&self, cx: &AnnotationContext<'_>, candidate: &Candidate) -> Result<Annotation, AnnotateError>;
}

/// Shared handle to an annotator, as stored in annotator tables.
pub type Annotator = Arc<dyn Annotate>;

/// Runs `annotator`, collapsing every error and empty result to `None`.
pub fn annotate(annotator: &dyn Annotate, cx: &AnnotationContext<'_>, candidate: &Candidate) -> Option<Annotation> {
	annotator.annotate(cx, candidate).ok().filter(|annotation| !annotation.is_empty())
}

/// Closure-backed annotator adapter.
pub struct FnAnnotator<F> {
	name: Box<str>,
	f: F,
}

impl<F> FnAnnotator<F> {
	pub fn new(name: impl Into<Box<str>>, f: F) -> Self {
		Self { name: name.into(), f }
	}
}

impl<F> Annotate for FnAnnotator<F>
where
	F: Fn(&AnnotationContext<'_>, &Candidate) -> Result<Annotation, AnnotateError> + Send + Sync,
{
	fn name(&self) -> &str {
		&self.name
	}

	fn annotate(&self, cx: &AnnotationContext<'_>, candidate: &Candidate) -> Result<Annotation, AnnotateError> {
		(self.f)(cx, candidate)
	}
}

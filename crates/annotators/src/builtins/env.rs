use marginal_primitives::{Annotation, Candidate, Field, Fields};

use crate::annotate::Annotate;
use crate::context::AnnotationContext;
use crate::error::AnnotateError;
use crate::faces;

/// Value of an environment variable.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvironmentAnnotator;

impl Annotate for EnvironmentAnnotator {
	fn name(&self) -> &str {
		"environment-variable"
	}

	fn annotate(&self, cx: &AnnotationContext<'_>, candidate: &Candidate) -> Result<Annotation, AnnotateError> {
		// Candidates may come as `NAME=value` pairs.
		let name = candidate.text().split('=').next().unwrap_or_default();
		if name.is_empty() {
			return Err(AnnotateError::MalformedCandidate);
		}
		let value = cx.sources.env.var(name).ok_or(AnnotateError::MissingMetadata)?;
		Fields::new(cx.widths())
			.field(Field::new(value).truncate(cx.widths().documentation).face(faces::VALUE_STRING))
			.build()
			.ok_or(AnnotateError::MissingMetadata)
	}
}

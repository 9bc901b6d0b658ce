use marginal_primitives::{Annotation, Candidate, Segment};

use super::{documentation, symbol_name};
use crate::annotate::Annotate;
use crate::context::AnnotationContext;
use crate::error::AnnotateError;
use crate::faces;
use crate::sources::DocKind;

/// Shows the key binding of a command: ` (C-x b)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BindingAnnotator;

impl BindingAnnotator {
	fn binding(cx: &AnnotationContext<'_>, command: &str) -> Option<Annotation> {
		let key = cx.sources.keys.key_description(command, cx.keymap)?;
		Some(Annotation::new(vec![Segment::Styled {
			text: format!(" ({key})"),
			face: faces::KEY.into(),
		}]))
	}
}

impl Annotate for BindingAnnotator {
	fn name(&self) -> &str {
		"binding"
	}

	fn annotate(&self, cx: &AnnotationContext<'_>, candidate: &Candidate) -> Result<Annotation, AnnotateError> {
		let command = symbol_name(candidate)?;
		Self::binding(cx, command).ok_or(AnnotateError::MissingMetadata)
	}
}

/// Key binding followed by the command's documentation summary.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandAnnotator;

impl Annotate for CommandAnnotator {
	fn name(&self) -> &str {
		"command"
	}

	fn annotate(&self, cx: &AnnotationContext<'_>, candidate: &Candidate) -> Result<Annotation, AnnotateError> {
		let command = symbol_name(candidate)?;
		let binding = BindingAnnotator::binding(cx, command);
		let doc = documentation(cx, cx.sources.symbols.documentation(command, DocKind::Function)).ok();
		match (binding, doc) {
			(Some(binding), Some(doc)) => Ok(binding.concat(doc)),
			(Some(only), None) | (None, Some(only)) => Ok(only),
			(None, None) => Err(AnnotateError::MissingMetadata),
		}
	}
}

//! Built-in annotators, one per supported category.

use std::sync::Arc;

use marginal_primitives::{Annotation, Candidate, Field, Fields};

use crate::annotate::Annotator;
use crate::context::AnnotationContext;
use crate::error::AnnotateError;
use crate::faces;

mod buffer;
mod command;
mod env;
mod file;
mod package;
mod symbol;
mod variable;

pub use buffer::BufferAnnotator;
pub use command::{BindingAnnotator, CommandAnnotator};
pub use env::EnvironmentAnnotator;
pub use file::{FileAnnotator, format_time};
pub use package::{PackageAnnotator, strip_version};
pub use symbol::{FaceAnnotator, FunctionAnnotator, GroupAnnotator, SymbolAnnotator, FACE_SAMPLE};
pub use variable::{VariableAnnotator, render_value};

/// Names accepted by [`by_name`], in documentation order.
pub const NAMES: &[&str] = &[
	"binding",
	"command",
	"symbol",
	"function",
	"variable",
	"face",
	"package",
	"customize-group",
	"buffer",
	"file",
	"environment-variable",
];

/// Looks up a built-in annotator by its configuration name.
pub fn by_name(name: &str) -> Option<Annotator> {
	let annotator: Annotator = match name {
		"binding" => Arc::new(BindingAnnotator),
		"command" => Arc::new(CommandAnnotator),
		"symbol" => Arc::new(SymbolAnnotator),
		"function" => Arc::new(FunctionAnnotator),
		"variable" => Arc::new(VariableAnnotator),
		"face" => Arc::new(FaceAnnotator),
		"package" => Arc::new(PackageAnnotator),
		"customize-group" => Arc::new(GroupAnnotator),
		"buffer" => Arc::new(BufferAnnotator),
		"file" => Arc::new(FileAnnotator),
		"environment-variable" => Arc::new(EnvironmentAnnotator),
		_ => return None,
	};
	Some(annotator)
}

/// Candidate text as a symbol name.
fn symbol_name(candidate: &Candidate) -> Result<&str, AnnotateError> {
	let name = candidate.text();
	if name.is_empty() || name.chars().any(char::is_whitespace) {
		return Err(AnnotateError::MalformedCandidate);
	}
	Ok(name)
}

fn doc_field(cx: &AnnotationContext<'_>, doc: String) -> Option<Field> {
	let doc = doc.trim();
	(!doc.is_empty()).then(|| Field::new(doc).truncate(cx.widths().documentation).face(faces::DOCUMENTATION))
}

/// Right-aligned, width-capped documentation block.
fn documentation(cx: &AnnotationContext<'_>, doc: Option<String>) -> Result<Annotation, AnnotateError> {
	Fields::new(cx.widths())
		.field_opt(doc.and_then(|doc| doc_field(cx, doc)))
		.build()
		.ok_or(AnnotateError::MissingMetadata)
}

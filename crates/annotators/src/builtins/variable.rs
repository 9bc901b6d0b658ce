use marginal_primitives::{Annotation, Candidate, Field, Fields};

use super::{doc_field, symbol_name};
use crate::annotate::Annotate;
use crate::context::AnnotationContext;
use crate::error::AnnotateError;
use crate::faces;
use crate::sources::{DocKind, VariableValue};

/// Renders a variable value and picks the face it is shown in.
pub fn render_value(value: &VariableValue) -> (String, &'static str) {
	match value {
		VariableValue::Unbound => ("#<unbound>".to_string(), faces::VALUE_NIL),
		VariableValue::Nil => ("nil".to_string(), faces::VALUE_NIL),
		VariableValue::True => ("t".to_string(), faces::VALUE_TRUE),
		VariableValue::Number(n) => (n.clone(), faces::VALUE_NUMBER),
		VariableValue::Text(s) => (format!("{s:?}"), faces::VALUE_STRING),
		VariableValue::Symbol(s) => (s.clone(), faces::VALUE_SYMBOL),
		VariableValue::Other(s) => (s.clone(), faces::VALUE),
	}
}

/// Current value and documentation of a variable, each width-capped.
#[derive(Debug, Clone, Copy, Default)]
pub struct VariableAnnotator;

impl Annotate for VariableAnnotator {
	fn name(&self) -> &str {
		"variable"
	}

	fn annotate(&self, cx: &AnnotationContext<'_>, candidate: &Candidate) -> Result<Annotation, AnnotateError> {
		let name = symbol_name(candidate)?;
		let value = cx.sources.symbols.value(name).map(|value| {
			let (text, face) = render_value(&value);
			Field::new(text).truncate(cx.widths().variable_value).face(face)
		});
		let doc = cx.sources.symbols.documentation(name, DocKind::Variable);

		Fields::new(cx.widths())
			.field_opt(value)
			.field_opt(doc.and_then(|doc| doc_field(cx, doc)))
			.build()
			.ok_or(AnnotateError::MissingMetadata)
	}
}

use marginal_primitives::{Annotation, Candidate, Field, Fields};

use super::{doc_field, documentation, symbol_name};
use crate::annotate::Annotate;
use crate::context::AnnotationContext;
use crate::error::AnnotateError;
use crate::faces;
use crate::sources::{DocKind, SymbolClass};

/// Sample text rendered in the face being annotated.
pub const FACE_SAMPLE: &str = "abcdefghijklmNOPQRSTUVWXYZ";

/// Width of the class indicator column.
const CLASS_WIDTH: usize = 5;

/// Class indicator and the documentation matching the symbol's kind.
#[derive(Debug, Clone, Copy, Default)]
pub struct SymbolAnnotator;

impl SymbolAnnotator {
	fn doc_kind(class: SymbolClass) -> Option<DocKind> {
		if class.is_callable() {
			Some(DocKind::Function)
		} else if class.contains(SymbolClass::FACE) {
			Some(DocKind::Face)
		} else if class.contains(SymbolClass::VARIABLE) {
			Some(DocKind::Variable)
		} else if class.contains(SymbolClass::GROUP) {
			Some(DocKind::Group)
		} else {
			None
		}
	}
}

impl Annotate for SymbolAnnotator {
	fn name(&self) -> &str {
		"symbol"
	}

	fn annotate(&self, cx: &AnnotationContext<'_>, candidate: &Candidate) -> Result<Annotation, AnnotateError> {
		let name = symbol_name(candidate)?;
		let class = cx.sources.symbols.class(name);
		if class.is_empty() {
			return Err(AnnotateError::MissingMetadata);
		}

		let doc = Self::doc_kind(class).and_then(|kind| cx.sources.symbols.documentation(name, kind));
		Fields::new(cx.widths())
			.field(Field::new(class.indicator()).left(CLASS_WIDTH).face(faces::SYMBOL_CLASS))
			.field_opt(doc.and_then(|doc| doc_field(cx, doc)))
			.build()
			.ok_or(AnnotateError::MissingMetadata)
	}
}

/// Function documentation.
#[derive(Debug, Clone, Copy, Default)]
pub struct FunctionAnnotator;

impl Annotate for FunctionAnnotator {
	fn name(&self) -> &str {
		"function"
	}

	fn annotate(&self, cx: &AnnotationContext<'_>, candidate: &Candidate) -> Result<Annotation, AnnotateError> {
		let name = symbol_name(candidate)?;
		documentation(cx, cx.sources.symbols.documentation(name, DocKind::Function))
	}
}

/// Face sample followed by the face documentation.
#[derive(Debug, Clone, Copy, Default)]
pub struct FaceAnnotator;

impl Annotate for FaceAnnotator {
	fn name(&self) -> &str {
		"face"
	}

	fn annotate(&self, cx: &AnnotationContext<'_>, candidate: &Candidate) -> Result<Annotation, AnnotateError> {
		let name = symbol_name(candidate)?;
		if !cx.sources.symbols.class(name).contains(SymbolClass::FACE) {
			return Err(AnnotateError::MissingMetadata);
		}

		let doc = cx.sources.symbols.documentation(name, DocKind::Face);
		Fields::new(cx.widths())
			.field(Field::new(FACE_SAMPLE).face(name))
			.field_opt(doc.and_then(|doc| doc_field(cx, doc)))
			.build()
			.ok_or(AnnotateError::MissingMetadata)
	}
}

/// Customization group documentation.
#[derive(Debug, Clone, Copy, Default)]
pub struct GroupAnnotator;

impl Annotate for GroupAnnotator {
	fn name(&self) -> &str {
		"customize-group"
	}

	fn annotate(&self, cx: &AnnotationContext<'_>, candidate: &Candidate) -> Result<Annotation, AnnotateError> {
		let name = symbol_name(candidate)?;
		documentation(cx, cx.sources.symbols.documentation(name, DocKind::Group))
	}
}

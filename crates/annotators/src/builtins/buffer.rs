use marginal_primitives::{Annotation, Candidate, Field, Fields, human_size};

use crate::annotate::Annotate;
use crate::context::AnnotationContext;
use crate::error::AnnotateError;
use crate::faces;
use crate::paths;

const SIZE_WIDTH: usize = 7;
const MODE_WIDTH: usize = 16;

/// Modification and read-only flags, size, mode and backing file of a buffer.
#[derive(Debug, Clone, Copy, Default)]
pub struct BufferAnnotator;

impl Annotate for BufferAnnotator {
	fn name(&self) -> &str {
		"buffer"
	}

	fn annotate(&self, cx: &AnnotationContext<'_>, candidate: &Candidate) -> Result<Annotation, AnnotateError> {
		if candidate.text().is_empty() {
			return Err(AnnotateError::MalformedCandidate);
		}
		let buffer = cx.sources.buffers.buffer(candidate.text()).ok_or(AnnotateError::MissingMetadata)?;

		let file_width = cx.widths().file_name;
		let file = buffer
			.file
			.as_deref()
			.map(|path| paths::abbreviate(path, cx.sources.home.as_deref()))
			.unwrap_or_default();

		Fields::new(cx.widths())
			.field(Field::new(if buffer.modified { "*" } else { " " }).face(faces::MODIFIED))
			.field(Field::new(if buffer.read_only { "%" } else { " " }).face(faces::READ_ONLY))
			.field(Field::new(human_size(buffer.size)).right(SIZE_WIDTH).face(faces::SIZE))
			.field(Field::new(buffer.mode).truncate(MODE_WIDTH).left(MODE_WIDTH).face(faces::MODE))
			.field(Field::new(file).truncate_start(file_width).left(file_width).face(faces::FILE_NAME))
			.build()
			.ok_or(AnnotateError::MissingMetadata)
	}
}

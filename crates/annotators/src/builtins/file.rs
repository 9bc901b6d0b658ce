use std::time::SystemTime;

use chrono::{DateTime, Local};
use marginal_primitives::{Annotation, Candidate, Field, Fields, human_size};
use tracing::trace;

use crate::annotate::Annotate;
use crate::context::AnnotationContext;
use crate::error::AnnotateError;
use crate::faces;
use crate::full_candidate::resolve_full_candidate;
use crate::paths;

const OWNER_WIDTH: usize = 12;
const SIZE_WIDTH: usize = 7;

/// Formats a modification time in local time as `Jan 02 15:04`.
pub fn format_time(time: SystemTime) -> String {
	DateTime::<Local>::from(time).format("%b %d %H:%M").to_string()
}

/// Permission bits, owner, size and modification time of a file.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileAnnotator;

impl Annotate for FileAnnotator {
	fn name(&self) -> &str {
		"file"
	}

	fn annotate(&self, cx: &AnnotationContext<'_>, candidate: &Candidate) -> Result<Annotation, AnnotateError> {
		let full = resolve_full_candidate(candidate, cx.input);
		if full.is_empty() || full.contains('\0') {
			return Err(AnnotateError::MalformedCandidate);
		}
		if cx.settings.is_remote(&full) {
			trace!(path = %full, "skipping remote file");
			return Err(AnnotateError::MissingMetadata);
		}

		let path = paths::expand(&full, cx.sources.home.as_deref());
		let attrs = cx.sources.files.attributes(&path).ok_or(AnnotateError::MissingMetadata)?;

		let user = attrs.user.unwrap_or_else(|| attrs.uid.to_string());
		let group = attrs.group.unwrap_or_else(|| attrs.gid.to_string());
		Fields::new(cx.widths())
			.field(Field::new(attrs.modes).face(faces::MODES))
			.field(Field::new(format!("{user}:{group}")).right(OWNER_WIDTH).face(faces::FILE_OWNER))
			.field(Field::new(human_size(attrs.size)).right(SIZE_WIDTH).face(faces::SIZE))
			.field(Field::new(format_time(attrs.modified)).face(faces::DATE))
			.build()
			.ok_or(AnnotateError::MissingMetadata)
	}
}

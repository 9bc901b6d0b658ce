use marginal_primitives::{Annotation, Candidate, Field, Fields};

use super::{doc_field, symbol_name};
use crate::annotate::Annotate;
use crate::context::AnnotationContext;
use crate::error::AnnotateError;
use crate::faces;
use crate::sources::PackageDesc;

const VERSION_WIDTH: usize = 16;

/// Strips a trailing version suffix: `magit-3.3.0` becomes `magit`.
///
/// The suffix starts at the first `-` after which only digits, dots and
/// dashes remain.
pub fn strip_version(name: &str) -> &str {
	for (idx, _) in name.match_indices('-') {
		let suffix = &name[idx + 1..];
		if idx > 0 && !suffix.is_empty() && suffix.chars().any(|c| c.is_ascii_digit()) && suffix.chars().all(|c| c.is_ascii_digit() || c == '.' || c == '-') {
			return &name[..idx];
		}
	}
	name
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
	Installed,
	BuiltIn,
	Available,
}

impl Status {
	fn label(self) -> &'static str {
		match self {
			Self::Installed => "installed",
			Self::BuiltIn => "built-in",
			Self::Available => "available",
		}
	}
}

/// Version, status and one-line summary of a package.
#[derive(Debug, Clone, Copy, Default)]
pub struct PackageAnnotator;

impl PackageAnnotator {
	fn resolve(cx: &AnnotationContext<'_>, name: &str) -> Option<(PackageDesc, Status)> {
		let packages = &cx.sources.packages;
		packages
			.installed(name)
			.map(|desc| (desc, Status::Installed))
			.or_else(|| packages.built_in(name).map(|desc| (desc, Status::BuiltIn)))
			.or_else(|| packages.available(name).map(|desc| (desc, Status::Available)))
	}
}

impl Annotate for PackageAnnotator {
	fn name(&self) -> &str {
		"package"
	}

	fn annotate(&self, cx: &AnnotationContext<'_>, candidate: &Candidate) -> Result<Annotation, AnnotateError> {
		let name = strip_version(symbol_name(candidate)?);
		let (desc, status) = Self::resolve(cx, name).ok_or(AnnotateError::MissingMetadata)?;

		let version = (!desc.version.is_empty()).then(|| Field::new(desc.version).truncate(VERSION_WIDTH).face(faces::VERSION));
		Fields::new(cx.widths())
			.field_opt(version)
			.field(Field::new(status.label()).left(9).face(faces::STATUS))
			.field_opt(doc_field(cx, desc.summary))
			.build()
			.ok_or(AnnotateError::MissingMetadata)
	}
}

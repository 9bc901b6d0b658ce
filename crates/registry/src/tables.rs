//! Built-in annotator tables.
//!
//! `light` avoids anything that touches the file system or live buffers;
//! `heavy` layers file, buffer and full command annotations on top of it;
//! `none` is empty so every lookup falls through to the host.

use std::sync::Arc;

use marginal_annotators::builtins::{
	BindingAnnotator, BufferAnnotator, CommandAnnotator, EnvironmentAnnotator, FaceAnnotator, FileAnnotator, FunctionAnnotator,
	GroupAnnotator, PackageAnnotator, SymbolAnnotator, VariableAnnotator,
};
use marginal_primitives::Category;

use crate::ring::TableRing;
use crate::table::{AnnotatorTable, Entry};

pub const LIGHT: &str = "light";
pub const HEAVY: &str = "heavy";
pub const NONE: &str = "none";

/// Names of the built-in tables in default ring order.
pub const DEFAULT_RING: &[&str] = &[LIGHT, HEAVY, NONE];

pub fn light() -> AnnotatorTable {
	AnnotatorTable::new(LIGHT)
		.with(Category::COMMAND, Entry::Annotator(Arc::new(BindingAnnotator)))
		.with(Category::CUSTOMIZE_GROUP, Entry::Annotator(Arc::new(GroupAnnotator)))
		.with(Category::VARIABLE, Entry::Annotator(Arc::new(VariableAnnotator)))
		.with(Category::FACE, Entry::Annotator(Arc::new(FaceAnnotator)))
		.with(Category::SYMBOL, Entry::Annotator(Arc::new(SymbolAnnotator)))
		.with(Category::FUNCTION, Entry::Annotator(Arc::new(FunctionAnnotator)))
		.with(Category::PACKAGE, Entry::Annotator(Arc::new(PackageAnnotator)))
		.with(Category::ENVIRONMENT_VARIABLE, Entry::Annotator(Arc::new(EnvironmentAnnotator)))
}

pub fn heavy() -> AnnotatorTable {
	AnnotatorTable::layered(
		HEAVY,
		[
			(Category::FILE, Entry::Annotator(Arc::new(FileAnnotator))),
			(Category::BUFFER, Entry::Annotator(Arc::new(BufferAnnotator))),
			(Category::COMMAND, Entry::Annotator(Arc::new(CommandAnnotator))),
		],
		&light(),
	)
}

pub fn none() -> AnnotatorTable {
	AnnotatorTable::new(NONE)
}

/// Built-in table by name.
pub fn by_name(name: &str) -> Option<AnnotatorTable> {
	match name {
		LIGHT => Some(light()),
		HEAVY => Some(heavy()),
		NONE => Some(none()),
		_ => None,
	}
}

/// Ring of `light`, `heavy` and `none`.
pub fn default_ring() -> TableRing {
	TableRing::starting_with(Arc::new(light()), [Arc::new(heavy()), Arc::new(none())])
}

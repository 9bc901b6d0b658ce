#![cfg_attr(test, allow(unused_crate_dependencies))]
//! Core types shared by the annotation engine: categories, candidates, and the
//! layout algebra used to right-align annotations against a variable viewport.

/// Styled annotation segments and field composition.
pub mod annotation;
/// Selection candidates and completion source descriptors.
pub mod candidate;
/// Open set of semantic completion categories.
pub mod category;
/// Alignment, truncation, and size formatting helpers.
pub mod layout;
/// Configurable column widths.
pub mod widths;

pub use annotation::{Annotation, Field, Fields, Segment};
pub use candidate::{Candidate, CompletionSourceKind};
pub use category::Category;
pub use layout::{AlignSpec, compute_right_align, display_width, human_size, truncate, truncate_start, truncate_with};
pub use widths::Widths;

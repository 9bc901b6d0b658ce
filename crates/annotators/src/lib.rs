#![cfg_attr(test, allow(unused_crate_dependencies))]
//! Candidate annotators and the metadata sources they read from.
//!
//! An annotator turns one displayed candidate into an [`Annotation`]. It reads
//! whatever it needs through the pluggable [`Sources`] and never fails loudly:
//! missing or malformed metadata is reported as an [`AnnotateError`] which the
//! engine turns into "no annotation".
//!
//! # Built-in annotators
//!
//! | name | category | shows |
//! |---|---|---|
//! | `binding` | command | key binding |
//! | `command` | command | key binding and documentation |
//! | `symbol` | symbol | class flags and documentation |
//! | `function` | function | documentation |
//! | `variable` | variable | value and documentation |
//! | `face` | face | styled sample and documentation |
//! | `package` | package | version, status and summary |
//! | `customize-group` | customize-group | documentation |
//! | `buffer` | buffer | flags, size, mode and file |
//! | `file` | file | modes, owner, size and modification time |
//! | `environment-variable` | environment-variable | value |

mod annotate;
pub mod builtins;
mod context;
mod error;
pub mod faces;
mod full_candidate;
mod paths;
pub mod sources;

pub use annotate::{Annotate, Annotator, FnAnnotator, annotate};
pub use context::{
	AnnotationContext, CompletionBoundaries, DEFAULT_REMOTE_FILE_PATTERNS, FileNameBoundaries, InputState, Settings, WholeInput,
};
pub use error::AnnotateError;
pub use full_candidate::resolve_full_candidate;
pub use marginal_primitives::Annotation;
pub use sources::Sources;

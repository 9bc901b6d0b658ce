#![cfg_attr(test, allow(unused_crate_dependencies))]
//! Annotation engine: wires classification and annotator tables into a host's
//! completion sessions.
//!
//! A host owns [`ExtensionPoints`] and a [`Session`] per selection session.
//! [`AnnotationMode::enable`] installs the engine there: from then on each
//! session records the command that opened it, and metadata queries for
//! `category` and `annotation-function` are answered by the engine while
//! every other query reaches the host unchanged.
//!
//! ```no_run
//! # use std::sync::Arc;
//! # use marginal_engine::*;
//! # use marginal_annotators::Sources;
//! # use marginal_primitives::Candidate;
//! let engine = Arc::new(Engine::new(&Config::default(), Sources::default())?);
//! let points = Arc::new(ExtensionPoints::new());
//! AnnotationMode::new(engine, points.clone()).enable();
//!
//! let mut session = Session::new("Describe variable (default car): ");
//! points.start_session(&mut session, Some("describe-variable"));
//! if let Some(annotator) = points.query(&session, Property::AnnotationFunction, &NoHostMetadata).and_then(MetadataValue::into_annotator) {
//! 	let _annotation = annotator.annotate(&Candidate::new("case-fold-search"));
//! }
//! # Ok::<(), ConfigError>(())
//! ```

mod config;
mod engine;
mod error;
mod hooks;
mod intercept;
mod mode;
mod session;

pub use config::{Config, PromptRule, SymbolConfig};
pub use engine::Engine;
pub use error::{ConfigError, Result};
pub use hooks::{ExtensionPoints, HostMetadata, MetadataLayer, MetadataValue, NoHostMetadata, Property, SessionStartHook};
pub use intercept::{AnnotationLayer, BoundAnnotator, CommandCapture};
pub use mode::AnnotationMode;
pub use session::Session;

#[cfg(test)]
mod tests;

#![cfg_attr(test, allow(unused_crate_dependencies))]
//! Category dispatch: annotator tables and the classifier chain.
//!
//! # Tables
//!
//! An [`AnnotatorTable`] maps categories to annotators. Tables form a
//! [`TableRing`]; the first table of the ring is the active one. The
//! process-wide ring lives in a [`Registry`] and is replaced, never mutated,
//! when toggled or extended.
//!
//! # Classifiers
//!
//! A [`ClassifierChain`] tries each [`Classify`] implementation in order and
//! returns the first category reported.

pub mod classify;
mod error;
mod registry;
mod ring;
mod table;
pub mod tables;

pub use classify::{
	ClassifierChain, ClassifierSet, Classify, ClassifyContext, CommandClassifier, OriginalClassifier, PromptClassifier, SymbolClassifier,
};
pub use error::RegistryError;
pub use registry::Registry;
pub use ring::TableRing;
pub use table::{AnnotatorTable, Entry};

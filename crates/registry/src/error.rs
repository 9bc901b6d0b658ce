use thiserror::Error;

/// Errors raised while assembling tables, rings and classifier chains.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
	/// A ring needs at least one table to be active.
	#[error("annotator ring has no tables")]
	EmptyRing,
	/// No table with this name exists.
	#[error("unknown annotator table: {0}")]
	UnknownTable(String),
	/// No classifier with this name is registered.
	#[error("unknown classifier: {0}")]
	UnknownClassifier(String),
	/// No annotator with this name exists.
	#[error("unknown annotator: {0}")]
	UnknownAnnotator(String),
}

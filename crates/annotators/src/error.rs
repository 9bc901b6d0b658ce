use thiserror::Error;

/// Reasons an annotator produced nothing.
///
/// Neither kind is a failure from the host's point of view; both collapse to
/// "no annotation" before leaving the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AnnotateError {
	/// The metadata source has nothing for this candidate.
	#[error("no metadata for candidate")]
	MissingMetadata,
	/// The candidate cannot be read as the kind of object the annotator expects.
	#[error("candidate has an unexpected shape")]
	MalformedCandidate,
}

use std::borrow::Cow;

use marginal_primitives::Candidate;

use crate::context::InputState;

/// Reconstructs the fully-qualified value behind a displayed candidate.
///
/// Prefers the value attached by the selection surface. Otherwise splices
/// the displayed fragment into the input line at the start of the fragment
/// reported by the session's completion boundaries. Without a session the
/// displayed text is returned verbatim.
pub fn resolve_full_candidate<'a>(candidate: &'a Candidate, input: Option<&InputState>) -> Cow<'a, str> {
	if let Some(full) = candidate.full() {
		return Cow::Borrowed(full);
	}
	let Some(input) = input else {
		return Cow::Borrowed(candidate.text());
	};

	let (before, after) = input.split();
	let (start, _) = input.boundaries().bounds(before, after);
	let start = start.min(before.len());
	if start == 0 || !before.is_char_boundary(start) {
		return Cow::Borrowed(candidate.text());
	}
	Cow::Owned(format!("{}{}", &before[..start], candidate.text()))
}

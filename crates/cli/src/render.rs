use std::io::{self, BufRead, Write};

use marginal_engine::BoundAnnotator;
use marginal_primitives::{Candidate, display_width};

/// Writes every candidate line of `input` followed by its aligned annotation.
///
/// Lines that are not valid UTF-8 are decoded lossily rather than ending the
/// listing.
pub fn annotate_lines(mut input: impl BufRead, mut output: impl Write, annotator: Option<&BoundAnnotator>, width: usize) -> io::Result<()> {
	let mut buf = Vec::new();
	loop {
		buf.clear();
		if input.read_until(b'\n', &mut buf)? == 0 {
			break;
		}
		let line = buf.strip_suffix(b"\n").unwrap_or(&buf);
		let line = line.strip_suffix(b"\r").unwrap_or(line);
		let candidate = Candidate::new(String::from_utf8_lossy(line));
		output.write_all(candidate.text().as_bytes())?;
		if let Some(annotation) = annotator.and_then(|annotator| annotator.annotate(&candidate)) {
			output.write_all(annotation.render(width, display_width(candidate.text())).as_bytes())?;
		}
		output.write_all(b"\n")?;
	}
	output.flush()
}

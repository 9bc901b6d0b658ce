use std::fmt;

use crate::layout::{self, AlignSpec, compute_right_align, display_width};
use crate::widths::Widths;

/// A piece of an annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
	/// Filler resolved against the viewport at render time.
	Align(AlignSpec),
	/// Unstyled text.
	Text(String),
	/// Text rendered with a named face.
	Styled { text: String, face: Box<str> },
}

impl Segment {
	fn text(&self) -> Option<&str> {
		match self {
			Self::Align(_) => None,
			Self::Text(text) | Self::Styled { text, .. } => Some(text),
		}
	}
}

/// Decoration appended to a candidate for display only.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Annotation {
	segments: Vec<Segment>,
}

impl Annotation {
	pub fn new(segments: Vec<Segment>) -> Self {
		Self { segments }
	}

	/// An unaligned annotation placed directly after the candidate.
	pub fn plain(text: impl Into<String>) -> Self {
		Self {
			segments: vec![Segment::Text(text.into())],
		}
	}

	pub fn segments(&self) -> &[Segment] {
		&self.segments
	}

	pub fn is_empty(&self) -> bool {
		self.segments.iter().all(|segment| segment.text().is_none_or(str::is_empty))
	}

	/// Concatenates the segments with alignment filler removed.
	pub fn text(&self) -> String {
		self.segments.iter().filter_map(Segment::text).collect()
	}

	/// Appends the segments of `other`.
	pub fn concat(mut self, other: Annotation) -> Self {
		self.segments.extend(other.segments);
		self
	}

	/// Renders the annotation for a row of `viewport_width` columns whose
	/// candidate already occupies `candidate_width` columns.
	pub fn render(&self, viewport_width: usize, candidate_width: usize) -> String {
		let mut out = String::new();
		let mut column = candidate_width;
		for segment in &self.segments {
			match segment {
				Segment::Align(spec) => {
					let filler = spec.filler(viewport_width, column);
					out.extend(std::iter::repeat_n(' ', filler));
					column += filler;
				}
				Segment::Text(text) | Segment::Styled { text, .. } => {
					out.push_str(text);
					column += display_width(text);
				}
			}
		}
		out
	}
}

impl fmt::Display for Annotation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for segment in &self.segments {
			match segment {
				Segment::Align(_) => f.write_str(" ")?,
				Segment::Text(text) | Segment::Styled { text, .. } => f.write_str(text)?,
			}
		}
		Ok(())
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Justify {
	Left(usize),
	Right(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cut {
	End(usize),
	Start(usize),
}

/// One column of an aligned annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
	text: String,
	face: Option<Box<str>>,
	cut: Option<Cut>,
	justify: Option<Justify>,
}

impl Field {
	pub fn new(text: impl Into<String>) -> Self {
		Self {
			text: text.into(),
			face: None,
			cut: None,
			justify: None,
		}
	}

	/// Truncates the field to `width` columns, keeping its beginning.
	pub fn truncate(mut self, width: usize) -> Self {
		self.cut = Some(Cut::End(width));
		self
	}

	/// Truncates the field to `width` columns, keeping its end.
	pub fn truncate_start(mut self, width: usize) -> Self {
		self.cut = Some(Cut::Start(width));
		self
	}

	/// Pads the field on the left to exactly `width` columns (after truncation).
	pub fn right(mut self, width: usize) -> Self {
		self.justify = Some(Justify::Right(width));
		self
	}

	/// Pads the field on the right to exactly `width` columns (after truncation).
	pub fn left(mut self, width: usize) -> Self {
		self.justify = Some(Justify::Left(width));
		self
	}

	pub fn face(mut self, face: impl Into<Box<str>>) -> Self {
		self.face = Some(face.into());
		self
	}

	fn format(self, ellipsis: &str) -> (String, Option<Box<str>>) {
		let mut text = match self.cut {
			Some(Cut::End(width)) => layout::truncate_with(&self.text, width, ellipsis),
			Some(Cut::Start(width)) => layout::truncate_start_with(&self.text, width, ellipsis),
			None => layout::truncate_with(&self.text, usize::MAX, ellipsis),
		};
		match self.justify {
			Some(Justify::Right(width)) => {
				let width_now = display_width(&text);
				if width_now < width {
					text.insert_str(0, &" ".repeat(width - width_now));
				}
			}
			Some(Justify::Left(width)) => {
				let width_now = display_width(&text);
				if width_now < width {
					text.push_str(&" ".repeat(width - width_now));
				}
			}
			None => {}
		}
		(text, self.face)
	}
}

/// Builder for right-aligned, separator-delimited annotations.
///
/// The alignment is computed from the rendered widths of every field and
/// separator, so the last field always ends `margin_right` columns before
/// the right edge.
#[derive(Debug, Clone)]
pub struct Fields<'a> {
	widths: &'a Widths,
	fields: Vec<Field>,
}

impl<'a> Fields<'a> {
	pub fn new(widths: &'a Widths) -> Self {
		Self { widths, fields: Vec::new() }
	}

	pub fn field(mut self, field: Field) -> Self {
		self.fields.push(field);
		self
	}

	/// Adds the field only when present.
	pub fn field_opt(mut self, field: Option<Field>) -> Self {
		self.fields.extend(field);
		self
	}

	/// Builds the annotation, or `None` when no field is left.
	pub fn build(self) -> Option<Annotation> {
		if self.fields.is_empty() {
			return None;
		}

		let separator = " ".repeat(self.widths.separator);
		let mut columns = Vec::with_capacity(self.fields.len() * 2);
		let mut body = Vec::with_capacity(self.fields.len() * 2);
		for (idx, field) in self.fields.into_iter().enumerate() {
			if idx > 0 {
				columns.push(self.widths.separator);
				body.push(Segment::Text(separator.clone()));
			}
			let (text, face) = field.format(&self.widths.ellipsis);
			columns.push(display_width(&text));
			body.push(match face {
				Some(face) => Segment::Styled { text, face },
				None => Segment::Text(text),
			});
		}

		let align = compute_right_align(&columns).with_margin(self.widths.margin_right);
		let mut segments = Vec::with_capacity(body.len() + 1);
		segments.push(Segment::Align(align));
		segments.extend(body);
		Some(Annotation::new(segments))
	}
}

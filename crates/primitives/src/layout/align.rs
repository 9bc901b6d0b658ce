/// Instruction to begin the next character a fixed distance from the right
/// edge of the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AlignSpec {
	from_right: usize,
}

impl AlignSpec {
	pub const fn new(from_right: usize) -> Self {
		Self { from_right }
	}

	/// Distance, in columns, between the aligned column and the right edge.
	pub const fn from_right(self) -> usize {
		self.from_right
	}

	/// Reserves `margin` additional columns at the right edge.
	pub const fn with_margin(self, margin: usize) -> Self {
		Self {
			from_right: self.from_right + margin,
		}
	}

	/// Number of filler columns needed after `occupied` columns so that the
	/// next character lands on the aligned column of a `viewport_width` wide row.
	///
	/// Always at least one so that an annotation never touches its candidate.
	pub fn filler(self, viewport_width: usize, occupied: usize) -> usize {
		viewport_width.saturating_sub(self.from_right).saturating_sub(occupied).max(1)
	}
}

/// Computes the right alignment for a run of columns.
///
/// `column_widths` includes separator widths; the resulting spec places the
/// first column `sum(column_widths)` columns from the right edge.
pub fn compute_right_align(column_widths: &[usize]) -> AlignSpec {
	AlignSpec::new(column_widths.iter().sum())
}

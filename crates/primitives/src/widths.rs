use serde::Deserialize;

/// Column widths used when composing annotations.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Widths {
	/// Maximum width of documentation fields.
	pub documentation: usize,
	/// Maximum width of a rendered variable value.
	pub variable_value: usize,
	/// Maximum width of file names (buffer backing files).
	pub file_name: usize,
	/// Number of spaces between fields.
	pub separator: usize,
	/// Columns kept free at the right edge of the viewport.
	pub margin_right: usize,
	/// Marker appended to truncated text.
	pub ellipsis: String,
}

impl Default for Widths {
	fn default() -> Self {
		Self {
			documentation: 80,
			variable_value: 30,
			file_name: 40,
			separator: 2,
			margin_right: 0,
			ellipsis: crate::layout::ELLIPSIS.to_string(),
		}
	}
}

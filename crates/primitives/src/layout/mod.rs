//! Layout algebra for annotations.
//!
//! Annotations are aligned relative to the right edge of the viewport rather
//! than at an absolute column, so an [`AlignSpec`] is resolved at render time
//! against whatever width the viewport currently has.

mod align;
mod size;
mod truncate;

pub use align::{AlignSpec, compute_right_align};
pub use size::human_size;
pub use truncate::{ELLIPSIS, char_width, display_width, first_line, truncate, truncate_start, truncate_start_with, truncate_with};

#[cfg(test)]
mod tests;

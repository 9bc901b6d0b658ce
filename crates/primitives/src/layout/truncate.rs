use unicode_width::UnicodeWidthChar;

/// Default marker appended to truncated text.
pub const ELLIPSIS: &str = "…";

/// Returns the text before the first line break.
pub fn first_line(text: &str) -> &str {
	text.split(['\n', '\r']).next().unwrap_or_default()
}

/// Display width of a single character after control-character substitution.
///
/// C0 controls and DEL render in caret notation (`^A`) and take two columns.
/// C1 controls are stripped and take none.
pub fn char_width(c: char) -> usize {
	match caret(c) {
		Some(_) => 2,
		None if is_c1(c) => 0,
		None => c.width().unwrap_or(0),
	}
}

/// Display width of `text` as it would be rendered on one line.
pub fn display_width(text: &str) -> usize {
	text.chars().map(char_width).sum()
}

/// Collapses `text` to its first line and trims it to at most `width` columns,
/// ending it with [`ELLIPSIS`] when anything was cut.
pub fn truncate(text: &str, width: usize) -> String {
	truncate_with(text, width, ELLIPSIS)
}

/// [`truncate`] with a caller-chosen ellipsis.
pub fn truncate_with(text: &str, width: usize, ellipsis: &str) -> String {
	let line = first_line(text);
	if display_width(line) <= width {
		return escape(line.chars());
	}

	let (budget, marker) = ellipsis_budget(width, ellipsis);
	let mut out = String::with_capacity(line.len());
	let mut used = 0;
	for c in line.chars() {
		let w = char_width(c);
		if used + w > budget {
			break;
		}
		used += w;
		push_escaped(&mut out, c);
	}
	out.push_str(marker);
	out
}

/// Like [`truncate`] but keeps the end of the text, prefixing the ellipsis.
///
/// Used for file paths where the trailing components carry the information.
pub fn truncate_start(text: &str, width: usize) -> String {
	truncate_start_with(text, width, ELLIPSIS)
}

/// [`truncate_start`] with a caller-chosen ellipsis.
pub fn truncate_start_with(text: &str, width: usize, ellipsis: &str) -> String {
	let line = first_line(text);
	if display_width(line) <= width {
		return escape(line.chars());
	}

	let (budget, marker) = ellipsis_budget(width, ellipsis);
	let mut kept = Vec::new();
	let mut used = 0;
	for c in line.chars().rev() {
		let w = char_width(c);
		if used + w > budget {
			break;
		}
		used += w;
		kept.push(c);
	}
	let mut out = marker.to_string();
	out.push_str(&escape(kept.into_iter().rev()));
	out
}

/// Splits `width` between kept text and the ellipsis. An ellipsis wider than
/// the whole budget is dropped.
fn ellipsis_budget(width: usize, ellipsis: &str) -> (usize, &str) {
	let marker_width = display_width(ellipsis);
	if marker_width > width { (width, "") } else { (width - marker_width, ellipsis) }
}

fn escape(chars: impl Iterator<Item = char>) -> String {
	let mut out = String::new();
	for c in chars {
		push_escaped(&mut out, c);
	}
	out
}

fn push_escaped(out: &mut String, c: char) {
	if let Some(printable) = caret(c) {
		out.push('^');
		out.push(printable);
	} else if !is_c1(c) {
		out.push(c);
	}
}

fn caret(c: char) -> Option<char> {
	match c {
		'\0'..='\x1f' | '\x7f' => char::from_u32(c as u32 ^ 0x40),
		_ => None,
	}
}

fn is_c1(c: char) -> bool {
	('\u{80}'..='\u{9f}').contains(&c)
}

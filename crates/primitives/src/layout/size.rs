const UNITS: [&str; 6] = ["K", "M", "G", "T", "P", "E"];

/// Formats a byte count with binary units: `512`, `2.0K`, `15M`.
///
/// Values below ten keep one decimal place; larger values are rounded. The
/// unit is chosen after rounding, so `1023.99K` is shown as `1.0M`.
pub fn human_size(bytes: u64) -> String {
	if bytes < 1024 {
		return bytes.to_string();
	}

	let mut value = bytes as f64 / 1024.0;
	let mut idx = 0;
	loop {
		let rounded = if value < 10.0 { (value * 10.0).round() / 10.0 } else { value.round() };
		if rounded < 1024.0 || idx == UNITS.len() - 1 {
			let unit = UNITS[idx];
			return if rounded < 10.0 { format!("{rounded:.1}{unit}") } else { format!("{rounded:.0}{unit}") };
		}
		value /= 1024.0;
		idx += 1;
	}
}

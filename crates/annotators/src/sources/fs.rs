use std::fs::Metadata;
use std::path::Path;

use super::{FileAttributes, FileSource};

/// Stats the local file system without following symlinks.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsAttributes;

impl FileSource for FsAttributes {
	fn attributes(&self, path: &Path) -> Option<FileAttributes> {
		let meta = std::fs::symlink_metadata(path).ok()?;
		let modified = meta.modified().ok()?;
		let (modes, uid, gid) = ownership(&meta);
		Some(FileAttributes {
			modes,
			uid,
			gid,
			user: None,
			group: None,
			size: meta.len(),
			modified,
		})
	}
}

#[cfg(unix)]
fn ownership(meta: &Metadata) -> (String, u32, u32) {
	use std::os::unix::fs::MetadataExt;
	(mode_string(meta.mode()), meta.uid(), meta.gid())
}

#[cfg(not(unix))]
fn ownership(meta: &Metadata) -> (String, u32, u32) {
	let kind = if meta.is_dir() { 0o040000 } else if meta.is_symlink() { 0o120000 } else { 0o100000 };
	let perms = if meta.permissions().readonly() { 0o444 } else { 0o644 };
	(mode_string(kind | perms), 0, 0)
}

/// Renders a Unix mode word as a ten-character permission string.
pub fn mode_string(mode: u32) -> String {
	let kind = match mode & 0o170000 {
		0o040000 => 'd',
		0o120000 => 'l',
		0o020000 => 'c',
		0o060000 => 'b',
		0o010000 => 'p',
		0o140000 => 's',
		_ => '-',
	};

	let mut out = String::with_capacity(10);
	out.push(kind);
	for (shift, special, special_char) in [(6, 0o4000, 's'), (3, 0o2000, 's'), (0, 0o1000, 't')] {
		let bits = (mode >> shift) & 0o7;
		out.push(if bits & 0o4 != 0 { 'r' } else { '-' });
		out.push(if bits & 0o2 != 0 { 'w' } else { '-' });
		let exec = bits & 0o1 != 0;
		out.push(match (mode & special != 0, exec) {
			(true, true) => special_char,
			(true, false) => special_char.to_ascii_uppercase(),
			(false, true) => 'x',
			(false, false) => '-',
		});
	}
	out
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	#[rstest]
	#[case(0o100644, "-rw-r--r--")]
	#[case(0o040755, "drwxr-xr-x")]
	#[case(0o120777, "lrwxrwxrwx")]
	#[case(0o104755, "-rwsr-xr-x")]
	#[case(0o041777, "drwxrwxrwt")]
	#[case(0o102640, "-rw-r-S---")]
	fn mode_string_renders_permission_bits(#[case] mode: u32, #[case] expected: &str) {
		assert_eq!(mode_string(mode), expected);
	}

	#[test]
	fn missing_file_has_no_attributes() {
		let dir = tempfile::tempdir().expect("create tempdir");
		assert!(FsAttributes.attributes(&dir.path().join("absent")).is_none());
	}

	#[test]
	fn attributes_report_size() {
		let dir = tempfile::tempdir().expect("create tempdir");
		let path = dir.path().join("data.bin");
		std::fs::write(&path, vec![0u8; 2048]).expect("write file");

		let attrs = FsAttributes.attributes(&path).expect("file exists");
		assert_eq!(attrs.size, 2048);
		assert_eq!(attrs.modes.len(), 10);
		assert!(attrs.modes.starts_with('-'));
	}
}

use std::path::{Path, PathBuf};

/// Replaces a leading home directory with `~`.
pub(crate) fn abbreviate(path: &Path, home: Option<&Path>) -> String {
	if let Some(home) = home
		&& let Ok(rest) = path.strip_prefix(home)
	{
		if rest.as_os_str().is_empty() {
			return "~".to_string();
		}
		return format!("~/{}", rest.display());
	}
	path.display().to_string()
}

/// Expands a leading `~/` against the home directory.
pub(crate) fn expand(path: &str, home: Option<&Path>) -> PathBuf {
	match (path.strip_prefix("~/"), home) {
		(Some(rest), Some(home)) => home.join(rest),
		_ if path == "~" => home.map_or_else(|| PathBuf::from(path), Path::to_path_buf),
		_ => PathBuf::from(path),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn abbreviate_replaces_home_prefix() {
		let home = Path::new("/home/ada");
		assert_eq!(abbreviate(Path::new("/home/ada/notes/todo.org"), Some(home)), "~/notes/todo.org");
		assert_eq!(abbreviate(Path::new("/home/ada"), Some(home)), "~");
		assert_eq!(abbreviate(Path::new("/etc/hosts"), Some(home)), "/etc/hosts");
		assert_eq!(abbreviate(Path::new("/home/adam/x"), Some(home)), "/home/adam/x");
	}

	#[test]
	fn expand_resolves_tilde() {
		let home = Path::new("/home/ada");
		assert_eq!(expand("~/init.el", Some(home)), PathBuf::from("/home/ada/init.el"));
		assert_eq!(expand("~", Some(home)), PathBuf::from("/home/ada"));
		assert_eq!(expand("~/init.el", None), PathBuf::from("~/init.el"));
		assert_eq!(expand("src/lib.rs", Some(home)), PathBuf::from("src/lib.rs"));
	}
}

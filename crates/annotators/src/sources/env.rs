use super::EnvironmentSource;

/// Reads variables from the current process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl EnvironmentSource for ProcessEnvironment {
	fn var(&self, name: &str) -> Option<String> {
		if name.is_empty() || name.contains(['=', '\0']) {
			return None;
		}
		std::env::var_os(name).map(|value| value.to_string_lossy().into_owned())
	}
}

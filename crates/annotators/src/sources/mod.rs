//! Read-only metadata sources consumed by the annotators.
//!
//! Every source is an opaque collaborator owned by the host. Lookups are
//! synchronous; a source backed by asynchronous data should answer `None`
//! rather than block, which the annotators treat as "nothing to show".

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

use bitflags::bitflags;

mod env;
mod fs;
mod memory;

pub use env::ProcessEnvironment;
pub use fs::{FsAttributes, mode_string};
pub use memory::MemorySources;

/// Looks up the active key binding of a command.
pub trait KeyBindings: Send + Sync {
	/// Human-readable key description (`C-x b`) for `command` within the
	/// optional keymap context.
	fn key_description(&self, command: &str, keymap: Option<&str>) -> Option<String>;
}

/// Namespace a documentation string is looked up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocKind {
	Function,
	Variable,
	Face,
	Group,
}

bitflags! {
	/// What a symbol is bound to.
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
	pub struct SymbolClass: u8 {
		const FUNCTION = 1 << 0;
		const COMMAND = 1 << 1;
		const MACRO = 1 << 2;
		const VARIABLE = 1 << 3;
		const CUSTOM = 1 << 4;
		const FACE = 1 << 5;
		const GROUP = 1 << 6;
	}
}

impl SymbolClass {
	/// Short class indicator: `f`/`c`/`m`, then `v`, `u`, `a`, `g`.
	pub fn indicator(self) -> String {
		let mut out = String::new();
		if self.contains(Self::COMMAND) {
			out.push('c');
		} else if self.contains(Self::MACRO) {
			out.push('m');
		} else if self.contains(Self::FUNCTION) {
			out.push('f');
		}
		for (flag, c) in [(Self::VARIABLE, 'v'), (Self::CUSTOM, 'u'), (Self::FACE, 'a'), (Self::GROUP, 'g')] {
			if self.contains(flag) {
				out.push(c);
			}
		}
		out
	}

	/// Whether the symbol names something callable.
	pub fn is_callable(self) -> bool {
		self.intersects(Self::FUNCTION | Self::COMMAND | Self::MACRO)
	}
}

/// Current value of a variable, as far as the annotators care to render it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VariableValue {
	Unbound,
	Nil,
	True,
	Number(String),
	Text(String),
	Symbol(String),
	Other(String),
}

/// Documentation, classification and values of named symbols.
pub trait SymbolSource: Send + Sync {
	fn documentation(&self, symbol: &str, kind: DocKind) -> Option<String>;

	/// Empty when the symbol is unknown.
	fn class(&self, symbol: &str) -> SymbolClass;

	/// `None` when the symbol is not a variable at all.
	fn value(&self, symbol: &str) -> Option<VariableValue>;
}

/// Attributes of a file-system entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileAttributes {
	/// Permission string, e.g. `-rw-r--r--`.
	pub modes: String,
	pub uid: u32,
	pub gid: u32,
	/// Owner name when the source can resolve it.
	pub user: Option<String>,
	/// Group name when the source can resolve it.
	pub group: Option<String>,
	pub size: u64,
	pub modified: SystemTime,
}

/// Looks up file attributes by path.
pub trait FileSource: Send + Sync {
	fn attributes(&self, path: &Path) -> Option<FileAttributes>;
}

/// Live buffer (editing session) as seen by the buffer annotator.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BufferInfo {
	pub modified: bool,
	pub read_only: bool,
	/// Major-mode-like kind tag.
	pub mode: String,
	pub size: u64,
	/// Backing file, if any.
	pub file: Option<PathBuf>,
}

/// Looks up live buffers by display name.
pub trait BufferSource: Send + Sync {
	fn buffer(&self, name: &str) -> Option<BufferInfo>;
}

/// Package registry entry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PackageDesc {
	pub version: String,
	pub summary: String,
}

/// Package registries, consulted in the order installed, built-in, available.
pub trait PackageSource: Send + Sync {
	fn installed(&self, name: &str) -> Option<PackageDesc>;
	fn built_in(&self, name: &str) -> Option<PackageDesc>;
	fn available(&self, name: &str) -> Option<PackageDesc>;
}

/// Environment variable lookup.
pub trait EnvironmentSource: Send + Sync {
	fn var(&self, name: &str) -> Option<String>;
}

/// Source that knows nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoMetadata;

impl KeyBindings for NoMetadata {
	fn key_description(&self, _command: &str, _keymap: Option<&str>) -> Option<String> {
		None
	}
}

impl SymbolSource for NoMetadata {
	fn documentation(&self, _symbol: &str, _kind: DocKind) -> Option<String> {
		None
	}

	fn class(&self, _symbol: &str) -> SymbolClass {
		SymbolClass::empty()
	}

	fn value(&self, _symbol: &str) -> Option<VariableValue> {
		None
	}
}

impl BufferSource for NoMetadata {
	fn buffer(&self, _name: &str) -> Option<BufferInfo> {
		None
	}
}

impl PackageSource for NoMetadata {
	fn installed(&self, _name: &str) -> Option<PackageDesc> {
		None
	}

	fn built_in(&self, _name: &str) -> Option<PackageDesc> {
		None
	}

	fn available(&self, _name: &str) -> Option<PackageDesc> {
		None
	}
}

impl FileSource for NoMetadata {
	fn attributes(&self, _path: &Path) -> Option<FileAttributes> {
		None
	}
}

impl EnvironmentSource for NoMetadata {
	fn var(&self, _name: &str) -> Option<String> {
		None
	}
}

/// The set of metadata sources an engine annotates from.
///
/// Defaults to the local file system, the process environment and the user's
/// home directory; host-owned sources start empty.
#[derive(Clone)]
pub struct Sources {
	pub keys: Arc<dyn KeyBindings>,
	pub symbols: Arc<dyn SymbolSource>,
	pub files: Arc<dyn FileSource>,
	pub buffers: Arc<dyn BufferSource>,
	pub packages: Arc<dyn PackageSource>,
	pub env: Arc<dyn EnvironmentSource>,
	/// Directory abbreviated to `~`.
	pub home: Option<PathBuf>,
}

impl Default for Sources {
	fn default() -> Self {
		Self {
			keys: Arc::new(NoMetadata),
			symbols: Arc::new(NoMetadata),
			files: Arc::new(FsAttributes),
			buffers: Arc::new(NoMetadata),
			packages: Arc::new(NoMetadata),
			env: Arc::new(ProcessEnvironment),
			home: dirs::home_dir(),
		}
	}
}

impl Sources {
	/// Sources that know nothing, not even the file system.
	pub fn empty() -> Self {
		Self {
			keys: Arc::new(NoMetadata),
			symbols: Arc::new(NoMetadata),
			files: Arc::new(NoMetadata),
			buffers: Arc::new(NoMetadata),
			packages: Arc::new(NoMetadata),
			env: Arc::new(NoMetadata),
			home: None,
		}
	}

	/// Uses one in-memory store for every source.
	pub fn from_memory(memory: MemorySources) -> Self {
		let memory = Arc::new(memory);
		Self {
			keys: memory.clone(),
			symbols: memory.clone(),
			files: memory.clone(),
			buffers: memory.clone(),
			packages: memory.clone(),
			env: memory,
			home: None,
		}
	}

	pub fn with_keys(mut self, keys: Arc<dyn KeyBindings>) -> Self {
		self.keys = keys;
		self
	}

	pub fn with_symbols(mut self, symbols: Arc<dyn SymbolSource>) -> Self {
		self.symbols = symbols;
		self
	}

	pub fn with_files(mut self, files: Arc<dyn FileSource>) -> Self {
		self.files = files;
		self
	}

	pub fn with_buffers(mut self, buffers: Arc<dyn BufferSource>) -> Self {
		self.buffers = buffers;
		self
	}

	pub fn with_packages(mut self, packages: Arc<dyn PackageSource>) -> Self {
		self.packages = packages;
		self
	}

	pub fn with_env(mut self, env: Arc<dyn EnvironmentSource>) -> Self {
		self.env = env;
		self
	}

	pub fn with_home(mut self, home: Option<PathBuf>) -> Self {
		self.home = home;
		self
	}
}

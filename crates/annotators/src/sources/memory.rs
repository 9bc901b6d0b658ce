use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap as HashMap;

use super::{
	BufferInfo, BufferSource, DocKind, EnvironmentSource, FileAttributes, FileSource, KeyBindings, PackageDesc, PackageSource, SymbolClass,
	SymbolSource, VariableValue,
};

#[derive(Debug, Clone, Default)]
struct SymbolEntry {
	class: SymbolClass,
	docs: HashMap<DocKind, String>,
	value: Option<VariableValue>,
}

/// In-memory implementation of every metadata source.
///
/// Useful for hosts that snapshot their metadata up front, and for tests.
#[derive(Debug, Clone, Default)]
pub struct MemorySources {
	bindings: HashMap<(String, Option<String>), String>,
	symbols: HashMap<String, SymbolEntry>,
	files: HashMap<PathBuf, FileAttributes>,
	buffers: HashMap<String, BufferInfo>,
	installed: HashMap<String, PackageDesc>,
	built_in: HashMap<String, PackageDesc>,
	available: HashMap<String, PackageDesc>,
	env: HashMap<String, String>,
}

impl MemorySources {
	pub fn new() -> Self {
		Self::default()
	}

	/// Binds `command` to `key` in the global keymap.
	pub fn binding(self, command: &str, key: &str) -> Self {
		self.binding_in(command, None, key)
	}

	/// Binds `command` to `key` in a specific keymap context.
	pub fn binding_in(mut self, command: &str, keymap: Option<&str>, key: &str) -> Self {
		self.bindings.insert((command.to_string(), keymap.map(str::to_string)), key.to_string());
		self
	}

	/// Adds classification flags to a symbol.
	pub fn symbol(mut self, name: &str, class: SymbolClass) -> Self {
		self.symbols.entry(name.to_string()).or_default().class |= class;
		self
	}

	/// Sets the documentation of a symbol in one namespace.
	///
	/// Also marks the symbol with the class matching the namespace.
	pub fn doc(mut self, name: &str, kind: DocKind, doc: &str) -> Self {
		let entry = self.symbols.entry(name.to_string()).or_default();
		entry.class |= match kind {
			DocKind::Function => SymbolClass::FUNCTION,
			DocKind::Variable => SymbolClass::VARIABLE,
			DocKind::Face => SymbolClass::FACE,
			DocKind::Group => SymbolClass::GROUP,
		};
		entry.docs.insert(kind, doc.to_string());
		self
	}

	/// Sets the current value of a variable.
	pub fn value(mut self, name: &str, value: VariableValue) -> Self {
		let entry = self.symbols.entry(name.to_string()).or_default();
		entry.class |= SymbolClass::VARIABLE;
		entry.value = Some(value);
		self
	}

	pub fn file(mut self, path: impl Into<PathBuf>, attributes: FileAttributes) -> Self {
		self.files.insert(path.into(), attributes);
		self
	}

	pub fn buffer(mut self, name: &str, info: BufferInfo) -> Self {
		self.buffers.insert(name.to_string(), info);
		self
	}

	pub fn installed(mut self, name: &str, desc: PackageDesc) -> Self {
		self.installed.insert(name.to_string(), desc);
		self
	}

	pub fn built_in(mut self, name: &str, desc: PackageDesc) -> Self {
		self.built_in.insert(name.to_string(), desc);
		self
	}

	pub fn available(mut self, name: &str, desc: PackageDesc) -> Self {
		self.available.insert(name.to_string(), desc);
		self
	}

	pub fn env(mut self, name: &str, value: &str) -> Self {
		self.env.insert(name.to_string(), value.to_string());
		self
	}
}

impl KeyBindings for MemorySources {
	fn key_description(&self, command: &str, keymap: Option<&str>) -> Option<String> {
		let scoped = keymap.and_then(|map| self.bindings.get(&(command.to_string(), Some(map.to_string()))));
		scoped.or_else(|| self.bindings.get(&(command.to_string(), None))).cloned()
	}
}

impl SymbolSource for MemorySources {
	fn documentation(&self, symbol: &str, kind: DocKind) -> Option<String> {
		self.symbols.get(symbol)?.docs.get(&kind).cloned()
	}

	fn class(&self, symbol: &str) -> SymbolClass {
		self.symbols.get(symbol).map(|entry| entry.class).unwrap_or_default()
	}

	fn value(&self, symbol: &str) -> Option<VariableValue> {
		self.symbols.get(symbol)?.value.clone()
	}
}

impl FileSource for MemorySources {
	fn attributes(&self, path: &Path) -> Option<FileAttributes> {
		self.files.get(path).cloned()
	}
}

impl BufferSource for MemorySources {
	fn buffer(&self, name: &str) -> Option<BufferInfo> {
		self.buffers.get(name).cloned()
	}
}

impl PackageSource for MemorySources {
	fn installed(&self, name: &str) -> Option<PackageDesc> {
		self.installed.get(name).cloned()
	}

	fn built_in(&self, name: &str) -> Option<PackageDesc> {
		self.built_in.get(name).cloned()
	}

	fn available(&self, name: &str) -> Option<PackageDesc> {
		self.available.get(name).cloned()
	}
}

impl EnvironmentSource for MemorySources {
	fn var(&self, name: &str) -> Option<String> {
		self.env.get(name).cloned()
	}
}

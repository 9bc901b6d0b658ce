//! Face names attached to styled annotation fields.
//!
//! Hosts map these to concrete styles; unknown names render unstyled.

pub const DATE: &str = "marginal.date";
pub const DOCUMENTATION: &str = "marginal.documentation";
pub const FILE_NAME: &str = "marginal.file-name";
pub const FILE_OWNER: &str = "marginal.file-owner";
pub const KEY: &str = "marginal.key";
pub const MODE: &str = "marginal.mode";
pub const MODES: &str = "marginal.file-modes";
pub const MODIFIED: &str = "marginal.modified";
pub const READ_ONLY: &str = "marginal.read-only";
pub const SIZE: &str = "marginal.size";
pub const STATUS: &str = "marginal.status";
pub const SYMBOL_CLASS: &str = "marginal.type";
pub const VALUE: &str = "marginal.value";
pub const VALUE_NIL: &str = "marginal.null";
pub const VALUE_NUMBER: &str = "marginal.number";
pub const VALUE_STRING: &str = "marginal.string";
pub const VALUE_SYMBOL: &str = "marginal.symbol";
pub const VALUE_TRUE: &str = "marginal.true";
pub const VERSION: &str = "marginal.version";

//! Configuration for module registration.
//!
//! Defines the names the host runtime sees when the module is loaded.

use log::LevelFilter;

macro_rules! module_name {
    () => {
        "bufxor"
    };
}

/// Module name the host imports.
pub const MODULE_NAME: &str = module_name!();

/// [`MODULE_NAME`] with a trailing NUL, for the C ABI.
pub const MODULE_NAME_NUL: &str = concat!(module_name!(), "\0");

/// Symbol of the two-operand in-place XOR.
pub const XOR_SYMBOL: &str = "xor";

/// Symbol of the three-operand XOR.
pub const XOR_TO_SYMBOL: &str = "xor_to";

/// Registration settings passed to [`crate::module::init`].
///
/// This struct should be populated by the embedding runtime. The defaults
/// match the names existing callers import (`bufxor.xor`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleConfig {
    /// Value stored as the module's `__name__`.
    pub module_name: &'static str,

    /// Symbol under which the in-place XOR is bound.
    pub xor_symbol: &'static str,

    /// Symbol under which the three-operand XOR is bound.
    pub xor_to_symbol: &'static str,

    /// Whether to bind the three-operand XOR at all.
    pub export_xor_to: bool,

    /// If set, applied with `log::set_max_level` during registration.
    /// If None, the host's logging setup is left alone.
    pub max_log_level: Option<LevelFilter>,
}

impl Default for ModuleConfig {
    fn default() -> Self {
        Self {
            module_name: MODULE_NAME,
            xor_symbol: XOR_SYMBOL,
            xor_to_symbol: XOR_TO_SYMBOL,
            export_xor_to: true,
            max_log_level: None,
        }
    }
}

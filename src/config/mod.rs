//! Configuration module.
//!
//! Key bindings are fixed. Everything else resolves through
//! defaults → config file → environment → CLI flags.

pub mod keybindings;
pub mod loader;

pub use keybindings::KeyBindings;
pub use loader::{
    apply_cli_overrides, apply_env_overrides, apply_env_overrides_from, default_config_path,
    default_log_path, load_config_file, load_config_with_precedence, merge_config, resolve,
    ConfigError, ConfigFile, ResolvedConfig,
};

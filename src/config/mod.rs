//! Configuration Management
//!
//! Hook settings with hierarchical resolution:
//! 1. Built-in defaults
//! 2. Hooks settings file (.kiro/settings/hooks.yaml)
//! 3. Environment variables (INTENT_HOOK_*)

mod loader;
mod types;

pub use loader::{ConfigLoader, ENV_PREFIX};
pub use types::*;

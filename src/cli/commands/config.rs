//! Config Command
//!
//! Manage the hook settings file.
//!
//! Usage:
//!   intent-hook config show [-f json]
//!   intent-hook config path
//!   intent-hook config init [--force]

use crate::cli::{ConfigFormat, Output};
use crate::config::ConfigLoader;
use crate::hook::HookOptions;
use crate::types::Result;

/// Show the effective configuration
pub fn show(options: &HookOptions, format: ConfigFormat) -> Result<()> {
    let root = options.resolved_root()?;
    let path = options.resolved_config(&root);
    ConfigLoader::show_config(&path, format == ConfigFormat::Json)
}

/// Show configuration and workspace paths
pub fn path(options: &HookOptions) -> Result<()> {
    let root = options.resolved_root()?;
    ConfigLoader::show_path(&root, &options.resolved_config(&root));
    Ok(())
}

/// Write the default settings file
pub fn init(options: &HookOptions, force: bool) -> Result<()> {
    let root = options.resolved_root()?;
    let path = ConfigLoader::init(&options.resolved_config(&root), force)?;

    let out = Output::new();
    out.success("Initialized hook configuration");
    println!("  Config: {}", path.display());
    Ok(())
}

//! Check-Path Command
//!
//! Report whether the hook may read a path under the current allow-list.
//! Relative paths resolve against the workspace root.

use std::path::Path;

use crate::analysis::security::normalize_path;
use crate::cli::Output;
use crate::hook::HookOptions;
use crate::types::Result;

pub fn run(path: &Path, options: &HookOptions) -> Result<bool> {
    let out = Output::new();
    let root = options.resolved_root()?;
    let analyzer = options.analyzer()?;

    let target = if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    };
    let normalized = normalize_path(&target);

    let allowed = analyzer.security().validate_file_access(&target);
    if allowed {
        out.success(&format!("Allowed: {}", normalized.display()));
    } else {
        out.warning(&format!("Denied: {}", normalized.display()));
        if analyzer.config().security.allowed_paths.is_empty() {
            out.info("allowed_paths is empty; every path is denied");
        }
    }

    Ok(allowed)
}

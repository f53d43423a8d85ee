//! Input Screening
//!
//! Rejects instructions that are too long, contain configured blocked
//! keywords, or look like code injection / destructive shell commands.
//! Also gates which files the hook may read.

use std::path::{Component, Path, PathBuf};
use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};
use tracing::{debug, warn};

use crate::config::SecurityConfig;

/// Code-injection and destructive-command fragments, matched case-insensitively
const INJECTION_PATTERNS: &[&str] = &[
    r"__import__\s*\(",
    r"eval\s*\(",
    r"exec\s*\(",
    r"open\s*\(",
    r"file\s*\(",
    r"subprocess\.",
    r"os\.system",
    r"os\.popen",
    r"\.\./.*\.\.",
    r"rm\s+-rf",
    r"del\s+/",
];

static INJECTION_REGEXES: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    INJECTION_PATTERNS
        .iter()
        .map(|p| {
            let regex = RegexBuilder::new(p)
                .case_insensitive(true)
                .build()
                .expect("injection pattern is valid");
            (*p, regex)
        })
        .collect()
});

pub struct SecurityValidator {
    config: SecurityConfig,
    allowed_paths: Vec<PathBuf>,
}

impl SecurityValidator {
    pub fn new(config: SecurityConfig) -> Self {
        let allowed_paths = config
            .allowed_paths
            .iter()
            .map(|p| normalize_path(Path::new(p)))
            .collect();

        Self {
            config,
            allowed_paths,
        }
    }

    /// Screen an instruction.
    ///
    /// Every violation is reported, in check order; the input passes only
    /// when there are none.
    pub fn validate_input(&self, user_input: &str) -> (bool, Vec<String>) {
        let mut issues = Vec::new();

        if user_input.chars().count() > self.config.max_input_length {
            issues.push(format!(
                "输入长度超过限制({}字符)",
                self.config.max_input_length
            ));
        }

        for keyword in &self.config.blocked_keywords {
            if user_input.contains(keyword.as_str()) {
                issues.push(format!("检测到潜在恶意关键词: {}", keyword));
            }
        }

        for (pattern, regex) in INJECTION_REGEXES.iter() {
            if regex.is_match(user_input) {
                issues.push(format!("检测到潜在代码注入模式: {}", pattern));
            }
        }

        (issues.is_empty(), issues)
    }

    /// Whether the hook may read `path`.
    ///
    /// Only exact (normalized) allow-list entries are readable.
    pub fn validate_file_access(&self, path: &Path) -> bool {
        let normalized = normalize_path(path);

        if self.allowed_paths.iter().any(|allowed| *allowed == normalized) {
            return true;
        }

        if has_parent_traversal(&normalized) {
            warn!("Rejected path traversal: {}", path.display());
            return false;
        }

        debug!("Path not on allow-list: {}", path.display());
        false
    }
}

/// Lexically normalize a path without touching the filesystem.
///
/// Drops `.` segments and folds `name/..` pairs. Leading `..` segments of a
/// relative path are kept; `..` directly under the root is dropped.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }

    if parts.is_empty() {
        return PathBuf::from(".");
    }

    parts.iter().collect()
}

fn has_parent_traversal(path: &Path) -> bool {
    path.components().any(|c| matches!(c, Component::ParentDir))
}

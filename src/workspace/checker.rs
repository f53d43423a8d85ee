//! Workspace State Checks
//!
//! Scans the workspace status document for signals that an instruction
//! should wait: high-priority work in progress, task IDs already tracked,
//! prerequisite wording, and outstanding high-priority technical debt.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use tracing::{debug, warn};

use super::cache::FileCache;
use crate::constants::{markers, messages, paths};

/// `任务ID: TD-12` style references; group 1 is the ID
static LABELLED_TASK_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"任务\s*ID[:：]\s*(TD-\d+|BUG-\d+|PRD-\d+|FD-\d+)")
        .expect("labelled task id pattern is valid")
});

/// Bare IDs with a known document prefix; the whole ID is reported, not
/// just its prefix
static BARE_TASK_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:TD|BUG|PRD|FD|TDD|IMPL|CR|DR)-\d+").expect("bare task id pattern is valid")
});

/// Wording that suggests the instruction waits on other work
static PREREQUISITE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [r"需要.*完成", r"等待.*完成", r"依赖.*", r"前置.*"]
        .iter()
        .map(|p| Regex::new(p).expect("prerequisite pattern is valid"))
        .collect()
});

/// Reads workspace documents through a shared [`FileCache`]
pub struct WorkspaceChecker {
    root: PathBuf,
    workspace_file: PathBuf,
    rules_file: PathBuf,
    cache: FileCache,
}

impl WorkspaceChecker {
    pub fn new(root: impl Into<PathBuf>, cache_ttl: Duration) -> Self {
        let root = root.into();
        let workspace_file = root.join(paths::WORKSPACE_FILE);
        let rules_file = root.join(paths::RULES_DIR).join(paths::RULES_FILE);

        Self {
            root,
            workspace_file,
            rules_file,
            cache: FileCache::new(cache_ttl),
        }
    }

    pub fn workspace_file(&self) -> &Path {
        &self.workspace_file
    }

    pub fn rules_file(&self) -> &Path {
        &self.rules_file
    }

    pub fn cache(&self) -> &FileCache {
        &self.cache
    }

    /// Check whether the instruction collides with tracked work.
    ///
    /// A status document that exists but cannot be read counts as a
    /// conflict; a missing one means there is nothing to collide with.
    pub fn check_conflicts(&self, user_input: &str) -> (bool, Vec<String>) {
        let mut conflicts = Vec::new();

        if !self.workspace_file.exists() {
            debug!(
                "No workspace file at {}, skipping conflict check",
                self.workspace_file.display()
            );
            return (false, conflicts);
        }

        let Some(content) = self.cache.read(&self.workspace_file) else {
            warn!(
                "Cannot read workspace file {}",
                self.workspace_file.display()
            );
            conflicts.push(messages::WORKSPACE_UNREADABLE.to_string());
            return (true, conflicts);
        };

        if content.contains(markers::TASKS_IN_PROGRESS) && content.contains(markers::HIGH_PRIORITY)
        {
            conflicts.push(messages::HIGH_PRIORITY_IN_PROGRESS.to_string());
        }

        for task_id in extract_task_ids(user_input) {
            if content.contains(&task_id) {
                conflicts.push(format!("任务 {} 已在工作空间中记录", task_id));
            }
        }

        (!conflicts.is_empty(), conflicts)
    }

    /// Check for prerequisites the instruction may be waiting on
    pub fn check_dependencies(&self, user_input: &str) -> (bool, Vec<String>) {
        let mut unmet = Vec::new();

        for pattern in PREREQUISITE_PATTERNS.iter() {
            if pattern.is_match(user_input) {
                unmet.push(messages::PREREQUISITE_DETECTED.to_string());
            }
        }

        if self.workspace_file.exists() {
            match self.cache.read(&self.workspace_file) {
                Some(content) => {
                    if content.contains(markers::TECHNICAL_DEBT)
                        && content.contains(markers::HIGH_PRIORITY)
                    {
                        unmet.push(messages::HIGH_PRIORITY_DEBT.to_string());
                    }
                }
                None => warn!(
                    "Cannot check technical debt in {}",
                    self.workspace_file.display()
                ),
            }
        }

        (unmet.is_empty(), unmet)
    }

    /// The workspace root exists and can be read
    pub fn check_resources(&self) -> bool {
        match fs::metadata(&self.root) {
            Ok(meta) if meta.is_dir() => fs::read_dir(&self.root).is_ok(),
            Ok(_) => fs::File::open(&self.root).is_ok(),
            Err(_) => false,
        }
    }
}

/// Task IDs referenced in free text, labelled references first.
///
/// An ID referenced with a label is reported by both patterns.
pub fn extract_task_ids(text: &str) -> Vec<String> {
    let labelled = LABELLED_TASK_ID
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string());

    let bare = BARE_TASK_ID.find_iter(text).map(|m| m.as_str().to_string());

    labelled.chain(bare).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn workspace(content: Option<&str>) -> (TempDir, WorkspaceChecker) {
        let temp = TempDir::new().unwrap();
        if let Some(content) = content {
            fs::write(temp.path().join("WORKSPACE.md"), content).unwrap();
        }
        let checker = WorkspaceChecker::new(temp.path(), Duration::from_secs(300));
        (temp, checker)
    }

    #[test]
    fn test_extract_task_ids() {
        assert_eq!(extract_task_ids("修复 BUG-42 和 TDD-7"), vec!["BUG-42", "TDD-7"]);
        assert_eq!(
            extract_task_ids("任务ID：PRD-3 需要跟进"),
            vec!["PRD-3", "PRD-3"]
        );
        assert!(extract_task_ids("没有编号").is_empty());
    }

    #[test]
    fn test_no_workspace_file_no_conflict() {
        let (_temp, checker) = workspace(None);
        let (has_conflicts, details) = checker.check_conflicts("修复 BUG-1");
        assert!(!has_conflicts);
        assert!(details.is_empty());
    }

    #[test]
    fn test_empty_workspace_no_conflict() {
        let (_temp, checker) = workspace(Some(""));
        let (has_conflicts, details) = checker.check_conflicts("实现一个新的用户登录功能");
        assert!(!has_conflicts);
        assert!(details.is_empty());
    }

    #[test]
    fn test_high_priority_in_progress() {
        let (_temp, checker) = workspace(Some("## 正在进行的任务\n- 登录重构 🔴 高\n"));
        let (has_conflicts, details) = checker.check_conflicts("写文档");
        assert!(has_conflicts);
        assert_eq!(details, vec!["存在高优先级任务正在进行中"]);
    }

    #[test]
    fn test_in_progress_without_high_priority() {
        let (_temp, checker) = workspace(Some("## 正在进行的任务\n- 登录重构 🟢 低\n"));
        let (has_conflicts, _) = checker.check_conflicts("写文档");
        assert!(!has_conflicts);
    }

    #[test]
    fn test_tracked_task_id_conflicts() {
        let (_temp, checker) = workspace(Some("| BUG-12 | 登录失败 |\n"));
        let (has_conflicts, details) = checker.check_conflicts("继续处理 BUG-12");
        assert!(has_conflicts);
        assert_eq!(details, vec!["任务 BUG-12 已在工作空间中记录"]);

        let (has_conflicts, _) = checker.check_conflicts("继续处理 BUG-13");
        assert!(!has_conflicts);
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_workspace_is_conflict() {
        let temp = TempDir::new().unwrap();
        // A directory where the file should be: exists, but read_to_string fails
        fs::create_dir(temp.path().join("WORKSPACE.md")).unwrap();
        let checker = WorkspaceChecker::new(temp.path(), Duration::from_secs(300));

        let (has_conflicts, details) = checker.check_conflicts("写文档");
        assert!(has_conflicts);
        assert_eq!(details, vec!["无法检查工作空间状态"]);
    }

    #[test]
    fn test_prerequisite_patterns_accumulate() {
        let (_temp, checker) = workspace(None);

        let (met, unmet) = checker.check_dependencies("实现登录功能");
        assert!(met);
        assert!(unmet.is_empty());

        // Matches both 需要.*完成 and 依赖.*
        let (met, unmet) = checker.check_dependencies("需要依赖模块先完成");
        assert!(!met);
        assert_eq!(unmet.len(), 2);
        assert!(unmet.iter().all(|d| d == "检测到潜在的前置任务依赖"));
    }

    #[test]
    fn test_high_priority_debt() {
        let (_temp, checker) = workspace(Some("## 技术债务\n- 日志模块 🔴 高\n"));
        let (met, unmet) = checker.check_dependencies("编写说明");
        assert!(!met);
        assert_eq!(unmet, vec!["存在高优先级技术债务"]);
    }

    #[test]
    fn test_check_resources() {
        let (temp, checker) = workspace(None);
        assert!(checker.check_resources());

        let missing = WorkspaceChecker::new(temp.path().join("nope"), Duration::from_secs(1));
        assert!(!missing.check_resources());
    }

    #[test]
    fn test_reads_share_cache() {
        let (_temp, checker) = workspace(Some("内容"));
        checker.check_conflicts("a");
        checker.check_dependencies("b");

        let stats = checker.cache().stats();
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.hits, 1);
    }
}

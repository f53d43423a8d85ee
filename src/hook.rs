//! Hook Entry Point
//!
//! [`on_user_input`] is what the host calls for each user instruction. It
//! always returns a printable string: the rendered report, or an error line
//! if anything failed or panicked along the way.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};

use tracing::{error, info};

use crate::analysis::{IntentAnalyzer, Reporter};
use crate::config::ConfigLoader;
use crate::constants::messages;
use crate::types::{AnalysisResult, Result, ResultExt};

/// Where the hook runs and which settings file it reads
#[derive(Debug, Clone)]
pub struct HookOptions {
    pub workspace_root: PathBuf,
    /// Settings file; relative paths resolve against the workspace root
    pub config_path: Option<PathBuf>,
}

impl HookOptions {
    pub fn new(workspace_root: impl Into<PathBuf>) -> Self {
        Self {
            workspace_root: workspace_root.into(),
            config_path: None,
        }
    }

    pub fn with_config(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    /// Absolute workspace root, resolved lexically against the current directory
    pub fn resolved_root(&self) -> Result<PathBuf> {
        std::path::absolute(&self.workspace_root).with_context("Invalid workspace root")
    }

    pub fn resolved_config(&self, root: &Path) -> PathBuf {
        ConfigLoader::resolve(root, self.config_path.as_deref())
    }

    /// Analyzer for these options
    pub fn analyzer(&self) -> Result<IntentAnalyzer> {
        let root = self.resolved_root()?;
        let config_path = self.resolved_config(&root);
        Ok(IntentAnalyzer::from_config_file(root, &config_path))
    }
}

/// Analyze one instruction and return the structured result
pub fn run_hook(user_input: &str, options: &HookOptions) -> Result<AnalysisResult> {
    let analyzer = options.analyzer()?;
    Ok(analyzer.analyze(user_input))
}

/// Analyze one instruction and return the rendered report.
///
/// Never fails: errors and panics become `用户意图分析失败: {error}`.
pub fn on_user_input(user_input: &str, options: &HookOptions) -> String {
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| run_hook(user_input, options)));

    match outcome {
        Ok(Ok(result)) => {
            info!(
                intent = %result.intent,
                advice = %result.execution_advice,
                "User intent analysis complete"
            );
            Reporter::render(&result)
        }
        Ok(Err(e)) => {
            error!("Hook failed: {}", e);
            format!("{}: {}", messages::HOOK_FAILED, e)
        }
        Err(payload) => {
            let reason = panic_message(payload.as_ref());
            error!("Hook panicked: {}", reason);
            format!("{}: {}", messages::HOOK_FAILED, reason)
        }
    }
}

/// Text of a panic payload
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ExecutionAdvice;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_report_for_clean_input() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("WORKSPACE.md"), "").unwrap();

        let report = on_user_input("实现一个新的用户登录功能", &HookOptions::new(temp.path()));
        assert!(report.starts_with("\n🔍 用户意图分析结果\n"));
        assert!(report.contains("💡 执行建议: 立即执行\n"));
        assert!(report.ends_with("🔒 安全检查: ✅ 通过\n"));
    }

    #[test]
    fn test_rejected_input_still_reports() {
        let temp = TempDir::new().unwrap();
        let report = on_user_input("please rm -rf /", &HookOptions::new(temp.path()));
        assert!(report.contains("🔒 安全检查: ⚠️ 需要注意\n"));
        assert!(report.contains("🚨 安全问题:"));
    }

    #[test]
    fn test_empty_root_becomes_error_string() {
        let report = on_user_input("编写项目文档", &HookOptions::new(""));
        assert!(report.starts_with("用户意图分析失败: "));
    }

    #[test]
    fn test_config_file_applied() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "custom.yaml",
                "user-intent-analysis:\n  security:\n    max-input-length: 3\n",
            )?;

            let options = HookOptions::new(jail.directory()).with_config("custom.yaml");
            let result = run_hook("编写项目文档", &options).map_err(|e| e.to_string())?;
            assert!(!result.security_passed);
            assert_eq!(result.execution_advice, ExecutionAdvice::SecurityRejected);
            assert_eq!(result.security_issues, vec!["输入长度超过限制(3字符)"]);
            Ok(())
        });
    }

    #[test]
    fn test_zero_length_limit_keeps_denylist() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "hooks.yaml",
                "user-intent-analysis:\n  security:\n    max-input-length: 0\n    blocked_keywords: [\"删库\"]\n",
            )?;

            let options = HookOptions::new(jail.directory()).with_config("hooks.yaml");
            let result = run_hook("请删库", &options).map_err(|e| e.to_string())?;
            assert!(!result.security_passed);
            assert_eq!(
                result.security_issues,
                vec!["输入长度超过限制(0字符)", "检测到潜在恶意关键词: 删库"]
            );
            Ok(())
        });
    }

    #[test]
    fn test_panic_message() {
        let payload: Box<dyn Any + Send> = Box::new("boom");
        assert_eq!(panic_message(payload.as_ref()), "boom");

        let payload: Box<dyn Any + Send> = Box::new(String::from("owned"));
        assert_eq!(panic_message(payload.as_ref()), "owned");

        let payload: Box<dyn Any + Send> = Box::new(7u8);
        assert_eq!(panic_message(payload.as_ref()), "unknown panic");
    }

    #[test]
    fn test_relative_root_resolved() {
        let options = HookOptions::new("ws");
        let root = options.resolved_root().unwrap();
        assert!(root.is_absolute());
        assert!(root.ends_with("ws"));
        assert_eq!(
            options.resolved_config(&root),
            root.join(".kiro/settings/hooks.yaml")
        );
    }
}

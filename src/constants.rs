//! Global Constants
//!
//! Centralized constants for configuration defaults, workspace layout and
//! the fixed vocabulary the checks look for.

/// Configuration defaults
pub mod defaults {
    /// Maximum accepted instruction length (characters)
    pub const MAX_INPUT_LENGTH: usize = 10_000;

    /// Analysis time budget before a warning is logged (milliseconds)
    pub const MAX_ANALYSIS_TIME_MS: u64 = 5_000;

    /// File cache freshness window (seconds)
    pub const CACHE_DURATION_SECS: u64 = 300;

    /// Read the rules and workspace files before analysing
    pub const FORCE_READ_RULES: bool = true;
}

/// Workspace layout, relative to the workspace root
pub mod paths {
    /// Workspace status document
    pub const WORKSPACE_FILE: &str = "WORKSPACE.md";

    /// Rules directory
    pub const RULES_DIR: &str = "Rules";

    /// Rules readme inside [`RULES_DIR`]
    pub const RULES_FILE: &str = "RulesReadMe.md";

    /// Hook configuration file
    pub const CONFIG_FILE: &str = ".kiro/settings/hooks.yaml";

    /// Top-level key of the hook section in the configuration file
    pub const CONFIG_SECTION: &str = "user-intent-analysis";
}

/// Marker substrings in the workspace status document
pub mod markers {
    /// Section heading for tasks in progress
    pub const TASKS_IN_PROGRESS: &str = "正在进行的任务";

    /// High-priority badge
    pub const HIGH_PRIORITY: &str = "🔴 高";

    /// Technical debt section
    pub const TECHNICAL_DEBT: &str = "技术债务";
}

/// User-facing message fragments
pub mod messages {
    /// Workload placeholder when no estimate applies
    pub const UNKNOWN_WORKLOAD: &str = "未知";

    pub const HIGH_PRIORITY_IN_PROGRESS: &str = "存在高优先级任务正在进行中";

    pub const WORKSPACE_UNREADABLE: &str = "无法检查工作空间状态";

    pub const PREREQUISITE_DETECTED: &str = "检测到潜在的前置任务依赖";

    pub const HIGH_PRIORITY_DEBT: &str = "存在高优先级技术债务";

    /// Prefix of the string returned when the hook itself fails
    pub const HOOK_FAILED: &str = "用户意图分析失败";
}

/// Sample instructions used by the `demo` command
pub const DEMO_INPUTS: &[&str] = &[
    "实现一个新的用户登录功能",
    "编写项目文档",
    "设计系统架构",
    "审查代码质量",
    "更新项目进度",
];

//! Classification Vocabulary
//!
//! Closed enumerations produced by the classifier and recommender. Each type
//! has a stable lowercase serde name and a user-facing label used in reports.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Intent category of a user instruction
///
/// Declaration order is significant: classifier ties resolve to the
/// earliest variant in [`Intent::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    #[default]
    Development,
    Documentation,
    Design,
    Review,
    Management,
}

impl Intent {
    pub const ALL: [Intent; 5] = [
        Intent::Development,
        Intent::Documentation,
        Intent::Design,
        Intent::Review,
        Intent::Management,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Intent::Development => "开发任务",
            Intent::Documentation => "文档任务",
            Intent::Design => "设计任务",
            Intent::Review => "审查任务",
            Intent::Management => "管理任务",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Complexity level of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Simple,
    #[default]
    Medium,
    Complex,
}

impl Complexity {
    pub const ALL: [Complexity; 3] = [Complexity::Simple, Complexity::Medium, Complexity::Complex];

    pub fn label(&self) -> &'static str {
        match self {
            Complexity::Simple => "简单",
            Complexity::Medium => "中等",
            Complexity::Complex => "复杂",
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Agent that can pick up a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Agent {
    #[default]
    Kiro,
    Roo,
    Claude,
    ProductManager,
    SecurityReviewer,
}

impl Agent {
    pub fn label(&self) -> &'static str {
        match self {
            Agent::Kiro => "Kiro",
            Agent::Roo => "Roo",
            Agent::Claude => "Claude",
            Agent::ProductManager => "产品经理",
            Agent::SecurityReviewer => "安全审查员",
        }
    }
}

impl fmt::Display for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What the caller should do with the instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionAdvice {
    /// Clean workspace, not complex
    Immediate,
    /// Clean workspace, complex task
    Decompose,
    /// Conflicts, unmet dependencies, or unavailable resources
    Defer,
    /// Input failed security screening
    SecurityRejected,
}

impl ExecutionAdvice {
    pub fn label(&self) -> &'static str {
        match self {
            ExecutionAdvice::Immediate => "立即执行",
            ExecutionAdvice::Decompose => "分解执行",
            ExecutionAdvice::Defer => "延迟执行",
            ExecutionAdvice::SecurityRejected => "安全检查未通过，建议修改输入",
        }
    }
}

impl fmt::Display for ExecutionAdvice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

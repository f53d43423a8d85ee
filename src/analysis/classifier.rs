//! Keyword Classifier
//!
//! Scores an instruction against fixed keyword tables. A keyword counts once
//! if it occurs anywhere in the text, however often it repeats. The highest
//! score wins; ties go to the earliest table row, and an all-zero score falls
//! back to the default category.
//!
//! The tables are mostly Chinese, where lower-casing is a no-op; it only
//! matters for the few ASCII keywords (`bug`, `api`, `ui`, ...).

use crate::types::{Complexity, Intent};

type KeywordTable<T> = [(T, &'static [&'static str])];

/// Intent keywords; row order is the tie-break order
const INTENT_KEYWORDS: &KeywordTable<Intent> = &[
    (
        Intent::Development,
        &[
            "实现", "开发", "编码", "编程", "代码", "函数", "类", "方法", "调试", "测试", "构建",
            "编译", "部署", "修复", "bug", "error", "功能", "模块", "组件", "接口", "api",
            "数据库", "sql", "查询",
        ],
    ),
    (
        Intent::Documentation,
        &[
            "文档", "编写", "说明", "指南", "手册", "readme", "注释", "规范", "标准", "模板",
            "示例", "教程", "介绍", "概述",
        ],
    ),
    (
        Intent::Design,
        &[
            "设计", "架构", "方案", "规划", "布局", "界面", "ui", "ux", "原型", "流程", "结构",
            "模式", "框架", "组件设计", "系统设计",
        ],
    ),
    (
        Intent::Review,
        &[
            "审查", "检查", "审核", "评估", "分析", "验证", "测试", "代码审查", "安全检查",
            "质量保证", "优化", "重构",
        ],
    ),
    (
        Intent::Management,
        &[
            "管理", "计划", "任务", "进度", "协调", "分配", "跟踪", "报告", "状态", "更新",
            "优先级", "里程碑", "发布", "版本",
        ],
    ),
];

const COMPLEXITY_KEYWORDS: &KeywordTable<Complexity> = &[
    (
        Complexity::Simple,
        &["简单", "快速", "小", "单一", "直接", "基本", "修复", "添加"],
    ),
    (
        Complexity::Medium,
        &["中等", "多个", "集成", "优化", "改进", "扩展", "重构"],
    ),
    (
        Complexity::Complex,
        &[
            "复杂", "系统", "架构", "全面", "完整", "大规模", "多模块", "重构", "迁移", "集成",
            "协调", "多领域",
        ],
    ),
];

/// Number of distinct keywords present in `text`
fn keyword_score(text: &str, keywords: &[&str]) -> usize {
    keywords.iter().filter(|kw| text.contains(**kw)).count()
}

/// Highest-scoring row, first row on ties, `default` when nothing matches
fn best_match<T: Copy>(text: &str, table: &KeywordTable<T>, default: T) -> T {
    let lowered = text.to_lowercase();
    let mut best: Option<(T, usize)> = None;

    for (category, keywords) in table {
        let score = keyword_score(&lowered, keywords);
        if score > 0 && best.is_none_or(|(_, top)| score > top) {
            best = Some((*category, score));
        }
    }

    best.map_or(default, |(category, _)| category)
}

/// Classify the intent of an instruction
pub fn classify_intent(user_input: &str) -> Intent {
    best_match(user_input, INTENT_KEYWORDS, Intent::Development)
}

/// Assess how complex an instruction is
pub fn assess_complexity(user_input: &str) -> Complexity {
    best_match(user_input, COMPLEXITY_KEYWORDS, Complexity::Medium)
}

/// Rough effort estimate for a complexity level
pub fn estimate_workload(complexity: Complexity) -> &'static str {
    match complexity {
        Complexity::Simple => "1-2小时",
        Complexity::Medium => "半天到1天",
        Complexity::Complex => "1-3天",
    }
}

/// Keywords for an intent, in table order
pub fn intent_keywords(intent: Intent) -> &'static [&'static str] {
    INTENT_KEYWORDS
        .iter()
        .find(|(i, _)| *i == intent)
        .map(|(_, keywords)| *keywords)
        .unwrap_or_default()
}

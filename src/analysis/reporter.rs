//! Report Rendering
//!
//! Fixed human-readable template for an [`AnalysisResult`].

use crate::types::AnalysisResult;

const RULE: &str = "========================================";

pub struct Reporter;

impl Reporter {
    /// Render the report.
    ///
    /// Workspace details and security issues are appended only when present.
    pub fn render(result: &AnalysisResult) -> String {
        let mut out = format!(
            "\n🔍 用户意图分析结果\n{rule}\n\n\
             📝 用户指令: {input}\n\n\
             🧠 意图分析:\n   \
             - 主要意图: {intent}\n   \
             - 复杂度: {complexity}\n   \
             - 预计工作量: {workload}\n\n\
             🤖 推荐代理: {agent}\n\n\
             📋 工作状态检查:\n   \
             - 冲突检测: {conflicts}\n   \
             - 依赖检查: {dependencies}\n   \
             - 资源状态: {resources}\n\n\
             💡 执行建议: {advice}\n\n\
             🔒 安全检查: {security}\n",
            rule = RULE,
            input = result.user_input,
            intent = result.intent,
            complexity = result.complexity,
            workload = result.estimated_workload,
            agent = result.recommended_agent,
            conflicts = if result.has_conflicts {
                "⚠️ 存在冲突"
            } else {
                "✅ 无冲突"
            },
            dependencies = if result.dependencies_met {
                "✅ 已满足"
            } else {
                "⚠️ 未满足"
            },
            resources = if result.resources_available {
                "✅ 可用"
            } else {
                "⚠️ 占用"
            },
            advice = result.execution_advice,
            security = if result.security_passed {
                "✅ 通过"
            } else {
                "⚠️ 需要注意"
            },
        );

        let details: Vec<&String> = result
            .conflict_details
            .iter()
            .chain(&result.unmet_dependencies)
            .collect();
        if !details.is_empty() {
            out.push_str("\n📎 状态详情:\n");
            for detail in details {
                out.push_str(&format!("   - {}\n", detail));
            }
        }

        if !result.security_issues.is_empty() {
            out.push_str("\n🚨 安全问题:\n");
            for issue in &result.security_issues {
                out.push_str(&format!("   - {}\n", issue));
            }
        }

        out
    }
}

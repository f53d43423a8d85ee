//! Analysis Result
//!
//! One record per analyzed instruction, built once by the analyzer and only
//! read afterwards by the reporter or the JSON output.

use serde::{Deserialize, Serialize};

use super::intent::{Agent, Complexity, ExecutionAdvice, Intent};
use crate::constants::messages;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub user_input: String,
    pub intent: Intent,
    pub complexity: Complexity,
    pub estimated_workload: String,
    pub recommended_agent: Agent,
    pub has_conflicts: bool,
    pub dependencies_met: bool,
    pub resources_available: bool,
    pub execution_advice: ExecutionAdvice,
    pub security_passed: bool,
    pub security_issues: Vec<String>,
    /// Why `has_conflicts` is set, in detection order
    #[serde(default)]
    pub conflict_details: Vec<String>,
    /// Why `dependencies_met` is false, in detection order
    #[serde(default)]
    pub unmet_dependencies: Vec<String>,
}

impl AnalysisResult {
    /// Placeholder result for input that failed security screening.
    ///
    /// Every workspace signal reads as unresolved so nothing downstream acts
    /// on the instruction.
    pub fn security_rejected(user_input: impl Into<String>, security_issues: Vec<String>) -> Self {
        Self {
            user_input: user_input.into(),
            intent: Intent::Development,
            complexity: Complexity::Medium,
            estimated_workload: messages::UNKNOWN_WORKLOAD.to_string(),
            recommended_agent: Agent::Kiro,
            has_conflicts: false,
            dependencies_met: false,
            resources_available: false,
            execution_advice: ExecutionAdvice::SecurityRejected,
            security_passed: false,
            security_issues,
            conflict_details: Vec::new(),
            unmet_dependencies: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_security_rejected_defaults() {
        let result = AnalysisResult::security_rejected("rm -rf /", vec!["issue".to_string()]);
        assert!(!result.security_passed);
        assert_eq!(result.intent, Intent::Development);
        assert_eq!(result.complexity, Complexity::Medium);
        assert_eq!(result.recommended_agent, Agent::Kiro);
        assert_eq!(result.estimated_workload, "未知");
        assert!(!result.has_conflicts);
        assert!(!result.dependencies_met);
        assert!(!result.resources_available);
        assert_eq!(result.execution_advice, ExecutionAdvice::SecurityRejected);
        assert_eq!(result.security_issues, vec!["issue".to_string()]);
    }

    #[test]
    fn test_json_shape() {
        let result = AnalysisResult::security_rejected("x", Vec::new());
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["intent"], "development");
        assert_eq!(json["execution_advice"], "security_rejected");
        assert_eq!(json["security_passed"], false);
    }
}

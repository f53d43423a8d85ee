//! Intent Analysis Pipeline
//!
//! Screens an instruction, classifies it, recommends an agent and checks
//! the workspace, in that order:
//!
//! 1. Security screening (hard gate, short-circuits on failure)
//! 2. Forced read of the rules and workspace documents (advisory)
//! 3. Intent, complexity, workload, agent
//! 4. Conflict, dependency and resource checks
//! 5. Execution advice
//!
//! Elapsed time is compared with the configured budget and only logged.

pub mod classifier;
pub mod recommender;
pub mod reporter;
pub mod security;

use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{debug, error, warn};

pub use classifier::{assess_complexity, classify_intent, estimate_workload};
pub use recommender::recommend_agent;
pub use reporter::Reporter;
pub use security::SecurityValidator;

use crate::config::{Config, ConfigLoader};
use crate::types::{AnalysisResult, Complexity, ExecutionAdvice};
use crate::workspace::WorkspaceChecker;

/// Analyzer bound to one workspace and one configuration
pub struct IntentAnalyzer {
    config: Config,
    security: SecurityValidator,
    workspace: WorkspaceChecker,
}

impl IntentAnalyzer {
    pub fn new(workspace_root: impl Into<PathBuf>, config: Config) -> Self {
        let security = SecurityValidator::new(config.security.clone());
        let workspace = WorkspaceChecker::new(workspace_root, config.cache_duration());

        Self {
            config,
            security,
            workspace,
        }
    }

    /// Build an analyzer from a settings file, using defaults if it cannot be loaded
    pub fn from_config_file(workspace_root: impl Into<PathBuf>, config_path: &Path) -> Self {
        Self::new(workspace_root, ConfigLoader::load_or_default(config_path))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn security(&self) -> &SecurityValidator {
        &self.security
    }

    pub fn workspace(&self) -> &WorkspaceChecker {
        &self.workspace
    }

    /// Analyze one instruction
    pub fn analyze(&self, user_input: &str) -> AnalysisResult {
        let started = Instant::now();

        let (security_passed, security_issues) = self.security.validate_input(user_input);
        if !security_passed {
            warn!(issues = ?security_issues, "Security validation failed");
            return AnalysisResult::security_rejected(user_input, security_issues);
        }

        if !self.force_read_rules() {
            error!("Could not read rules files");
        }

        let intent = classify_intent(user_input);
        let complexity = assess_complexity(user_input);
        let estimated_workload = estimate_workload(complexity).to_string();
        let recommended_agent = recommend_agent(intent, complexity);
        debug!(%intent, %complexity, %recommended_agent, "Classified instruction");

        let (has_conflicts, conflict_details) = self.workspace.check_conflicts(user_input);
        let (dependencies_met, unmet_dependencies) = self.workspace.check_dependencies(user_input);
        let resources_available = self.workspace.check_resources();

        let execution_advice = decide_advice(
            has_conflicts,
            dependencies_met,
            resources_available,
            complexity,
        );

        let elapsed = started.elapsed();
        if elapsed > self.config.security.max_analysis_time() {
            warn!(
                "Analysis took too long: {:.2}ms",
                elapsed.as_secs_f64() * 1000.0
            );
        }

        AnalysisResult {
            user_input: user_input.to_string(),
            intent,
            complexity,
            estimated_workload,
            recommended_agent,
            has_conflicts,
            dependencies_met,
            resources_available,
            execution_advice,
            security_passed,
            security_issues,
            conflict_details,
            unmet_dependencies,
        }
    }

    /// Pre-load the rules and workspace documents into the cache.
    ///
    /// Both paths must be on the allow-list. Returns whether both were read;
    /// failures are logged and never stop the analysis.
    fn force_read_rules(&self) -> bool {
        if !self.config.force_read_rules {
            return true;
        }

        let rules_file = self.workspace.rules_file();
        let workspace_file = self.workspace.workspace_file();

        for path in [rules_file, workspace_file] {
            if !self.security.validate_file_access(path) {
                error!("No permission to read: {}", path.display());
                return false;
            }
        }

        let cache = self.workspace.cache();
        let rules = cache.read(rules_file);
        let workspace = cache.read(workspace_file);

        rules.is_some() && workspace.is_some()
    }
}

/// Execution advice from workspace signals and complexity.
///
/// Any blocking signal defers; otherwise complex tasks are decomposed.
pub fn decide_advice(
    has_conflicts: bool,
    dependencies_met: bool,
    resources_available: bool,
    complexity: Complexity,
) -> ExecutionAdvice {
    if has_conflicts || !dependencies_met || !resources_available {
        ExecutionAdvice::Defer
    } else if complexity == Complexity::Complex {
        ExecutionAdvice::Decompose
    } else {
        ExecutionAdvice::Immediate
    }
}

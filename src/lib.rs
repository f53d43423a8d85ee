//! intent-hook - Rule-Based User Intent Analysis
//!
//! Inspects a short user instruction before an agent acts on it: screens it
//! for dangerous content, guesses its intent and complexity from keyword
//! tables, recommends a handling agent and checks the workspace status
//! document for work it would collide with.
//!
//! ## Quick Start
//!
//! ```ignore
//! use intent_hook::{HookOptions, on_user_input};
//!
//! let report = on_user_input("实现一个新的用户登录功能", &HookOptions::new("."));
//! println!("{}", report);
//! ```
//!
//! ## Modules
//!
//! - [`analysis`]: screening, classification, recommendation, reporting
//! - [`workspace`]: workspace document checks and the file cache
//! - [`config`]: hook settings (figment: defaults, YAML file, env)
//! - [`hook`]: the never-failing entry point

pub mod analysis;
pub mod cli;
pub mod config;
pub mod constants;
pub mod hook;
pub mod types;
pub mod workspace;

// =============================================================================
// Core Re-exports
// =============================================================================

// Configuration
pub use config::{Config, ConfigLoader, SecurityConfig};

// Error Types
pub use types::error::{HookError, Result, ResultExt};

// Domain
pub use types::{AnalysisResult, Agent, Complexity, ExecutionAdvice, Intent};

// =============================================================================
// Pipeline Re-exports
// =============================================================================

pub use analysis::{IntentAnalyzer, Reporter, SecurityValidator, decide_advice};
pub use hook::{HookOptions, on_user_input, run_hook};
pub use workspace::{CacheStats, FileCache, WorkspaceChecker};

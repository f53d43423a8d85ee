//! Configuration Types
//!
//! Mirrors the `user-intent-analysis` section of the hooks settings file.
//! Keys keep the file's spelling, which mixes dashed and underscored names,
//! so the dashed ones carry an explicit serde name.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::constants::defaults;

/// Root of the hooks settings file
///
/// Only the intent analysis section is read; sections for other hooks are
/// ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HooksFile {
    #[serde(rename = "user-intent-analysis")]
    pub intent_analysis: Config,
}

/// Intent analysis hook configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Freshness window of the file cache in seconds
    #[serde(rename = "cache-duration")]
    pub cache_duration_secs: u64,

    /// Read rules and workspace files before every analysis
    #[serde(rename = "force-read-rules")]
    pub force_read_rules: bool,

    /// Input screening settings
    pub security: SecurityConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_duration_secs: defaults::CACHE_DURATION_SECS,
            force_read_rules: defaults::FORCE_READ_RULES,
            security: SecurityConfig::default(),
        }
    }
}

impl Config {
    pub fn cache_duration(&self) -> Duration {
        Duration::from_secs(self.cache_duration_secs)
    }
}

// =============================================================================
// Security Configuration
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// Longest accepted instruction, in characters
    #[serde(rename = "max-input-length")]
    pub max_input_length: usize,

    /// Substrings that reject an instruction outright
    pub blocked_keywords: Vec<String>,

    /// The only file paths the hook may read
    pub allowed_paths: Vec<String>,

    /// Analysis time budget in milliseconds; exceeding it is only logged
    #[serde(rename = "max-analysis-time")]
    pub max_analysis_time_ms: u64,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            max_input_length: defaults::MAX_INPUT_LENGTH,
            blocked_keywords: Vec::new(),
            allowed_paths: Vec::new(),
            max_analysis_time_ms: defaults::MAX_ANALYSIS_TIME_MS,
        }
    }
}

impl SecurityConfig {
    pub fn max_analysis_time(&self) -> Duration {
        Duration::from_millis(self.max_analysis_time_ms)
    }
}

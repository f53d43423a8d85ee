//! Configuration Loader (Figment-based)
//!
//! Loads and merges configuration from:
//! 1. Built-in defaults (Serialized)
//! 2. Hooks settings file (.kiro/settings/hooks.yaml)
//! 3. Environment variables (INTENT_HOOK_* prefix, scalar options only)
//!
//! A configuration that cannot be loaded never stops an analysis: callers
//! use [`ConfigLoader::load_or_default`], which logs and falls back to the
//! built-in defaults.

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Yaml},
};
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, error, info};

use super::types::{Config, HooksFile};
use crate::constants::paths;
use crate::types::{HookError, Result};

/// Prefix of environment overrides
pub const ENV_PREFIX: &str = "INTENT_HOOK_";

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a hooks settings file: defaults → file → env vars
    pub fn load(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Err(HookError::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }

        debug!("Loading hook config from: {}", path.display());
        let file: HooksFile = Self::figment(path)
            .extract()
            .map_err(|e| HookError::Config(format!("Configuration error: {}", e)))?;

        Ok(file.intent_analysis)
    }

    /// Load configuration, falling back to defaults on any failure
    pub fn load_or_default(path: &Path) -> Config {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                error!("Failed to load config, using defaults: {}", e);
                Config::default()
            }
        }
    }

    fn figment(path: &Path) -> Figment {
        Figment::new()
            .merge(Serialized::defaults(HooksFile::default()))
            .merge(Yaml::file(path))
            .merge(
                Env::prefixed(ENV_PREFIX)
                    .filter_map(|key| env_key_path(key.as_str()).map(Into::into)),
            )
    }

    // =========================================================================
    // Path Management
    // =========================================================================

    /// Default settings file for a workspace root
    pub fn config_path(workspace_root: &Path) -> PathBuf {
        workspace_root.join(paths::CONFIG_FILE)
    }

    /// Resolve an explicit `--config` argument against the workspace root
    pub fn resolve(workspace_root: &Path, explicit: Option<&Path>) -> PathBuf {
        match explicit {
            Some(path) if path.is_absolute() => path.to_path_buf(),
            Some(path) => workspace_root.join(path),
            None => Self::config_path(workspace_root),
        }
    }

    /// Show config and workspace file paths
    pub fn show_path(workspace_root: &Path, config_path: &Path) {
        let mark = |p: &Path| if p.exists() { "✓" } else { "✗" };

        let workspace_file = workspace_root.join(paths::WORKSPACE_FILE);
        let rules_file = workspace_root
            .join(paths::RULES_DIR)
            .join(paths::RULES_FILE);

        println!("Configuration paths:");
        println!();
        println!("  Config:    {} {}", mark(config_path), config_path.display());
        println!(
            "  Workspace: {} {}",
            mark(&workspace_file),
            workspace_file.display()
        );
        println!("  Rules:     {} {}", mark(&rules_file), rules_file.display());
    }

    /// Print the effective configuration
    pub fn show_config(path: &Path, as_json: bool) -> Result<()> {
        let config = Self::load_or_default(path);
        let file = HooksFile {
            intent_analysis: config,
        };

        if as_json {
            println!("{}", serde_json::to_string_pretty(&file)?);
        } else {
            println!("{}", serde_yaml::to_string(&file)?);
        }

        Ok(())
    }

    // =========================================================================
    // Initialization
    // =========================================================================

    /// Write the default settings file
    pub fn init(path: &Path, force: bool) -> Result<PathBuf> {
        if path.exists() && !force {
            return Err(HookError::Config(format!(
                "Config already exists: {}. Use --force to overwrite.",
                path.display()
            )));
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, Self::default_config())?;
        info!("Created hook config: {}", path.display());

        Ok(path.to_path_buf())
    }

    /// Default settings file content (YAML)
    pub fn default_config() -> String {
        format!(
            r#"# Intent analysis hook settings

{}:
  # Seconds a cached file read stays fresh
  cache-duration: 300
  # Read Rules/RulesReadMe.md and WORKSPACE.md before each analysis
  force-read-rules: true
  security:
    max-input-length: 10000
    blocked_keywords: []
    # Exact paths the hook may read, e.g. the rules and workspace files
    allowed_paths: []
    # Milliseconds; slower analyses are logged
    max-analysis-time: 5000
"#,
            paths::CONFIG_SECTION
        )
    }
}

/// Map an env override (prefix stripped) to its key path in the settings file
fn env_key_path(key: &str) -> Option<&'static str> {
    match key.to_ascii_lowercase().as_str() {
        "cache_duration" => Some("user-intent-analysis.cache-duration"),
        "force_read_rules" => Some("user-intent-analysis.force-read-rules"),
        "max_input_length" => Some("user-intent-analysis.security.max-input-length"),
        "max_analysis_time" => Some("user-intent-analysis.security.max-analysis-time"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_error() {
        let temp = TempDir::new().unwrap();
        let err = ConfigLoader::load(&temp.path().join("hooks.yaml")).unwrap_err();
        assert!(matches!(err, HookError::Config(_)));
    }

    #[test]
    fn test_load_or_default_on_missing() {
        let temp = TempDir::new().unwrap();
        let config = ConfigLoader::load_or_default(&temp.path().join("hooks.yaml"));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_or_default_on_invalid_yaml() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("hooks.yaml");
        fs::write(&path, "user-intent-analysis: [not, a, mapping").unwrap();
        assert_eq!(ConfigLoader::load_or_default(&path), Config::default());
    }

    #[test]
    fn test_load_from_file() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "hooks.yaml",
                r#"
user-intent-analysis:
  cache-duration: 10
  force-read-rules: false
  security:
    max-input-length: 50
    blocked_keywords: ["rm -rf", "drop database"]
    allowed_paths: ["/srv/ws/WORKSPACE.md"]
    max-analysis-time: 100
"#,
            )?;

            let config = ConfigLoader::load(Path::new("hooks.yaml")).map_err(|e| e.to_string())?;
            assert_eq!(config.cache_duration_secs, 10);
            assert!(!config.force_read_rules);
            assert_eq!(config.security.max_input_length, 50);
            assert_eq!(config.security.blocked_keywords.len(), 2);
            assert_eq!(config.security.allowed_paths, vec!["/srv/ws/WORKSPACE.md"]);
            assert_eq!(config.security.max_analysis_time_ms, 100);
            Ok(())
        });
    }

    #[test]
    fn test_zero_length_limit_loads() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "hooks.yaml",
                "user-intent-analysis:\n  security:\n    max-input-length: 0\n    blocked_keywords: [\"删库\"]\n",
            )?;
            let config = ConfigLoader::load(Path::new("hooks.yaml")).map_err(|e| e.to_string())?;
            assert_eq!(config.security.max_input_length, 0);
            assert_eq!(config.security.blocked_keywords, vec!["删库"]);
            Ok(())
        });
    }

    #[test]
    fn test_default_config_round_trips() {
        Jail::expect_with(|jail| {
            let path = ConfigLoader::config_path(jail.directory());
            ConfigLoader::init(&path, false).map_err(|e| e.to_string())?;

            assert!(path.exists());
            let config = ConfigLoader::load(&path).map_err(|e| e.to_string())?;
            assert_eq!(config, Config::default());
            Ok(())
        });
    }

    #[test]
    fn test_init_refuses_overwrite() {
        let temp = TempDir::new().unwrap();
        let path = ConfigLoader::config_path(temp.path());
        ConfigLoader::init(&path, false).unwrap();

        assert!(ConfigLoader::init(&path, false).is_err());
        assert!(ConfigLoader::init(&path, true).is_ok());
    }

    #[test]
    fn test_resolve() {
        let root = Path::new("/srv/ws");
        assert_eq!(
            ConfigLoader::resolve(root, None),
            PathBuf::from("/srv/ws/.kiro/settings/hooks.yaml")
        );
        assert_eq!(
            ConfigLoader::resolve(root, Some(Path::new("custom.yaml"))),
            PathBuf::from("/srv/ws/custom.yaml")
        );
        assert_eq!(
            ConfigLoader::resolve(root, Some(Path::new("/etc/hooks.yaml"))),
            PathBuf::from("/etc/hooks.yaml")
        );
    }

    #[test]
    fn test_env_override() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "hooks.yaml",
                "user-intent-analysis:\n  cache-duration: 10\n",
            )?;
            jail.set_env("INTENT_HOOK_CACHE_DURATION", "42");
            jail.set_env("INTENT_HOOK_MAX_INPUT_LENGTH", "7");

            let config = ConfigLoader::load(Path::new("hooks.yaml")).map_err(|e| e.to_string())?;
            assert_eq!(config.cache_duration_secs, 42);
            assert_eq!(config.security.max_input_length, 7);
            Ok(())
        });
    }

    #[test]
    fn test_env_key_path() {
        assert_eq!(
            env_key_path("FORCE_READ_RULES"),
            Some("user-intent-analysis.force-read-rules")
        );
        assert_eq!(env_key_path("blocked_keywords"), None);
    }
}

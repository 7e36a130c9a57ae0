//! File configuration (Layer 1).
//!
//! Loaded from an explicit path, ./qa-labels.yml or
//! ~/.config/qa-labels/qa-labels.yml.

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::domain::LabelConfig;
use crate::runner::FailurePolicy;
use crate::tracker::{GitHubConfig, github::DEFAULT_API_URL};

const PROJECT_NAME: &str = env!("CARGO_PKG_NAME");

/// Configuration file contents.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Log filter used when RUST_LOG is not set.
    #[serde(rename = "log-level")]
    pub log_level: Option<String>,

    /// GitHub API settings.
    pub github: GitHubSettings,

    /// Default label names; action inputs override them slot by slot.
    pub labels: LabelConfig,

    /// Default failure policy; action inputs override it flag by flag.
    pub policy: FailurePolicy,
}

impl Config {
    /// Load configuration with fallback chain.
    ///
    /// Search order:
    /// 1. Explicit path if provided
    /// 2. ./qa-labels.yml
    /// 3. ~/.config/qa-labels/qa-labels.yml
    /// 4. Defaults
    ///
    /// The first file that exists is used; if it cannot be read, parsed or
    /// validated, loading fails rather than falling through to defaults.
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        Self::load_first(&Self::search_paths())
    }

    /// Candidate config files, in search order.
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(format!("{}.yml", PROJECT_NAME))];
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join(PROJECT_NAME).join(format!("{}.yml", PROJECT_NAME)));
        }
        paths
    }

    fn load_first(paths: &[PathBuf]) -> Result<Self> {
        for path in paths {
            if path.exists() {
                let config =
                    Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()))?;
                log::info!("Loaded config from {}", path.display());
                return Ok(config);
            }
        }

        log::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;
        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.github.timeout_ms == 0 {
            eyre::bail!("github.timeout-ms must be > 0");
        }
        if self.github.api_url.trim().is_empty() {
            eyre::bail!("github.api-url must not be empty");
        }
        Ok(())
    }
}

/// GitHub API settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GitHubSettings {
    /// REST API base URL (GitHub Enterprise: https://HOST/api/v3).
    #[serde(rename = "api-url")]
    pub api_url: String,

    /// User-Agent header; defaults to qa-labels/<version>.
    #[serde(rename = "user-agent")]
    pub user_agent: Option<String>,

    /// Timeout per API call in milliseconds.
    #[serde(rename = "timeout-ms")]
    pub timeout_ms: u64,
}

impl Default for GitHubSettings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            user_agent: None,
            timeout_ms: 30_000,
        }
    }
}

impl GitHubSettings {
    /// Client configuration, with `api_url` replacing the configured base
    /// when given.
    pub fn client_config(&self, api_url: Option<&str>) -> GitHubConfig {
        let defaults = GitHubConfig::default();
        GitHubConfig {
            api_url: api_url.unwrap_or(&self.api_url).to_string(),
            user_agent: self.user_agent.clone().unwrap_or(defaults.user_agent),
            timeout: Duration::from_millis(self.timeout_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::AmbiguousPolicy;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.log_level.is_none());
        assert_eq!(config.github.api_url, "https://api.github.com");
        assert_eq!(config.github.timeout_ms, 30_000);
        assert_eq!(config.labels, LabelConfig::default());
        assert_eq!(config.policy, FailurePolicy::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_explicit_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
log-level: debug
github:
  api-url: https://ghe.example.com/api/v3
  timeout-ms: 5000
labels:
  pass: "QA: Passed"
  fail: "QA: Failed"
policy:
  fail-on-qa-failed: true
  ambiguous: fail
"#
        )
        .unwrap();

        let config = Config::load(Some(&file.path().to_path_buf())).unwrap();
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert_eq!(config.github.api_url, "https://ghe.example.com/api/v3");
        assert_eq!(config.github.timeout_ms, 5000);
        assert_eq!(config.labels.pass(), Some("QA: Passed"));
        assert_eq!(config.labels.rtt(), None);
        assert!(config.policy.fail_on_qa_failed);
        assert!(!config.policy.fail_on_not_qa);
        assert_eq!(config.policy.ambiguous, AmbiguousPolicy::Fail);
    }

    #[test]
    fn test_load_missing_explicit_file_fails() {
        let path = PathBuf::from("/nonexistent/qa-labels.yml");
        assert!(Config::load(Some(&path)).is_err());
    }

    #[test]
    fn test_load_rejects_zero_timeout() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "github:\n  timeout-ms: 0").unwrap();
        assert!(Config::load(Some(&file.path().to_path_buf())).is_err());
    }

    #[test]
    fn test_search_paths_project_first() {
        let paths = Config::search_paths();
        assert_eq!(paths[0], PathBuf::from("qa-labels.yml"));
        if let Some(user) = paths.get(1) {
            assert!(user.ends_with("qa-labels/qa-labels.yml"));
        }
    }

    #[test]
    fn test_malformed_discovered_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("qa-labels.yml");
        fs::write(&broken, "labels:\n  rtt: [broken\n").unwrap();
        let valid = dir.path().join("user.yml");
        fs::write(&valid, "labels:\n  rtt: qa-rtt\n").unwrap();

        let err = Config::load_first(&[broken.clone(), valid]).unwrap_err();
        assert!(format!("{:#}", err).contains(&broken.display().to_string()));
    }

    #[test]
    fn test_load_first_skips_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("qa-labels.yml");
        let valid = dir.path().join("user.yml");
        fs::write(&valid, "labels:\n  rtt: qa-rtt\n").unwrap();

        let config = Config::load_first(&[missing, valid]).unwrap();
        assert_eq!(config.labels.rtt(), Some("qa-rtt"));
    }

    #[test]
    fn test_load_first_defaults_when_nothing_found() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_first(&[dir.path().join("absent.yml")]).unwrap();
        assert_eq!(config.labels, LabelConfig::default());
    }

    #[test]
    fn test_client_config_override() {
        let settings = GitHubSettings {
            user_agent: Some("my-bot".to_string()),
            ..Default::default()
        };
        let client = settings.client_config(Some("https://ghe.example.com/api/v3"));
        assert_eq!(client.api_url, "https://ghe.example.com/api/v3");
        assert_eq!(client.user_agent, "my-bot");
        assert_eq!(client.timeout, Duration::from_secs(30));

        let client = settings.client_config(None);
        assert_eq!(client.api_url, "https://api.github.com");
    }
}

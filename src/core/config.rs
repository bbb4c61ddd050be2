use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::catalog::IssueType;

pub const CONFIG_FILE: &str = ".builddoctor.yml";

/// Where the CI runner leaves build logs when nothing is configured.
pub const DEFAULT_LOG_PATHS: &[&str] = &["~/Library/Logs/gym", "fastlane/report.xml"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub log_paths: Option<Vec<String>>,
    pub ignore: Option<IgnoreConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IgnoreConfig {
    pub issues: Option<Vec<IssueType>>,
}

impl Config {
    pub fn load(dir: &Path) -> Self {
        let config_path = dir.join(CONFIG_FILE);
        if config_path.exists() {
            match std::fs::read_to_string(&config_path) {
                Ok(content) => match serde_yaml::from_str::<Config>(&content) {
                    Ok(config) => {
                        tracing::debug!(path = %config_path.display(), "loaded config");
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!(path = %config_path.display(), error = %e, "ignoring malformed config");
                    }
                },
                Err(e) => {
                    tracing::warn!(path = %config_path.display(), error = %e, "could not read config");
                }
            }
        }
        Config::default()
    }

    pub fn log_paths(&self) -> Vec<String> {
        match &self.log_paths {
            Some(paths) if !paths.is_empty() => paths.clone(),
            _ => DEFAULT_LOG_PATHS.iter().map(|p| p.to_string()).collect(),
        }
    }

    pub fn ignored_issues(&self) -> Vec<IssueType> {
        self.ignore
            .as_ref()
            .and_then(|i| i.issues.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = Config::load(tmp.path());
        assert!(config.log_paths.is_none());
        assert!(config.ignored_issues().is_empty());
        assert_eq!(config.log_paths(), vec!["~/Library/Logs/gym", "fastlane/report.xml"]);
    }

    #[test]
    fn test_load_config_from_file() {
        let tmp = TempDir::new().unwrap();
        let yaml = "log_paths:\n  - build/xcode.log\nignore:\n  issues:\n    - capabilities_mismatch\n";
        fs::write(tmp.path().join(CONFIG_FILE), yaml).unwrap();
        let config = Config::load(tmp.path());
        assert_eq!(config.log_paths(), vec!["build/xcode.log".to_string()]);
        assert_eq!(config.ignored_issues(), vec![IssueType::CapabilitiesMismatch]);
    }

    #[test]
    fn test_malformed_config_falls_back_to_default() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), "ignore:\n  issues:\n    - not_a_type\n").unwrap();
        let config = Config::load(tmp.path());
        assert!(config.ignore.is_none());
    }

    #[test]
    fn test_empty_log_paths_use_defaults() {
        let config = Config {
            log_paths: Some(vec![]),
            ignore: None,
        };
        assert_eq!(config.log_paths().len(), DEFAULT_LOG_PATHS.len());
    }
}

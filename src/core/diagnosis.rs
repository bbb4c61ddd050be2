use anyhow::Result;
use std::time::{Duration, Instant};

use crate::core::classifier::{AnalysisResult, Classifier};
use crate::core::config::Config;
use crate::core::locator::LogSource;
use crate::fixers::generate_fix_commands;

/// One run over one build log.
#[derive(Debug, Clone)]
pub struct Diagnosis {
    pub source: String,
    pub analysis: AnalysisResult,
    pub fix_commands: Vec<String>,
    pub duration: Duration,
}

pub struct Diagnoser {
    classifier: Classifier,
}

impl Diagnoser {
    pub fn new(classifier: Classifier) -> Self {
        Self { classifier }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(Classifier::with_ignored(&config.ignored_issues()))
    }

    pub async fn diagnose(&self, source: &LogSource) -> Result<Diagnosis> {
        let text = source.read().await?;
        Ok(self.diagnose_text(source.to_string(), &text))
    }

    pub fn diagnose_text(&self, source: String, text: &str) -> Diagnosis {
        let start = Instant::now();
        tracing::info!(source = %source, bytes = text.len(), "analyzing build log");

        let analysis = self.classifier.analyze(text);
        let fix_commands = generate_fix_commands(&analysis.detected_issues);

        Diagnosis {
            source,
            analysis,
            fix_commands,
            duration: start.elapsed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::IssueType;
    use crate::core::config::IgnoreConfig;
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_diagnose_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("gym.log");
        fs::write(&path, "bundler: failed to load command: fastlane").unwrap();

        let diagnoser = Diagnoser::new(Classifier::new());
        let diagnosis = diagnoser.diagnose(&LogSource::File(path.clone())).await.unwrap();

        assert_eq!(diagnosis.source, path.display().to_string());
        assert_eq!(diagnosis.analysis.issues_found, 1);
        assert_eq!(diagnosis.fix_commands.len(), 3);
    }

    #[test]
    fn test_clean_log_has_no_commands() {
        let diagnoser = Diagnoser::new(Classifier::new());
        let diagnosis = diagnoser.diagnose_text("inline".into(), "** ARCHIVE SUCCEEDED **");
        assert!(diagnosis.analysis.is_clean());
        assert!(diagnosis.fix_commands.is_empty());
    }

    #[test]
    fn test_config_ignore_drops_commands() {
        let config = Config {
            log_paths: None,
            ignore: Some(IgnoreConfig {
                issues: Some(vec![IssueType::CodeSigning]),
            }),
        };
        let diagnoser = Diagnoser::from_config(&config);
        let diagnosis = diagnoser.diagnose_text(
            "inline".into(),
            "No certificate matching 'Apple Distribution' found",
        );
        assert!(diagnosis.analysis.is_clean());
        assert!(diagnosis.fix_commands.is_empty());
    }
}

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::OnceLock;

use crate::catalog::{catalog, IssueRule, IssueType, SolutionId};

/// One finding: the rule that fired and the first of its patterns that matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectedIssue {
    #[serde(rename = "type")]
    pub issue_type: IssueType,
    pub pattern: String,
    pub solutions: Vec<SolutionId>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub issues_found: usize,
    pub detected_issues: Vec<DetectedIssue>,
    /// Deduplicated guidance. Only membership is meaningful.
    pub recommended_actions: BTreeSet<String>,
}

impl AnalysisResult {
    pub fn is_clean(&self) -> bool {
        self.detected_issues.is_empty()
    }

    pub fn contains(&self, issue_type: IssueType) -> bool {
        self.detected_issues.iter().any(|i| i.issue_type == issue_type)
    }
}

struct CompiledRule {
    rule: &'static IssueRule,
    patterns: Vec<(&'static str, Regex)>,
}

impl CompiledRule {
    fn compile(rule: &'static IssueRule) -> Self {
        let patterns = rule
            .patterns
            .iter()
            .filter_map(|p| match RegexBuilder::new(p).case_insensitive(true).build() {
                Ok(re) => Some((*p, re)),
                Err(e) => {
                    tracing::warn!(pattern = %p, error = %e, "skipping invalid catalog pattern");
                    None
                }
            })
            .collect();
        Self { rule, patterns }
    }

    /// First pattern that matches wins; later patterns of the same rule are
    /// never consulted.
    fn first_match(&self, text: &str) -> Option<&'static str> {
        self.patterns
            .iter()
            .find(|(_, re)| re.is_match(text))
            .map(|(p, _)| *p)
    }
}

/// Matches log text against the issue catalog. Holds no mutable state.
pub struct Classifier {
    rules: Vec<CompiledRule>,
}

impl Classifier {
    pub fn new() -> Self {
        Self::with_ignored(&[])
    }

    /// Build a classifier that never reports the given issue types.
    pub fn with_ignored(ignored: &[IssueType]) -> Self {
        let rules = catalog()
            .iter()
            .filter(|r| !ignored.contains(&r.issue_type))
            .map(CompiledRule::compile)
            .collect();
        Self { rules }
    }

    pub fn analyze(&self, text: &str) -> AnalysisResult {
        let mut detected_issues = Vec::new();

        for compiled in &self.rules {
            if let Some(pattern) = compiled.first_match(text) {
                tracing::debug!(issue = %compiled.rule.issue_type.id(), pattern, "issue detected");
                detected_issues.push(DetectedIssue {
                    issue_type: compiled.rule.issue_type,
                    pattern: pattern.to_string(),
                    solutions: compiled.rule.solutions.to_vec(),
                });
            }
        }

        let recommended_actions = recommended_actions(&detected_issues);

        AnalysisResult {
            issues_found: detected_issues.len(),
            detected_issues,
            recommended_actions,
        }
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

fn recommended_actions(issues: &[DetectedIssue]) -> BTreeSet<String> {
    issues
        .iter()
        .flat_map(|i| i.issue_type.recommended_actions())
        .map(|a| a.to_string())
        .collect()
}

/// Classify `text` against the full catalog.
pub fn analyze(text: &str) -> AnalysisResult {
    static DEFAULT: OnceLock<Classifier> = OnceLock::new();
    DEFAULT.get_or_init(Classifier::new).analyze(text)
}

use anyhow::Result;
use std::fmt::Write;

use crate::core::diagnosis::Diagnosis;
use crate::reporters::traits::Reporter;

/// Markdown suitable for a CI job summary.
pub struct MarkdownReporter;

impl Reporter for MarkdownReporter {
    fn name(&self) -> &str {
        "Markdown"
    }

    fn extension(&self) -> &str {
        "md"
    }

    fn generate(&self, diagnosis: &Diagnosis) -> Result<String> {
        let analysis = &diagnosis.analysis;
        let mut out = String::new();

        writeln!(out, "# Build log diagnosis")?;
        writeln!(out)?;
        writeln!(out, "Log: `{}`", diagnosis.source)?;
        writeln!(out)?;

        if analysis.is_clean() {
            writeln!(out, "No known failure patterns were found.")?;
            return Ok(out);
        }

        writeln!(out, "## Detected issues ({})", analysis.issues_found)?;
        writeln!(out)?;
        writeln!(out, "| Issue | Matched pattern | Solutions |")?;
        writeln!(out, "|---|---|---|")?;
        for issue in &analysis.detected_issues {
            let solutions: Vec<String> = issue.solutions.iter().map(|s| s.to_string()).collect();
            writeln!(
                out,
                "| {} | `{}` | {} |",
                issue.issue_type,
                issue.pattern.replace('|', "\\|"),
                solutions.join(", ")
            )?;
        }
        writeln!(out)?;

        writeln!(out, "## Recommended actions")?;
        writeln!(out)?;
        for action in &analysis.recommended_actions {
            writeln!(out, "- {}", action)?;
        }

        if !diagnosis.fix_commands.is_empty() {
            writeln!(out)?;
            writeln!(out, "## Fix commands")?;
            writeln!(out)?;
            writeln!(out, "```sh")?;
            for cmd in &diagnosis.fix_commands {
                writeln!(out, "{}", cmd)?;
            }
            writeln!(out, "```")?;
        }

        Ok(out)
    }
}

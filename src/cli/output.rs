use anyhow::Result;
use colored::*;

use crate::core::diagnosis::Diagnosis;
use crate::reporters::json::to_json;

pub struct OutputFormatter {
    format: String,
}

impl OutputFormatter {
    pub fn new(format: &str) -> Self {
        Self {
            format: format.to_string(),
        }
    }

    pub fn display(&self, diagnosis: &Diagnosis) -> Result<()> {
        match self.format.as_str() {
            "json" => self.display_json(diagnosis),
            _ => {
                self.display_table(diagnosis);
                Ok(())
            }
        }
    }

    fn display_json(&self, diagnosis: &Diagnosis) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(&to_json(diagnosis))?);
        Ok(())
    }

    fn display_table(&self, diagnosis: &Diagnosis) {
        let analysis = &diagnosis.analysis;

        println!();
        println!("{}", format!("builddoctor v{}", env!("CARGO_PKG_VERSION")).bold());
        println!("{}", "─".repeat(64));
        println!();
        println!("  Log:      {}", diagnosis.source.cyan());
        println!(
            "  Analyzed in {:.1}ms",
            diagnosis.duration.as_secs_f64() * 1000.0
        );
        println!();
        println!("{}", "─".repeat(64));
        println!();

        if analysis.is_clean() {
            println!("  {}", "No known failure patterns found.".green().bold());
            println!();
            return;
        }

        println!(
            "  {}",
            format!("DETECTED ISSUES: {}", analysis.issues_found).red().bold()
        );
        println!();

        for issue in &analysis.detected_issues {
            println!(
                "    {}  {}",
                issue.issue_type.id().yellow().bold(),
                issue.issue_type
            );
            println!("           Pattern: {}", issue.pattern.dimmed());
            let solutions: Vec<String> = issue.solutions.iter().map(|s| s.to_string()).collect();
            println!("           Solutions: {}", solutions.join(", "));
            if !issue.issue_type.fix_commands().is_empty() {
                println!("           {}", "Auto-fixable: Yes".green());
            }
            println!();
        }

        println!("{}", "─".repeat(64));
        println!();
        println!("  RECOMMENDED ACTIONS");
        for action in &analysis.recommended_actions {
            println!("    - {}", action);
        }

        if !diagnosis.fix_commands.is_empty() {
            println!();
            println!("  FIX COMMANDS (run `builddoctor fix` to apply)");
            for cmd in &diagnosis.fix_commands {
                println!("    $ {}", cmd.cyan());
            }
        }
        println!();
    }
}

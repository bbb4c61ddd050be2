use anyhow::Result;

use crate::core::diagnosis::Diagnosis;
use crate::reporters::traits::Reporter;

pub struct JsonReporter;

pub fn to_json(diagnosis: &Diagnosis) -> serde_json::Value {
    serde_json::json!({
        "source": diagnosis.source,
        "issues_found": diagnosis.analysis.issues_found,
        "detected_issues": diagnosis.analysis.detected_issues,
        "recommended_actions": diagnosis.analysis.recommended_actions,
        "fix_commands": diagnosis.fix_commands,
        "duration_ms": diagnosis.duration.as_millis(),
    })
}

impl Reporter for JsonReporter {
    fn name(&self) -> &str {
        "JSON"
    }

    fn extension(&self) -> &str {
        "json"
    }

    fn generate(&self, diagnosis: &Diagnosis) -> Result<String> {
        Ok(serde_json::to_string_pretty(&to_json(diagnosis))?)
    }
}

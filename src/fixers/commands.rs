use crate::core::classifier::DetectedIssue;

/// Shell commands that remediate the given issues, in issue order.
///
/// Only cleanup that is safe to repeat (gem reinstall, temporary keychain
/// reset) is generated. Profile and certificate work needs account access
/// and is left to the recommended actions.
pub fn generate_fix_commands(issues: &[DetectedIssue]) -> Vec<String> {
    issues
        .iter()
        .flat_map(|issue| issue.issue_type.fix_commands())
        .map(|cmd| cmd.to_string())
        .collect()
}

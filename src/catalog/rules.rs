use super::types::{IssueRule, IssueType, SolutionId};

/// Known failure signatures, in reporting order. Patterns are regexes
/// matched case-insensitively anywhere in the log.
const RULES: &[IssueRule] = &[
    IssueRule {
        issue_type: IssueType::ProvisioningProfile,
        patterns: &[
            r"No profiles for .* were found",
            r"requires a provisioning profile",
            r"Profile is missing the required UUID",
        ],
        solutions: &[
            SolutionId::RegenerateProvisioningProfile,
            SolutionId::UpdateBundleIdInProfile,
            SolutionId::CheckAppCapabilities,
        ],
    },
    IssueRule {
        issue_type: IssueType::CodeSigning,
        patterns: &[
            r"No signing certificate .* found",
            r"No certificate matching .* found",
            r"Code signing is required",
        ],
        solutions: &[
            SolutionId::RegenerateCertificates,
            SolutionId::UpdateCertificateName,
            SolutionId::SwitchToAutomaticSigning,
        ],
    },
    IssueRule {
        issue_type: IssueType::CapabilitiesMismatch,
        patterns: &[
            r"requires a provisioning profile with the .* feature",
            r"App Groups feature",
            r"Push Notifications feature",
        ],
        solutions: &[
            SolutionId::RemoveUnusedCapabilities,
            SolutionId::AddCapabilitiesToProfile,
            SolutionId::UpdateAppIdConfiguration,
        ],
    },
    IssueRule {
        issue_type: IssueType::GemDependencies,
        patterns: &[
            r"Could not find gem",
            r"bundler: failed to load command",
            r"Gem::LoadError",
        ],
        solutions: &[
            SolutionId::UpdateGemfile,
            SolutionId::ClearGemCache,
            SolutionId::InstallMissingGems,
        ],
    },
];

pub fn catalog() -> &'static [IssueRule] {
    RULES
}

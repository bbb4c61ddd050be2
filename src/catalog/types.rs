use serde::{Deserialize, Serialize};

/// A category of build failure the classifier recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueType {
    ProvisioningProfile,
    CodeSigning,
    CapabilitiesMismatch,
    GemDependencies,
}

impl IssueType {
    pub const ALL: [IssueType; 4] = [
        IssueType::ProvisioningProfile,
        IssueType::CodeSigning,
        IssueType::CapabilitiesMismatch,
        IssueType::GemDependencies,
    ];

    /// Identifier used in configuration files and on the command line.
    pub fn id(&self) -> &'static str {
        match self {
            IssueType::ProvisioningProfile => "provisioning_profile",
            IssueType::CodeSigning => "code_signing",
            IssueType::CapabilitiesMismatch => "capabilities_mismatch",
            IssueType::GemDependencies => "gem_dependencies",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.id() == id.trim())
    }

    /// Human-readable guidance shown for every detection of this type.
    pub fn recommended_actions(&self) -> &'static [&'static str] {
        match self {
            IssueType::ProvisioningProfile => &[
                "Regenerate the provisioning profile",
                "Check the App ID capabilities",
            ],
            IssueType::CodeSigning => &[
                "Regenerate the signing certificate or fix its name",
                "Consider switching to automatic signing",
            ],
            IssueType::CapabilitiesMismatch => &[
                "App capabilities do not match the provisioning profile",
                "Remove unused capabilities or add them to the profile",
            ],
            IssueType::GemDependencies => &[
                "Ruby gem dependencies are broken",
                "Re-run bundle install",
            ],
        }
    }

    /// Shell commands safe to run unattended for this type. Anything that
    /// needs account access stays a recommendation.
    pub fn fix_commands(&self) -> &'static [&'static str] {
        match self {
            IssueType::GemDependencies => &[
                "gem update bundler",
                "bundle clean --force",
                "bundle install",
            ],
            IssueType::CodeSigning => &[
                "security delete-keychain fastlane_tmp_keychain || true",
                "security create-keychain -p '' fastlane_tmp_keychain",
                "security set-keychain-settings fastlane_tmp_keychain",
            ],
            IssueType::ProvisioningProfile | IssueType::CapabilitiesMismatch => &[],
        }
    }
}

impl std::fmt::Display for IssueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IssueType::ProvisioningProfile => write!(f, "Provisioning profile"),
            IssueType::CodeSigning => write!(f, "Code signing"),
            IssueType::CapabilitiesMismatch => write!(f, "Capabilities mismatch"),
            IssueType::GemDependencies => write!(f, "Gem dependencies"),
        }
    }
}

/// Abstract name of a remediation. Only some of them have a generated command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolutionId {
    RegenerateProvisioningProfile,
    UpdateBundleIdInProfile,
    CheckAppCapabilities,
    RegenerateCertificates,
    UpdateCertificateName,
    SwitchToAutomaticSigning,
    RemoveUnusedCapabilities,
    AddCapabilitiesToProfile,
    UpdateAppIdConfiguration,
    UpdateGemfile,
    ClearGemCache,
    InstallMissingGems,
}

impl std::fmt::Display for SolutionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let id = match self {
            SolutionId::RegenerateProvisioningProfile => "regenerate_provisioning_profile",
            SolutionId::UpdateBundleIdInProfile => "update_bundle_id_in_profile",
            SolutionId::CheckAppCapabilities => "check_app_capabilities",
            SolutionId::RegenerateCertificates => "regenerate_certificates",
            SolutionId::UpdateCertificateName => "update_certificate_name",
            SolutionId::SwitchToAutomaticSigning => "switch_to_automatic_signing",
            SolutionId::RemoveUnusedCapabilities => "remove_unused_capabilities",
            SolutionId::AddCapabilitiesToProfile => "add_capabilities_to_profile",
            SolutionId::UpdateAppIdConfiguration => "update_app_id_configuration",
            SolutionId::UpdateGemfile => "update_gemfile",
            SolutionId::ClearGemCache => "clear_gem_cache",
            SolutionId::InstallMissingGems => "install_missing_gems",
        };
        write!(f, "{}", id)
    }
}

/// One catalog entry: what to look for and how to remediate it.
#[derive(Debug, Clone, Copy)]
pub struct IssueRule {
    pub issue_type: IssueType,
    pub patterns: &'static [&'static str],
    pub solutions: &'static [SolutionId],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_type_id_round_trip() {
        for t in IssueType::ALL {
            assert_eq!(IssueType::from_id(t.id()), Some(t));
        }
        assert_eq!(IssueType::from_id("unknown"), None);
    }

    #[test]
    fn test_issue_type_serializes_snake_case() {
        let json = serde_json::to_string(&IssueType::GemDependencies).unwrap();
        assert_eq!(json, "\"gem_dependencies\"");
        let parsed: IssueType = serde_yaml::from_str("code_signing").unwrap();
        assert_eq!(parsed, IssueType::CodeSigning);
    }

    #[test]
    fn test_every_type_has_two_actions() {
        for t in IssueType::ALL {
            assert_eq!(t.recommended_actions().len(), 2, "{}", t);
        }
    }

    #[test]
    fn test_only_cleanup_types_have_commands() {
        assert_eq!(IssueType::GemDependencies.fix_commands().len(), 3);
        assert_eq!(IssueType::CodeSigning.fix_commands().len(), 3);
        assert!(IssueType::ProvisioningProfile.fix_commands().is_empty());
        assert!(IssueType::CapabilitiesMismatch.fix_commands().is_empty());
    }

    #[test]
    fn test_solution_display_matches_serde() {
        let json = serde_json::to_string(&SolutionId::SwitchToAutomaticSigning).unwrap();
        assert_eq!(json, format!("\"{}\"", SolutionId::SwitchToAutomaticSigning));
    }
}

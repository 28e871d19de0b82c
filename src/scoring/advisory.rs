use serde::Serialize;

use crate::profile::{BudgetConstraint, DataSovereignty, OrganizationProfile};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Consideration {
    ComplianceVerification,
    DataResidency,
    MultiCloud,
    CapabilityVerification,
}

impl Consideration {
    pub fn message(&self) -> &'static str {
        match self {
            Consideration::ComplianceVerification => {
                "Ensure detailed compliance verification for chosen providers"
            }
            Consideration::DataResidency => {
                "Review data residency requirements and provider capabilities"
            }
            Consideration::MultiCloud => "Consider multi-cloud strategy to optimize costs",
            Consideration::CapabilityVerification => {
                "Verify specific technical capabilities with provider documentation"
            }
        }
    }
}

/// Follow-up advice for a profile, independent of the scores.
pub fn considerations(profile: &OrganizationProfile) -> Vec<Consideration> {
    let mut notes = Vec::new();
    if !profile.compliance.is_empty() {
        notes.push(Consideration::ComplianceVerification);
    }
    if profile.data_sovereignty != DataSovereignty::None {
        notes.push(Consideration::DataResidency);
    }
    if profile.budget == BudgetConstraint::High {
        notes.push(Consideration::MultiCloud);
    }
    if !profile.tech.is_empty() {
        notes.push(Consideration::CapabilityVerification);
    }
    notes
}

/// Labels of selected flags that were taken into account for advice only.
pub fn advisory_only_flags(profile: &OrganizationProfile) -> Vec<&'static str> {
    let compliance = profile
        .compliance
        .iter()
        .filter(|c| !c.affects_score())
        .map(|c| c.label());
    let tech = profile
        .tech
        .iter()
        .filter(|t| !t.affects_score())
        .map(|t| t.label());
    compliance.chain(tech).collect()
}

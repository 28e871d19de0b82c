use super::category::CategoryScores;
use crate::profile::{
    BudgetConstraint, ComplianceNeed, DataSovereignty, Industry, OrganizationProfile, Region,
    TechRequirement,
};

/// Points each industry weight is applied to.
pub const BASE_POINTS: f64 = 100.0;

/// Per-category multipliers for an industry, applied to [`BASE_POINTS`].
pub fn industry_weights(industry: Industry) -> CategoryScores {
    match industry {
        Industry::Tech => CategoryScores::new(1.0, 0.9, 0.8),
        Industry::Finance => CategoryScores::new(1.0, 1.0, 0.6),
        Industry::Healthcare => CategoryScores::new(1.0, 0.9, 0.5),
        Industry::Manufacturing => CategoryScores::new(0.9, 0.8, 1.0),
        Industry::AiResearch => CategoryScores::new(1.0, 0.9, 0.9),
        Industry::Government => CategoryScores::new(1.0, 0.8, 0.4),
        Industry::Other => CategoryScores::new(1.0, 0.9, 0.7),
    }
}

/// Delta added when a compliance need is selected. Needs that only drive
/// advisory text map to zero.
pub fn compliance_delta(need: ComplianceNeed) -> CategoryScores {
    match need {
        ComplianceNeed::Gdpr => CategoryScores::new(20.0, 30.0, -20.0),
        ComplianceNeed::Hipaa => CategoryScores::new(30.0, 10.0, -20.0),
        ComplianceNeed::FedRamp => CategoryScores::new(40.0, -10.0, -30.0),
        ComplianceNeed::Pci | ComplianceNeed::Sox | ComplianceNeed::Iso27001 => {
            CategoryScores::ZERO
        }
    }
}

/// Delta added when a technical requirement is selected. Requirements that
/// only drive advisory text map to zero.
pub fn tech_delta(requirement: TechRequirement) -> CategoryScores {
    match requirement {
        TechRequirement::AiMl => CategoryScores::new(20.0, 0.0, 20.0),
        TechRequirement::EdgeComputing => CategoryScores::new(15.0, 15.0, 0.0),
        TechRequirement::Iot => CategoryScores::new(0.0, 15.0, 20.0),
        TechRequirement::Serverless | TechRequirement::Containers | TechRequirement::Blockchain => {
            CategoryScores::ZERO
        }
    }
}

/// One additive step of the scoring pipeline.
#[derive(Clone, Copy)]
pub struct Factor {
    pub label: &'static str,
    pub apply: fn(&OrganizationProfile) -> CategoryScores,
}

/// Scoring pipeline, applied in order to a zero score set.
pub const FACTORS: &[Factor] = &[
    Factor {
        label: "Industry",
        apply: industry_base,
    },
    Factor {
        label: "Budget",
        apply: budget,
    },
    Factor {
        label: "Data Sovereignty",
        apply: data_sovereignty,
    },
    Factor {
        label: "GDPR",
        apply: gdpr,
    },
    Factor {
        label: "HIPAA",
        apply: hipaa,
    },
    Factor {
        label: "FedRAMP",
        apply: fedramp,
    },
    Factor {
        label: "AI/ML",
        apply: ai_ml,
    },
    Factor {
        label: "Edge Computing",
        apply: edge_computing,
    },
    Factor {
        label: "IoT",
        apply: iot,
    },
];

pub fn industry_base(profile: &OrganizationProfile) -> CategoryScores {
    industry_weights(profile.industry).map(|w| w * BASE_POINTS)
}

pub fn budget(profile: &OrganizationProfile) -> CategoryScores {
    match profile.budget {
        BudgetConstraint::High => CategoryScores::new(0.0, 10.0, 20.0),
        BudgetConstraint::Low => CategoryScores::new(20.0, 0.0, 0.0),
        BudgetConstraint::Medium => CategoryScores::ZERO,
    }
}

pub fn data_sovereignty(profile: &OrganizationProfile) -> CategoryScores {
    match profile.data_sovereignty {
        DataSovereignty::MustStayInCountry => {
            let eu = if profile.region == Region::Europe { 30.0 } else { 0.0 };
            CategoryScores::new(-20.0, eu, -40.0)
        }
        DataSovereignty::PreferLocal | DataSovereignty::None => CategoryScores::ZERO,
    }
}

fn if_required(profile: &OrganizationProfile, need: ComplianceNeed) -> CategoryScores {
    if profile.requires(need) {
        compliance_delta(need)
    } else {
        CategoryScores::ZERO
    }
}

fn if_needed(profile: &OrganizationProfile, requirement: TechRequirement) -> CategoryScores {
    if profile.needs(requirement) {
        tech_delta(requirement)
    } else {
        CategoryScores::ZERO
    }
}

pub fn gdpr(profile: &OrganizationProfile) -> CategoryScores {
    if_required(profile, ComplianceNeed::Gdpr)
}

pub fn hipaa(profile: &OrganizationProfile) -> CategoryScores {
    if_required(profile, ComplianceNeed::Hipaa)
}

pub fn fedramp(profile: &OrganizationProfile) -> CategoryScores {
    if_required(profile, ComplianceNeed::FedRamp)
}

pub fn ai_ml(profile: &OrganizationProfile) -> CategoryScores {
    if_needed(profile, TechRequirement::AiMl)
}

pub fn edge_computing(profile: &OrganizationProfile) -> CategoryScores {
    if_needed(profile, TechRequirement::EdgeComputing)
}

pub fn iot(profile: &OrganizationProfile) -> CategoryScores {
    if_needed(profile, TechRequirement::Iot)
}

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;

use super::error::ProfileError;
use super::types::{
    BudgetConstraint, ComplianceNeed, DataSovereignty, Industry, OrganizationProfile, Region,
    TechRequirement,
};

/// Raw organization profile as written in the config file or given on the
/// command line.
///
/// Every field is optional and kept as text until [`ProfileConfig::resolve`]
/// turns it into an [`OrganizationProfile`].
///
/// Example YAML:
/// ```yaml
/// profile:
///   industry: finance
///   region: europe
///   budget: high
///   data_sovereignty: must-stay-in-country
///   compliance: [gdpr, pci]
///   tech: [ai-ml, iot]
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ProfileConfig {
    /// Industry label (default: other). Unrecognized values score as "other".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,

    /// Primary region of operation (default: global)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    /// Budget constraint level: low, medium or high (default: medium)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<String>,

    /// Data residency requirement (default: none). Unrecognized values count as none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_sovereignty: Option<String>,

    /// Compliance frameworks the organization must satisfy
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compliance: Option<Vec<String>>,

    /// Technical capabilities the organization needs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tech: Option<Vec<String>>,
}

impl ProfileConfig {
    /// Overlay `overrides` on top of `self`, field by field.
    pub fn merge(self, overrides: ProfileConfig) -> ProfileConfig {
        ProfileConfig {
            industry: overrides.industry.or(self.industry),
            region: overrides.region.or(self.region),
            budget: overrides.budget.or(self.budget),
            data_sovereignty: overrides.data_sovereignty.or(self.data_sovereignty),
            compliance: overrides.compliance.or(self.compliance),
            tech: overrides.tech.or(self.tech),
        }
    }

    /// Build the typed profile. Stops at the first invalid field; run
    /// [`validate_profile`](super::validate_profile) first to report them all.
    pub fn resolve(&self) -> Result<OrganizationProfile, ProfileError> {
        let defaults = OrganizationProfile::default();

        let industry = match self.industry.as_deref() {
            Some(raw) => {
                let industry = Industry::from_label_or_other(raw);
                if industry == Industry::Other && raw.parse::<Industry>().is_err() {
                    tracing::warn!(industry = raw, "unknown industry, scoring as other");
                }
                industry
            }
            None => defaults.industry,
        };

        let data_sovereignty = match self.data_sovereignty.as_deref() {
            Some(raw) => {
                let sovereignty = DataSovereignty::from_label_or_none(raw);
                if sovereignty == DataSovereignty::None
                    && raw.parse::<DataSovereignty>().is_err()
                {
                    tracing::warn!(
                        data_sovereignty = raw,
                        "unknown data sovereignty requirement, treating as none"
                    );
                }
                sovereignty
            }
            None => defaults.data_sovereignty,
        };

        let region = match self.region.as_deref() {
            Some(raw) => raw.parse::<Region>()?,
            None => defaults.region,
        };

        let budget = match self.budget.as_deref() {
            Some(raw) => raw.parse::<BudgetConstraint>()?,
            None => defaults.budget,
        };

        let compliance = parse_set::<ComplianceNeed>(self.compliance.as_deref())?;
        let tech = parse_set::<TechRequirement>(self.tech.as_deref())?;

        Ok(OrganizationProfile {
            industry,
            region,
            budget,
            data_sovereignty,
            compliance,
            tech,
        })
    }
}

impl From<&OrganizationProfile> for ProfileConfig {
    fn from(profile: &OrganizationProfile) -> Self {
        ProfileConfig {
            industry: Some(profile.industry.id().to_string()),
            region: Some(profile.region.id().to_string()),
            budget: Some(profile.budget.id().to_string()),
            data_sovereignty: Some(profile.data_sovereignty.id().to_string()),
            compliance: Some(profile.compliance.iter().map(|c| c.id().to_string()).collect()),
            tech: Some(profile.tech.iter().map(|t| t.id().to_string()).collect()),
        }
    }
}

fn parse_set<T>(items: Option<&[String]>) -> Result<BTreeSet<T>, ProfileError>
where
    T: FromStr<Err = ProfileError> + Ord,
{
    items
        .unwrap_or_default()
        .iter()
        .map(|item| item.parse::<T>())
        .collect()
}

use serde::Serialize;

use crate::profile::OrganizationProfile;
use crate::scoring::{
    advisory_only_flags, considerations, evaluate_detailed, rank, Consideration, Evaluation,
    Recommendation,
};

/// Everything shown for one evaluation.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub profile: OrganizationProfile,
    #[serde(flatten)]
    pub evaluation: Evaluation,
    pub recommendations: Vec<Recommendation>,
    pub considerations: Vec<ConsiderationNote>,
    pub advisory_only: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConsiderationNote {
    pub kind: Consideration,
    pub message: &'static str,
}

impl Report {
    pub fn build(profile: OrganizationProfile) -> Self {
        let evaluation = evaluate_detailed(&profile);
        let recommendations = rank(&evaluation.scores);
        let considerations = considerations(&profile)
            .into_iter()
            .map(|kind| ConsiderationNote {
                kind,
                message: kind.message(),
            })
            .collect();
        let advisory_only = advisory_only_flags(&profile);

        Report {
            profile,
            evaluation,
            recommendations,
            considerations,
            advisory_only,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{BudgetConstraint, ComplianceNeed, Industry};
    use crate::scoring::{ProviderCategory, Tier};

    #[test]
    fn test_report_ranks_and_advises() {
        let mut profile = OrganizationProfile {
            industry: Industry::Tech,
            budget: BudgetConstraint::High,
            ..Default::default()
        };
        profile.compliance.insert(ComplianceNeed::Sox);

        let report = Report::build(profile);
        // US 100, EU 90 + 10 = 100, China 80 + 20 = 100
        assert_eq!(report.recommendations[0].category, ProviderCategory::Us);
        assert!(report
            .recommendations
            .iter()
            .all(|r| r.tier == Tier::StronglyRecommended));
        assert_eq!(report.considerations.len(), 2);
        assert_eq!(report.advisory_only, vec!["SOX"]);
    }

    #[test]
    fn test_report_json_shape() {
        let report = Report::build(OrganizationProfile::default());
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["profile"]["industry"], "other");
        assert_eq!(value["scores"]["us"], 100.0);
        assert_eq!(value["normalized"], false);
        assert_eq!(value["recommendations"][0]["tier"], "strongly-recommended");
        assert!(value["considerations"].as_array().unwrap().is_empty());
    }
}

use serde::Serialize;

use super::category::{CategoryScores, ProviderScore};
use super::factors::FACTORS;
use crate::profile::OrganizationProfile;

/// Highest score a category may show after normalization.
pub const SCORE_CEILING: f64 = 100.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FactorContribution {
    pub label: String,          // e.g. "Industry", "GDPR", "IoT"
    pub delta: CategoryScores,  // Points this factor added per category
    pub before: CategoryScores, // Totals before this factor
    pub after: CategoryScores,  // Totals after this factor
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    /// Totals after every factor, before normalization
    pub raw: CategoryScores,
    pub scores: ProviderScore,
    pub normalized: bool,
    pub factors: Vec<FactorContribution>,
}

/// Score a profile against every provider category.
pub fn evaluate(profile: &OrganizationProfile) -> ProviderScore {
    let raw = FACTORS
        .iter()
        .fold(CategoryScores::ZERO, |total, factor| total + (factor.apply)(profile));
    normalize(raw)
}

/// Same as [`evaluate`], keeping a record of what each factor contributed.
/// Factors with no effect on this profile are left out of the breakdown.
pub fn evaluate_detailed(profile: &OrganizationProfile) -> Evaluation {
    let mut total = CategoryScores::ZERO;
    let mut factors = Vec::new();

    for factor in FACTORS {
        let delta = (factor.apply)(profile);
        let before = total;
        total += delta;
        if !delta.is_zero() {
            factors.push(FactorContribution {
                label: factor.label.to_string(),
                delta,
                before,
                after: total,
            });
        }
    }

    let scores = normalize(total);
    tracing::debug!(
        us = scores.us,
        eu = scores.eu,
        china = scores.china,
        factors = factors.len(),
        "evaluated profile"
    );

    Evaluation {
        raw: total,
        normalized: scores != total,
        scores,
        factors,
    }
}

/// Rescale so the highest category is exactly 100 when any category is
/// above 100. Scores at or below 100 are returned unchanged, negatives
/// included.
pub fn normalize(scores: CategoryScores) -> ProviderScore {
    let max = scores.max();
    if max > SCORE_CEILING {
        scores.map(|v| (v / max) * SCORE_CEILING)
    } else {
        scores
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{
        BudgetConstraint, ComplianceNeed, DataSovereignty, Industry, ProfileConfig, Region,
        TechRequirement,
    };
    use crate::scoring::factors::industry_weights;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 0.01
    }

    fn tech_profile() -> OrganizationProfile {
        OrganizationProfile {
            industry: Industry::Tech,
            region: Region::NorthAmerica,
            budget: BudgetConstraint::Medium,
            data_sovereignty: DataSovereignty::None,
            ..Default::default()
        }
    }

    #[test]
    fn test_base_weights_only() {
        for industry in Industry::ALL {
            let profile = OrganizationProfile {
                industry,
                ..tech_profile()
            };
            let weights = industry_weights(industry);
            let scores = evaluate(&profile);
            assert_eq!(scores.us, weights.us * 100.0);
            assert_eq!(scores.eu, weights.eu * 100.0);
            assert_eq!(scores.china, weights.china * 100.0);
        }
    }

    #[test]
    fn test_fedramp_tech_normalizes() {
        let mut profile = tech_profile();
        profile.compliance.insert(ComplianceNeed::FedRamp);

        let detail = evaluate_detailed(&profile);
        assert_eq!(detail.raw, CategoryScores::new(140.0, 80.0, 50.0));
        assert!(detail.normalized);

        let scores = evaluate(&profile);
        assert_eq!(scores.us, 100.0);
        assert!(approx(scores.eu, 57.14));
        assert!(approx(scores.china, 35.71));
        assert_eq!(scores.eu, (80.0 / 140.0) * 100.0);
    }

    #[test]
    fn test_no_normalization_at_exactly_hundred() {
        let profile = tech_profile();
        let detail = evaluate_detailed(&profile);
        assert_eq!(detail.raw.max(), 100.0);
        assert!(!detail.normalized);
        assert_eq!(detail.scores, detail.raw);
    }

    #[test]
    fn test_negative_scores_are_not_floored() {
        // Government: China 40, sovereignty -40, GDPR -20, HIPAA -20, FedRAMP -30
        let mut profile = OrganizationProfile {
            industry: Industry::Government,
            data_sovereignty: DataSovereignty::MustStayInCountry,
            ..tech_profile()
        };
        profile.compliance.extend([
            ComplianceNeed::Gdpr,
            ComplianceNeed::Hipaa,
            ComplianceNeed::FedRamp,
        ]);

        let detail = evaluate_detailed(&profile);
        assert_eq!(detail.raw.china, -70.0);
        // US: 100 - 20 + 20 + 30 + 40 = 170
        assert_eq!(detail.raw.us, 170.0);
        assert_eq!(detail.scores.us, 100.0);
        assert!(detail.scores.china < 0.0);
        assert!(approx(detail.scores.china, -41.18));
    }

    #[test]
    fn test_scores_below_hundred_untouched() {
        let profile = OrganizationProfile {
            industry: Industry::Healthcare,
            data_sovereignty: DataSovereignty::MustStayInCountry,
            ..tech_profile()
        };
        let scores = evaluate(&profile);
        assert_eq!(scores, CategoryScores::new(80.0, 90.0, 10.0));
    }

    #[test]
    fn test_full_profile_ordering() {
        // Finance, Europe, High budget, must stay in country, GDPR, IoT
        let mut profile = OrganizationProfile {
            industry: Industry::Finance,
            region: Region::Europe,
            budget: BudgetConstraint::High,
            data_sovereignty: DataSovereignty::MustStayInCountry,
            ..Default::default()
        };
        profile.compliance.insert(ComplianceNeed::Gdpr);
        profile.tech.insert(TechRequirement::Iot);

        let detail = evaluate_detailed(&profile);
        // US: 100 - 20 + 20 = 100
        // EU: 100 + 10 + 30 + 30 + 15 = 185
        // China: 60 + 20 - 40 - 20 + 20 = 40
        assert_eq!(detail.raw, CategoryScores::new(100.0, 185.0, 40.0));
        assert_eq!(detail.scores.eu, 100.0);
        assert!(approx(detail.scores.us, 54.05));
        assert!(approx(detail.scores.china, 21.62));
    }

    #[test]
    fn test_breakdown_records_each_applied_factor() {
        let mut profile = tech_profile();
        profile.budget = BudgetConstraint::Low;
        profile.tech.insert(TechRequirement::AiMl);

        let detail = evaluate_detailed(&profile);
        let labels: Vec<_> = detail.factors.iter().map(|f| f.label.as_str()).collect();
        assert_eq!(labels, vec!["Industry", "Budget", "AI/ML"]);

        let budget = &detail.factors[1];
        assert_eq!(budget.before.us, 100.0);
        assert_eq!(budget.after.us, 120.0);
        assert_eq!(detail.factors.last().map(|f| f.after), Some(detail.raw));
    }

    #[test]
    fn test_advisory_only_flags_do_not_change_scores() {
        let baseline = evaluate(&tech_profile());

        let mut profile = tech_profile();
        profile.compliance.extend([
            ComplianceNeed::Pci,
            ComplianceNeed::Sox,
            ComplianceNeed::Iso27001,
        ]);
        profile.tech.extend([
            TechRequirement::Serverless,
            TechRequirement::Containers,
            TechRequirement::Blockchain,
        ]);

        assert_eq!(evaluate(&profile), baseline);
        assert_eq!(evaluate_detailed(&profile).factors.len(), 1);
    }

    #[test]
    fn test_unknown_industry_scores_as_other() {
        let config = ProfileConfig {
            industry: Some("Space Mining".to_string()),
            ..Default::default()
        };
        let profile = config.resolve().unwrap();
        let scores = evaluate(&profile);
        assert_eq!(scores.us, 100.0);
        assert_eq!(scores.eu, 0.9 * 100.0);
        assert_eq!(scores.china, 0.7 * 100.0);
    }

    #[test]
    fn test_evaluate_is_repeatable() {
        let mut profile = tech_profile();
        profile.compliance.insert(ComplianceNeed::Hipaa);
        assert_eq!(evaluate(&profile), evaluate(&profile));
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize(CategoryScores::new(140.0, 80.0, 50.0));
        assert_eq!(normalize(once), once);
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use crate::profile::{
        BudgetConstraint, ComplianceNeed, DataSovereignty, Industry, Region, TechRequirement,
    };
    use crate::scoring::factors::{compliance_delta, tech_delta};
    use crate::scoring::ProviderCategory;
    use proptest::prelude::*;
    use proptest::sample::{select, subsequence};

    fn arb_profile() -> impl Strategy<Value = OrganizationProfile> {
        (
            select(Industry::ALL.to_vec()),
            select(Region::ALL.to_vec()),
            select(BudgetConstraint::ALL.to_vec()),
            select(DataSovereignty::ALL.to_vec()),
            subsequence(ComplianceNeed::ALL.to_vec(), 0..=6),
            subsequence(TechRequirement::ALL.to_vec(), 0..=6),
        )
            .prop_map(
                |(industry, region, budget, data_sovereignty, compliance, tech)| {
                    OrganizationProfile {
                        industry,
                        region,
                        budget,
                        data_sovereignty,
                        compliance: compliance.into_iter().collect(),
                        tech: tech.into_iter().collect(),
                    }
                },
            )
    }

    proptest! {
        #[test]
        fn normalized_scores_never_exceed_hundred(profile in arb_profile()) {
            let scores = evaluate(&profile);
            prop_assert!(scores.max() <= SCORE_CEILING + 1e-9);
        }

        #[test]
        fn normalization_is_idempotent(profile in arb_profile()) {
            let scores = evaluate(&profile);
            let again = normalize(scores);
            for category in ProviderCategory::ALL {
                prop_assert!((again.get(category) - scores.get(category)).abs() < 1e-9);
            }
        }

        #[test]
        fn adding_compliance_never_lowers_boosted_category(
            profile in arb_profile(),
            need in select(ComplianceNeed::ALL.to_vec()),
        ) {
            let before = evaluate_detailed(&profile).raw;
            let mut with_need = profile.clone();
            with_need.compliance.insert(need);
            let after = evaluate_detailed(&with_need).raw;

            let delta = compliance_delta(need);
            for category in ProviderCategory::ALL {
                if delta.get(category) > 0.0 {
                    prop_assert!(after.get(category) >= before.get(category));
                }
            }
        }

        #[test]
        fn adding_tech_never_lowers_boosted_category(
            profile in arb_profile(),
            requirement in select(TechRequirement::ALL.to_vec()),
        ) {
            let before = evaluate_detailed(&profile).raw;
            let mut with_requirement = profile.clone();
            with_requirement.tech.insert(requirement);
            let after = evaluate_detailed(&with_requirement).raw;

            let delta = tech_delta(requirement);
            for category in ProviderCategory::ALL {
                if delta.get(category) > 0.0 {
                    prop_assert!(after.get(category) >= before.get(category));
                }
            }
        }

        #[test]
        fn evaluate_matches_detailed(profile in arb_profile()) {
            prop_assert_eq!(evaluate(&profile), evaluate_detailed(&profile).scores);
        }
    }
}

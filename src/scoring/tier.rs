use serde::Serialize;
use std::fmt;

use super::category::{ProviderCategory, ProviderScore};
use super::engine::evaluate;
use crate::profile::OrganizationProfile;

/// Scores above this are strongly recommended.
pub const STRONG_THRESHOLD: f64 = 70.0;
/// Scores above this (and at most [`STRONG_THRESHOLD`]) need caution.
pub const CAUTION_THRESHOLD: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tier {
    StronglyRecommended,
    ConsiderWithCaution,
    NotRecommended,
}

impl Tier {
    /// Classify a normalized score. Both boundaries belong to the lower tier.
    pub fn classify(score: f64) -> Tier {
        if score > STRONG_THRESHOLD {
            Tier::StronglyRecommended
        } else if score > CAUTION_THRESHOLD {
            Tier::ConsiderWithCaution
        } else {
            Tier::NotRecommended
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tier::StronglyRecommended => "Strongly Recommended",
            Tier::ConsiderWithCaution => "Consider with Caution",
            Tier::NotRecommended => "Not Recommended",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Recommendation {
    pub category: ProviderCategory,
    pub score: f64,
    pub tier: Tier,
}

/// Rank already computed scores, highest first, with a tier for each.
pub fn rank(scores: &ProviderScore) -> Vec<Recommendation> {
    scores
        .ranked()
        .into_iter()
        .map(|(category, score)| Recommendation {
            category,
            score,
            tier: Tier::classify(score),
        })
        .collect()
}

/// Evaluate a profile and rank the categories.
pub fn recommend(profile: &OrganizationProfile) -> Vec<Recommendation> {
    rank(&evaluate(profile))
}

use serde::Serialize;
use std::fmt;
use std::ops::{Add, AddAssign};

/// Provider grouping scored by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProviderCategory {
    Us,
    Eu,
    China,
}

impl ProviderCategory {
    pub const ALL: [ProviderCategory; 3] = [
        ProviderCategory::Us,
        ProviderCategory::Eu,
        ProviderCategory::China,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            ProviderCategory::Us => "us",
            ProviderCategory::Eu => "eu",
            ProviderCategory::China => "china",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProviderCategory::Us => "US Providers",
            ProviderCategory::Eu => "EU Providers",
            ProviderCategory::China => "China Providers",
        }
    }
}

impl fmt::Display for ProviderCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One value per provider category.
///
/// Used both for score totals and for the per-rule deltas folded into them.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct CategoryScores {
    pub us: f64,
    pub eu: f64,
    pub china: f64,
}

/// Engine output: category scores after normalization.
pub type ProviderScore = CategoryScores;

impl CategoryScores {
    pub const ZERO: CategoryScores = CategoryScores {
        us: 0.0,
        eu: 0.0,
        china: 0.0,
    };

    pub const fn new(us: f64, eu: f64, china: f64) -> Self {
        Self { us, eu, china }
    }

    pub fn get(&self, category: ProviderCategory) -> f64 {
        match category {
            ProviderCategory::Us => self.us,
            ProviderCategory::Eu => self.eu,
            ProviderCategory::China => self.china,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (ProviderCategory, f64)> + '_ {
        ProviderCategory::ALL.into_iter().map(|c| (c, self.get(c)))
    }

    pub fn max(&self) -> f64 {
        self.us.max(self.eu).max(self.china)
    }

    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self::new(f(self.us), f(self.eu), f(self.china))
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Categories sorted by score, highest first. Ties keep the US, EU,
    /// China order.
    pub fn ranked(&self) -> Vec<(ProviderCategory, f64)> {
        let mut ranked: Vec<_> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked
    }
}

impl Add for CategoryScores {
    type Output = CategoryScores;

    fn add(self, rhs: CategoryScores) -> CategoryScores {
        CategoryScores::new(self.us + rhs.us, self.eu + rhs.eu, self.china + rhs.china)
    }
}

impl AddAssign for CategoryScores {
    fn add_assign(&mut self, rhs: CategoryScores) {
        *self = *self + rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_is_per_category() {
        let total = CategoryScores::new(100.0, 90.0, 80.0) + CategoryScores::new(40.0, -10.0, -30.0);
        assert_eq!(total, CategoryScores::new(140.0, 80.0, 50.0));
    }

    #[test]
    fn test_max_picks_highest() {
        assert_eq!(CategoryScores::new(-5.0, 12.0, 3.0).max(), 12.0);
    }

    #[test]
    fn test_ranked_highest_first() {
        let ranked = CategoryScores::new(50.0, 90.0, 70.0).ranked();
        let order: Vec<_> = ranked.iter().map(|(c, _)| *c).collect();
        assert_eq!(
            order,
            vec![ProviderCategory::Eu, ProviderCategory::China, ProviderCategory::Us]
        );
    }

    #[test]
    fn test_ranked_ties_keep_declaration_order() {
        let ranked = CategoryScores::new(80.0, 80.0, 80.0).ranked();
        let order: Vec<_> = ranked.iter().map(|(c, _)| *c).collect();
        assert_eq!(order, ProviderCategory::ALL.to_vec());
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(ProviderCategory::Us.to_string(), "US Providers");
        assert_eq!(ProviderCategory::China.label(), "China Providers");
    }
}

use std::str::FromStr;

use super::config::ProfileConfig;
use super::error::ProfileError;
use super::types::{BudgetConstraint, ComplianceNeed, Region, TechRequirement};

/// Validate a raw profile before evaluation.
/// Returns all validation errors at once (not just the first).
///
/// Industry and data sovereignty are never errors: unknown values fall back
/// to "other" and "none" when the profile is resolved.
pub fn validate_profile(config: &ProfileConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Some(ref region) = config.region {
        if let Err(e) = region.parse::<Region>() {
            errors.push(format!("profile.region: {}", e));
        }
    }

    if let Some(ref budget) = config.budget {
        if let Err(e) = budget.parse::<BudgetConstraint>() {
            errors.push(format!("profile.budget: {}", e));
        }
    }

    if let Some(ref compliance) = config.compliance {
        check_items::<ComplianceNeed>("profile.compliance", compliance, &mut errors);
    }

    if let Some(ref tech) = config.tech {
        check_items::<TechRequirement>("profile.tech", tech, &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_items<T>(path: &str, items: &[String], errors: &mut Vec<String>)
where
    T: FromStr<Err = ProfileError>,
{
    for (i, item) in items.iter().enumerate() {
        if let Err(e) = item.parse::<T>() {
            errors.push(format!("{}[{}]: {}", path, i, e));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Option<Vec<String>> {
        Some(items.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_valid_profile() {
        let config = ProfileConfig {
            industry: Some("healthcare".to_string()),
            region: Some("North America".to_string()),
            budget: Some("low".to_string()),
            data_sovereignty: Some("prefer-local".to_string()),
            compliance: strings(&["hipaa", "sox"]),
            tech: strings(&["containers"]),
        };
        assert!(validate_profile(&config).is_ok());
    }

    #[test]
    fn test_empty_profile() {
        assert!(validate_profile(&ProfileConfig::default()).is_ok());
    }

    #[test]
    fn test_unknown_industry_is_not_an_error() {
        let config = ProfileConfig {
            industry: Some("Retail".to_string()),
            data_sovereignty: Some("whatever".to_string()),
            ..Default::default()
        };
        assert!(validate_profile(&config).is_ok());
    }

    #[test]
    fn test_invalid_budget() {
        let config = ProfileConfig {
            budget: Some("unlimited".to_string()),
            ..Default::default()
        };
        let errors = validate_profile(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].starts_with("profile.budget:"));
    }

    #[test]
    fn test_invalid_set_item_reports_index() {
        let config = ProfileConfig {
            tech: strings(&["iot", "quantum"]),
            ..Default::default()
        };
        let errors = validate_profile(&config).unwrap_err();
        assert!(errors[0].contains("profile.tech[1]"));
        assert!(errors[0].contains("quantum"));
    }

    #[test]
    fn test_collects_all_errors() {
        let config = ProfileConfig {
            region: Some("Mars".to_string()),          // Error 1
            budget: Some("infinite".to_string()),      // Error 2
            compliance: strings(&["gdpr", "nist"]),    // Error 3
            tech: strings(&["quantum"]),               // Error 4
            ..Default::default()
        };
        let errors = validate_profile(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
    }
}

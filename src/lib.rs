//! Provider category recommendations for cloud and AI buyers.
//!
//! A [`profile::OrganizationProfile`] is scored against US, EU and China
//! provider categories by [`scoring::evaluate`], then ranked into
//! recommendation tiers.

pub mod config;
pub mod output;
pub mod profile;
pub mod scoring;

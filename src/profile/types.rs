use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use super::error::ProfileError;

/// Reduce a label to lowercase alphanumerics so "AI/ML", "ai-ml" and "aiml"
/// compare equal.
fn label_key(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Industry {
    Tech,
    Finance,
    Healthcare,
    Manufacturing,
    AiResearch,
    Government,
    Other,
}

impl Industry {
    pub const ALL: [Industry; 7] = [
        Industry::Tech,
        Industry::Finance,
        Industry::Healthcare,
        Industry::Manufacturing,
        Industry::AiResearch,
        Industry::Government,
        Industry::Other,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Industry::Tech => "tech",
            Industry::Finance => "finance",
            Industry::Healthcare => "healthcare",
            Industry::Manufacturing => "manufacturing",
            Industry::AiResearch => "ai-research",
            Industry::Government => "government",
            Industry::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Industry::Tech => "Tech",
            Industry::Finance => "Finance",
            Industry::Healthcare => "Healthcare",
            Industry::Manufacturing => "Manufacturing",
            Industry::AiResearch => "AI Research",
            Industry::Government => "Government",
            Industry::Other => "Other",
        }
    }

    /// Parse an industry, falling back to `Other` for anything unrecognized.
    /// Unknown industries are a supported input, not an error.
    pub fn from_label_or_other(s: &str) -> Industry {
        s.parse().unwrap_or(Industry::Other)
    }
}

impl FromStr for Industry {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match label_key(s).as_str() {
            "tech" | "technology" => Ok(Industry::Tech),
            "finance" | "financial" => Ok(Industry::Finance),
            "healthcare" | "health" => Ok(Industry::Healthcare),
            "manufacturing" => Ok(Industry::Manufacturing),
            "airesearch" => Ok(Industry::AiResearch),
            "government" | "gov" => Ok(Industry::Government),
            "other" => Ok(Industry::Other),
            _ => Err(ProfileError::unknown(
                "industry",
                s,
                &Industry::ALL.map(|i| i.id()),
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Region {
    NorthAmerica,
    Europe,
    Asia,
    Global,
}

impl Region {
    pub const ALL: [Region; 4] = [
        Region::NorthAmerica,
        Region::Europe,
        Region::Asia,
        Region::Global,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Region::NorthAmerica => "north-america",
            Region::Europe => "europe",
            Region::Asia => "asia",
            Region::Global => "global",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Region::NorthAmerica => "North America",
            Region::Europe => "Europe",
            Region::Asia => "Asia",
            Region::Global => "Global",
        }
    }
}

impl FromStr for Region {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match label_key(s).as_str() {
            "northamerica" | "na" => Ok(Region::NorthAmerica),
            "europe" | "eu" => Ok(Region::Europe),
            "asia" => Ok(Region::Asia),
            "global" => Ok(Region::Global),
            _ => Err(ProfileError::unknown("region", s, &Region::ALL.map(|r| r.id()))),
        }
    }
}

/// Budget constraint level. Ordered: `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BudgetConstraint {
    Low,
    Medium,
    High,
}

impl BudgetConstraint {
    pub const ALL: [BudgetConstraint; 3] = [
        BudgetConstraint::Low,
        BudgetConstraint::Medium,
        BudgetConstraint::High,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            BudgetConstraint::Low => "low",
            BudgetConstraint::Medium => "medium",
            BudgetConstraint::High => "high",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BudgetConstraint::Low => "Low",
            BudgetConstraint::Medium => "Medium",
            BudgetConstraint::High => "High",
        }
    }
}

impl FromStr for BudgetConstraint {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match label_key(s).as_str() {
            "low" => Ok(BudgetConstraint::Low),
            "medium" | "med" => Ok(BudgetConstraint::Medium),
            "high" => Ok(BudgetConstraint::High),
            _ => Err(ProfileError::unknown(
                "budget",
                s,
                &BudgetConstraint::ALL.map(|b| b.id()),
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DataSovereignty {
    None,
    PreferLocal,
    MustStayInCountry,
}

impl DataSovereignty {
    pub const ALL: [DataSovereignty; 3] = [
        DataSovereignty::None,
        DataSovereignty::PreferLocal,
        DataSovereignty::MustStayInCountry,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            DataSovereignty::None => "none",
            DataSovereignty::PreferLocal => "prefer-local",
            DataSovereignty::MustStayInCountry => "must-stay-in-country",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DataSovereignty::None => "No specific requirements",
            DataSovereignty::PreferLocal => "Prefer local storage",
            DataSovereignty::MustStayInCountry => "Must stay in country",
        }
    }

    /// Parse a sovereignty requirement, falling back to `None` when unrecognized.
    pub fn from_label_or_none(s: &str) -> DataSovereignty {
        s.parse().unwrap_or(DataSovereignty::None)
    }
}

impl FromStr for DataSovereignty {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match label_key(s).as_str() {
            "none" | "nospecificrequirements" => Ok(DataSovereignty::None),
            "preferlocal" | "preferlocalstorage" => Ok(DataSovereignty::PreferLocal),
            "muststayincountry" => Ok(DataSovereignty::MustStayInCountry),
            _ => Err(ProfileError::unknown(
                "data sovereignty",
                s,
                &DataSovereignty::ALL.map(|d| d.id()),
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComplianceNeed {
    Gdpr,
    Hipaa,
    #[serde(rename = "fedramp")]
    FedRamp,
    Pci,
    Sox,
    Iso27001,
}

impl ComplianceNeed {
    pub const ALL: [ComplianceNeed; 6] = [
        ComplianceNeed::Gdpr,
        ComplianceNeed::Hipaa,
        ComplianceNeed::FedRamp,
        ComplianceNeed::Pci,
        ComplianceNeed::Sox,
        ComplianceNeed::Iso27001,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            ComplianceNeed::Gdpr => "gdpr",
            ComplianceNeed::Hipaa => "hipaa",
            ComplianceNeed::FedRamp => "fedramp",
            ComplianceNeed::Pci => "pci",
            ComplianceNeed::Sox => "sox",
            ComplianceNeed::Iso27001 => "iso27001",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ComplianceNeed::Gdpr => "GDPR",
            ComplianceNeed::Hipaa => "HIPAA",
            ComplianceNeed::FedRamp => "FedRAMP",
            ComplianceNeed::Pci => "PCI DSS",
            ComplianceNeed::Sox => "SOX",
            ComplianceNeed::Iso27001 => "ISO 27001",
        }
    }

    /// Whether selecting this need moves any category score. PCI, SOX and
    /// ISO 27001 only feed the advisory notes.
    pub fn affects_score(&self) -> bool {
        matches!(
            self,
            ComplianceNeed::Gdpr | ComplianceNeed::Hipaa | ComplianceNeed::FedRamp
        )
    }
}

impl FromStr for ComplianceNeed {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match label_key(s).as_str() {
            "gdpr" => Ok(ComplianceNeed::Gdpr),
            "hipaa" => Ok(ComplianceNeed::Hipaa),
            "fedramp" => Ok(ComplianceNeed::FedRamp),
            "pci" | "pcidss" => Ok(ComplianceNeed::Pci),
            "sox" => Ok(ComplianceNeed::Sox),
            "iso27001" | "iso" => Ok(ComplianceNeed::Iso27001),
            _ => Err(ProfileError::unknown(
                "compliance need",
                s,
                &ComplianceNeed::ALL.map(|c| c.id()),
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TechRequirement {
    AiMl,
    Serverless,
    EdgeComputing,
    Containers,
    Iot,
    Blockchain,
}

impl TechRequirement {
    pub const ALL: [TechRequirement; 6] = [
        TechRequirement::AiMl,
        TechRequirement::Serverless,
        TechRequirement::EdgeComputing,
        TechRequirement::Containers,
        TechRequirement::Iot,
        TechRequirement::Blockchain,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            TechRequirement::AiMl => "ai-ml",
            TechRequirement::Serverless => "serverless",
            TechRequirement::EdgeComputing => "edge-computing",
            TechRequirement::Containers => "containers",
            TechRequirement::Iot => "iot",
            TechRequirement::Blockchain => "blockchain",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TechRequirement::AiMl => "AI/ML",
            TechRequirement::Serverless => "Serverless",
            TechRequirement::EdgeComputing => "Edge Computing",
            TechRequirement::Containers => "Containers",
            TechRequirement::Iot => "IoT",
            TechRequirement::Blockchain => "Blockchain",
        }
    }

    /// Whether selecting this requirement moves any category score.
    /// Serverless, Containers and Blockchain only feed the advisory notes.
    pub fn affects_score(&self) -> bool {
        matches!(
            self,
            TechRequirement::AiMl | TechRequirement::EdgeComputing | TechRequirement::Iot
        )
    }
}

impl FromStr for TechRequirement {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match label_key(s).as_str() {
            "aiml" | "ai" | "ml" => Ok(TechRequirement::AiMl),
            "serverless" => Ok(TechRequirement::Serverless),
            "edgecomputing" | "edge" => Ok(TechRequirement::EdgeComputing),
            "containers" | "container" | "containerorchestration" => {
                Ok(TechRequirement::Containers)
            }
            "iot" | "iotservices" => Ok(TechRequirement::Iot),
            "blockchain" => Ok(TechRequirement::Blockchain),
            _ => Err(ProfileError::unknown(
                "tech requirement",
                s,
                &TechRequirement::ALL.map(|t| t.id()),
            )),
        }
    }
}

macro_rules! display_label {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.label())
                }
            }
        )*
    };
}

display_label!(
    Industry,
    Region,
    BudgetConstraint,
    DataSovereignty,
    ComplianceNeed,
    TechRequirement
);

/// Organizational inputs for one evaluation. Built once per request and
/// never mutated by the scoring engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrganizationProfile {
    pub industry: Industry,
    pub region: Region,
    pub budget: BudgetConstraint,
    pub data_sovereignty: DataSovereignty,
    pub compliance: BTreeSet<ComplianceNeed>,
    pub tech: BTreeSet<TechRequirement>,
}

impl Default for OrganizationProfile {
    fn default() -> Self {
        Self {
            industry: Industry::Other,
            region: Region::Global,
            budget: BudgetConstraint::Medium,
            data_sovereignty: DataSovereignty::None,
            compliance: BTreeSet::new(),
            tech: BTreeSet::new(),
        }
    }
}

impl OrganizationProfile {
    pub fn requires(&self, need: ComplianceNeed) -> bool {
        self.compliance.contains(&need)
    }

    pub fn needs(&self, requirement: TechRequirement) -> bool {
        self.tech.contains(&requirement)
    }
}

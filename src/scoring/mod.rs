pub mod advisory;
pub mod category;
pub mod engine;
pub mod factors;
pub mod tier;

pub use advisory::{advisory_only_flags, considerations, Consideration};
pub use category::{CategoryScores, ProviderCategory, ProviderScore};
pub use engine::{evaluate, evaluate_detailed, normalize, Evaluation, FactorContribution};
pub use factors::{Factor, FACTORS};
pub use tier::{rank, recommend, Recommendation, Tier};

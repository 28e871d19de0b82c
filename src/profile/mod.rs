pub mod config;
pub mod error;
pub mod types;
pub mod validation;

pub use config::ProfileConfig;
pub use error::ProfileError;
pub use types::*;
pub use validation::validate_profile;

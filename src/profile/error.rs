use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    #[error("unknown {field} '{value}' (expected one of: {expected})")]
    UnknownValue {
        field: &'static str,
        value: String,
        expected: String,
    },
}

impl ProfileError {
    pub(crate) fn unknown(field: &'static str, value: &str, expected: &[&str]) -> Self {
        ProfileError::UnknownValue {
            field,
            value: value.to_string(),
            expected: expected.join(", "),
        }
    }
}

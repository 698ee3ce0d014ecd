//! Input validation failures shared by every form action.
use thiserror::Error;

/// Reasons a user action is rejected. Each one aborts only the current
/// action and leaves previously computed state untouched.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("invalid realms data format: {0}")]
    MalformedRealmDirectory(String),
    #[error("invalid transfer list: {0}")]
    MalformedTransferList(String),
    #[error("invalid multiplier {0:?}")]
    InvalidMultiplier(String),
    #[error("invalid realm id {0:?}")]
    InvalidRealmId(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_include_offending_input() {
        let err = InputError::InvalidMultiplier("abc".to_string());
        assert_eq!(err.to_string(), "invalid multiplier \"abc\"");
        let err = InputError::InvalidRealmId(String::new());
        assert_eq!(err.to_string(), "invalid realm id \"\"");
    }
}

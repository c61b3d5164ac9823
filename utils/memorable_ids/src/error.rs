use thiserror::Error;

/// Errors raised while generating memorable IDs
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MemorableIdError {
    /// Component count outside 1..=5 after defaults were applied
    #[error("components must be between 1 and 5")]
    InvalidComponents(i32),
}

impl MemorableIdError {
    /// The rejected component count.
    pub fn components(&self) -> i32 {
        match self {
            MemorableIdError::InvalidComponents(value) => *value,
        }
    }
}

pub type MemorableIdResult<T> = Result<T, MemorableIdError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_does_not_embed_value() {
        let err = MemorableIdError::InvalidComponents(7);
        assert_eq!(err.to_string(), "components must be between 1 and 5");
        assert_eq!(err.components(), 7);
    }
}

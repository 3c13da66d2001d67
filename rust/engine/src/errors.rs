use thiserror::Error;

use crate::cards::Card;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HandError {
    #[error("Malformed hand {input:?}: {reason}")]
    MalformedInput { input: String, reason: String },
    #[error("Duplicate card {card} in hand")]
    DuplicateCard { card: Card },
    /// No combination predicate matched. Indicates a defect in the
    /// combination table, never bad input.
    #[error("Internal invariant violated: {detail}")]
    InternalInvariantViolation { detail: String },
}

impl HandError {
    pub(crate) fn malformed(input: &str, reason: impl Into<String>) -> Self {
        HandError::MalformedInput {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

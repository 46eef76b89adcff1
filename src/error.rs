//! Errors raised while turning raw input into a page order.

use thiserror::Error;

/// Shown for anything that is not a positive multiple of 4.
pub const INVALID_INPUT_MESSAGE: &str =
    "Invalid input: N must be a number greater than 0 and divisible by 4";

#[derive(Debug, Error)]
pub enum OrderError {
    #[error("not an integer: {0:?}")]
    Parse(String),

    #[error("page count must be greater than 0, got {0}")]
    NotPositive(i64),

    #[error("page count must be divisible by 4, got {0}")]
    NotMultipleOfFour(i64),

    #[error("page count {got} exceeds the limit of {max}")]
    TooLarge { got: i64, max: u32 },

    #[error("chunk size must be greater than 0")]
    ZeroChunkSize,

    #[error("failed to render output: {0}")]
    Render(#[from] serde_json::Error),
}

impl OrderError {
    /// Parse and range failures share one static message.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            OrderError::Parse(_) | OrderError::NotPositive(_) | OrderError::NotMultipleOfFour(_)
        )
    }

    pub fn user_message(&self) -> String {
        if self.is_invalid_input() {
            INVALID_INPUT_MESSAGE.to_string()
        } else {
            self.to_string()
        }
    }
}

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WideError {
    /// The source value lies outside the target's range.
    #[error("{target} cannot represent {value}")]
    OutOfRange { target: String, value: String },

    #[error("expected {expected} words, found {actual}")]
    WordCount { expected: usize, actual: usize },
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScreeningError {
    #[error("unknown screening tool: {0}")]
    UnknownTool(String),

    #[error("{tool}: expected {expected} responses, got {got}")]
    Incomplete {
        tool: String,
        expected: usize,
        got: usize,
    },

    #[error("{tool}: response {value} at question {index} exceeds maximum {max}")]
    OutOfRange {
        tool: String,
        index: usize,
        value: u8,
        max: u8,
    },
}

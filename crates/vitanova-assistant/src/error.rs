use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("assistant invocation failed: {0}")]
    Invocation(String),

    #[error("could not parse assistant reply: {0}")]
    ResponseParse(String),
}

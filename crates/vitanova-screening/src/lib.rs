//! vitanova-screening
//!
//! Self-report screening tool definitions and the risk scorer. Pure data —
//! no I/O. Defines the questions and response rules for each supported
//! tool; scoring is uniform across tools.

pub mod error;
pub mod scorer;
pub mod tools;

use error::ScreeningError;

/// Trait implemented by each self-report screening tool.
pub trait ScreeningTool: Send + Sync {
    /// Unique identifier for this tool (e.g., "phq9").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "PHQ-9").
    fn name(&self) -> &str;

    /// The questions, in presentation order.
    fn questions(&self) -> &[&str];

    /// The highest ordinal response a question accepts (responses run
    /// from 0 to this value inclusive).
    fn max_response(&self) -> u8 {
        3
    }

    /// Check that `responses` answers every question with an in-range
    /// value. The scorer assumes this has passed.
    fn validate(&self, responses: &[u8]) -> Result<(), ScreeningError> {
        if responses.len() != self.questions().len() {
            return Err(ScreeningError::Incomplete {
                tool: self.name().to_string(),
                expected: self.questions().len(),
                got: responses.len(),
            });
        }
        for (index, &value) in responses.iter().enumerate() {
            if value > self.max_response() {
                return Err(ScreeningError::OutOfRange {
                    tool: self.name().to_string(),
                    index,
                    value,
                    max: self.max_response(),
                });
            }
        }
        Ok(())
    }
}

/// Return all registered screening tools.
pub fn all_tools() -> Vec<Box<dyn ScreeningTool>> {
    vec![Box::new(tools::phq9::Phq9), Box::new(tools::gad7::Gad7)]
}

/// Look up a tool by ID.
pub fn get_tool(id: &str) -> Option<Box<dyn ScreeningTool>> {
    all_tools().into_iter().find(|t| t.id() == id)
}

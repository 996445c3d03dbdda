use thiserror::Error;

/// Failures raised by the budget model and budget state edits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BudgetError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}

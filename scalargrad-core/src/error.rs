use thiserror::Error;

/// Custom error type for the scalargrad engine.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum ScalarGradError {
    #[error("Invalid argument for operation {operation}: {reason}")]
    InvalidArgument {
        operation: String,
        reason: String,
    },

    #[error("Cycle detected in the computation graph: node {node} consumes operand {operand}")]
    CycleDetected { node: usize, operand: usize },
}

impl ScalarGradError {
    pub(crate) fn invalid_argument(operation: &str, reason: impl Into<String>) -> Self {
        ScalarGradError::InvalidArgument {
            operation: operation.to_string(),
            reason: reason.into(),
        }
    }
}

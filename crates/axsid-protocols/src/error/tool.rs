//! Tool execution errors.

use thiserror::Error;

use super::EngineError;

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Tool not found: {0}")]
    NotFound(String),

    #[error("Tool execution failed: {0}")]
    ExecutionFailed(String),

    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("Parameter validation failed: {0}")]
    ValidationFailed(String),

    #[error("{code}: {message}")]
    Engine { code: &'static str, message: String },
}

impl From<EngineError> for ToolError {
    fn from(e: EngineError) -> Self {
        match e {
            EngineError::InvalidArgument(msg) => ToolError::InvalidParameters(msg),
            other => ToolError::Engine {
                code: other.code(),
                message: other.to_string(),
            },
        }
    }
}

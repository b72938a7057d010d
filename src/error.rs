//! Error types and result aliases

use thiserror::Error;

/// Errors produced by browser automation and the agent loop
#[derive(Debug, Error)]
pub enum BrowserError {
    #[error("Failed to launch browser: {0}")]
    LaunchFailed(String),

    #[error("Navigation failed: {0}")]
    NavigationFailed(String),

    #[error("Element not found: {0}")]
    ElementNotFound(String),

    #[error("JavaScript evaluation failed: {0}")]
    EvaluationFailed(String),

    /// A tool adapter failed mid-execution. The agent loop feeds this back to
    /// the model as an observation instead of aborting the run.
    #[error("Tool '{tool}' failed: {reason}")]
    ToolExecutionFailed { tool: String, reason: String },

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Invalid parameters for tool '{tool}': {reason}")]
    InvalidParams { tool: String, reason: String },

    #[error("Missing credential: {0}")]
    MissingCredential(String),

    #[error("LLM request failed: {0}")]
    LlmRequestFailed(String),

    #[error("Screenshot failed: {0}")]
    ScreenshotFailed(String),

    #[error("Agent stopped after {0} iterations without a final answer")]
    IterationLimitReached(usize),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, BrowserError>;

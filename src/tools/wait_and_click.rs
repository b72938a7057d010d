use crate::error::{BrowserError, Result};
use crate::tools::{Tool, ToolContext, ToolResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Parameters for the wait_and_click tool
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct WaitAndClickParams {
    /// CSS selector for the element to click
    pub selector: String,

    /// Maximum time to wait for the element in milliseconds (default: 30000)
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

pub(crate) fn default_timeout_ms() -> u64 {
    30_000
}

/// Tool that waits for an element to appear and then clicks it.
///
/// The wait is bounded: if the selector never matches within the timeout the
/// call fails with a tool-execution error rather than hanging.
#[derive(Default)]
pub struct WaitAndClickTool;

impl Tool for WaitAndClickTool {
    type Params = WaitAndClickParams;

    fn name(&self) -> &str {
        "wait_and_click"
    }

    fn description(&self) -> &str {
        "Wait for an element with the given CSS selector to be visible and then click it"
    }

    fn execute_typed(&self, params: WaitAndClickParams, context: &mut ToolContext) -> Result<ToolResult> {
        let timeout = Duration::from_millis(params.timeout_ms);

        let element = context.session.wait_for_element(&params.selector, timeout)?;

        element.click().map_err(|e| BrowserError::ToolExecutionFailed {
            tool: "wait_and_click".to_string(),
            reason: format!("Failed to click '{}': {}", params.selector, e),
        })?;

        Ok(ToolResult::success_with(serde_json::json!({
            "message": format!("Waited for and clicked element with selector '{}'", params.selector),
            "selector": params.selector,
            "timeout_ms": params.timeout_ms
        })))
    }
}

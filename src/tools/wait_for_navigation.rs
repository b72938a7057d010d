use crate::error::Result;
use crate::tools::wait_and_click::default_timeout_ms;
use crate::tools::{Tool, ToolContext, ToolResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Parameters for the wait_for_navigation tool
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct WaitForNavigationParams {
    /// Description of the action that triggered the navigation
    pub action_description: String,

    /// Maximum time to wait for navigation in milliseconds (default: 30000)
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

/// Tool that blocks until a pending navigation completes.
///
/// The call returns only once the page has settled or the timeout elapsed;
/// scheduling the wait without awaiting it would leave the next tool call
/// racing the load.
#[derive(Default)]
pub struct WaitForNavigationTool;

impl Tool for WaitForNavigationTool {
    type Params = WaitForNavigationParams;

    fn name(&self) -> &str {
        "wait_for_navigation"
    }

    fn description(&self) -> &str {
        "Wait for navigation to complete after performing an action"
    }

    fn execute_typed(&self, params: WaitForNavigationParams, context: &mut ToolContext) -> Result<ToolResult> {
        let timeout = Duration::from_millis(params.timeout_ms);

        context.session.wait_for_navigation(timeout)?;

        Ok(ToolResult::success_with(serde_json::json!({
            "message": format!("Navigation completed after {}", params.action_description),
            "url": context.session.url(),
            "timeout_ms": params.timeout_ms
        })))
    }
}

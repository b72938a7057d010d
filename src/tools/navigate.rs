use crate::error::Result;
use crate::tools::utils::normalize_url;
use crate::tools::{Tool, ToolContext, ToolResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Parameters for the navigate tool
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct NavigateParams {
    /// URL to navigate to
    pub url: String,

    /// Wait for navigation to complete (default: true)
    #[serde(default = "default_wait")]
    pub wait_for_load: bool,
}

fn default_wait() -> bool {
    true
}

/// Tool for navigating the page to a URL
#[derive(Default)]
pub struct NavigateTool;

impl Tool for NavigateTool {
    type Params = NavigateParams;

    fn name(&self) -> &str {
        "navigate"
    }

    fn description(&self) -> &str {
        "Navigate the browser to the given URL and wait for the page to load"
    }

    fn execute_typed(&self, params: NavigateParams, context: &mut ToolContext) -> Result<ToolResult> {
        let normalized_url = normalize_url(&params.url);

        context.session.navigate(&normalized_url)?;

        if params.wait_for_load {
            context.session.wait_for_navigation(Duration::from_secs(30))?;
        }

        Ok(ToolResult::success_with(serde_json::json!({
            "message": format!("Navigated to {}", normalized_url),
            "original_url": params.url,
            "normalized_url": normalized_url,
            "waited": params.wait_for_load
        })))
    }
}

/// Parameters for the navigate_back tool (none)
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct NavigateBackParams {}

/// Tool for going back one entry in browser history
#[derive(Default)]
pub struct NavigateBackTool;

impl Tool for NavigateBackTool {
    type Params = NavigateBackParams;

    fn name(&self) -> &str {
        "navigate_back"
    }

    fn description(&self) -> &str {
        "Go back to the previous page in browser history"
    }

    fn execute_typed(&self, _params: NavigateBackParams, context: &mut ToolContext) -> Result<ToolResult> {
        context.session.go_back()?;

        Ok(ToolResult::success_with(serde_json::json!({
            "message": format!("Went back; current URL is {}", context.session.url())
        })))
    }
}

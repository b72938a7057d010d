use crate::error::{BrowserError, Result};
use crate::tools::{Tool, ToolContext, ToolResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Parameters for the screenshot tool
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ScreenshotParams {
    /// File path to write the PNG to; defaults to screenshot_<timestamp>.png
    /// in the working directory
    #[serde(default)]
    pub path: Option<String>,
}

/// Tool for capturing a PNG screenshot of the page.
///
/// The default filename keeps the `screenshot` prefix and `.png` suffix the
/// front-end scans the working directory for.
#[derive(Default)]
pub struct ScreenshotTool;

impl Tool for ScreenshotTool {
    type Params = ScreenshotParams;

    fn name(&self) -> &str {
        "screenshot"
    }

    fn description(&self) -> &str {
        "Take a PNG screenshot of the current page and save it to a file"
    }

    fn execute_typed(&self, params: ScreenshotParams, context: &mut ToolContext) -> Result<ToolResult> {
        let path = params.path.unwrap_or_else(default_screenshot_path);

        let png = context.session.capture_screenshot()?;

        std::fs::write(&path, &png)
            .map_err(|e| BrowserError::ScreenshotFailed(format!("Failed to write {}: {}", path, e)))?;

        Ok(ToolResult::success_with(serde_json::json!({
            "message": format!("Screenshot saved to {}", path),
            "path": path,
            "bytes": png.len()
        })))
    }
}

fn default_screenshot_path() -> String {
    let timestamp = SystemTime::now().duration_since(UNIX_EPOCH).map(|d| d.as_secs()).unwrap_or(0);
    format!("screenshot_{}.png", timestamp)
}

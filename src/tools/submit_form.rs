use crate::error::{BrowserError, Result};
use crate::tools::utils::js_string;
use crate::tools::wait_and_click::default_timeout_ms;
use crate::tools::{Tool, ToolContext, ToolResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Parameters for the submit_form tool
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SubmitFormParams {
    /// CSS selector for the form
    pub selector: String,

    /// Maximum time to wait for the resulting navigation in milliseconds
    /// (default: 30000)
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

/// Tool for submitting a form and waiting out the navigation it triggers
#[derive(Default)]
pub struct SubmitFormTool;

impl Tool for SubmitFormTool {
    type Params = SubmitFormParams;

    fn name(&self) -> &str {
        "submit_form"
    }

    fn description(&self) -> &str {
        "Submit a form with the given CSS selector and wait for the resulting navigation"
    }

    fn execute_typed(&self, params: SubmitFormParams, context: &mut ToolContext) -> Result<ToolResult> {
        let submit_js = format!(
            r#"(function() {{
                const form = document.querySelector({});
                if (!form) return "no-element";
                form.submit();
                return "ok";
            }})()"#,
            js_string(&params.selector)
        );

        let outcome = context.session.evaluate(&submit_js)?;

        match outcome.as_ref().and_then(|v| v.as_str()) {
            Some("ok") => {}
            Some("no-element") => {
                return Err(BrowserError::ElementNotFound(format!("Form '{}' not found", params.selector)));
            }
            _ => {
                return Err(BrowserError::ToolExecutionFailed {
                    tool: "submit_form".to_string(),
                    reason: format!("Submitting form '{}' returned no result", params.selector),
                });
            }
        }

        context.session.wait_for_navigation(Duration::from_millis(params.timeout_ms))?;

        Ok(ToolResult::success_with(serde_json::json!({
            "message": format!("Submitted form with selector '{}'", params.selector),
            "selector": params.selector,
            "url": context.session.url()
        })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_form_params() {
        let json = serde_json::json!({
            "selector": "form#login"
        });

        let params: SubmitFormParams = serde_json::from_value(json).unwrap();
        assert_eq!(params.selector, "form#login");
        assert_eq!(params.timeout_ms, 30_000);
    }

    #[test]
    fn test_submit_form_metadata() {
        let tool = SubmitFormTool;
        assert_eq!(tool.name(), "submit_form");
        assert!(tool.parameters_schema().is_object());
    }
}

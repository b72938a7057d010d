use crate::error::{BrowserError, Result};
use crate::tools::utils::js_string;
use crate::tools::{Tool, ToolContext, ToolResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for the form_input tool
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FormInputParams {
    /// CSS selector for the form field
    pub selector: String,

    /// Text to enter into the form field
    pub text: String,
}

/// Tool for entering text into a form field
#[derive(Default)]
pub struct FormInputTool;

impl Tool for FormInputTool {
    type Params = FormInputParams;

    fn name(&self) -> &str {
        "form_input"
    }

    fn description(&self) -> &str {
        "Enter text into a form field with the given CSS selector"
    }

    fn execute_typed(&self, params: FormInputParams, context: &mut ToolContext) -> Result<ToolResult> {
        let element = context.session.find_element(&params.selector)?;

        // Clear any existing value so the field ends up holding exactly the
        // supplied text
        let clear_js = format!(
            "(function() {{ const el = document.querySelector({}); if (el) {{ el.value = ''; }} }})()",
            js_string(&params.selector)
        );
        context.session.evaluate(&clear_js)?;

        element.click().map_err(|e| BrowserError::ToolExecutionFailed {
            tool: "form_input".to_string(),
            reason: format!("Failed to focus '{}': {}", params.selector, e),
        })?;

        element.type_into(&params.text).map_err(|e| BrowserError::ToolExecutionFailed {
            tool: "form_input".to_string(),
            reason: format!("Failed to type into '{}': {}", params.selector, e),
        })?;

        Ok(ToolResult::success_with(serde_json::json!({
            "message": format!("Entered text into form field with selector '{}'", params.selector),
            "selector": params.selector,
            "text_length": params.text.len()
        })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_input_params() {
        let json = serde_json::json!({
            "selector": "input[name=q]",
            "keyword": "ignored",
            "text": "cats"
        });

        let params: FormInputParams = serde_json::from_value(json).unwrap();
        assert_eq!(params.selector, "input[name=q]");
        assert_eq!(params.text, "cats");
    }

    #[test]
    fn test_form_input_metadata() {
        let tool = FormInputTool;
        assert_eq!(tool.name(), "form_input");
        assert!(tool.parameters_schema().is_object());
    }
}

use crate::error::{BrowserError, Result};
use crate::tools::utils::js_string;
use crate::tools::{Tool, ToolContext, ToolResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for the select_dropdown_option tool
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SelectDropdownOptionParams {
    /// CSS selector for the dropdown menu
    pub selector: String,

    /// Value of the option to select
    pub value: String,

    /// Optional visible label of the option; when given, selection is by
    /// label instead of value
    #[serde(default)]
    pub label: Option<String>,
}

/// Tool for selecting an option from a `<select>` dropdown
#[derive(Default)]
pub struct SelectDropdownOptionTool;

impl Tool for SelectDropdownOptionTool {
    type Params = SelectDropdownOptionParams;

    fn name(&self) -> &str {
        "select_dropdown_option"
    }

    fn description(&self) -> &str {
        "Select an option from a dropdown menu with the given CSS selector, by value or by visible label"
    }

    fn execute_typed(&self, params: SelectDropdownOptionParams, context: &mut ToolContext) -> Result<ToolResult> {
        let (by, needle) = match &params.label {
            Some(label) => ("label", label.as_str()),
            None => ("value", params.value.as_str()),
        };

        // Set the value on the real element and dispatch `change` so any
        // framework listeners see the selection
        let select_js = format!(
            r#"(function() {{
                const el = document.querySelector({selector});
                if (!el) return "no-element";
                for (const opt of el.options) {{
                    const key = {by} === "label" ? (opt.label || opt.textContent.trim()) : opt.value;
                    if (key === {needle}) {{
                        el.value = opt.value;
                        el.dispatchEvent(new Event('change', {{ bubbles: true }}));
                        return "ok";
                    }}
                }}
                return "no-option";
            }})()"#,
            selector = js_string(&params.selector),
            by = js_string(by),
            needle = js_string(needle),
        );

        let outcome = context.session.evaluate(&select_js)?;

        match outcome.as_ref().and_then(|v| v.as_str()) {
            Some("ok") => Ok(ToolResult::success_with(serde_json::json!({
                "message": format!(
                    "Selected option with {} '{}' from dropdown with selector '{}'",
                    by, needle, params.selector
                ),
                "selector": params.selector,
                "matched_by": by
            }))),
            Some("no-element") => Err(BrowserError::ElementNotFound(format!(
                "Dropdown '{}' not found",
                params.selector
            ))),
            _ => Err(BrowserError::ToolExecutionFailed {
                tool: "select_dropdown_option".to_string(),
                reason: format!("No option with {} '{}' in dropdown '{}'", by, needle, params.selector),
            }),
        }
    }
}

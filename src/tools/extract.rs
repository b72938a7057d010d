use crate::error::{BrowserError, Result};
use crate::tools::{Tool, ToolContext, ToolResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for the extract_text tool
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ExtractTextParams {
    /// CSS selector to extract content from; omit to extract the whole page
    #[serde(default)]
    pub selector: Option<String>,
}

/// Tool for extracting readable content from the page.
///
/// Without a selector the whole page is converted to markdown, which reads
/// better for the agent than raw HTML. With a selector, the inner text of
/// every matching element is returned.
#[derive(Default)]
pub struct ExtractTextTool;

impl Tool for ExtractTextTool {
    type Params = ExtractTextParams;

    fn name(&self) -> &str {
        "extract_text"
    }

    fn description(&self) -> &str {
        "Extract text content from the whole page (as markdown) or from elements matching a CSS selector"
    }

    fn execute_typed(&self, params: ExtractTextParams, context: &mut ToolContext) -> Result<ToolResult> {
        match params.selector {
            Some(selector) => {
                let elements = context.session.tab().find_elements(&selector).map_err(|e| {
                    BrowserError::ElementNotFound(format!("No elements matching '{}': {}", selector, e))
                })?;

                let mut texts = Vec::with_capacity(elements.len());
                for element in &elements {
                    let text = element.get_inner_text().map_err(|e| BrowserError::ToolExecutionFailed {
                        tool: "extract_text".to_string(),
                        reason: format!("Failed to read text from '{}': {}", selector, e),
                    })?;
                    if !text.trim().is_empty() {
                        texts.push(text.trim().to_string());
                    }
                }

                Ok(ToolResult::success_with(serde_json::json!({
                    "selector": selector,
                    "matches": texts.len(),
                    "text": texts.join("\n"),
                })))
            }
            None => {
                let html = context.session.content()?;
                let markdown = html2md::parse_html(&html);

                Ok(ToolResult::success_with(serde_json::json!({
                    "url": context.session.url(),
                    "markdown": markdown,
                    "length": markdown.len(),
                })))
            }
        }
    }
}

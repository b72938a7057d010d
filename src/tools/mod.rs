//! Browser automation tool adapters
//!
//! Each tool wraps one browser action behind a uniform contract: a stable
//! name, a natural-language description the agent uses to pick it, a JSON
//! schema for its parameters, and an execute call returning a short textual
//! confirmation. Failures are mapped to
//! [`BrowserError::ToolExecutionFailed`](crate::error::BrowserError) so the
//! agent loop can observe them without aborting the run.

pub mod extract;
pub mod form_input;
pub mod navigate;
pub mod screenshot;
pub mod select_option;
pub mod submit_form;
pub mod utils;
pub mod wait_and_click;
pub mod wait_for_navigation;

pub use extract::ExtractTextTool;
pub use form_input::FormInputTool;
pub use navigate::{NavigateBackTool, NavigateTool};
pub use screenshot::ScreenshotTool;
pub use select_option::SelectDropdownOptionTool;
pub use submit_form::SubmitFormTool;
pub use wait_and_click::WaitAndClickTool;
pub use wait_for_navigation::WaitForNavigationTool;

use crate::browser::BrowserSession;
use crate::error::{BrowserError, Result};
use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Serialize, de::DeserializeOwned};

/// Execution context passed to every tool: the one live browser session
pub struct ToolContext<'a> {
    pub session: &'a BrowserSession,
}

impl<'a> ToolContext<'a> {
    pub fn new(session: &'a BrowserSession) -> Self {
        Self { session }
    }
}

/// Outcome of a tool execution
#[derive(Debug, Clone, Serialize)]
pub struct ToolResult {
    pub success: bool,
    pub data: Option<serde_json::Value>,
    pub error: Option<String>,
}

impl ToolResult {
    pub fn success_with(data: serde_json::Value) -> Self {
        Self { success: true, data: Some(data), error: None }
    }

    /// Render a short text form of the result, suitable as an agent observation
    pub fn text(&self) -> String {
        match &self.data {
            Some(data) => match data.get("message").and_then(|m| m.as_str()) {
                Some(message) => message.to_string(),
                None => serde_json::to_string_pretty(data).unwrap_or_else(|_| data.to_string()),
            },
            None => "Success".to_string(),
        }
    }
}

/// A typed browser automation tool
pub trait Tool: Send + Sync {
    /// Parameter type, deserialized from the agent's JSON arguments
    type Params: DeserializeOwned + JsonSchema;

    /// Stable identifier the agent invokes the tool by
    fn name(&self) -> &str;

    /// Natural-language description consumed by the agent when choosing tools
    fn description(&self) -> &str;

    fn execute_typed(&self, params: Self::Params, context: &mut ToolContext) -> Result<ToolResult>;

    /// JSON schema of the parameter type, shown to the agent alongside the
    /// description
    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::to_value(schemars::schema_for!(Self::Params)).unwrap_or_else(|_| serde_json::json!({}))
    }
}

/// Object-safe form of [`Tool`], taking raw JSON parameters
pub trait ErasedTool: Send + Sync {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn parameters_schema(&self) -> serde_json::Value;
    fn execute(&self, params: serde_json::Value, context: &mut ToolContext) -> Result<ToolResult>;
}

impl<T: Tool> ErasedTool for T {
    fn name(&self) -> &str {
        Tool::name(self)
    }

    fn description(&self) -> &str {
        Tool::description(self)
    }

    fn parameters_schema(&self) -> serde_json::Value {
        Tool::parameters_schema(self)
    }

    fn execute(&self, params: serde_json::Value, context: &mut ToolContext) -> Result<ToolResult> {
        let typed = serde_json::from_value(params).map_err(|e| BrowserError::InvalidParams {
            tool: Tool::name(self).to_string(),
            reason: e.to_string(),
        })?;
        self.execute_typed(typed, context)
    }
}

/// Registry of tool adapters, preserving registration order (the order tools
/// are presented to the agent)
pub struct ToolRegistry {
    tools: IndexMap<String, Box<dyn ErasedTool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self { tools: IndexMap::new() }
    }

    /// Registry with the full default tool set
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(NavigateTool);
        registry.register(NavigateBackTool);
        registry.register(FormInputTool);
        registry.register(WaitAndClickTool);
        registry.register(WaitForNavigationTool);
        registry.register(SelectDropdownOptionTool);
        registry.register(SubmitFormTool);
        registry.register(ExtractTextTool);
        registry.register(ScreenshotTool);
        registry
    }

    pub fn register<T: Tool + 'static>(&mut self, tool: T) {
        self.tools.insert(Tool::name(&tool).to_string(), Box::new(tool));
    }

    pub fn get(&self, name: &str) -> Option<&dyn ErasedTool> {
        self.tools.get(name).map(|t| t.as_ref())
    }

    /// Tools in registration order
    pub fn iter(&self) -> impl Iterator<Item = &dyn ErasedTool> {
        self.tools.values().map(|t| t.as_ref())
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Execute a tool by name.
    ///
    /// Any failure below the adapter surfaces as a distinguishable
    /// `ToolExecutionFailed` carrying the original message; the caller (the
    /// agent loop) treats it as an observation, not a crash.
    pub fn execute(&self, name: &str, params: serde_json::Value, context: &mut ToolContext) -> Result<ToolResult> {
        let tool = self.get(name).ok_or_else(|| BrowserError::UnknownTool(name.to_string()))?;

        log::debug!("Executing tool '{}' with params {}", name, params);

        match tool.execute(params, context) {
            Ok(result) => {
                context.session.pace();
                Ok(result)
            }
            Err(err @ (BrowserError::ToolExecutionFailed { .. } | BrowserError::InvalidParams { .. })) => Err(err),
            Err(other) => Err(BrowserError::ToolExecutionFailed { tool: name.to_string(), reason: other.to_string() }),
        }
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

//! Agent bootstrap: an LLM-driven tool-calling loop over the browser tools
//!
//! The agent consumes one natural-language instruction and drives the shared
//! browser session through repeated tool calls until the model produces a
//! final answer. Tool failures and unparseable model output are fed back into
//! the loop as text; neither ends the run.

pub mod llm;

pub use llm::{ChatMessage, ChatModel, DEFAULT_MODEL, OpenAiChat};

use crate::browser::BrowserSession;
use crate::error::{BrowserError, Result};
use crate::tools::{ToolContext, ToolRegistry};
use serde::Serialize;

/// Environment variable holding the LLM credential
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Environment variable overriding the API root
pub const BASE_URL_VAR: &str = "OPENAI_BASE_URL";

/// Placeholder shipped in .env templates; counts as no credential
const API_KEY_PLACEHOLDER: &str = "your_openai_api_key_here";

/// Observations longer than this are truncated before being fed back to the
/// model, to stay clear of context limits
const MAX_OBSERVATION_CHARS: usize = 6_000;

fn validate_api_key(value: Option<String>) -> Result<String> {
    match value {
        Some(key) if !key.trim().is_empty() && key != API_KEY_PLACEHOLDER => Ok(key),
        _ => Err(BrowserError::MissingCredential(API_KEY_VAR.to_string())),
    }
}

/// Read the LLM credential from the environment (loading `.env` first).
/// Fails when the variable is absent, empty, or still the placeholder.
pub fn api_key_from_env() -> Result<String> {
    dotenvy::dotenv().ok();
    validate_api_key(std::env::var(API_KEY_VAR).ok())
}

/// Agent construction options
#[derive(Debug, Clone)]
pub struct AgentConfig {
    /// Log each reasoning step and tool call
    pub verbose: bool,

    /// Upper bound on model turns before the run is abandoned
    pub max_iterations: usize,

    /// Chat model identifier
    pub model: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self { verbose: false, max_iterations: 10, model: DEFAULT_MODEL.to_string() }
    }
}

/// One executed tool call in the run's trace
#[derive(Debug, Clone, Serialize)]
pub struct AgentStep {
    pub tool: String,
    pub args: serde_json::Value,
    pub observation: String,
}

/// Final answer plus the trace of tool calls that produced it
#[derive(Debug, Clone, Serialize)]
pub struct AgentOutcome {
    pub answer: String,
    pub steps: Vec<AgentStep>,
}

/// A parsed model reply: either one tool invocation or the final answer
#[derive(Debug, PartialEq)]
enum StepDecision {
    ToolCall { tool: String, args: serde_json::Value },
    FinalAnswer(String),
}

/// Parse a structured-chat reply. The error carries feedback text that is
/// sent back to the model for another attempt.
fn parse_step(content: &str) -> std::result::Result<StepDecision, String> {
    let start = content.find('{');
    let end = content.rfind('}');

    let (start, end) = match (start, end) {
        (Some(s), Some(e)) if s < e => (s, e),
        _ => return Err("the reply contained no JSON object".to_string()),
    };

    let value: serde_json::Value = serde_json::from_str(&content[start..=end])
        .map_err(|e| format!("the JSON object did not parse: {}", e))?;

    if let Some(answer) = value.get("final_answer").and_then(|v| v.as_str()) {
        return Ok(StepDecision::FinalAnswer(answer.to_string()));
    }

    if let Some(tool) = value.get("tool").and_then(|v| v.as_str()) {
        let args = value.get("args").cloned().unwrap_or_else(|| serde_json::json!({}));
        if !args.is_object() {
            return Err("\"args\" must be a JSON object".to_string());
        }
        return Ok(StepDecision::ToolCall { tool: tool.to_string(), args });
    }

    Err("the JSON object carried neither \"tool\" nor \"final_answer\"".to_string())
}

fn truncate_observation(mut text: String) -> String {
    if text.len() > MAX_OBSERVATION_CHARS {
        let mut cut = MAX_OBSERVATION_CHARS;
        while !text.is_char_boundary(cut) {
            cut -= 1;
        }
        text.truncate(cut);
        text.push_str("\n[observation truncated]");
    }
    text
}

/// The tool-calling reasoning loop bound to one chat model and one tool set
pub struct BrowserAgent {
    model: Box<dyn ChatModel>,
    registry: ToolRegistry,
    config: AgentConfig,
}

impl BrowserAgent {
    pub fn new(model: Box<dyn ChatModel>, registry: ToolRegistry, config: AgentConfig) -> Self {
        Self { model, registry, config }
    }

    /// Construct the agent from environment configuration.
    ///
    /// Fails fast when the credential is missing, before any tool or browser
    /// call happens.
    pub fn from_env(registry: ToolRegistry, config: AgentConfig) -> Result<Self> {
        let api_key = api_key_from_env()?;

        let mut backend = OpenAiChat::new(api_key, config.model.clone());
        if let Ok(base_url) = std::env::var(BASE_URL_VAR) {
            backend = backend.with_base_url(base_url);
        }

        Ok(Self::new(Box::new(backend), registry, config))
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Render the system prompt: role, the tool catalogue with schemas, and
    /// the reply format
    fn system_prompt(&self) -> String {
        let mut prompt = String::from(
            "You are a browser automation agent. You control a live browser page \
             through the tools listed below and answer the user's instruction.\n\n\
             Available tools:\n",
        );

        for tool in self.registry.iter() {
            prompt.push_str(&format!(
                "- {}: {}\n  parameters: {}\n",
                tool.name(),
                tool.description(),
                tool.parameters_schema()
            ));
        }

        prompt.push_str(
            "\nRespond with exactly one JSON object per turn, nothing else.\n\
             To invoke a tool: {\"tool\": \"<name>\", \"args\": { ... }}\n\
             When the instruction is fully answered: {\"final_answer\": \"<your answer>\"}\n\
             After each tool call you receive an observation with the result. \
             If a tool fails, the observation describes the failure; you may try \
             a different action.",
        );

        prompt
    }

    /// Run one instruction to completion against the given session.
    ///
    /// Tool failures become observations; only LLM transport errors and the
    /// iteration limit end the run with an error.
    pub async fn run(&self, instruction: &str, session: &BrowserSession) -> Result<AgentOutcome> {
        let mut messages = vec![ChatMessage::system(self.system_prompt()), ChatMessage::user(instruction)];
        let mut steps: Vec<AgentStep> = Vec::new();

        log::info!("Agent run started (model={}, max_iterations={})", self.model.model(), self.config.max_iterations);

        for iteration in 1..=self.config.max_iterations {
            let reply = self.model.complete(&messages).await?;

            if self.config.verbose {
                log::info!("[{}/{}] model: {}", iteration, self.config.max_iterations, reply.trim());
            } else {
                log::debug!("[{}/{}] model: {}", iteration, self.config.max_iterations, reply.trim());
            }

            messages.push(ChatMessage::assistant(reply.clone()));

            match parse_step(&reply) {
                Err(feedback) => {
                    // Malformed intermediate output is corrected in-loop, not raised
                    log::debug!("Unparseable reply: {}", feedback);
                    messages.push(ChatMessage::user(format!(
                        "Your reply could not be used: {}. Respond with exactly one JSON object, \
                         either {{\"tool\": ..., \"args\": {{...}}}} or {{\"final_answer\": ...}}.",
                        feedback
                    )));
                }
                Ok(StepDecision::FinalAnswer(answer)) => {
                    log::info!("Agent finished after {} tool call(s)", steps.len());
                    return Ok(AgentOutcome { answer, steps });
                }
                Ok(StepDecision::ToolCall { tool, args }) => {
                    let mut context = ToolContext::new(session);
                    let observation = match self.registry.execute(&tool, args.clone(), &mut context) {
                        Ok(result) => truncate_observation(result.text()),
                        Err(e) => format!("Tool execution failed: {}", e),
                    };

                    if self.config.verbose {
                        log::info!("[{}/{}] {} -> {}", iteration, self.config.max_iterations, tool, observation);
                    }

                    messages.push(ChatMessage::user(format!("Observation: {}", observation)));
                    steps.push(AgentStep { tool, args, observation });
                }
            }
        }

        Err(BrowserError::IterationLimitReached(self.config.max_iterations))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_api_key_missing() {
        assert!(matches!(validate_api_key(None), Err(BrowserError::MissingCredential(_))));
    }

    #[test]
    fn test_validate_api_key_placeholder_rejected() {
        let result = validate_api_key(Some(API_KEY_PLACEHOLDER.to_string()));
        assert!(matches!(result, Err(BrowserError::MissingCredential(_))));
    }

    #[test]
    fn test_validate_api_key_blank_rejected() {
        assert!(validate_api_key(Some("   ".to_string())).is_err());
    }

    #[test]
    fn test_validate_api_key_accepts_real_value() {
        assert_eq!(validate_api_key(Some("sk-test".to_string())).unwrap(), "sk-test");
    }

    #[test]
    fn test_parse_step_tool_call() {
        let decision = parse_step(r#"{"tool": "navigate", "args": {"url": "https://example.com"}}"#).unwrap();
        match decision {
            StepDecision::ToolCall { tool, args } => {
                assert_eq!(tool, "navigate");
                assert_eq!(args["url"], "https://example.com");
            }
            _ => panic!("Expected tool call"),
        }
    }

    #[test]
    fn test_parse_step_tool_call_without_args() {
        let decision = parse_step(r#"{"tool": "navigate_back"}"#).unwrap();
        match decision {
            StepDecision::ToolCall { tool, args } => {
                assert_eq!(tool, "navigate_back");
                assert_eq!(args, serde_json::json!({}));
            }
            _ => panic!("Expected tool call"),
        }
    }

    #[test]
    fn test_parse_step_final_answer() {
        let decision = parse_step(r#"{"final_answer": "The page is about examples."}"#).unwrap();
        assert_eq!(decision, StepDecision::FinalAnswer("The page is about examples.".to_string()));
    }

    #[test]
    fn test_parse_step_fenced_json() {
        // Models often wrap JSON in prose or code fences; the parser takes
        // the outermost braces
        let reply = "Sure, next step:\n```json\n{\"tool\": \"screenshot\", \"args\": {}}\n```";
        let decision = parse_step(reply).unwrap();
        assert!(matches!(decision, StepDecision::ToolCall { .. }));
    }

    #[test]
    fn test_parse_step_garbage_is_feedback_not_panic() {
        assert!(parse_step("I will click the button now.").is_err());
        assert!(parse_step("{not json}").is_err());
        assert!(parse_step(r#"{"thought": "hmm"}"#).is_err());
    }

    #[test]
    fn test_truncate_observation_bounds_length() {
        let long = "x".repeat(MAX_OBSERVATION_CHARS * 2);
        let truncated = truncate_observation(long);
        assert!(truncated.len() < MAX_OBSERVATION_CHARS + 50);
        assert!(truncated.ends_with("[observation truncated]"));

        let short = truncate_observation("ok".to_string());
        assert_eq!(short, "ok");
    }

    #[test]
    fn test_agent_config_defaults() {
        let config = AgentConfig::default();
        assert!(!config.verbose);
        assert_eq!(config.max_iterations, 10);
        assert_eq!(config.model, DEFAULT_MODEL);
    }

    #[test]
    fn test_system_prompt_lists_tools() {
        let agent = BrowserAgent::new(
            Box::new(OpenAiChat::new("sk-test", DEFAULT_MODEL)),
            ToolRegistry::with_defaults(),
            AgentConfig::default(),
        );

        let prompt = agent.system_prompt();
        for name in ["navigate", "form_input", "wait_and_click", "select_dropdown_option", "extract_text"] {
            assert!(prompt.contains(name), "prompt is missing tool {}", name);
        }
        assert!(prompt.contains("final_answer"));
    }
}

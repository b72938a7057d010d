//! # browser-pilot
//!
//! An LLM-driven browser automation assistant. A natural-language instruction
//! ("go to site X, search for Y, summarize the first result") is turned into a
//! sequence of browser actions and a final textual answer by a tool-calling
//! agent loop driving one Chrome/Chromium page over the DevTools protocol.
//!
//! ## Running an instruction
//!
//! ```rust,no_run
//! use browser_pilot::agent::{AgentConfig, BrowserAgent};
//! use browser_pilot::browser::{BrowserSession, LaunchOptions};
//! use browser_pilot::tools::ToolRegistry;
//!
//! # async fn run() -> browser_pilot::Result<()> {
//! // Fails fast if OPENAI_API_KEY is absent or still the placeholder
//! let agent = BrowserAgent::from_env(ToolRegistry::with_defaults(), AgentConfig::default())?;
//!
//! let session = BrowserSession::launch(LaunchOptions::default())?;
//! let outcome = agent.run("Navigate to example.com and tell me what the page is about.", &session).await?;
//! println!("{}", outcome.answer);
//!
//! session.close()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Using the tool system directly
//!
//! ```rust,no_run
//! use browser_pilot::browser::{BrowserSession, LaunchOptions};
//! use browser_pilot::tools::{ToolContext, ToolRegistry};
//! use serde_json::json;
//!
//! # fn main() -> browser_pilot::Result<()> {
//! let session = BrowserSession::launch(LaunchOptions::default())?;
//! let registry = ToolRegistry::with_defaults();
//! let mut context = ToolContext::new(&session);
//!
//! registry.execute("navigate", json!({"url": "https://example.com"}), &mut context)?;
//! registry.execute("wait_and_click", json!({"selector": "a", "timeout_ms": 5000}), &mut context)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Describing a flow
//!
//! Flows are serializable descriptions of intended operations, useful as
//! documentation or as structured output; they are not executed:
//!
//! ```rust
//! use browser_pilot::flow::{Flow, Operation};
//!
//! let mut flow = Flow::new("Search docs", "Search the docs site and read the top hit");
//! flow.add_operation(Operation::navigate("https://docs.example.com"));
//! flow.add_operation(Operation::search("input[name='q']", "sessions"));
//! flow.add_operation(Operation::extract());
//! println!("{}", flow.to_json_pretty());
//! ```
//!
//! ## Module Overview
//!
//! - [`browser`]: Browser session management and configuration
//! - [`tools`]: Tool adapters (navigate, fill, wait-and-click, select, submit, extract, screenshot)
//! - [`agent`]: The LLM tool-calling loop and its chat-model seam
//! - [`flow`]: The operation/flow description model
//! - [`error`]: Error types and result aliases

pub mod agent;
pub mod browser;
pub mod error;
pub mod flow;
pub mod tools;

pub use agent::{AgentConfig, AgentOutcome, BrowserAgent};
pub use browser::{BrowserSession, LaunchOptions};
pub use error::{BrowserError, Result};
pub use flow::{Flow, Operation};
pub use tools::{Tool, ToolContext, ToolRegistry, ToolResult};

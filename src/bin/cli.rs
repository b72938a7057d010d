//! browser-pilot CLI
//!
//! Runs one natural-language instruction end to end against a live browser,
//! prints example operation flows, and lists the available tools. The
//! environment is checked before any automation starts: a missing or
//! placeholder credential is a fatal diagnostic, not a warning.

use anyhow::Context;
use browser_pilot::agent::{AgentConfig, BrowserAgent, api_key_from_env};
use browser_pilot::browser::{BrowserSession, LaunchOptions};
use browser_pilot::flow;
use browser_pilot::tools::ToolRegistry;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "browser-pilot")]
#[command(version)]
#[command(about = "LLM-driven browser automation assistant", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run one instruction end to end and print the answer
    Run {
        /// The natural-language instruction to execute
        instruction: String,

        /// Launch the browser in headed mode (default: headless)
        #[arg(long, short = 'H')]
        headed: bool,

        /// Print each reasoning step and tool call
        #[arg(long, short = 'v')]
        verbose: bool,

        /// Maximum agent iterations
        #[arg(long, default_value = "10", value_parser = clap::value_parser!(u8).range(1..=20))]
        max_iterations: u8,

        /// Chat model identifier
        #[arg(long, default_value = browser_pilot::agent::DEFAULT_MODEL)]
        model: String,

        /// Delay after every tool action, in milliseconds
        #[arg(long, value_name = "MS")]
        slow_mo: Option<u64>,

        /// Disable the Chrome sandbox (needed in some containers)
        #[arg(long)]
        no_sandbox: bool,

        /// Path to a custom Chrome binary
        #[arg(long, value_name = "PATH")]
        chrome_path: Option<String>,

        /// Persistent browser profile directory
        #[arg(long, value_name = "DIR")]
        user_data_dir: Option<String>,
    },

    /// Print an example operation flow as JSON
    Flow {
        /// Print the Google-search flow for this keyword instead of the
        /// placeholder template
        #[arg(long)]
        keyword: Option<String>,
    },

    /// List the registered tool adapters
    Tools,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Run {
            instruction,
            headed,
            verbose,
            max_iterations,
            model,
            slow_mo,
            no_sandbox,
            chrome_path,
            user_data_dir,
        } => {
            // Environment check before any automation starts
            api_key_from_env().context(
                "environment check failed; set OPENAI_API_KEY in the environment or in a .env file",
            )?;

            let config = AgentConfig { verbose, max_iterations: max_iterations as usize, model };
            let agent = BrowserAgent::from_env(ToolRegistry::with_defaults(), config)?;

            let mut options = LaunchOptions::new().headless(!headed).sandbox(!no_sandbox);
            if let Some(ms) = slow_mo {
                options = options.slow_mo_ms(ms);
            }
            if let Some(path) = chrome_path {
                options = options.chrome_path(path);
            }
            if let Some(dir) = user_data_dir {
                options = options.user_data_dir(dir);
            }

            let session = BrowserSession::launch(options).context("failed to launch browser")?;

            eprintln!("Running instruction: {}", instruction);

            // Hold the result so the session is closed on either path
            let result = agent.run(&instruction, &session).await;
            if let Err(e) = session.close() {
                log::warn!("Failed to close browser cleanly: {}", e);
            }

            let outcome = result.context("agent run failed")?;

            if verbose && !outcome.steps.is_empty() {
                eprintln!();
                eprintln!("Steps:");
                for (i, step) in outcome.steps.iter().enumerate() {
                    eprintln!("  {}. {} {}", i + 1, step.tool, step.args);
                    eprintln!("     -> {}", step.observation.lines().next().unwrap_or(""));
                }
                eprintln!();
            }

            println!("{}", outcome.answer);
        }

        Command::Flow { keyword } => {
            let flow = match keyword {
                Some(keyword) => flow::google_search_flow(&keyword),
                None => flow::example_flow(),
            };
            println!("{}", flow.to_json_pretty());
        }

        Command::Tools => {
            let registry = ToolRegistry::with_defaults();
            for tool in registry.iter() {
                println!("{:<24} {}", tool.name(), tool.description());
            }
        }
    }

    Ok(())
}

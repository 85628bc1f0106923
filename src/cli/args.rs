//! Clap argument types and payload parsing.

use clap::{Parser, ValueEnum};
use serde_json::Value;

use userdir::constants::{DEFAULT_PAGE_SIZE, ENV_BASE_URL, ENV_TOKEN};
use userdir::output::OutputRenderer;
use userdir::output::json::JsonRenderer;
use userdir::output::terminal::TerminalRenderer;

/// Command-line client for the user directory API.
#[derive(Parser, Debug)]
#[command(name = "userdir", version = userdir::constants::VERSION, about)]
pub struct Cli {
    /// Base URL of the directory API (overrides config).
    #[arg(long, global = true, env = ENV_BASE_URL)]
    pub base_url: Option<String>,

    /// Bearer token sent with every request (overrides config).
    #[arg(long, global = true, env = ENV_TOKEN, hide_env_values = true)]
    pub token: Option<String>,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Terminal)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// List users, five per page.
    List(ListArgs),

    /// Register a new user from a JSON object.
    Add {
        /// User payload, e.g. '{"email": "a@example.com", "role": "employee"}'.
        #[arg(value_parser = parse_json_object)]
        payload: Value,
    },

    /// Delete a user.
    Delete {
        /// User identifier.
        id: String,
    },

    /// Apply a partial update to a user.
    Edit {
        /// User identifier.
        id: String,
        /// Fields to change, as a JSON object.
        #[arg(value_parser = parse_json_object)]
        patch: Value,
    },

    /// Show a single user.
    Get {
        /// User identifier.
        id: String,
    },

    /// List users matching a filter token.
    Filter(FilterArgs),

    /// Render the analyst dashboard as HTML.
    Dashboard {
        /// Sub-path under the dashboard mount point.
        #[arg(long, default_value = "/")]
        path: String,
    },

    /// Print version information.
    Version,
}

/// Arguments for the `list` subcommand.
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Page number (1-based).
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub page: u32,

    /// Free-text search term.
    #[arg(long)]
    pub search: Option<String>,

    /// Role filter; "all" disables it.
    #[arg(long)]
    pub role: Option<String>,
}

/// Arguments for the `filter` subcommand.
#[derive(Parser, Debug)]
pub struct FilterArgs {
    /// Page number (1-based).
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub page: u32,

    /// Filter token understood by the server.
    #[arg(long, default_value = "")]
    pub filter: String,

    /// Users per page.
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE, value_parser = clap::value_parser!(u32).range(1..))]
    pub page_size: u32,
}

/// Output format options.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Terminal,
    Json,
}

impl OutputFormat {
    pub fn renderer(self) -> Box<dyn OutputRenderer> {
        match self {
            OutputFormat::Terminal => Box::new(TerminalRenderer),
            OutputFormat::Json => Box::new(JsonRenderer),
        }
    }
}

/// Parse a CLI argument as a JSON object.
fn parse_json_object(raw: &str) -> Result<Value, String> {
    let value: Value = serde_json::from_str(raw).map_err(|e| format!("invalid JSON: {e}"))?;
    if !value.is_object() {
        return Err("expected a JSON object".to_string());
    }
    Ok(value)
}

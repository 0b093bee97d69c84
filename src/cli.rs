//! CLI - Command Line Interface for Cineplex
//!
//! Everything the TUI fetches can also be fetched from a script. Output is
//! JSON when `--json` is given or stdout is not a terminal.
//!
//! # Examples
//!
//! ```bash
//! cineplex movie "Inception" --json
//! cineplex m "The Matrix" --limit 3
//! cineplex health --api-base http://localhost:5000
//! ```

use clap::{Args, Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::io::IsTerminal;
use std::path::PathBuf;

// =============================================================================
// Exit Codes
// =============================================================================

/// Exit codes for CLI operations (semantic for scripting)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    Success = 0,
    /// General error
    Error = 1,
    InvalidArgs = 2,
    /// Backend unreachable or timed out
    NetworkError = 3,
    /// Backend answered 404 for the title
    NotFound = 4,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

// =============================================================================
// Main CLI Structure
// =============================================================================

/// Cineplex - cinematic TUI for movie discovery
///
/// Run without arguments to launch interactive TUI.
/// Use subcommands for scriptable lookups.
#[derive(Parser, Debug)]
#[command(
    name = "cineplex",
    version,
    about = "Cinematic TUI for movie discovery",
    long_about = "Search for a movie, read its details and browse related titles.\n\n\
                  Run without arguments to launch the interactive TUI.\n\
                  Use subcommands for automation and scripting.",
    after_help = "EXAMPLES:\n\
                  cineplex                          Launch interactive TUI\n\
                  cineplex movie \"Inception\"        Fetch a movie and its recommendations\n\
                  cineplex health --json            Check the backend"
)]
pub struct Cli {
    /// Output format as JSON (default for non-TTY)
    #[arg(long, short = 'j', global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Backend origin, e.g. http://localhost:5000
    #[arg(long, global = true, value_name = "URL")]
    pub api_base: Option<String>,

    /// Path to config file
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (omit for TUI mode)
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Check if running in CLI mode (has subcommand)
    pub fn is_cli_mode(&self) -> bool {
        self.command.is_some()
    }

    /// Check if JSON output should be used
    pub fn should_json(&self) -> bool {
        self.json || !std::io::stdout().is_terminal()
    }
}

// =============================================================================
// Subcommands
// =============================================================================

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch a movie and its recommendations
    #[command(visible_alias = "m")]
    Movie(MovieCmd),

    /// Check that the backend is up
    Health(HealthCmd),
}

/// Movie lookup arguments
#[derive(Args, Debug)]
pub struct MovieCmd {
    /// Movie title
    pub title: String,

    /// Show at most this many recommendations
    #[arg(long, short = 'l')]
    pub limit: Option<usize>,
}

impl MovieCmd {
    /// Title with surrounding whitespace removed, None when blank
    pub fn trimmed_title(&self) -> Option<&str> {
        let title = self.title.trim();
        (!title.is_empty()).then_some(title)
    }
}

#[derive(Args, Debug)]
pub struct HealthCmd {}

// =============================================================================
// JSON Output Types
// =============================================================================

/// Generic JSON output wrapper with status
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonOutput<T: Serialize> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "is_zero")]
    pub exit_code: i32,
}

fn is_zero(n: &i32) -> bool {
    *n == 0
}

impl<T: Serialize> JsonOutput<T> {
    pub fn success(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
            exit_code: 0,
        }
    }

    /// Create error output (no data)
    pub fn error_msg(msg: impl Into<String>, code: ExitCode) -> JsonOutput<()> {
        JsonOutput::<()> {
            data: None,
            error: Some(msg.into()),
            exit_code: code.into(),
        }
    }
}

// =============================================================================
// Output Helpers
// =============================================================================

/// Output handler for consistent formatting
pub struct Output {
    pub json: bool,
    pub quiet: bool,
}

impl Output {
    pub fn new(cli: &Cli) -> Self {
        Self {
            json: cli.should_json(),
            quiet: cli.quiet,
        }
    }

    /// Print data wrapped in the JSON envelope
    pub fn print_json<T: Serialize>(&self, data: T) -> anyhow::Result<()> {
        let output = JsonOutput::success(data);
        println!("{}", serde_json::to_string_pretty(&output)?);
        Ok(())
    }

    /// Print a human-readable line to stdout
    pub fn line(&self, msg: impl std::fmt::Display) {
        println!("{}", msg);
    }

    /// Print error and return exit code
    pub fn error(&self, msg: impl Into<String>, code: ExitCode) -> ExitCode {
        let msg = msg.into();
        if self.json {
            let output = JsonOutput::<()>::error_msg(&msg, code);
            if let Ok(json) = serde_json::to_string_pretty(&output) {
                eprintln!("{}", json);
            }
        } else if !self.quiet {
            eprintln!("Error: {}", msg);
        }
        code
    }

    /// Print info message (suppressed in quiet mode)
    pub fn info(&self, msg: impl std::fmt::Display) {
        if !self.quiet && !self.json {
            eprintln!("{}", msg);
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

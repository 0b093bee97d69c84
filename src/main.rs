//! Cineplex - cinematic TUI for movie discovery
//!
//! Search a title, read its details, hop through recommendations.
//!
//! # Usage
//!
//! ```bash
//! # Launch interactive TUI
//! cineplex
//!
//! # CLI mode (for automation)
//! cineplex movie "Inception" --json
//! cineplex health
//! ```

mod cli;
mod commands;

use std::io::{stdout, Stdout};
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc::{self, UnboundedReceiver};

use cineplex::{loader, logging, ui, App, Config, LoadOutcome, MovieApiClient, StaleResponsePolicy};

use crate::cli::{Cli, Command, ExitCode, Output};

/// Terminal type alias for convenience
type Tui = Terminal<CrosstermBackend<Stdout>>;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let (config, config_err) = match loaded {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };
    let client = MovieApiClient::with_base_url(config.resolve_api_base(cli.api_base.as_deref()));

    if cli.is_cli_mode() {
        logging::init_stderr(config.log_filter());
        warn_invalid_config(config_err.as_ref());
        let exit_code = run_cli(cli, &client).await;
        std::process::exit(exit_code.into());
    } else {
        if let Err(e) = logging::init_file(config.log_filter()) {
            eprintln!("Logging disabled: {}", e);
        }
        warn_invalid_config(config_err.as_ref());
        run_tui(&config, client).await
    }
}

/// Report a config file that failed to parse; defaults are used instead
fn warn_invalid_config(err: Option<&anyhow::Error>) {
    if let Some(e) = err {
        tracing::warn!(error = %format!("{:#}", e), "ignoring invalid config file");
    }
}

/// Run CLI command and return exit code
async fn run_cli(cli: Cli, client: &MovieApiClient) -> ExitCode {
    let output = Output::new(&cli);

    match cli.command {
        Some(Command::Movie(cmd)) => commands::movie_cmd(cmd, client, &output).await,
        Some(Command::Health(cmd)) => commands::health_cmd(cmd, client, &output).await,
        None => ExitCode::Success,
    }
}

// =============================================================================
// TUI Mode
// =============================================================================

/// Initialize the terminal for TUI mode
fn init_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal to normal state
fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Run interactive TUI
async fn run_tui(config: &Config, client: MovieApiClient) -> Result<()> {
    let policy = if config.discard_stale_responses {
        StaleResponsePolicy::DiscardStale
    } else {
        StaleResponsePolicy::LastResolvedWins
    };
    tracing::info!(api_base = client.base_url(), ?policy, "starting tui");

    let mut terminal = init_terminal()?;
    let mut app = App::with_policy(policy);

    let result = run_event_loop(&mut terminal, &mut app, &client).await;

    app.unmount();

    // Always restore terminal, even on error
    restore_terminal(&mut terminal)?;

    result
}

/// Main event loop - handles input, starts loads, applies their outcomes
async fn run_event_loop(terminal: &mut Tui, app: &mut App, client: &MovieApiClient) -> Result<()> {
    const TICK_RATE: Duration = Duration::from_millis(100);

    let (tx, mut rx) = mpsc::unbounded_channel::<LoadOutcome>();

    while app.running {
        terminal.draw(|frame| ui::render(frame, app))?;

        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (ignore releases on Windows)
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }

        loader::spawn_all(client, app.take_requests(), &tx);
        drain_outcomes(&mut rx, app);
        app.on_tick();
    }

    Ok(())
}

/// Apply every outcome that has arrived since the last tick
fn drain_outcomes(rx: &mut UnboundedReceiver<LoadOutcome>, app: &mut App) {
    while let Ok(outcome) = rx.try_recv() {
        app.finish_load(outcome);
    }
}

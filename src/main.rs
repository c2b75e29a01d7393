// ABOUTME: Main entry point for tmux-picker
//
// Binary: tmux-picker
// Usage: tmux-picker
// Lists tmux sessions and windows full screen; Enter switches the current
// tmux client to the selected row, q/Esc/Ctrl-C quits.

#![allow(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, IsTerminal};
use tmux_picker::app::App;
use tmux_picker::components::SessionListComponent;
use tmux_picker::tmux::{SessionProvider, TmuxClient};
use tracing::info;

mod cli;

/// Environment variable naming the JSONL log file
const LOG_PATH_ENV: &str = "TMUX_PICKER_LOG";

/// Terminal cleanup utility to ensure proper restoration
fn cleanup_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}

/// Unified terminal cleanup that works with a terminal instance
fn cleanup_terminal_with_instance(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn main() -> Result<()> {
    setup_logging();
    setup_panic_handler();

    let _args = cli::Cli::parse();

    let provider = TmuxClient::locate()?;
    let mut app = App::new(provider);

    let result = run_tui(&mut app);

    // Ensure terminal is cleaned up on any error
    if result.is_err() {
        cleanup_terminal();
    }

    if let Some(target) = &app.state.switched_to {
        info!("Exited after switching to {}", target);
    }

    result
}

fn run_tui<P: SessionProvider>(app: &mut App<P>) -> Result<()> {
    if !IsTerminal::is_terminal(&io::stdout()) {
        return Err(anyhow::anyhow!(
            "No TTY detected. tmux-picker requires a terminal.\n\
             Try running directly in a terminal instead of redirecting output."
        ));
    }

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to initialize terminal")?;

    // Ensure terminal cleanup happens even if there's an error
    let result = app.load().and_then(|()| run_tui_loop(app, &mut terminal));

    if let Err(e) = cleanup_terminal_with_instance(&mut terminal) {
        tracing::error!("Failed to cleanup terminal: {}", e);
        cleanup_terminal();
    }

    result
}

fn run_tui_loop<P: SessionProvider>(
    app: &mut App<P>,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    let component = SessionListComponent::new();
    terminal.hide_cursor()?;

    while !app.should_quit() {
        terminal.draw(|frame| component.render(frame, &app.state))?;

        // Blocks until the next terminal event; resizes just trigger a redraw
        if let Event::Key(key_event) = event::read()? {
            app.handle_key_event(key_event)?;
        }
    }

    Ok(())
}

fn setup_logging() {
    use std::fs::OpenOptions;
    use std::sync::Mutex;
    use tracing_subscriber::prelude::*;

    // The TUI owns stdout, so logs only go to a file when one is requested
    let Some(log_path) = std::env::var_os(LOG_PATH_ENV) else {
        return;
    };

    let file = match OpenOptions::new().create(true).append(true).open(&log_path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Cannot open log file {}: {}", log_path.to_string_lossy(), e);
            return;
        }
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json() // Output in JSON Lines format
                .with_target(true)
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tmux_picker=info".into()),
        )
        .init();
}

fn setup_panic_handler() {
    use tracing::error;

    std::panic::set_hook(Box::new(|panic_info| {
        // Ensure terminal is restored before logging the panic
        cleanup_terminal();

        error!("Application panicked: {}", panic_info);
        eprintln!("Application panicked: {}", panic_info);
    }));
}

//! fourcalc - four-function calculator for the terminal
//!
//! Type digits and operators, or click the keypad. Errors show up in a modal
//! overlay; logs go to a file so they never touch the screen.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use fourcalc_tui::{
    app::{event::EventHandler, reduce, Action, AppState},
    terminal::{install_panic_hook, restore_terminal, setup_terminal, Tui},
    ui,
};
use libfourcalc::{
    logging::{LogFormat, LoggingConfig},
    Config,
};

#[derive(Parser, Debug)]
#[command(name = "fourcalc")]
#[command(version, about = "Four-function calculator for the terminal")]
#[command(long_about = r#"Four-function calculator for the terminal.

KEYS:
    0-9 .          Enter a number
    + - * /        Choose operator
    Enter or =     Compute result
    Backspace      Delete last digit
    c              Clear everything
    F1             Toggle help
    q, Ctrl+C      Quit

The keypad can also be clicked with the mouse.

CONFIGURATION:
    Read from $FOURCALC_CONFIG or ~/.config/fourcalc/config.toml.
    Logs are written to ~/.local/share/fourcalc/fourcalc.log by default.
    Pass -v to log state transitions at debug level.
"#)]
struct Args {
    /// Path to the configuration file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Minimum log level (error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Log output format (text, json, pretty)
    #[arg(long, value_name = "FORMAT")]
    log_format: Option<LogFormat>,

    /// Log at debug level regardless of --log-level
    #[arg(short, long)]
    verbose: bool,
}

fn load_config(args: &Args) -> fourcalc_tui::Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load_from_path(path)?.with_env_overrides(),
        None => Config::load()?,
    };

    if let Some(level) = &args.log_level {
        config.logging.level = level.clone();
    }
    if let Some(format) = args.log_format {
        config.logging.format = format;
    }

    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = load_config(&args).context("Failed to load configuration")?;

    let log_file = config.log_file().context("Failed to resolve log file")?;
    LoggingConfig::new(config.logging.format, config.logging.level.clone(), args.verbose)
        .with_file(&log_file)
        .init()
        .with_context(|| format!("Failed to open log file {}", log_file.display()))?;

    tracing::info!(tick_rate_ms = config.ui.tick_rate_ms, colors = config.ui.colors, "starting fourcalc");

    install_panic_hook();
    let mut terminal = setup_terminal()?;

    let result = run_app(&mut terminal, &config);

    restore_terminal(terminal)?;
    tracing::info!("fourcalc exited");

    Ok(result?)
}

fn run_app(terminal: &mut Tui, config: &Config) -> fourcalc_tui::Result<()> {
    let mut state = AppState::with_config(config.ui.clone());

    let (width, height) = crossterm::terminal::size()?;
    state = reduce(state, Action::Resize(width, height));

    let event_handler = EventHandler::new(state.config.tick_rate_ms);

    loop {
        terminal.draw(|frame| ui::render(frame, &state))?;

        let action: Action = event_handler.next()?.into();
        state = reduce(state, action);

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

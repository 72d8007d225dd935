// ABOUTME: Main entry point for the Flagdeck TUI application

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::*, Terminal};
use std::{
    io,
    sync::Arc,
    time::{Duration, Instant},
};
use tracing::{error, info};

use flagdeck::app::{App, EventHandler};
use flagdeck::cli::Cli;
use flagdeck::components::LayoutComponent;
use flagdeck::config::Config;
use flagdeck::toast::{ToastManager, TokioScheduler};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    cli.apply_to(&mut config);
    config.validate()?;

    if let Err(e) = setup_logging() {
        eprintln!("Logging disabled: {e}");
    }
    setup_panic_handler();
    info!(
        "Starting flagdeck (flags: {}, movies: {})",
        config.flags_api_url, config.movies_api_url
    );

    let toasts = ToastManager::with_scheduler(Arc::new(TokioScheduler::new()), config.toast_duration());
    let mut app = App::from_config(&config, toasts)?;
    app.init().await;
    let mut layout = LayoutComponent::new();

    let result = run_tui(&mut app, &mut layout).await;
    app.shutdown();
    info!("Flagdeck exited");

    result
}

async fn run_tui(app: &mut App, layout: &mut LayoutComponent) -> Result<()> {
    // Check if we're in a proper terminal
    if let Err(e) = crossterm::terminal::is_raw_mode_enabled() {
        eprintln!("Cannot check terminal raw mode: {}", e);
        return Err(anyhow::anyhow!("Terminal not compatible: {}", e));
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let tick_rate = Duration::from_millis(250);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| {
            layout.render(frame, &app.state);
        })?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if crossterm::event::poll(timeout)? {
            if let Event::Key(key_event) = event::read()? {
                if let Some(app_event) = EventHandler::handle_key_event(key_event, &mut app.state) {
                    EventHandler::process_event(app_event, &mut app.state);
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            if let Err(e) = app.tick().await {
                // Continue running instead of crashing
                error!("Error during app tick: {}", e);
            }
            last_tick = Instant::now();

            // Check if UI needs immediate refresh after async operations
            if app.needs_ui_refresh() {
                terminal.draw(|frame| {
                    layout.render(frame, &app.state);
                })?;
            }
        }

        if app.state.should_quit {
            break;
        }
    }

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}

fn setup_logging() -> Result<()> {
    use std::fs::OpenOptions;
    use std::path::PathBuf;
    use tracing_subscriber::prelude::*;

    let log_dir = dirs::home_dir()
        .map(|home| home.join(".flagdeck").join("logs"))
        .unwrap_or_else(|| PathBuf::from(".flagdeck/logs"));

    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    // Create log file with timestamp
    let log_file = log_dir.join(format!(
        "flagdeck-{}.log",
        chrono::Local::now().format("%Y%m%d-%H%M%S")
    ));

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(file)
                .with_ansi(false), // No ANSI colors in log file
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "flagdeck=info".into()),
        )
        .init();

    Ok(())
}

fn setup_panic_handler() {
    std::panic::set_hook(Box::new(|panic_info| {
        // Ensure terminal is restored before logging the panic
        let _ = disable_raw_mode();
        let _ = execute!(std::io::stderr(), LeaveAlternateScreen, DisableMouseCapture);

        error!("Application panicked: {}", panic_info);
        eprintln!("Application panicked: {}", panic_info);
        eprintln!("Please check the logs for more details.");
    }));
}

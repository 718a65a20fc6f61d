mod animation;
mod app;
mod config;
mod curve;
mod editor;
mod error;
mod event;
mod ui;

use std::io;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;

use crate::app::App;
use crate::config::{CliArgs, Config};
use crate::error::BezierError;
use crate::event::EventHandler;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = CliArgs::parse();

    if cli.print_default_config {
        print!("{}", config::default_config_toml());
        return Ok(());
    }

    // Initialize color-eyre with custom panic hook that restores terminal
    install_panic_hook(restore_terminal)?;

    let config = config::load(&cli)?;

    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = init_logging(&cli, &config)?;

    info!(
        fps = config.animation.fps,
        width = config.canvas.width,
        height = config.canvas.height,
        "bezier-tui starting"
    );
    info!(
        "Using config {}",
        cli.config
            .clone()
            .unwrap_or_else(Config::config_path)
            .display()
    );

    // Setup terminal
    enable_raw_mode()
        .map_err(|e| BezierError::Terminal(format!("Failed to enable raw mode: {}", e)))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if config.mouse_enabled() {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let event_handler = EventHandler::new(config.tick_rate_ms());
    let mut app = App::new(config);

    let result = run(&mut terminal, &mut app, event_handler).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    info!("bezier-tui exiting");
    result
}

// ── Main event loop ───────────────────────────────────────────────────
async fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    mut events: EventHandler,
) -> Result<()> {
    loop {
        if app.take_redraw() {
            terminal
                .draw(|f| ui::draw(f, app))
                .wrap_err("Failed to draw frame")?;
        }

        match events.next().await {
            Some(event) => app.handle_event(event),
            None => break,
        }

        if app.should_quit {
            break;
        }
    }
    events.stop();
    Ok(())
}

/// Install color-eyre's hooks, running `restore` before any panic is reported.
///
/// The eyre hook is installed directly and color-eyre's panic hook is
/// wrapped, since `color_eyre::install` would replace a hook set earlier.
fn install_panic_hook<F>(restore: F) -> Result<()>
where
    F: Fn() + Send + Sync + 'static,
{
    let (panic_hook, eyre_hook) = color_eyre::config::HookBuilder::default().into_hooks();
    eyre_hook.install()?;
    let report = panic_hook.into_panic_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        restore();
        report(panic_info);
    }));
    Ok(())
}

/// Leave raw mode and the alternate screen, and release the mouse
fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
}

/// Initialize tracing to a log file.
///
/// `--log` writes to the given file, otherwise a daily rolling file in
/// the data directory is used. `--no-log` turns logging off. `RUST_LOG`
/// wins over the configured level.
fn init_logging(cli: &CliArgs, config: &Config) -> Result<Option<WorkerGuard>> {
    use tracing_subscriber::EnvFilter;

    if cli.no_log {
        // Can't log to stdout in a TUI
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new("off"))
            .with_writer(io::sink)
            .init();
        return Ok(None);
    }

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.general.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let (writer, guard) = match cli.log {
        Some(ref path) => {
            let file = std::fs::File::create(path)
                .wrap_err_with(|| format!("Failed to create log file {}", path.display()))?;
            tracing_appender::non_blocking(file)
        }
        None => {
            let log_dir = Config::log_dir().wrap_err("Failed to create log directory")?;
            let appender = tracing_appender::rolling::daily(log_dir, "bezier-tui.log");
            tracing_appender::non_blocking(appender)
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(Some(guard))
}

mod app;
mod cli;
mod palette;
#[cfg(test)]
mod test_support;
mod theme;
mod ui;

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use cli::Cli;
use crossterm::event::EventStream;
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use futures_util::StreamExt;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;
use std::time::Instant;
use tokio::sync::mpsc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use tuimux_core::{detect_inside_tmux, Coordinator, FetchResult, FetchWorker, TmuxClient};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.resolve()?;
    init_logging(config.log_file.as_deref())?;

    let client = TmuxClient::with_binary(&config.tmux_binary, detect_inside_tmux());
    info!(
        binary = %config.tmux_binary,
        inside_tmux = client.inside_tmux(),
        debounce_ms = config.debounce_ms,
        "starting dashboard"
    );
    let (worker, mut results) = FetchWorker::channel(client.clone());
    let mut app = App::new(Coordinator::new(client.clone(), config.debounce()));
    app.coordinator.refresh_data(Instant::now());

    loop {
        let mut terminal = setup_terminal()?;
        let outcome = run_app(&mut terminal, &mut app, &worker, &mut results).await;
        restore_terminal(&mut terminal)?;
        outcome?;

        // The terminal belongs to tmux until the client detaches.
        let Some(session) = app.take_pending_attach() else {
            break;
        };
        info!(session = %session, "attaching");
        let attached = client.attach(&session);
        app.finish_attach(&session, attached, Instant::now());
    }
    Ok(())
}

fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match log_file {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init();
        }
        None => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::sink)
                .try_init();
        }
    }
    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    worker: &FetchWorker,
    results: &mut mpsc::Receiver<FetchResult>,
) -> Result<()> {
    let mut events = EventStream::new();
    loop {
        if let Some(fetch) = app.coordinator.fire_due(Instant::now()) {
            worker.dispatch(fetch);
        }
        terminal.draw(|frame| ui::render(frame, app))?;
        if app.should_quit() || app.has_pending_attach() {
            break;
        }

        let deadline = app.coordinator.next_deadline();
        tokio::select! {
            _ = sleep_until(deadline) => {}
            Some(result) = results.recv() => {
                app.apply_fetch(result);
            }
            event = events.next() => match event {
                Some(Ok(event)) => app.handle_event(event, Instant::now()),
                Some(Err(err)) => {
                    warn!(error = %err, "terminal event stream failed");
                    return Err(err.into());
                }
                None => break,
            },
        }
    }
    Ok(())
}

/// Waits for the debounce deadline, or forever when nothing is pending.
async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)).await,
        None => std::future::pending().await,
    }
}

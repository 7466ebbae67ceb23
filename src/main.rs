// src/main.rs

use clap::Parser;
use color_eyre::eyre::{eyre, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;
use scanview::config::{Args, Config};
use scanview::dom::document::{AI_BOX, HISTORY_LIST};
use scanview::session::{Session, SessionEvent};
use scanview::SubmitOutcome;
use std::io::stdout;
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::info;

mod app;
mod logging;
mod ui;

use app::App;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    let config = Config::from_args(&args)?;
    let log_path = logging::initialize_logging(config.log_dir.as_deref())?;
    info!(endpoint = %config.endpoint, log = %log_path.display(), "Starting scanview.");

    match args.headless {
        Some(file) => run_headless(&config, file).await,
        None => run_tui(&config, args.file).await,
    }
}

/// Scans one file without the terminal UI and prints the rendered result
/// area and history as HTML.
async fn run_headless(config: &Config, file: PathBuf) -> Result<()> {
    let mut session = Session::new(config)?;
    session.select_file(Some(file));
    let outcome = session.submit().await;
    session.settle().await;

    let document = session.document();
    let (result_html, history_html) =
        document.with(|doc| (doc.inner_html(AI_BOX), doc.inner_html(HISTORY_LIST)));
    println!("<div id=\"{AI_BOX}\">{result_html}</div>");
    println!("<div id=\"{HISTORY_LIST}\">{history_html}</div>");

    match outcome {
        SubmitOutcome::Rendered => Ok(()),
        SubmitOutcome::Failed(message) => Err(eyre!(message)),
        SubmitOutcome::Ignored => Err(eyre!("No file selected")),
    }
}

async fn run_tui(config: &Config, preselected: Option<PathBuf>) -> Result<()> {
    let session = Session::new(config)?;
    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let (event_tx, mut event_rx) = mpsc::channel(8);
    let mut app = App::new(session.document(), command_tx);
    let session_task = tokio::spawn(session.run(command_rx, event_tx));

    if let Some(path) = preselected {
        app.set_input(path.to_string_lossy().into_owned());
    }

    // --- Setup ---
    stdout().execute(EnterAlternateScreen)?;
    stdout().execute(EnableMouseCapture)?;
    enable_raw_mode()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.clear()?;

    let result = event_loop(&mut terminal, &mut app, &mut event_rx);

    // --- Restore Terminal ---
    stdout().execute(LeaveAlternateScreen)?;
    stdout().execute(DisableMouseCapture)?;
    disable_raw_mode()?;

    // Dropping the app closes the command channel and ends the session.
    drop(app);
    session_task.abort();
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
    events: &mut mpsc::Receiver<SessionEvent>,
) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| ui::render(app, frame))?;

        // Short poll so reveals keep animating between key presses.
        if event::poll(Duration::from_millis(30))? {
            handle_events(app)?;
        }
        while let Ok(event) = events.try_recv() {
            app.apply(event);
        }
        app.on_tick();
    }
    Ok(())
}

fn handle_events(app: &mut App) -> Result<()> {
    if let Event::Key(key) = event::read()? {
        if key.kind == KeyEventKind::Press {
            match key.code {
                KeyCode::Esc => app.quit(),
                KeyCode::Enter => app.submit(),
                KeyCode::Up => app.scroll_up(),
                KeyCode::Down => app.scroll_down(),
                KeyCode::Backspace => app.pop_char(),
                KeyCode::Char(c) => app.push_char(c),
                _ => {}
            }
        }
    }
    Ok(())
}

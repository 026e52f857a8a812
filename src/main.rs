//! Listing TUI - terminal editor for marketplace program listings
//!
//! A Ratatui-based TUI with a General and a Pricing tab for creating and
//! publishing a listing, plus a Transactions tab for cancelling bookings.

mod app;
mod config;
mod data;
mod i18n;
mod platform;
mod state;
mod ui;

use anyhow::{Context, Result};
use app::App;
use config::TuiConfig;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use data::FileStore;
use i18n::Catalog;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use uuid::Uuid;

const LOG_ENV: &str = "LISTING_TUI_LOG";

#[tokio::main]
async fn main() -> Result<()> {
    init_logging()?;

    let listing_id = std::env::args()
        .nth(1)
        .map(|arg| Uuid::parse_str(&arg).with_context(|| format!("Invalid listing id: {arg}")))
        .transpose()?;

    let config = TuiConfig::load()?;
    let messages = Catalog::load(config.messages_path.as_deref())?;
    let store = Arc::new(FileStore::new(config.resolved_store_path()));
    tracing::info!("Using store at {}", store.path().display());

    let mut app = App::new(store, config.marketplace(), messages);
    app.start(listing_id);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        tracing::error!("Exiting after error: {err:?}");
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

/// Log to a file in the data dir; the terminal belongs to the UI
fn init_logging() -> Result<()> {
    let dir = TuiConfig::data_dir();
    std::fs::create_dir_all(&dir)?;
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("listing-tui.log"))?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| "listing_tui=info".into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();
    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        app.drain_events();

        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}

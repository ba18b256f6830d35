use std::io;

use crossterm::{
    cursor::{Hide, Show},
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use vane::app::App;
use vane::error::Result;
use vane::settings;
use vane::ui::theme::Theme;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    init_logging()?;
    tracing::info!("vane starting");

    setup_terminal()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let storage_path = settings::key_path(settings::SIDEBAR_OPEN_KEY);
    let today = chrono::Local::now().date_naive();
    let mut app = App::new(storage_path, Theme::random(), today);

    let result = app.run(&mut terminal);

    cleanup_terminal()?;
    tracing::info!("vane shutting down");

    result.map_err(Into::into)
}

fn setup_terminal() -> Result<()> {
    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture, Hide)?;

    // Restore the terminal even when the app panics.
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = cleanup_terminal();
        original_hook(panic_info);
    }));

    Ok(())
}

fn cleanup_terminal() -> Result<()> {
    execute!(io::stdout(), Show, DisableMouseCapture, LeaveAlternateScreen)?;
    disable_raw_mode()?;
    Ok(())
}

/// Opt-in file logging: set VANE_LOG to a file path. Writing to the
/// terminal would corrupt the TUI, so there is no default subscriber.
fn init_logging() -> Result<()> {
    use tracing_subscriber::EnvFilter;

    let Ok(path) = std::env::var("VANE_LOG") else {
        return Ok(());
    };

    let file = std::fs::File::create(&path)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("vane=debug")),
        )
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

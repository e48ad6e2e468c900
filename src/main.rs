mod animate;
mod app;
mod config;
mod event;
mod format;
mod mask;
mod schedule;
mod sidebar;
mod theme;
mod ui;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self as term_event, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use app::App;
use config::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "painel")]
#[command(version = "0.1.0")]
#[command(about = "A terminal-friendly admin panel for small-business ERP back offices")]
struct Args {
    /// Output the persisted UI state as JSON and exit
    #[arg(short, long)]
    status: bool,

    /// Start with the sidebar rail collapsed (overrides the saved flag)
    #[arg(short, long)]
    collapsed: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    if args.status {
        return print_status();
    }

    run_tui(args)
}

/// Machine-readable state dump for scripts and bar widgets.
fn print_status() -> Result<()> {
    let config = AppConfig::load().unwrap_or_default();

    let output = serde_json::json!({
        "sidebar_collapsed": config.sidebar_collapsed,
        "notifications": config.notifications,
    });

    println!("{}", serde_json::to_string(&output)?);
    Ok(())
}

fn run_tui(args: Args) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state
    let mut config = AppConfig::load().unwrap_or_default();
    if args.collapsed {
        config.sidebar_collapsed = true;
    }
    let size = terminal.size()?;
    let mut app = App::new(size.width, size.height, config);

    // Main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if term_event::poll(Duration::from_millis(50))? {
            match term_event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('c')
                        if key.modifiers.contains(term_event::KeyModifiers::CONTROL) =>
                    {
                        return Ok(())
                    }
                    _ => app.handle_key(key),
                },
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                Event::Resize(width, height) => app.handle_resize(width, height),
                _ => {}
            }
        }

        // Timer pump: fades, auto-dismissals, spinner
        app.tick();

        if app.should_quit {
            return Ok(());
        }
    }
}

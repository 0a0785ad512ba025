use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use connect_four::config::AppConfig;
use connect_four::game::GameState;
use connect_four::logging;
use connect_four::ui::App;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;

/// Play Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Two-player Connect Four in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Override board height (rows)
    #[arg(long)]
    height: Option<usize>,

    /// Override board width (columns)
    #[arg(long)]
    width: Option<usize>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(height) = cli.height {
        config.board.height = height;
    }
    if let Some(width) = cli.width {
        config.board.width = width;
    }
    config.validate().context("invalid configuration")?;

    logging::init(&config.logging).context("initializing logging")?;

    let game_state = GameState::new(config.board.height, config.board.width)
        .context("creating the board")?;
    info!(
        height = game_state.height(),
        width = game_state.width(),
        "starting session"
    );

    run(App::new(game_state)).context("running the terminal UI")
}

fn run(mut app: App) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    );
    let _ = terminal.show_cursor();

    res
}

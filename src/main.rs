use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use connect_four::config::{AppConfig, Frontend};
use connect_four::game::{play, GameResult, GameState};
use connect_four::ui::{App, Console, Presentation};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use connect_four::telemetry::{self, LogSettings, LogTarget};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{info, warn};

/// Play Connect Four against another person at the same terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Two-player Connect Four in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect-four.toml")]
    config: PathBuf,

    /// Use the full-screen terminal UI instead of the line console
    #[arg(long)]
    tui: bool,

    /// Log game events. The console logs to stderr; the terminal UI logs to
    /// connect-four.log unless --log-file is given
    #[arg(short, long)]
    verbose: bool,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml().context("serializing default config")?);
        return Ok(());
    }

    // The front end decides where logs may go, so the config comes first
    let loaded = AppConfig::load_optional(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    let config_found = loaded.is_some();
    let config = loaded.unwrap_or_default();

    let frontend = if cli.tui {
        Frontend::Tui
    } else {
        config.display.frontend
    };

    let log_settings = LogSettings::from_env(frontend, cli.verbose, cli.log_file.as_deref());
    telemetry::init_tracing(&log_settings).with_context(|| match &log_settings.target {
        LogTarget::File(path) => format!("opening log file {}", path.display()),
        LogTarget::Stderr => "initializing logging".to_string(),
    })?;
    if !config_found {
        warn!(path = %cli.config.display(), "config file not found, using defaults");
    }
    info!(?frontend, "starting");

    let presentation = Presentation::from_config(&config);

    match frontend {
        Frontend::Console => run_console(presentation),
        Frontend::Tui => run_tui(presentation),
    }
}

fn run_console(presentation: Presentation) -> Result<()> {
    let mut state = GameState::initial();
    let mut console = Console::stdio(presentation);
    play(&mut state, &mut console).context("game ended without a result")?;
    Ok(())
}

fn run_tui(presentation: Presentation) -> Result<()> {
    // Setup terminal
    enable_raw_mode().context("enabling raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("creating terminal")?;

    let mut app = App::new(presentation.clone());
    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    let result: GameResult = res.context("terminal input failed")?;
    if let Some(text) = presentation.announcement(result) {
        println!("{text}");
    }
    Ok(())
}

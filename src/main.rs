use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use micemen::config::GameConfig;
use micemen::game::GameState;
use micemen::input::KeyboardSource;
use micemen::ui::App;

/// Play Micemen in the terminal.
#[derive(Parser)]
#[command(name = "micemen", about = "Two-player column-shifting mice game")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "micemen.toml")]
    config: PathBuf,

    /// Seed for the layout generator (random if omitted)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = GameConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Same seed, same board. Handy for rematches and bug reports.
    let seed = cli.seed.unwrap_or_else(|| rand::rng().random());
    log::info!("generating layout with seed {seed}");
    let mut rng = StdRng::seed_from_u64(seed);
    let game = GameState::generate(&config, &mut rng);

    // Setup terminal
    enable_raw_mode().context("enabling raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("creating terminal")?;

    // Create app and run
    let mut app = App::new(game, KeyboardSource);
    let res = app.run(&mut terminal);

    // Restore the terminal before surfacing any error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res?;
    println!("Thanks for playing Micemen!");
    Ok(())
}

use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use pocket_snake::app::App;
use pocket_snake::config::{
    DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, GridSize, INPUT_POLL_MS, MAX_GRID_EDGE, MIN_GRID_EDGE,
};
use pocket_snake::input::InputHandler;
use pocket_snake::logging;
use pocket_snake::prefs::{JsonPreferences, default_prefs_path};
use pocket_snake::renderer;
use pocket_snake::terminal_runtime::{TerminalSession, install_panic_hook};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Board width in cells.
    #[arg(long, default_value_t = DEFAULT_GRID_WIDTH,
          value_parser = clap::value_parser!(u16).range(i64::from(MIN_GRID_EDGE)..=i64::from(MAX_GRID_EDGE)))]
    width: u16,

    /// Board height in cells.
    #[arg(long, default_value_t = DEFAULT_GRID_HEIGHT,
          value_parser = clap::value_parser!(u16).range(i64::from(MIN_GRID_EDGE)..=i64::from(MAX_GRID_EDGE)))]
    height: u16,

    /// Seed for reproducible food placement.
    #[arg(long)]
    seed: Option<u64>,

    /// Preference file holding the high score.
    #[arg(long = "prefs-file")]
    prefs_file: Option<PathBuf>,

    /// Log file location.
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,

    /// Log at debug level.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    let log_path = cli.log_file.clone().unwrap_or_else(logging::default_log_path);
    if let Err(error) = logging::init(&log_path, cli.verbose) {
        eprintln!("Logging disabled: cannot open {}: {error}", log_path.display());
    }
    log::info!("starting pocket-snake {}", env!("CARGO_PKG_VERSION"));

    let prefs = load_prefs(cli.prefs_file.clone().unwrap_or_else(default_prefs_path));
    log::info!("preferences at {}", prefs.path().display());
    let bounds = GridSize {
        width: cli.width,
        height: cli.height,
    };

    install_panic_hook();
    let result = run(App::new(prefs, bounds, cli.seed));
    log::info!("exiting");
    result
}

fn load_prefs(path: PathBuf) -> JsonPreferences {
    match JsonPreferences::open(&path) {
        Ok(prefs) => prefs,
        Err(error) => {
            // Surface before raw mode hides stderr.
            eprintln!("Warning: {error}; the high score will start from 0");
            log::warn!("{error}; starting with empty preferences");
            JsonPreferences::empty(path)
        }
    }
}

fn run(mut app: App<JsonPreferences>) -> io::Result<()> {
    let mut session = TerminalSession::enter()?;
    let mut input = InputHandler::new(Duration::from_millis(INPUT_POLL_MS));

    while app.is_running() {
        session
            .terminal_mut()
            .draw(|frame| renderer::render(frame, &app))?;

        if let Some(game_input) = input.poll_input()? {
            app.handle_input(game_input);
        }

        app.advance(Instant::now());
    }

    Ok(())
}

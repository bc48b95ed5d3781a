use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

const LOG_FILE_NAME: &str = "pocket-snake.log";

/// Returns the default log file location next to the preference file.
#[must_use]
pub fn default_log_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push("pocket-snake");
    base.push(LOG_FILE_NAME);
    base
}

/// Installs a file logger. The terminal is in raw mode while the game runs,
/// so nothing is logged to stdout or stderr.
pub fn init(path: &Path, verbose: bool) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;

    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let config = ConfigBuilder::new()
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();

    WriteLogger::init(level, config, file).map_err(io::Error::other)
}

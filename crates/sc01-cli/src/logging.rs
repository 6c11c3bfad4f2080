//! Logger setup.
//!
//! Log records go to stderr; stdout is reserved for rendered PCM.

use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Maps a `-v` count to a level filter.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Installs the global logger.
pub fn init(verbosity: u8) -> Result<(), log::SetLoggerError> {
    SimpleLogger::new()
        .with_level(level_for(verbosity))
        .without_timestamps()
        .init()
}

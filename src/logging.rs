/*
 * Logger setup for host shells embedding the settings core. Everything in this
 * crate logs through the `log` facade; this module wires the facade to
 * `simplelog`, writing to the terminal and, optionally, to a log file next to
 * the settings.
 */
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, LevelFilter, SharedLogger, TermLogger,
    TerminalMode, WriteLogger,
};
use std::fs::File;
use std::io;
use std::path::Path;

#[derive(Debug)]
pub enum LoggingError {
    Io(io::Error),
    AlreadyInitialized(log::SetLoggerError),
}

impl From<io::Error> for LoggingError {
    fn from(err: io::Error) -> Self {
        LoggingError::Io(err)
    }
}

impl From<log::SetLoggerError> for LoggingError {
    fn from(err: log::SetLoggerError) -> Self {
        LoggingError::AlreadyInitialized(err)
    }
}

impl std::fmt::Display for LoggingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoggingError::Io(e) => write!(f, "Could not open log file: {e}"),
            LoggingError::AlreadyInitialized(e) => write!(f, "Logger already initialized: {e}"),
        }
    }
}

impl std::error::Error for LoggingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoggingError::Io(e) => Some(e),
            LoggingError::AlreadyInitialized(e) => Some(e),
        }
    }
}

fn logger_config() -> Config {
    ConfigBuilder::new()
        .set_thread_level(LevelFilter::Debug)
        .set_target_level(LevelFilter::Error)
        .build()
}

/*
 * Builds the loggers without installing them: a terminal logger at `level`,
 * plus a file logger when `log_file` is given. The file is truncated.
 */
pub fn build_loggers(
    level: LevelFilter,
    log_file: Option<&Path>,
) -> Result<Vec<Box<dyn SharedLogger>>, LoggingError> {
    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
    loggers.push(TermLogger::new(
        level,
        logger_config(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    ));
    if let Some(path) = log_file {
        let file = File::create(path)?;
        loggers.push(WriteLogger::new(level, logger_config(), file));
    }
    Ok(loggers)
}

/// Installs the loggers from `build_loggers` as the global `log` backend.
pub fn init_logging(level: LevelFilter, log_file: Option<&Path>) -> Result<(), LoggingError> {
    CombinedLogger::init(build_loggers(level, log_file)?)?;
    log::info!("Logging initialized at level {level}.");
    Ok(())
}

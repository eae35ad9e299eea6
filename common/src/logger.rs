use chrono::Local;
use colored::Colorize;
use fern::Dispatch;
use log::LevelFilter;
use std::fs::{OpenOptions, create_dir_all};
use std::io;
use std::path::Path;

/// Maps a textual level (case-insensitive) to a filter, falling back to `Info`.
pub fn parse_level(log_level: &str) -> LevelFilter {
    match log_level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        "off" => LevelFilter::Off,
        _ => LevelFilter::Info,
    }
}

/// Installs the global logger, writing to `log_file_path` and optionally to stdout.
/// Every line is tagged with `project_name`.
///
/// Returns an error if the log file cannot be opened or a logger is already set.
pub fn init_logger(
    project_name: &str,
    log_level: &str,
    log_file_path: &str,
    to_stdout: bool,
) -> io::Result<()> {
    if let Some(parent) = Path::new(log_file_path).parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            create_dir_all(parent)?;
        }
    }

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)?;

    let project = project_name.to_string();
    let mut dispatch = Dispatch::new()
        .format(move |out, message, record| {
            let level_str = match record.level() {
                log::Level::Error => "ERROR".red(),
                log::Level::Warn => "WARN".yellow(),
                log::Level::Info => "INFO".green(),
                log::Level::Debug => "DEBUG".cyan(),
                log::Level::Trace => "TRACE".normal(),
            };

            out.finish(format_args!(
                "[{}][{}][{}][{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                project,
                level_str,
                record.target(),
                message
            ))
        })
        .level(parse_level(log_level))
        .chain(log_file);

    if to_stdout {
        dispatch = dispatch.chain(io::stdout());
    }

    dispatch
        .apply()
        .map_err(|e| io::Error::new(io::ErrorKind::AlreadyExists, e))
}

/// Initializes the logger from [`AppConfig`](crate::config::AppConfig).
pub fn init_from_config() -> io::Result<()> {
    let cfg = crate::config::AppConfig::global();
    init_logger(&cfg.project_name, &cfg.log_level, &cfg.log_file, cfg.log_to_stdout)
}

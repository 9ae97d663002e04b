use log::LevelFilter;
use std::str::FromStr;

use crate::client::ConfigError;

/// Initialize the global logger.
///
/// Records go to stderr so stdout stays free for results; `log_file` adds a
/// second sink.
pub fn init_logging(
    level: &str,
    log_file: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let level = parse_level(level)?;

    let mut dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{} [{}] [{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .level_for("hyper", LevelFilter::Warn)
        .level_for("reqwest", LevelFilter::Warn)
        .chain(std::io::stderr());

    if let Some(path) = log_file {
        dispatch = dispatch.chain(fern::log_file(path)?);
    }

    dispatch.apply()?;
    Ok(())
}

pub fn parse_level(level: &str) -> Result<LevelFilter, ConfigError> {
    LevelFilter::from_str(level).map_err(|_| ConfigError::InvalidLogLevel(level.to_string()))
}

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{ConfigError, LoggingConfig};

/// Parses `logging.level`; case and surrounding whitespace are ignored.
pub fn parse_level(level: &str) -> Result<LevelFilter, ConfigError> {
    match level.trim().to_lowercase().as_str() {
        "trace" => Ok(LevelFilter::TRACE),
        "debug" => Ok(LevelFilter::DEBUG),
        "info" => Ok(LevelFilter::INFO),
        "warn" => Ok(LevelFilter::WARN),
        "error" => Ok(LevelFilter::ERROR),
        _ => Err(ConfigError::InvalidLogLevel(level.to_string())),
    }
}

/// Installs the global subscriber. Logs go to stderr so command output stays clean.
///
/// `RUST_LOG` directives are honoured on top of the configured level.
/// Installing twice is not an error; the first subscriber stays.
pub fn init_logging(logging_config: &LoggingConfig) -> Result<(), ConfigError> {
    let level_filter = parse_level(&logging_config.level)?;
    let filter_layer = EnvFilter::builder()
        .with_default_directive(level_filter.into())
        .from_env_lossy();

    let result = match logging_config.format.to_lowercase().as_str() {
        "json" => tracing_subscriber::registry()
            .with(filter_layer)
            .with(
                fmt::layer()
                    .json()
                    .flatten_event(true)
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
        // Fallback to console if unknown
        _ => tracing_subscriber::registry()
            .with(filter_layer)
            .with(fmt::layer().pretty().with_writer(std::io::stderr))
            .try_init(),
    };
    if result.is_err() {
        tracing::debug!("A global subscriber is already installed; keeping it");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_are_case_insensitive() {
        assert_eq!(parse_level(" DEBUG ").unwrap(), LevelFilter::DEBUG);
        assert_eq!(parse_level("warn").unwrap(), LevelFilter::WARN);
    }

    #[test]
    fn unknown_level_is_rejected() {
        assert!(matches!(
            parse_level("verbose"),
            Err(ConfigError::InvalidLogLevel(level)) if level == "verbose"
        ));
    }

    #[test]
    fn init_twice_is_harmless() {
        let config = LoggingConfig {
            level: "warn".to_string(),
            format: "json".to_string(),
        };
        assert!(init_logging(&config).is_ok());
        assert!(init_logging(&config).is_ok());
    }
}

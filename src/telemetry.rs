use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingSettings;

/// Errors that can occur while installing the tracing subscriber
#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("invalid log filter '{value}'")]
    Filter {
        value: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("failed to install tracing subscriber: {0}")]
    Subscriber(Box<dyn std::error::Error + Send + Sync>),
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over the configured level when set. The format
/// setting picks between the default single-line output and the
/// pretty development layout.
pub fn init(settings: &LoggingSettings) -> Result<(), TelemetryError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&settings.level).map_err(|source| {
            TelemetryError::Filter {
                value: settings.level.clone(),
                source,
            }
        })?,
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if settings.format == "pretty" {
        builder.pretty().try_init().map_err(TelemetryError::Subscriber)
    } else {
        builder.try_init().map_err(TelemetryError::Subscriber)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_malformed_filter() {
        let settings = LoggingSettings {
            level: "not==a==filter".to_string(),
            format: "compact".to_string(),
        };

        // Keep the test hermetic regardless of the ambient RUST_LOG
        if std::env::var("RUST_LOG").is_ok() {
            return;
        }

        let result = init(&settings);
        assert!(matches!(result, Err(TelemetryError::Filter { .. })));
    }
}

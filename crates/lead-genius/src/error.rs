use crate::config::ConfigError;
use crate::leads::LeadServiceError;
use crate::telemetry::TelemetryError;
use std::fmt;

/// Process-level failures surfaced by the CLI commands and the server bootstrap.
#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Leads(LeadServiceError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Leads(err) => write!(f, "lead intake error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Leads(err) => Some(err),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<LeadServiceError> for AppError {
    fn from(value: LeadServiceError) -> Self {
        Self::Leads(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leads::RepositoryError;
    use std::error::Error;

    #[test]
    fn lead_failures_keep_their_source() {
        let err = AppError::from(LeadServiceError::Repository(RepositoryError::Unavailable(
            "lead store lock poisoned".to_string(),
        )));

        assert!(matches!(err, AppError::Leads(_)));
        assert!(err.to_string().starts_with("lead intake error:"));
        let source = err.source().expect("wrapped error");
        assert!(source.to_string().contains("lock poisoned"));
    }

    #[test]
    fn io_failures_convert() {
        let err = AppError::from(std::io::Error::new(
            std::io::ErrorKind::AddrInUse,
            "port taken",
        ));

        assert!(matches!(err, AppError::Io(_)));
        assert_eq!(err.to_string(), "io error: port taken");
    }
}

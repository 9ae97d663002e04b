use std::fmt;

/// Reasons a single key check did not succeed.
///
/// The validator folds every variant into `is_valid = false`; the variants
/// only exist so the cause can be logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeError {
    Network(String),
    Status(u16),
    Parse(String),
    MissingId,
}

impl fmt::Display for ProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeError::Network(msg) => write!(f, "Network error: {}", msg),
            ProbeError::Status(code) => write!(f, "Unexpected HTTP status: {}", code),
            ProbeError::Parse(msg) => write!(f, "Parse error: {}", msg),
            ProbeError::MissingId => write!(f, "Response has no data.id"),
        }
    }
}

impl std::error::Error for ProbeError {}

/// Invalid client or logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidBaseUrl(String),
    InvalidLogLevel(String),
    Client(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidBaseUrl(url) => write!(f, "Invalid base URL '{}'", url),
            ConfigError::InvalidLogLevel(level) => write!(f, "Invalid log level '{}'", level),
            ConfigError::Client(msg) => write!(f, "Failed to build HTTP client: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

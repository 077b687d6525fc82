use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetricsError {
    InvalidImage(String),
    DegenerateImage(String),
    DecodeError(String),
    ConfigError(String),
}

impl fmt::Display for MetricsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MetricsError::InvalidImage(msg) => write!(f, "Invalid image error: {}", msg),
            MetricsError::DegenerateImage(msg) => write!(f, "Degenerate image error: {}", msg),
            MetricsError::DecodeError(msg) => write!(f, "Decode error: {}", msg),
            MetricsError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for MetricsError {}

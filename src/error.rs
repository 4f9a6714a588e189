use thiserror::Error;

/// Errors raised outside the game engine: settings, files, logging setup.
/// Game operations themselves are total and never fail.
#[derive(Debug, Error)]
pub enum BlinkError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to initialise logging: {0}")]
    Logging(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T> = std::result::Result<T, BlinkError>;

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_io_error_converts() {
        let err: BlinkError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert_matches!(err, BlinkError::Io(_));
        assert_eq!(err.to_string(), "IO error: gone");
    }

    #[test]
    fn test_invalid_config_message() {
        let err = BlinkError::InvalidConfig("rounds must be between 1 and 50".into());
        assert_eq!(
            err.to_string(),
            "invalid configuration: rounds must be between 1 and 50"
        );
    }
}

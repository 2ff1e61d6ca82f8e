use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("logging setup failed: {0}")]
    Logging(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_io_error_converts() {
        fn read_missing() -> Result<Vec<u8>> {
            Ok(std::fs::read("/nonexistent/fastfingers/config.json")?)
        }

        let err = read_missing().unwrap_err();
        assert_matches!(err, Error::Io(_));
        assert!(err.to_string().starts_with("i/o error:"));
    }

    #[test]
    fn test_config_error_converts() {
        let parse: std::result::Result<u64, _> = serde_json::from_str("nope");
        let err: Error = parse.unwrap_err().into();

        assert_matches!(err, Error::Config(_));
        assert!(err.to_string().starts_with("invalid config:"));
    }
}

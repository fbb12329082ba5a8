use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Request to {url} failed with status {status}")]
    FetchFailed { url: String, status: u16 },

    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{message}")]
    InvalidArgument { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    ConfigError {
        field: String,
        value: String,
        reason: String,
    },
}

impl ScrapeError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidArgument { message } => message.clone(),
            Self::ConfigError { field, reason, .. } => {
                format!("Option '{}' is invalid: {}", field, reason)
            }
            Self::Http(e) => format!("Could not reach the listing site: {}", e),
            Self::FetchFailed { status, .. } => {
                format!("Failed to retrieve data (Status Code: {})", status)
            }
            Self::Csv(e) => format!("Could not write CSV output: {}", e),
            Self::Io(e) => format!("File system error: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::InvalidArgument { .. } => {
                "Usage: sreality-scraper <byty|domy> <region|all> <pages>"
            }
            Self::ConfigError { .. } => "Check the command line options with --help",
            Self::Http(_) | Self::FetchFailed { .. } => {
                "Check the network connection and try again later"
            }
            Self::Csv(_) | Self::Io(_) => {
                "Make sure the output directory exists and is writable"
            }
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument { .. } | Self::ConfigError { .. } => 1,
            Self::Csv(_) | Self::Io(_) => 1,
            Self::Http(_) | Self::FetchFailed { .. } => 2,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScrapeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_by_error_kind() {
        assert_eq!(ScrapeError::invalid_argument("bad").exit_code(), 1);
        let err = ScrapeError::FetchFailed {
            url: "https://www.sreality.cz".to_string(),
            status: 503,
        };
        assert_eq!(err.user_friendly_message(), "Failed to retrieve data (Status Code: 503)");
        assert_eq!(err.exit_code(), 2);
    }
}

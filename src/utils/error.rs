use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API returned status {status}: {message}")]
    ApiStatusError { status: u16, message: String },

    #[error("Malformed API response: {message}")]
    MalformedResponseError { message: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Missing required environment variables: {}", fields.join(", "))]
    MissingConfigError { fields: Vec<String> },

    #[error("Invalid value for {field} ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Network,
    Data,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl EtlError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::MissingConfigError { .. } | EtlError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            EtlError::ApiError(_)
            | EtlError::ApiStatusError { .. }
            | EtlError::MalformedResponseError { .. } => ErrorCategory::Network,
            EtlError::CsvError(_)
            | EtlError::SerializationError(_)
            | EtlError::ProcessingError { .. } => ErrorCategory::Data,
            EtlError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            EtlError::MissingConfigError { .. } => {
                "Set OPENROUTER_API_KEY, OPENROUTER_MODEL, CSV_INPUT_FILE, CSV_INPUT_COLUMN and PROMPT_TEMPLATE in the environment or in a .env file"
            }
            EtlError::InvalidConfigValueError { .. } => {
                "Fix the reported configuration value and run again"
            }
            EtlError::ApiError(_) => "Check network connectivity and the API base URL",
            EtlError::ApiStatusError { status, .. } if *status == 401 || *status == 403 => {
                "Check that OPENROUTER_API_KEY is valid"
            }
            EtlError::ApiStatusError { .. } => "Check the model name and the provider status",
            EtlError::MalformedResponseError { .. } => {
                "The provider answered with an unexpected payload; try another model"
            }
            EtlError::CsvError(_) => "Make sure the input file is valid UTF-8 CSV with a header row",
            EtlError::IoError(_) => "Check that the input file exists and the working directory is writable",
            EtlError::SerializationError(_) | EtlError::ProcessingError { .. } => {
                "Inspect the input data; run with --verbose for details"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Network => format!("Could not talk to the model API: {}", self),
            ErrorCategory::Data => format!("Could not process the CSV data: {}", self),
            ErrorCategory::System => format!("File system error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_lists_every_field() {
        let err = EtlError::MissingConfigError {
            fields: vec!["OPENROUTER_MODEL".to_string(), "PROMPT_TEMPLATE".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Missing required environment variables: OPENROUTER_MODEL, PROMPT_TEMPLATE"
        );
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::High);
    }

    #[test]
    fn test_severity_by_category() {
        let status = EtlError::ApiStatusError {
            status: 500,
            message: "Internal Server Error".to_string(),
        };
        assert_eq!(status.severity(), ErrorSeverity::Medium);

        let io = EtlError::IoError(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(io.severity(), ErrorSeverity::Critical);
        assert!(io.user_friendly_message().starts_with("File system error"));
    }

    #[test]
    fn test_auth_failures_point_at_api_key() {
        let err = EtlError::ApiStatusError {
            status: 401,
            message: "Unauthorized".to_string(),
        };
        assert!(err.recovery_suggestion().contains("OPENROUTER_API_KEY"));
    }
}

use crate::utils::error::{EtlError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(EtlError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("OPENROUTER_BASE_URL", "https://openrouter.ai/api/v1").is_ok());
        assert!(validate_url("OPENROUTER_BASE_URL", "http://127.0.0.1:8080").is_ok());
        assert!(validate_url("OPENROUTER_BASE_URL", "").is_err());
        assert!(validate_url("OPENROUTER_BASE_URL", "openrouter.ai").is_err());
        assert!(validate_url("OPENROUTER_BASE_URL", "ftp://openrouter.ai").is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("CSV_INPUT_FILE", "data/input.csv").is_ok());
        assert!(validate_path("CSV_INPUT_FILE", "").is_err());
        assert!(validate_path("CSV_INPUT_FILE", "bad\0name.csv").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("CSV_INPUT_COLUMN", "note").is_ok());
        assert!(validate_non_empty_string("CSV_INPUT_COLUMN", "  \t").is_err());
    }
}

#[cfg(feature = "cli")]
pub mod cli;

use crate::utils::error::{EtlError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_path, validate_url, Validate};
use std::fmt;

pub const API_KEY_VAR: &str = "OPENROUTER_API_KEY";
pub const MODEL_VAR: &str = "OPENROUTER_MODEL";
pub const INPUT_FILE_VAR: &str = "CSV_INPUT_FILE";
pub const INPUT_COLUMN_VAR: &str = "CSV_INPUT_COLUMN";
pub const PROMPT_TEMPLATE_VAR: &str = "PROMPT_TEMPLATE";
pub const BASE_URL_VAR: &str = "OPENROUTER_BASE_URL";

pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";

/// Settings resolved once at startup and passed down the pipeline.
#[derive(Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_key: String,
    pub model: String,
    pub input_file: String,
    pub input_column: String,
    pub prompt_template: String,
    pub api_base_url: String,
}

impl AppConfig {
    /// Reads the process environment. Call `dotenvy::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from any name → value source.
    ///
    /// All five required variables must be present and non-empty; the error lists
    /// every one that is missing, not just the first.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|value| !value.is_empty());

        let api_key = read(API_KEY_VAR);
        let model = read(MODEL_VAR);
        let input_file = read(INPUT_FILE_VAR);
        let input_column = read(INPUT_COLUMN_VAR);
        let prompt_template = read(PROMPT_TEMPLATE_VAR);

        match (api_key, model, input_file, input_column, prompt_template) {
            (
                Some(api_key),
                Some(model),
                Some(input_file),
                Some(input_column),
                Some(prompt_template),
            ) => Ok(Self {
                api_key,
                model,
                input_file,
                input_column,
                prompt_template,
                api_base_url: read(BASE_URL_VAR)
                    .map(|url| url.trim_end_matches('/').to_string())
                    .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            }),
            _ => {
                let fields = [
                    API_KEY_VAR,
                    MODEL_VAR,
                    INPUT_FILE_VAR,
                    INPUT_COLUMN_VAR,
                    PROMPT_TEMPLATE_VAR,
                ]
                .into_iter()
                .filter(|&name| read(name).is_none())
                .map(str::to_string)
                .collect();
                Err(EtlError::MissingConfigError { fields })
            }
        }
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string(API_KEY_VAR, &self.api_key)?;
        validate_non_empty_string(MODEL_VAR, &self.model)?;
        validate_path(INPUT_FILE_VAR, &self.input_file)?;
        validate_non_empty_string(INPUT_COLUMN_VAR, &self.input_column)?;
        validate_url(BASE_URL_VAR, &self.api_base_url)?;

        if !self.prompt_template.contains(crate::core::prompt::INPUT_PLACEHOLDER) {
            tracing::warn!(
                "⚠️ {} has no {} placeholder; every row gets the same prompt",
                PROMPT_TEMPLATE_VAR,
                crate::core::prompt::INPUT_PLACEHOLDER
            );
        }

        tracing::debug!("✅ Configuration validation passed");
        Ok(())
    }
}

// Keeps the API key out of verbose logs
impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &"***")
            .field("model", &self.model)
            .field("input_file", &self.input_file)
            .field("input_column", &self.input_column)
            .field("prompt_template", &self.prompt_template)
            .field("api_base_url", &self.api_base_url)
            .finish()
    }
}

pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliArgs;

pub use adapters::{openrouter::OpenRouterClient, storage::LocalStorage};
pub use config::AppConfig;
pub use crate::core::{etl::EtlEngine, pipeline::CsvAiPipeline};
pub use utils::error::{EtlError, Result};

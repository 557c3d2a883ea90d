use crate::adapters::csv_codec::{read_records, write_records};
use crate::config::AppConfig;
use crate::core::responder::ResponseGenerator;
use crate::core::{CompletionClient, Pipeline, Record, Storage, TransformResult};
use crate::domain::model::RunSummary;
use crate::utils::error::Result;
use chrono::{NaiveDate, Utc};

/// `output_<YYYY-MM-DD>.csv`
pub fn output_file_name(date: NaiveDate) -> String {
    format!("output_{}.csv", date.format("%Y-%m-%d"))
}

/// Reads the input CSV, asks the model about one column per row, writes the dated output.
pub struct CsvAiPipeline<S: Storage, C: CompletionClient> {
    storage: S,
    config: AppConfig,
    client: C,
}

impl<S: Storage, C: CompletionClient> CsvAiPipeline<S, C> {
    pub fn new(storage: S, config: AppConfig, client: C) -> Self {
        Self {
            storage,
            config,
            client,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    fn generator(&self) -> ResponseGenerator<'_, C> {
        ResponseGenerator::new(
            &self.client,
            &self.config.model,
            &self.config.input_column,
            &self.config.prompt_template,
        )
    }

    /// Prompts the run would send, in row order; `None` marks a row that would be skipped.
    pub fn preview_prompts(&self, records: &[Record]) -> Vec<Option<String>> {
        let generator = self.generator();
        records
            .iter()
            .map(|record| generator.prompt_for(record))
            .collect()
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: CompletionClient> Pipeline for CsvAiPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<Record>> {
        tracing::info!("📁 Reading records from: {}", self.config.input_file);
        let data = self.storage.read_file(&self.config.input_file).await?;
        let records = read_records(&data)?;
        tracing::info!("📊 Extracted {} records", records.len());
        Ok(records)
    }

    async fn transform(&self, data: Vec<Record>) -> Result<TransformResult> {
        tracing::info!("Processing {} records...", data.len());

        let generator = self.generator();
        let mut summary = RunSummary::default();
        let mut processed_records = data;

        // One request at a time; each call finishes before the next row starts
        for record in processed_records.iter_mut() {
            let outcome = generator.respond(record).await;
            summary.record(outcome);
        }

        tracing::info!(
            "✅ Transform complete: {} succeeded, {} skipped, {} failed",
            summary.succeeded,
            summary.skipped,
            summary.failed
        );
        Ok(TransformResult {
            processed_records,
            summary,
        })
    }

    async fn load(&self, result: TransformResult) -> Result<String> {
        let file_name = output_file_name(Utc::now().date_naive());
        let csv_data = write_records(&result.processed_records)?;

        tracing::debug!(
            "Writing {} rows ({} bytes) to {}",
            result.processed_records.len(),
            csv_data.len(),
            file_name
        );
        self.storage.write_file(&file_name, &csv_data).await?;

        tracing::info!("Processing complete. Output saved to {}", file_name);
        Ok(file_name)
    }
}

use crate::core::prompt::{preview, render_prompt};
use crate::domain::model::{Record, RecordOutcome, FAILURE_SENTINEL, NO_INPUT_SENTINEL};
use crate::domain::ports::CompletionClient;

/// Fills `ai_response` for one record at a time.
pub struct ResponseGenerator<'a, C: CompletionClient + ?Sized> {
    client: &'a C,
    model: &'a str,
    input_column: &'a str,
    prompt_template: &'a str,
}

impl<'a, C: CompletionClient + ?Sized> ResponseGenerator<'a, C> {
    pub fn new(
        client: &'a C,
        model: &'a str,
        input_column: &'a str,
        prompt_template: &'a str,
    ) -> Self {
        Self {
            client,
            model,
            input_column,
            prompt_template,
        }
    }

    /// The prompt a record would be sent with, or `None` when its input is blank.
    pub fn prompt_for(&self, record: &Record) -> Option<String> {
        let input = record.get(self.input_column)?.trim();
        if input.is_empty() {
            return None;
        }
        Some(render_prompt(self.prompt_template, input))
    }

    /// Sets `ai_response` on `record`. Failures end up in the sentinel, never in an `Err`.
    pub async fn respond(&self, record: &mut Record) -> RecordOutcome {
        let Some(prompt) = self.prompt_for(record) else {
            tracing::info!("Skipping empty record...");
            record.set_ai_response(NO_INPUT_SENTINEL);
            return RecordOutcome::Skipped;
        };

        let input = record.get(self.input_column).unwrap_or_default().trim();
        tracing::info!("Processing record: {}...", preview(input, 50));

        match self.client.complete(self.model, &prompt).await {
            Ok(reply) => {
                record.set_ai_response(reply);
                RecordOutcome::Succeeded
            }
            Err(e) => {
                tracing::error!("❌ Error calling OpenRouter API: {}", e);
                record.set_ai_response(FAILURE_SENTINEL);
                RecordOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::{EtlError, Result};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct EchoClient {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl CompletionClient for EchoClient {
        async fn complete(&self, _model: &str, prompt: &str) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(prompt.to_string())
        }
    }

    struct FailingClient;

    #[async_trait]
    impl CompletionClient for FailingClient {
        async fn complete(&self, _model: &str, _prompt: &str) -> Result<String> {
            Err(EtlError::ApiStatusError {
                status: 500,
                message: "Internal Server Error".to_string(),
            })
        }
    }

    fn record(note: &str) -> Record {
        let mut record: Record = [("name", "Alice"), ("note", note)].into_iter().collect();
        record.reset_ai_response();
        record
    }

    #[tokio::test]
    async fn test_blank_input_skips_network() {
        let client = EchoClient {
            calls: AtomicUsize::new(0),
        };
        let generator = ResponseGenerator::new(&client, "m", "note", "Echo: {input}");

        for note in ["", "   ", "\t\n"] {
            let mut row = record(note);
            assert_eq!(generator.respond(&mut row).await, RecordOutcome::Skipped);
            assert_eq!(row.ai_response(), Some(NO_INPUT_SENTINEL));
        }
        assert_eq!(client.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_missing_column_is_skipped() {
        let client = EchoClient {
            calls: AtomicUsize::new(0),
        };
        let generator = ResponseGenerator::new(&client, "m", "absent", "Echo: {input}");

        let mut row = record("hello");
        assert_eq!(generator.respond(&mut row).await, RecordOutcome::Skipped);
        assert_eq!(client.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_success_uses_trimmed_input() {
        let client = EchoClient {
            calls: AtomicUsize::new(0),
        };
        let generator = ResponseGenerator::new(&client, "m", "note", "Echo: {input}");

        let mut row = record("  hello  ");
        assert_eq!(generator.respond(&mut row).await, RecordOutcome::Succeeded);
        assert_eq!(row.ai_response(), Some("Echo: hello"));
        assert_eq!(row.get("note"), Some("  hello  "));
        assert_eq!(client.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failure_writes_sentinel() {
        let generator = ResponseGenerator::new(&FailingClient, "m", "note", "{input}");

        let mut row = record("hello");
        assert_eq!(generator.respond(&mut row).await, RecordOutcome::Failed);
        assert_eq!(row.ai_response(), Some(FAILURE_SENTINEL));
    }
}

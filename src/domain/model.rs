/// Column that receives the model's reply on every output row.
pub const AI_RESPONSE_COLUMN: &str = "ai_response";

/// Written when the input column is blank; no request is made for the row.
pub const NO_INPUT_SENTINEL: &str = "No input provided";

/// Written when the request or the response parsing failed.
pub const FAILURE_SENTINEL: &str = "Error: Failed to get AI response";

/// One CSV row. Column order is the order fields were first inserted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

    /// Overwrites in place when the column exists, appends otherwise.
    pub fn set(&mut self, column: impl Into<String>, value: impl Into<String>) {
        let column = column.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(name, _)| *name == column) {
            Some((_, existing)) => *existing = value,
            None => self.fields.push((column, value)),
        }
    }

    pub fn remove(&mut self, column: &str) -> Option<String> {
        let index = self.fields.iter().position(|(name, _)| name == column)?;
        Some(self.fields.remove(index).1)
    }

    /// Drops any existing `ai_response` and re-adds it empty as the last column.
    pub fn reset_ai_response(&mut self) {
        self.remove(AI_RESPONSE_COLUMN);
        self.fields.push((AI_RESPONSE_COLUMN.to_string(), String::new()));
    }

    pub fn set_ai_response(&mut self, value: impl Into<String>) {
        self.set(AI_RESPONSE_COLUMN, value);
    }

    pub fn ai_response(&self) -> Option<&str> {
        self.get(AI_RESPONSE_COLUMN)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (column, value) in iter {
            record.set(column, value);
        }
        record
    }
}

/// Terminal state of a single row after the response step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
    Skipped,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub succeeded: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn record(&mut self, outcome: RecordOutcome) {
        match outcome {
            RecordOutcome::Skipped => self.skipped += 1,
            RecordOutcome::Succeeded => self.succeeded += 1,
            RecordOutcome::Failed => self.failed += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.succeeded + self.skipped + self.failed
    }
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub processed_records: Vec<Record>,
    pub summary: RunSummary,
}

#[derive(Debug, Clone)]
pub struct RunReport {
    pub output_path: String,
    pub summary: RunSummary,
}

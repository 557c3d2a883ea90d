use crate::domain::model::Record;
use crate::utils::error::{EtlError, Result};

/// Parses CSV with a header row into records, each ending in an empty `ai_response`.
///
/// Rows shorter than the header get empty values for the missing columns; fields
/// past the header width are dropped. Blank lines are skipped by the reader.
pub fn read_records(data: &[u8]) -> Result<Vec<Record>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(data);

    let headers = reader.headers()?.clone();
    let mut records = Vec::new();

    for (index, row) in reader.records().enumerate() {
        let row = row?;
        if row.len() > headers.len() {
            tracing::debug!(
                "Row {} has {} fields for {} columns; extra fields dropped",
                index + 1,
                row.len(),
                headers.len()
            );
        }

        let mut record: Record = headers
            .iter()
            .enumerate()
            .map(|(i, column)| (column, row.get(i).unwrap_or("")))
            .collect();
        record.reset_ai_response();
        records.push(record);
    }

    Ok(records)
}

/// Serializes records using the first record's columns as the header.
///
/// An empty slice yields an empty document.
pub fn write_records(records: &[Record]) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    if let Some(first) = records.first() {
        let header: Vec<&str> = first.columns().collect();
        writer.write_record(&header)?;

        for record in records {
            writer.write_record(header.iter().map(|column| record.get(column).unwrap_or("")))?;
        }
    }

    writer
        .into_inner()
        .map_err(|e| EtlError::IoError(e.into_error()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_adds_ai_response_last() {
        let records = read_records(b"name,note\nAlice,hello\nBob,\n").unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(
            records[0].columns().collect::<Vec<_>>(),
            vec!["name", "note", "ai_response"]
        );
        assert_eq!(records[0].get("note"), Some("hello"));
        assert_eq!(records[1].get("note"), Some(""));
        assert_eq!(records[1].ai_response(), Some(""));
    }

    #[test]
    fn test_existing_ai_response_column_is_replaced() {
        let records = read_records(b"ai_response,name\nstale,Alice\n").unwrap();

        assert_eq!(
            records[0].columns().collect::<Vec<_>>(),
            vec!["name", "ai_response"]
        );
        assert_eq!(records[0].ai_response(), Some(""));
    }

    #[test]
    fn test_inconsistent_column_counts_are_tolerated() {
        let records = read_records(b"a,b,c\n1\n1,2,3,4\n").unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("b"), Some(""));
        assert_eq!(records[0].get("c"), Some(""));
        assert_eq!(records[1].get("c"), Some("3"));
        assert_eq!(records[1].len(), 4);
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let records = read_records(b"a,b\n\n1,2\n\n3,4\n").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].get("a"), Some("3"));
    }

    #[test]
    fn test_header_only_input_has_no_records() {
        assert!(read_records(b"a,b\n").unwrap().is_empty());
        assert!(read_records(b"").unwrap().is_empty());
    }

    #[test]
    fn test_write_quotes_when_needed() {
        let mut record: Record = [("name", "Alice"), ("note", "hi, there")]
            .into_iter()
            .collect();
        record.set_ai_response("line one\nline \"two\"");

        let output = String::from_utf8(write_records(&[record]).unwrap()).unwrap();
        assert_eq!(
            output,
            "name,note,ai_response\nAlice,\"hi, there\",\"line one\nline \"\"two\"\"\"\n"
        );
    }

    #[test]
    fn test_write_empty_batch_is_empty() {
        assert!(write_records(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_read_write_preserves_rows_and_order() {
        let input = b"id,text\n1,first\n2,second\n3,third\n";
        let mut records = read_records(input).unwrap();
        for record in &mut records {
            record.set_ai_response("ok");
        }

        let output = String::from_utf8(write_records(&records).unwrap()).unwrap();
        assert_eq!(
            output,
            "id,text,ai_response\n1,first,ok\n2,second,ok\n3,third,ok\n"
        );
    }
}

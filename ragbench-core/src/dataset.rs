// Copyright 2025 AgentReplay (https://github.com/agentreplay)
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! CSV dataset loader and result writer
//!
//! The input dataset is a UTF-8 CSV (an optional byte-order mark on the
//! first header is tolerated) with `Question` and `answer` columns, matched
//! case-sensitively. Rows whose trimmed question is empty are dropped; a
//! missing column reads as the empty string rather than an error.

use crate::record::{EvaluationRow, QaRecord};
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Errors raised by dataset I/O. Both abort the run.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Load the QA dataset, preserving file order
pub fn load_qa_file(path: impl AsRef<Path>) -> Result<Vec<QaRecord>, DatasetError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path.as_ref())?;

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .enumerate()
        // utf-8-sig: the BOM, when present, rides on the first header name
        .map(|(i, name)| {
            if i == 0 {
                name.trim_start_matches('\u{feff}').to_string()
            } else {
                name.to_string()
            }
        })
        .collect();
    info!("Columns: {:?}", headers);

    let question_col = headers.iter().position(|h| h == "Question");
    let answer_col = headers.iter().position(|h| h == "answer");

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let question = question_col
            .and_then(|i| row.get(i))
            .unwrap_or("")
            .trim();
        let answer = answer_col.and_then(|i| row.get(i)).unwrap_or("").trim();
        if !question.is_empty() {
            records.push(QaRecord::new(question, answer));
        }
    }
    Ok(records)
}

/// Write the evaluation artifact, overwriting any existing file
///
/// Header is `Question, Original Answer, Generated Answer`, one row per
/// record in input order.
pub fn write_results(rows: &[EvaluationRow], path: impl AsRef<Path>) -> Result<(), DatasetError> {
    let mut writer = csv::Writer::from_path(path.as_ref())?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(contents: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents).unwrap();
        file
    }

    #[test]
    fn test_load_basic() {
        let file = write_temp(b"Question,answer\nWhat is RAG?,Retrieval-augmented generation\n");
        let records = load_qa_file(file.path()).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].question, "What is RAG?");
        assert_eq!(records[0].reference_answer, "Retrieval-augmented generation");
    }

    #[test]
    fn test_load_strips_bom() {
        let file = write_temp("\u{feff}Question,answer\nQ1,A1\n".as_bytes());
        let records = load_qa_file(file.path()).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].question, "Q1");
    }

    #[test]
    fn test_load_drops_blank_questions() {
        let file = write_temp(b"Question,answer\n  ,skipped\nQ2,A2\n,also skipped\n");
        let records = load_qa_file(file.path()).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].question, "Q2");
    }

    #[test]
    fn test_load_missing_answer_column() {
        let file = write_temp(b"Question,other\nQ1,ignored\n");
        let records = load_qa_file(file.path()).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].reference_answer, "");
    }

    #[test]
    fn test_load_short_row_reads_empty() {
        let file = write_temp(b"Question,answer\nQ1\n");
        let records = load_qa_file(file.path()).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].question, "Q1");
        assert_eq!(records[0].reference_answer, "");
    }

    #[test]
    fn test_load_trims_values() {
        let file = write_temp(b"Question,answer\n  Q1  ,  A1  \n");
        let records = load_qa_file(file.path()).unwrap();

        assert_eq!(records[0].question, "Q1");
        assert_eq!(records[0].reference_answer, "A1");
    }

    #[test]
    fn test_load_missing_file() {
        assert!(load_qa_file("/nonexistent/questions.csv").is_err());
    }

    #[test]
    fn test_write_then_read_round_trip() {
        let rows = vec![
            EvaluationRow {
                question: "Q1".to_string(),
                reference_answer: "ref, with comma".to_string(),
                generated_answer: "gen \"quoted\"".to_string(),
            },
            EvaluationRow {
                question: "Q2".to_string(),
                reference_answer: String::new(),
                generated_answer: "多行\n回答".to_string(),
            },
        ];

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("generated.csv");
        write_results(&rows, &path).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let read_back: Vec<EvaluationRow> = reader
            .deserialize()
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(read_back, rows);
    }

    #[test]
    fn test_write_header() {
        let rows = vec![EvaluationRow {
            question: "Q".to_string(),
            reference_answer: "A".to_string(),
            generated_answer: "G".to_string(),
        }];

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("generated.csv");
        write_results(&rows, &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("Question,Original Answer,Generated Answer\n"));
    }

    #[test]
    fn test_write_unwritable_destination() {
        let rows = vec![];
        assert!(write_results(&rows, "/nonexistent/dir/out.csv").is_err());
    }
}

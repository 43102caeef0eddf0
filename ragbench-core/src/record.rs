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

use serde::{Deserialize, Serialize};

/// One question/reference-answer pair from the input dataset
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QaRecord {
    /// The question submitted to the answering service. Non-empty by
    /// construction: rows with a blank question are dropped at load time.
    pub question: String,

    /// The reference (expected) answer. May be empty.
    pub reference_answer: String,
}

impl QaRecord {
    pub fn new(question: impl Into<String>, reference_answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            reference_answer: reference_answer.into(),
        }
    }
}

/// One row of the persisted evaluation artifact
///
/// Field order and rename attributes define the output CSV header:
/// `Question, Original Answer, Generated Answer`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EvaluationRow {
    #[serde(rename = "Question")]
    pub question: String,

    #[serde(rename = "Original Answer")]
    pub reference_answer: String,

    #[serde(rename = "Generated Answer")]
    pub generated_answer: String,
}

impl EvaluationRow {
    pub fn new(record: &QaRecord, generated_answer: impl Into<String>) -> Self {
        Self {
            question: record.question.clone(),
            reference_answer: record.reference_answer.clone(),
            generated_answer: generated_answer.into(),
        }
    }
}

/// Per-row metric scores, index-aligned with the evaluated records
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetricScores {
    pub accuracy: Vec<f64>,
    pub relevance: Vec<f64>,
    pub readability: Vec<f64>,
}

impl MetricScores {
    /// All three score vectors cover the same number of rows
    pub fn is_aligned(&self, rows: usize) -> bool {
        self.accuracy.len() == rows
            && self.relevance.len() == rows
            && self.readability.len() == rows
    }
}

/// Aggregated view over a finished run: per-metric mean and row count
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub rows: usize,
    pub mean_accuracy: f64,
    pub mean_relevance: f64,
    pub mean_readability: f64,
}

impl RunSummary {
    pub fn from_scores(scores: &MetricScores) -> Self {
        Self {
            rows: scores.accuracy.len(),
            mean_accuracy: mean(&scores.accuracy),
            mean_relevance: mean(&scores.relevance),
            mean_readability: mean(&scores.readability),
        }
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

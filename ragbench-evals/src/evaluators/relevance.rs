// Copyright 2025 Sushanth (https://github.com/sushanthpy)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Embedding-based relevance
//!
//! For each question, fetches the question/answer embedding pair from an
//! [`EmbeddingSource`] and scores their cosine similarity. A failed call,
//! a missing vector, or a dimension mismatch scores 0.0 and the run
//! continues.

use crate::llm_client::EmbeddingSource;
use std::sync::Arc;
use tracing::error;

/// Scores question relevance through a pluggable embedding source
pub struct RelevanceScorer {
    source: Arc<dyn EmbeddingSource>,
}

impl RelevanceScorer {
    pub fn new(source: Arc<dyn EmbeddingSource>) -> Self {
        Self { source }
    }

    /// Relevance of one question's generated answer, in `[0, 1]`-ish
    /// cosine space; 0.0 on any degraded input
    pub async fn score(&self, question: &str) -> f64 {
        match self.source.embeddings_for(question).await {
            Ok(embeddings) => {
                cosine_similarity(&embeddings.question_embedding, &embeddings.answer_embedding)
            }
            Err(err) => {
                error!("Relevance call failed, scoring 0.0: {err}");
                0.0
            }
        }
    }

    /// Score every question sequentially, index-aligned with the input
    pub async fn score_all(&self, questions: &[String]) -> Vec<f64> {
        let mut scores = Vec::with_capacity(questions.len());
        for question in questions {
            scores.push(self.score(question).await);
        }
        scores
    }
}

/// Cosine similarity `(a · b) / (‖a‖ ‖b‖)`; 0.0 for empty, mismatched,
/// or zero-norm vectors
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    if a.is_empty() || a.len() != b.len() {
        return 0.0;
    }

    let dot: f64 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if norm_a < 1e-9 || norm_b < 1e-9 {
        return 0.0;
    }

    (dot / (norm_a * norm_b)).clamp(-1.0, 1.0)
}

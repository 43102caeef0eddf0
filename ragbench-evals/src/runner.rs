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

//! Sequential batch driver for the answering service
//!
//! Questions are processed in contiguous chunks, strictly in order, one
//! call at a time. A failed call yields an empty generated answer for that
//! question; it never aborts the batch.

use crate::llm_client::AnswerClient;
use tracing::{error, info};

/// Number of chunks a run of `total` questions produces
pub fn batch_count(total: usize, batch_size: usize) -> usize {
    total.div_ceil(batch_size.max(1))
}

/// Ask every question, returning answers index-aligned with `questions`
pub async fn run_batches(
    client: &dyn AnswerClient,
    questions: &[String],
    batch_size: usize,
) -> Vec<String> {
    // chunks() panics on zero; config validation already rejects it
    let batch_size = batch_size.max(1);
    let total = batch_count(questions.len(), batch_size);

    let mut generated = Vec::with_capacity(questions.len());
    for (index, batch) in questions.chunks(batch_size).enumerate() {
        info!("Processing batch {}/{}", index + 1, total);
        for question in batch {
            let answer = match client.ask(question).await {
                Ok(answer) => answer,
                Err(err) => {
                    error!("Answer call failed, recording empty answer: {err}");
                    String::new()
                }
            };
            generated.push(answer);
        }
    }
    generated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::ClientError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Echoes questions back, recording call order; fails on demand
    struct StubClient {
        calls: Mutex<Vec<String>>,
        fail_on: Option<String>,
    }

    impl StubClient {
        fn new() -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                fail_on: None,
            }
        }

        fn failing_on(question: &str) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                fail_on: Some(question.to_string()),
            }
        }
    }

    #[async_trait]
    impl AnswerClient for StubClient {
        async fn ask(&self, question: &str) -> Result<String, ClientError> {
            self.calls.lock().unwrap().push(question.to_string());
            if self.fail_on.as_deref() == Some(question) {
                return Err(ClientError::Status {
                    status: 500,
                    body: "boom".to_string(),
                });
            }
            Ok(format!("answer to {question}"))
        }
    }

    fn questions(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("q{i}")).collect()
    }

    #[test]
    fn test_batch_count() {
        assert_eq!(batch_count(25, 10), 3);
        assert_eq!(batch_count(20, 10), 2);
        assert_eq!(batch_count(1, 10), 1);
        assert_eq!(batch_count(0, 10), 0);
    }

    #[tokio::test]
    async fn test_output_aligned_and_in_order() {
        let client = StubClient::new();
        let qs = questions(25);

        let answers = run_batches(&client, &qs, 10).await;

        assert_eq!(answers.len(), qs.len());
        assert_eq!(answers[0], "answer to q0");
        assert_eq!(answers[24], "answer to q24");
        // every question asked exactly once, in input order
        assert_eq!(*client.calls.lock().unwrap(), qs);
    }

    #[tokio::test]
    async fn test_failed_call_yields_empty_answer() {
        let client = StubClient::failing_on("q1");
        let qs = questions(3);

        let answers = run_batches(&client, &qs, 2).await;

        assert_eq!(answers, vec!["answer to q0", "", "answer to q2"]);
    }

    #[tokio::test]
    async fn test_empty_input() {
        let client = StubClient::new();
        let answers = run_batches(&client, &[], 10).await;
        assert!(answers.is_empty());
    }

    #[tokio::test]
    async fn test_short_final_chunk() {
        let client = StubClient::new();
        let qs = questions(5);

        let answers = run_batches(&client, &qs, 2).await;

        assert_eq!(answers.len(), 5);
        assert_eq!(*client.calls.lock().unwrap(), qs);
    }
}

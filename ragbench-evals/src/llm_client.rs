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

//! Client for the remote conversational answering service

use async_trait::async_trait;
use ragbench_core::RunConfig;
use serde_json::Value;
use thiserror::Error;
use tracing::{error, info};

/// Errors from the answering service. The caller decides whether a failed
/// call degrades (empty answer, zero score) or aborts; this client never
/// decides that itself.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("API returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Trait for sources of generated answers
#[async_trait]
pub trait AnswerClient: Send + Sync {
    /// Submit one question and return the service's textual answer
    async fn ask(&self, question: &str) -> Result<String, ClientError>;
}

/// Embedding vectors carried on a chat response, per the service contract
/// assumed by the relevance metric. Either vector may be empty when the
/// service does not populate the field.
#[derive(Debug, Clone, Default)]
pub struct QaEmbeddings {
    pub question_embedding: Vec<f64>,
    pub answer_embedding: Vec<f64>,
}

/// Trait for sources of question/answer embedding pairs
///
/// Kept separate from [`AnswerClient`] so a dedicated embedding endpoint
/// can replace the chat endpoint without touching the relevance scorer.
#[async_trait]
pub trait EmbeddingSource: Send + Sync {
    async fn embeddings_for(&self, question: &str) -> Result<QaEmbeddings, ClientError>;
}

/// Client for a blocking-mode conversational endpoint with bearer auth
pub struct ChatClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
    user_id: String,
    conversation_id: String,
}

impl ChatClient {
    pub fn new(config: &RunConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: config.api_endpoint.clone(),
            api_key: config.api_key.clone(),
            user_id: config.user_id.clone(),
            conversation_id: config.conversation_id.clone(),
        }
    }

    fn request_body(&self, question: &str) -> Value {
        serde_json::json!({
            "inputs": {},
            "query": question,
            "user": self.user_id,
            "response_mode": "blocking",
            "conversation_id": self.conversation_id,
        })
    }

    /// One best-effort POST. No retry, no timeout override.
    async fn post(&self, question: &str) -> Result<Value, ClientError> {
        let response = self
            .http
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&self.request_body(question))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            error!("Error: {} - {}", status, body);
            return Err(ClientError::Status { status, body });
        }

        Ok(response.json::<Value>().await?)
    }

    /// One probe request before the batch run, logged for the operator.
    /// A failure degrades to an empty answer; it never aborts the run.
    pub async fn smoke_call(&self, question: &str) -> String {
        let answer = self.ask(question).await.unwrap_or_default();
        info!("Test Question: {}, Test Generated Answer: {}", question, answer);
        answer
    }
}

#[async_trait]
impl AnswerClient for ChatClient {
    async fn ask(&self, question: &str) -> Result<String, ClientError> {
        let data = self.post(question).await?;
        let answer = data
            .get("answer")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        info!("Question: {}, Generated Answer: {}", question, answer);
        Ok(answer)
    }
}

#[async_trait]
impl EmbeddingSource for ChatClient {
    async fn embeddings_for(&self, question: &str) -> Result<QaEmbeddings, ClientError> {
        let data = self.post(question).await?;
        Ok(QaEmbeddings {
            question_embedding: numeric_array(&data, "question_embedding"),
            answer_embedding: numeric_array(&data, "answer_embedding"),
        })
    }
}

fn numeric_array(data: &Value, key: &str) -> Vec<f64> {
    data.get(key)
        .and_then(Value::as_array)
        .map(|values| values.iter().filter_map(Value::as_f64).collect())
        .unwrap_or_default()
}

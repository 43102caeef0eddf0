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

//! # Ragbench Evaluation Suite
//!
//! The remote answering client, the sequential batch runner, and the three
//! scorers (lexical overlap accuracy, embedding relevance, readability
//! grade) used by the Ragbench harness.
//!
//! Remote-call failures never abort a run: the runner maps a failed answer
//! call to an empty generated answer and the relevance scorer maps a failed
//! embedding call to a zero score, so a flaky service degrades scores
//! instead of losing the batch.

pub mod evaluators;
pub mod llm_client;
pub mod runner;

pub use evaluators::overlap::overlap_accuracy;
pub use evaluators::readability::readability_grade;
pub use evaluators::relevance::RelevanceScorer;
pub use llm_client::{AnswerClient, ChatClient, ClientError, EmbeddingSource, QaEmbeddings};
pub use runner::run_batches;

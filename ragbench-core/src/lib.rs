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

//! # Ragbench Core
//!
//! Shared data model and I/O for the Ragbench evaluation harness:
//! QA records, run configuration, and the CSV dataset loader/writer.

pub mod config;
pub mod dataset;
pub mod record;

pub use config::{ConfigError, RunConfig};
pub use dataset::{load_qa_file, write_results, DatasetError};
pub use record::{EvaluationRow, MetricScores, QaRecord, RunSummary};

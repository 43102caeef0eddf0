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

//! Ragbench CLI
//!
//! Runs one batch evaluation: load the QA dataset, generate answers
//! through the configured service, persist the results, and score them.

use anyhow::{Context, Result};
use clap::Parser;
use ragbench_core::{
    load_qa_file, write_results, EvaluationRow, MetricScores, RunConfig, RunSummary,
};
use ragbench_evals::evaluators::{overlap, readability};
use ragbench_evals::{ChatClient, RelevanceScorer};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info, Level};

/// Connectivity probe sent once before the batch run
const SMOKE_QUESTION: &str = "Hello, can you briefly introduce yourself?";

#[derive(Parser)]
#[command(name = "ragbench", version)]
#[command(about = "Batch evaluation harness for a conversational QA service", long_about = None)]
struct Cli {
    /// Run configuration file
    #[arg(short, long, default_value = "ragbench.toml")]
    config: PathBuf,

    /// Verbose mode
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    let config = RunConfig::from_file(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    let client = Arc::new(ChatClient::new(&config));
    client.smoke_call(SMOKE_QUESTION).await;

    let records = load_qa_file(&config.qa_file)
        .with_context(|| format!("reading QA dataset {}", config.qa_file.display()))?;
    info!("Loaded {} QA records", records.len());

    let questions: Vec<String> = records.iter().map(|r| r.question.clone()).collect();
    let references: Vec<String> = records.iter().map(|r| r.reference_answer.clone()).collect();

    let generated =
        ragbench_evals::run_batches(client.as_ref(), &questions, config.batch_size).await;

    let rows: Vec<EvaluationRow> = records
        .iter()
        .zip(&generated)
        .map(|(record, answer)| EvaluationRow::new(record, answer.clone()))
        .collect();
    write_results(&rows, &config.output_file)
        .with_context(|| format!("writing results to {}", config.output_file.display()))?;
    info!("Wrote {} rows to {}", rows.len(), config.output_file.display());

    let relevance_scorer = RelevanceScorer::new(client.clone());
    let scores = MetricScores {
        accuracy: overlap::score_all(&references, &generated),
        relevance: relevance_scorer.score_all(&questions).await,
        readability: readability::score_all(&generated),
    };

    debug!("Accuracy: {:?}", scores.accuracy);
    debug!("Relevance: {:?}", scores.relevance);
    debug!("Readability: {:?}", scores.readability);

    let summary = RunSummary::from_scores(&scores);
    info!(
        "Evaluated {} rows: mean accuracy {:.3}, mean relevance {:.3}, mean readability grade {:.2}",
        summary.rows, summary.mean_accuracy, summary.mean_relevance, summary.mean_readability
    );

    Ok(())
}

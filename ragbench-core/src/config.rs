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

//! Run configuration
//!
//! All parameters of a run (endpoint, credential, file paths, identifiers,
//! batch size) live in one TOML file, loaded once at process start and
//! passed into each component. There is no other configuration surface.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

fn default_batch_size() -> usize {
    10
}

/// Configuration for one evaluation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// POST target of the conversational answering service
    pub api_endpoint: String,

    /// Bearer credential sent with every request
    pub api_key: String,

    /// User identifier included in each request body
    pub user_id: String,

    /// Conversation identifier; empty starts a fresh conversation per call
    #[serde(default)]
    pub conversation_id: String,

    /// Input CSV with `Question` and `answer` columns
    pub qa_file: PathBuf,

    /// Destination CSV for the generated-answer record
    pub output_file: PathBuf,

    /// Questions per batch in the sequential runner
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
}

impl RunConfig {
    /// Load and validate a configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: RunConfig = toml::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that cannot produce a meaningful run
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_endpoint.trim().is_empty() {
            return Err(ConfigError::Invalid("api_endpoint must not be empty".into()));
        }
        if self.api_key.trim().is_empty() {
            return Err(ConfigError::Invalid("api_key must not be empty".into()));
        }
        if self.batch_size == 0 {
            return Err(ConfigError::Invalid("batch_size must be at least 1".into()));
        }
        Ok(())
    }
}

/// Errors raised while loading the run configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

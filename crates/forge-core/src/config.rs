// ABOUTME: Analytics configuration with environment overrides
// ABOUTME: Holds the ranking cutoffs passed as explicit parameters to each metric
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Forge Fitness Analytics

//! Analytics tunables.
//!
//! The ranking cutoffs ("top 3 exercises", "top 5 per leaderboard") are
//! carried here and handed to the metric computations as explicit parameters
//! so tests and callers can vary them per invocation.

use crate::errors::{EngineError, EngineResult};
use serde::{Deserialize, Serialize};
use std::env;
use tracing::debug;

/// Environment variable overriding the top-exercise cutoff
pub const ENV_TOP_EXERCISES: &str = "FORGE_TOP_EXERCISES";
/// Environment variable overriding the leaderboard cutoff
pub const ENV_LEADERBOARD_CUTOFF: &str = "FORGE_LEADERBOARD_CUTOFF";

const DEFAULT_TOP_EXERCISES: usize = 3;
const DEFAULT_LEADERBOARD_CUTOFF: usize = 5;

/// Tunable parameters of the analytics engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Dense-rank cutoff for the top-exercises-by-volume view
    pub top_exercise_count: usize,
    /// Competition-rank cutoff per program on the leaderboard
    pub leaderboard_cutoff: usize,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            top_exercise_count: DEFAULT_TOP_EXERCISES,
            leaderboard_cutoff: DEFAULT_LEADERBOARD_CUTOFF,
        }
    }
}

impl AnalyticsConfig {
    /// Load configuration from the environment, falling back to defaults
    /// for unset variables.
    ///
    /// # Errors
    /// Returns [`EngineError::InvalidArgument`] when a variable is set but
    /// does not parse as a positive integer.
    pub fn from_env() -> EngineResult<Self> {
        let config = Self {
            top_exercise_count: read_cutoff(ENV_TOP_EXERCISES, DEFAULT_TOP_EXERCISES)?,
            leaderboard_cutoff: read_cutoff(ENV_LEADERBOARD_CUTOFF, DEFAULT_LEADERBOARD_CUTOFF)?,
        };
        debug!(
            top_exercise_count = config.top_exercise_count,
            leaderboard_cutoff = config.leaderboard_cutoff,
            "analytics configuration loaded"
        );
        Ok(config)
    }
}

fn read_cutoff(var: &str, default: usize) -> EngineResult<usize> {
    match env::var(var) {
        Ok(raw) => {
            let value: usize = raw.parse().map_err(|_| {
                EngineError::invalid_argument(format!("{var} must be a positive integer: {raw:?}"))
            })?;
            if value == 0 {
                return Err(EngineError::invalid_argument(format!(
                    "{var} must be at least 1"
                )));
            }
            Ok(value)
        }
        Err(env::VarError::NotPresent) => Ok(default),
        Err(env::VarError::NotUnicode(_)) => Err(EngineError::invalid_argument(format!(
            "{var} contains non-unicode data"
        ))),
    }
}

// ABOUTME: Latest-per-group metric: most recent logged performance per exercise
// ABOUTME: row_number over (athlete, exercise) partitions ordered by log time descending
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Forge Fitness Analytics

//! Most recent performance per exercise.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

use forge_core::errors::{EngineError, EngineResult};
use forge_core::models::{AthleteId, Exercise, ExerciseId, PerformanceLog};

use crate::window::row_number;

/// The most recent logged attempt for one exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatestExerciseLog {
    /// Athlete the log belongs to
    pub athlete_id: AthleteId,
    /// Exercise performed
    pub exercise_id: ExerciseId,
    /// Exercise display name
    pub exercise_name: String,
    /// Sets completed in the most recent attempt
    pub completed_sets: u32,
    /// Reps completed in the most recent attempt
    pub completed_reps: u32,
    /// Weight used, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_used: Option<f64>,
    /// Perceived exertion of the most recent attempt (1-10)
    pub perceived_exertion: u8,
    /// When the attempt was logged
    pub log_time: DateTime<Utc>,
}

/// Select the most recent performance log per (athlete, exercise) pair.
///
/// Partitions by (athlete, exercise), orders by log time descending with
/// ties broken by stable input-arrival order, and keeps only the first row
/// of each partition. Exercises with no logs are absent from the output.
/// Output is ordered by log time descending, then exercise id.
///
/// # Errors
/// Returns [`EngineError::Computation`] when a log references an exercise
/// missing from `exercises`; the store must supply every referenced row.
pub fn latest_per_exercise(
    logs: &[PerformanceLog],
    exercises: &[Exercise],
) -> EngineResult<Vec<LatestExerciseLog>> {
    let names: HashMap<ExerciseId, &str> = exercises
        .iter()
        .map(|e| (e.exercise_id, e.name.as_str()))
        .collect();

    let ranked = row_number(
        logs.to_vec(),
        |log| (log.athlete_id, log.exercise_id),
        |a, b| b.log_time.cmp(&a.log_time),
    );

    let mut out = Vec::new();
    for entry in ranked.into_iter().filter(|r| r.rank == 1) {
        let log = entry.row;
        let name = names.get(&log.exercise_id).ok_or_else(|| {
            EngineError::computation(format!(
                "performance log references unknown exercise {}",
                log.exercise_id
            ))
        })?;
        out.push(LatestExerciseLog {
            athlete_id: log.athlete_id,
            exercise_id: log.exercise_id,
            exercise_name: (*name).to_owned(),
            completed_sets: log.completed_sets,
            completed_reps: log.completed_reps,
            weight_used: log.weight_used,
            perceived_exertion: log.perceived_exertion,
            log_time: log.log_time,
        });
    }

    out.sort_by(|a, b| {
        b.log_time
            .cmp(&a.log_time)
            .then_with(|| a.exercise_id.cmp(&b.exercise_id))
    });
    debug!(rows = out.len(), "latest-per-exercise computed");
    Ok(out)
}

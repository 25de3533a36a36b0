// ABOUTME: Top-K exercises by training volume (sets * reps * weight)
// ABOUTME: dense_rank over per-athlete volume totals with a configurable cutoff
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Forge Fitness Analytics

//! Top exercises by training volume.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

use forge_core::errors::{EngineError, EngineResult};
use forge_core::models::{AthleteId, Exercise, ExerciseId, PerformanceLog};
use forge_core::numeric::round2;

use crate::window::{dense_rank, partition_ordered};

/// Total training volume of one exercise for one athlete
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseVolume {
    /// Athlete the total belongs to
    pub athlete_id: AthleteId,
    /// Exercise the total belongs to
    pub exercise_id: ExerciseId,
    /// Exercise display name
    pub exercise_name: String,
    /// Sum of sets * reps * weight over all logs, two decimals; logs with no
    /// weight contribute zero volume but are not excluded
    pub total_volume: f64,
    /// Dense rank of this total within the athlete's exercises
    pub rank: u32,
}

/// Rank each athlete's exercises by total volume and keep ranks up to
/// `top_k`.
///
/// Volume per log is `completed_sets * completed_reps * weight`, with a
/// missing weight counted as zero. Dense ranking means ties never create
/// gaps, so an athlete with exercises tied for first can legitimately have
/// more than `top_k` output rows.
///
/// Output is ordered by athlete id, rank, total volume descending, then
/// exercise id.
///
/// # Errors
/// Returns [`EngineError::Computation`] when a log references an exercise
/// missing from `exercises`.
pub fn top_exercises_by_volume(
    logs: &[PerformanceLog],
    exercises: &[Exercise],
    top_k: usize,
) -> EngineResult<Vec<ExerciseVolume>> {
    let names: HashMap<ExerciseId, &str> = exercises
        .iter()
        .map(|e| (e.exercise_id, e.name.as_str()))
        .collect();

    let totals = partition_ordered(logs.to_vec(), |log| (log.athlete_id, log.exercise_id))
        .into_iter()
        .map(|((athlete_id, exercise_id), group)| {
            let volume = group
                .iter()
                .map(|log| {
                    f64::from(log.completed_sets)
                        * f64::from(log.completed_reps)
                        * log.weight_used.unwrap_or(0.0)
                })
                .sum::<f64>();
            (athlete_id, exercise_id, round2(volume))
        })
        .collect::<Vec<_>>();

    let ranked = dense_rank(
        totals,
        |&(athlete_id, _, _)| athlete_id,
        |a, b| b.2.total_cmp(&a.2),
    );

    let mut out = Vec::new();
    for entry in ranked {
        if entry.rank as usize > top_k {
            continue;
        }
        let (athlete_id, exercise_id, total_volume) = entry.row;
        let name = names.get(&exercise_id).ok_or_else(|| {
            EngineError::computation(format!(
                "performance log references unknown exercise {exercise_id}"
            ))
        })?;
        out.push(ExerciseVolume {
            athlete_id,
            exercise_id,
            exercise_name: (*name).to_owned(),
            total_volume,
            rank: entry.rank,
        });
    }

    out.sort_by(|a, b| {
        a.athlete_id
            .cmp(&b.athlete_id)
            .then_with(|| a.rank.cmp(&b.rank))
            .then_with(|| b.total_volume.total_cmp(&a.total_volume))
            .then_with(|| a.exercise_id.cmp(&b.exercise_id))
    });
    debug!(rows = out.len(), top_k, "top exercises by volume computed");
    Ok(out)
}

// ABOUTME: Session adherence metric: completed vs planned work per session
// ABOUTME: Null-safe percentage aggregation with a two-decimal rounding contract
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Forge Fitness Analytics

//! Session adherence ratios.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::debug;

use forge_core::errors::{EngineError, EngineResult};
use forge_core::models::{
    AthleteId, ExerciseId, PerformanceLog, PlannedSet, SessionId, WorkoutSession,
};
use forge_core::numeric::{mean, round2};

use crate::window::partition_ordered;

/// Adherence of one athlete to one session's plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionAdherence {
    /// Athlete the logs belong to
    pub athlete_id: AthleteId,
    /// Session the logs belong to
    pub session_id: SessionId,
    /// Calendar date of the session
    pub session_date: NaiveDate,
    /// 100 * completed sets / planned sets, rounded to two decimals;
    /// `None` when no planned work matches the logs (never 0, never an error)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage_sets_done: Option<f64>,
    /// 100 * completed reps / planned reps, rounded to two decimals;
    /// `None` when no planned work matches the logs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage_reps_done: Option<f64>,
    /// Mean perceived exertion across the session's logs, two decimals
    pub average_rpe: f64,
}

/// Compute per-session adherence ratios.
///
/// Groups logs by (athlete, session). The denominators sum the planned
/// sets/reps of every distinct (session, exercise) plan the group's logs
/// match, each counted once no matter how many log rows hit it; a log with
/// no matching plan contributes zero planned work while still counting
/// toward the completed sums and the exertion average. A zero planned
/// denominator yields `None` for that percentage.
///
/// Output is ordered by session date descending, then athlete id ascending,
/// then session id descending.
///
/// # Errors
/// Returns [`EngineError::Computation`] when a log references a session
/// missing from `sessions`.
pub fn session_adherence(
    logs: &[PerformanceLog],
    planned: &[PlannedSet],
    sessions: &[WorkoutSession],
) -> EngineResult<Vec<SessionAdherence>> {
    let plans: HashMap<(SessionId, ExerciseId), &PlannedSet> = planned
        .iter()
        .map(|p| ((p.session_id, p.exercise_id), p))
        .collect();
    let dates: HashMap<SessionId, NaiveDate> = sessions
        .iter()
        .map(|s| (s.session_id, s.session_date))
        .collect();

    let groups = partition_ordered(logs.to_vec(), |log| (log.athlete_id, log.session_id));

    let mut out = Vec::with_capacity(groups.len());
    for ((athlete_id, session_id), group) in groups {
        let session_date = *dates.get(&session_id).ok_or_else(|| {
            EngineError::computation(format!(
                "performance log references unknown session {session_id}"
            ))
        })?;

        let mut completed_sets = 0_u64;
        let mut completed_reps = 0_u64;
        let mut planned_sets = 0_u64;
        let mut planned_reps = 0_u64;
        let mut counted_plans: HashSet<ExerciseId> = HashSet::new();
        for log in &group {
            completed_sets += u64::from(log.completed_sets);
            completed_reps += u64::from(log.completed_reps);
            // Each matched plan enters the denominator once, however many
            // log rows hit it.
            if counted_plans.insert(log.exercise_id) {
                if let Some(plan) = plans.get(&(session_id, log.exercise_id)) {
                    planned_sets += u64::from(plan.planned_sets);
                    planned_reps += u64::from(plan.planned_reps);
                }
            }
        }
        // Groups are never empty, so the mean always exists.
        let average_rpe = mean(group.iter().map(|l| f64::from(l.perceived_exertion)))
            .map_or(0.0, round2);

        out.push(SessionAdherence {
            athlete_id,
            session_id,
            session_date,
            percentage_sets_done: percentage(completed_sets, planned_sets),
            percentage_reps_done: percentage(completed_reps, planned_reps),
            average_rpe,
        });
    }

    out.sort_by(|a, b| {
        b.session_date
            .cmp(&a.session_date)
            .then_with(|| a.athlete_id.cmp(&b.athlete_id))
            .then_with(|| b.session_id.cmp(&a.session_id))
    });
    debug!(rows = out.len(), "session adherence computed");
    Ok(out)
}

/// 100 * completed / planned, two decimals; `None` on a zero denominator.
fn percentage(completed: u64, planned: u64) -> Option<f64> {
    if planned == 0 {
        None
    } else {
        Some(round2(100.0 * completed as f64 / planned as f64))
    }
}

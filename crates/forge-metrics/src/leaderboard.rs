// ABOUTME: Program leaderboard metric: athletes ranked by engagement and effort
// ABOUTME: competition_rank per program over distinct logged sessions and average RPE
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Forge Fitness Analytics

//! Cross-athlete leaderboards per training program.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::debug;

use forge_core::errors::{EngineError, EngineResult};
use forge_core::models::{
    AthleteId, AthleteProfile, PerformanceLog, ProgramId, SessionId, TrainingProgram,
    WorkoutSession,
};
use forge_core::numeric::{mean, round2};

use crate::window::{competition_rank, partition_ordered};

/// One leaderboard row: an athlete's standing within a program
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    /// Program the standing belongs to
    pub program_id: ProgramId,
    /// Program display name
    pub program_name: String,
    /// Ranked athlete
    pub athlete_id: AthleteId,
    /// Athlete display name
    pub athlete_name: String,
    /// Count of distinct sessions the athlete logged in the program
    pub logged_sessions: u64,
    /// Mean perceived exertion across the athlete's logs, two decimals
    pub avg_rpe: f64,
    /// Competition rank within the program (ties share a rank; gaps follow)
    pub rank: u32,
}

/// Rank athletes within each program by distinct logged sessions, then by
/// average perceived exertion, keeping ranks up to `cutoff`.
///
/// Only logs belonging to the supplied `sessions` participate; the caller
/// scopes `sessions` and `programs` to the requesting trainer. Average RPE
/// is rounded to two decimals before ranking, so ties are decided on the
/// reported value. Competition ranking means a tie for an early place pushes
/// later athletes past the cutoff, while a tie at the cutoff admits more
/// than `cutoff` rows.
///
/// Output is ordered by program id, rank, then athlete id.
///
/// # Errors
/// Returns [`EngineError::Computation`] when a ranked session's program or a
/// ranked athlete's profile is missing from the lookup inputs.
pub fn program_leaderboard(
    logs: &[PerformanceLog],
    sessions: &[WorkoutSession],
    programs: &[TrainingProgram],
    athletes: &[AthleteProfile],
    cutoff: usize,
) -> EngineResult<Vec<LeaderboardEntry>> {
    let session_programs: HashMap<SessionId, ProgramId> = sessions
        .iter()
        .map(|s| (s.session_id, s.program_id))
        .collect();
    let program_names: HashMap<ProgramId, &str> = programs
        .iter()
        .map(|p| (p.program_id, p.name.as_str()))
        .collect();
    let athlete_names: HashMap<AthleteId, &str> = athletes
        .iter()
        .map(|a| (a.athlete_id, a.full_name.as_str()))
        .collect();

    // Logs outside the supplied sessions belong to other trainers' programs.
    let scoped: Vec<&PerformanceLog> = logs
        .iter()
        .filter(|log| session_programs.contains_key(&log.session_id))
        .collect();

    let standings = partition_ordered(scoped, |log| {
        (session_programs[&log.session_id], log.athlete_id)
    })
    .into_iter()
    .map(|((program_id, athlete_id), group)| {
        let distinct_sessions: HashSet<SessionId> =
            group.iter().map(|log| log.session_id).collect();
        let avg_rpe = mean(group.iter().map(|log| f64::from(log.perceived_exertion)))
            .map_or(0.0, round2);
        (
            program_id,
            athlete_id,
            distinct_sessions.len() as u64,
            avg_rpe,
        )
    })
    .collect::<Vec<_>>();

    let ranked = competition_rank(
        standings,
        |&(program_id, _, _, _)| program_id,
        |a, b| b.2.cmp(&a.2).then_with(|| b.3.total_cmp(&a.3)),
    );

    let mut out = Vec::new();
    for entry in ranked {
        if entry.rank as usize > cutoff {
            continue;
        }
        let (program_id, athlete_id, logged_sessions, avg_rpe) = entry.row;
        let program_name = program_names.get(&program_id).ok_or_else(|| {
            EngineError::computation(format!(
                "session references unknown program {program_id}"
            ))
        })?;
        let athlete_name = athlete_names.get(&athlete_id).ok_or_else(|| {
            EngineError::computation(format!("no profile for ranked athlete {athlete_id}"))
        })?;
        out.push(LeaderboardEntry {
            program_id,
            program_name: (*program_name).to_owned(),
            athlete_id,
            athlete_name: (*athlete_name).to_owned(),
            logged_sessions,
            avg_rpe,
            rank: entry.rank,
        });
    }

    out.sort_by(|a, b| {
        a.program_id
            .cmp(&b.program_id)
            .then_with(|| a.rank.cmp(&b.rank))
            .then_with(|| a.athlete_id.cmp(&b.athlete_id))
    });
    debug!(rows = out.len(), cutoff, "program leaderboard computed");
    Ok(out)
}

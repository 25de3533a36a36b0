// ABOUTME: Unit tests for the program leaderboard metric
// ABOUTME: Validates competition ranking, cutoff ties, scoping, and name enrichment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Forge Fitness Analytics

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(clippy::float_cmp)] // Test values are exact
#![allow(missing_docs)]

use chrono::{NaiveDate, TimeZone, Utc};

use forge_analytics::errors::EngineError;
use forge_analytics::metrics::program_leaderboard;
use forge_analytics::models::{
    AthleteId, AthleteProfile, Difficulty, ExerciseId, IntensityLevel, PerformanceLog, ProgramId,
    SessionId, TrainerId, TrainingProgram, WorkoutSession,
};

fn athlete(id: i64, name: &str) -> AthleteProfile {
    AthleteProfile {
        athlete_id: AthleteId::new(id),
        full_name: name.to_string(),
        sports_branch: "Track and Field".to_string(),
    }
}

fn program(id: i64, name: &str) -> TrainingProgram {
    TrainingProgram {
        program_id: ProgramId::new(id),
        name: name.to_string(),
        difficulty: Difficulty::Medium,
        goal: "Conditioning".to_string(),
        start_date: NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
        created_by: TrainerId::new(9),
    }
}

fn session(id: i64, program: i64) -> WorkoutSession {
    WorkoutSession {
        session_id: SessionId::new(id),
        program_id: ProgramId::new(program),
        session_date: NaiveDate::from_ymd_opt(2026, 7, 1).unwrap(),
        duration_minutes: 60,
        intensity: IntensityLevel::Medium,
    }
}

fn log(athlete: i64, session: i64, rpe: u8) -> PerformanceLog {
    PerformanceLog {
        athlete_id: AthleteId::new(athlete),
        session_id: SessionId::new(session),
        exercise_id: ExerciseId::new(1),
        completed_sets: 3,
        completed_reps: 10,
        weight_used: Some(50.0),
        perceived_exertion: rpe,
        log_time: Utc.with_ymd_and_hms(2026, 7, 1, 9, 0, 0).unwrap(),
    }
}

/// Session ids 1..=n under the given program.
fn sessions_for(program: i64, n: i64) -> Vec<WorkoutSession> {
    (1..=n).map(|i| session(program * 100 + i, program)).collect()
}

#[test]
fn test_tied_athletes_share_rank_and_gap_follows() {
    // Athletes 1 and 2: 5 distinct sessions each, identical average RPE.
    // Athlete 3: 4 sessions. Ranks must be 1, 1, 3.
    let sessions = sessions_for(1, 5);
    let mut logs = Vec::new();
    for s in &sessions {
        logs.push(log(1, s.session_id.as_i64(), 7));
        logs.push(log(2, s.session_id.as_i64(), 7));
    }
    for s in sessions.iter().take(4) {
        logs.push(log(3, s.session_id.as_i64(), 7));
    }
    let programs = vec![program(1, "Endurance Training")];
    let athletes = vec![athlete(1, "Ada"), athlete(2, "Ben"), athlete(3, "Cy")];

    let out = program_leaderboard(&logs, &sessions, &programs, &athletes, 5).unwrap();
    let ranks: Vec<(i64, u32)> = out.iter().map(|r| (r.athlete_id.as_i64(), r.rank)).collect();
    assert_eq!(ranks, vec![(1, 1), (2, 1), (3, 3)]);
    assert_eq!(out[0].logged_sessions, 5);
    assert_eq!(out[0].avg_rpe, 7.00);
}

#[test]
fn test_distinct_sessions_counted_once() {
    // Three logs across two sessions count as two logged sessions.
    let sessions = sessions_for(1, 2);
    let logs = vec![log(1, 101, 6), log(1, 101, 8), log(1, 102, 7)];
    let programs = vec![program(1, "Strength Building Phase")];
    let athletes = vec![athlete(1, "Ada")];

    let out = program_leaderboard(&logs, &sessions, &programs, &athletes, 5).unwrap();
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].logged_sessions, 2);
    assert_eq!(out[0].avg_rpe, 7.00);
}

#[test]
fn test_average_rpe_breaks_session_count_ties() {
    let sessions = sessions_for(1, 1);
    let logs = vec![log(1, 101, 9), log(2, 101, 5)];
    let programs = vec![program(1, "Power Development")];
    let athletes = vec![athlete(1, "Ada"), athlete(2, "Ben")];

    let out = program_leaderboard(&logs, &sessions, &programs, &athletes, 5).unwrap();
    let ranks: Vec<(i64, u32)> = out.iter().map(|r| (r.athlete_id.as_i64(), r.rank)).collect();
    assert_eq!(ranks, vec![(1, 1), (2, 2)]);
}

#[test]
fn test_tie_at_cutoff_admits_extra_rows() {
    // Six athletes; the last two tie for 5th, so a cutoff of 5 keeps six rows.
    let sessions = sessions_for(1, 6);
    let mut logs = Vec::new();
    for (athlete_id, session_count) in [(1, 6), (2, 5), (3, 4), (4, 3), (5, 2), (6, 2)] {
        for s in sessions.iter().take(session_count) {
            logs.push(log(athlete_id, s.session_id.as_i64(), 7));
        }
    }
    let programs = vec![program(1, "Competition Prep")];
    let athletes = (1..=6)
        .map(|i| athlete(i, &format!("Athlete {i}")))
        .collect::<Vec<_>>();

    let out = program_leaderboard(&logs, &sessions, &programs, &athletes, 5).unwrap();
    assert_eq!(out.len(), 6);
    assert_eq!(out[4].rank, 5);
    assert_eq!(out[5].rank, 5);
}

#[test]
fn test_cutoff_excludes_lower_ranks() {
    let sessions = sessions_for(1, 7);
    let mut logs = Vec::new();
    for (athlete_id, session_count) in [(1, 7), (2, 6), (3, 5), (4, 4), (5, 3), (6, 2)] {
        for s in sessions.iter().take(session_count) {
            logs.push(log(athlete_id, s.session_id.as_i64(), 7));
        }
    }
    let programs = vec![program(1, "Competition Prep")];
    let athletes = (1..=6)
        .map(|i| athlete(i, &format!("Athlete {i}")))
        .collect::<Vec<_>>();

    let out = program_leaderboard(&logs, &sessions, &programs, &athletes, 5).unwrap();
    assert_eq!(out.len(), 5);
    assert!(out.iter().all(|r| r.athlete_id != AthleteId::new(6)));
}

#[test]
fn test_logs_outside_supplied_sessions_are_ignored() {
    // The second log belongs to another trainer's session and must not count.
    let sessions = sessions_for(1, 1);
    let logs = vec![log(1, 101, 7), log(1, 999, 10)];
    let programs = vec![program(1, "Functional Fitness")];
    let athletes = vec![athlete(1, "Ada")];

    let out = program_leaderboard(&logs, &sessions, &programs, &athletes, 5).unwrap();
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].logged_sessions, 1);
    assert_eq!(out[0].avg_rpe, 7.00);
}

#[test]
fn test_output_enriched_with_display_names() {
    let sessions = sessions_for(1, 1);
    let logs = vec![log(1, 101, 7)];
    let programs = vec![program(1, "Olympic Prep")];
    let athletes = vec![athlete(1, "Jordan Miles")];

    let out = program_leaderboard(&logs, &sessions, &programs, &athletes, 5).unwrap();
    assert_eq!(out[0].program_name, "Olympic Prep");
    assert_eq!(out[0].athlete_name, "Jordan Miles");
}

#[test]
fn test_programs_ranked_independently_and_output_ordered() {
    let mut sessions = sessions_for(1, 2);
    sessions.extend(sessions_for(2, 2));
    let logs = vec![
        log(2, 201, 7),
        log(1, 101, 7),
        log(1, 102, 7),
        log(2, 102, 7),
    ];
    let programs = vec![program(1, "Endurance Training"), program(2, "Fat Loss Program")];
    let athletes = vec![athlete(1, "Ada"), athlete(2, "Ben")];

    let out = program_leaderboard(&logs, &sessions, &programs, &athletes, 5).unwrap();
    let keys: Vec<(i64, u32, i64)> = out
        .iter()
        .map(|r| (r.program_id.as_i64(), r.rank, r.athlete_id.as_i64()))
        .collect();
    assert_eq!(keys, vec![(1, 1, 1), (1, 2, 2), (2, 1, 2)]);
}

#[test]
fn test_missing_athlete_profile_is_computation_error() {
    let sessions = sessions_for(1, 1);
    let logs = vec![log(1, 101, 7)];
    let programs = vec![program(1, "Speed and Agility")];

    let err = program_leaderboard(&logs, &sessions, &programs, &[], 5).unwrap_err();
    assert!(matches!(err, EngineError::Computation(_)));
}

#[test]
fn test_idempotent_and_input_order_independent() {
    let sessions = sessions_for(1, 3);
    let mut logs = vec![log(1, 101, 7), log(2, 102, 8), log(1, 103, 6), log(2, 101, 9)];
    let programs = vec![program(1, "Athletic Performance")];
    let athletes = vec![athlete(1, "Ada"), athlete(2, "Ben")];

    let first = program_leaderboard(&logs, &sessions, &programs, &athletes, 5).unwrap();
    let again = program_leaderboard(&logs, &sessions, &programs, &athletes, 5).unwrap();
    assert_eq!(first, again);

    logs.reverse();
    let reversed = program_leaderboard(&logs, &sessions, &programs, &athletes, 5).unwrap();
    assert_eq!(first, reversed);
}

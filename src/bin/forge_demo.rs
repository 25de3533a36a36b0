// ABOUTME: Demo binary running every analytic view over a small in-memory snapshot
// ABOUTME: Prints each view as pretty JSON for quick inspection of the engine output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Forge Fitness Analytics

//! Demo runner for the Forge analytics engine.
//!
//! Builds a small in-memory training snapshot, then runs every analytic view
//! and prints the results as pretty JSON.
//!
//! Usage:
//! ```bash
//! cargo run --bin forge-demo
//! RUST_LOG=debug cargo run --bin forge-demo
//! ```

use anyhow::{Context, Result};
use chrono::{NaiveDate, TimeZone, Utc};
use serde::Serialize;

use forge_analytics::engine::AnalyticsEngine;
use forge_analytics::logging::{init_logging, LoggingConfig};
use forge_analytics::models::{
    AthleteId, AthleteProfile, Difficulty, Exercise, ExerciseId, IntensityLevel, PerformanceLog,
    PlannedSet, ProgramId, SessionId, TrainerId, TrainingProgram, WorkoutSession,
};
use forge_analytics::store::InMemoryRecordStore;

fn date(y: i32, m: u32, d: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d).context("invalid demo date")
}

fn log_row(
    athlete: i64,
    session: i64,
    exercise: i64,
    sets: u32,
    reps: u32,
    weight: Option<f64>,
    rpe: u8,
    stamp: (i32, u32, u32, u32),
) -> Result<PerformanceLog> {
    let (y, m, d, h) = stamp;
    let log_time = Utc
        .with_ymd_and_hms(y, m, d, h, 30, 0)
        .single()
        .context("invalid demo timestamp")?;
    Ok(PerformanceLog {
        athlete_id: AthleteId::new(athlete),
        session_id: SessionId::new(session),
        exercise_id: ExerciseId::new(exercise),
        completed_sets: sets,
        completed_reps: reps,
        weight_used: weight,
        perceived_exertion: rpe,
        log_time,
    })
}

fn build_store() -> Result<InMemoryRecordStore> {
    let athletes = vec![
        AthleteProfile {
            athlete_id: AthleteId::new(1),
            full_name: "Jordan Miles".to_owned(),
            sports_branch: "Basketball".to_owned(),
        },
        AthleteProfile {
            athlete_id: AthleteId::new(2),
            full_name: "Sam Okafor".to_owned(),
            sports_branch: "Wrestling".to_owned(),
        },
    ];

    let exercises = vec![
        Exercise {
            exercise_id: ExerciseId::new(28),
            name: "Barbell Squat".to_owned(),
            category: "Strength".to_owned(),
            equipment: "Barbell, Rack".to_owned(),
            difficulty: Difficulty::Hard,
        },
        Exercise {
            exercise_id: ExerciseId::new(21),
            name: "Pull-ups".to_owned(),
            category: "Strength".to_owned(),
            equipment: "Pull-up Bar".to_owned(),
            difficulty: Difficulty::Medium,
        },
        Exercise {
            exercise_id: ExerciseId::new(13),
            name: "Burpees".to_owned(),
            category: "Cardio".to_owned(),
            equipment: "None".to_owned(),
            difficulty: Difficulty::Hard,
        },
    ];

    let programs = vec![TrainingProgram {
        program_id: ProgramId::new(4),
        name: "Off-Season Conditioning".to_owned(),
        difficulty: Difficulty::Medium,
        goal: "Build base strength and work capacity".to_owned(),
        start_date: date(2026, 6, 1)?,
        end_date: date(2026, 9, 1)?,
        created_by: TrainerId::new(9),
    }];

    let sessions = vec![
        WorkoutSession {
            session_id: SessionId::new(41),
            program_id: ProgramId::new(4),
            session_date: date(2026, 8, 10)?,
            duration_minutes: 60,
            intensity: IntensityLevel::Medium,
        },
        WorkoutSession {
            session_id: SessionId::new(42),
            program_id: ProgramId::new(4),
            session_date: date(2026, 8, 17)?,
            duration_minutes: 75,
            intensity: IntensityLevel::High,
        },
    ];

    let planned_sets = vec![
        PlannedSet {
            session_id: SessionId::new(41),
            exercise_id: ExerciseId::new(28),
            planned_sets: 5,
            planned_reps: 5,
            rest_seconds: 120,
        },
        PlannedSet {
            session_id: SessionId::new(41),
            exercise_id: ExerciseId::new(21),
            planned_sets: 4,
            planned_reps: 8,
            rest_seconds: 90,
        },
        PlannedSet {
            session_id: SessionId::new(42),
            exercise_id: ExerciseId::new(13),
            planned_sets: 4,
            planned_reps: 15,
            rest_seconds: 60,
        },
    ];

    let logs = vec![
        log_row(1, 41, 28, 5, 5, Some(120.0), 8, (2026, 8, 10, 9))?,
        log_row(1, 41, 21, 3, 8, None, 7, (2026, 8, 10, 10))?,
        log_row(1, 42, 13, 4, 12, None, 9, (2026, 8, 17, 9))?,
        log_row(1, 42, 28, 4, 5, Some(125.0), 9, (2026, 8, 17, 10))?,
        log_row(2, 41, 28, 5, 5, Some(100.0), 6, (2026, 8, 10, 11))?,
        log_row(2, 42, 13, 4, 15, None, 8, (2026, 8, 17, 11))?,
    ];

    Ok(InMemoryRecordStore::builder()
        .athletes(athletes)
        .trainers([TrainerId::new(9)])
        .exercises(exercises)
        .programs(programs)
        .sessions(sessions)
        .planned_sets(planned_sets)
        .logs(logs)
        .build())
}

fn print_view<T: Serialize>(title: &str, rows: &[T]) -> Result<()> {
    println!("== {title} ==");
    println!("{}", serde_json::to_string_pretty(rows)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging(&LoggingConfig::default())?;

    let engine = AnalyticsEngine::new(build_store()?);
    let athlete = AthleteId::new(1);
    let trainer = TrainerId::new(9);

    print_view("latest training", &engine.latest_training(athlete).await?)?;
    print_view(
        "session adherence",
        &engine.session_adherence(athlete).await?,
    )?;
    print_view("top exercises", &engine.top_exercises(athlete).await?)?;
    print_view(
        "program leaderboard",
        &engine.program_leaderboard(trainer).await?,
    )?;
    Ok(())
}

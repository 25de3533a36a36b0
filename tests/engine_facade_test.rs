// ABOUTME: Integration tests for the query facade over the in-memory record store
// ABOUTME: Validates id validation, NotFound vs empty success, view wiring, and history ordering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Forge Fitness Analytics

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(clippy::float_cmp)] // Test values are exact
#![allow(missing_docs)]

use chrono::{NaiveDate, TimeZone, Utc};

use forge_analytics::config::AnalyticsConfig;
use forge_analytics::engine::AnalyticsEngine;
use forge_analytics::errors::{EngineError, ErrorCode};
use forge_analytics::models::{
    AthleteId, AthleteProfile, BodyMeasurement, ClearanceStatus, Difficulty, EnrollmentStatus,
    Exercise, ExerciseId, IntensityLevel, MedicalAssessment, PerformanceLog, PlannedSet,
    ProgramEnrollment, ProgramId, SessionId, TrainerId, TrainingProgram, WorkoutSession,
};
use forge_analytics::store::InMemoryRecordStore;

fn day(m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, m, d).unwrap()
}

fn fixture_store() -> InMemoryRecordStore {
    let log = |athlete: i64, session: i64, exercise: i64, sets: u32, weight: Option<f64>, rpe: u8, d: u32, h: u32| PerformanceLog {
        athlete_id: AthleteId::new(athlete),
        session_id: SessionId::new(session),
        exercise_id: ExerciseId::new(exercise),
        completed_sets: sets,
        completed_reps: 10,
        weight_used: weight,
        perceived_exertion: rpe,
        log_time: Utc.with_ymd_and_hms(2026, 7, d, h, 0, 0).unwrap(),
    };

    InMemoryRecordStore::builder()
        .athletes([
            AthleteProfile {
                athlete_id: AthleteId::new(1),
                full_name: "Jordan Miles".to_string(),
                sports_branch: "Basketball".to_string(),
            },
            AthleteProfile {
                athlete_id: AthleteId::new(2),
                full_name: "Sam Okafor".to_string(),
                sports_branch: "Wrestling".to_string(),
            },
            AthleteProfile {
                athlete_id: AthleteId::new(3),
                full_name: "Quiet Quinn".to_string(),
                sports_branch: "Tennis".to_string(),
            },
        ])
        .trainers([TrainerId::new(9)])
        .exercises([
            Exercise {
                exercise_id: ExerciseId::new(10),
                name: "Barbell Squat".to_string(),
                category: "Strength".to_string(),
                equipment: "Barbell, Rack".to_string(),
                difficulty: Difficulty::Hard,
            },
            Exercise {
                exercise_id: ExerciseId::new(20),
                name: "Pull-ups".to_string(),
                category: "Strength".to_string(),
                equipment: "Pull-up Bar".to_string(),
                difficulty: Difficulty::Medium,
            },
        ])
        .programs([TrainingProgram {
            program_id: ProgramId::new(4),
            name: "Off-Season Conditioning".to_string(),
            difficulty: Difficulty::Medium,
            goal: "Base strength".to_string(),
            start_date: day(6, 1),
            end_date: day(9, 1),
            created_by: TrainerId::new(9),
        }])
        .sessions([
            WorkoutSession {
                session_id: SessionId::new(41),
                program_id: ProgramId::new(4),
                session_date: day(7, 10),
                duration_minutes: 60,
                intensity: IntensityLevel::Medium,
            },
            WorkoutSession {
                session_id: SessionId::new(42),
                program_id: ProgramId::new(4),
                session_date: day(7, 17),
                duration_minutes: 75,
                intensity: IntensityLevel::High,
            },
        ])
        .planned_sets([
            PlannedSet {
                session_id: SessionId::new(41),
                exercise_id: ExerciseId::new(10),
                planned_sets: 5,
                planned_reps: 10,
                rest_seconds: 120,
            },
            PlannedSet {
                session_id: SessionId::new(41),
                exercise_id: ExerciseId::new(20),
                planned_sets: 5,
                planned_reps: 10,
                rest_seconds: 90,
            },
        ])
        .logs([
            log(1, 41, 10, 5, Some(120.0), 8, 10, 9),
            log(1, 41, 20, 3, None, 7, 10, 10),
            log(1, 42, 10, 4, Some(125.0), 9, 17, 9),
            log(2, 41, 10, 5, Some(100.0), 6, 10, 11),
        ])
        .enrollments([ProgramEnrollment {
            athlete_id: AthleteId::new(1),
            program_id: ProgramId::new(4),
            enrollment_date: day(6, 2),
            status: EnrollmentStatus::Ongoing,
        }])
        .measurements([
            BodyMeasurement {
                athlete_id: AthleteId::new(1),
                measurement_date: day(7, 15),
                height_cm: 190.0,
                weight_kg: 88.0,
                body_fat_percentage: 12.5,
                muscle_mass_kg: 44.0,
                bmi: 24.38,
            },
            BodyMeasurement {
                athlete_id: AthleteId::new(1),
                measurement_date: day(6, 15),
                height_cm: 190.0,
                weight_kg: 90.0,
                body_fat_percentage: 13.0,
                muscle_mass_kg: 43.5,
                bmi: 24.93,
            },
        ])
        .assessments([MedicalAssessment {
            athlete_id: AthleteId::new(1),
            examiner: "Dr. Reyes".to_string(),
            assessment_date: day(6, 20),
            assessment_type: "Clearance Check".to_string(),
            notes: "Cleared for full training".to_string(),
            clearance: ClearanceStatus::Cleared,
        }])
        .build()
}

fn engine() -> AnalyticsEngine<InMemoryRecordStore> {
    AnalyticsEngine::new(fixture_store())
}

#[tokio::test]
async fn test_malformed_id_is_invalid_argument() {
    let engine = engine();
    for raw in [0, -7] {
        let err = engine.latest_training(AthleteId::new(raw)).await.unwrap_err();
        assert!(matches!(err, EngineError::InvalidArgument(_)));
        assert_eq!(err.code(), ErrorCode::InvalidArgument);
        assert_eq!(err.code().http_status(), 400);
    }
}

#[tokio::test]
async fn test_unknown_athlete_is_not_found() {
    let err = engine()
        .latest_training(AthleteId::new(404))
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::NotFound(_)));
    assert_eq!(err.code().http_status(), 404);
}

#[tokio::test]
async fn test_unknown_trainer_is_not_found() {
    let err = engine()
        .program_leaderboard(TrainerId::new(404))
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::NotFound(_)));
}

#[tokio::test]
async fn test_athlete_with_no_logs_is_empty_success() {
    let engine = engine();
    let quinn = AthleteId::new(3);
    assert!(engine.latest_training(quinn).await.unwrap().is_empty());
    assert!(engine.session_adherence(quinn).await.unwrap().is_empty());
    assert!(engine.top_exercises(quinn).await.unwrap().is_empty());
    assert!(engine.enrolled_programs(quinn).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_latest_training_view() {
    let out = engine().latest_training(AthleteId::new(1)).await.unwrap();
    assert_eq!(out.len(), 2);
    // Most recent first: the day-17 squat log, then the day-10 pull-up log.
    assert_eq!(out[0].exercise_name, "Barbell Squat");
    assert_eq!(out[0].completed_sets, 4);
    assert_eq!(out[1].exercise_name, "Pull-ups");
}

#[tokio::test]
async fn test_session_adherence_view() {
    let out = engine().session_adherence(AthleteId::new(1)).await.unwrap();
    assert_eq!(out.len(), 2);

    // Session 42 (newer) has no planned sets on record: absent percentages.
    assert_eq!(out[0].session_id, SessionId::new(42));
    assert_eq!(out[0].percentage_sets_done, None);
    assert_eq!(out[0].average_rpe, 9.00);

    // Session 41: 100 * (5 + 3) / 10 = 80.00.
    assert_eq!(out[1].session_id, SessionId::new(41));
    assert_eq!(out[1].percentage_sets_done, Some(80.00));
    assert_eq!(out[1].average_rpe, 7.50);
}

#[tokio::test]
async fn test_top_exercises_view() {
    let out = engine().top_exercises(AthleteId::new(1)).await.unwrap();
    assert_eq!(out.len(), 2);
    // Squat: 5*10*120 + 4*10*125 = 11000; pull-ups are weightless.
    assert_eq!(out[0].exercise_name, "Barbell Squat");
    assert_eq!(out[0].total_volume, 11000.00);
    assert_eq!(out[0].rank, 1);
    assert_eq!(out[1].total_volume, 0.00);
    assert_eq!(out[1].rank, 2);
}

#[tokio::test]
async fn test_program_leaderboard_view() {
    let out = engine()
        .program_leaderboard(TrainerId::new(9))
        .await
        .unwrap();
    assert_eq!(out.len(), 2);
    // Athlete 1 logged two distinct sessions, athlete 2 one.
    assert_eq!(out[0].athlete_name, "Jordan Miles");
    assert_eq!(out[0].logged_sessions, 2);
    assert_eq!(out[0].rank, 1);
    assert_eq!(out[1].athlete_name, "Sam Okafor");
    assert_eq!(out[1].rank, 2);
    assert_eq!(out[0].program_name, "Off-Season Conditioning");
}

#[tokio::test]
async fn test_leaderboard_cutoff_from_config() {
    let config = AnalyticsConfig {
        top_exercise_count: 3,
        leaderboard_cutoff: 1,
    };
    let engine = AnalyticsEngine::with_config(fixture_store(), config);
    let out = engine
        .program_leaderboard(TrainerId::new(9))
        .await
        .unwrap();
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].rank, 1);
}

#[tokio::test]
async fn test_measurement_history_ordered_ascending() {
    let out = engine()
        .measurement_history(AthleteId::new(1))
        .await
        .unwrap();
    assert_eq!(out.len(), 2);
    assert_eq!(out[0].measurement_date, day(6, 15));
    assert_eq!(out[1].measurement_date, day(7, 15));
}

#[tokio::test]
async fn test_medical_history_view() {
    let out = engine().medical_history(AthleteId::new(1)).await.unwrap();
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].examiner, "Dr. Reyes");
    assert_eq!(out[0].clearance, ClearanceStatus::Cleared);
}

#[tokio::test]
async fn test_enrolled_programs_view() {
    let out = engine().enrolled_programs(AthleteId::new(1)).await.unwrap();
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].program_id, ProgramId::new(4));
}

#[tokio::test]
async fn test_views_are_idempotent() {
    let engine = engine();
    let first = engine.session_adherence(AthleteId::new(1)).await.unwrap();
    let again = engine.session_adherence(AthleteId::new(1)).await.unwrap();
    assert_eq!(first, again);

    let json_first = serde_json::to_string(&first).unwrap();
    let json_again = serde_json::to_string(&again).unwrap();
    assert_eq!(json_first, json_again);
}

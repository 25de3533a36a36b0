// ABOUTME: Read-only record rows consumed by the analytics engine
// ABOUTME: Performance logs, planned sets, sessions, programs, enrollments, and history rows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Forge Fitness Analytics

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{AthleteId, ExerciseId, ProgramId, SessionId, TrainerId};

/// One logged exercise attempt.
///
/// Each row is a distinct event, not an upsert: the same
/// (athlete, session, exercise) triple may appear any number of times.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceLog {
    /// Athlete who logged the attempt
    pub athlete_id: AthleteId,
    /// Session during which the attempt was performed
    pub session_id: SessionId,
    /// Exercise performed
    pub exercise_id: ExerciseId,
    /// Sets actually completed
    pub completed_sets: u32,
    /// Repetitions actually completed
    pub completed_reps: u32,
    /// Weight used in kilograms; bodyweight work logs no weight
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_used: Option<f64>,
    /// Rate of perceived exertion on the 1-10 Borg scale
    pub perceived_exertion: u8,
    /// When the attempt was logged
    pub log_time: DateTime<Utc>,
}

/// Planned workload for one exercise within one session.
///
/// Unique per (session, exercise); the adherence denominator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedSet {
    /// Session the plan belongs to
    pub session_id: SessionId,
    /// Planned exercise
    pub exercise_id: ExerciseId,
    /// Sets prescribed by the trainer
    pub planned_sets: u32,
    /// Repetitions prescribed per set
    pub planned_reps: u32,
    /// Prescribed rest between sets (seconds)
    pub rest_seconds: u32,
}

/// Prescribed intensity of a workout session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntensityLevel {
    /// Recovery / technique work
    Low,
    /// Standard training load
    Medium,
    /// Peak or test session
    High,
}

/// One scheduled workout session inside a training program
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutSession {
    /// Session identifier
    pub session_id: SessionId,
    /// Program this session belongs to
    pub program_id: ProgramId,
    /// Calendar date of the session
    pub session_date: NaiveDate,
    /// Planned duration in minutes
    pub duration_minutes: u32,
    /// Prescribed intensity
    pub intensity: IntensityLevel,
}

/// Exercise difficulty grade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Accessible to beginners
    Easy,
    /// Requires some training history
    Medium,
    /// Advanced movement
    Hard,
}

/// Catalog entry for an exercise
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    /// Exercise identifier
    pub exercise_id: ExerciseId,
    /// Display name, e.g. "Barbell Squat"
    pub name: String,
    /// Category, e.g. "Strength", "Cardio", "Core"
    pub category: String,
    /// Equipment required, e.g. "Barbell, Rack"
    pub equipment: String,
    /// Difficulty grade
    pub difficulty: Difficulty,
}

/// A training program owned by a trainer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingProgram {
    /// Program identifier
    pub program_id: ProgramId,
    /// Display name, e.g. "Off-Season Conditioning"
    pub name: String,
    /// Difficulty grade of the program as a whole
    pub difficulty: Difficulty,
    /// Free-text training goal
    pub goal: String,
    /// First day of the program
    pub start_date: NaiveDate,
    /// Last day of the program
    pub end_date: NaiveDate,
    /// Trainer who created and owns the program
    pub created_by: TrainerId,
}

/// Completion state of a program enrollment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnrollmentStatus {
    /// Athlete is currently training under the program
    Ongoing,
    /// Program finished
    Completed,
    /// Athlete left before completion
    Dropped,
}

/// Membership of an athlete in a training program
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramEnrollment {
    /// Enrolled athlete
    pub athlete_id: AthleteId,
    /// Program enrolled in
    pub program_id: ProgramId,
    /// Date the enrollment was created
    pub enrollment_date: NaiveDate,
    /// Current completion state
    pub status: EnrollmentStatus,
}

/// Display profile of an athlete (identity join the store performs for us)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AthleteProfile {
    /// Athlete identifier
    pub athlete_id: AthleteId,
    /// Full display name, e.g. "Jordan Miles"
    pub full_name: String,
    /// Sport the athlete competes in, e.g. "Swimming"
    pub sports_branch: String,
}

/// One body measurement snapshot for an athlete
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyMeasurement {
    /// Measured athlete
    pub athlete_id: AthleteId,
    /// Date of the measurement
    pub measurement_date: NaiveDate,
    /// Height in centimeters
    pub height_cm: f64,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Body fat percentage
    pub body_fat_percentage: f64,
    /// Muscle mass in kilograms
    pub muscle_mass_kg: f64,
    /// Body mass index recorded at measurement time
    pub bmi: f64,
}

/// Medical clearance outcome of an assessment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClearanceStatus {
    /// Cleared for full training
    Cleared,
    /// Cleared with restrictions
    Restricted,
    /// Not cleared for training
    NotCleared,
}

/// One medical assessment of an athlete
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicalAssessment {
    /// Assessed athlete
    pub athlete_id: AthleteId,
    /// Display name of the examining clinician
    pub examiner: String,
    /// Date of the assessment
    pub assessment_date: NaiveDate,
    /// Kind of assessment, e.g. "Clearance Check"
    pub assessment_type: String,
    /// Clinician notes
    pub notes: String,
    /// Clearance outcome
    pub clearance: ClearanceStatus,
}

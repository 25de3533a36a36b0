// ABOUTME: Domain model module for the Forge analytics engine
// ABOUTME: Re-exports typed ids and read-only record rows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Forge Fitness Analytics

//! Read-only domain models.
//!
//! All rows are owned by the record store; the engine borrows slices of them
//! and never mutates or creates rows of its own.

/// Typed identifiers over raw store keys
pub mod ids;

/// Record rows consumed by the metric computations
pub mod records;

pub use ids::{AthleteId, ExerciseId, ProgramId, SessionId, TrainerId};
pub use records::{
    AthleteProfile, BodyMeasurement, ClearanceStatus, Difficulty, EnrollmentStatus, Exercise,
    IntensityLevel, MedicalAssessment, PerformanceLog, PlannedSet, ProgramEnrollment,
    TrainingProgram, WorkoutSession,
};

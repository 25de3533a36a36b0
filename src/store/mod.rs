// ABOUTME: Record store adapter boundary for the analytics engine
// ABOUTME: Typed async fetch trait over immutable row snapshots plus the store error type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Forge Fitness Analytics

//! Record store adapter boundary.
//!
//! The engine consumes rows through [`RecordStore`] and never mutates them.
//! Each fetch must return a sequence reflecting a single consistent point in
//! time relative to the fields the engine joins on; isolation across
//! concurrent writers is the adapter's responsibility, not the engine's.
//! Retry behavior, if any, also lives behind this boundary.

/// In-memory reference adapter for tests, demos, and embedding
pub mod memory;

use async_trait::async_trait;
use thiserror::Error;

use forge_core::errors::EngineError;
use forge_core::models::{
    AthleteId, AthleteProfile, BodyMeasurement, Exercise, ExerciseId, MedicalAssessment,
    PerformanceLog, PlannedSet, ProgramEnrollment, ProgramId, SessionId, TrainerId,
    TrainingProgram, WorkoutSession,
};

pub use memory::InMemoryRecordStore;

/// Result alias for record store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Failure reported by a record store adapter
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing store could not be reached
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// The store returned rows that do not form a consistent snapshot
    #[error("inconsistent snapshot: {0}")]
    InconsistentSnapshot(String),
}

impl From<StoreError> for EngineError {
    fn from(err: StoreError) -> Self {
        Self::store(err.to_string())
    }
}

/// Typed fetch interface supplying immutable row snapshots to the engine.
///
/// Implementations must scope each fetch to exactly the requested subject;
/// the engine never asks for unrelated tables.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Whether an athlete with this id exists
    async fn athlete_exists(&self, athlete_id: AthleteId) -> StoreResult<bool>;

    /// Whether a trainer with this id exists
    async fn trainer_exists(&self, trainer_id: TrainerId) -> StoreResult<bool>;

    /// All performance logs recorded by one athlete
    async fn logs_for_athlete(&self, athlete_id: AthleteId) -> StoreResult<Vec<PerformanceLog>>;

    /// All performance logs recorded against the given sessions
    async fn logs_for_sessions(&self, session_ids: &[SessionId])
        -> StoreResult<Vec<PerformanceLog>>;

    /// Exercise catalog rows for the given ids
    async fn exercises_by_id(&self, exercise_ids: &[ExerciseId]) -> StoreResult<Vec<Exercise>>;

    /// Planned sets belonging to the given sessions
    async fn planned_sets_for_sessions(
        &self,
        session_ids: &[SessionId],
    ) -> StoreResult<Vec<PlannedSet>>;

    /// Workout sessions for the given ids
    async fn sessions_by_id(&self, session_ids: &[SessionId]) -> StoreResult<Vec<WorkoutSession>>;

    /// Training programs owned by one trainer
    async fn programs_for_trainer(
        &self,
        trainer_id: TrainerId,
    ) -> StoreResult<Vec<TrainingProgram>>;

    /// Workout sessions belonging to the given programs
    async fn sessions_for_programs(
        &self,
        program_ids: &[ProgramId],
    ) -> StoreResult<Vec<WorkoutSession>>;

    /// Training programs for the given ids
    async fn programs_by_id(&self, program_ids: &[ProgramId])
        -> StoreResult<Vec<TrainingProgram>>;

    /// Program enrollments of one athlete
    async fn enrollments_for_athlete(
        &self,
        athlete_id: AthleteId,
    ) -> StoreResult<Vec<ProgramEnrollment>>;

    /// Display profiles for the given athletes
    async fn athletes_by_id(&self, athlete_ids: &[AthleteId])
        -> StoreResult<Vec<AthleteProfile>>;

    /// Body measurement history of one athlete
    async fn measurements_for_athlete(
        &self,
        athlete_id: AthleteId,
    ) -> StoreResult<Vec<BodyMeasurement>>;

    /// Medical assessment history of one athlete
    async fn assessments_for_athlete(
        &self,
        athlete_id: AthleteId,
    ) -> StoreResult<Vec<MedicalAssessment>>;
}

// ABOUTME: In-memory record store adapter over immutable row vectors
// ABOUTME: Reference RecordStore implementation used by tests, demos, and embedders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Forge Fitness Analytics

//! In-memory record store.
//!
//! Holds an immutable snapshot of every record collection. Because the
//! snapshot never changes after construction, every fetch trivially satisfies
//! the consistency requirement of the [`RecordStore`] contract.

use async_trait::async_trait;
use std::collections::HashSet;

use forge_core::models::{
    AthleteId, AthleteProfile, BodyMeasurement, Exercise, ExerciseId, MedicalAssessment,
    PerformanceLog, PlannedSet, ProgramEnrollment, ProgramId, SessionId, TrainerId,
    TrainingProgram, WorkoutSession,
};

use super::{RecordStore, StoreResult};

/// Immutable in-memory snapshot implementing [`RecordStore`]
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecordStore {
    athletes: Vec<AthleteProfile>,
    trainers: Vec<TrainerId>,
    exercises: Vec<Exercise>,
    programs: Vec<TrainingProgram>,
    sessions: Vec<WorkoutSession>,
    planned_sets: Vec<PlannedSet>,
    logs: Vec<PerformanceLog>,
    enrollments: Vec<ProgramEnrollment>,
    measurements: Vec<BodyMeasurement>,
    assessments: Vec<MedicalAssessment>,
}

impl InMemoryRecordStore {
    /// Start building a snapshot
    #[must_use]
    pub fn builder() -> InMemoryRecordStoreBuilder {
        InMemoryRecordStoreBuilder::default()
    }
}

/// Builder collecting the row snapshot for an [`InMemoryRecordStore`]
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecordStoreBuilder {
    store: InMemoryRecordStore,
}

impl InMemoryRecordStoreBuilder {
    /// Add athlete display profiles
    #[must_use]
    pub fn athletes(mut self, rows: impl IntoIterator<Item = AthleteProfile>) -> Self {
        self.store.athletes.extend(rows);
        self
    }

    /// Register trainer ids
    #[must_use]
    pub fn trainers(mut self, ids: impl IntoIterator<Item = TrainerId>) -> Self {
        self.store.trainers.extend(ids);
        self
    }

    /// Add exercise catalog rows
    #[must_use]
    pub fn exercises(mut self, rows: impl IntoIterator<Item = Exercise>) -> Self {
        self.store.exercises.extend(rows);
        self
    }

    /// Add training programs
    #[must_use]
    pub fn programs(mut self, rows: impl IntoIterator<Item = TrainingProgram>) -> Self {
        self.store.programs.extend(rows);
        self
    }

    /// Add workout sessions
    #[must_use]
    pub fn sessions(mut self, rows: impl IntoIterator<Item = WorkoutSession>) -> Self {
        self.store.sessions.extend(rows);
        self
    }

    /// Add planned sets
    #[must_use]
    pub fn planned_sets(mut self, rows: impl IntoIterator<Item = PlannedSet>) -> Self {
        self.store.planned_sets.extend(rows);
        self
    }

    /// Add performance logs
    #[must_use]
    pub fn logs(mut self, rows: impl IntoIterator<Item = PerformanceLog>) -> Self {
        self.store.logs.extend(rows);
        self
    }

    /// Add program enrollments
    #[must_use]
    pub fn enrollments(mut self, rows: impl IntoIterator<Item = ProgramEnrollment>) -> Self {
        self.store.enrollments.extend(rows);
        self
    }

    /// Add body measurements
    #[must_use]
    pub fn measurements(mut self, rows: impl IntoIterator<Item = BodyMeasurement>) -> Self {
        self.store.measurements.extend(rows);
        self
    }

    /// Add medical assessments
    #[must_use]
    pub fn assessments(mut self, rows: impl IntoIterator<Item = MedicalAssessment>) -> Self {
        self.store.assessments.extend(rows);
        self
    }

    /// Freeze the snapshot
    #[must_use]
    pub fn build(self) -> InMemoryRecordStore {
        self.store
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn athlete_exists(&self, athlete_id: AthleteId) -> StoreResult<bool> {
        Ok(self.athletes.iter().any(|a| a.athlete_id == athlete_id))
    }

    async fn trainer_exists(&self, trainer_id: TrainerId) -> StoreResult<bool> {
        Ok(self.trainers.contains(&trainer_id))
    }

    async fn logs_for_athlete(&self, athlete_id: AthleteId) -> StoreResult<Vec<PerformanceLog>> {
        Ok(self
            .logs
            .iter()
            .filter(|log| log.athlete_id == athlete_id)
            .cloned()
            .collect())
    }

    async fn logs_for_sessions(
        &self,
        session_ids: &[SessionId],
    ) -> StoreResult<Vec<PerformanceLog>> {
        let wanted: HashSet<SessionId> = session_ids.iter().copied().collect();
        Ok(self
            .logs
            .iter()
            .filter(|log| wanted.contains(&log.session_id))
            .cloned()
            .collect())
    }

    async fn exercises_by_id(&self, exercise_ids: &[ExerciseId]) -> StoreResult<Vec<Exercise>> {
        let wanted: HashSet<ExerciseId> = exercise_ids.iter().copied().collect();
        Ok(self
            .exercises
            .iter()
            .filter(|e| wanted.contains(&e.exercise_id))
            .cloned()
            .collect())
    }

    async fn planned_sets_for_sessions(
        &self,
        session_ids: &[SessionId],
    ) -> StoreResult<Vec<PlannedSet>> {
        let wanted: HashSet<SessionId> = session_ids.iter().copied().collect();
        Ok(self
            .planned_sets
            .iter()
            .filter(|p| wanted.contains(&p.session_id))
            .cloned()
            .collect())
    }

    async fn sessions_by_id(&self, session_ids: &[SessionId]) -> StoreResult<Vec<WorkoutSession>> {
        let wanted: HashSet<SessionId> = session_ids.iter().copied().collect();
        Ok(self
            .sessions
            .iter()
            .filter(|s| wanted.contains(&s.session_id))
            .cloned()
            .collect())
    }

    async fn programs_for_trainer(
        &self,
        trainer_id: TrainerId,
    ) -> StoreResult<Vec<TrainingProgram>> {
        Ok(self
            .programs
            .iter()
            .filter(|p| p.created_by == trainer_id)
            .cloned()
            .collect())
    }

    async fn sessions_for_programs(
        &self,
        program_ids: &[ProgramId],
    ) -> StoreResult<Vec<WorkoutSession>> {
        let wanted: HashSet<ProgramId> = program_ids.iter().copied().collect();
        Ok(self
            .sessions
            .iter()
            .filter(|s| wanted.contains(&s.program_id))
            .cloned()
            .collect())
    }

    async fn programs_by_id(
        &self,
        program_ids: &[ProgramId],
    ) -> StoreResult<Vec<TrainingProgram>> {
        let wanted: HashSet<ProgramId> = program_ids.iter().copied().collect();
        Ok(self
            .programs
            .iter()
            .filter(|p| wanted.contains(&p.program_id))
            .cloned()
            .collect())
    }

    async fn enrollments_for_athlete(
        &self,
        athlete_id: AthleteId,
    ) -> StoreResult<Vec<ProgramEnrollment>> {
        Ok(self
            .enrollments
            .iter()
            .filter(|e| e.athlete_id == athlete_id)
            .cloned()
            .collect())
    }

    async fn athletes_by_id(
        &self,
        athlete_ids: &[AthleteId],
    ) -> StoreResult<Vec<AthleteProfile>> {
        let wanted: HashSet<AthleteId> = athlete_ids.iter().copied().collect();
        Ok(self
            .athletes
            .iter()
            .filter(|a| wanted.contains(&a.athlete_id))
            .cloned()
            .collect())
    }

    async fn measurements_for_athlete(
        &self,
        athlete_id: AthleteId,
    ) -> StoreResult<Vec<BodyMeasurement>> {
        Ok(self
            .measurements
            .iter()
            .filter(|m| m.athlete_id == athlete_id)
            .cloned()
            .collect())
    }

    async fn assessments_for_athlete(
        &self,
        athlete_id: AthleteId,
    ) -> StoreResult<Vec<MedicalAssessment>> {
        Ok(self
            .assessments
            .iter()
            .filter(|a| a.athlete_id == athlete_id)
            .cloned()
            .collect())
    }
}

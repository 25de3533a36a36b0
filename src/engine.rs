// ABOUTME: Query facade for the analytics engine
// ABOUTME: Validates subjects, fetches minimal row sets, and dispatches to the metrics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Forge Fitness Analytics

//! Query facade.
//!
//! One call per analytic view. Every call follows the same discipline:
//!
//! 1. reject a malformed subject id (`InvalidArgument`),
//! 2. reject an unknown subject (`NotFound`) — an existing subject with zero
//!    records is a normal empty success, never an error,
//! 3. fetch the minimal row set the view needs from the record store,
//! 4. run the pure metric computation and return its ordered output.
//!
//! Each invocation operates on its own copy of fetched rows, so concurrent
//! invocations cannot interact.

use tracing::debug;

use forge_core::config::AnalyticsConfig;
use forge_core::errors::{EngineError, EngineResult};
use forge_core::models::{
    AthleteId, BodyMeasurement, MedicalAssessment, TrainerId, TrainingProgram,
};
use forge_metrics::{
    latest_per_exercise, program_leaderboard, session_adherence, top_exercises_by_volume,
    ExerciseVolume, LatestExerciseLog, LeaderboardEntry, SessionAdherence,
};

use crate::store::RecordStore;

/// The analytics engine facade over a record store adapter
#[derive(Debug, Clone)]
pub struct AnalyticsEngine<S> {
    store: S,
    config: AnalyticsConfig,
}

impl<S: RecordStore> AnalyticsEngine<S> {
    /// Create an engine with default configuration
    #[must_use]
    pub fn new(store: S) -> Self {
        Self {
            store,
            config: AnalyticsConfig::default(),
        }
    }

    /// Create an engine with explicit configuration
    #[must_use]
    pub const fn with_config(store: S, config: AnalyticsConfig) -> Self {
        Self { store, config }
    }

    /// The configuration in effect
    #[must_use]
    pub const fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    /// Most recent logged performance per exercise for one athlete.
    ///
    /// One row per exercise the athlete has ever logged, ordered by log time
    /// descending. An athlete with no logs yields an empty result.
    ///
    /// # Errors
    /// `InvalidArgument` for a malformed id, `NotFound` for an unknown
    /// athlete, `Store` on adapter failure.
    pub async fn latest_training(
        &self,
        athlete_id: AthleteId,
    ) -> EngineResult<Vec<LatestExerciseLog>> {
        self.ensure_athlete(athlete_id).await?;
        let logs = self.store.logs_for_athlete(athlete_id).await?;
        let exercise_ids = distinct(logs.iter().map(|log| log.exercise_id));
        let exercises = self.store.exercises_by_id(&exercise_ids).await?;
        debug!(%athlete_id, logs = logs.len(), "computing latest training view");
        latest_per_exercise(&logs, &exercises)
    }

    /// Completed-vs-planned adherence ratios per session for one athlete,
    /// ordered by session date descending.
    ///
    /// # Errors
    /// `InvalidArgument` for a malformed id, `NotFound` for an unknown
    /// athlete, `Store` on adapter failure, `Computation` when a log
    /// references a session the store did not return.
    pub async fn session_adherence(
        &self,
        athlete_id: AthleteId,
    ) -> EngineResult<Vec<SessionAdherence>> {
        self.ensure_athlete(athlete_id).await?;
        let logs = self.store.logs_for_athlete(athlete_id).await?;
        let session_ids = distinct(logs.iter().map(|log| log.session_id));
        let planned = self.store.planned_sets_for_sessions(&session_ids).await?;
        let sessions = self.store.sessions_by_id(&session_ids).await?;
        debug!(%athlete_id, logs = logs.len(), "computing session adherence view");
        session_adherence(&logs, &planned, &sessions)
    }

    /// Top exercises by total training volume for one athlete, dense-ranked
    /// with the configured cutoff.
    ///
    /// # Errors
    /// `InvalidArgument` for a malformed id, `NotFound` for an unknown
    /// athlete, `Store` on adapter failure.
    pub async fn top_exercises(&self, athlete_id: AthleteId) -> EngineResult<Vec<ExerciseVolume>> {
        self.ensure_athlete(athlete_id).await?;
        let logs = self.store.logs_for_athlete(athlete_id).await?;
        let exercise_ids = distinct(logs.iter().map(|log| log.exercise_id));
        let exercises = self.store.exercises_by_id(&exercise_ids).await?;
        debug!(%athlete_id, logs = logs.len(), "computing top exercises view");
        top_exercises_by_volume(&logs, &exercises, self.config.top_exercise_count)
    }

    /// Per-program athlete leaderboards across the programs owned by one
    /// trainer, competition-ranked with the configured cutoff.
    ///
    /// A trainer with no programs, or programs with no logs, yields an empty
    /// result.
    ///
    /// # Errors
    /// `InvalidArgument` for a malformed id, `NotFound` for an unknown
    /// trainer, `Store` on adapter failure, `Computation` on a broken
    /// name-lookup join.
    pub async fn program_leaderboard(
        &self,
        trainer_id: TrainerId,
    ) -> EngineResult<Vec<LeaderboardEntry>> {
        self.ensure_trainer(trainer_id).await?;
        let programs = self.store.programs_for_trainer(trainer_id).await?;
        let program_ids = distinct(programs.iter().map(|p| p.program_id));
        let sessions = self.store.sessions_for_programs(&program_ids).await?;
        let session_ids = distinct(sessions.iter().map(|s| s.session_id));
        let logs = self.store.logs_for_sessions(&session_ids).await?;
        let athlete_ids = distinct(logs.iter().map(|log| log.athlete_id));
        let athletes = self.store.athletes_by_id(&athlete_ids).await?;
        debug!(
            %trainer_id,
            programs = programs.len(),
            logs = logs.len(),
            "computing program leaderboard view"
        );
        program_leaderboard(
            &logs,
            &sessions,
            &programs,
            &athletes,
            self.config.leaderboard_cutoff,
        )
    }

    /// Body measurement history of one athlete, ordered by measurement date
    /// ascending.
    ///
    /// # Errors
    /// `InvalidArgument` for a malformed id, `NotFound` for an unknown
    /// athlete, `Store` on adapter failure.
    pub async fn measurement_history(
        &self,
        athlete_id: AthleteId,
    ) -> EngineResult<Vec<BodyMeasurement>> {
        self.ensure_athlete(athlete_id).await?;
        let mut rows = self.store.measurements_for_athlete(athlete_id).await?;
        rows.sort_by(|a, b| a.measurement_date.cmp(&b.measurement_date));
        Ok(rows)
    }

    /// Medical assessment history of one athlete, ordered by assessment date
    /// ascending.
    ///
    /// # Errors
    /// `InvalidArgument` for a malformed id, `NotFound` for an unknown
    /// athlete, `Store` on adapter failure.
    pub async fn medical_history(
        &self,
        athlete_id: AthleteId,
    ) -> EngineResult<Vec<MedicalAssessment>> {
        self.ensure_athlete(athlete_id).await?;
        let mut rows = self.store.assessments_for_athlete(athlete_id).await?;
        rows.sort_by(|a, b| a.assessment_date.cmp(&b.assessment_date));
        Ok(rows)
    }

    /// Training programs one athlete is enrolled in, ordered by program start
    /// date descending, then program id.
    ///
    /// # Errors
    /// `InvalidArgument` for a malformed id, `NotFound` for an unknown
    /// athlete, `Store` on adapter failure.
    pub async fn enrolled_programs(
        &self,
        athlete_id: AthleteId,
    ) -> EngineResult<Vec<TrainingProgram>> {
        self.ensure_athlete(athlete_id).await?;
        let enrollments = self.store.enrollments_for_athlete(athlete_id).await?;
        let program_ids = distinct(enrollments.iter().map(|e| e.program_id));
        let mut programs = self.store.programs_by_id(&program_ids).await?;
        programs.sort_by(|a, b| {
            b.start_date
                .cmp(&a.start_date)
                .then_with(|| a.program_id.cmp(&b.program_id))
        });
        Ok(programs)
    }

    async fn ensure_athlete(&self, athlete_id: AthleteId) -> EngineResult<()> {
        if !athlete_id.is_valid() {
            return Err(EngineError::invalid_argument(format!(
                "athlete id must be positive, got {athlete_id}"
            )));
        }
        if !self.store.athlete_exists(athlete_id).await? {
            return Err(EngineError::not_found(format!("athlete {athlete_id}")));
        }
        Ok(())
    }

    async fn ensure_trainer(&self, trainer_id: TrainerId) -> EngineResult<()> {
        if !trainer_id.is_valid() {
            return Err(EngineError::invalid_argument(format!(
                "trainer id must be positive, got {trainer_id}"
            )));
        }
        if !self.store.trainer_exists(trainer_id).await? {
            return Err(EngineError::not_found(format!("trainer {trainer_id}")));
        }
        Ok(())
    }
}

/// Sorted, deduplicated id list for a minimal follow-up fetch
fn distinct<T: Ord + Copy>(items: impl Iterator<Item = T>) -> Vec<T> {
    let mut out: Vec<T> = items.collect();
    out.sort_unstable();
    out.dedup();
    out
}

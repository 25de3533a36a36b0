// ABOUTME: Metric computations for the Forge performance analytics engine
// ABOUTME: Windowing primitives plus the four ranked/aggregated training views
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Forge Fitness Analytics

#![deny(unsafe_code)]

//! # Forge Metrics
//!
//! Pure, deterministic metric computations over immutable row snapshots.
//! Every function here is synchronous, performs no I/O, and holds no state
//! between invocations: identical input yields byte-identical ordered
//! output, and concurrent invocations cannot interact.
//!
//! The metrics are built on three generic windowing primitives
//! ([`window::row_number`], [`window::dense_rank`],
//! [`window::competition_rank`]) rather than ad hoc per-metric loops.

/// Generic partition/order/rank operators
pub mod window;

/// Most recent logged performance per exercise
pub mod latest;

/// Completed vs planned work per session
pub mod adherence;

/// Top exercises by training volume
pub mod volume;

/// Per-program athlete leaderboards
pub mod leaderboard;

pub use adherence::{session_adherence, SessionAdherence};
pub use latest::{latest_per_exercise, LatestExerciseLog};
pub use leaderboard::{program_leaderboard, LeaderboardEntry};
pub use volume::{top_exercises_by_volume, ExerciseVolume};
pub use window::{competition_rank, dense_rank, partition_ordered, row_number, Ranked};

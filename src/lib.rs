// ABOUTME: Main library entry point for the Forge performance analytics engine
// ABOUTME: Exposes the record store adapter, query facade, and logging setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Forge Fitness Analytics

#![deny(unsafe_code)]

//! # Forge Analytics
//!
//! A deterministic, read-only analytics engine for athletic training data.
//! Raw logged events (performance logs, planned sets, body measurements,
//! medical clearances) flow one way through the engine: record store rows →
//! windowing primitives → metric computation → ordered structured output.
//!
//! ## Views
//!
//! - **Latest training**: most recent logged performance per exercise
//! - **Session adherence**: completed vs planned work ratios per session
//! - **Top exercises**: per-athlete dense-ranked training volume
//! - **Program leaderboard**: per-program competition-ranked engagement
//! - **History views**: body measurement and medical assessment timelines
//!
//! ## Architecture
//!
//! - [`store`]: the record store adapter boundary; the engine never mutates
//!   rows and requires each fetched sequence to reflect a single consistent
//!   snapshot
//! - [`engine`]: the query facade validating subjects, fetching minimal row
//!   sets, and dispatching to the pure metrics in `forge_metrics`
//! - [`logging`]: tracing subscriber setup for binaries and services
//!
//! ## Example
//!
//! ```rust,no_run
//! use forge_analytics::engine::AnalyticsEngine;
//! use forge_analytics::store::InMemoryRecordStore;
//! use forge_analytics::models::AthleteId;
//!
//! # async fn run() -> forge_analytics::errors::EngineResult<()> {
//! let store = InMemoryRecordStore::builder().build();
//! let engine = AnalyticsEngine::new(store);
//! let latest = engine.latest_training(AthleteId::new(7)).await?;
//! println!("{} exercises on record", latest.len());
//! # Ok(())
//! # }
//! ```

// Re-export the workspace crates so callers need a single dependency.
pub use forge_core::config;
pub use forge_core::errors;
pub use forge_core::models;
pub use forge_core::numeric;
pub use forge_metrics as metrics;

/// Query facade dispatching validated requests to the metric computations
pub mod engine;

/// Structured logging configuration for binaries and embedding services
pub mod logging;

/// Record store adapter boundary and the in-memory reference adapter
pub mod store;

pub use engine::AnalyticsEngine;
pub use store::{InMemoryRecordStore, RecordStore, StoreError, StoreResult};

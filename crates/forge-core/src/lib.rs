// ABOUTME: Core domain types for the Forge performance analytics engine
// ABOUTME: Foundation crate with record rows, typed ids, error taxonomy, and analytics config
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Forge Fitness Analytics

#![deny(unsafe_code)]

//! # Forge Core
//!
//! Foundation crate providing the shared domain vocabulary of the Forge
//! analytics workspace. This crate changes infrequently, which keeps
//! incremental compilation cheap for the crates built on top of it.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `EngineError` and `ErrorCode`
//! - **models**: Read-only record rows and typed ids owned by the record store
//! - **config**: Analytics tunables (`top 3`, `top 5` cutoffs) with env overrides
//! - **numeric**: Shared rounding helpers matching SQL `ROUND` semantics

/// Unified error handling with standard error codes
pub mod errors;

/// Read-only record rows and typed identifiers
pub mod models;

/// Analytics configuration with environment overrides
pub mod config;

/// Numeric helpers shared by all metric computations
pub mod numeric;

pub use config::AnalyticsConfig;
pub use errors::{EngineError, EngineResult, ErrorCode};

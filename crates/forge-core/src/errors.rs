// ABOUTME: Unified error handling for the Forge analytics engine
// ABOUTME: Defines EngineError taxonomy, stable error codes, and result alias
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Forge Fitness Analytics

//! # Unified Error Handling
//!
//! Every fallible operation in the engine returns [`EngineResult`]. The
//! taxonomy is deliberately small:
//!
//! - [`EngineError::InvalidArgument`] — malformed subject identifier, caught
//!   by the query facade before any computation runs
//! - [`EngineError::NotFound`] — well-formed identifier with no matching
//!   subject; distinct from "exists but has zero records", which is a normal
//!   empty-result success
//! - [`EngineError::Computation`] — invariant violation inside a metric
//!   (e.g. a performance log referencing a session the store never returned)
//! - [`EngineError::Store`] — record store adapter failure
//!
//! Undefined ratios (zero planned-work denominator) are values in the output
//! domain, never errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result alias used throughout the engine
pub type EngineResult<T> = Result<T, EngineError>;

/// Stable error codes surfaced to the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Subject identifier is syntactically malformed
    #[serde(rename = "INVALID_ARGUMENT")]
    InvalidArgument,
    /// Subject identifier is well-formed but matches no athlete/trainer/program
    #[serde(rename = "NOT_FOUND")]
    NotFound,
    /// Internal invariant violated during a metric computation
    #[serde(rename = "COMPUTATION_ERROR")]
    ComputationError,
    /// Record store adapter failed to produce a consistent row set
    #[serde(rename = "STORE_ERROR")]
    StoreError,
}

impl ErrorCode {
    /// HTTP status a presentation layer should map this code to
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            Self::InvalidArgument => 400,
            Self::NotFound => 404,
            Self::ComputationError | Self::StoreError => 500,
        }
    }
}

/// Error type for all engine operations
#[derive(Debug, Error)]
pub enum EngineError {
    /// Malformed subject identifier
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Subject does not exist
    #[error("not found: {0}")]
    NotFound(String),

    /// Invariant violation during aggregation; should not occur on valid input
    #[error("computation error: {0}")]
    Computation(String),

    /// Failure reported by the record store adapter
    #[error("record store error: {0}")]
    Store(String),
}

impl EngineError {
    /// Create an [`EngineError::InvalidArgument`]
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create an [`EngineError::NotFound`]
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create an [`EngineError::Computation`]
    pub fn computation(msg: impl Into<String>) -> Self {
        Self::Computation(msg.into())
    }

    /// Create an [`EngineError::Store`]
    pub fn store(msg: impl Into<String>) -> Self {
        Self::Store(msg.into())
    }

    /// Stable code for this error
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidArgument(_) => ErrorCode::InvalidArgument,
            Self::NotFound(_) => ErrorCode::NotFound,
            Self::Computation(_) => ErrorCode::ComputationError,
            Self::Store(_) => ErrorCode::StoreError,
        }
    }
}

// ABOUTME: Structured logging configuration for binaries and embedding services
// ABOUTME: tracing-subscriber setup with env-filter and selectable output format
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Forge Fitness Analytics

//! Structured logging setup.
//!
//! The engine itself only emits `tracing` events; installing a subscriber is
//! the host's job. Binaries and services that have no subscriber of their
//! own can use [`init_logging`], driven by `RUST_LOG` with a configurable
//! fallback.

use anyhow::Result;
use std::io;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Output format for log events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable multi-line output
    Pretty,
    /// Single-line output for terminals and CI
    #[default]
    Compact,
    /// Newline-delimited JSON for log shippers
    Json,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset, e.g. `"info"`
    pub default_filter: String,
    /// Output format
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default_filter: "info".to_owned(),
            format: LogFormat::Compact,
        }
    }
}

/// Install a global tracing subscriber.
///
/// # Errors
/// Returns an error when a global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_filter.clone()));

    match config.format {
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().pretty().with_writer(io::stderr))
            .try_init()?,
        LogFormat::Compact => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().compact().with_writer(io::stderr))
            .try_init()?,
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(io::stderr))
            .try_init()?,
    }
    Ok(())
}

// ABOUTME: Tests for environment-driven analytics configuration
// ABOUTME: Covers defaults, overrides, and rejection of malformed cutoff values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Forge Fitness Analytics

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use serial_test::serial;

use forge_analytics::config::{
    AnalyticsConfig, ENV_LEADERBOARD_CUTOFF, ENV_TOP_EXERCISES,
};
use forge_analytics::errors::EngineError;

fn clear_env() {
    std::env::remove_var(ENV_TOP_EXERCISES);
    std::env::remove_var(ENV_LEADERBOARD_CUTOFF);
}

#[test]
#[serial]
fn test_defaults_without_env() {
    clear_env();
    let config = AnalyticsConfig::from_env().unwrap();
    assert_eq!(config.top_exercise_count, 3);
    assert_eq!(config.leaderboard_cutoff, 5);
}

#[test]
#[serial]
fn test_env_overrides() {
    clear_env();
    std::env::set_var(ENV_TOP_EXERCISES, "7");
    std::env::set_var(ENV_LEADERBOARD_CUTOFF, "10");
    let config = AnalyticsConfig::from_env().unwrap();
    clear_env();
    assert_eq!(config.top_exercise_count, 7);
    assert_eq!(config.leaderboard_cutoff, 10);
}

#[test]
#[serial]
fn test_partial_override_keeps_other_default() {
    clear_env();
    std::env::set_var(ENV_LEADERBOARD_CUTOFF, "8");
    let config = AnalyticsConfig::from_env().unwrap();
    clear_env();
    assert_eq!(config.top_exercise_count, 3);
    assert_eq!(config.leaderboard_cutoff, 8);
}

#[test]
#[serial]
fn test_non_numeric_value_is_invalid_argument() {
    clear_env();
    std::env::set_var(ENV_TOP_EXERCISES, "three");
    let err = AnalyticsConfig::from_env().unwrap_err();
    clear_env();
    assert!(matches!(err, EngineError::InvalidArgument(_)));
}

#[test]
#[serial]
fn test_zero_cutoff_is_invalid_argument() {
    clear_env();
    std::env::set_var(ENV_LEADERBOARD_CUTOFF, "0");
    let err = AnalyticsConfig::from_env().unwrap_err();
    clear_env();
    assert!(matches!(err, EngineError::InvalidArgument(_)));
}

#[test]
fn test_default_impl_matches_documented_defaults() {
    let config = AnalyticsConfig::default();
    assert_eq!(config.top_exercise_count, 3);
    assert_eq!(config.leaderboard_cutoff, 5);
}

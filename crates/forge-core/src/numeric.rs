// ABOUTME: Numeric helpers shared by the metric computations
// ABOUTME: Two-decimal rounding with SQL ROUND (half away from zero) semantics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Forge Fitness Analytics

//! Shared numeric helpers.

/// Round to two decimal places, half away from zero.
///
/// Matches SQL `ROUND(x, 2)`, the contract for every numeric output of the
/// engine. `f64::round` already rounds half away from zero.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Mean of an iterator of f64 values; `None` for an empty iterator.
#[must_use]
pub fn mean(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let mut sum = 0.0;
    let mut count = 0_u64;
    for v in values {
        sum += v;
        count += 1;
    }
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

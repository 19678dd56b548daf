// ABOUTME: Rounding conventions for one-decimal weight values
// ABOUTME: Half-up (browser Math.round), half-away-from-zero and banker's rounding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use routine_core::errors::AppError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Scale for one decimal place
const TENTHS: f64 = 10.0;

/// Rounding convention applied to derived weights
///
/// The conventions only disagree on exact `.x5` ties, and half-up and
/// half-away-from-zero only disagree on negative ties:
///
/// | value  | `HalfUp` | `HalfAwayFromZero` | `HalfEven` |
/// |--------|----------|--------------------|------------|
/// | 2.25   | 2.3      | 2.3                | 2.2        |
/// | -2.25  | -2.2     | -2.3               | -2.2       |
///
/// Binary floating point rarely lands exactly on a tie, so `26.62` rounds to
/// `26.6` under all three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// `floor(x * 10 + 0.5) / 10`, the convention of JavaScript's `Math.round`
    #[default]
    HalfUp,
    /// Ties move away from zero (`f64::round`)
    HalfAwayFromZero,
    /// Ties move to the even neighbour
    HalfEven,
}

impl RoundingMode {
    /// Round `value` to one decimal place
    ///
    /// Values too large to scale by ten have no fractional digits left and are
    /// returned as they are.
    #[must_use]
    pub fn round_tenth(self, value: f64) -> f64 {
        let scaled = value * TENTHS;
        if !scaled.is_finite() {
            return value;
        }
        let rounded = match self {
            Self::HalfUp => (scaled + 0.5).floor(),
            Self::HalfAwayFromZero => scaled.round(),
            Self::HalfEven => scaled.round_ties_even(),
        };
        rounded / TENTHS
    }

    /// Get mode name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::HalfUp => "half_up",
            Self::HalfAwayFromZero => "half_away_from_zero",
            Self::HalfEven => "half_even",
        }
    }
}

impl FromStr for RoundingMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "half_up" | "up" => Ok(Self::HalfUp),
            "half_away_from_zero" | "away" => Ok(Self::HalfAwayFromZero),
            "half_even" | "even" | "bankers" => Ok(Self::HalfEven),
            other => Err(AppError::invalid_input(format!(
                "Unknown rounding mode: '{other}'. Valid options: half_up, half_away_from_zero, half_even"
            ))),
        }
    }
}

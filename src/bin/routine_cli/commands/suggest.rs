// ABOUTME: Weight suggestion command for routine-cli
// ABOUTME: Compounds a percent over the 12-10-8-8-6 pyramid from a first-series weight
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use trainer_routines::config::WeightConfig;
use trainer_routines::constants::pyramid::STEP_COUNT;
use trainer_routines::errors::{AppError, AppResult};
use trainer_routines::intelligence::{InvalidWeightPolicy, RoundingMode, WeightProgression};

use crate::helpers::display::display_suggestion;

/// Print suggested weights for every series
pub fn run(
    base: &str,
    percent: f64,
    rounding: Option<RoundingMode>,
    weights: WeightConfig,
) -> AppResult<()> {
    let suggestion = suggestion(base, percent, rounding.unwrap_or(weights.rounding))?;
    display_suggestion(&suggestion, percent);
    Ok(())
}

/// Weights for every series; a bad base is always an error here since a CLI
/// call has no previous weights to keep
fn suggestion(base: &str, percent: f64, rounding: RoundingMode) -> AppResult<[String; STEP_COUNT]> {
    let progression = WeightProgression::new(percent)?.with_rounding(rounding);
    progression
        .suggest_with_policy(base, InvalidWeightPolicy::Strict)?
        .ok_or_else(|| AppError::invalid_input(format!("base weight '{base}' is not a number")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use trainer_routines::errors::ErrorCode;

    #[test]
    fn test_suggestion_uses_requested_rounding() {
        assert_eq!(
            suggestion("20", 10.0, RoundingMode::HalfUp).unwrap(),
            ["20", "22", "24.2", "26.6", "29.3"]
        );
    }

    #[test]
    fn test_bad_base_is_reported_even_under_lenient_config() {
        let err = suggestion("abc", 10.0, RoundingMode::HalfUp).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
    }

    #[test]
    fn test_non_finite_percent_is_reported() {
        let err = suggestion("20", f64::NAN, RoundingMode::HalfUp).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
    }
}

// ABOUTME: Pyramidal weight suggestion engine compounding a percent across five series
// ABOUTME: Lenient weight parsing with comma decimals and an explicit invalid-input policy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::rounding::RoundingMode;
use routine_core::constants::pyramid::STEP_COUNT;
use routine_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::debug;

/// What to do with weight text that does not parse as a number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidWeightPolicy {
    /// Suggestion leaves existing weights untouched; submission coerces to `0`
    #[default]
    Lenient,
    /// Both operations return `InvalidInput`
    Strict,
}

impl FromStr for InvalidWeightPolicy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lenient" | "ignore" => Ok(Self::Lenient),
            "strict" | "reject" => Ok(Self::Strict),
            other => Err(AppError::invalid_input(format!(
                "Unknown invalid-weight policy: '{other}'. Valid options: lenient, strict"
            ))),
        }
    }
}

/// Parse free-text weight, accepting `,` as decimal separator
///
/// Like a browser's `parseFloat`, the longest numeric prefix is used, so
/// `"35kg"` reads as `35`. Returns `None` when there is no numeric prefix or
/// the value is not finite.
#[must_use]
pub fn parse_weight(text: &str) -> Option<f64> {
    let normalized = text.trim().replace(',', ".");
    numeric_prefix(&normalized)
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Longest prefix of `s` shaped like `[+-]digits[.digits][e[+-]digits]`
fn numeric_prefix(s: &str) -> &str {
    let bytes = s.as_bytes();
    let is_digit_at = |i: usize| bytes.get(i).is_some_and(u8::is_ascii_digit);

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_start = end;
    while is_digit_at(end) {
        end += 1;
    }
    let mut digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let mut frac_end = end + 1;
        while is_digit_at(frac_end) {
            frac_end += 1;
        }
        let frac_digits = frac_end - end - 1;
        if digits + frac_digits > 0 {
            digits += frac_digits;
            end = frac_end;
        }
    }
    if digits == 0 {
        return "";
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while is_digit_at(exp_end) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }
    &s[..end]
}

/// Render a weight the way it is stored in the draft (`22.0` → `"22"`)
#[must_use]
pub fn format_weight(value: f64) -> String {
    value.to_string()
}

/// Compounding weight progression for the five pyramid series
///
/// Series 0 is the base weight untouched; series `i` is
/// `base * (1 + percent / 100)^i` rounded to one decimal.
///
/// # Example
///
/// ```rust
/// use routine_intelligence::algorithms::WeightProgression;
///
/// let progression = WeightProgression::new(10.0).unwrap();
/// let weights = progression.suggest("20").unwrap();
/// assert_eq!(weights, ["20", "22", "24.2", "26.6", "29.3"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightProgression {
    percent: f64,
    rounding: RoundingMode,
}

impl WeightProgression {
    /// Build a progression for a percent increment
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `percent` is NaN or infinite.
    pub fn new(percent: f64) -> AppResult<Self> {
        if !percent.is_finite() {
            return Err(AppError::invalid_input(format!(
                "percent increment must be a finite number, got {percent}"
            )));
        }
        Ok(Self {
            percent,
            rounding: RoundingMode::default(),
        })
    }

    /// Use a different rounding convention for derived series
    #[must_use]
    pub const fn with_rounding(mut self, rounding: RoundingMode) -> Self {
        self.rounding = rounding;
        self
    }

    /// Percent increment
    #[must_use]
    pub const fn percent(&self) -> f64 {
        self.percent
    }

    /// Rounding convention
    #[must_use]
    pub const fn rounding(&self) -> RoundingMode {
        self.rounding
    }

    /// Numeric weights for every series from a parsed base
    #[must_use]
    pub fn progress(&self, base: f64) -> [f64; STEP_COUNT] {
        let factor = 1.0 + self.percent / 100.0;
        let mut weights = [base; STEP_COUNT];
        for (step, weight) in weights.iter_mut().enumerate().skip(1) {
            // step < STEP_COUNT, always fits in i32
            #[allow(clippy::cast_possible_wrap)]
            let exponent = step as i32;
            *weight = self.rounding.round_tenth(base * factor.powi(exponent));
        }
        weights
    }

    /// Suggested weights, or the reason there are none
    ///
    /// A base so large that a later series overflows `f64` yields no
    /// suggestion rather than an `inf` cell.
    fn try_suggest(&self, base_text: &str) -> AppResult<[String; STEP_COUNT]> {
        let base = parse_weight(base_text).ok_or_else(|| {
            AppError::invalid_input(format!("base weight '{base_text}' is not a number"))
        })?;
        let weights = self.progress(base);
        if weights.iter().any(|weight| !weight.is_finite()) {
            return Err(AppError::out_of_range(format!(
                "base weight '{base_text}' at {}% overflows the pyramid",
                self.percent
            )));
        }
        Ok(weights.map(format_weight))
    }

    /// Suggested weight text for every series
    ///
    /// Returns `None` if the base does not parse or a derived series overflows.
    #[must_use]
    pub fn suggest(&self, base_text: &str) -> Option<[String; STEP_COUNT]> {
        match self.try_suggest(base_text) {
            Ok(weights) => Some(weights),
            Err(e) => {
                debug!(base = base_text, reason = %e.message, "no suggestion");
                None
            }
        }
    }

    /// Suggest under an explicit invalid-input policy
    ///
    /// # Errors
    ///
    /// With [`InvalidWeightPolicy::Strict`], returns `InvalidInput` when the base
    /// weight does not parse and `ValueOutOfRange` when a derived series
    /// overflows. With `Lenient` this never fails and yields `None`.
    pub fn suggest_with_policy(
        &self,
        base_text: &str,
        policy: InvalidWeightPolicy,
    ) -> AppResult<Option<[String; STEP_COUNT]>> {
        match (self.try_suggest(base_text), policy) {
            (Ok(weights), _) => Ok(Some(weights)),
            (Err(e), InvalidWeightPolicy::Strict) => Err(e),
            (Err(_), InvalidWeightPolicy::Lenient) => Ok(None),
        }
    }
}

/// Suggest the five pyramid weights from a base weight text and a percent
///
/// Uses half-up rounding. Returns `None`, leaving the caller's weights as they
/// were, when the base does not parse or the percent is not finite.
#[must_use]
pub fn suggest_weights(base_text: &str, percent: f64) -> Option<[String; STEP_COUNT]> {
    WeightProgression::new(percent)
        .ok()
        .and_then(|progression| progression.suggest(base_text))
}

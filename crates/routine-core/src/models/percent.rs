// ABOUTME: Percent increment presets offered by the routine builder
// ABOUTME: Parsing and display for the 5 / 7.5 / 10 percent shortcuts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Preset percent increments
///
/// Any finite percent is accepted by the engine; these are the shortcuts the
/// builder shows next to the numeric field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PercentPreset {
    /// 5 %
    Five,
    /// 7.5 %, the seed default
    SevenAndHalf,
    /// 10 %
    Ten,
}

impl PercentPreset {
    /// All presets in display order
    pub const ALL: [Self; 3] = [Self::Five, Self::SevenAndHalf, Self::Ten];

    /// Numeric percent
    #[must_use]
    pub const fn value(self) -> f64 {
        match self {
            Self::Five => 5.0,
            Self::SevenAndHalf => 7.5,
            Self::Ten => 10.0,
        }
    }
}

impl fmt::Display for PercentPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.value())
    }
}

impl FromStr for PercentPreset {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().trim_end_matches('%').replace(',', ".").as_str() {
            "5" | "5.0" | "five" => Ok(Self::Five),
            "7.5" | "seven_and_half" => Ok(Self::SevenAndHalf),
            "10" | "10.0" | "ten" => Ok(Self::Ten),
            other => Err(AppError::invalid_input(format!(
                "Unknown percent preset: '{other}'. Valid options: 5, 7.5, 10"
            ))),
        }
    }
}

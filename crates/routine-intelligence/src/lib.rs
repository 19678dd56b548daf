// ABOUTME: Weight progression engine for the trainer routine builder
// ABOUTME: Pure numeric algorithms with no I/O, shared by the session layer and the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Routine Intelligence
//!
//! Given the weight a trainer enters for the first series of a 12-10-8-8-6
//! pyramid, derive plausible loads for the remaining four series by compounding
//! a percent increment. Everything here is synchronous and allocation-light; it
//! runs inside a single UI or CLI event.

/// Weight suggestion, parsing and rounding algorithms
pub mod algorithms;

pub use algorithms::{
    format_weight, parse_weight, suggest_weights, InvalidWeightPolicy, RoundingMode,
    WeightProgression,
};

// ABOUTME: Unified error types re-exported from routine-core
// ABOUTME: Keeps `trainer_routines::errors` as the single import path for callers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use routine_core::errors::*;

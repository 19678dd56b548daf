// ABOUTME: Application constants re-exported from routine-core
// ABOUTME: Pyramid scheme, percent defaults, storage names and endpoint paths
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use routine_core::constants::*;

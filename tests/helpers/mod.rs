// ABOUTME: Shared test helpers and utilities for integration tests
// ABOUTME: Exports the in-process fake profile/routine API and draft fixtures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

pub mod fake_api;
pub mod fixtures;

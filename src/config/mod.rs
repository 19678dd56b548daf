// ABOUTME: Configuration management module for the routine builder
// ABOUTME: Environment-only configuration for endpoints, storage and weight policies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! All settings come from environment variables; there is no config file.

/// Environment and endpoint configuration
pub mod environment;

pub use environment::{ApiConfig, BuilderConfig, WeightConfig};

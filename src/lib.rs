// ABOUTME: Main library entry point for the trainer routine builder
// ABOUTME: Pyramidal weight suggestions, trainer default settings and routine submission
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Trainer Routines
//!
//! Library behind the `routine-cli` tool. A trainer composes a routine for a
//! client; exercises can switch to a fixed 12-10-8-8-6 rep pyramid, in which
//! case the weight entered for the first series is compounded by a percent
//! increment to suggest the other four. The trainer's default percent is kept
//! both on the device and in the remote trainer profile.
//!
//! ## Modules
//!
//! - **routines**: Builder session, payload serialization, routine API client
//! - **settings**: Default percent stores and their reconciliation
//! - **config**: Environment-based configuration
//! - **logging**: `tracing` subscriber setup
//! - **http_client**: Shared `reqwest` client
//!
//! Domain types and the weight engine live in the `routine-core` and
//! `routine-intelligence` workspace crates and are re-exported here.

/// Environment-based configuration
pub mod config;

/// Application constants
pub mod constants;

/// Unified error types
pub mod errors;

/// Shared HTTP client
pub mod http_client;

/// Structured logging setup
pub mod logging;

/// Routine drafting, serialization and submission
pub mod routines;

/// Trainer default percent storage
pub mod settings;

/// Domain models from `routine-core`
pub use routine_core::models;

/// Weight progression engine from `routine-intelligence`
pub use routine_intelligence as intelligence;

// ABOUTME: Core types and constants for the trainer routine builder
// ABOUTME: Foundation crate with error handling, pyramid constants and routine draft models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Routine Core
//!
//! Foundation crate providing shared types and constants for the routine
//! builder. It has no async or I/O dependencies so the algorithm crate and the
//! main crate can both build on it.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Pyramid scheme, percent defaults, storage and endpoint names
//! - **models**: Exercise rows, the pyramidal toggle, drafts and wire payloads

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`ExerciseEntry`, `RoutineDraft`, `RepsMode`, payloads)
pub mod models;

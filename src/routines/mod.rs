// ABOUTME: Routine drafting, serialization and submission
// ABOUTME: Session state for one trainer plus the payload serializer and the API client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Routine creation API client
pub mod client;
/// Draft to wire payload conversion
pub mod serialization;
/// Routine builder session
pub mod session;

pub use client::RoutineApiClient;
pub use serialization::{serialize_series_weights, PayloadSerializer, SeriesWeights};
pub use session::RoutineBuilderSession;

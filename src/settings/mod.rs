// ABOUTME: Trainer-scoped default percent increment storage
// ABOUTME: Store trait with local file, remote profile and in-memory adapters plus reconciliation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Trainer Settings
//!
//! Each trainer has one default percent increment that seeds every new
//! exercise. It lives in two places, the device-local settings file and the
//! remote trainer profile, and [`TrainerSettings`] reconciles them: the remote
//! value wins when present, otherwise the local value is pushed up.

use crate::errors::AppResult;
use async_trait::async_trait;
use uuid::Uuid;

/// Device-local JSON settings file
pub mod local;
/// In-memory store for tests and offline sessions
pub mod memory;
/// Remote trainer profile endpoint
pub mod remote;
/// Local/remote reconciliation policy
pub mod trainer_settings;

pub use local::LocalPercentStore;
pub use memory::InMemoryPercentStore;
pub use remote::RemotePercentStore;
pub use trainer_settings::TrainerSettings;

/// Storage backend for a trainer's default percent increment
#[async_trait]
pub trait DefaultPercentStore: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Read the stored default, `None` if this trainer has none yet
    async fn get(&self, trainer_id: Uuid) -> AppResult<Option<f64>>;

    /// Store the default for this trainer
    async fn set(&self, trainer_id: Uuid, percent: f64) -> AppResult<()>;
}

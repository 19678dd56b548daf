// ABOUTME: In-memory default percent store backed by a concurrent map
// ABOUTME: Used by tests and by sessions that run without local persistence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::DefaultPercentStore;
use crate::errors::AppResult;
use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

/// Process-local store; contents vanish with the process
#[derive(Debug, Default)]
pub struct InMemoryPercentStore {
    values: DashMap<Uuid, f64>,
}

impl InMemoryPercentStore {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one trainer's value
    #[must_use]
    pub fn with_value(trainer_id: Uuid, percent: f64) -> Self {
        let store = Self::default();
        store.values.insert(trainer_id, percent);
        store
    }

    /// Current value without going through the async trait
    #[must_use]
    pub fn peek(&self, trainer_id: Uuid) -> Option<f64> {
        self.values.get(&trainer_id).map(|entry| *entry)
    }
}

#[async_trait]
impl DefaultPercentStore for InMemoryPercentStore {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn get(&self, trainer_id: Uuid) -> AppResult<Option<f64>> {
        Ok(self.peek(trainer_id))
    }

    async fn set(&self, trainer_id: Uuid, percent: f64) -> AppResult<()> {
        self.values.insert(trainer_id, percent);
        Ok(())
    }
}

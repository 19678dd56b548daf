// ABOUTME: Re-exports command modules for routine-cli
// ABOUTME: Weight suggestion, draft preview/submission and default percent management
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod draft;
pub mod percent;
pub mod suggest;

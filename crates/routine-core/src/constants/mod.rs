// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pyramid scheme, percent defaults, storage keys and service names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into small domain modules rather than one flat list.

/// Pyramidal repetition scheme
pub mod pyramid {
    /// Number of series in the pyramid
    pub const STEP_COUNT: usize = 5;

    /// Repetition target for each series, heaviest load last
    pub const REPS: [u32; STEP_COUNT] = [12, 10, 8, 8, 6];

    /// Separator used when the sequence or its weights are rendered as one string
    pub const JOIN_SEPARATOR: &str = "-";
}

/// Percent increment defaults
pub mod percent {
    /// Seed value used when a trainer has never stored a default
    pub const SEED_DEFAULT: f64 = 7.5;
}

/// Local settings storage
pub mod storage {
    /// Directory created under the platform data dir
    pub const APP_DIR_NAME: &str = "trainer-routines";

    /// Settings file name inside the settings directory
    pub const SETTINGS_FILE: &str = "trainer_settings.json";
}

/// Remote API paths
pub mod endpoints {
    /// Routine creation collection
    pub const ROUTINES: &str = "routines";

    /// Trainer collection; the profile lives at `trainers/{id}/profile`
    pub const TRAINERS: &str = "trainers";

    /// Profile sub-resource
    pub const PROFILE: &str = "profile";
}

/// Service names used in logs and error messages
pub mod service_names {
    /// Name of this service
    pub const ROUTINE_BUILDER: &str = "trainer-routines";

    /// Remote trainer profile store
    pub const PROFILE_API: &str = "trainer-profile-api";

    /// Remote routine creation API
    pub const ROUTINE_API: &str = "routine-api";
}

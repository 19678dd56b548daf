// ABOUTME: Environment configuration for the routine builder
// ABOUTME: Reads API endpoints, timeouts, settings directory and weight policies from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration

use crate::constants::storage;
use anyhow::{bail, Context, Result};
use routine_intelligence::{InvalidWeightPolicy, RoundingMode};
use std::env;
use std::path::PathBuf;
use tracing::{info, warn};

/// Default base URL of the routine creation API
const DEFAULT_ROUTINE_API_BASE_URL: &str = "http://localhost:8081/api";

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default connection timeout in seconds
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Remote endpoints and credentials
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the routine creation API
    pub routine_base_url: String,
    /// Base URL of the trainer profile API
    pub profile_base_url: String,
    /// Bearer token sent with every remote call
    pub token: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,
}

/// Weight handling policies
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightConfig {
    /// Behaviour on unparseable weight text
    pub invalid_policy: InvalidWeightPolicy,
    /// Rounding convention for derived and submitted weights
    pub rounding: RoundingMode,
}

/// Complete builder configuration
#[derive(Debug, Clone)]
pub struct BuilderConfig {
    /// Remote API settings
    pub api: ApiConfig,
    /// Directory holding the local settings file
    pub settings_dir: PathBuf,
    /// Weight handling policies
    pub weights: WeightConfig,
}

impl BuilderConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric or enum variable does not parse, or if no
    /// settings directory can be determined
    pub fn from_env() -> Result<Self> {
        let routine_base_url = env_var_or("ROUTINE_API_BASE_URL", DEFAULT_ROUTINE_API_BASE_URL);
        let profile_base_url =
            env::var("PROFILE_API_BASE_URL").unwrap_or_else(|_| routine_base_url.clone());

        let api = ApiConfig {
            routine_base_url: trim_base(&routine_base_url),
            profile_base_url: trim_base(&profile_base_url),
            token: env::var("ROUTINE_API_TOKEN").ok().filter(|t| !t.is_empty()),
            timeout_secs: parse_env("HTTP_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?,
            connect_timeout_secs: parse_env(
                "HTTP_CONNECT_TIMEOUT_SECS",
                DEFAULT_CONNECT_TIMEOUT_SECS,
            )?,
        };

        let settings_dir = match env::var("ROUTINE_SETTINGS_DIR") {
            Ok(dir) => PathBuf::from(dir),
            Err(_) => dirs::data_dir()
                .context("no platform data directory; set ROUTINE_SETTINGS_DIR")?
                .join(storage::APP_DIR_NAME),
        };

        let weights = WeightConfig {
            invalid_policy: env_var_or("INVALID_WEIGHT_POLICY", "lenient")
                .parse()
                .context("INVALID_WEIGHT_POLICY")?,
            rounding: env_var_or("WEIGHT_ROUNDING_MODE", "half_up")
                .parse()
                .context("WEIGHT_ROUNDING_MODE")?,
        };

        let config = Self {
            api,
            settings_dir,
            weights,
        };
        config.validate()?;
        info!("Configuration loaded: {}", config.summary());
        Ok(config)
    }

    /// Validate endpoint URLs and timeouts
    ///
    /// # Errors
    ///
    /// Returns an error if a base URL is not http(s) or a timeout is zero
    pub fn validate(&self) -> Result<()> {
        for (name, url) in [
            ("ROUTINE_API_BASE_URL", &self.api.routine_base_url),
            ("PROFILE_API_BASE_URL", &self.api.profile_base_url),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                bail!("{name} must be an http(s) URL, got '{url}'");
            }
        }
        if self.api.timeout_secs == 0 || self.api.connect_timeout_secs == 0 {
            bail!("HTTP timeouts must be greater than zero");
        }
        if self.api.token.is_none() {
            warn!("ROUTINE_API_TOKEN is not set; remote calls are unauthenticated");
        }
        Ok(())
    }

    /// One-line summary for startup logs (never includes the token)
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "routines={} profile={} auth={} timeout={}s settings_dir={} invalid_weights={:?} rounding={}",
            self.api.routine_base_url,
            self.api.profile_base_url,
            if self.api.token.is_some() { "bearer" } else { "none" },
            self.api.timeout_secs,
            self.settings_dir.display(),
            self.weights.invalid_policy,
            self.weights.rounding.name(),
        )
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn parse_env(key: &str, default: u64) -> Result<u64> {
    env::var(key).map_or(Ok(default), |value| {
        value
            .parse()
            .with_context(|| format!("{key} must be a whole number of seconds, got '{value}'"))
    })
}

fn trim_base(url: &str) -> String {
    url.trim().trim_end_matches('/').to_owned()
}

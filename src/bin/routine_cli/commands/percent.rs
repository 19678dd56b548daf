// ABOUTME: Default percent commands for routine-cli
// ABOUTME: Reads and writes a trainer's default percent through the reconciling settings store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use tracing::info;
use trainer_routines::errors::AppResult;
use trainer_routines::models::PercentPreset;
use trainer_routines::settings::TrainerSettings;
use uuid::Uuid;

/// Print the reconciled default percent for a trainer
pub async fn get(settings: &TrainerSettings, trainer_id: Uuid) {
    let percent = settings.load_default_percent(trainer_id).await;
    println!("{percent}");
}

/// Store a new default percent for a trainer
pub async fn set(settings: &TrainerSettings, trainer_id: Uuid, percent: f64) -> AppResult<()> {
    settings.save_default_percent(trainer_id, percent).await?;
    info!(%trainer_id, percent, "default percent saved");
    println!("{percent}");
    Ok(())
}

/// Print the preset increments, starring the one matching the trainer default
pub async fn presets(settings: &TrainerSettings, trainer_id: Option<Uuid>) {
    let default = match trainer_id {
        Some(trainer_id) => Some(settings.load_default_percent(trainer_id).await),
        None => None,
    };
    for line in preset_lines(default) {
        println!("{line}");
    }
}

/// One line per preset, plus a custom line when the default is not a preset
fn preset_lines(default: Option<f64>) -> Vec<String> {
    let mut lines: Vec<String> = PercentPreset::ALL
        .iter()
        .map(|preset| {
            let marker = if default == Some(preset.value()) { '*' } else { ' ' };
            format!("{marker} {preset}")
        })
        .collect();

    let is_preset = |percent: f64| {
        PercentPreset::ALL
            .iter()
            .any(|preset| preset.value() == percent)
    };
    if let Some(percent) = default.filter(|percent| !is_preset(*percent)) {
        lines.push(format!("* {percent}% (custom)"));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_without_trainer_nothing_is_starred() {
        assert_eq!(preset_lines(None), ["  5%", "  7.5%", "  10%"]);
    }

    #[test]
    fn test_preset_default_is_starred() {
        assert_eq!(preset_lines(Some(7.5)), ["  5%", "* 7.5%", "  10%"]);
    }

    #[test]
    fn test_custom_default_gets_its_own_line() {
        assert_eq!(
            preset_lines(Some(12.5)),
            ["  5%", "  7.5%", "  10%", "* 12.5% (custom)"]
        );
    }
}

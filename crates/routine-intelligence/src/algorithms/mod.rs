// ABOUTME: Weight progression algorithms for pyramidal training
// ABOUTME: Contains the suggestion engine, weight parsing and rounding conventions

/// Rounding conventions for one-decimal weights
pub mod rounding;

/// Compounding weight suggestion across the pyramid
pub mod weight_progression;

pub use rounding::RoundingMode;
pub use weight_progression::{
    format_weight, parse_weight, suggest_weights, InvalidWeightPolicy, WeightProgression,
};

//! Glicko rating engine and calculator
//!
//! This module provides the pure Glicko update functions, the parameter set
//! that governs them, and a configured calculator behind a trait.

pub mod calculator;
pub mod glicko;
pub mod parameters;

// Re-export commonly used types
pub use calculator::{GlickoCalculatorConfig, GlickoRatingCalculator, RatingCalculator};
pub use glicko::{
    compute_posterior_deviation, compute_posterior_rating, compute_variance, confidence_interval,
    deviation_dampening, expected_score, inflate_deviation, update, update_with_overrides,
};
pub use parameters::GlickoParameters;

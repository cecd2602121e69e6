//! Rating calculator trait and the Glicko implementation
//!
//! The calculator binds a parameter set and an initial rating together so
//! that callers can hold one configured object instead of threading
//! parameters through every call.

use crate::config::RatingConfig;
use crate::error::RatingError;
use crate::rating::glicko;
use crate::rating::parameters::GlickoParameters;
use crate::types::{Contest, Rating, RatingChange};
use serde::{Deserialize, Serialize};

/// Trait for calculating rating changes over a rating period
pub trait RatingCalculator: Send + Sync {
    /// Rate a player against the contests they played in one period
    ///
    /// # Arguments
    /// * `subject` - The player's rating at the start of the period
    /// * `contests` - Outcomes and opponent snapshots for the period
    fn rate(&self, subject: &Rating, contests: &[Contest]) -> Result<RatingChange, RatingError>;

    /// Get the initial rating for new players
    fn initial_rating(&self) -> Rating;

    /// Get current configuration as JSON
    fn config(&self) -> serde_json::Value;

    /// Update configuration from JSON
    fn update_config(&mut self, config: serde_json::Value) -> Result<(), RatingError>;
}

/// Configuration held by [`GlickoRatingCalculator`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlickoCalculatorConfig {
    pub parameters: GlickoParameters,
    pub initial_rating: Rating,
}

impl Default for GlickoCalculatorConfig {
    fn default() -> Self {
        let parameters = GlickoParameters::default();
        Self {
            initial_rating: Rating::new(1500.0, parameters.max_deviation),
            parameters,
        }
    }
}

impl GlickoCalculatorConfig {
    pub fn validate(&self) -> Result<(), RatingError> {
        self.parameters.validate()?;

        if !self.initial_rating.rating.is_finite() {
            return Err(RatingError::ConfigurationError {
                message: "Initial rating must be finite".to_string(),
            });
        }

        if !self.initial_rating.deviation.is_finite() || self.initial_rating.deviation <= 0.0 {
            return Err(RatingError::ConfigurationError {
                message: "Initial deviation must be positive".to_string(),
            });
        }

        Ok(())
    }
}

impl TryFrom<&RatingConfig> for GlickoCalculatorConfig {
    type Error = RatingError;

    fn try_from(config: &RatingConfig) -> Result<Self, Self::Error> {
        Ok(Self {
            parameters: config.parameters()?,
            initial_rating: Rating::new(config.initial_rating, config.initial_deviation),
        })
    }
}

/// Glicko rating calculator
#[derive(Debug, Clone, Default)]
pub struct GlickoRatingCalculator {
    config: GlickoCalculatorConfig,
}

impl GlickoRatingCalculator {
    /// Create a new Glicko rating calculator
    pub fn new(config: GlickoCalculatorConfig) -> Result<Self, RatingError> {
        config.validate()?;

        Ok(Self { config })
    }

    /// Create a calculator from the application's rating settings
    pub fn from_config(config: &RatingConfig) -> Result<Self, RatingError> {
        Self::new(GlickoCalculatorConfig::try_from(config)?)
    }

    pub fn parameters(&self) -> &GlickoParameters {
        &self.config.parameters
    }

    /// Apply `periods` consecutive idle periods to a rating
    pub fn decay(&self, subject: &Rating, periods: u32) -> Result<Rating, RatingError> {
        let mut rating = *subject;
        for _ in 0..periods {
            rating = glicko::update(&rating, &[], Some(&self.config.parameters))?;
        }
        Ok(rating)
    }

    /// Expected score of `subject` against each opponent, averaged
    pub fn expected_score(&self, subject: &Rating, opponents: &[Rating]) -> f64 {
        if opponents.is_empty() {
            return 0.5; // Neutral expectation when no opponents
        }

        let total: f64 = opponents
            .iter()
            .map(|opponent| glicko::expected_score(subject, opponent))
            .sum();

        total / opponents.len() as f64
    }
}

impl RatingCalculator for GlickoRatingCalculator {
    fn rate(&self, subject: &Rating, contests: &[Contest]) -> Result<RatingChange, RatingError> {
        let new_rating = glicko::update(subject, contests, Some(&self.config.parameters))?;

        Ok(RatingChange {
            old_rating: *subject,
            new_rating,
            contests_played: contests.len(),
        })
    }

    fn initial_rating(&self) -> Rating {
        self.config.initial_rating
    }

    fn config(&self) -> serde_json::Value {
        serde_json::to_value(&self.config).unwrap_or(serde_json::Value::Null)
    }

    fn update_config(&mut self, config: serde_json::Value) -> Result<(), RatingError> {
        let new_config: GlickoCalculatorConfig =
            serde_json::from_value(config).map_err(|e| RatingError::ConfigurationError {
                message: format!("Invalid Glicko configuration: {}", e),
            })?;

        new_config.validate()?;
        self.config = new_config;
        Ok(())
    }
}

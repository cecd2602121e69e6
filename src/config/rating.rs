//! Rating system configuration

use crate::error::RatingError;
use crate::rating::parameters::{GlickoParameters, PARAMETER_COUNT};
use serde::{Deserialize, Serialize};

/// Rating settings
///
/// The four Glicko parameters are all-or-nothing: leave them all unset to
/// use the defaults, or set every one of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingConfig {
    /// Rating assigned to new players
    pub initial_rating: f64,
    /// Deviation assigned to new players
    pub initial_deviation: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_deviation: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_deviation: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub periods_elapsed: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decay_constant: Option<f64>,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            initial_rating: 1500.0,
            initial_deviation: 350.0,
            min_deviation: None,
            max_deviation: None,
            periods_elapsed: None,
            decay_constant: None,
        }
    }
}

impl RatingConfig {
    /// Resolve the configured parameter overrides into a parameter set
    pub fn parameters(&self) -> Result<GlickoParameters, RatingError> {
        let overrides: Vec<f64> = [
            self.min_deviation,
            self.max_deviation,
            self.periods_elapsed,
            self.decay_constant,
        ]
        .into_iter()
        .flatten()
        .collect();

        match overrides.len() {
            0 | PARAMETER_COUNT => GlickoParameters::from_overrides(&overrides),
            n => Err(RatingError::invalid_parameters(format!(
                "{} of {} rating parameters configured, set all of them or none",
                n, PARAMETER_COUNT
            ))),
        }
    }
}

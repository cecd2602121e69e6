//! Tunable constants for the Glicko update

use crate::error::RatingError;
use serde::{Deserialize, Serialize};

/// Floor on the posterior deviation. Keeps frequent players' ratings moving.
pub const DEFAULT_MIN_DEVIATION: f64 = 30.0;
/// Ceiling on the deviation, the RD of an unrated player.
pub const DEFAULT_MAX_DEVIATION: f64 = 350.0;
/// Rating periods since the rating was last updated.
pub const DEFAULT_PERIODS_ELAPSED: f64 = 1.0;
/// Decay constant. With the defaults above, a settled RD of 30 returns to
/// 350 after roughly 30 idle periods.
pub const DEFAULT_DECAY_CONSTANT: f64 = 63.2;

/// Number of values in a complete override list
pub const PARAMETER_COUNT: usize = 4;

/// Parameter set governing one Glicko update
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GlickoParameters {
    pub min_deviation: f64,
    pub max_deviation: f64,
    pub periods_elapsed: f64,
    pub decay_constant: f64,
}

impl Default for GlickoParameters {
    fn default() -> Self {
        Self {
            min_deviation: DEFAULT_MIN_DEVIATION,
            max_deviation: DEFAULT_MAX_DEVIATION,
            periods_elapsed: DEFAULT_PERIODS_ELAPSED,
            decay_constant: DEFAULT_DECAY_CONSTANT,
        }
    }
}

impl GlickoParameters {
    /// Build a validated parameter set from its four components
    pub fn new(
        min_deviation: f64,
        max_deviation: f64,
        periods_elapsed: f64,
        decay_constant: f64,
    ) -> Result<Self, RatingError> {
        let params = Self {
            min_deviation,
            max_deviation,
            periods_elapsed,
            decay_constant,
        };
        params.validate()?;
        Ok(params)
    }

    /// Build parameters from a positional override list
    ///
    /// The order is `min_deviation, max_deviation, periods_elapsed,
    /// decay_constant`. An empty list selects the defaults; anything other
    /// than zero or four values is rejected.
    pub fn from_overrides(overrides: &[f64]) -> Result<Self, RatingError> {
        match overrides {
            [] => Ok(Self::default()),
            [min_deviation, max_deviation, periods_elapsed, decay_constant] => Self::new(
                *min_deviation,
                *max_deviation,
                *periods_elapsed,
                *decay_constant,
            ),
            _ => Err(RatingError::invalid_parameters(format!(
                "expected 0 or {} values, got {}",
                PARAMETER_COUNT,
                overrides.len()
            ))),
        }
    }

    /// Copy of these parameters with a different idle time
    pub fn with_periods_elapsed(self, periods_elapsed: f64) -> Self {
        Self {
            periods_elapsed,
            ..self
        }
    }

    /// Validate parameter values
    pub fn validate(&self) -> Result<(), RatingError> {
        let values = [
            ("min_deviation", self.min_deviation),
            ("max_deviation", self.max_deviation),
            ("periods_elapsed", self.periods_elapsed),
            ("decay_constant", self.decay_constant),
        ];
        for (name, value) in values {
            if !value.is_finite() {
                return Err(RatingError::invalid_parameters(format!(
                    "{} must be finite, got {}",
                    name, value
                )));
            }
            if value < 0.0 {
                return Err(RatingError::invalid_parameters(format!(
                    "{} must be non-negative, got {}",
                    name, value
                )));
            }
        }

        if self.max_deviation < self.min_deviation {
            return Err(RatingError::invalid_parameters(format!(
                "max_deviation ({}) must not be below min_deviation ({})",
                self.max_deviation, self.min_deviation
            )));
        }

        Ok(())
    }
}

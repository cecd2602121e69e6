//! Value types shared by the rating engine and its callers
//!
//! Every type here is a plain value. The engine never mutates what it is
//! given; updates always produce a new [`Rating`].

use serde::{Deserialize, Serialize};
use skillratings::glicko::GlickoRating;

/// Skill estimate for a player: point rating plus rating deviation (RD)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub rating: f64,
    pub deviation: f64,
}

impl Rating {
    pub fn new(rating: f64, deviation: f64) -> Self {
        Self { rating, deviation }
    }

    /// Interval of two deviations either side of the rating
    pub fn confidence_interval(&self) -> (f64, f64) {
        let twice_deviation = 2.0 * self.deviation;
        (self.rating - twice_deviation, self.rating + twice_deviation)
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self {
            rating: 1500.0,
            deviation: 350.0,
        }
    }
}

impl From<GlickoRating> for Rating {
    fn from(rating: GlickoRating) -> Self {
        Self {
            rating: rating.rating,
            deviation: rating.deviation,
        }
    }
}

impl From<Rating> for GlickoRating {
    fn from(rating: Rating) -> Self {
        Self {
            rating: rating.rating,
            deviation: rating.deviation,
        }
    }
}

/// Conventional contest results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Loss,
    Draw,
    Win,
}

impl Outcome {
    pub fn score(self) -> f64 {
        match self {
            Outcome::Loss => 0.0,
            Outcome::Draw => 0.5,
            Outcome::Win => 1.0,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Loss => write!(f, "loss"),
            Outcome::Draw => write!(f, "draw"),
            Outcome::Win => write!(f, "win"),
        }
    }
}

/// One observed result against one opponent during a rating period
///
/// `opponent` is a snapshot of the opponent's rating at the time of the
/// contest. `outcome` is the subject's score in `[0, 1]`; 1 is a win.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Contest {
    pub outcome: f64,
    pub opponent: Rating,
}

impl Contest {
    pub fn new(opponent: Rating, outcome: f64) -> Self {
        Self { outcome, opponent }
    }

    pub fn win(opponent: Rating) -> Self {
        Self::new(opponent, Outcome::Win.score())
    }

    pub fn draw(opponent: Rating) -> Self {
        Self::new(opponent, Outcome::Draw.score())
    }

    pub fn loss(opponent: Rating) -> Self {
        Self::new(opponent, Outcome::Loss.score())
    }
}

impl From<(Rating, Outcome)> for Contest {
    fn from((opponent, outcome): (Rating, Outcome)) -> Self {
        Self::new(opponent, outcome.score())
    }
}

/// Rating change information for a player over one rating period
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingChange {
    pub old_rating: Rating,
    pub new_rating: Rating,
    pub contests_played: usize,
}

impl RatingChange {
    pub fn rating_delta(&self) -> f64 {
        self.new_rating.rating - self.old_rating.rating
    }

    pub fn deviation_delta(&self) -> f64 {
        self.new_rating.deviation - self.old_rating.deviation
    }
}

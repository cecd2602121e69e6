//! Glicko rating engine
//!
//! Pure functions implementing the Glicko update described at
//! <http://www.glicko.net/glicko.html>. Nothing here holds state, so every
//! function can be called from any number of threads at once.
//!
//! Opponent deviations are inflated by the elapsed-period decay before they
//! enter the expected-score and variance terms. Posterior ratings and
//! deviations are floored to whole numbers; the decay-only path is not.

use crate::error::RatingError;
use crate::rating::parameters::GlickoParameters;
use crate::types::{Contest, Rating};
use std::f64::consts::{LN_10, PI};
use tracing::{debug, warn};

/// Glicko scaling constant, `ln(10) / 400`
pub const Q: f64 = LN_10 / 400.0;
const Q2: f64 = Q * Q;

/// The `g(RD)` factor that dampens the influence of uncertain opponents
pub fn deviation_dampening(deviation: f64) -> f64 {
    1.0 / (1.0 + 3.0 * Q2 * deviation.powi(2) / PI.powi(2)).sqrt()
}

/// Deviation before any contest evidence is applied, grown by the idle
/// periods and capped at `max_deviation`
pub fn inflate_deviation(rating: &Rating, params: &GlickoParameters) -> f64 {
    (rating.deviation.powi(2) + params.decay_constant.powi(2) * params.periods_elapsed)
        .sqrt()
        .min(params.max_deviation)
}

/// Probability that `subject` beats `opponent`
///
/// Only the opponent's deviation is used for dampening, so swapping the two
/// arguments gives the complementary probability only when both deviations
/// are equal.
pub fn expected_score(subject: &Rating, opponent: &Rating) -> f64 {
    let exponent =
        deviation_dampening(opponent.deviation) * (subject.rating - opponent.rating) / -400.0;
    1.0 / (1.0 + 10f64.powf(exponent))
}

/// Per-contest quantities shared by the variance and posterior formulas
#[derive(Debug, Clone, Copy)]
struct ContestTerms {
    dampening: f64,
    expected: f64,
    outcome: f64,
}

fn contest_terms(
    subject: &Rating,
    contests: &[Contest],
    params: &GlickoParameters,
) -> Vec<ContestTerms> {
    contests
        .iter()
        .map(|contest| {
            let opponent = Rating {
                rating: contest.opponent.rating,
                deviation: inflate_deviation(&contest.opponent, params),
            };
            ContestTerms {
                dampening: deviation_dampening(opponent.deviation),
                expected: expected_score(subject, &opponent),
                outcome: contest.outcome,
            }
        })
        .collect()
}

fn variance_from_terms(terms: &[ContestTerms]) -> f64 {
    let information: f64 = terms
        .iter()
        .map(|t| t.dampening.powi(2) * t.expected * (1.0 - t.expected))
        .sum();

    if information <= 0.0 {
        // Every expectation saturated at 0 or 1: the batch carries no information
        if !terms.is_empty() {
            warn!(
                contests = terms.len(),
                "Contest batch carries no rating information, variance is unbounded"
            );
        }
        return f64::INFINITY;
    }

    1.0 / (Q2 * information)
}

/// Combined precision of the inflated prior and the contest evidence
fn posterior_precision(inflated_deviation: f64, variance: f64) -> f64 {
    1.0 / inflated_deviation.powi(2) + 1.0 / variance
}

fn posterior_rating(
    subject: &Rating,
    inflated_deviation: f64,
    variance: f64,
    terms: &[ContestTerms],
) -> f64 {
    let surprise: f64 = terms
        .iter()
        .map(|t| t.dampening * (t.outcome - t.expected))
        .sum();

    (subject.rating + (Q / posterior_precision(inflated_deviation, variance)) * surprise).floor()
}

fn posterior_deviation(inflated_deviation: f64, variance: f64, params: &GlickoParameters) -> f64 {
    (1.0 / posterior_precision(inflated_deviation, variance))
        .sqrt()
        .floor()
        .max(params.min_deviation)
}

/// The `d²` term: inverse of the information carried by the contest batch
///
/// Returns `f64::INFINITY` for a batch with no information, which makes the
/// posterior formulas fall back to the inflated prior.
pub fn compute_variance(subject: &Rating, contests: &[Contest], params: &GlickoParameters) -> f64 {
    variance_from_terms(&contest_terms(subject, contests, params))
}

/// Posterior rating, floored to a whole number
pub fn compute_posterior_rating(
    subject: &Rating,
    contests: &[Contest],
    params: &GlickoParameters,
) -> f64 {
    let terms = contest_terms(subject, contests, params);
    let inflated = inflate_deviation(subject, params);
    posterior_rating(subject, inflated, variance_from_terms(&terms), &terms)
}

/// Posterior deviation, floored to a whole number and then clamped to
/// `min_deviation`
pub fn compute_posterior_deviation(
    subject: &Rating,
    contests: &[Contest],
    params: &GlickoParameters,
) -> f64 {
    let terms = contest_terms(subject, contests, params);
    let inflated = inflate_deviation(subject, params);
    posterior_deviation(inflated, variance_from_terms(&terms), params)
}

/// Rate `subject` over one rating period
///
/// With no contests the rating is unchanged and only the deviation decays.
/// `None` selects [`GlickoParameters::default`].
pub fn update(
    subject: &Rating,
    contests: &[Contest],
    params: Option<&GlickoParameters>,
) -> Result<Rating, RatingError> {
    let params = match params {
        Some(params) => {
            params.validate()?;
            *params
        }
        None => GlickoParameters::default(),
    };

    let inflated = inflate_deviation(subject, &params);

    if contests.is_empty() {
        debug!(
            rating = subject.rating,
            prior_deviation = subject.deviation,
            deviation = inflated,
            "No contests in period, decaying deviation"
        );
        return Ok(Rating {
            rating: subject.rating,
            deviation: inflated,
        });
    }

    let terms = contest_terms(subject, contests, &params);
    let variance = variance_from_terms(&terms);
    let updated = Rating {
        rating: posterior_rating(subject, inflated, variance, &terms),
        deviation: posterior_deviation(inflated, variance, &params),
    };

    debug!(
        prior_rating = subject.rating,
        prior_deviation = subject.deviation,
        contests = contests.len(),
        variance,
        rating = updated.rating,
        deviation = updated.deviation,
        "Rating updated"
    );

    Ok(updated)
}

/// Rate `subject` with a positional parameter override list
///
/// See [`GlickoParameters::from_overrides`] for the accepted shapes.
pub fn update_with_overrides(
    subject: &Rating,
    contests: &[Contest],
    overrides: &[f64],
) -> Result<Rating, RatingError> {
    let params = GlickoParameters::from_overrides(overrides)?;
    update(subject, contests, Some(&params))
}

/// Rating plus and minus two deviations
pub fn confidence_interval(rating: &Rating) -> (f64, f64) {
    rating.confidence_interval()
}

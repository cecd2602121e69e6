//! Integration tests for the glicko-engine crate
//!
//! These tests exercise the public API end to end:
//! - Reference rating period and decay scenarios
//! - Parameter override validation
//! - The configured calculator
//! - Concurrent invocation across many players

mod fixtures;

use glicko_engine::config::RatingConfig;
use glicko_engine::rating::{compute_variance, inflate_deviation, GlickoCalculatorConfig};
use glicko_engine::{
    confidence_interval, update, update_with_overrides, Contest, GlickoParameters,
    GlickoRatingCalculator, Rating, RatingCalculator, RatingError,
};
use skillratings::glicko::{decay_deviation, GlickoConfig, GlickoRating};

use fixtures::{player_pool, reference_contests, reference_player, round_robin, settled_player};

#[test]
fn test_reference_rating_period() {
    let updated = update(&reference_player(), &reference_contests(), None).unwrap();

    assert_eq!(updated.rating, 1461.0);
    assert_eq!(updated.deviation, 156.0);
}

#[test]
fn test_contest_order_does_not_matter() {
    let mut contests = reference_contests();
    contests.reverse();

    let updated = update(&reference_player(), &contests, None).unwrap();
    assert_eq!(updated, Rating::new(1461.0, 156.0));
}

#[test]
fn test_decay_scenario() {
    let mut player = settled_player();
    let mut previous = player.deviation;

    for _ in 0..31 {
        player = update(&player, &[], None).unwrap();
        assert_eq!(player.rating, 1400.0);
        assert!(player.deviation >= previous);
        previous = player.deviation;
    }

    assert_eq!(player.deviation, 350.0);
}

#[test]
fn test_single_step_decay_matches_skillratings() {
    // skillratings' decay uses one elapsed period and caps at 350
    let config = GlickoConfig { c: 63.2 };

    for deviation in [0.0, 30.0, 120.0, 280.0, 349.0] {
        let player = Rating::new(1500.0, deviation);
        let ours = update(&player, &[], None).unwrap();
        let theirs: Rating = decay_deviation(&GlickoRating::from(player), &config).into();

        assert_eq!(ours.rating, theirs.rating);
        assert!((ours.deviation - theirs.deviation).abs() < 1e-9);
    }
}

#[test]
fn test_elapsed_periods_inflate_deviation() {
    let player = settled_player();
    let one = GlickoParameters::default();
    let four = one.with_periods_elapsed(4.0);

    let after_one = inflate_deviation(&player, &one);
    let after_four = inflate_deviation(&player, &four);
    assert!(after_four > after_one);
    assert!((after_four - (30.0f64.powi(2) + 4.0 * 63.2f64.powi(2)).sqrt()).abs() < 1e-9);

    // Skipping four periods at once is the same as one update with t = 4
    let updated = update(&player, &[], Some(&four)).unwrap();
    assert_eq!(updated.deviation, after_four);
}

#[test]
fn test_parameter_override_counts() {
    let player = reference_player();
    let contests = reference_contests();

    assert!(update_with_overrides(&player, &contests, &[]).is_ok());
    assert!(update_with_overrides(&player, &contests, &[30.0, 350.0, 1.0, 63.2]).is_ok());

    for overrides in [
        vec![30.0],
        vec![30.0, 350.0],
        vec![30.0, 350.0, 1.0],
        vec![30.0, 350.0, 1.0, 63.2, 2.0],
        vec![30.0, 350.0, 1.0, 63.2, 2.0, 3.0],
    ] {
        let err = update_with_overrides(&player, &contests, &overrides).unwrap_err();
        assert!(
            matches!(err, RatingError::InvalidParameters { .. }),
            "{} overrides should be rejected",
            overrides.len()
        );
    }
}

#[test]
fn test_custom_parameters_change_result() {
    let params = GlickoParameters::new(30.0, 350.0, 1.0, 0.0).unwrap();

    // Without decay the prior is not inflated before the update
    let updated = update(&reference_player(), &reference_contests(), Some(&params)).unwrap();
    let defaults = update(&reference_player(), &reference_contests(), None).unwrap();
    assert_ne!(updated, defaults);
    assert!(updated.deviation <= defaults.deviation);
}

#[test]
fn test_variance_shrinks_with_more_contests() {
    let params = GlickoParameters::default();
    let player = reference_player();

    let few = reference_contests();
    let many: Vec<Contest> = few.iter().cycle().take(12).copied().collect();

    assert!(compute_variance(&player, &many, &params) < compute_variance(&player, &few, &params));

    let few_update = update(&player, &few, None).unwrap();
    let many_update = update(&player, &many, None).unwrap();
    assert!(many_update.deviation < few_update.deviation);
}

#[test]
fn test_calculator_from_rating_config() {
    let config = RatingConfig {
        min_deviation: Some(160.0),
        max_deviation: Some(350.0),
        periods_elapsed: Some(1.0),
        decay_constant: Some(63.2),
        ..RatingConfig::default()
    };
    let calculator = GlickoRatingCalculator::from_config(&config).unwrap();

    let change = calculator
        .rate(&reference_player(), &reference_contests())
        .unwrap();

    // Posterior deviation of 156 is lifted to the configured floor
    assert_eq!(change.new_rating.rating, 1461.0);
    assert_eq!(change.new_rating.deviation, 160.0);
}

#[test]
fn test_calculator_as_trait_object() {
    let calculator: Box<dyn RatingCalculator> =
        Box::new(GlickoRatingCalculator::new(GlickoCalculatorConfig::default()).unwrap());

    let newcomer = calculator.initial_rating();
    assert_eq!(newcomer, Rating::new(1500.0, 350.0));

    let change = calculator.rate(&newcomer, &[]).unwrap();
    assert_eq!(change.contests_played, 0);
    assert_eq!(change.new_rating, newcomer);
}

#[test]
fn test_confidence_interval_after_update() {
    let updated = update(&reference_player(), &reference_contests(), None).unwrap();
    let (low, high) = confidence_interval(&updated);

    assert_eq!(low, 1461.0 - 312.0);
    assert_eq!(high, 1461.0 + 312.0);
}

#[test]
fn test_prior_is_not_mutated() {
    let player = reference_player();
    let contests = reference_contests();

    let _ = update(&player, &contests, None).unwrap();
    assert_eq!(player, reference_player());
    assert_eq!(contests, reference_contests());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_updates_match_sequential() {
    let pool = player_pool(32);

    let sequential: Vec<Rating> = pool
        .iter()
        .enumerate()
        .map(|(i, player)| update(player, &round_robin(i, &pool), None).unwrap())
        .collect();

    let mut handles = Vec::new();
    for (i, player) in pool.iter().copied().enumerate() {
        let contests = round_robin(i, &pool);
        handles.push(tokio::spawn(async move {
            update(&player, &contests, None)
        }));
    }

    let mut concurrent = Vec::new();
    for handle in handles {
        concurrent.push(handle.await.unwrap().unwrap());
    }

    assert_eq!(concurrent, sequential);
    for rating in &concurrent {
        assert!(rating.deviation >= 30.0);
        assert_eq!(rating.rating.fract(), 0.0);
    }
}

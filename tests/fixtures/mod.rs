//! Shared players and contest batches for integration testing

#![allow(dead_code)]

use glicko_engine::{Contest, Rating};

/// Subject of the reference rating period
pub fn reference_player() -> Rating {
    Rating::new(1500.0, 200.0)
}

/// A settled player used for decay scenarios
pub fn settled_player() -> Rating {
    Rating::new(1400.0, 30.0)
}

/// Win against a settled 1400, losses against 1550 and an uncertain 1700
pub fn reference_contests() -> Vec<Contest> {
    vec![
        Contest::win(Rating::new(1400.0, 30.0)),
        Contest::loss(Rating::new(1550.0, 100.0)),
        Contest::loss(Rating::new(1700.0, 300.0)),
    ]
}

/// A pool of players spread across the rating range
pub fn player_pool(size: usize) -> Vec<Rating> {
    (0..size)
        .map(|i| {
            let rating = 1100.0 + (i as f64 * 37.0) % 800.0;
            let deviation = 40.0 + (i as f64 * 23.0) % 300.0;
            Rating::new(rating, deviation)
        })
        .collect()
}

/// Round-robin results for `player` against `opponents`, alternating outcomes
pub fn round_robin(player_index: usize, opponents: &[Rating]) -> Vec<Contest> {
    opponents
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != player_index)
        .map(|(i, opponent)| match (i + player_index) % 3 {
            0 => Contest::win(*opponent),
            1 => Contest::draw(*opponent),
            _ => Contest::loss(*opponent),
        })
        .collect()
}

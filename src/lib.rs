//! Glicko Engine - rating updates for competitive games
//!
//! This crate computes a player's posterior rating and rating deviation from
//! their prior rating and a period of contest results, following the Glicko
//! rating system. It is a set of pure functions over value types; persisting
//! ratings and deciding when a rating period ends are left to the caller.

pub mod config;
pub mod error;
pub mod rating;
pub mod types;

// Re-export commonly used types and traits
pub use error::{RatingError, Result};
pub use types::*;

// Re-export key components
pub use rating::{
    confidence_interval, update, update_with_overrides, GlickoParameters, GlickoRatingCalculator,
    RatingCalculator,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

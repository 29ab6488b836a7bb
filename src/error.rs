//! Errors raised at the engine boundary.
//!
//! Game operations themselves never fail; only conversions from raw
//! collaborator input (integers, seeds, JSON) return these.

use derive_more::{Display, Error};

#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum EngineError {
    #[display("game seed {seed} is outside 0..=999999")]
    InvalidSeed { seed: u32 },

    #[display("{value} is not a board location")]
    InvalidLocation { value: u32 },

    #[display("{value} is neither a card id (0..=51) nor an empty pile (100..=115)")]
    InvalidPick { value: u32 },

    #[display("a board holds 52 locations, got {len}")]
    BoardSize { len: usize },

    #[display("card {card} shares location {location} with another card")]
    DuplicateLocation { card: u8, location: u32 },

    #[display("invalid rules: {message}")]
    InvalidRules { message: String },
}

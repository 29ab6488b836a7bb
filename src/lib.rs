#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)] // may be revisited
#![allow(clippy::cast_possible_truncation, clippy::must_use_candidate)]

pub mod types;
pub mod cards;
pub mod location;
pub mod rng;
pub mod seed;
pub mod board;
pub mod history;
pub mod rules;
pub mod error;
pub mod state;

pub mod engine {
    pub mod apply;
    pub mod auto;
    pub mod legal;
    pub mod score;
}

// Re-exports: stable minimal API surface for external callers
pub use crate::board::Board;
pub use crate::cards::{Card, DECK};
pub use crate::engine::apply::interact;
pub use crate::engine::auto::auto_move_card;
pub use crate::engine::legal::movable_stack_size;
pub use crate::engine::score::move_count;
pub use crate::error::EngineError;
pub use crate::history::History;
pub use crate::location::{Location, Pick};
pub use crate::rng::{deal_for_seed, shuffle, ClassicRng};
pub use crate::rules::Rules;
pub use crate::seed::{is_solvable, Seed, UNSOLVABLE_SEEDS};
pub use crate::state::GameState;
pub use crate::types::{Color, Pile, Rank, Suit};

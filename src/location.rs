//! Board locations and move targets.
//!
//! The legacy integer encoding is kept at the boundary (`raw` / `from_raw`):
//!
//! | value            | meaning                                  |
//! |------------------|------------------------------------------|
//! | 0..=3            | freecell slot                            |
//! | 4..=7            | visible top of a foundation (suit order) |
//! | 8..=167          | cascade cell, `column = v % 8`           |
//! | foundation+9999  | buried under that foundation's top       |
//!
//! Move targets add `100 + pile id` for empty piles; those never describe
//! where a card is.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::types::{Pile, Suit, CASCADES, CASCADE_ROWS, FREECELLS};

/// Added to a foundation value to mark a buried foundation card.
pub const HIDDEN_OFFSET: u32 = 9999;
/// Highest visible board id (last row of the last cascade).
pub const MAX_BOARD_ID: u32 = 167;
/// Empty piles are picked as `EMPTY_PILE_BASE + pile id`.
pub const EMPTY_PILE_BASE: u32 = 100;

const CASCADE_BASE: u32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u32", try_from = "u32")]
pub enum Location {
    Freecell(u8),
    /// The visible top card of a foundation.
    Foundation(Suit),
    /// Any card beneath a foundation's top. Not addressable.
    FoundationHidden(Suit),
    /// `row` 0 is the bottom card of the column (dealt first).
    Cascade { column: u8, row: u8 },
}

impl Location {
    #[inline]
    pub fn cascade(column: u8, row: u8) -> Option<Self> {
        (column < CASCADES && row < CASCADE_ROWS).then_some(Location::Cascade { column, row })
    }

    /// Location of the card at position `i` of a fresh deal (board id `i + 8`).
    #[inline]
    pub fn deal_slot(i: u8) -> Self {
        Location::Cascade {
            column: i % CASCADES,
            row: i / CASCADES,
        }
    }

    #[inline]
    pub fn raw(self) -> u32 {
        match self {
            Location::Freecell(cell) => u32::from(cell),
            Location::Foundation(suit) => 4 + u32::from(suit.index()),
            Location::FoundationHidden(suit) => 4 + u32::from(suit.index()) + HIDDEN_OFFSET,
            Location::Cascade { column, row } => {
                CASCADE_BASE + u32::from(row) * u32::from(CASCADES) + u32::from(column)
            }
        }
    }

    pub fn from_raw(value: u32) -> Result<Self, EngineError> {
        let suit_at = |v: u32| Suit::from_index((v - 4) as u8);
        let loc = match value {
            v if v < u32::from(FREECELLS) => Some(Location::Freecell(v as u8)),
            4..=7 => suit_at(value).map(Location::Foundation),
            CASCADE_BASE..=MAX_BOARD_ID => {
                let offset = value - CASCADE_BASE;
                Location::cascade(
                    (offset % u32::from(CASCADES)) as u8,
                    (offset / u32::from(CASCADES)) as u8,
                )
            }
            v if (4 + HIDDEN_OFFSET..=7 + HIDDEN_OFFSET).contains(&v) => {
                suit_at(v - HIDDEN_OFFSET).map(Location::FoundationHidden)
            }
            _ => None,
        };
        loc.ok_or(EngineError::InvalidLocation { value })
    }

    /// The cell a card stacked on this one occupies (legacy `loc + 8`).
    /// None for anything but a cascade cell below the last row.
    #[inline]
    pub fn above(self) -> Option<Self> {
        match self {
            Location::Cascade { column, row } => {
                row.checked_add(1).and_then(|row| Location::cascade(column, row))
            }
            _ => None,
        }
    }

    /// The pile a visible card at this location belongs to.
    #[inline]
    pub fn pile(self) -> Option<Pile> {
        match self {
            Location::Freecell(cell) => Some(Pile::Freecell(cell)),
            Location::Foundation(suit) => Some(Pile::Foundation(suit)),
            Location::FoundationHidden(_) => None,
            Location::Cascade { column, .. } => Some(Pile::Cascade(column)),
        }
    }

    /// The location a card occupies when it is the only card on `pile`.
    #[inline]
    pub fn base_of(pile: Pile) -> Self {
        match pile {
            Pile::Freecell(cell) => Location::Freecell(cell),
            Pile::Foundation(suit) => Location::Foundation(suit),
            Pile::Cascade(column) => Location::Cascade { column, row: 0 },
        }
    }

    /// True if the location names a real cell (or hidden slot) of the table.
    /// The variants carry bare integers, so e.g. `Freecell(7)` is constructible
    /// but not valid.
    #[inline]
    pub fn is_valid(self) -> bool {
        Location::from_raw(self.raw()) == Ok(self)
    }

    #[inline]
    pub fn is_freecell(self) -> bool {
        matches!(self, Location::Freecell(_))
    }

    #[inline]
    pub fn is_foundation(self) -> bool {
        matches!(self, Location::Foundation(_))
    }

    #[inline]
    pub fn is_cascade(self) -> bool {
        matches!(self, Location::Cascade { .. })
    }

    #[inline]
    pub fn is_hidden(self) -> bool {
        matches!(self, Location::FoundationHidden(_))
    }
}

impl From<Location> for u32 {
    fn from(loc: Location) -> Self {
        loc.raw()
    }
}

impl TryFrom<u32> for Location {
    type Error = EngineError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Location::from_raw(value)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Freecell(cell) => write!(f, "freecell {cell}"),
            Location::Foundation(suit) => write!(f, "foundation {}", suit.symbol()),
            Location::FoundationHidden(suit) => write!(f, "under foundation {}", suit.symbol()),
            Location::Cascade { column, row } => write!(f, "cascade {column} row {row}"),
        }
    }
}

/// What a player gesture points at: a card, or an empty pile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pick {
    Card(u8),
    EmptyPile(Pile),
}

impl Pick {
    /// Decode a legacy pick: 0..=51 for cards, 100..=115 for empty piles.
    pub fn from_raw(value: u32) -> Result<Self, EngineError> {
        if crate::cards::is_card(value) {
            return Ok(Pick::Card(value as u8));
        }
        value
            .checked_sub(EMPTY_PILE_BASE)
            .and_then(|id| u8::try_from(id).ok())
            .and_then(Pile::from_id)
            .map(Pick::EmptyPile)
            .ok_or(EngineError::InvalidPick { value })
    }

    #[inline]
    pub fn raw(self) -> u32 {
        match self {
            Pick::Card(id) => u32::from(id),
            Pick::EmptyPile(pile) => EMPTY_PILE_BASE + u32::from(pile.id()),
        }
    }
}

impl From<Pile> for Pick {
    fn from(pile: Pile) -> Self {
        Pick::EmptyPile(pile)
    }
}

impl fmt::Display for Pick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pick::Card(id) => match crate::cards::get(*id) {
                Some(card) => write!(f, "{card}"),
                None => write!(f, "card #{id}"),
            },
            Pick::EmptyPile(pile) => write!(f, "empty pile {}", pile.id()),
        }
    }
}

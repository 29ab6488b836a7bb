use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, DECK, DECK_SIZE};
use crate::error::EngineError;
use crate::location::{Location, MAX_BOARD_ID};
use crate::types::{Pile, Suit, CASCADES};

/// Where every card is. The 52 locations (indexed by card id) are the whole
/// game position; piles are derived by scanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "Vec<Location>", try_from = "Vec<Location>")]
pub struct Board {
    locations: [Location; DECK_SIZE],
}

impl Board {
    /// Lay a shuffled deck out in dealt order: deck position `i` goes to
    /// board id `i + 8`, filling the cascades row by row.
    pub fn from_deal(deal: &[Card; DECK_SIZE]) -> Self {
        let mut locations = [Location::Freecell(0); DECK_SIZE];
        for (i, card) in deal.iter().enumerate() {
            locations[card.id as usize] = Location::deal_slot(i as u8);
        }
        Self { locations }
    }

    /// Build a board from explicit locations. Every location must be a real
    /// cell, and two cards may only share a location when both are buried
    /// under a foundation.
    pub fn from_locations(locations: [Location; DECK_SIZE]) -> Result<Self, EngineError> {
        for (id, loc) in locations.iter().enumerate() {
            if !loc.is_valid() {
                return Err(EngineError::InvalidLocation { value: loc.raw() });
            }
            if loc.is_hidden() {
                continue;
            }
            if locations[..id].contains(loc) {
                return Err(EngineError::DuplicateLocation {
                    card: id as u8,
                    location: loc.raw(),
                });
            }
        }
        Ok(Self { locations })
    }

    pub fn from_raw(raw: [u32; DECK_SIZE]) -> Result<Self, EngineError> {
        let mut locations = [Location::Freecell(0); DECK_SIZE];
        for (slot, value) in locations.iter_mut().zip(raw) {
            *slot = Location::from_raw(value)?;
        }
        Self::from_locations(locations)
    }

    /// The legacy integer view, indexed by card id.
    #[inline]
    pub fn raw(&self) -> [u32; DECK_SIZE] {
        self.locations.map(Location::raw)
    }

    #[inline]
    pub fn locations(&self) -> &[Location; DECK_SIZE] {
        &self.locations
    }

    /// Location of `card`, or None if `card` is not a card id.
    #[inline]
    pub fn get(&self, card: u8) -> Option<Location> {
        self.locations.get(usize::from(card)).copied()
    }

    /// Location of `card`.
    ///
    /// # Panics
    ///
    /// If `card` is not a card id (0..=51); use [`Board::get`] for unchecked input.
    #[inline]
    pub fn location(&self, card: u8) -> Location {
        self.locations[usize::from(card)]
    }

    /// Engine-only: callers pass ids from `DECK` and locations of real cells.
    #[inline]
    pub(crate) fn set(&mut self, card: u8, loc: Location) {
        debug_assert!(usize::from(card) < DECK_SIZE, "card id {card} out of range");
        debug_assert!(loc.is_valid(), "{loc:?} is not a table cell");
        self.locations[usize::from(card)] = loc;
    }

    /// The card at `loc`, if any. A plain scan over the 52 cards.
    pub fn card_at(&self, loc: Location) -> Option<&'static Card> {
        self.locations
            .iter()
            .position(|l| *l == loc)
            .map(|id| &DECK[id])
    }

    /// True if `card` is in a cascade with nothing stacked on it.
    pub fn is_last_in_cascade(&self, card: u8) -> bool {
        let Some(loc) = self.get(card).filter(|l| l.is_cascade()) else {
            return false;
        };
        loc.above().map_or(true, |above| self.card_at(above).is_none())
    }

    /// The exposed card of cascade `column`, or None when it is empty.
    pub fn last_in_cascade(&self, column: u8) -> Option<&'static Card> {
        DECK.iter().find(|card| {
            matches!(self.location(card.id), Location::Cascade { column: c, .. } if c == column)
                && self.is_last_in_cascade(card.id)
        })
    }

    /// Cards of cascade `column` from the bottom row up.
    pub fn cascade(&self, column: u8) -> Vec<&'static Card> {
        let mut cards = Vec::new();
        let mut next = Location::cascade(column, 0);
        while let Some(card) = next.and_then(|loc| self.card_at(loc)) {
            cards.push(card);
            next = next.and_then(Location::above);
        }
        cards
    }

    /// A pile is empty when nothing occupies its base cell.
    #[inline]
    pub fn is_empty_pile(&self, pile: Pile) -> bool {
        self.card_at(Location::base_of(pile)).is_none()
    }

    #[inline]
    pub fn empty_freecells(&self) -> usize {
        Pile::freecells().filter(|p| self.is_empty_pile(*p)).count()
    }

    #[inline]
    pub fn empty_cascades(&self) -> usize {
        Pile::cascades().filter(|p| self.is_empty_pile(*p)).count()
    }

    #[inline]
    pub fn foundation_top(&self, suit: Suit) -> Option<&'static Card> {
        self.card_at(Location::Foundation(suit))
    }

    /// Bury the current top of `suit`'s foundation, if there is one.
    pub fn bury_foundation_top(&mut self, suit: Suit) {
        if let Some(top) = self.foundation_top(suit) {
            self.set(top.id, Location::FoundationHidden(suit));
        }
    }
}

impl From<Board> for Vec<Location> {
    fn from(board: Board) -> Self {
        board.locations.to_vec()
    }
}

impl TryFrom<Vec<Location>> for Board {
    type Error = EngineError;

    fn try_from(locations: Vec<Location>) -> Result<Self, Self::Error> {
        let len = locations.len();
        let locations: [Location; DECK_SIZE] = locations
            .try_into()
            .map_err(|_| EngineError::BoardSize { len })?;
        Board::from_locations(locations)
    }
}

/// Dumps board ids 0..=last occupied, eight per line: freecells and
/// foundations on the first line, then one cascade row per line.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let last = self
            .locations
            .iter()
            .map(|l| l.raw())
            .filter(|v| *v <= MAX_BOARD_ID)
            .max()
            .unwrap_or(0);
        let width = u32::from(CASCADES);
        let last_row_end = (last / width + 1) * width;
        for id in 0..last_row_end {
            let sym = Location::from_raw(id)
                .ok()
                .and_then(|loc| self.card_at(loc))
                .map_or("--", |c| c.sym);
            f.write_str(sym)?;
            if (id + 1) % width == 0 {
                writeln!(f)?;
            } else {
                f.write_str(" ")?;
            }
        }
        Ok(())
    }
}

use std::fmt;

use serde::Serialize;

use crate::types::{Color, Rank, Suit};

/// Number of cards in the deck.
pub const DECK_SIZE: usize = 52;

/// A standard playing card. Ids run 0..=51 in rank-major order
/// (`AC AD AH AS 2C 2D ... KS`), so `id = rank * 4 + suit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Card {
    pub id: u8,
    pub suit: Suit,
    pub rank: Rank,
    pub color: Color,
    pub sym: &'static str,
}

impl Card {
    /// True if `lower` may sit directly on this card in a cascade:
    /// one rank lower and the opposite color.
    #[inline]
    pub fn can_stack(&self, lower: &Card) -> bool {
        lower.rank.value() + 1 == self.rank.value() && lower.color != self.color
    }

    /// Look up a card by its two-character symbol, e.g. `"TD"` or `"ks"`.
    pub fn from_sym(sym: &str) -> Option<&'static Card> {
        let sym = sym.trim();
        DECK.iter().find(|c| c.sym.eq_ignore_ascii_case(sym))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sym)
    }
}

const fn make(id: u8, sym: &'static str) -> Card {
    let suit = match id % 4 {
        0 => Suit::Club,
        1 => Suit::Diamond,
        2 => Suit::Heart,
        _ => Suit::Spade,
    };
    Card {
        id,
        suit,
        rank: Rank::ALL[(id / 4) as usize],
        color: suit.color(),
        sym,
    }
}

/// The ordered deck. Shuffles index into this table; cards are never
/// created or destroyed, only referenced by id.
pub const DECK: [Card; DECK_SIZE] = [
    make(0, "AC"),
    make(1, "AD"),
    make(2, "AH"),
    make(3, "AS"),
    make(4, "2C"),
    make(5, "2D"),
    make(6, "2H"),
    make(7, "2S"),
    make(8, "3C"),
    make(9, "3D"),
    make(10, "3H"),
    make(11, "3S"),
    make(12, "4C"),
    make(13, "4D"),
    make(14, "4H"),
    make(15, "4S"),
    make(16, "5C"),
    make(17, "5D"),
    make(18, "5H"),
    make(19, "5S"),
    make(20, "6C"),
    make(21, "6D"),
    make(22, "6H"),
    make(23, "6S"),
    make(24, "7C"),
    make(25, "7D"),
    make(26, "7H"),
    make(27, "7S"),
    make(28, "8C"),
    make(29, "8D"),
    make(30, "8H"),
    make(31, "8S"),
    make(32, "9C"),
    make(33, "9D"),
    make(34, "9H"),
    make(35, "9S"),
    make(36, "TC"),
    make(37, "TD"),
    make(38, "TH"),
    make(39, "TS"),
    make(40, "JC"),
    make(41, "JD"),
    make(42, "JH"),
    make(43, "JS"),
    make(44, "QC"),
    make(45, "QD"),
    make(46, "QH"),
    make(47, "QS"),
    make(48, "KC"),
    make(49, "KD"),
    make(50, "KH"),
    make(51, "KS"),
];

#[inline]
pub fn is_card(id: u32) -> bool {
    (id as usize) < DECK_SIZE
}

#[inline]
pub fn get(id: u8) -> Option<&'static Card> {
    DECK.get(id as usize)
}

#[inline]
pub const fn card_id(rank: Rank, suit: Suit) -> u8 {
    rank.value() * 4 + suit.index()
}

/// The king of `suit`; the game is won when all four sit on their foundations.
#[inline]
pub const fn king_of(suit: Suit) -> u8 {
    card_id(Rank::King, suit)
}

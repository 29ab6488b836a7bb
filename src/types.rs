use serde::{Deserialize, Serialize};

/// Number of freecell slots.
pub const FREECELLS: u8 = 4;
/// Number of cascade columns.
pub const CASCADES: u8 = 8;
/// Rows available in each cascade (legacy board ids 8..=167).
pub const CASCADE_ROWS: u8 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Club,
    Diamond,
    Heart,
    Spade,
}

impl Suit {
    /// Foundation order: clubs, diamonds, hearts, spades.
    pub const ALL: [Suit; 4] = [Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade];

    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    #[inline]
    pub fn from_index(idx: u8) -> Option<Self> {
        Self::ALL.get(idx as usize).copied()
    }

    #[inline]
    pub const fn color(self) -> Color {
        match self {
            Suit::Club | Suit::Spade => Color::Black,
            Suit::Diamond | Suit::Heart => Color::Red,
        }
    }

    #[inline]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Club => 'C',
            Suit::Diamond => 'D',
            Suit::Heart => 'H',
            Suit::Spade => 'S',
        }
    }
}

/// Card rank, ace low (`Ace` = 0 .. `King` = 12).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    #[inline]
    pub const fn value(self) -> u8 {
        self as u8
    }

    #[inline]
    pub fn from_value(v: u8) -> Option<Self> {
        Self::ALL.get(v as usize).copied()
    }

    /// The rank directly above, or None for a king.
    #[inline]
    pub fn succ(self) -> Option<Self> {
        Self::from_value(self.value() + 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Black,
    Red,
}

/// One of the 16 piles on the table, addressed by pile id 0..=15:
/// freecells 0..=3, foundations 4..=7 (suit order), cascades 8..=15.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pile {
    Freecell(u8),
    Foundation(Suit),
    Cascade(u8),
}

impl Pile {
    #[inline]
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            0..=3 => Some(Pile::Freecell(id)),
            4..=7 => Suit::from_index(id - 4).map(Pile::Foundation),
            8..=15 => Some(Pile::Cascade(id - 8)),
            _ => None,
        }
    }

    #[inline]
    pub fn id(self) -> u8 {
        match self {
            Pile::Freecell(cell) => cell,
            Pile::Foundation(suit) => 4 + suit.index(),
            Pile::Cascade(column) => column.saturating_add(8),
        }
    }

    /// False for slot or column numbers past the table.
    #[inline]
    pub fn is_valid(self) -> bool {
        match self {
            Pile::Freecell(cell) => cell < FREECELLS,
            Pile::Foundation(_) => true,
            Pile::Cascade(column) => column < CASCADES,
        }
    }

    /// All freecell piles in slot order.
    #[inline]
    pub fn freecells() -> impl Iterator<Item = Pile> {
        (0..FREECELLS).map(Pile::Freecell)
    }

    /// All cascade piles in column order.
    #[inline]
    pub fn cascades() -> impl Iterator<Item = Pile> {
        (0..CASCADES).map(Pile::Cascade)
    }
}

#![allow(dead_code)]

use freecell_rules::{Board, Card, Location, DECK};

/// Card id for a two-character symbol such as "TD".
pub fn id(sym: &str) -> u8 {
    Card::from_sym(sym).expect("card symbol").id
}

pub fn cascade(column: u8, row: u8) -> Location {
    Location::cascade(column, row).expect("cascade cell")
}

/// Scenario board: listed cards go where given, every other card is buried
/// under its own suit's foundation and plays no part.
pub fn board_with(placements: &[(&str, Location)]) -> Board {
    let mut locations = DECK.map(|c| Location::FoundationHidden(c.suit));
    for (sym, loc) in placements {
        locations[id(sym) as usize] = *loc;
    }
    Board::from_locations(locations).expect("valid scenario board")
}

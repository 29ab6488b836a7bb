//! Move legality: cascade runs, movable stack size, and the predicates
//! deciding what may be picked up and where it may go.

use tracing::error;

use crate::board::Board;
use crate::cards::{self, Card};
use crate::location::{Location, Pick};
use crate::state::GameState;
use crate::types::{Pile, Rank, Suit};

/// Most cards `selected_run` will report.
pub const SELECTION_RUN_CAP: usize = 10;
/// Longest possible alternating run (king down to ace).
const SEQUENCE_CAP: usize = 13;

/// Largest number of cards that may move together.
///
/// With no empty cascade this is `free + 1`. Otherwise one empty cascade is
/// discounted when it is the destination; any remaining empty cascades give
/// `2 * (free + 1 + (empty - 1))`. This is the conservative variant that
/// doubles once rather than per empty cascade.
pub fn movable_stack_size(board: &Board, empty_cascade_used: bool) -> usize {
    let free = board.empty_freecells();
    let mut empty = board.empty_cascades();
    if empty == 0 {
        return free + 1;
    }
    if empty_cascade_used {
        empty -= 1;
    }
    if empty > 0 {
        2 * (free + 1 + (empty - 1))
    } else {
        free + 1
    }
}

/// True if `card` is the next card for `suit`'s foundation whose visible top
/// is `top` (None when the foundation is empty).
pub fn is_next_in_foundation(suit: Suit, top: Option<&Card>, card: &Card) -> bool {
    if card.suit != suit {
        return false;
    }
    match top {
        None => card.rank == Rank::Ace,
        Some(top) => top.rank.succ() == Some(card.rank),
    }
}

/// True if `card` could go on the exposed card of some cascade.
pub fn can_move_to_cascade(board: &Board, card: &Card) -> bool {
    (0..crate::types::CASCADES)
        .filter_map(|column| board.last_in_cascade(column))
        .any(|top| top.can_stack(card))
}

#[inline]
fn card_above(board: &Board, card: u8) -> Option<&'static Card> {
    board
        .location(card)
        .above()
        .and_then(|loc| board.card_at(loc))
}

/// The run that would be picked up with `card`: just the card for a
/// freecell; for a cascade, the card and the alternating run on it, which
/// must reach the top of the cascade, fit within the movable stack size and
/// be no longer than a selection can hold. Empty when the card cannot be
/// picked up as such.
pub fn movable_sequence(board: &Board, card: u8) -> Vec<u8> {
    let Some(first) = cards::get(card) else {
        return Vec::new();
    };
    match board.location(card) {
        Location::Freecell(_) => vec![card],
        Location::Cascade { .. } => {
            let mut run = vec![card];
            let mut current = first;
            while let Some(next) = card_above(board, current.id) {
                if !current.can_stack(next) {
                    break;
                }
                if run.len() >= SEQUENCE_CAP {
                    error!(card = %first, "sequence scan hit its safety cap");
                    break;
                }
                run.push(next.id);
                current = next;
            }

            if !board.is_last_in_cascade(current.id) || run.len() > SELECTION_RUN_CAP {
                return Vec::new();
            }

            let needs_empty_cascade = !can_move_to_cascade(board, first);
            if run.len() > movable_stack_size(board, needs_empty_cascade) {
                return Vec::new();
            }
            run
        }
        Location::Foundation(_) | Location::FoundationHidden(_) => Vec::new(),
    }
}

/// The selected card followed by the alternating run stacked on it.
/// A freecell selection is a single card.
pub fn selected_run(board: &Board, selected: Option<u8>) -> Vec<u8> {
    let Some(first) = selected.and_then(cards::get) else {
        return Vec::new();
    };
    let mut run = vec![first.id];
    if !board.location(first.id).is_cascade() {
        return run;
    }

    let mut current = first;
    while let Some(next) = card_above(board, current.id) {
        if !current.can_stack(next) {
            break;
        }
        if run.len() >= SELECTION_RUN_CAP {
            error!(card = %first, "selection run hit its safety cap");
            break;
        }
        run.push(next.id);
        current = next;
    }
    run
}

/// Whether `pick` may be picked up: a card off the foundations whose
/// movable run has at least one legal destination.
pub fn can_select_card(board: &Board, pick: Pick) -> bool {
    let Pick::Card(id) = pick else {
        return false;
    };
    if cards::get(id).is_none() {
        return false;
    }
    let loc = board.location(id);
    if !(loc.is_cascade() || loc.is_freecell()) {
        return false;
    }

    let run = movable_sequence(board, id);
    let Some(lead) = run.first().and_then(|&c| cards::get(c)) else {
        return false;
    };

    if run.len() == 1 {
        if board.empty_freecells() > 0 {
            return true;
        }
        if board.is_empty_pile(Pile::Foundation(lead.suit)) && lead.rank == Rank::Ace {
            return true;
        }
        if is_next_in_foundation(lead.suit, board.foundation_top(lead.suit), lead) {
            return true;
        }
    }
    if board.empty_cascades() > 0 {
        return true;
    }
    can_move_to_cascade(board, lead)
}

/// Whether `run` (lead card first) may be placed on `pick`. A cascade run
/// must reach the top of its cascade.
pub fn can_place_card(board: &Board, run: &[u8], pick: Pick) -> bool {
    let Some(lead) = run.first().and_then(|&c| cards::get(c)) else {
        return false;
    };
    let Some(&last) = run.last() else {
        return false;
    };
    if board.get(last).is_some_and(Location::is_cascade) && !board.is_last_in_cascade(last) {
        return false;
    }

    match pick {
        Pick::EmptyPile(pile) => {
            if !pile.is_valid() {
                error!(pile = pile.id(), "placement on a pile that does not exist");
                return false;
            }
            match pile {
                Pile::Freecell(_) => run.len() == 1 && board.is_empty_pile(pile),
                Pile::Foundation(suit) => {
                    run.len() == 1
                        && lead.suit == suit
                        && lead.rank == Rank::Ace
                        && board.is_empty_pile(pile)
                }
                Pile::Cascade(_) => {
                    board.is_empty_pile(pile) && run.len() <= movable_stack_size(board, true)
                }
            }
        }
        Pick::Card(id) => {
            let Some(target) = cards::get(id) else {
                return false;
            };
            match board.location(id) {
                Location::Foundation(suit) => {
                    run.len() == 1 && is_next_in_foundation(suit, Some(target), lead)
                }
                loc @ Location::Cascade { .. } => {
                    board.is_last_in_cascade(id) && loc.above().is_some() && target.can_stack(lead)
                }
                // Freecell cards and buried cards never take a placement.
                Location::Freecell(_) | Location::FoundationHidden(_) => false,
            }
        }
    }
}

/// The legality check behind `interact`: placement when a selection is
/// active, selection otherwise.
pub fn can_interact(state: &GameState, pick: Pick) -> bool {
    if state.selected.is_some() {
        let run = selected_run(&state.board, state.selected);
        return can_place_card(&state.board, &run, pick);
    }
    can_select_card(&state.board, pick)
}

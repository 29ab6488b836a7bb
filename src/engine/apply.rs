use tracing::{debug, error};

use crate::board::Board;
use crate::cards::{self, Card};
use crate::engine::legal::{
    can_interact, can_select_card, is_next_in_foundation, movable_stack_size, selected_run,
};
use crate::location::{Location, Pick};
use crate::state::GameState;
use crate::types::{Pile, Rank};

/// Handle one player gesture.
///
/// With nothing selected, a selectable card becomes the selection. With a
/// selection, a legal target receives the selected run; any other pick drops
/// the selection and, if it is a different selectable card, selects that
/// instead. Returns true only when cards moved (and a snapshot was recorded).
pub fn interact(state: &mut GameState, pick: Pick) -> bool {
    if !can_interact(state, pick) {
        let previous = state.selected.take();
        if let Pick::Card(id) = pick {
            if previous != Some(id) && can_select_card(&state.board, pick) {
                debug!(card = %pick, "selected");
                state.selected = Some(id);
            }
        }
        return false;
    }

    let Some(lead_id) = state.selected else {
        if let Pick::Card(id) = pick {
            debug!(card = %pick, "selected");
            state.selected = Some(id);
        }
        return false;
    };

    let run = selected_run(&state.board, Some(lead_id));
    state.selected = None;
    let Some(lead) = cards::get(lead_id) else {
        error!(lead_id, "selection is not a card");
        return false;
    };

    let moved = match pick {
        Pick::EmptyPile(pile) => place_on_empty_pile(&mut state.board, lead, &run, pile),
        Pick::Card(target) => place_on_card(&mut state.board, lead, &run, target),
    };
    if moved {
        state.history.record(state.board);
        debug!(
            lead = %lead,
            cards = run.len(),
            target = %pick,
            moves = crate::engine::score::move_count(&state.history),
            "moved"
        );
    }
    moved
}

fn place_on_empty_pile(board: &mut Board, lead: &Card, run: &[u8], pile: Pile) -> bool {
    match pile {
        Pile::Freecell(_) if run.len() == 1 => {
            board.is_empty_pile(pile) && move_run(board, run, Location::base_of(pile))
        }
        Pile::Foundation(suit) if run.len() == 1 => {
            if lead.suit != suit || lead.rank != Rank::Ace || !board.is_empty_pile(pile) {
                return false;
            }
            board.set(lead.id, Location::Foundation(suit));
            true
        }
        Pile::Cascade(_) => {
            if !board.is_empty_pile(pile) {
                return false;
            }
            // Taking the empty cascade shrinks the capacity; check again.
            if run.len() > movable_stack_size(board, true) {
                error!(cards = run.len(), "aborting sequence move onto empty cascade");
                return false;
            }
            move_run(board, run, Location::base_of(pile))
        }
        _ => false,
    }
}

fn place_on_card(board: &mut Board, lead: &Card, run: &[u8], target_id: u8) -> bool {
    let Some(target) = cards::get(target_id) else {
        return false;
    };
    match board.location(target_id) {
        Location::Foundation(suit) if run.len() == 1 => {
            if !is_next_in_foundation(suit, Some(target), lead) {
                return false;
            }
            board.set(target.id, Location::FoundationHidden(suit));
            board.set(lead.id, Location::Foundation(suit));
            true
        }
        loc @ Location::Cascade { .. } => {
            if !target.can_stack(lead) {
                return false;
            }
            match loc.above() {
                Some(dest) => move_run(board, run, dest),
                None => false,
            }
        }
        _ => false,
    }
}

/// Move `run` so its lead lands on `dest` and each following card sits on
/// the one before. All destinations are worked out before anything moves.
fn move_run(board: &mut Board, run: &[u8], dest: Location) -> bool {
    let Some(&last) = run.last() else {
        return false;
    };
    if board.location(last).is_cascade() && !board.is_last_in_cascade(last) {
        error!(cards = run.len(), "run does not reach the top of its cascade; aborting move");
        return false;
    }

    let mut targets = Vec::with_capacity(run.len());
    let mut next = Some(dest);
    for _ in run {
        let Some(loc) = next else {
            error!(cards = run.len(), %dest, "run does not fit in the cascade; aborting move");
            return false;
        };
        targets.push(loc);
        next = loc.above();
    }

    for (&card, loc) in run.iter().zip(targets) {
        board.set(card, loc);
    }
    true
}

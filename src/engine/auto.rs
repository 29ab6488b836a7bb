use tracing::debug;

use crate::board::Board;
use crate::cards::Card;
use crate::engine::legal::is_next_in_foundation;
use crate::location::Location;
use crate::state::GameState;
use crate::types::{Suit, CASCADES, FREECELLS};

/// Freecell occupants in slot order, then the exposed card of each cascade.
fn promotion_candidates(board: &Board) -> impl Iterator<Item = &'static Card> + '_ {
    let freecells = (0..FREECELLS).map(move |cell| board.card_at(Location::Freecell(cell)));
    let cascades = (0..CASCADES).map(move |column| board.last_in_cascade(column));
    freecells.chain(cascades).flatten()
}

/// Promote at most one card to its foundation.
///
/// A candidate qualifies when its rank is above the lowest foundation top by
/// at least one and at most `rules.auto_promote_lead` (an empty foundation
/// counts as one below ace), and it is the next card for its suit. The first
/// qualifying candidate is promoted and recorded. Returns true if a card moved.
pub fn auto_move_card(state: &mut GameState) -> bool {
    let rules = state.rules;
    if !rules.auto_promote_enabled() {
        return false;
    }
    if rules.auto_promote_after_first_move && state.history.count() < 2 {
        return false;
    }

    let tops = Suit::ALL.map(|suit| state.board.foundation_top(suit));
    let min_rank = if tops.iter().all(Option::is_some) {
        tops.iter()
            .flatten()
            .map(|top| i16::from(top.rank.value()))
            .min()
    } else {
        None
    };
    let floor = min_rank.unwrap_or(-1);
    let lead = i16::from(rules.auto_promote_lead);

    let promoted = promotion_candidates(&state.board).find(|card| {
        let rank = i16::from(card.rank.value());
        rank > floor
            && rank <= floor + lead
            && is_next_in_foundation(card.suit, tops[card.suit.index() as usize], card)
    });
    let Some(card) = promoted else {
        return false;
    };

    state.board.bury_foundation_top(card.suit);
    state.board.set(card.id, Location::Foundation(card.suit));
    state.history.record(state.board);
    if state.selected == Some(card.id) {
        state.selected = None;
    }
    debug!(card = %card, "auto-promoted");
    true
}

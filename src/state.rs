use tracing::{debug, error, instrument, warn};

use crate::board::Board;
use crate::cards::{self, Card, DECK_SIZE};
use crate::engine;
use crate::error::EngineError;
use crate::history::History;
use crate::location::{Location, Pick};
use crate::rng::deal_for_seed;
use crate::rules::Rules;
use crate::seed::{self, Seed};
use crate::types::Suit;

/// One game of FreeCell: the deal, the board, the current selection and the
/// move history. The board is only changed through the methods here.
#[derive(Debug, Clone)]
pub struct GameState {
    pub(crate) seed: Seed,
    pub(crate) deal: [Card; DECK_SIZE],
    pub(crate) board: Board,
    pub(crate) selected: Option<u8>,
    pub(crate) history: History,
    pub(crate) rules: Rules,
}

impl GameState {
    /// Deal game `seed`.
    pub fn new(seed: Seed, rules: Rules) -> Self {
        let deal = deal_for_seed(seed.get());
        let board = Board::from_deal(&deal);
        Self {
            seed,
            deal,
            board,
            selected: None,
            history: History::starting_from(board),
            rules,
        }
    }

    /// Start from an arbitrary position; it becomes the only snapshot.
    pub fn with_board(seed: Seed, board: Board, rules: Rules) -> Self {
        Self {
            seed,
            deal: deal_for_seed(seed.get()),
            board,
            selected: None,
            history: History::starting_from(board),
            rules,
        }
    }

    /// Replace the session with a fresh deal of `seed`. Out-of-range seeds
    /// leave the current game untouched.
    #[instrument(level = "debug", skip(self))]
    pub fn new_game(&mut self, seed: u32) -> Result<(), EngineError> {
        let seed = Seed::new(seed)?;
        self.seed = seed;
        self.selected = None;
        self.deal = deal_for_seed(seed.get());
        self.board = Board::from_deal(&self.deal);
        self.history.reset();
        self.history.record(self.board);
        debug!(game = %seed, solvable = seed.is_solvable(), "new game");
        Ok(())
    }

    #[inline]
    pub fn seed(&self) -> Seed {
        self.seed
    }

    /// The shuffled deck in dealt order.
    #[inline]
    pub fn deal(&self) -> &[Card; DECK_SIZE] {
        &self.deal
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The board before the latest committed change (the deal itself when
    /// nothing has been committed).
    pub fn previous_board(&self) -> &Board {
        self.history.previous().unwrap_or(&self.board)
    }

    #[inline]
    pub fn history(&self) -> &History {
        &self.history
    }

    #[inline]
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    #[inline]
    pub fn set_rules(&mut self, rules: Rules) {
        self.rules = rules;
    }

    /// The selected card id, if any.
    #[inline]
    pub fn selected(&self) -> Option<u8> {
        self.selected
    }

    /// The selected card followed by the alternating run stacked on it.
    /// Empty when nothing is selected.
    pub fn get_selected(&self) -> Vec<u8> {
        engine::legal::selected_run(&self.board, self.selected)
    }

    /// True if `card` would move with the current selection.
    pub fn is_selected(&self, card: u8) -> bool {
        self.get_selected().contains(&card)
    }

    #[inline]
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// All four kings showing on their own foundations.
    pub fn is_game_won(&self) -> bool {
        Suit::ALL
            .iter()
            .all(|&suit| self.board.location(cards::king_of(suit)) == Location::Foundation(suit))
    }

    /// False for the handful of known unsolvable game numbers.
    #[inline]
    pub fn is_game_solvable(seed: u32) -> bool {
        seed::is_solvable(seed)
    }

    #[inline]
    pub fn move_count(&self) -> usize {
        engine::score::move_count(&self.history)
    }

    /// Step back one committed change. The deal itself cannot be undone.
    #[instrument(level = "debug", skip(self))]
    pub fn undo(&mut self) {
        self.selected = None;
        match self.history.undo() {
            Some(board) => self.board = board,
            None => error!("undo with an empty history"),
        }
    }

    #[inline]
    pub fn can_interact(&self, pick: Pick) -> bool {
        engine::legal::can_interact(self, pick)
    }

    /// See [`engine::apply::interact`].
    #[instrument(level = "debug", skip(self, pick), fields(pick = %pick))]
    pub fn interact(&mut self, pick: Pick) -> bool {
        engine::apply::interact(self, pick)
    }

    /// `interact` for a legacy integer pick; anything that is neither a card
    /// id nor an empty pile is ignored.
    pub fn interact_raw(&mut self, pick: u32) -> bool {
        match Pick::from_raw(pick) {
            Ok(pick) => self.interact(pick),
            Err(e) => {
                warn!(error = %e, "ignoring pick");
                false
            }
        }
    }

    /// See [`engine::auto::auto_move_card`].
    #[instrument(level = "debug", skip(self))]
    pub fn auto_move_card(&mut self) -> bool {
        engine::auto::auto_move_card(self)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Seed::default(), Rules::default())
    }
}

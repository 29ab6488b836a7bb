mod common;

use common::{board_with, cascade, id};
use freecell_rules::{GameState, Location, Pick, Pile, Rules, Seed, Suit};

fn scenario(board: freecell_rules::Board, rules: Rules) -> GameState {
    GameState::with_board(Seed::default(), board, rules)
}

/// Auto-promotion without the first-move hold.
fn eager(lead: u8) -> Rules {
    Rules::new(lead, false)
}

#[test]
fn waits_for_the_first_move() {
    let board = board_with(&[
        ("9H", cascade(0, 0)),
        ("AC", cascade(0, 1)),
        ("5S", cascade(1, 0)),
    ]);
    let mut state = scenario(board, Rules::default());

    assert!(!state.auto_move_card());
    assert_eq!(state.board().location(id("AC")), cascade(0, 1));

    assert!(!state.interact(Pick::Card(id("5S"))));
    assert!(state.interact(Pick::EmptyPile(Pile::Freecell(0))));

    assert!(state.auto_move_card());
    assert_eq!(state.board().location(id("AC")), Location::Foundation(Suit::Club));
    assert_eq!(state.history().len(), 3);
    assert_eq!(state.move_count(), 2);

    // Nothing else is within reach of the empty foundations.
    assert!(!state.auto_move_card());
    assert_eq!(state.history().len(), 3);
}

#[test]
fn default_lead_allows_one_rank_of_slack() {
    let board = board_with(&[
        ("3C", Location::Foundation(Suit::Club)),
        ("2D", Location::Foundation(Suit::Diamond)),
        ("2H", Location::Foundation(Suit::Heart)),
        ("2S", Location::Foundation(Suit::Spade)),
        ("4C", cascade(0, 0)),
    ]);

    let rules = Rules {
        auto_promote_after_first_move: false,
        ..Rules::classic()
    };
    let mut classic = scenario(board, rules);
    assert!(!classic.auto_move_card());
    assert_eq!(classic.board().location(id("4C")), cascade(0, 0));

    let mut state = scenario(board, eager(2));
    assert!(state.auto_move_card());
    assert_eq!(state.board().location(id("4C")), Location::Foundation(Suit::Club));
    assert_eq!(state.board().location(id("3C")), Location::FoundationHidden(Suit::Club));
}

#[test]
fn two_ranks_ahead_is_too_far() {
    let board = board_with(&[
        ("4C", Location::Foundation(Suit::Club)),
        ("2D", Location::Foundation(Suit::Diamond)),
        ("2H", Location::Foundation(Suit::Heart)),
        ("2S", Location::Foundation(Suit::Spade)),
        ("5C", cascade(0, 0)),
    ]);
    let mut state = scenario(board, eager(2));
    assert!(!state.auto_move_card());
    assert_eq!(state.board().location(id("5C")), cascade(0, 0));
}

#[test]
fn empty_foundation_counts_as_below_ace() {
    let board = board_with(&[
        ("AC", Location::Foundation(Suit::Club)),
        ("2C", cascade(3, 0)),
    ]);

    let mut state = scenario(board, eager(2));
    assert!(state.auto_move_card());
    assert_eq!(state.board().location(id("2C")), Location::Foundation(Suit::Club));

    let mut classic = scenario(board, eager(1));
    assert!(!classic.auto_move_card());
}

#[test]
fn freecells_are_promoted_before_cascades() {
    let board = board_with(&[("AS", cascade(0, 0)), ("AD", Location::Freecell(2))]);
    let mut state = scenario(board, eager(2));

    assert!(state.auto_move_card());
    assert_eq!(state.board().location(id("AD")), Location::Foundation(Suit::Diamond));
    assert_eq!(state.board().location(id("AS")), cascade(0, 0));

    assert!(state.auto_move_card());
    assert_eq!(state.board().location(id("AS")), Location::Foundation(Suit::Spade));
    assert!(!state.auto_move_card());
}

#[test]
fn only_exposed_cards_are_candidates() {
    let board = board_with(&[("AH", cascade(2, 0)), ("KS", cascade(2, 1))]);
    let mut state = scenario(board, eager(2));
    assert!(!state.auto_move_card());
}

#[test]
fn promoting_the_selected_card_clears_selection() {
    let board = board_with(&[("AH", cascade(2, 0)), ("7S", cascade(4, 0))]);
    let mut state = scenario(board, eager(2));

    assert!(!state.interact(Pick::Card(id("AH"))));
    assert_eq!(state.selected(), Some(id("AH")));
    assert!(state.auto_move_card());
    assert_eq!(state.selected(), None);

    let mut other = scenario(board, eager(2));
    assert!(!other.interact(Pick::Card(id("7S"))));
    assert!(other.auto_move_card());
    assert_eq!(other.selected(), Some(id("7S")));
}

#[test]
fn manual_rules_never_promote() {
    let board = board_with(&[("AC", cascade(0, 0))]);
    let mut state = scenario(board, Rules::manual());
    assert!(!state.auto_move_card());

    state.set_rules(eager(2));
    assert!(state.auto_move_card());
}

#[test]
fn promotion_is_undoable() {
    let board = board_with(&[("AC", cascade(0, 0)), ("2C", Location::Freecell(0))]);
    let mut state = scenario(board, eager(2));

    assert!(state.auto_move_card());
    assert!(state.auto_move_card());
    assert_eq!(state.board().foundation_top(Suit::Club).map(|c| c.sym), Some("2C"));

    state.undo();
    assert_eq!(state.board().foundation_top(Suit::Club).map(|c| c.sym), Some("AC"));
    assert_eq!(state.board().location(id("2C")), Location::Freecell(0));
    state.undo();
    assert_eq!(*state.board(), board);
}

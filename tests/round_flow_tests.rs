//! Round flow integration tests.
//!
//! These tests drive full sessions through the public API the way a
//! presentation layer would: start a round, feed selections, replay,
//! and leave for the top screen, checking state and event traffic at
//! each step.

use std::cell::RefCell;
use std::rc::Rc;

use karuta_engine::{
    Card, CardId, Deck, Intent, KarutaError, MatchOutcome, RoundController, RoundEvent,
    RoundPhase, RoundState, TatamiSize,
};

fn deck_of(count: u32) -> Deck {
    Deck::from_cards(
        (1..=count).map(|i| Card::new(CardId::new(i), format!("Proto {i}"), format!("summary {i}"))),
    )
}

fn record_events(controller: &mut RoundController) -> Rc<RefCell<Vec<RoundEvent>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    controller.subscribe(move |event: &RoundEvent| sink.borrow_mut().push(event.clone()));
    log
}

/// Select the active yomifuda until the round completes.
fn play_to_completion(controller: &mut RoundController) {
    while let Some(yomifuda) = controller.state().and_then(RoundState::yomifuda) {
        controller.submit_selection(yomifuda).unwrap();
    }
}

/// A card still in play that is not the active yomifuda.
fn wrong_pick(state: &RoundState) -> CardId {
    let yomifuda = state.yomifuda().unwrap();
    *state.remaining().iter().find(|&&id| id != yomifuda).unwrap()
}

// =============================================================================
// Full Round Scenarios
// =============================================================================

/// Test a complete four-card round over a ten-card deck.
#[test]
fn test_ten_card_deck_four_card_round() {
    let mut controller = RoundController::with_seed(deck_of(10), 42);

    let opening = controller.start_round(TatamiSize::Four).unwrap();
    assert_eq!(opening.tatami().len(), 4);
    assert_eq!(opening.remaining().len(), 4);
    assert!(opening.mochifuda().is_empty());
    assert_eq!(opening.phase(), RoundPhase::AwaitingSelection);

    // The layout is drawn from the deck, without duplicates.
    let mut laid: Vec<CardId> = opening.tatami().cards().to_vec();
    laid.sort_unstable();
    laid.dedup();
    assert_eq!(laid.len(), 4);
    for id in opening.tatami().cards() {
        assert!(controller.deck().contains(*id));
    }

    for expected_score in 1..=4u32 {
        let yomifuda = controller.state().unwrap().yomifuda().unwrap();
        let outcome = controller.submit_selection(yomifuda).unwrap();
        assert!(matches!(outcome, MatchOutcome::Correct { card, .. } if card == yomifuda));
        assert_eq!(controller.state().unwrap().score(), expected_score);
    }

    let final_state = controller.state().unwrap();
    assert!(final_state.is_complete());
    assert_eq!(final_state.score(), 4);
    assert!(final_state.remaining().is_empty());
    assert_eq!(final_state.mochifuda().len(), 4);
    assert_eq!(final_state.yomifuda(), None);
}

/// Test that misses stall the round without losing progress.
#[test]
fn test_misses_do_not_lose_progress() {
    let mut controller = RoundController::with_seed(deck_of(10), 7);
    controller.start_round(TatamiSize::Four).unwrap();

    let yomifuda = controller.state().unwrap().yomifuda().unwrap();
    let wrong = wrong_pick(controller.state().unwrap());

    // Three misses in a row: same yomifuda, nothing captured.
    for _ in 0..3 {
        let outcome = controller.submit_selection(wrong).unwrap();
        assert_eq!(outcome, MatchOutcome::Incorrect { selected: wrong });
        let state = controller.state().unwrap();
        assert_eq!(state.yomifuda(), Some(yomifuda));
        assert_eq!(state.score(), 0);
        assert_eq!(state.remaining().len(), 4);
    }

    // The correct card still captures.
    let outcome = controller.submit_selection(yomifuda).unwrap();
    assert!(matches!(outcome, MatchOutcome::Correct { .. }));
    assert_eq!(controller.state().unwrap().score(), 1);
}

/// Test that a double-click on a just-captured card is refused.
#[test]
fn test_double_click_is_refused() {
    let mut controller = RoundController::with_seed(deck_of(10), 42);
    controller.start_round(TatamiSize::Four).unwrap();

    let first = controller.state().unwrap().yomifuda().unwrap();
    controller.submit_selection(first).unwrap();

    let err = controller.submit_selection(first).unwrap_err();
    assert_eq!(err, KarutaError::InvalidSelection { card: first });

    let state = controller.state().unwrap();
    assert_eq!(state.score(), 1);
    assert!(state.is_captured(first));
}

/// Test that deck cards not laid out this round are not selectable.
#[test]
fn test_off_tatami_card_is_refused() {
    let mut controller = RoundController::with_seed(deck_of(10), 42);
    let opening = controller.start_round(TatamiSize::Four).unwrap();

    let off_tatami = (1..=10)
        .map(CardId::new)
        .find(|id| !opening.tatami().contains(*id))
        .unwrap();

    let err = controller.submit_selection(off_tatami).unwrap_err();
    assert_eq!(err, KarutaError::InvalidSelection { card: off_tatami });
    assert_eq!(controller.state().unwrap().score(), 0);
}

// =============================================================================
// Replay and Back To Top
// =============================================================================

/// Test that replay wipes progress and lays a fresh round.
#[test]
fn test_replay_is_a_fresh_round() {
    let mut controller = RoundController::with_seed(deck_of(10), 42);
    controller.start_round(TatamiSize::Four).unwrap();
    play_to_completion(&mut controller);
    assert!(controller.state().unwrap().is_complete());

    let opening = controller.replay().unwrap();

    assert_eq!(opening.score(), 0);
    assert!(opening.mochifuda().is_empty());
    assert_eq!(opening.remaining().len(), 4);
    assert_eq!(opening.phase(), RoundPhase::AwaitingSelection);
    assert_eq!(opening.recipe(), TatamiSize::Four);
}

/// Test that the replayed round is independent of the one it replaces.
#[test]
fn test_replay_independence() {
    // With a seeded session the replacement layout is reproducible but
    // owes nothing to how far the previous round got.
    let mut interrupted = RoundController::with_seed(deck_of(20), 9);
    interrupted.start_round(TatamiSize::Eight).unwrap();
    for _ in 0..3 {
        let yomifuda = interrupted.state().unwrap().yomifuda().unwrap();
        interrupted.submit_selection(yomifuda).unwrap();
    }
    let after_play = interrupted.replay().unwrap();

    let mut untouched = RoundController::with_seed(deck_of(20), 9);
    untouched.start_round(TatamiSize::Eight).unwrap();
    let after_idle = untouched.replay().unwrap();

    assert_eq!(after_play.tatami(), after_idle.tatami());
    assert_eq!(after_play.yomifuda(), after_idle.yomifuda());
}

/// Test leaving for the top screen and coming back.
#[test]
fn test_back_to_top_round_trip() {
    let mut controller = RoundController::with_seed(deck_of(10), 42);
    controller.start_round(TatamiSize::Four).unwrap();

    controller.back_to_top();
    assert!(controller.state().is_none());
    assert!(controller.snapshot().is_none());

    // Selections have nothing to land on.
    let err = controller.submit_selection(CardId::new(1)).unwrap_err();
    assert_eq!(err, KarutaError::NoActiveRound);

    // A second back-to-top changes nothing.
    controller.back_to_top();
    assert!(controller.state().is_none());

    // The session remembers the recipe, so replay works from the top.
    let opening = controller.replay().unwrap();
    assert_eq!(opening.recipe(), TatamiSize::Four);
}

/// Test that replay with no round ever started is refused.
#[test]
fn test_replay_requires_a_session_round() {
    let mut controller = RoundController::with_seed(deck_of(10), 42);

    assert_eq!(controller.replay().unwrap_err(), KarutaError::NoActiveRound);

    controller.back_to_top();
    assert_eq!(controller.replay().unwrap_err(), KarutaError::NoActiveRound);
}

// =============================================================================
// Events
// =============================================================================

/// Test the exact event order for a round with one miss.
#[test]
fn test_event_order_with_a_miss() {
    let mut controller = RoundController::with_seed(deck_of(10), 42);
    controller.start_round(TatamiSize::Four).unwrap();
    let events = record_events(&mut controller);

    let wrong = wrong_pick(controller.state().unwrap());
    controller.submit_selection(wrong).unwrap();
    let mut captures = Vec::new();
    while let Some(yomifuda) = controller.state().and_then(RoundState::yomifuda) {
        controller.submit_selection(yomifuda).unwrap();
        captures.push(yomifuda);
    }

    let mut expected = vec![RoundEvent::Incorrect { selected: wrong }];
    expected.extend(captures.iter().map(|&card| RoundEvent::Correct { card }));
    expected.push(RoundEvent::RoundComplete { score: 4, mochifuda: captures });

    assert_eq!(*events.borrow(), expected);
}

/// Test that replay and back-to-top notify observers.
#[test]
fn test_lifecycle_events() {
    let mut controller = RoundController::with_seed(deck_of(10), 42);
    let events = record_events(&mut controller);

    controller.start_round(TatamiSize::Four).unwrap();
    controller.replay().unwrap();
    controller.back_to_top();

    assert_eq!(*events.borrow(), vec![RoundEvent::Replay, RoundEvent::BackToTop]);
}

/// Test that every subscribed observer sees every event.
#[test]
fn test_multiple_observers() {
    let mut controller = RoundController::with_seed(deck_of(10), 42);
    let first = record_events(&mut controller);
    let second = record_events(&mut controller);

    controller.start_round(TatamiSize::Four).unwrap();
    play_to_completion(&mut controller);

    assert_eq!(*first.borrow(), *second.borrow());
    assert_eq!(first.borrow().len(), 5);
}

// =============================================================================
// Intents
// =============================================================================

/// Test driving a whole session through dispatch.
#[test]
fn test_session_via_intents() {
    let mut controller = RoundController::with_seed(deck_of(10), 42);
    controller.start_round(TatamiSize::Four).unwrap();

    while let Some(yomifuda) = controller.state().and_then(RoundState::yomifuda) {
        let outcome = controller.dispatch(Intent::SelectCard(yomifuda)).unwrap();
        assert!(matches!(outcome, Some(MatchOutcome::Correct { .. })));
    }
    assert!(controller.state().unwrap().is_complete());

    assert_eq!(controller.dispatch(Intent::Replay).unwrap(), None);
    assert_eq!(controller.state().unwrap().score(), 0);

    assert_eq!(controller.dispatch(Intent::BackToTop).unwrap(), None);
    assert!(controller.state().is_none());
}

// =============================================================================
// Recipes and Deck Limits
// =============================================================================

/// Test that every recipe lays exactly its size when the deck allows.
#[test]
fn test_all_recipes_over_a_large_deck() {
    for recipe in TatamiSize::ALL {
        let mut controller = RoundController::with_seed(deck_of(25), 3);
        let opening = controller.start_round(recipe).unwrap();
        assert_eq!(opening.tatami().len(), recipe.size());
    }
}

/// Test the whole-deck boundary: twenty cards into a twenty-card layout.
#[test]
fn test_twenty_card_layout_uses_whole_deck() {
    let mut controller = RoundController::with_seed(deck_of(20), 11);

    let opening = controller.start_round(TatamiSize::Twenty).unwrap();

    let mut laid: Vec<CardId> = opening.tatami().cards().to_vec();
    laid.sort_unstable();
    assert_eq!(laid, (1..=20).map(CardId::new).collect::<Vec<_>>());
}

/// Test that an undersized deck refuses the recipes it cannot fill.
#[test]
fn test_undersized_deck_refuses_large_recipes() {
    let mut controller = RoundController::with_seed(deck_of(10), 11);

    assert!(controller.start_round(TatamiSize::Eight).is_ok());
    for recipe in [TatamiSize::Twelve, TatamiSize::Sixteen, TatamiSize::Twenty] {
        let err = controller.start_round(recipe).unwrap_err();
        assert_eq!(
            err,
            KarutaError::InsufficientDeckSize { requested: recipe.size(), available: 10 }
        );
    }

    // The failed starts did not disturb the running eight-card round.
    assert_eq!(controller.state().unwrap().tatami().len(), 8);
    assert_eq!(controller.recipe(), Some(TatamiSize::Eight));
}

// =============================================================================
// Snapshots and Determinism
// =============================================================================

/// Test that a snapshot survives a serde round trip mid-round.
#[test]
fn test_snapshot_serde_round_trip() {
    let mut controller = RoundController::with_seed(deck_of(10), 42);
    controller.start_round(TatamiSize::Four).unwrap();
    let yomifuda = controller.state().unwrap().yomifuda().unwrap();
    controller.submit_selection(yomifuda).unwrap();

    let snapshot = controller.snapshot().unwrap();
    let json = serde_json::to_string(&snapshot).unwrap();
    let restored: RoundState = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.score(), 1);
    assert_eq!(restored.tatami(), snapshot.tatami());
    assert_eq!(restored.remaining(), snapshot.remaining());
    assert_eq!(restored.mochifuda(), snapshot.mochifuda());
    assert_eq!(restored.yomifuda(), snapshot.yomifuda());
    assert!(restored.is_captured(yomifuda));
}

/// Test that snapshots are frozen while the live round moves on.
#[test]
fn test_snapshot_does_not_track_the_round() {
    let mut controller = RoundController::with_seed(deck_of(10), 42);
    controller.start_round(TatamiSize::Four).unwrap();

    let snapshot = controller.snapshot().unwrap();
    play_to_completion(&mut controller);

    assert_eq!(snapshot.score(), 0);
    assert_eq!(snapshot.remaining().len(), 4);
    assert!(controller.state().unwrap().is_complete());
}

/// Test that two seeded sessions replay an identical script identically.
#[test]
fn test_seeded_sessions_are_reproducible() {
    let run = |seed: u64| {
        let mut controller = RoundController::with_seed(deck_of(20), seed);
        let events = record_events(&mut controller);
        controller.start_round(TatamiSize::Eight).unwrap();

        // Miss once per reading phase, then capture.
        while let Some(yomifuda) = controller.state().and_then(RoundState::yomifuda) {
            if controller.state().unwrap().remaining().len() > 1 {
                let wrong = wrong_pick(controller.state().unwrap());
                controller.submit_selection(wrong).unwrap();
            }
            controller.submit_selection(yomifuda).unwrap();
        }

        let log = events.borrow().clone();
        let mochifuda: Vec<CardId> =
            controller.state().unwrap().mochifuda().iter().copied().collect();
        (log, mochifuda)
    };

    assert_eq!(run(314), run(314));
    assert_ne!(run(314).1, run(159).1);
}

//! The round controller: session-level orchestration.
//!
//! ## RoundController
//!
//! Owns the deck, the session RNG and the active round, and is the
//! single entry point a presentation layer drives:
//! - `start_round` lays a tatami for a chosen recipe and begins play
//! - `submit_selection` forwards a pick to the match engine and fans the
//!   outcome out to observers
//! - `replay` restarts with the same recipe on a fresh layout
//! - `back_to_top` leaves round play without discarding the session
//!
//! Each round plays on an RNG forked from the session RNG, so a seeded
//! session reproduces the same sequence of layouts and draws run after
//! run, while rounds never perturb each other.
//!
//! ## Intents
//!
//! UIs that route input through a single handler can use
//! [`Intent`] + [`RoundController::dispatch`] instead of calling the
//! named methods directly.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::{CardId, Deck};
use crate::core::{GameRng, KarutaError};
use crate::round::{select_tatami, MatchOutcome, Round, RoundEvent, RoundState, TatamiSize};

use super::observer::RoundObserver;

/// A player input, as a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    /// Pick a card off the tatami.
    SelectCard(CardId),
    /// Restart with the same recipe on a fresh layout.
    Replay,
    /// Leave round play and return to the top screen.
    BackToTop,
}

/// Session-level controller: deck, RNG, active round and observers.
pub struct RoundController {
    deck: Deck,
    recipe: Option<TatamiSize>,
    rng: GameRng,
    round: Option<Round>,
    observers: Vec<Box<dyn RoundObserver>>,
}

impl RoundController {
    /// Create a controller over `deck` with an entropy-seeded RNG.
    #[must_use]
    pub fn new(deck: Deck) -> Self {
        Self {
            deck,
            recipe: None,
            rng: GameRng::from_entropy(),
            round: None,
            observers: Vec::new(),
        }
    }

    /// Create a controller with an explicit seed.
    ///
    /// Two controllers built over the same deck with the same seed
    /// produce identical layouts and draw sequences when driven with the
    /// same calls.
    #[must_use]
    pub fn with_seed(deck: Deck, seed: u64) -> Self {
        Self {
            deck,
            recipe: None,
            rng: GameRng::new(seed),
            round: None,
            observers: Vec::new(),
        }
    }

    /// The session seed, for logging and reproduction.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// The deck this session plays over.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// The recipe of the most recently started round, if any.
    #[must_use]
    pub fn recipe(&self) -> Option<TatamiSize> {
        self.recipe
    }

    /// The live round state, if a round is active.
    #[must_use]
    pub fn state(&self) -> Option<&RoundState> {
        self.round.as_ref().map(Round::state)
    }

    /// Owned snapshot of the live round state (O(1) clone).
    #[must_use]
    pub fn snapshot(&self) -> Option<RoundState> {
        self.round.as_ref().map(Round::snapshot)
    }

    /// Register an observer for round events.
    ///
    /// Observers stay registered for the life of the controller and are
    /// invoked in registration order.
    pub fn subscribe(&mut self, observer: impl RoundObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Start a round with `recipe`, replacing any round in progress.
    ///
    /// Returns a snapshot of the opening state: full tatami, first
    /// yomifuda drawn, score zero. Fails with
    /// [`KarutaError::InsufficientDeckSize`] when the deck cannot fill
    /// the layout, leaving the previous round (if any) untouched.
    pub fn start_round(&mut self, recipe: TatamiSize) -> Result<RoundState, KarutaError> {
        let opening = self.lay_round(recipe)?;
        debug!(%recipe, seed = self.seed(), "round started");
        Ok(opening)
    }

    /// Restart with the last recipe on a freshly selected tatami.
    ///
    /// The new round draws its own forked RNG, so its layout and reading
    /// order owe nothing to the round it replaces. Emits
    /// [`RoundEvent::Replay`] once the new round is in place. Fails with
    /// [`KarutaError::NoActiveRound`] when no round has been started
    /// this session.
    pub fn replay(&mut self) -> Result<RoundState, KarutaError> {
        let recipe = self.recipe.ok_or(KarutaError::NoActiveRound)?;
        let opening = self.lay_round(recipe)?;
        debug!(%recipe, "replay on a fresh layout");
        self.notify(&RoundEvent::Replay);
        Ok(opening)
    }

    /// Leave round play and return to the top screen.
    ///
    /// Discards the active round (the last recipe is remembered for
    /// [`RoundController::replay`]) and emits [`RoundEvent::BackToTop`].
    /// Safe to call with no round active.
    pub fn back_to_top(&mut self) {
        self.round = None;
        debug!("back to top");
        self.notify(&RoundEvent::BackToTop);
    }

    /// Forward a selection to the active round and notify observers.
    ///
    /// Outcomes map to events one-for-one; a capture that ends the round
    /// additionally emits [`RoundEvent::RoundComplete`]. Rejected
    /// selections produce an error and no event.
    pub fn submit_selection(&mut self, card: CardId) -> Result<MatchOutcome, KarutaError> {
        let round = self.round.as_mut().ok_or(KarutaError::NoActiveRound)?;
        let outcome = round.submit_selection(card)?;

        let completion = match outcome {
            MatchOutcome::Correct { next: None, .. } => Some(RoundEvent::RoundComplete {
                score: round.score(),
                mochifuda: round.state().mochifuda().iter().copied().collect(),
            }),
            _ => None,
        };

        match outcome {
            MatchOutcome::Correct { card, .. } => self.notify(&RoundEvent::Correct { card }),
            MatchOutcome::Incorrect { selected } => {
                self.notify(&RoundEvent::Incorrect { selected });
            }
        }

        if let Some(event) = completion {
            self.notify(&event);
        }

        Ok(outcome)
    }

    /// Route an [`Intent`] to the matching operation.
    ///
    /// Selections yield `Some(outcome)`; replay and back-to-top yield
    /// `None`.
    pub fn dispatch(&mut self, intent: Intent) -> Result<Option<MatchOutcome>, KarutaError> {
        match intent {
            Intent::SelectCard(card) => self.submit_selection(card).map(Some),
            Intent::Replay => self.replay().map(|_| None),
            Intent::BackToTop => {
                self.back_to_top();
                Ok(None)
            }
        }
    }

    /// Lay a tatami and install the new round.
    fn lay_round(&mut self, recipe: TatamiSize) -> Result<RoundState, KarutaError> {
        let tatami = select_tatami(&self.deck, recipe, &mut self.rng)?;
        let round = Round::start(recipe, tatami, self.rng.fork());
        let opening = round.snapshot();
        self.round = Some(round);
        self.recipe = Some(recipe);
        Ok(opening)
    }

    fn notify(&mut self, event: &RoundEvent) {
        for observer in &mut self.observers {
            observer.on_event(event);
        }
    }
}

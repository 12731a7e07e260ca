//! Game engine and turn state machine.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::bot::BotStrategy;
use crate::card::{Card, Suit};
use crate::error::OptionsError;
use crate::event::GameEvent;
use crate::hand::{Hand, Penalty};
use crate::options::GameOptions;
use crate::resolver::RoundResolution;

mod round;
mod selection;
pub mod state;
mod timer;

pub use state::{GameMode, GameState, Outcome, Submission};

/// Number of hands at the table.
pub const HAND_COUNT: usize = 4;

/// Index of the human player's hand.
pub const HUMAN: usize = 0;

/// A four-hand elimination game: one human against three bots.
///
/// The game is driven by [`tick`](Self::tick) with the seconds elapsed since
/// the previous call. Player input arrives through the selection methods and
/// takes effect at the next tick. Everything the presentation layer needs to
/// show is queued as [`GameEvent`]s.
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// Hands in seat order. Index 0 is the human.
    hands: Vec<Hand>,
    /// Current state.
    state: GameState,
    /// State to restore on resume.
    resume_state: Option<GameState>,
    /// Penalty mode.
    mode: GameMode,
    /// Turn counter, starting at 1.
    turn: u32,
    /// Seconds spent in the current window.
    elapsed: f64,
    /// Last countdown value announced.
    last_countdown: Option<u32>,
    /// Card the human placed on the submit zone.
    selection: Option<Card>,
    /// Card the human is dragging.
    dragging: Option<Card>,
    /// Whether the human confirmed the selection early.
    submit_requested: bool,
    /// Cards revealed this round, kept until the display window ends.
    table: Vec<(usize, Card)>,
    /// Result of the last resolved round.
    last_resolution: Option<RoundResolution>,
    /// How the human's last card was chosen.
    last_submission: Option<Submission>,
    /// Final outcome once the game is over.
    outcome: Option<Outcome>,
    /// Pending notifications.
    events: Vec<GameEvent>,
    /// Bot card selection.
    strategy: BotStrategy,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a game with freshly dealt hands, seeded for reproducibility.
    ///
    /// The game starts in [`GameState::SetUp`]; the first [`tick`](Self::tick)
    /// (or [`start`](Self::start)) opens the first submission window.
    ///
    /// # Errors
    ///
    /// Returns an error if the options fail [`GameOptions::validate`].
    ///
    /// # Example
    ///
    /// ```
    /// use lowcard::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42).unwrap();
    /// assert_eq!(game.state(), GameState::SetUp);
    /// assert_eq!(game.hand(0).unwrap().len(), 13);
    /// ```
    pub fn new(options: GameOptions, seed: u64) -> Result<Self, OptionsError> {
        options.validate()?;

        let hands = Suit::ALL
            .iter()
            .map(|&suit| Hand::dealt(suit, options.cards_per_hand, options.starting_hp))
            .collect();
        let strategy = BotStrategy::new(options.bot_safe_card_chance);

        Ok(Self {
            options,
            hands,
            state: GameState::SetUp,
            resume_state: None,
            mode: GameMode::Normal,
            turn: 1,
            elapsed: 0.0,
            last_countdown: None,
            selection: None,
            dragging: None,
            submit_requested: false,
            table: Vec::new(),
            last_resolution: None,
            last_submission: None,
            outcome: None,
            events: Vec::new(),
            strategy,
            rng: ChaCha8Rng::seed_from_u64(seed),
        })
    }

    /// Leaves [`GameState::SetUp`] and opens the first submission window.
    ///
    /// Does nothing in any other state.
    pub fn start(&mut self) {
        if self.state != GameState::SetUp {
            return;
        }

        info!(
            hands = self.hands.len(),
            hp = self.options.starting_hp,
            "game started"
        );
        for index in 0..self.hands.len() {
            self.emit_hand(index);
            self.emit(GameEvent::HpChanged {
                hand: index,
                hp: self.hands[index].hp(),
            });
        }
        self.emit(GameEvent::TurnAdvanced {
            turn: self.turn,
            mode: self.mode,
        });
        self.open_window();
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the penalty mode.
    #[must_use]
    pub const fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns the turn counter.
    #[must_use]
    pub const fn turn(&self) -> u32 {
        self.turn
    }

    /// Returns the outcome once the game is over.
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Returns whether the game is paused.
    #[must_use]
    pub const fn is_paused(&self) -> bool {
        matches!(self.state, GameState::Paused)
    }

    /// Returns the hand at `index`.
    #[must_use]
    pub fn hand(&self, index: usize) -> Option<&Hand> {
        self.hands.get(index)
    }

    /// Returns every hand in seat order.
    #[must_use]
    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    /// Sets the hit points of the hand at `index`, clamped to the starting
    /// value, and emits [`GameEvent::HpChanged`].
    ///
    /// Returns the new hit points, or `None` if there is no such hand.
    ///
    /// # Example
    ///
    /// ```
    /// use lowcard::{Game, GameEvent, GameOptions};
    ///
    /// let mut game = Game::new(GameOptions::default(), 7).unwrap();
    /// assert_eq!(game.set_hp(2, 9), Some(4));
    /// assert_eq!(game.events(), &[GameEvent::HpChanged { hand: 2, hp: 4 }]);
    /// ```
    pub fn set_hp(&mut self, index: usize, hp: u8) -> Option<u8> {
        let hp = self.hands.get_mut(index)?.set_hp(hp);
        self.emit(GameEvent::HpChanged { hand: index, hp });
        Some(hp)
    }

    /// Lowers the hit points of the hand at `index` by `amount`, never below
    /// zero, and emits [`GameEvent::HpChanged`].
    ///
    /// Returns the new hit points, or `None` if there is no such hand.
    pub fn reduce_hp(&mut self, index: usize, amount: u8) -> Option<u8> {
        let hp = self.hands.get_mut(index)?.reduce_hp(amount);
        self.emit(GameEvent::HpChanged { hand: index, hp });
        Some(hp)
    }

    /// Replaces the cards of the hand at `index` and emits
    /// [`GameEvent::HandChanged`].
    ///
    /// Returns `false` if there is no such hand.
    pub fn set_cards(&mut self, index: usize, cards: Vec<Card>) -> bool {
        let Some(hand) = self.hands.get_mut(index) else {
            return false;
        };
        hand.set_cards(cards);
        self.emit_hand(index);
        true
    }

    /// Returns the card currently on the submit zone.
    #[must_use]
    pub const fn selection(&self) -> Option<Card> {
        self.selection
    }

    /// Returns the card currently being dragged.
    #[must_use]
    pub const fn dragging(&self) -> Option<Card> {
        self.dragging
    }

    /// Cards revealed this round. Empty outside the result display.
    #[must_use]
    pub fn table(&self) -> &[(usize, Card)] {
        &self.table
    }

    /// Returns the result of the last resolved round.
    #[must_use]
    pub const fn last_resolution(&self) -> Option<&RoundResolution> {
        self.last_resolution.as_ref()
    }

    /// Returns how the human's last card was chosen.
    #[must_use]
    pub const fn last_submission(&self) -> Option<Submission> {
        self.last_submission
    }

    /// Indices of hands that still have hit points.
    #[must_use]
    pub fn alive_hands(&self) -> Vec<usize> {
        self.hands
            .iter()
            .enumerate()
            .filter(|(_, hand)| hand.is_alive())
            .map(|(index, _)| index)
            .collect()
    }

    /// Takes every queued event, oldest first.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        core::mem::take(&mut self.events)
    }

    /// Returns queued events without removing them.
    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    fn emit_hand(&mut self, index: usize) {
        if let Some(hand) = self.hands.get(index) {
            let cards = hand.cards().to_vec();
            self.emit(GameEvent::HandChanged { hand: index, cards });
        }
    }

    fn apply_penalty(&mut self, index: usize, penalty: Penalty) {
        if let Some(hand) = self.hands.get_mut(index) {
            let hp = hand.apply_penalty(penalty);
            self.emit(GameEvent::HpChanged { hand: index, hp });
        }
    }

    /// Puts a card the human took out back into their hand.
    fn return_to_hand(&mut self, card: Card) {
        let added = self
            .hands
            .get_mut(HUMAN)
            .is_some_and(|hand| hand.add_card(card));
        if added {
            self.emit_hand(HUMAN);
        }
    }

    fn refill_hands(&mut self) {
        let count = self.options.cards_per_hand;
        for (index, hand) in self.hands.iter_mut().enumerate() {
            if let Some(suit) = Suit::for_hand(index) {
                hand.refill(suit, count);
            }
        }
        self.emit(GameEvent::HandsRefilled);
        for index in 0..self.hands.len() {
            self.emit_hand(index);
        }
    }
}

//! Notifications for the presentation layer.

use alloc::vec::Vec;

use crate::card::Card;
use crate::game::{GameMode, Outcome};
use crate::resolver::RoundResolution;

/// Something the presentation layer should react to.
///
/// Events queue up inside [`Game`](crate::Game) and are taken with
/// [`Game::drain_events`](crate::Game::drain_events).
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// A hand gained, lost, or reordered cards.
    HandChanged {
        /// Hand index.
        hand: usize,
        /// Cards now held, in display order.
        cards: Vec<Card>,
    },
    /// A hand's hit points changed.
    HpChanged {
        /// Hand index.
        hand: usize,
        /// New hit points.
        hp: u8,
    },
    /// Every played card is turned face up.
    CardsRevealed {
        /// `(hand index, card)` pairs in seat order.
        cards: Vec<(usize, Card)>,
    },
    /// Full comparison result of the round just played.
    RoundResolved(RoundResolution),
    /// A new turn begins.
    TurnAdvanced {
        /// The turn number, starting at 1.
        turn: u32,
        /// Mode the turn is played in.
        mode: GameMode,
    },
    /// The whole countdown second shown to the player changed.
    RoundTimerTick {
        /// Seconds left, rounded up.
        seconds_remaining: u32,
    },
    /// Every hand was dealt a fresh set of cards.
    HandsRefilled,
    /// The game was paused.
    Paused,
    /// The game resumed.
    Resumed,
    /// The game ended.
    GameOver(Outcome),
}

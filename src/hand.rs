//! Participant hands and hit points.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, Suit};

/// Damage dealt to a losing hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Penalty {
    /// Lose this many hit points.
    Reduce(u8),
    /// Drop straight to zero hit points.
    Eliminate,
}

/// A participant's cards and hit points.
///
/// The HP setters here are raw and emit nothing. A running
/// [`Game`](crate::Game) changes hit points through its own methods so every
/// change is reported as a [`GameEvent::HpChanged`](crate::GameEvent::HpChanged).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    /// Cards held, sorted by comparison rank then suit.
    cards: Vec<Card>,
    /// Remaining hit points.
    hp: u8,
    /// Upper bound for hit points.
    max_hp: u8,
}

impl Hand {
    /// Creates an empty hand at full hit points.
    #[must_use]
    pub const fn new(max_hp: u8) -> Self {
        Self {
            cards: Vec::new(),
            hp: max_hp,
            max_hp,
        }
    }

    /// Creates a hand holding ranks `1..=count` of `suit`.
    #[must_use]
    pub fn dealt(suit: Suit, count: usize, max_hp: u8) -> Self {
        let mut hand = Self::new(max_hp);
        hand.refill(suit, count);
        hand
    }

    /// Replaces every card with ranks `1..=count` of `suit`.
    ///
    /// Hit points are left untouched.
    pub fn refill(&mut self, suit: Suit, count: usize) {
        self.cards.clear();
        for rank in 1..=count as u8 {
            self.cards.push(Card::new(suit, rank));
        }
        self.sort();
    }

    /// Adds a card to the hand.
    ///
    /// Returns `false` without changing anything if the card is already held.
    pub fn add_card(&mut self, card: Card) -> bool {
        if self.contains(&card) {
            return false;
        }
        self.cards.push(card);
        self.sort();
        true
    }

    /// Removes a card from the hand.
    ///
    /// Returns `false` if the card was not held.
    pub fn remove_card(&mut self, card: &Card) -> bool {
        let Some(position) = self.cards.iter().position(|c| c == card) else {
            return false;
        };
        self.cards.remove(position);
        true
    }

    /// Returns whether the card is in this hand.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Replaces the cards in the hand.
    pub fn set_cards(&mut self, cards: Vec<Card>) {
        self.cards = cards;
        self.sort();
        self.cards.dedup();
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Card with the lowest comparison rank, first one on ties.
    #[must_use]
    pub fn lowest(&self) -> Option<Card> {
        self.cards
            .iter()
            .copied()
            .reduce(|min, c| if min.is_higher_than(&c) { c } else { min })
    }

    /// Card with the highest comparison rank, first one on ties.
    #[must_use]
    pub fn highest(&self) -> Option<Card> {
        self.cards
            .iter()
            .copied()
            .reduce(|max, c| if c.is_higher_than(&max) { c } else { max })
    }

    /// Returns the current hit points.
    #[must_use]
    pub const fn hp(&self) -> u8 {
        self.hp
    }

    /// Returns the hit point ceiling.
    #[must_use]
    pub const fn max_hp(&self) -> u8 {
        self.max_hp
    }

    /// Sets hit points, clamped to `0..=max_hp`. Returns the new value.
    pub fn set_hp(&mut self, value: u8) -> u8 {
        self.hp = value.min(self.max_hp);
        self.hp
    }

    /// Lowers hit points by `amount`, never below zero. Returns the new value.
    pub const fn reduce_hp(&mut self, amount: u8) -> u8 {
        self.hp = self.hp.saturating_sub(amount);
        self.hp
    }

    /// Applies a round penalty. Returns the new hit points.
    pub const fn apply_penalty(&mut self, penalty: Penalty) -> u8 {
        match penalty {
            Penalty::Reduce(amount) => self.reduce_hp(amount),
            Penalty::Eliminate => {
                self.hp = 0;
                0
            }
        }
    }

    /// Returns whether the hand still has hit points.
    #[must_use]
    pub const fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Returns whether the hand is out of the game.
    #[must_use]
    pub const fn is_eliminated(&self) -> bool {
        self.hp == 0
    }

    fn sort(&mut self) {
        self.cards
            .sort_by_key(|card| (card.comparison_rank(), card.suit));
    }
}

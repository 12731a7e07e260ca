//! Card selection for bot opponents.

use alloc::vec::Vec;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashSet;
use rand::Rng;
use rand::seq::IndexedRandom;
#[cfg(feature = "std")]
use std::collections::HashSet;
use tracing::trace;

use crate::card::Card;
use crate::hand::Hand;

/// What a bot plays when it does not go for a safe card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    /// Play the lowest card.
    Lowest,
    /// Play the highest card.
    Highest,
    /// Play any card at random.
    Random,
}

impl Fallback {
    /// Fallback behaviour of the bot seated at `bot_index`.
    ///
    /// Bot 1 plays low, bot 2 plays high, every other seat plays at random.
    #[must_use]
    pub const fn for_bot(bot_index: usize) -> Self {
        match bot_index {
            1 => Self::Lowest,
            2 => Self::Highest,
            _ => Self::Random,
        }
    }
}

/// Picks the card a bot plays each round.
///
/// A card is *safe* when its rank is held by no other live hand, so it cannot
/// be part of a duplicate this round.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BotStrategy {
    /// Probability of playing a random safe card when one exists.
    pub safe_card_chance: f64,
}

impl Default for BotStrategy {
    fn default() -> Self {
        Self {
            safe_card_chance: 0.5,
        }
    }
}

impl BotStrategy {
    /// Creates a strategy with the given safe card chance.
    #[must_use]
    pub const fn new(safe_card_chance: f64) -> Self {
        Self { safe_card_chance }
    }

    /// Chooses a card for the bot at `bot_index` without modifying any hand.
    ///
    /// Returns `None` if the bot is eliminated or has no cards. A bot on its
    /// last hit point always plays its lowest card and consults no randomness.
    pub fn pick_card<R: Rng + ?Sized>(
        &self,
        bot_index: usize,
        bot_hand: &Hand,
        all_hands: &[Hand],
        rng: &mut R,
    ) -> Option<Card> {
        if bot_hand.is_eliminated() || bot_hand.is_empty() {
            return None;
        }

        if bot_hand.hp() == 1 {
            let card = bot_hand.lowest();
            trace!(bot_index, ?card, "bot on last hit point plays lowest");
            return card;
        }

        let safe = safe_cards(bot_index, bot_hand, all_hands);
        if !safe.is_empty() && rng.random_bool(self.safe_card_chance) {
            let card = safe.choose(rng).copied();
            trace!(bot_index, ?card, safe = safe.len(), "bot plays safe card");
            return card;
        }

        let fallback = Fallback::for_bot(bot_index);
        let card = match fallback {
            Fallback::Lowest => bot_hand.lowest(),
            Fallback::Highest => bot_hand.highest(),
            Fallback::Random => bot_hand.cards().choose(rng).copied(),
        };
        trace!(bot_index, ?fallback, ?card, "bot plays fallback card");
        card
    }
}

/// Cards in `bot_hand` whose rank no other live hand holds.
#[must_use]
pub fn safe_cards(bot_index: usize, bot_hand: &Hand, all_hands: &[Hand]) -> Vec<Card> {
    let taken: HashSet<u8> = all_hands
        .iter()
        .enumerate()
        .filter(|(j, hand)| *j != bot_index && hand.is_alive())
        .flat_map(|(_, hand)| hand.cards().iter().map(|c| c.rank))
        .collect();

    bot_hand
        .cards()
        .iter()
        .filter(|c| !taken.contains(&c.rank))
        .copied()
        .collect()
}

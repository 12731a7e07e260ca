use alloc::vec::Vec;

use rand::seq::IndexedRandom;
use tracing::{debug, info, trace};

use crate::card::Card;
use crate::event::GameEvent;
use crate::resolver::resolve;

use super::{Game, GameMode, GameState, HUMAN, Outcome, Submission};

impl Game {
    /// Closes the submission window and resolves the round.
    ///
    /// The human's card is the selection if there is one, else the card being
    /// dragged, else a random card from their hand.
    pub(super) fn close_window(&mut self) {
        let submitted = if let Some(card) = self.selection.take() {
            self.cancel_drag();
            Some((card, Submission::Selected))
        } else if let Some(card) = self.dragging.take() {
            Some((card, Submission::Dragged))
        } else {
            self.random_human_card()
                .map(|card| (card, Submission::Random))
        };
        self.submit_requested = false;

        self.last_submission = submitted.map(|(_, source)| source);
        if let Some((card, source)) = submitted {
            trace!(?card, ?source, "human card taken");
        }

        self.resolve_round(submitted.map(|(card, _)| card));
    }

    fn random_human_card(&mut self) -> Option<Card> {
        let rng = &mut self.rng;
        let card = self
            .hands
            .get(HUMAN)
            .and_then(|hand| hand.cards().choose(rng).copied())?;
        if let Some(hand) = self.hands.get_mut(HUMAN) {
            hand.remove_card(&card);
        }
        self.emit_hand(HUMAN);
        Some(card)
    }

    /// Collects the bots' cards, applies the round result, and advances the
    /// turn counter.
    fn resolve_round(&mut self, human_card: Option<Card>) {
        self.state = GameState::Resolving;
        self.elapsed = 0.0;

        let alive = self.alive_hands();
        let mut played: Vec<(usize, Card)> = Vec::with_capacity(self.hands.len());
        let human_alive = self.hands.get(HUMAN).is_some_and(|hand| hand.is_alive());
        if let Some(card) = human_card.filter(|_| human_alive) {
            played.push((HUMAN, card));
        }

        // Every bot chooses against the same view of the table.
        let mut bot_cards = Vec::new();
        for index in (HUMAN + 1)..self.hands.len() {
            let pick = self.strategy.pick_card(
                index,
                &self.hands[index],
                &self.hands,
                &mut self.rng,
            );
            if let Some(card) = pick {
                bot_cards.push((index, card));
            }
        }
        for (index, card) in bot_cards {
            self.hands[index].remove_card(&card);
            self.emit_hand(index);
            played.push((index, card));
        }

        self.emit(GameEvent::CardsRevealed {
            cards: played.clone(),
        });

        let resolution = resolve(&played, &alive, self.mode, self.options.mercy_rule);
        debug!(
            turn = self.turn,
            losers = ?resolution.losers,
            mercy = resolution.mercy,
            kind = ?resolution.kind,
            "round resolved"
        );
        for (index, penalty) in resolution.penalties() {
            self.apply_penalty(index, penalty);
        }
        self.emit(GameEvent::RoundResolved(resolution.clone()));
        self.last_resolution = Some(resolution);
        self.table = played;

        self.turn += 1;
        if self.mode == GameMode::Normal && self.turn > self.options.sudden_death_after_turn {
            self.mode = GameMode::SuddenDeath;
            info!(turn = self.turn, "sudden death");
        }
        self.emit(GameEvent::TurnAdvanced {
            turn: self.turn,
            mode: self.mode,
        });
    }

    /// Ends the result display: finishes the game, refills, or opens the next
    /// window.
    pub(super) fn finish_round(&mut self) {
        self.table.clear();

        if let Some(outcome) = self.check_outcome() {
            self.end(outcome);
            return;
        }

        let human_empty = self.hands.get(HUMAN).is_none_or(|hand| hand.is_empty());
        if human_empty {
            if self.mode == GameMode::SuddenDeath {
                self.end(Outcome::Draw);
                return;
            }
            debug!(turn = self.turn, "refilling hands");
            self.refill_hands();
        }

        self.open_window();
    }

    /// Decides whether the game is over after a round.
    #[must_use]
    pub fn check_outcome(&self) -> Option<Outcome> {
        let human_alive = self.hands.get(HUMAN).is_some_and(|hand| hand.is_alive());
        let bots_alive = self
            .hands
            .iter()
            .enumerate()
            .any(|(index, hand)| index != HUMAN && hand.is_alive());

        match (human_alive, bots_alive) {
            (false, true) => Some(Outcome::Lose),
            (false, false) => Some(Outcome::Draw),
            (true, false) => Some(Outcome::Win),
            (true, true) => None,
        }
    }

    fn end(&mut self, outcome: Outcome) {
        self.state = GameState::Over;
        self.outcome = Some(outcome);
        info!(turn = self.turn, ?outcome, "game over");
        self.emit(GameEvent::GameOver(outcome));
    }
}

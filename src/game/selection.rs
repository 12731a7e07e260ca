use crate::card::Card;
use crate::error::SelectionError;

use super::{Game, GameState, HUMAN};

impl Game {
    fn ensure_waiting(&self) -> Result<(), SelectionError> {
        if self.state == GameState::WaitingForSubmission {
            Ok(())
        } else {
            Err(SelectionError::InvalidState)
        }
    }

    fn human_holds(&self, card: &Card) -> bool {
        self.hands.get(HUMAN).is_some_and(|hand| hand.contains(card))
    }

    fn take_from_hand(&mut self, card: &Card) {
        let removed = self
            .hands
            .get_mut(HUMAN)
            .is_some_and(|hand| hand.remove_card(card));
        if removed {
            self.emit_hand(HUMAN);
        }
    }

    /// Places `card` on the submit zone.
    ///
    /// Any earlier selection goes back to the hand. Selecting the card that is
    /// already selected does nothing. The card being dragged may be selected,
    /// which ends the drag.
    ///
    /// # Errors
    ///
    /// Returns an error if the submission window is not open or the card is
    /// neither in the player's hand nor being dragged.
    pub fn select_card(&mut self, card: Card) -> Result<(), SelectionError> {
        self.ensure_waiting()?;

        if self.selection == Some(card) {
            return Ok(());
        }

        if self.dragging == Some(card) {
            self.dragging = None;
        } else if self.human_holds(&card) {
            self.take_from_hand(&card);
        } else {
            return Err(SelectionError::CardNotInHand);
        }

        if let Some(previous) = self.selection.replace(card) {
            self.return_to_hand(previous);
        }

        Ok(())
    }

    /// Takes the selected card off the submit zone and back into the hand.
    ///
    /// # Errors
    ///
    /// Returns an error if the submission window is not open or nothing is
    /// selected.
    pub fn deselect(&mut self) -> Result<(), SelectionError> {
        self.ensure_waiting()?;

        let card = self.selection.take().ok_or(SelectionError::NotSelected)?;
        self.submit_requested = false;
        self.return_to_hand(card);

        Ok(())
    }

    /// Lifts `card` out of the hand as the player starts dragging it.
    ///
    /// A card already being dragged is returned first.
    ///
    /// # Errors
    ///
    /// Returns an error if the submission window is not open or the card is
    /// not in the player's hand.
    pub fn begin_drag(&mut self, card: Card) -> Result<(), SelectionError> {
        self.ensure_waiting()?;

        if !self.human_holds(&card) {
            return Err(SelectionError::CardNotInHand);
        }

        self.cancel_drag();
        self.take_from_hand(&card);
        self.dragging = Some(card);

        Ok(())
    }

    /// Finishes a drag. A drop on the submit zone selects the card, anywhere
    /// else returns it to the hand.
    ///
    /// # Errors
    ///
    /// Returns an error if the submission window is not open or no card is
    /// being dragged.
    pub fn end_drag(&mut self, on_submit_zone: bool) -> Result<(), SelectionError> {
        self.ensure_waiting()?;

        let card = self.dragging.ok_or(SelectionError::NotDragging)?;
        if on_submit_zone {
            self.select_card(card)
        } else {
            self.cancel_drag();
            Ok(())
        }
    }

    /// Closes the submission window early with the current selection.
    ///
    /// The round resolves on the next tick.
    ///
    /// # Errors
    ///
    /// Returns an error if the submission window is not open or nothing is
    /// selected.
    pub fn submit(&mut self) -> Result<(), SelectionError> {
        self.ensure_waiting()?;

        if self.selection.is_none() {
            return Err(SelectionError::NotSelected);
        }
        self.submit_requested = true;

        Ok(())
    }

    /// Returns a dragged card to the hand, if any.
    pub(super) fn cancel_drag(&mut self) {
        if let Some(card) = self.dragging.take() {
            self.return_to_hand(card);
        }
    }
}

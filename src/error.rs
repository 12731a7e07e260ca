//! Error types for game operations.

use thiserror::Error;

/// Errors from the human player's card interactions.
///
/// An error never changes game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// The game is not waiting for a submission.
    #[error("game is not waiting for a submission")]
    InvalidState,
    /// The card is not in the player's hand.
    #[error("card is not in the player's hand")]
    CardNotInHand,
    /// There is no active selection.
    #[error("no card is selected")]
    NotSelected,
    /// No card is being dragged.
    #[error("no card is being dragged")]
    NotDragging,
}

/// Errors that can occur when pausing or resuming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PauseError {
    /// The game is already paused.
    #[error("game is already paused")]
    AlreadyPaused,
    /// The game is not paused.
    #[error("game is not paused")]
    NotPaused,
    /// The game has finished.
    #[error("game is over")]
    GameOver,
}

/// Errors reported by [`GameOptions::validate`](crate::GameOptions::validate).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OptionsError {
    /// A wait or display window is not a positive, finite duration.
    #[error("timer windows must be positive and finite")]
    InvalidWindow,
    /// Hands would start with no hit points.
    #[error("starting hit points must be at least 1")]
    ZeroHitPoints,
    /// Cards per hand is outside `1..=13`.
    #[error("cards per hand must be between 1 and 13")]
    CardsPerHand,
    /// Safe card chance is not a probability.
    #[error("bot safe card chance must be within 0.0..=1.0")]
    SafeCardChance,
}

//! A lowest-card-loses elimination game engine with optional `no_std` support.
//!
//! Four hands (one human, three bots) each play one card per round. Cards
//! sharing a rank all lose a hit point; otherwise the lowest card loses, with
//! the Ace counting high. Past turn 19 the game switches to sudden death and
//! any loss eliminates.
//!
//! The crate provides a [`Game`] type that runs the round lifecycle from a
//! `tick` call and reports everything a front end must show as
//! [`GameEvent`]s.
//!
//! # Example
//!
//! ```
//! use lowcard::{Game, GameOptions, GameState};
//!
//! let mut game = Game::new(GameOptions::default(), 42).unwrap();
//! game.tick(0.0);
//! assert_eq!(game.state(), GameState::WaitingForSubmission);
//!
//! let card = game.hand(0).unwrap().cards()[0];
//! game.select_card(card).unwrap();
//! game.submit().unwrap();
//! game.tick(0.016);
//! assert_eq!(game.state(), GameState::Resolving);
//! assert_eq!(game.turn(), 2);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod bot;
pub mod card;
pub mod error;
pub mod event;
pub mod game;
pub mod hand;
pub mod options;
pub mod resolver;

// Re-export main types
pub use bot::{BotStrategy, Fallback};
pub use card::{Card, RANKS_PER_SUIT, Suit, comparison_rank};
pub use error::{OptionsError, PauseError, SelectionError};
pub use event::GameEvent;
pub use game::{Game, GameMode, GameState, HAND_COUNT, HUMAN, Outcome, Submission};
pub use hand::{Hand, Penalty};
pub use options::GameOptions;
pub use resolver::{LossKind, RoundPattern, RoundResolution, resolve};

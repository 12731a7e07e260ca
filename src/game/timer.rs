use tracing::debug;

use crate::error::PauseError;
use crate::event::GameEvent;

use super::{Game, GameMode, GameState};

#[cfg(feature = "std")]
fn ceil_seconds(seconds: f64) -> u32 {
    seconds.ceil() as u32
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn ceil_seconds(seconds: f64) -> u32 {
    libm::ceil(seconds) as u32
}

impl Game {
    /// Advances every timer by `delta_seconds`.
    ///
    /// Negative and non-finite deltas count as zero. At most one state
    /// transition happens per call: opening the first window, closing the
    /// submission window (which resolves the round), or ending the result
    /// display. Nothing advances while paused or after the game is over.
    pub fn tick(&mut self, delta_seconds: f64) {
        let delta = if delta_seconds.is_finite() && delta_seconds > 0.0 {
            delta_seconds
        } else {
            0.0
        };

        match self.state {
            GameState::SetUp => self.start(),
            GameState::WaitingForSubmission => {
                self.elapsed += delta;
                if self.submit_requested || self.elapsed >= self.window_duration() {
                    self.close_window();
                } else {
                    self.announce_countdown();
                }
            }
            GameState::Resolving => {
                self.elapsed += delta;
                if self.elapsed >= self.options.result_display {
                    self.finish_round();
                }
            }
            GameState::Paused | GameState::Over => {}
        }
    }

    /// Length of the submission window in the current mode.
    #[must_use]
    pub const fn window_duration(&self) -> f64 {
        match self.mode {
            GameMode::Normal => self.options.normal_window,
            GameMode::SuddenDeath => self.options.sudden_death_window,
        }
    }

    /// Seconds left in the open submission window.
    ///
    /// Returns `None` unless the game is waiting for a submission.
    #[must_use]
    pub fn seconds_remaining(&self) -> Option<f64> {
        if self.state == GameState::WaitingForSubmission {
            Some((self.window_duration() - self.elapsed).max(0.0))
        } else {
            None
        }
    }

    /// Freezes every timer.
    ///
    /// A card being dragged returns to the hand. The selection and the state
    /// itself are kept for [`resume`](Self::resume).
    ///
    /// # Errors
    ///
    /// Returns an error if the game is already paused or over.
    pub fn pause(&mut self) -> Result<(), PauseError> {
        match self.state {
            GameState::Paused => return Err(PauseError::AlreadyPaused),
            GameState::Over => return Err(PauseError::GameOver),
            _ => {}
        }

        self.cancel_drag();
        self.resume_state = Some(self.state);
        self.state = GameState::Paused;
        debug!(turn = self.turn, "game paused");
        self.emit(GameEvent::Paused);

        Ok(())
    }

    /// Restores the state recorded by [`pause`](Self::pause).
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not paused.
    pub fn resume(&mut self) -> Result<(), PauseError> {
        if self.state != GameState::Paused {
            return Err(PauseError::NotPaused);
        }

        let state = self.resume_state.take().ok_or(PauseError::NotPaused)?;
        self.state = state;
        debug!(turn = self.turn, ?state, "game resumed");
        self.emit(GameEvent::Resumed);

        Ok(())
    }

    /// Starts a fresh submission window.
    pub(super) fn open_window(&mut self) {
        self.state = GameState::WaitingForSubmission;
        self.elapsed = 0.0;
        self.submit_requested = false;
        self.last_countdown = None;
        self.announce_countdown();
    }

    fn announce_countdown(&mut self) {
        let Some(remaining) = self.seconds_remaining() else {
            return;
        };
        let seconds = ceil_seconds(remaining);
        if self.last_countdown != Some(seconds) {
            self.last_countdown = Some(seconds);
            self.emit(GameEvent::RoundTimerTick {
                seconds_remaining: seconds,
            });
        }
    }
}

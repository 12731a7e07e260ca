//! Game configuration options.

use crate::card::RANKS_PER_SUIT;
use crate::error::OptionsError;

/// Configuration options for a game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use lowcard::GameOptions;
///
/// let options = GameOptions::default()
///     .with_normal_window(15.0)
///     .with_starting_hp(3)
///     .with_cards_per_hand(7);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GameOptions {
    /// Seconds the player has to pick a card in normal mode.
    pub normal_window: f64,
    /// Seconds the player has to pick a card in sudden death.
    pub sudden_death_window: f64,
    /// Seconds the revealed cards stay on the table after a round.
    pub result_display: f64,
    /// Hit points every hand starts with. Also the hit point ceiling.
    pub starting_hp: u8,
    /// Sudden death starts once the turn counter goes past this turn.
    pub sudden_death_after_turn: u32,
    /// Cards dealt to each hand at the start and on every refill.
    pub cards_per_hand: usize,
    /// Probability that a bot plays one of its safe cards when it has any.
    pub bot_safe_card_chance: f64,
    /// Whether a duplicate that would wipe out every live hand is forgiven
    /// in normal mode.
    pub mercy_rule: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            normal_window: 20.0,
            sudden_death_window: 10.0,
            result_display: 5.0,
            starting_hp: 4,
            sudden_death_after_turn: 19,
            cards_per_hand: RANKS_PER_SUIT,
            bot_safe_card_chance: 0.5,
            mercy_rule: true,
        }
    }
}

impl GameOptions {
    /// Sets the normal mode submission window in seconds.
    ///
    /// # Example
    ///
    /// ```
    /// use lowcard::GameOptions;
    ///
    /// let options = GameOptions::default().with_normal_window(30.0);
    /// assert_eq!(options.normal_window, 30.0);
    /// ```
    #[must_use]
    pub const fn with_normal_window(mut self, seconds: f64) -> Self {
        self.normal_window = seconds;
        self
    }

    /// Sets the sudden death submission window in seconds.
    ///
    /// # Example
    ///
    /// ```
    /// use lowcard::GameOptions;
    ///
    /// let options = GameOptions::default().with_sudden_death_window(5.0);
    /// assert_eq!(options.sudden_death_window, 5.0);
    /// ```
    #[must_use]
    pub const fn with_sudden_death_window(mut self, seconds: f64) -> Self {
        self.sudden_death_window = seconds;
        self
    }

    /// Sets how long round results stay on display, in seconds.
    ///
    /// # Example
    ///
    /// ```
    /// use lowcard::GameOptions;
    ///
    /// let options = GameOptions::default().with_result_display(2.5);
    /// assert_eq!(options.result_display, 2.5);
    /// ```
    #[must_use]
    pub const fn with_result_display(mut self, seconds: f64) -> Self {
        self.result_display = seconds;
        self
    }

    /// Sets the starting hit points.
    ///
    /// # Example
    ///
    /// ```
    /// use lowcard::GameOptions;
    ///
    /// let options = GameOptions::default().with_starting_hp(2);
    /// assert_eq!(options.starting_hp, 2);
    /// ```
    #[must_use]
    pub const fn with_starting_hp(mut self, hp: u8) -> Self {
        self.starting_hp = hp;
        self
    }

    /// Sets the last turn played in normal mode.
    ///
    /// # Example
    ///
    /// ```
    /// use lowcard::GameOptions;
    ///
    /// let options = GameOptions::default().with_sudden_death_after_turn(9);
    /// assert_eq!(options.sudden_death_after_turn, 9);
    /// ```
    #[must_use]
    pub const fn with_sudden_death_after_turn(mut self, turn: u32) -> Self {
        self.sudden_death_after_turn = turn;
        self
    }

    /// Sets the number of cards dealt per hand.
    ///
    /// # Example
    ///
    /// ```
    /// use lowcard::GameOptions;
    ///
    /// let options = GameOptions::default().with_cards_per_hand(5);
    /// assert_eq!(options.cards_per_hand, 5);
    /// ```
    #[must_use]
    pub const fn with_cards_per_hand(mut self, count: usize) -> Self {
        self.cards_per_hand = count;
        self
    }

    /// Sets the probability that a bot plays a safe card.
    ///
    /// # Example
    ///
    /// ```
    /// use lowcard::GameOptions;
    ///
    /// let options = GameOptions::default().with_bot_safe_card_chance(1.0);
    /// assert_eq!(options.bot_safe_card_chance, 1.0);
    /// ```
    #[must_use]
    pub const fn with_bot_safe_card_chance(mut self, chance: f64) -> Self {
        self.bot_safe_card_chance = chance;
        self
    }

    /// Sets whether the mercy rule applies in normal mode.
    ///
    /// # Example
    ///
    /// ```
    /// use lowcard::GameOptions;
    ///
    /// let options = GameOptions::default().with_mercy_rule(false);
    /// assert!(!options.mercy_rule);
    /// ```
    #[must_use]
    pub const fn with_mercy_rule(mut self, enabled: bool) -> Self {
        self.mercy_rule = enabled;
        self
    }

    /// Checks that the options describe a playable game.
    ///
    /// # Errors
    ///
    /// Returns an error if a window is not positive and finite, hands would
    /// start without hit points, the hand size is outside `1..=13`, or the
    /// bot safe card chance is not a probability.
    pub fn validate(&self) -> Result<(), OptionsError> {
        for window in [
            self.normal_window,
            self.sudden_death_window,
            self.result_display,
        ] {
            if !window.is_finite() || window <= 0.0 {
                return Err(OptionsError::InvalidWindow);
            }
        }

        if self.starting_hp == 0 {
            return Err(OptionsError::ZeroHitPoints);
        }

        if !(1..=RANKS_PER_SUIT).contains(&self.cards_per_hand) {
            return Err(OptionsError::CardsPerHand);
        }

        if !(0.0..=1.0).contains(&self.bot_safe_card_chance) {
            return Err(OptionsError::SafeCardChance);
        }

        Ok(())
    }
}

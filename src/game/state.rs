//! Game state types.

/// Turn state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Hands are dealt but play has not started.
    SetUp,
    /// The submission window is open for the human player.
    WaitingForSubmission,
    /// Cards are revealed and the round result is on display.
    Resolving,
    /// Timers are frozen. The state to return to is kept by the game.
    Paused,
    /// The game has finished.
    Over,
}

/// Penalty mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Losers drop one hit point. Full wipes are forgiven.
    Normal,
    /// Losers are eliminated outright and the window is shorter.
    SuddenDeath,
}

/// How the game ended for the human player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The human is the last hand standing.
    Win,
    /// The human was eliminated while a bot survived.
    Lose,
    /// Nobody won.
    Draw,
}

/// Where the human's card came from when the window closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// The card the player selected.
    Selected,
    /// The card the player was still dragging.
    Dragged,
    /// A random card chosen for the player.
    Random,
}

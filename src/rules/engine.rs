//! Rules engine trait.
//!
//! A rules engine defines:
//! - What moves a die face allows
//! - How commands change state
//! - When the game is over
//!
//! Transitions are pure: they read a `GameState` and return a new one
//! together with the events the change produced. Rejected commands return
//! an error and produce no state.

use crate::core::{
    Command, CommandError, DieValue, GameConfig, GameEvent, GameState, MoveList, PlayerId,
};

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// The game stopped at its first winner.
    Winner(PlayerId),
    /// Every seat ranked, first finisher first.
    Ranking(Vec<PlayerId>),
}

impl GameResult {
    /// The first-place player.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            GameResult::Winner(p) => Some(*p),
            GameResult::Ranking(ps) => ps.first().copied(),
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner() == Some(player)
    }
}

/// State plus the events produced while reaching it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub state: GameState,
    pub events: Vec<GameEvent>,
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_moves`: Return empty if the current player can't move
/// - `transition`: Must be deterministic; randomness arrives as
///   `Command::Roll(die)`
/// - `is_terminal`: Return None if the game continues
pub trait RulesEngine {
    /// Get the game configuration.
    fn config(&self) -> &GameConfig;

    /// State at the start of a game.
    fn initial_state(&self) -> GameState;

    /// Legal moves for the current player with `die`.
    fn legal_moves(&self, state: &GameState, die: DieValue, reverse: bool) -> MoveList;

    /// Apply a command, returning the next state.
    fn transition(&self, state: &GameState, command: &Command) -> Result<Transition, CommandError>;

    /// Check if the game is over.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Apply a command in place. On error `state` is unchanged.
    fn apply(&self, state: &mut GameState, command: &Command) -> Result<Vec<GameEvent>, CommandError> {
        let Transition { state: next, events } = self.transition(state, command)?;
        *state = next;
        Ok(events)
    }

    /// Replay a command sequence from the initial state.
    ///
    /// Stops at the first rejected command.
    fn replay<'a>(
        &self,
        commands: impl IntoIterator<Item = &'a Command>,
    ) -> Result<GameState, CommandError> {
        let mut state = self.initial_state();
        for command in commands {
            self.apply(&mut state, command)?;
        }
        Ok(state)
    }
}

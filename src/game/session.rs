//! A playable game: rules, current state and dice in one place.
//!
//! `Session` is what a front end drives. It rolls dice, forwards commands
//! to `ReverseLudo` and swaps in the resulting state. Rejected commands
//! leave everything untouched, dice included.

use crate::board::{BoardState, CellRef, Coord};
use crate::core::{
    Color, Command, CommandError, ConfigError, DiceSource, DieValue, GameConfig, GameEvent,
    GameRng, GameState, Move, PlayerId,
};
use crate::rules::{GameResult, RulesEngine};

use super::ludo::ReverseLudo;

/// One game in progress.
#[derive(Clone, Debug)]
pub struct Session<D: DiceSource = GameRng> {
    rules: ReverseLudo,
    state: GameState,
    dice: D,
}

impl Session<GameRng> {
    /// New game with dice seeded from `config.seed`.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let dice = GameRng::new(config.seed);
        Self::with_dice(config, dice)
    }
}

impl<D: DiceSource> Session<D> {
    /// New game rolling with `dice`.
    pub fn with_dice(config: GameConfig, dice: D) -> Result<Self, ConfigError> {
        let rules = ReverseLudo::new(config)?;
        let state = rules.initial_state();
        Ok(Self { rules, state, dice })
    }

    // === Commands ===

    /// Roll for the current player.
    ///
    /// `forced` overrides the dice with a fixed face; it must be 1..=6.
    /// The dice are only consumed when a roll is actually allowed.
    pub fn roll(&mut self, forced: Option<u8>) -> Result<Vec<GameEvent>, CommandError> {
        let forced = forced
            .map(|value| DieValue::new(value).ok_or(CommandError::InvalidDieValue(value)))
            .transpose()?;

        if self.rules.is_terminal(&self.state).is_some() {
            return Err(CommandError::GameOver);
        }
        if !self.state.is_awaiting_roll() {
            return Err(CommandError::RollPending);
        }

        let die = forced.unwrap_or_else(|| self.dice.roll());
        self.apply(Command::Roll(die))
    }

    /// Flip reverse mode for the current player.
    pub fn toggle_reverse(&mut self) -> Result<Vec<GameEvent>, CommandError> {
        self.apply(Command::ToggleReverse)
    }

    /// Set reverse mode explicitly.
    pub fn set_reverse(&mut self, enabled: bool) -> Result<Vec<GameEvent>, CommandError> {
        self.apply(Command::SetReverse(enabled))
    }

    /// Play one of the pending legal moves.
    pub fn select(&mut self, mv: &Move) -> Result<Vec<GameEvent>, CommandError> {
        self.apply(Command::Select(*mv))
    }

    /// Start over: all tokens Home, full budgets, player 1 to roll.
    ///
    /// The dice keep rolling from where they are.
    pub fn reset(&mut self) -> Vec<GameEvent> {
        self.rules.reset(&mut self.state)
    }

    /// Apply any command.
    pub fn apply(&mut self, command: Command) -> Result<Vec<GameEvent>, CommandError> {
        self.rules.apply(&mut self.state, &command)
    }

    // === Queries ===

    #[must_use]
    pub fn rules(&self) -> &ReverseLudo {
        &self.rules
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn board(&self) -> &BoardState {
        &self.state.board
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.state.current_player()
    }

    #[must_use]
    pub fn die(&self) -> Option<DieValue> {
        self.state.die()
    }

    #[must_use]
    pub fn legal_moves(&self) -> &[Move] {
        self.state.legal_moves()
    }

    #[must_use]
    pub fn reverse_mode(&self) -> bool {
        self.state.reverse_mode()
    }

    #[must_use]
    pub fn reverse_budget(&self, player: PlayerId) -> u8 {
        self.state.reverse_budget(player)
    }

    /// Remaining reverse moves for every seat, in seat order.
    #[must_use]
    pub fn reverse_budgets(&self) -> Vec<(PlayerId, u8)> {
        self.state
            .players
            .iter()
            .map(|(id, player)| (id, player.reverse_budget()))
            .collect()
    }

    #[must_use]
    pub fn has_won(&self, player: PlayerId) -> bool {
        self.state.has_won(player)
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.state.winner()
    }

    /// Every block on the board, ordered by square.
    #[must_use]
    pub fn blocks(&self) -> Vec<(Coord, Color)> {
        let mut blocks: Vec<_> = self.state.board.occupancy().blocks().collect();
        blocks.sort_unstable_by_key(|&(coord, _)| coord);
        blocks
    }

    /// Squares crossed by the last move, for playback.
    #[must_use]
    pub fn last_trail(&self) -> &[CellRef] {
        &self.state.last_trail
    }

    /// The final result, once the game is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.rules.is_terminal(&self.state)
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.result().is_some()
    }
}

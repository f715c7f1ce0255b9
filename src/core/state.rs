//! Game state: board, seats, turn context and history.
//!
//! `GameState` is a plain value. Transitions take `&GameState` and return a
//! new one, so a state can be kept, compared or replayed freely. History
//! uses an `im` persistent vector so these per-transition clones stay cheap.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::{Move, MoveList, MoveRecord};
use super::config::GameConfig;
use super::error::ConfigError;
use super::player::{Player, PlayerId, PlayerMap};
use super::rng::DieValue;
use crate::board::{BoardState, CellRef};

/// Where the current turn is.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPhase {
    /// The current player must roll.
    AwaitingRoll,
    /// A die is pending; the player picks one of `legal_moves`.
    Rolled { die: DieValue, legal_moves: MoveList },
}

/// Whose turn it is and what they may do.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnContext {
    pub player: PlayerId,
    /// Move backwards this roll. Cleared after every move and turn change.
    pub reverse_mode: bool,
    pub phase: TurnPhase,
}

impl TurnContext {
    fn start(player: PlayerId) -> Self {
        Self {
            player,
            reverse_mode: false,
            phase: TurnPhase::AwaitingRoll,
        }
    }
}

/// Complete game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    player_count: usize,

    /// Token positions.
    pub board: BoardState,

    /// Seats, names and reverse budgets.
    pub players: PlayerMap<Player>,

    /// Current turn.
    pub turn: TurnContext,

    /// Turn number (starts at 1, bumps whenever the turn passes).
    pub turn_number: u32,

    /// Players in the order they finished.
    pub finish_order: Vec<PlayerId>,

    /// Squares crossed by the most recently resolved move.
    pub last_trail: Vec<CellRef>,

    /// Every resolved move, oldest first.
    pub history: Vector<MoveRecord>,
}

impl GameState {
    /// Initial state: all tokens Home, player 1 to roll, full budgets.
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        let names = config.resolved_names()?;
        let players = PlayerMap::new(config.player_count, |id| {
            Player::new(id, names[id.index()].clone(), config.reverse_budget)
        });

        Ok(Self {
            player_count: config.player_count,
            board: BoardState::new(),
            players,
            turn: TurnContext::start(PlayerId::new(1)),
            turn_number: 1,
            finish_order: Vec::new(),
            last_trail: Vec::new(),
            history: Vector::new(),
        })
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_count
    }

    /// Iterate over all player IDs.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        PlayerId::all(self.player_count)
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    /// Whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.turn.player
    }

    /// Pending die face, if any.
    #[must_use]
    pub fn die(&self) -> Option<DieValue> {
        match self.turn.phase {
            TurnPhase::Rolled { die, .. } => Some(die),
            TurnPhase::AwaitingRoll => None,
        }
    }

    /// Moves the current player may pick. Empty while awaiting a roll.
    #[must_use]
    pub fn legal_moves(&self) -> &[Move] {
        match &self.turn.phase {
            TurnPhase::Rolled { legal_moves, .. } => legal_moves.as_slice(),
            TurnPhase::AwaitingRoll => &[],
        }
    }

    #[must_use]
    pub fn is_awaiting_roll(&self) -> bool {
        matches!(self.turn.phase, TurnPhase::AwaitingRoll)
    }

    #[must_use]
    pub fn reverse_mode(&self) -> bool {
        self.turn.reverse_mode
    }

    #[must_use]
    pub fn reverse_budget(&self, id: PlayerId) -> u8 {
        self.players[id].reverse_budget()
    }

    /// A player has won iff all four tokens are on their final cell.
    #[must_use]
    pub fn has_won(&self, id: PlayerId) -> bool {
        self.board.all_final(id.color())
    }

    /// Every player who has won, first place first.
    ///
    /// Recorded finishers keep their finishing order. A player whose tokens
    /// are all final but who was never recorded follows in color order.
    #[must_use]
    pub fn ranked_winners(&self) -> Vec<PlayerId> {
        let mut ranked: Vec<PlayerId> = self
            .finish_order
            .iter()
            .copied()
            .filter(|&id| self.has_won(id))
            .collect();
        let unrecorded: Vec<PlayerId> = self
            .player_ids()
            .filter(|&id| self.has_won(id) && !ranked.contains(&id))
            .collect();
        ranked.extend(unrecorded);
        ranked
    }

    /// The first-place player, if anyone has won.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.ranked_winners().first().copied()
    }

    /// Players who have not finished, in seat order.
    pub fn unfinished_players(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.player_ids().filter(move |&id| !self.has_won(id))
    }

    /// Next seat after the current one that has not won.
    ///
    /// Stays on the current player if every seat has won.
    #[must_use]
    pub fn next_unfinished_player(&self) -> PlayerId {
        let mut next = self.turn.player;
        for _ in 0..self.player_count {
            next = next.next(self.player_count);
            if !self.has_won(next) {
                return next;
            }
        }
        self.turn.player
    }

    /// Hand the turn to `player` with a fresh context.
    pub fn pass_turn_to(&mut self, player: PlayerId) {
        self.turn = TurnContext::start(player);
        self.turn_number += 1;
    }

    /// Back to awaiting a roll for the same player, forward mode.
    pub fn clear_roll(&mut self) {
        self.turn.phase = TurnPhase::AwaitingRoll;
        self.turn.reverse_mode = false;
    }
}

//! Events emitted by turn transitions.
//!
//! Events are the presentation layer's feed: what to announce, what to
//! animate, when to re-enable the roll button. The engine never reads them
//! back.

use serde::{Deserialize, Serialize};

use super::action::Move;
use super::player::PlayerId;
use super::rng::DieValue;
use crate::board::{CellRef, TokenId};

/// Why a player keeps the turn after a move.
///
/// The three facts are independent; any one of them is enough.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraTurn {
    pub landed_on_final: bool,
    pub rolled_six: bool,
    pub capture_occurred: bool,
}

impl ExtraTurn {
    #[must_use]
    pub fn granted(&self) -> bool {
        self.landed_on_final || self.rolled_six || self.capture_occurred
    }
}

/// Something that happened during a transition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A die was rolled; `legal_moves` options are now pending.
    Rolled {
        player: PlayerId,
        die: DieValue,
        legal_moves: usize,
    },
    /// Reverse mode was switched on or off.
    ReverseModeChanged { player: PlayerId, enabled: bool },
    /// A six with nothing to move: the die is discarded, same player rolls.
    SixForfeited { player: PlayerId },
    /// Nothing to move on a non-six: the turn passes.
    TurnSkipped { player: PlayerId, die: DieValue },
    /// A move was resolved. `trail` lists the squares crossed, in order.
    MoveResolved {
        player: PlayerId,
        mv: Move,
        trail: Vec<CellRef>,
    },
    /// A token was sent back Home.
    TokenCaptured { by: PlayerId, victim: TokenId },
    /// The player rolls again.
    ExtraTurnGranted { player: PlayerId, reasons: ExtraTurn },
    /// The turn moved to another player.
    TurnPassed { from: PlayerId, to: PlayerId },
    /// All four tokens home; `place` is 1 for the first finisher.
    PlayerFinished { player: PlayerId, place: usize },
    /// The game has ended.
    GameOver { winner: PlayerId },
    /// Board and budgets restored to the start.
    GameReset,
}

//! Moves, commands and move history records.
//!
//! A `Move` is what the generator offers and the resolver applies. A
//! `Command` is what the outside world asks the turn machine to do.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::PlayerId;
use super::rng::DieValue;
use crate::board::{CellRef, TokenId};

/// One token moving from one cell to another.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The token that moves.
    pub token: TokenId,
    /// Where it stands now.
    pub from: CellRef,
    /// Where it lands.
    pub to: CellRef,
    /// Opposing token sent Home by landing, if any.
    pub captured: Option<TokenId>,
}

impl Move {
    #[must_use]
    pub fn new(token: TokenId, from: CellRef, to: CellRef) -> Self {
        Self {
            token,
            from,
            to,
            captured: None,
        }
    }

    #[must_use]
    pub fn capturing(mut self, victim: TokenId) -> Self {
        self.captured = Some(victim);
        self
    }

    /// Does this move go backwards along the track?
    #[must_use]
    pub fn is_reverse(&self) -> bool {
        match (self.from.track_index(), self.to.track_index()) {
            (Some(from), Some(to)) => to < from,
            _ => false,
        }
    }

    #[must_use]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} -> {}", self.token, self.from, self.to)?;
        if let Some(victim) = self.captured {
            write!(f, " x {victim}")?;
        }
        Ok(())
    }
}

/// Legal moves for one roll. At most one per token, so four fit inline.
pub type MoveList = SmallVec<[Move; 4]>;

/// A request from the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Roll produced this face.
    Roll(DieValue),
    /// Flip the reverse-mode flag.
    ToggleReverse,
    /// Set the reverse-mode flag explicitly.
    SetReverse(bool),
    /// Play one of the pending legal moves.
    Select(Move),
    /// Start over with the same seats.
    Reset,
}

/// A resolved move, kept for replay.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The player who moved.
    pub player: PlayerId,
    /// The move as resolved (capture re-derived).
    pub mv: Move,
    /// Die face used.
    pub die: DieValue,
    /// Whether a reverse move was spent.
    pub reverse: bool,
    /// Turn number when the move was made.
    pub turn: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Color;

    #[test]
    fn test_move_direction() {
        let token = TokenId::new(Color::Red, 1);
        let forward = Move::new(token, CellRef::track(Color::Red, 10), CellRef::track(Color::Red, 14));
        let backward = Move::new(token, CellRef::track(Color::Red, 10), CellRef::track(Color::Red, 7));
        let entry = Move::new(token, CellRef::Home, CellRef::track(Color::Red, 0));

        assert!(!forward.is_reverse());
        assert!(backward.is_reverse());
        assert!(!entry.is_reverse());
    }

    #[test]
    fn test_move_display() {
        let mv = Move::new(
            TokenId::new(Color::Green, 2),
            CellRef::track(Color::Green, 3),
            CellRef::track(Color::Green, 7),
        )
        .capturing(TokenId::new(Color::Blue, 4));

        assert!(mv.is_capture());
        assert_eq!(mv.to_string(), "green#2 green:3 -> green:7 x blue#4");
    }

    #[test]
    fn test_command_serialization() {
        let cmd = Command::Select(Move::new(
            TokenId::new(Color::Yellow, 1),
            CellRef::Home,
            CellRef::track(Color::Yellow, 0),
        ));
        let json = serde_json::to_string(&cmd).unwrap();
        let back: Command = serde_json::from_str(&json).unwrap();
        assert_eq!(cmd, back);
    }
}

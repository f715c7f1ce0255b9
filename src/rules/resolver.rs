//! Move resolution.
//!
//! Computes the board after a move plus the squares the token crosses.
//! The trail is for playback only; the returned board is authoritative.

use crate::board::{final_cell, track_of, BoardState, CellRef, TokenId};
use crate::core::Move;

use super::generator::capture_target;

/// Outcome of applying one move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    /// Board after the move.
    pub board: BoardState,
    /// Track cells after `from` up to and including `to`, in travel order.
    /// Empty for direct jumps (leaving Home, landing on the final cell).
    pub trail: Vec<CellRef>,
    /// Token sent Home, if any.
    pub captured: Option<TokenId>,
}

impl Resolution {
    #[must_use]
    pub fn capture_occurred(&self) -> bool {
        self.captured.is_some()
    }
}

/// Apply `mv` to `board`.
///
/// Capture is re-derived from `board` rather than trusted from the move,
/// so a move generated against an older snapshot still resolves correctly.
/// For a move generated against `board` itself the two always agree. A
/// named victim that has since moved away, or is now part of a block or a
/// crowd, stays where it is.
#[must_use]
pub fn apply_move(board: &BoardState, mv: &Move) -> Resolution {
    let color = mv.token.color;
    let occupancy = board.occupancy();

    let captured = capture_target(&occupancy, mv.to, color);

    let mut next = board.clone();
    next.set(mv.token, mv.to);
    if let Some(victim) = captured {
        next.set(victim, CellRef::Home);
    }

    Resolution {
        board: next,
        trail: trail(mv),
        captured,
    }
}

/// Squares crossed by `mv`, in travel order.
#[must_use]
pub fn trail(mv: &Move) -> Vec<CellRef> {
    if mv.from == CellRef::Home || mv.to == final_cell(mv.token.color) {
        return Vec::new();
    }
    let (Some(from), Some(to)) = (mv.from.track_index(), mv.to.track_index()) else {
        return Vec::new();
    };

    let track = track_of(mv.token.color);
    let (from, to) = (from as usize, to as usize);
    if to >= from {
        track[from + 1..=to].to_vec()
    } else {
        track[to..from].iter().rev().copied().collect()
    }
}

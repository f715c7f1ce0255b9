//! Legal move generation.
//!
//! Pure: reads a board snapshot and returns the moves one die face allows.

use crate::board::{entry_cell, is_safe, BoardState, CellRef, Occupancy, TokenId, FINAL_INDEX};
use crate::core::{Color, DieValue, Move, MoveList};

/// Which way tokens travel this roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Reverse,
}

impl Direction {
    /// Reverse only when asked for and the budget allows it.
    #[must_use]
    pub fn resolve(reverse_requested: bool, reverse_budget: u8) -> Option<Self> {
        match (reverse_requested, reverse_budget) {
            (false, _) => Some(Direction::Forward),
            (true, 0) => None,
            (true, _) => Some(Direction::Reverse),
        }
    }
}

/// The opposing token a mover landing on `to` would send Home.
///
/// A capture needs exactly one occupant, of another color, on a square that
/// is not safe. A block (two or more of one color) therefore always
/// protects, and so does any mixed crowd.
#[must_use]
pub fn capture_target(occupancy: &Occupancy, to: CellRef, mover: Color) -> Option<TokenId> {
    if is_safe(to) {
        return None;
    }
    match occupancy.occupants_of(to) {
        [lone] if lone.color != mover => Some(*lone),
        _ => None,
    }
}

/// Where a token on the track lands, if anywhere.
///
/// No wraparound: a result past the final cell or behind the entry cell
/// is no move at all.
#[must_use]
pub fn step_index(index: u8, die: DieValue, direction: Direction) -> Option<u8> {
    match direction {
        Direction::Forward => index.checked_add(die.get()).filter(|&i| i <= FINAL_INDEX),
        Direction::Reverse => index.checked_sub(die.get()),
    }
}

/// Legal moves for `color` with one die face.
///
/// Tokens already on their final cell (or Finished) never move again.
/// A Home token enters only on a six. Track tokens move `die` cells,
/// backwards when reverse is requested and budget remains; with reverse
/// requested and no budget nothing on the track may move.
#[must_use]
pub fn generate_moves(
    color: Color,
    die: DieValue,
    board: &BoardState,
    reverse_requested: bool,
    reverse_budget: u8,
) -> MoveList {
    let occupancy = board.occupancy();
    let direction = Direction::resolve(reverse_requested, reverse_budget);
    let mut moves = MoveList::new();

    for (token, from) in board.tokens_of(color) {
        match from {
            CellRef::Home => {
                if die.is_six() {
                    // Entry squares are safe, so entering never captures
                    moves.push(Move::new(token, from, entry_cell(color)));
                }
            }
            CellRef::Finished => {}
            CellRef::Track { index, .. } => {
                if index == FINAL_INDEX {
                    continue;
                }
                let Some(direction) = direction else {
                    continue;
                };
                let Some(new_index) = step_index(index, die, direction) else {
                    continue;
                };
                let to = CellRef::track(color, new_index);
                let mv = Move::new(token, from, to);
                moves.push(match capture_target(&occupancy, to, color) {
                    Some(victim) => mv.capturing(victim),
                    None => mv,
                });
            }
        }
    }

    moves
}

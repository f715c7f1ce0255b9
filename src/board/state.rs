//! Token positions and the derived square occupancy.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::cell::{CellRef, Coord, TokenId, TOKENS_PER_COLOR};
use super::topology::{coordinate_of, final_cell};
use crate::core::Color;

/// Where every token is.
///
/// All sixteen tokens exist regardless of how many seats are taken;
/// tokens of unused colors simply stay Home.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BoardRepr", into = "BoardRepr")]
pub struct BoardState {
    /// Indexed by `[color.index()][number - 1]`.
    cells: Cells,
}

type Cells = [[CellRef; TOKENS_PER_COLOR as usize]; 4];

#[derive(Serialize, Deserialize)]
struct BoardRepr {
    cells: Cells,
}

impl TryFrom<BoardRepr> for BoardState {
    type Error = String;

    fn try_from(BoardRepr { cells }: BoardRepr) -> Result<Self, Self::Error> {
        let board = BoardState { cells };
        let misplaced = board.tokens().find(
            |(token, cell)| matches!(cell, CellRef::Track { color, .. } if *color != token.color),
        );
        if let Some((token, cell)) = misplaced {
            return Err(format!("{token} cannot stand on {cell}"));
        }
        Ok(board)
    }
}

impl From<BoardState> for BoardRepr {
    fn from(BoardState { cells }: BoardState) -> Self {
        BoardRepr { cells }
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardState {
    /// Every token at Home.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cells: [[CellRef::Home; TOKENS_PER_COLOR as usize]; 4],
        }
    }

    #[must_use]
    pub fn cell_of(&self, token: TokenId) -> CellRef {
        self.cells[token.color.index()][(token.number - 1) as usize]
    }

    /// Move a token.
    ///
    /// Panics if `cell` is a track cell of another color.
    pub fn set(&mut self, token: TokenId, cell: CellRef) {
        if let CellRef::Track { color, .. } = cell {
            assert_eq!(color, token.color, "{token} cannot stand on {cell}");
        }
        self.cells[token.color.index()][(token.number - 1) as usize] = cell;
    }

    /// All tokens with their cells, color-major.
    pub fn tokens(&self) -> impl Iterator<Item = (TokenId, CellRef)> + '_ {
        Color::ALL.into_iter().flat_map(move |color| self.tokens_of(color))
    }

    /// One color's tokens with their cells, in number order.
    pub fn tokens_of(&self, color: Color) -> impl Iterator<Item = (TokenId, CellRef)> + '_ {
        TokenId::all_of(color).map(move |token| (token, self.cell_of(token)))
    }

    /// Have all of `color`'s tokens reached their final cell?
    #[must_use]
    pub fn all_final(&self, color: Color) -> bool {
        let last = final_cell(color);
        self.tokens_of(color).all(|(_, cell)| cell == last)
    }

    /// Index the board by square. Home and Finished tokens are left out.
    #[must_use]
    pub fn occupancy(&self) -> Occupancy {
        let mut by_coord: FxHashMap<Coord, Occupants> = FxHashMap::default();
        for (token, cell) in self.tokens() {
            if let Some(coord) = coordinate_of(cell) {
                by_coord.entry(coord).or_default().push(token);
            }
        }
        Occupancy { by_coord }
    }
}

/// Tokens sharing one square. Four fit inline; a crowded square spills.
pub type Occupants = SmallVec<[TokenId; 4]>;

/// Square -> tokens index built from a `BoardState` snapshot.
#[derive(Clone, Debug, Default)]
pub struct Occupancy {
    by_coord: FxHashMap<Coord, Occupants>,
}

impl Occupancy {
    /// Tokens on a square, in color-major order.
    #[must_use]
    pub fn occupants(&self, coord: Coord) -> &[TokenId] {
        self.by_coord
            .get(&coord)
            .map(|tokens| tokens.as_slice())
            .unwrap_or_default()
    }

    /// Tokens on the square of `cell`. Empty for Home and Finished.
    #[must_use]
    pub fn occupants_of(&self, cell: CellRef) -> &[TokenId] {
        coordinate_of(cell)
            .map(|coord| self.occupants(coord))
            .unwrap_or_default()
    }

    /// Color of the block on a square: two or more tokens, all one color.
    #[must_use]
    pub fn block_at(&self, coord: Coord) -> Option<Color> {
        match self.occupants(coord) {
            [first, rest @ ..] if !rest.is_empty() && rest.iter().all(|t| t.color == first.color) => {
                Some(first.color)
            }
            _ => None,
        }
    }

    /// Every block on the board.
    pub fn blocks(&self) -> impl Iterator<Item = (Coord, Color)> + '_ {
        self.by_coord
            .keys()
            .filter_map(move |&coord| self.block_at(coord).map(|color| (coord, color)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::topology::entry_cell;

    #[test]
    fn test_new_board_all_home() {
        let board = BoardState::new();
        assert_eq!(board.tokens().count(), 16);
        assert!(board.tokens().all(|(_, cell)| cell == CellRef::Home));
        assert!(board.occupancy().blocks().next().is_none());
    }

    #[test]
    fn test_set_and_read() {
        let mut board = BoardState::new();
        let token = TokenId::new(Color::Green, 3);
        board.set(token, CellRef::track(Color::Green, 12));

        assert_eq!(board.cell_of(token), CellRef::track(Color::Green, 12));
        assert_eq!(board.cell_of(TokenId::new(Color::Green, 2)), CellRef::Home);
    }

    #[test]
    #[should_panic(expected = "cannot stand on")]
    fn test_set_rejects_foreign_track() {
        let mut board = BoardState::new();
        board.set(TokenId::new(Color::Red, 1), CellRef::track(Color::Blue, 4));
    }

    #[test]
    fn test_all_final() {
        let mut board = BoardState::new();
        for token in TokenId::all_of(Color::Blue) {
            board.set(token, final_cell(Color::Blue));
        }
        assert!(board.all_final(Color::Blue));
        assert!(!board.all_final(Color::Red));

        board.set(TokenId::new(Color::Blue, 2), CellRef::track(Color::Blue, 55));
        assert!(!board.all_final(Color::Blue));
    }

    #[test]
    fn test_occupancy_groups_shared_squares() {
        let mut board = BoardState::new();
        // Red index 13 and Green index 0 are the same square
        board.set(TokenId::new(Color::Red, 1), CellRef::track(Color::Red, 13));
        board.set(TokenId::new(Color::Green, 1), entry_cell(Color::Green));

        let occupancy = board.occupancy();
        let tokens = occupancy.occupants_of(entry_cell(Color::Green));
        assert_eq!(tokens, &[TokenId::new(Color::Red, 1), TokenId::new(Color::Green, 1)]);
        assert!(occupancy.occupants_of(CellRef::Home).is_empty());
    }

    #[test]
    fn test_block_needs_two_of_one_color() {
        let mut board = BoardState::new();
        let square = CellRef::track(Color::Red, 20);
        let coord = coordinate_of(square).unwrap();

        board.set(TokenId::new(Color::Red, 1), square);
        assert_eq!(board.occupancy().block_at(coord), None);

        board.set(TokenId::new(Color::Red, 2), square);
        assert_eq!(board.occupancy().block_at(coord), Some(Color::Red));

        // Red 20 is Yellow 46
        board.set(TokenId::new(Color::Yellow, 1), CellRef::track(Color::Yellow, 46));
        assert_eq!(board.occupancy().block_at(coord), None);
    }

    #[test]
    fn test_serde_round_trip() {
        let mut board = BoardState::new();
        board.set(TokenId::new(Color::Yellow, 4), CellRef::track(Color::Yellow, 40));
        let json = serde_json::to_string(&board).unwrap();
        let back: BoardState = serde_json::from_str(&json).unwrap();
        assert_eq!(board, back);
    }

    #[test]
    fn test_serde_rejects_foreign_track() {
        let mut board = BoardState::new();
        board.set(TokenId::new(Color::Red, 1), CellRef::track(Color::Red, 7));
        let json = serde_json::to_string(&board).unwrap();
        assert!(serde_json::from_str::<BoardState>(&json).is_ok());

        let foreign = json.replacen("Red", "Blue", 1);
        assert!(serde_json::from_str::<BoardState>(&foreign).is_err());
    }
}

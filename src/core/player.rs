//! Seats: player numbers, the per-seat record and seat-indexed storage.
//!
//! Player numbers are 1-based, matching the seat order players see
//! (player 1 is Red).

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::color::Color;

/// Fewest seats a game can have.
pub const MIN_PLAYERS: usize = 2;

/// Most seats a game can have (one per color).
pub const MAX_PLAYERS: usize = 4;

/// Player number, 1-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PlayerId(u8);

impl PlayerId {
    /// Create a player ID from its 1-based seat number.
    ///
    /// Panics if `number` is 0 or above `MAX_PLAYERS`.
    #[must_use]
    pub const fn new(number: u8) -> Self {
        assert!(
            number >= 1 && number as usize <= MAX_PLAYERS,
            "Player number must be 1-4"
        );
        Self(number)
    }

    /// The 1-based seat number.
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// The 0-based storage index.
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// The color this seat plays.
    #[must_use]
    pub const fn color(self) -> Color {
        Color::ALL[self.index()]
    }

    /// The next seat in a game of `player_count`, wrapping to player 1.
    #[must_use]
    pub const fn next(self, player_count: usize) -> Self {
        Self((self.0 % player_count as u8) + 1)
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use reverse_ludo::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(players, vec![PlayerId::new(1), PlayerId::new(2), PlayerId::new(3)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (1..=player_count as u8).map(PlayerId)
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = String;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        if number >= 1 && number as usize <= MAX_PLAYERS {
            Ok(Self(number))
        } else {
            Err(format!("player number {number} is not in 1..={MAX_PLAYERS}"))
        }
    }
}

impl From<PlayerId> for u8 {
    fn from(id: PlayerId) -> Self {
        id.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// One seat at the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub color: Color,
    pub name: String,
    /// Reverse moves left. Only ever decremented.
    reverse_budget: u8,
}

impl Player {
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>, reverse_budget: u8) -> Self {
        Self {
            id,
            color: id.color(),
            name: name.into(),
            reverse_budget,
        }
    }

    /// Remaining reverse moves.
    #[must_use]
    pub fn reverse_budget(&self) -> u8 {
        self.reverse_budget
    }

    /// Can this player still move backwards?
    #[must_use]
    pub fn can_reverse(&self) -> bool {
        self.reverse_budget > 0
    }

    /// Spend one reverse move. Saturates at zero.
    pub fn spend_reverse(&mut self) {
        self.reverse_budget = self.reverse_budget.saturating_sub(1);
    }
}

/// One value per seat, indexed by `PlayerId`.
///
/// ```
/// use reverse_ludo::core::{PlayerId, PlayerMap};
///
/// let mut captures: PlayerMap<u32> = PlayerMap::new(2, |_| 0);
/// captures[PlayerId::new(2)] += 1;
/// assert_eq!(captures[PlayerId::new(2)], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// One entry per seat, built by `factory`.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(
            (MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count),
            "Seat count must be 2-4"
        );

        Self {
            data: PlayerId::all(player_count).map(factory).collect(),
        }
    }

    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8 + 1), v))
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p1 = PlayerId::new(1);
        let p4 = PlayerId::new(4);

        assert_eq!(p1.index(), 0);
        assert_eq!(p4.index(), 3);
        assert_eq!(p4.number(), 4);
        assert_eq!(format!("{}", p1), "Player 1");
    }

    #[test]
    fn test_player_id_serde_rejects_bad_seat() {
        assert_eq!(serde_json::from_str::<PlayerId>("3").unwrap(), PlayerId::new(3));
        assert_eq!(serde_json::to_string(&PlayerId::new(2)).unwrap(), "2");
        assert!(serde_json::from_str::<PlayerId>("0").is_err());
        assert!(serde_json::from_str::<PlayerId>("5").is_err());
    }

    #[test]
    fn test_seat_colors() {
        assert_eq!(PlayerId::new(1).color(), Color::Red);
        assert_eq!(PlayerId::new(2).color(), Color::Green);
        assert_eq!(PlayerId::new(3).color(), Color::Yellow);
        assert_eq!(PlayerId::new(4).color(), Color::Blue);
    }

    #[test]
    fn test_next_wraps() {
        assert_eq!(PlayerId::new(1).next(2), PlayerId::new(2));
        assert_eq!(PlayerId::new(2).next(2), PlayerId::new(1));
        assert_eq!(PlayerId::new(3).next(4), PlayerId::new(4));
        assert_eq!(PlayerId::new(4).next(4), PlayerId::new(1));
    }

    #[test]
    #[should_panic(expected = "Player number must be 1-4")]
    fn test_player_zero_rejected() {
        let _ = PlayerId::new(0);
    }

    #[test]
    fn test_reverse_budget_saturates() {
        let mut player = Player::new(PlayerId::new(1), "Ana", 1);
        assert!(player.can_reverse());

        player.spend_reverse();
        assert_eq!(player.reverse_budget(), 0);
        assert!(!player.can_reverse());

        player.spend_reverse();
        assert_eq!(player.reverse_budget(), 0);
    }

    #[test]
    fn test_player_map_by_seat() {
        let mut budgets: PlayerMap<u8> = PlayerMap::new(3, |p| p.number() * 2);
        budgets[PlayerId::new(3)] -= 1;

        let pairs: Vec<_> = budgets.iter().map(|(id, b)| (id.number(), *b)).collect();
        assert_eq!(pairs, vec![(1, 2), (2, 4), (3, 5)]);
    }

    #[test]
    fn test_player_map_serde() {
        let map: PlayerMap<Player> = PlayerMap::new(2, |id| Player::new(id, "x", 3));
        let json = serde_json::to_string(&map).unwrap();
        let back: PlayerMap<Player> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, back);
    }

    #[test]
    #[should_panic(expected = "Seat count must be 2-4")]
    fn test_player_map_seat_bounds() {
        let _: PlayerMap<u8> = PlayerMap::new(5, |_| 0);
    }
}

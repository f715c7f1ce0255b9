//! Property tests: board invariants over random play-outs and move rules
//! over arbitrary positions.

use proptest::collection::vec;
use proptest::prelude::*;

use reverse_ludo::board::{coordinate_of, is_safe, BoardState, CellRef, TokenId, FINAL_INDEX};
use reverse_ludo::core::{Color, DieValue, GameConfig, PlayerId};
use reverse_ludo::game::Session;
use reverse_ludo::rules::generate_moves;

fn any_color() -> impl Strategy<Value = Color> {
    prop::sample::select(Color::ALL.to_vec())
}

fn any_die() -> impl Strategy<Value = DieValue> {
    (1u8..=6).prop_map(|v| DieValue::new(v).unwrap())
}

/// Ring index of the square `index` on `color`'s track, seen from `other`.
fn same_square(color: Color, index: u8, other: Color) -> Option<u8> {
    let absolute = (color.quarter() as u16 * 13 + index as u16) % 52;
    let relative = (absolute + 52 - other.quarter() as u16 * 13) % 52;
    (relative <= 50).then_some(relative as u8)
}

fn check_confinement(board: &BoardState) -> Result<(), TestCaseError> {
    for (token, cell) in board.tokens() {
        match cell {
            CellRef::Home | CellRef::Finished => {}
            CellRef::Track { color, index } => {
                prop_assert_eq!(color, token.color, "{} on another color's track", token);
                prop_assert!(index <= FINAL_INDEX, "{} past the final cell", token);
            }
        }
    }
    Ok(())
}

// =============================================================================
// Random Play-outs
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_playout_invariants(
        seed in any::<u64>(),
        players in 2usize..=4,
        picks in vec(any::<u8>(), 300),
        arm_reverse in vec(prop::bool::weighted(0.2), 300),
    ) {
        let config = GameConfig::new(players)
            .with_seed(seed)
            .with_reverse_budget(3);
        let mut session = Session::new(config).unwrap();

        for (pick, arm) in picks.iter().zip(&arm_reverse) {
            if session.is_over() {
                break;
            }
            if *arm {
                session.set_reverse(true).unwrap();
            }
            session.roll(None).unwrap();

            let before = session.reverse_budgets();
            let mover = session.current_player();
            let reverse = session.reverse_mode();
            let legal = session.legal_moves().to_vec();
            if !legal.is_empty() {
                let mv = legal[*pick as usize % legal.len()];
                session.select(&mv).unwrap();
            }

            // Budgets only fall, by one, for a resolved reverse move
            for ((id, old), (_, new)) in before.iter().zip(session.reverse_budgets()) {
                let spent = *id == mover && reverse && !legal.is_empty();
                prop_assert_eq!(new, if spent { old - 1 } else { *old });
            }

            check_confinement(session.board())?;

            // Winner iff all four tokens sit on index 56
            for id in PlayerId::all(players) {
                let all_final = session
                    .board()
                    .tokens_of(id.color())
                    .all(|(_, cell)| cell.track_index() == Some(FINAL_INDEX));
                prop_assert_eq!(session.has_won(id), all_final);
            }
        }
    }

    // =========================================================================
    // Move Rules
    // =========================================================================

    #[test]
    fn prop_no_overshoot(color in any_color(), index in 0u8..=FINAL_INDEX, die in any_die()) {
        let mut board = BoardState::new();
        let token = TokenId::new(color, 1);
        board.set(token, CellRef::track(color, index));

        let moves = generate_moves(color, die, &board, false, 10);
        let own: Vec<_> = moves.iter().filter(|m| m.token == token).collect();

        if index == FINAL_INDEX || index + die.get() > FINAL_INDEX {
            prop_assert!(own.is_empty());
        } else {
            prop_assert_eq!(own.len(), 1);
            prop_assert_eq!(own[0].to, CellRef::track(color, index + die.get()));
        }
    }

    #[test]
    fn prop_reverse_stays_on_track(color in any_color(), index in 0u8..FINAL_INDEX, die in any_die()) {
        let mut board = BoardState::new();
        board.set(TokenId::new(color, 1), CellRef::track(color, index));

        let moves = generate_moves(color, die, &board, true, 1);
        let track: Vec<_> = moves.iter().filter(|m| m.from != CellRef::Home).collect();

        if index < die.get() {
            prop_assert!(track.is_empty());
        } else {
            prop_assert_eq!(track.len(), 1);
            prop_assert_eq!(track[0].to, CellRef::track(color, index - die.get()));
        }
    }

    #[test]
    fn prop_capture_symmetry(
        mover in any_color(),
        victim in any_color(),
        from in 0u8..=44,
        die in any_die(),
        blocked in any::<bool>(),
    ) {
        prop_assume!(mover != victim);
        let to = from + die.get();
        let Some(victim_index) = same_square(mover, to, victim) else {
            return Ok(());
        };
        let target = CellRef::track(mover, to);
        let victim_cell = CellRef::track(victim, victim_index);
        prop_assert_eq!(coordinate_of(target), coordinate_of(victim_cell));

        let mut board = BoardState::new();
        board.set(TokenId::new(mover, 1), CellRef::track(mover, from));
        board.set(TokenId::new(victim, 1), victim_cell);
        if blocked {
            board.set(TokenId::new(victim, 2), victim_cell);
        }

        let moves = generate_moves(mover, die, &board, false, 10);
        let mv = moves
            .iter()
            .find(|m| m.token == TokenId::new(mover, 1))
            .copied();
        prop_assert!(mv.is_some());
        let captured = mv.and_then(|m| m.captured);

        if blocked || is_safe(target) {
            prop_assert_eq!(captured, None);
        } else {
            prop_assert_eq!(captured, Some(TokenId::new(victim, 1)));
        }
    }
}

//! Reverse Ludo turn rules.

use tracing::{debug, info};

use crate::board::final_cell;
use crate::core::{
    Command, CommandError, ConfigError, DieValue, ExtraTurn, GameConfig, GameEvent, GameState,
    Move, MoveList, MoveRecord, TurnPhase,
};
use crate::rules::{apply_move, generate_moves, GameResult, RulesEngine, Transition};

/// The turn state machine.
///
/// Holds only the validated configuration; all mutable game data lives in
/// the `GameState` passed to each transition.
#[derive(Clone, Debug)]
pub struct ReverseLudo {
    config: GameConfig,
    initial: GameState,
}

impl ReverseLudo {
    /// Validate `config` and prepare the starting state.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let initial = GameState::new(&config)?;
        Ok(Self { config, initial })
    }

    /// Restore the starting position. Accepted in every state.
    pub fn reset(&self, state: &mut GameState) -> Vec<GameEvent> {
        info!("game reset");
        *state = self.initial_state();
        vec![GameEvent::GameReset]
    }

    fn roll(
        &self,
        state: &mut GameState,
        die: DieValue,
        events: &mut Vec<GameEvent>,
    ) -> Result<(), CommandError> {
        if !state.is_awaiting_roll() {
            return Err(CommandError::RollPending);
        }

        let player = state.current_player();
        let legal_moves = self.legal_moves(state, die, state.reverse_mode());
        debug!(%player, %die, moves = legal_moves.len(), "rolled");
        events.push(GameEvent::Rolled {
            player,
            die,
            legal_moves: legal_moves.len(),
        });

        if !legal_moves.is_empty() {
            state.turn.phase = TurnPhase::Rolled { die, legal_moves };
        } else if die.is_six() {
            // Nothing to move, but a six still keeps the turn
            state.clear_roll();
            events.push(GameEvent::SixForfeited { player });
        } else {
            events.push(GameEvent::TurnSkipped { player, die });
            advance(state, events);
        }
        Ok(())
    }

    fn set_reverse(&self, state: &mut GameState, enabled: bool, events: &mut Vec<GameEvent>) {
        let player = state.current_player();
        if enabled == state.reverse_mode() || (enabled && !state.player(player).can_reverse()) {
            return;
        }

        state.turn.reverse_mode = enabled;
        debug!(%player, enabled, "reverse mode changed");
        events.push(GameEvent::ReverseModeChanged { player, enabled });

        if let TurnPhase::Rolled { die, .. } = state.turn.phase {
            let legal_moves = self.legal_moves(state, die, enabled);
            state.turn.phase = TurnPhase::Rolled { die, legal_moves };
        }
    }

    fn select(
        &self,
        state: &mut GameState,
        mv: &Move,
        events: &mut Vec<GameEvent>,
    ) -> Result<(), CommandError> {
        let TurnPhase::Rolled { die, legal_moves } = &state.turn.phase else {
            return Err(CommandError::NoPendingRoll);
        };
        if !legal_moves.contains(mv) {
            return Err(CommandError::IllegalMove);
        }
        let die = *die;
        let player = state.current_player();
        let reverse = state.reverse_mode();

        if reverse {
            state.players[player].spend_reverse();
        }

        let resolution = apply_move(&state.board, mv);
        let resolved = Move {
            captured: resolution.captured,
            ..*mv
        };
        debug!(%player, mv = %resolved, reverse, "move resolved");

        state.board = resolution.board;
        state.last_trail = resolution.trail.clone();
        state.history.push_back(MoveRecord {
            player,
            mv: resolved,
            die,
            reverse,
            turn: state.turn_number,
        });
        state.clear_roll();

        events.push(GameEvent::MoveResolved {
            player,
            mv: resolved,
            trail: resolution.trail,
        });
        if let Some(victim) = resolution.captured {
            events.push(GameEvent::TokenCaptured { by: player, victim });
        }

        let extra = ExtraTurn {
            landed_on_final: mv.to == final_cell(player.color()),
            rolled_six: die.is_six(),
            capture_occurred: resolved.is_capture(),
        };

        let just_finished = state.has_won(player) && !state.finish_order.contains(&player);
        if just_finished {
            state.finish_order.push(player);
            let place = state.finish_order.len();
            info!(%player, place, "player finished");
            events.push(GameEvent::PlayerFinished { player, place });
        }

        if let Some(result) = self.is_terminal(state) {
            if let Some(winner) = result.winner() {
                info!(%winner, "game over");
                events.push(GameEvent::GameOver { winner });
            }
        } else if just_finished || !extra.granted() {
            // A finished player has nothing left to roll for
            advance(state, events);
        } else {
            events.push(GameEvent::ExtraTurnGranted {
                player,
                reasons: extra,
            });
        }
        Ok(())
    }
}

/// Pass the turn to the next player who has not won.
fn advance(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let from = state.current_player();
    let to = state.next_unfinished_player();
    state.pass_turn_to(to);
    debug!(%from, %to, turn = state.turn_number, "turn passed");
    events.push(GameEvent::TurnPassed { from, to });
}

impl RulesEngine for ReverseLudo {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn initial_state(&self) -> GameState {
        self.initial.clone()
    }

    fn legal_moves(&self, state: &GameState, die: DieValue, reverse: bool) -> MoveList {
        let player = state.current_player();
        generate_moves(
            player.color(),
            die,
            &state.board,
            reverse,
            state.reverse_budget(player),
        )
    }

    fn transition(&self, state: &GameState, command: &Command) -> Result<Transition, CommandError> {
        let is_reset = matches!(command, Command::Reset);
        if !is_reset && self.is_terminal(state).is_some() {
            return Err(CommandError::GameOver);
        }

        let mut next = state.clone();
        let mut events = Vec::new();
        match command {
            Command::Roll(die) => self.roll(&mut next, *die, &mut events)?,
            Command::ToggleReverse => {
                let enabled = !next.reverse_mode();
                self.set_reverse(&mut next, enabled, &mut events);
            }
            Command::SetReverse(enabled) => self.set_reverse(&mut next, *enabled, &mut events),
            Command::Select(mv) => self.select(&mut next, mv, &mut events)?,
            Command::Reset => events = self.reset(&mut next),
        }

        Ok(Transition {
            state: next,
            events,
        })
    }

    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        let first = state.winner()?;
        if !self.config.play_to_completion {
            return Some(GameResult::Winner(first));
        }

        let unfinished: Vec<_> = state.unfinished_players().collect();
        if unfinished.len() > 1 {
            return None;
        }
        let mut ranking = state.ranked_winners();
        ranking.extend(unfinished);
        Some(GameResult::Ranking(ranking))
    }
}

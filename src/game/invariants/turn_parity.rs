//! Turn parity invariant: the side to move matches the cursor's parity.

use super::super::state::GameState;
use super::super::types::Player;
use super::Invariant;

/// Invariant: The side to move is derived from the displayed step.
///
/// X moves on even steps and O on odd steps, always. Jumping re-derives
/// the turn from the target step, so the pairing can never drift.
pub struct TurnParityInvariant;

impl Invariant<GameState> for TurnParityInvariant {
    fn holds(state: &GameState) -> bool {
        let expected = if state.step % 2 == 0 {
            Player::X
        } else {
            Player::O
        };
        state.to_move == expected
    }

    fn description() -> &'static str {
        "Side to move matches the parity of the displayed step"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameState;

    #[test]
    fn test_new_game_holds() {
        let game = GameState::new();
        assert!(TurnParityInvariant::holds(&game));
    }

    #[test]
    fn test_holds_after_each_move() {
        let mut game = GameState::new();
        for index in [4, 0, 8, 2] {
            game.apply_move(index).unwrap();
            assert!(TurnParityInvariant::holds(&game));
        }
    }

    #[test]
    fn test_holds_after_jumps() {
        let mut game = GameState::new();
        for index in [4, 0, 8, 2] {
            game.apply_move(index).unwrap();
        }
        for step in [0, 3, 2, 4, 1] {
            game.jump_to(step).unwrap();
            assert!(TurnParityInvariant::holds(&game));
        }
    }

    #[test]
    fn test_swapped_turn_violates() {
        let mut game = GameState::new();
        game.to_move = Player::O;
        assert!(!TurnParityInvariant::holds(&game));
    }

    #[test]
    fn test_stale_turn_after_manual_cursor_move_violates() {
        let mut game = GameState::new();
        game.apply_move(4).unwrap();

        // Corrupt by moving the cursor without re-deriving the turn.
        game.step = 0;

        assert!(!TurnParityInvariant::holds(&game));
    }
}

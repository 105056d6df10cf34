//! Step bounds invariant: the display cursor points at a real snapshot.

use super::super::state::GameState;
use super::Invariant;

/// Invariant: The display cursor indexes into the timeline.
///
/// `step` selects the displayed board, so it must name an existing
/// snapshot. Truncation on branching keeps this true: the cursor is
/// re-pointed at the appended snapshot in the same transition.
pub struct StepInBoundsInvariant;

impl Invariant<GameState> for StepInBoundsInvariant {
    fn holds(state: &GameState) -> bool {
        state.step < state.history.len()
    }

    fn description() -> &'static str {
        "Display cursor indexes into the timeline"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameState;

    #[test]
    fn test_new_game_holds() {
        let game = GameState::new();
        assert!(StepInBoundsInvariant::holds(&game));
    }

    #[test]
    fn test_holds_after_moves_and_jumps() {
        let mut game = GameState::new();
        for index in [4, 0, 8] {
            game.apply_move(index).unwrap();
        }
        game.jump_to(1).unwrap();
        assert!(StepInBoundsInvariant::holds(&game));
    }

    #[test]
    fn test_dangling_cursor_violates() {
        let mut game = GameState::new();
        game.step = 3;
        assert!(!StepInBoundsInvariant::holds(&game));
    }

    #[test]
    fn test_truncated_timeline_violates() {
        let mut game = GameState::new();
        for index in [4, 0, 8] {
            game.apply_move(index).unwrap();
        }

        // Corrupt by dropping snapshots out from under the cursor.
        game.history.truncate(2);

        assert!(!StepInBoundsInvariant::holds(&game));
    }
}

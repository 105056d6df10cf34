//! Empty start invariant: the timeline begins with an empty board.

use super::super::state::GameState;
use super::super::types::Square;
use super::Invariant;

/// Invariant: The first timeline entry is the empty board.
///
/// Step zero is the game start. Nothing ever rewrites it: moves append
/// after the cursor and jumps only move the cursor.
pub struct EmptyStartInvariant;

impl Invariant<GameState> for EmptyStartInvariant {
    fn holds(state: &GameState) -> bool {
        state
            .history
            .first()
            .is_some_and(|board| board.squares().iter().all(|s| *s == Square::Empty))
    }

    fn description() -> &'static str {
        "First timeline entry is the empty board"
    }
}

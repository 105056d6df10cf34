//! Single mark step invariant: adjacent snapshots differ by one new mark.

use super::super::state::GameState;
use super::super::types::{Player, Square};
use super::Invariant;

/// Invariant: Each timeline step adds exactly one mark, in turn order.
///
/// Between snapshot `m` and snapshot `m + 1` exactly one square changes,
/// it changes from empty to occupied, and the mark belongs to the player
/// whose turn it was at step `m` (X on even steps, O on odd). Marks are
/// never removed or rewritten.
pub struct SingleMarkStepInvariant;

impl Invariant<GameState> for SingleMarkStepInvariant {
    fn holds(state: &GameState) -> bool {
        state.history.windows(2).enumerate().all(|(m, pair)| {
            let expected = if m % 2 == 0 { Player::X } else { Player::O };
            let mut changes = pair[0]
                .squares()
                .iter()
                .zip(pair[1].squares().iter())
                .filter(|(before, after)| before != after);

            let valid_single_change = matches!(
                changes.next(),
                Some((Square::Empty, Square::Occupied(mark))) if *mark == expected
            );
            valid_single_change && changes.next().is_none()
        })
    }

    fn description() -> &'static str {
        "Each timeline step adds exactly one mark for the player on turn"
    }
}

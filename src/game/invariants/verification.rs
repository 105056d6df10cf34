//! Formal verification of invariants using Kani model checker.
//!
//! These proof harnesses mathematically verify that invariants hold
//! for ALL possible game states (bounded).

#[cfg(kani)]
mod proofs {
    use super::super::{
        Invariant, InvariantSet, StepInBoundsInvariant, TimelineInvariants, TurnParityInvariant,
    };
    use crate::game::GameState;

    /// Verify the timeline invariants hold for every reachable state.
    ///
    /// Proves: no sequence of moves can corrupt the timeline.
    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_moves_preserve_invariants() {
        // Arbitrary reachable state (bounded number of moves)
        let state: GameState = kani::any();

        assert!(
            TimelineInvariants::check_all(&state).is_ok(),
            "TimelineInvariants violated"
        );
    }

    /// Verify jumping anywhere in range keeps cursor and turn consistent.
    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_jump_preserves_invariants() {
        let mut state: GameState = kani::any();

        let step: usize = kani::any();
        kani::assume(step < state.history().len());

        state.jump_to(step).unwrap();

        assert!(
            StepInBoundsInvariant::holds(&state),
            "StepInBoundsInvariant violated"
        );
        assert!(
            TurnParityInvariant::holds(&state),
            "TurnParityInvariant violated"
        );
    }

    /// Verify a rejected move leaves the state untouched.
    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_rejection_is_a_no_op() {
        let before: GameState = kani::any();
        let mut after = before.clone();

        let index: usize = kani::any();
        kani::assume(index < 16);

        if after.apply_move(index).is_err() {
            assert!(after == before, "rejected move mutated state");
        }
    }
}

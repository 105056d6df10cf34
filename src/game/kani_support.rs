//! Kani arbitrary implementations for game types.
//!
//! These implementations allow Kani to explore all possible values of our types
//! during model checking.

#[cfg(kani)]
use super::position::Position;
#[cfg(kani)]
use super::state::GameState;
#[cfg(kani)]
use super::types::{Board, Player, Square};

#[cfg(kani)]
impl kani::Arbitrary for Player {
    fn any() -> Self {
        if kani::any() {
            Player::X
        } else {
            Player::O
        }
    }
}

#[cfg(kani)]
impl kani::Arbitrary for Position {
    fn any() -> Self {
        let index: u8 = kani::any();
        kani::assume(index < 9);
        match index {
            0 => Position::TopLeft,
            1 => Position::TopCenter,
            2 => Position::TopRight,
            3 => Position::MiddleLeft,
            4 => Position::Center,
            5 => Position::MiddleRight,
            6 => Position::BottomLeft,
            7 => Position::BottomCenter,
            8 => Position::BottomRight,
            _ => unreachable!(),
        }
    }
}

#[cfg(kani)]
impl kani::Arbitrary for Square {
    fn any() -> Self {
        if kani::any() {
            Square::Empty
        } else {
            Square::Occupied(kani::any())
        }
    }
}

#[cfg(kani)]
impl kani::Arbitrary for Board {
    fn any() -> Self {
        let squares: [Square; 9] = kani::any();
        Board::from_squares(squares)
    }
}

#[cfg(kani)]
impl kani::Arbitrary for GameState {
    fn any() -> Self {
        // Replay a bounded number of arbitrary moves so every generated
        // state is reachable through the public API.
        let mut state = GameState::new();
        let moves: usize = kani::any();
        kani::assume(moves <= 4);
        for _ in 0..moves {
            let index: usize = kani::any();
            kani::assume(index < 9);
            let _ = state.apply_move(index);
        }
        state
    }
}

//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board snapshot. Rules are separated
//! from board storage so the timeline logic and the tests can share them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::check_winner;

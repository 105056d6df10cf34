//! Rewind Tic-Tac-Toe library - a game state machine with time travel.
//!
//! Every move appends a board snapshot to a timeline instead of mutating
//! in place, so any earlier position can be revisited and played from.
//!
//! # Architecture
//!
//! - **Game**: the timeline state machine, pure rules, and first-class
//!   invariants checked after every transition
//! - **Tui**: a synchronous terminal client over the game state
//! - **Cli**: command-line flags for the binary
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::GameState;
//!
//! let mut game = GameState::new();
//! game.apply_move(4)?; // X takes the center
//! game.apply_move(0)?; // O answers in the corner
//! game.jump_to(1)?;    // rewind to just after X's move
//! assert_eq!(game.status_text(), "Next player: O");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod game;
pub mod tui;

// Crate-level exports - Game types
pub use game::{Board, GameState, JumpError, Mark, MoveError, MoveLabel, Player, Position, Square};

// Crate-level exports - Rules
pub use game::rules::{check_winner, is_draw, is_full};

// Crate-level exports - Invariants
pub use game::invariants::{Invariant, InvariantSet, InvariantViolation, TimelineInvariants};

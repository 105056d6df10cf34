//! Tic-tac-toe with a rewindable move timeline.
//!
//! The core is [`GameState`]: every move appends a board snapshot to a
//! timeline, and a cursor can jump to any earlier snapshot. Playing from
//! the past discards the abandoned future and branches fresh. Rules are
//! pure functions over [`Board`]; invariants are first-class types
//! checked after every transition.

pub mod invariants;
mod kani_support;
mod position;
pub mod rules;
mod state;
mod types;

pub use position::Position;
pub use state::{GameState, JumpError, MoveError, MoveLabel};
pub use types::{Board, Player, Square};

/// Alias for clarity in rendering code.
pub type Mark = Player;

//! Game state with a rewindable move timeline.
//!
//! [`GameState`] keeps every board snapshot the game has passed through,
//! plus a cursor selecting which snapshot is currently displayed. Applying
//! a move while the cursor points into the past discards the abandoned
//! future before appending, so the timeline always reads as one coherent
//! line of play.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

use super::invariants::assert_invariants;
use super::position::Position;
use super::rules::check_winner;
use super::types::{Board, Player, Square};

/// Reasons a move is rejected.
///
/// A rejected move leaves the state byte-for-byte untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell index does not name a square on the board.
    #[display("cell index {} is out of bounds (expected 0..=8)", _0)]
    OutOfBounds(usize),
    /// The targeted square already holds a mark.
    #[display("square {} is already occupied", _0)]
    SquareOccupied(Position),
    /// The displayed board already contains a winning line.
    #[display("game is already won by {}", _0)]
    GameOver(Player),
}

impl std::error::Error for MoveError {}

/// Reasons a jump is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum JumpError {
    /// The requested step does not exist in the timeline.
    #[display("step {step} is out of range (timeline has {len} entries)")]
    StepOutOfRange {
        /// The step that was requested.
        step: usize,
        /// The number of entries in the timeline.
        len: usize,
    },
}

impl std::error::Error for JumpError {}

/// A labeled entry in the timeline, suitable for rendering as a jump target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveLabel {
    /// The step this entry jumps to.
    pub step: usize,
    /// Human-readable label for the entry.
    pub label: String,
}

/// The complete state of a game, including its history.
///
/// The timeline always holds at least one entry: the empty board at step
/// zero. `step` indexes into `history` and selects the displayed board;
/// `to_move` tracks whose mark the next move places and always matches the
/// parity of `step` (X on even steps, O on odd).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) history: Vec<Board>,
    pub(crate) step: usize,
    pub(crate) to_move: Player,
}

impl GameState {
    /// Creates a fresh game: one empty board, step zero, X to move.
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            step: 0,
            to_move: Player::X,
        }
    }

    /// Applies a move at the given cell index for the player whose turn it is.
    ///
    /// On success the abandoned future (entries past the displayed step, if
    /// the cursor had been rewound) is discarded, the new snapshot is
    /// appended, the cursor advances to it, and the turn passes. Returns the
    /// position that was marked.
    ///
    /// Rejected moves ([`MoveError`]) leave the state untouched.
    #[instrument(skip(self), fields(step = self.step, player = %self.to_move))]
    pub fn apply_move(&mut self, index: usize) -> Result<Position, MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        let current = &self.history[self.step];
        if let Some(winner) = check_winner(current) {
            debug!(%winner, "move rejected: board already won");
            return Err(MoveError::GameOver(winner));
        }
        if !current.is_empty(pos) {
            debug!(%pos, "move rejected: square occupied");
            return Err(MoveError::SquareOccupied(pos));
        }

        // Discard the abandoned future before appending.
        self.history.truncate(self.step + 1);
        let mut board = self.history[self.step].clone();
        board.set(pos, Square::Occupied(self.to_move));
        self.history.push(board);
        self.step = self.history.len() - 1;
        self.to_move = self.to_move.opponent();

        debug!(%pos, step = self.step, "move applied");
        trace!(board = %self.history[self.step].display(), "board after move");
        assert_invariants(self);
        Ok(pos)
    }

    /// Moves the display cursor to an earlier (or later) step without
    /// altering the timeline.
    ///
    /// The side to move is re-derived from the step's parity: X on even
    /// steps, O on odd. Out-of-range steps are rejected and leave the state
    /// untouched.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), JumpError> {
        if step >= self.history.len() {
            return Err(JumpError::StepOutOfRange {
                step,
                len: self.history.len(),
            });
        }
        self.step = step;
        self.to_move = if step % 2 == 0 { Player::X } else { Player::O };

        debug!(step, player = %self.to_move, "jumped");
        assert_invariants(self);
        Ok(())
    }

    /// The board snapshot the cursor currently selects.
    pub fn current_board(&self) -> &Board {
        &self.history[self.step]
    }

    /// The step the cursor currently selects.
    pub fn step(&self) -> usize {
        self.step
    }

    /// The player whose turn it is on the displayed board.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Every snapshot in the timeline, oldest first.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// One-line summary of the displayed board.
    ///
    /// Reports the winner if the displayed board holds a winning line,
    /// otherwise whose turn it is.
    pub fn status_text(&self) -> String {
        match check_winner(self.current_board()) {
            Some(winner) => format!("Winner: {winner}"),
            None => format!("Next player: {}", self.to_move),
        }
    }

    /// Jump targets for every timeline entry, oldest first.
    ///
    /// Step zero is labeled `Go to game start`; step `m` is labeled
    /// `Go to move #m`.
    pub fn move_list(&self) -> Vec<MoveLabel> {
        (0..self.history.len())
            .map(|step| {
                let label = if step == 0 {
                    "Go to game start".to_string()
                } else {
                    format!("Go to move #{step}")
                };
                MoveLabel { step, label }
            })
            .collect()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_shape() {
        let game = GameState::new();
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.step(), 0);
        assert_eq!(game.to_move(), Player::X);
        assert!(game.current_board().squares().iter().all(|s| *s == Square::Empty));
    }

    #[test]
    fn test_apply_move_appends_and_toggles() {
        let mut game = GameState::new();
        let pos = game.apply_move(4).unwrap();
        assert_eq!(pos, Position::Center);
        assert_eq!(game.history().len(), 2);
        assert_eq!(game.step(), 1);
        assert_eq!(game.to_move(), Player::O);
        assert_eq!(game.current_board().get(Position::Center), Square::Occupied(Player::X));
        // The starting snapshot is untouched.
        assert_eq!(game.history()[0], Board::new());
    }

    #[test]
    fn test_apply_move_out_of_bounds() {
        let mut game = GameState::new();
        let before = game.clone();
        assert_eq!(game.apply_move(9), Err(MoveError::OutOfBounds(9)));
        assert_eq!(game.apply_move(usize::MAX), Err(MoveError::OutOfBounds(usize::MAX)));
        assert_eq!(game, before);
    }

    #[test]
    fn test_apply_move_occupied() {
        let mut game = GameState::new();
        game.apply_move(0).unwrap();
        let before = game.clone();
        assert_eq!(game.apply_move(0), Err(MoveError::SquareOccupied(Position::TopLeft)));
        assert_eq!(game, before);
    }

    #[test]
    fn test_apply_move_after_win() {
        let mut game = GameState::new();
        // X: 0, 1, 2 wins the top row; O interleaves on 3, 4.
        for index in [0, 3, 1, 4, 2] {
            game.apply_move(index).unwrap();
        }
        let before = game.clone();
        assert_eq!(game.apply_move(5), Err(MoveError::GameOver(Player::X)));
        assert_eq!(game, before);
    }

    #[test]
    fn test_jump_to_rederives_turn() {
        let mut game = GameState::new();
        for index in [0, 3, 1] {
            game.apply_move(index).unwrap();
        }
        game.jump_to(2).unwrap();
        assert_eq!(game.step(), 2);
        assert_eq!(game.to_move(), Player::X);
        game.jump_to(1).unwrap();
        assert_eq!(game.to_move(), Player::O);
        // History itself is untouched by jumping.
        assert_eq!(game.history().len(), 4);
    }

    #[test]
    fn test_jump_to_out_of_range() {
        let mut game = GameState::new();
        let before = game.clone();
        assert_eq!(
            game.jump_to(1),
            Err(JumpError::StepOutOfRange { step: 1, len: 1 })
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_branching_discards_future() {
        let mut game = GameState::new();
        for index in [0, 3, 1, 4] {
            game.apply_move(index).unwrap();
        }
        game.jump_to(1).unwrap();
        game.apply_move(8).unwrap();
        assert_eq!(game.history().len(), 3);
        assert_eq!(game.step(), 2);
        // The branch point survives; the abandoned future is gone.
        assert_eq!(game.history()[1].get(Position::TopLeft), Square::Occupied(Player::X));
        assert_eq!(game.current_board().get(Position::BottomRight), Square::Occupied(Player::O));
        assert_eq!(game.current_board().get(Position::MiddleLeft), Square::Empty);
    }

    #[test]
    fn test_status_text_forms() {
        let mut game = GameState::new();
        assert_eq!(game.status_text(), "Next player: X");
        game.apply_move(4).unwrap();
        assert_eq!(game.status_text(), "Next player: O");
        for index in [0, 2, 3, 6] {
            game.apply_move(index).unwrap();
        }
        assert_eq!(game.status_text(), "Winner: X");
    }

    #[test]
    fn test_move_list_labels() {
        let mut game = GameState::new();
        game.apply_move(0).unwrap();
        game.apply_move(4).unwrap();
        let labels: Vec<String> = game.move_list().into_iter().map(|m| m.label).collect();
        assert_eq!(
            labels,
            vec![
                "Go to game start".to_string(),
                "Go to move #1".to_string(),
                "Go to move #2".to_string(),
            ]
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            MoveError::OutOfBounds(12).to_string(),
            "cell index 12 is out of bounds (expected 0..=8)"
        );
        assert_eq!(
            MoveError::SquareOccupied(Position::Center).to_string(),
            "square Center is already occupied"
        );
        assert_eq!(
            MoveError::GameOver(Player::O).to_string(),
            "game is already won by O"
        );
        assert_eq!(
            JumpError::StepOutOfRange { step: 7, len: 3 }.to_string(),
            "step 7 is out of range (timeline has 3 entries)"
        );
    }
}

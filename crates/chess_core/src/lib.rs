pub mod attacks;
pub mod board;
pub mod error;
pub mod game_state;
pub mod history;
pub mod movegen;
pub mod notation;
pub mod perft;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use error::ChessError;
pub use history::*;
pub use movegen::*;
pub use notation::*;
pub use perft::{divide, perft};
pub use types::*;

// =============================================================================
// Engine trait — implemented by move-selecting engines
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// The best move found (None if no legal moves)
    pub best_move: Option<Move>,
    /// Evaluation score in centipawns from the side to move's perspective
    pub score: i32,
    /// Search depth in plies
    pub depth: u8,
    /// Number of nodes searched (for stats)
    pub nodes: u64,
}

/// Trait that chess engines implement.
///
/// The engine searches the caller's position in place: it may make and
/// unmake moves on it, but hands it back exactly as it was received. The
/// caller must not touch the position while a search is running, which the
/// `&mut` borrow enforces.
pub trait Engine: Send {
    /// Search the position to the given depth.
    ///
    /// # Arguments
    /// * `pos` - The current position to analyze
    /// * `depth` - Nominal search depth in plies
    ///
    /// # Returns
    /// SearchResult containing best move, score, and statistics
    fn search(&mut self, pos: &mut Position, depth: u8) -> SearchResult;

    /// Returns the engine's name for identification
    fn name(&self) -> &str;

    /// Returns the engine's author
    fn author(&self) -> &str {
        "ML-chess"
    }

    /// Reset internal state for a new game
    fn new_game(&mut self) {}

    /// Optional: Set a named option. Returns true if the option was recognized.
    fn set_option(&mut self, _name: &str, _value: &str) -> bool {
        false
    }
}

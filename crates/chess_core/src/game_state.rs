//! Terminal-state classification.

use crate::{board::Position, movegen::has_legal_move, types::*};

impl Position {
    /// True iff only the two kings are left.
    pub fn is_insufficient_material(&self) -> bool {
        self.pieces().all(|(_, pc)| pc.kind == PieceKind::King)
    }

    /// Classify the position for the side to move.
    pub fn game_state(&mut self) -> GameState {
        if self.is_insufficient_material() {
            return GameState::InsufficientMaterial;
        }
        let has_moves = has_legal_move(self);
        self.classify(has_moves)
    }

    /// Same as `game_state` when the caller already knows whether a legal
    /// move exists (e.g. it just generated the list).
    pub fn classify(&self, has_legal_moves: bool) -> GameState {
        if self.is_insufficient_material() {
            return GameState::InsufficientMaterial;
        }
        match (has_legal_moves, self.is_check()) {
            (false, true) => GameState::Checkmate,
            (false, false) => GameState::Stalemate,
            (true, true) => GameState::Check,
            (true, false) => GameState::Continue,
        }
    }
}

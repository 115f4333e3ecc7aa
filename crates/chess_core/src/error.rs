//! Errors returned to callers of the rules core.
//!
//! Only caller mistakes are reported here. A board that breaks the rules
//! engine's own invariants (missing king, empty from-square inside
//! make/unmake) is a bug and panics instead.

use thiserror::Error;

use crate::types::{Move, PieceKind};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// The move is not in the legal move list of the current position.
    #[error("illegal move {0}")]
    IllegalMove(Move),

    /// Pawns may only become a queen, rook, bishop or knight.
    #[error("cannot promote to {0:?}")]
    InvalidPromotion(PieceKind),

    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    #[error("invalid square '{0}'")]
    InvalidSquare(String),

    #[error("invalid move text '{0}'")]
    InvalidMoveText(String),
}

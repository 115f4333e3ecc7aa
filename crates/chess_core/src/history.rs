//! Reversible move application.
//!
//! `make_move` pushes a `MoveRecord` holding the pre-move piece values, and
//! `unmake_move` pops it and writes them back. Because flags live on the
//! pieces, restoring the snapshots restores castling and en-passant state too.

use tracing::{trace, warn};

use crate::{board::Position, error::ChessError, movegen::legal_moves, types::*};

/// What else changed on the board besides from/to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpecialMove {
    Plain,
    Castle {
        rook_from: Square,
        rook_to: Square,
        /// Rook as it was before castling.
        rook: Piece,
    },
    /// The captured pawn stood on `captured_sq`, not on the destination.
    EnPassant { captured_sq: Square },
    /// The pawn was replaced by a piece of `kind` on the destination.
    Promotion { kind: PieceKind },
}

/// Everything needed to take one move back exactly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveRecord {
    pub mv: Move,
    /// Moved piece with its pre-move flags.
    pub moved: Piece,
    /// Captured piece and the square it was taken from.
    pub captured: Option<(Square, Piece)>,
    pub special: SpecialMove,
}

impl Position {
    /// Apply a move without validating it. Callers must take `mv` from the
    /// legal move list; `promotion` is only looked at when a pawn reaches the
    /// last row.
    pub fn make_move(&mut self, mv: Move, promotion: PieceKind) {
        let Move { from, to } = mv;
        let moved = self
            .piece_at(from)
            .unwrap_or_else(|| panic!("make_move {mv}: no piece on from-square"));
        assert_eq!(moved.color, self.side_to_move, "make_move {mv}: wrong side");

        let mut captured = self.take_piece(to).map(|pc| (to, pc));
        assert!(
            !matches!(captured, Some((_, pc)) if pc.kind == PieceKind::King),
            "make_move {mv}: captures a king"
        );
        let mut special = SpecialMove::Plain;
        let mut piece = moved;
        piece.flags.has_moved = true;

        match moved.kind {
            PieceKind::King if from.col.abs_diff(to.col) == 2 => {
                let (rook_col, rook_to_col) = if to.col > from.col {
                    (7, to.col - 1)
                } else {
                    (0, to.col + 1)
                };
                let rook_from = Square::new(from.row, rook_col);
                let rook_to = Square::new(from.row, rook_to_col);
                let rook = self
                    .take_piece(rook_from)
                    .unwrap_or_else(|| panic!("make_move {mv}: castling without rook"));
                let mut moved_rook = rook;
                moved_rook.flags.has_moved = true;
                self.set_piece(rook_to, Some(moved_rook));
                special = SpecialMove::Castle {
                    rook_from,
                    rook_to,
                    rook,
                };
            }
            PieceKind::Pawn => {
                if from.col != to.col && captured.is_none() {
                    let captured_sq = Square::new(from.row, to.col);
                    let pawn = self
                        .take_piece(captured_sq)
                        .unwrap_or_else(|| panic!("make_move {mv}: en passant without pawn"));
                    captured = Some((captured_sq, pawn));
                    special = SpecialMove::EnPassant { captured_sq };
                }

                if from.row.abs_diff(to.row) == 2 {
                    piece.flags.just_double_stepped = true;
                    piece.flags.double_step_ply = self.ply + 1;
                } else {
                    piece.flags.just_double_stepped = false;
                    piece.flags.double_step_ply = 0;
                }

                if to.row == moved.color.promotion_row() {
                    assert!(
                        PieceKind::PROMOTIONS.contains(&promotion),
                        "make_move {mv}: cannot promote to {promotion:?}"
                    );
                    piece = Piece {
                        color: moved.color,
                        kind: promotion,
                        flags: PieceFlags {
                            has_moved: true,
                            ..PieceFlags::default()
                        },
                    };
                    special = SpecialMove::Promotion { kind: promotion };
                }
            }
            _ => {}
        }

        self.set_piece(from, None);
        self.set_piece(to, Some(piece));
        if moved.kind == PieceKind::King {
            self.kings[moved.color.idx()] = to;
        }

        self.side_to_move = self.side_to_move.other();
        self.ply += 1;
        self.history.push(MoveRecord {
            mv,
            moved,
            captured,
            special,
        });
        trace!(%mv, ?special, ply = self.ply, "make");
    }

    /// Take back the most recent move. Returns the move undone, or `None`
    /// (leaving the position untouched) when there is no history.
    pub fn unmake_move(&mut self) -> Option<Move> {
        let record = self.history.pop()?;
        let Move { from, to } = record.mv;

        self.side_to_move = self.side_to_move.other();
        self.ply -= 1;

        self.set_piece(to, None);
        self.set_piece(from, Some(record.moved));

        if let SpecialMove::Castle {
            rook_from,
            rook_to,
            rook,
        } = record.special
        {
            self.set_piece(rook_to, None);
            self.set_piece(rook_from, Some(rook));
        }

        // For en passant the square is the passed pawn's, not `to`.
        if let Some((sq, pc)) = record.captured {
            self.set_piece(sq, Some(pc));
        }

        if record.moved.kind == PieceKind::King {
            self.kings[record.moved.color.idx()] = from;
        }
        trace!(mv = %record.mv, ply = self.ply, "unmake");
        Some(record.mv)
    }

    /// Checked entry point for user moves: the move must be legal, and a
    /// promotion choice (default queen) must be a queen, rook, bishop or
    /// knight. Nothing is mutated on error.
    pub fn play(&mut self, mv: Move, promotion: Option<PieceKind>) -> Result<(), ChessError> {
        let promotion = promotion.unwrap_or(PieceKind::Queen);
        if !PieceKind::PROMOTIONS.contains(&promotion) {
            warn!(%mv, ?promotion, "rejected promotion choice");
            return Err(ChessError::InvalidPromotion(promotion));
        }
        if !legal_moves(self).contains(&mv) {
            warn!(%mv, "rejected illegal move");
            return Err(ChessError::IllegalMove(mv));
        }
        self.make_move(mv, promotion);
        Ok(())
    }

    /// Move played last, if any.
    pub fn last_move(&self) -> Option<Move> {
        self.history.last().map(|r| r.mv)
    }
}

#[cfg(test)]
#[path = "history_tests.rs"]
mod history_tests;

//! Attack detection and the legality filter.
//!
//! Attacks are found by looking outward from the target square: the first
//! piece along each ray, the knight jumps, the two pawn-capture squares and
//! the king neighbourhood. Legality is tested by playing the move on the grid
//! only, running that scan from the mover's king, and putting the grid back.

use crate::{board::Position, types::*};

impl Position {
    /// Whether any piece of color `by` attacks `target`.
    pub fn is_square_attacked(&self, target: Square, by: Color) -> bool {
        let enemy = |s: Square, kind: PieceKind| {
            matches!(self.piece_at(s), Some(pc) if pc.color == by && pc.kind == kind)
        };

        // Pawns of `by` capture toward their forward direction, so they sit
        // one row behind the target from their own point of view.
        for dc in [-1, 1] {
            if let Some(s) = target.offset(-by.forward(), dc)
                && enemy(s, PieceKind::Pawn)
            {
                return true;
            }
        }

        for (dr, dc) in KNIGHT_STEPS {
            if let Some(s) = target.offset(dr, dc)
                && enemy(s, PieceKind::Knight)
            {
                return true;
            }
        }

        for (dr, dc) in KING_STEPS {
            if let Some(s) = target.offset(dr, dc)
                && enemy(s, PieceKind::King)
            {
                return true;
            }
        }

        self.slider_on_ray(target, by, &ORTHOGONAL, PieceKind::Rook)
            || self.slider_on_ray(target, by, &DIAGONAL, PieceKind::Bishop)
    }

    /// First blocker along each direction is an enemy `kind` or queen.
    fn slider_on_ray(&self, target: Square, by: Color, dirs: &[(i8, i8)], kind: PieceKind) -> bool {
        for &(dr, dc) in dirs {
            let mut cur = target.offset(dr, dc);
            while let Some(s) = cur {
                if let Some(pc) = self.piece_at(s) {
                    if pc.color == by && (pc.kind == kind || pc.kind == PieceKind::Queen) {
                        return true;
                    }
                    break;
                }
                cur = s.offset(dr, dc);
            }
        }
        false
    }

    /// Legality filter: would the piece on `from` leave its own king safe
    /// after moving to `to`?
    ///
    /// The move is simulated on the grid only (captured piece lifted, and for
    /// a pawn's diagonal step onto an empty square the passed pawn lifted too)
    /// and reverted before returning. `from == to` is the null move and asks
    /// whether the piece's side is currently in check.
    pub fn is_move_safe(&mut self, from: Square, to: Square) -> bool {
        let moving = self
            .piece_at(from)
            .unwrap_or_else(|| panic!("legality test from empty square {from}"));
        let us = moving.color;

        if from == to {
            return !self.is_square_attacked(self.king_sq(us), us.other());
        }

        let captured = self.take_piece(to);
        self.set_piece(to, Some(moving));
        self.set_piece(from, None);

        let ep_sq = (moving.kind == PieceKind::Pawn && from.col != to.col && captured.is_none())
            .then(|| Square::new(from.row, to.col));
        let ep_pawn = ep_sq.and_then(|s| self.take_piece(s));

        let king = if moving.kind == PieceKind::King {
            to
        } else {
            self.king_sq(us)
        };
        let safe = !self.is_square_attacked(king, us.other());

        self.set_piece(from, Some(moving));
        self.set_piece(to, captured);
        if let Some(s) = ep_sq {
            self.set_piece(s, ep_pawn);
        }
        safe
    }

    /// Side to move is in check (null move of its own king is unsafe).
    pub fn is_check(&self) -> bool {
        let us = self.side_to_move;
        self.is_square_attacked(self.king_sq(us), us.other())
    }

    /// Whether color `c`'s king is attacked.
    pub fn in_check(&self, c: Color) -> bool {
        self.is_square_attacked(self.king_sq(c), c.other())
    }
}

#[cfg(test)]
#[path = "attacks_tests.rs"]
mod attacks_tests;

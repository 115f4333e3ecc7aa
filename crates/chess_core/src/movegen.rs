use crate::{board::Position, types::*};

/// Generate all legal moves for the side to move, returning a freshly
/// allocated vector.
pub fn legal_moves(pos: &mut Position) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    legal_moves_into(pos, &mut out);
    out
}

/// Generate all legal moves into the provided buffer, reusing it across calls.
///
/// Order is deterministic: squares row-major from row 0, then each piece's
/// generation order. The search breaks ties by this order.
pub fn legal_moves_into(pos: &mut Position, out: &mut Vec<Move>) {
    out.clear();
    let us = pos.side_to_move();
    for from in Square::all() {
        if matches!(pos.piece_at(from), Some(pc) if pc.color == us) {
            let start = out.len();
            pseudo_moves_from(pos, from, out);
            filter_legal(pos, out, start);
        }
    }
}

/// Legal moves of the piece on `from` only ("selected piece" highlighting).
/// Empty when the square is empty or holds a piece of the side not to move.
pub fn legal_moves_from(pos: &mut Position, from: Square) -> Vec<Move> {
    let mut out = Vec::new();
    if matches!(pos.piece_at(from), Some(pc) if pc.color == pos.side_to_move()) {
        pseudo_moves_from(pos, from, &mut out);
        filter_legal(pos, &mut out, 0);
    }
    out
}

/// Whether any legal move exists, stopping at the first one found.
pub fn has_legal_move(pos: &mut Position) -> bool {
    let us = pos.side_to_move();
    let mut buf = Vec::with_capacity(32);
    for from in Square::all() {
        if matches!(pos.piece_at(from), Some(pc) if pc.color == us) {
            buf.clear();
            pseudo_moves_from(pos, from, &mut buf);
            if buf.iter().any(|mv| pos.is_move_safe(mv.from, mv.to)) {
                return true;
            }
        }
    }
    false
}

/// Capture test used by quiescence: the destination is occupied, or a pawn
/// steps diagonally onto an empty square (en passant).
pub fn is_capture(pos: &Position, mv: Move) -> bool {
    if pos.piece_at(mv.to).is_some() {
        return true;
    }
    matches!(pos.piece_at(mv.from), Some(pc) if pc.kind == PieceKind::Pawn && mv.from.col != mv.to.col)
}

// Drop the moves from `start` onward that leave the mover's king attacked.
fn filter_legal(pos: &mut Position, out: &mut Vec<Move>, start: usize) {
    let mut keep = start;
    for i in start..out.len() {
        let mv = out[i];
        if pos.is_move_safe(mv.from, mv.to) {
            out[keep] = mv;
            keep += 1;
        }
    }
    out.truncate(keep);
}

/// Pseudo-legal moves of the piece on `from`, ignoring whether they expose
/// its own king. Castling is the exception: its attacked-square conditions are
/// part of the king's pattern and are checked here.
pub fn pseudo_moves_from(pos: &Position, from: Square, out: &mut Vec<Move>) {
    let Some(pc) = pos.piece_at(from) else {
        return;
    };
    match pc.kind {
        PieceKind::Pawn => gen_pawn(pos, from, pc, out),
        PieceKind::Knight => gen_steps(pos, from, pc.color, &KNIGHT_STEPS, out),
        PieceKind::Bishop => gen_slider(pos, from, pc.color, &DIAGONAL, out),
        PieceKind::Rook => gen_slider(pos, from, pc.color, &ORTHOGONAL, out),
        PieceKind::Queen => gen_slider(pos, from, pc.color, &QUEEN_DIRS, out),
        PieceKind::King => {
            gen_steps(pos, from, pc.color, &KING_STEPS, out);
            gen_castle(pos, from, pc, out);
        }
    }
}

fn gen_pawn(pos: &Position, from: Square, pc: Piece, out: &mut Vec<Move>) {
    let dir = pc.color.forward();

    // forward 1, then forward 2 from the un-moved state
    if let Some(to) = from.offset(dir, 0)
        && pos.piece_at(to).is_none()
    {
        out.push(Move::new(from, to));
        if !pc.flags.has_moved
            && let Some(to2) = to.offset(dir, 0)
            && pos.piece_at(to2).is_none()
        {
            out.push(Move::new(from, to2));
        }
    }

    // captures
    for dc in [-1, 1] {
        if let Some(to) = from.offset(dir, dc)
            && let Some(target) = pos.piece_at(to)
            && target.color != pc.color
        {
            out.push(Move::new(from, to));
        }
    }

    // en passant: the neighbour double-stepped on the ply just played
    for dc in [-1, 1] {
        if let Some(side) = from.offset(0, dc)
            && let Some(passed) = pos.piece_at(side)
            && passed.color != pc.color
            && passed.en_passant_target(pos.ply())
            && let Some(to) = from.offset(dir, dc)
            && pos.piece_at(to).is_none()
        {
            out.push(Move::new(from, to));
        }
    }
}

fn gen_steps(pos: &Position, from: Square, c: Color, steps: &[(i8, i8)], out: &mut Vec<Move>) {
    for &(dr, dc) in steps {
        if let Some(to) = from.offset(dr, dc) {
            match pos.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(pc) if pc.color != c => out.push(Move::new(from, to)),
                _ => {}
            }
        }
    }
}

fn gen_slider(pos: &Position, from: Square, c: Color, dirs: &[(i8, i8)], out: &mut Vec<Move>) {
    for &(dr, dc) in dirs {
        let mut cur = from.offset(dr, dc);
        while let Some(to) = cur {
            match pos.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(pc) if pc.color != c => {
                    out.push(Move::new(from, to));
                    break;
                }
                _ => break,
            }
            cur = to.offset(dr, dc);
        }
    }
}

fn gen_castle(pos: &Position, from: Square, king: Piece, out: &mut Vec<Move>) {
    if king.flags.has_moved {
        return;
    }
    let c = king.color;
    let enemy = c.other();

    // (rook column, step toward it)
    for (rook_col, step) in [(7u8, 1i8), (0u8, -1i8)] {
        let rook_sq = Square::new(from.row, rook_col);
        match pos.piece_at(rook_sq) {
            Some(r) if r.kind == PieceKind::Rook && r.color == c && !r.flags.has_moved => {}
            _ => continue,
        }

        let lo = from.col.min(rook_col) + 1;
        let hi = from.col.max(rook_col);
        if (lo..hi).any(|col| pos.piece_at(Square::new(from.row, col)).is_some()) {
            continue;
        }

        let (Some(pass), Some(dest)) = (from.offset(0, step), from.offset(0, 2 * step)) else {
            continue;
        };
        // Can't castle out of, through, or into check.
        if [from, pass, dest]
            .iter()
            .any(|&s| pos.is_square_attacked(s, enemy))
        {
            continue;
        }
        out.push(Move::new(from, dest));
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;

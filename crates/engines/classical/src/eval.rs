//! Material plus piece-square evaluation.

use chess_core::{Color, GameState, PieceKind, Position};

/// Score of a checkmate for the side that is mated.
pub const MATE_SCORE: i32 = 99_999;

/// Material values in centipawns, indexed by PieceKind::idx().
/// Order: King, Queen, Rook, Bishop, Knight, Pawn
const PIECE_VALUES: [i32; 6] = [0, 900, 500, 330, 320, 100];

type Table = [[i32; 8]; 8];

// Tables are laid out from White's side: row 0 is the eighth rank.
// Black reads them upside down.

#[rustfmt::skip]
const KING_TABLE: Table = [
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-20, -30, -30, -40, -40, -30, -30, -20],
    [-10, -20, -20, -20, -20, -20, -20, -10],
    [ 20,  20,   0,   0,   0,   0,  20,  20],
    [ 20,  30,  10,   0,   0,  10,  30,  20],
];

#[rustfmt::skip]
const QUEEN_TABLE: Table = [
    [-20, -10, -10, -5, -5, -10, -10, -20],
    [-10,   0,   0,  0,  0,   0,   0, -10],
    [-10,   0,   5,  5,  5,   5,   0, -10],
    [ -5,   0,   5,  5,  5,   5,   0,  -5],
    [  0,   0,   5,  5,  5,   5,   0,  -5],
    [-10,   5,   5,  5,  5,   5,   0, -10],
    [-10,   0,   0,  0,  0,   0,   0, -10],
    [-20, -10, -10, -5, -5, -10, -10, -20],
];

#[rustfmt::skip]
const ROOK_TABLE: Table = [
    [ 0,  0,  0,  0,  0,  0,  0,  0],
    [ 5, 10, 10, 10, 10, 10, 10,  5],
    [-5,  0,  0,  0,  0,  0,  0, -5],
    [-5,  0,  0,  0,  0,  0,  0, -5],
    [-5,  0,  0,  0,  0,  0,  0, -5],
    [-5,  0,  0,  0,  0,  0,  0, -5],
    [-5,  0,  0,  0,  0,  0,  0, -5],
    [ 0,  0,  0,  5,  5,  0,  0,  0],
];

#[rustfmt::skip]
const BISHOP_TABLE: Table = [
    [-20, -10, -10, -10, -10, -10, -10, -20],
    [-10,   0,   0,   0,   0,   0,   0, -10],
    [-10,   0,   5,  10,  10,   5,   0, -10],
    [-10,   5,   5,  10,  10,   5,   5, -10],
    [-10,   0,  10,  10,  10,  10,   0, -10],
    [-10,  10,  10,  10,  10,  10,  10, -10],
    [-10,   5,   0,   0,   0,   0,   5, -10],
    [-20, -10, -10, -10, -10, -10, -10, -20],
];

#[rustfmt::skip]
const KNIGHT_TABLE: Table = [
    [-50, -40, -30, -30, -30, -30, -40, -50],
    [-40, -20,   0,   0,   0,   0, -20, -40],
    [-30,   0,  10,  15,  15,  10,   0, -30],
    [-30,   5,  15,  20,  20,  15,   5, -30],
    [-30,   0,  15,  20,  20,  15,   0, -30],
    [-30,   5,  10,  15,  15,  10,   5, -30],
    [-40, -20,   0,   5,   5,   0, -20, -40],
    [-50, -40, -30, -30, -30, -30, -40, -50],
];

#[rustfmt::skip]
const PAWN_TABLE: Table = [
    [ 0,  0,   0,   0,   0,   0,  0,  0],
    [50, 50,  50,  50,  50,  50, 50, 50],
    [10, 10,  20,  30,  30,  20, 10, 10],
    [ 5,  5,  10,  25,  25,  10,  5,  5],
    [ 0,  0,   0,  20,  20,   0,  0,  0],
    [ 5, -5, -10,   0,   0, -10, -5,  5],
    [ 5, 10,  10, -20, -20,  10, 10,  5],
    [ 0,  0,   0,   0,   0,   0,  0,  0],
];

/// Indexed by PieceKind::idx().
const TABLES: [&Table; 6] = [
    &KING_TABLE,
    &QUEEN_TABLE,
    &ROOK_TABLE,
    &BISHOP_TABLE,
    &KNIGHT_TABLE,
    &PAWN_TABLE,
];

/// Evaluates the position from the side-to-move's perspective.
///
/// Classifies the position first, so mated and drawn positions get their
/// fixed scores. Returns centipawns:
/// - Positive = good for side to move
/// - Negative = bad for side to move
/// - `-MATE_SCORE` = side to move is checkmated
pub fn evaluate(pos: &mut Position) -> i32 {
    let state = pos.game_state();
    evaluate_state(pos, state)
}

/// `evaluate` for a caller that has already classified the position.
pub fn evaluate_state(pos: &Position, state: GameState) -> i32 {
    match state {
        GameState::Checkmate => -MATE_SCORE,
        GameState::Stalemate | GameState::InsufficientMaterial => 0,
        GameState::Check | GameState::Continue => static_score(pos),
    }
}

/// Material and piece-square sum, ignoring whether the game is over.
pub fn static_score(pos: &Position) -> i32 {
    let mut score = 0i32;

    for (sq, pc) in pos.pieces() {
        let table = TABLES[pc.kind.idx()];
        let (r, c) = (sq.row as usize, sq.col as usize);
        let value = PIECE_VALUES[pc.kind.idx()];
        match pc.color {
            Color::White => score += value + table[r][c],
            Color::Black => score -= value + table[7 - r][c],
        }
    }

    // Convert to side-to-move perspective
    if pos.side_to_move() == Color::White {
        score
    } else {
        -score
    }
}

/// Centipawn value of a piece kind.
pub fn piece_value(kind: PieceKind) -> i32 {
    PIECE_VALUES[kind.idx()]
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;

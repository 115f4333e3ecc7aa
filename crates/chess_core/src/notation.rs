//! Coordinate move notation (`e2e4`, `e7e8n`).

use crate::{board::Position, error::ChessError, movegen::legal_moves, perft::is_promotion, types::*};

pub fn move_to_coord(mv: Move, promo: Option<PieceKind>) -> String {
    let mut s = mv.to_string();
    if let Some(p) = promo {
        s.push(p.letter().to_ascii_lowercase());
    }
    s
}

/// Parse `txt` and match it against the legal moves of `pos`.
///
/// Returns the move and the promotion letter if one was given.
pub fn parse_coord_move(
    pos: &mut Position,
    txt: &str,
) -> Result<(Move, Option<PieceKind>), ChessError> {
    let bad = || ChessError::InvalidMoveText(txt.to_string());
    if !(4..=5).contains(&txt.len()) || !txt.is_ascii() {
        return Err(bad());
    }
    let from = Square::parse(&txt[0..2]).map_err(|_| bad())?;
    let to = Square::parse(&txt[2..4]).map_err(|_| bad())?;
    let promo = match txt[4..].chars().next() {
        None => None,
        Some(c) => match PieceKind::from_letter(c) {
            Some(k) if PieceKind::PROMOTIONS.contains(&k) => Some(k),
            _ => return Err(bad()),
        },
    };

    let mv = Move::new(from, to);
    if !legal_moves(pos).contains(&mv) {
        return Err(ChessError::IllegalMove(mv));
    }
    // A promotion letter only makes sense on a pawn reaching the last row
    if promo.is_some() && !is_promotion(pos, mv) {
        return Err(bad());
    }
    Ok((mv, promo))
}

/// Play a whitespace-separated list of coordinate moves. Stops at the first
/// bad move; moves before it stay applied.
pub fn play_coord_moves(pos: &mut Position, moves: &str) -> Result<(), ChessError> {
    for txt in moves.split_whitespace() {
        let (mv, promo) = parse_coord_move(pos, txt)?;
        pos.play(mv, promo)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;

//! Negamax search with alpha-beta pruning and a capture-only quiescence tail.
//!
//! Every node makes and unmakes moves on the caller's position; nothing is
//! cloned. The position is handed back unchanged.

use chess_core::{Move, PieceKind, Position, is_capture, legal_moves};
use tracing::trace;

use crate::eval::{evaluate, evaluate_state, piece_value};

/// Window bound, strictly larger than any evaluation.
pub const INFINITY: i32 = 100_000;

/// Searches the position and returns the best move with its score.
///
/// # Arguments
/// * `pos` - The position to search, restored before returning
/// * `depth` - Search depth in plies; 0 is treated as 1 at the root
/// * `quiescence` - Extend leaves with captures instead of evaluating them
/// * `nodes` - Counter for nodes searched (for statistics)
///
/// # Returns
/// `None` when the side to move has no legal move. Ties go to the move
/// generated first.
pub fn pick_best_move(
    pos: &mut Position,
    depth: u8,
    quiescence: bool,
    nodes: &mut u64,
) -> Option<(Move, i32)> {
    let mut alpha = -INFINITY;
    let beta = INFINITY;
    let mut best: Option<(Move, i32)> = None;

    for mv in legal_moves(pos) {
        pos.make_move(mv, PieceKind::Queen);
        *nodes += 1;
        let score = -alphabeta(pos, -beta, -alpha, depth.saturating_sub(1), quiescence, nodes);
        pos.unmake_move();

        trace!(%mv, score, "root move");

        if best.is_none_or(|(_, s)| score > s) {
            best = Some((mv, score));
        }
        if score > alpha {
            alpha = score;
        }
    }

    best
}

/// Best move at `depth` plies with quiescence enabled.
pub fn best_move(pos: &mut Position, depth: u8) -> Option<Move> {
    let mut nodes = 0;
    pick_best_move(pos, depth, true, &mut nodes).map(|(mv, _)| mv)
}

/// Recursive negamax search with alpha-beta pruning.
///
/// Returns as soon as a child reaches `beta`; otherwise the best child value.
fn alphabeta(
    pos: &mut Position,
    mut alpha: i32,
    beta: i32,
    depth: u8,
    quiescence: bool,
    nodes: &mut u64,
) -> i32 {
    if depth == 0 {
        return if quiescence {
            quiesce(pos, alpha, beta, nodes)
        } else {
            evaluate(pos)
        };
    }

    let moves = legal_moves(pos);
    if moves.is_empty() {
        return evaluate_state(pos, pos.classify(false));
    }

    let mut best = -INFINITY;

    for mv in moves {
        pos.make_move(mv, PieceKind::Queen);
        *nodes += 1;
        let score = -alphabeta(pos, -beta, -alpha, depth - 1, quiescence, nodes);
        pos.unmake_move();

        if score >= beta {
            return score; // Beta cutoff
        }
        if score > best {
            best = score;
        }
        if score > alpha {
            alpha = score;
        }
    }

    best
}

/// Stand-pat on the static score, then look at captures only.
fn quiesce(pos: &mut Position, mut alpha: i32, beta: i32, nodes: &mut u64) -> i32 {
    let moves = legal_moves(pos);
    let stand_pat = evaluate_state(pos, pos.classify(!moves.is_empty()));

    if stand_pat >= beta {
        return beta;
    }
    if stand_pat > alpha {
        alpha = stand_pat;
    }

    let mut captures: Vec<Move> = moves.into_iter().filter(|&mv| is_capture(pos, mv)).collect();
    // Most valuable victim first, cheapest attacker breaking ties
    captures.sort_by_key(|&mv| std::cmp::Reverse(capture_order(pos, mv)));

    for mv in captures {
        pos.make_move(mv, PieceKind::Queen);
        *nodes += 1;
        let score = -quiesce(pos, -beta, -alpha, nodes);
        pos.unmake_move();

        if score >= beta {
            return beta;
        }
        if score > alpha {
            alpha = score;
        }
    }

    alpha
}

/// MVV-LVA key. En passant takes a pawn that is not on the target square.
fn capture_order(pos: &Position, mv: Move) -> i32 {
    let victim = pos.piece_at(mv.to).map_or(PieceKind::Pawn, |pc| pc.kind);
    let attacker = pos.piece_at(mv.from).map_or(PieceKind::Pawn, |pc| pc.kind);
    piece_value(victim) * 10 - piece_value(attacker)
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;

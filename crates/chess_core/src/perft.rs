use crate::{board::Position, movegen::legal_moves_into, types::*};

/// Pure perft node count.
/// Counts all legal positions from the current one down to `depth`. A pawn
/// reaching the last row counts once per promotion choice.
pub fn perft(pos: &mut Position, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    fn inner(pos: &mut Position, depth: u8, layers: &mut [Vec<Move>]) -> u64 {
        if depth == 0 {
            return 1;
        }

        let (buf, rest) = layers
            .split_first_mut()
            .expect("perft requires one buffer per remaining ply");

        legal_moves_into(pos, buf);

        let mut nodes = 0u64;
        for mv in buf.iter().copied() {
            let promo_choices: &[PieceKind] = if is_promotion(pos, mv) {
                &PieceKind::PROMOTIONS
            } else {
                &[PieceKind::Queen]
            };
            for &promo in promo_choices {
                if depth == 1 {
                    nodes += 1;
                    continue;
                }
                pos.make_move(mv, promo);
                nodes += inner(pos, depth - 1, rest);
                pos.unmake_move();
            }
        }
        nodes
    }

    let mut layers = vec![Vec::with_capacity(64); depth as usize];
    inner(pos, depth, &mut layers[..])
}

/// Per-root-move node counts, for comparing against reference engines.
pub fn divide(pos: &mut Position, depth: u8) -> Vec<(Move, u64)> {
    let mut moves = Vec::new();
    legal_moves_into(pos, &mut moves);
    moves
        .into_iter()
        .map(|mv| {
            let promo_choices: &[PieceKind] = if is_promotion(pos, mv) {
                &PieceKind::PROMOTIONS
            } else {
                &[PieceKind::Queen]
            };
            let mut nodes = 0;
            for &promo in promo_choices {
                pos.make_move(mv, promo);
                nodes += perft(pos, depth.saturating_sub(1));
                pos.unmake_move();
            }
            (mv, nodes)
        })
        .collect()
}

/// Pawn move onto its promotion row.
pub(crate) fn is_promotion(pos: &Position, mv: Move) -> bool {
    matches!(pos.piece_at(mv.from), Some(pc) if pc.kind == PieceKind::Pawn && mv.to.row == pc.color.promotion_row())
}

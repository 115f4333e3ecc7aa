use super::*;
use crate::eval::MATE_SCORE;
use chess_core::{Square, play_coord_moves};
use tracing_subscriber::EnvFilter;

/// Root move scores are logged at trace level. Set RUST_LOG to see them.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn mv(text: &str) -> Move {
    Move::new(
        Square::parse(&text[..2]).unwrap(),
        Square::parse(&text[2..4]).unwrap(),
    )
}

#[test]
fn test_pick_best_move_start_position() {
    let mut pos = Position::startpos();
    let mut nodes = 0;
    let result = pick_best_move(&mut pos, 3, true, &mut nodes);
    assert!(result.is_some());
    assert!(nodes > 0);
    // Search hands the position back untouched
    assert_eq!(pos, Position::startpos());
}

#[test]
fn test_pick_best_move_finds_mate_in_one() {
    init_tracing();
    // Position where Qe8# is mate in one
    let mut pos = Position::from_fen("6k1/5ppp/8/8/8/8/5PPP/4Q1K1 w - - 0 1").unwrap();
    let mut nodes = 0;
    let (best, score) = pick_best_move(&mut pos, 2, true, &mut nodes).unwrap();
    assert_eq!(best, mv("e1e8"));
    assert_eq!(score, MATE_SCORE);
}

#[test]
fn test_takes_hanging_queen() {
    let mut pos = Position::from_fen("4k3/8/8/3q4/8/8/3R4/4K3 w - - 0 1").unwrap();
    assert_eq!(best_move(&mut pos, 2), Some(mv("d2d5")));
}

#[test]
fn test_quiescence_sees_recapture() {
    // Rxd5 loses the rook to exd5 only if the capture chain is followed
    let fen = "4k3/8/4p3/3n4/8/8/3R4/4K3 w - - 0 1";
    let mut pos = Position::from_fen(fen).unwrap();
    let mut nodes = 0;
    let (_, with_q) = pick_best_move(&mut pos, 1, true, &mut nodes).unwrap();
    let (greedy, without_q) = pick_best_move(&mut pos, 1, false, &mut nodes).unwrap();
    assert_eq!(greedy, mv("d2d5"));
    assert!(with_q < without_q);
}

#[test]
fn test_no_move_when_game_is_over() {
    let mut pos = Position::startpos();
    play_coord_moves(&mut pos, "f2f3 e7e5 g2g4 d8h4").unwrap();
    assert_eq!(best_move(&mut pos, 3), None);

    let mut pos = Position::from_fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1").unwrap();
    let mut nodes = 0;
    assert_eq!(pick_best_move(&mut pos, 2, true, &mut nodes), None);
    assert_eq!(nodes, 0);
}

#[test]
fn test_search_is_deterministic() {
    init_tracing();
    let fen = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";
    let mut pos = Position::from_fen(fen).unwrap();
    let before = pos.clone();
    let mut first_nodes = 0;
    let mut second_nodes = 0;
    let first = pick_best_move(&mut pos, 3, true, &mut first_nodes);
    let second = pick_best_move(&mut pos, 3, true, &mut second_nodes);
    assert_eq!(first, second);
    assert_eq!(first_nodes, second_nodes);
    assert_eq!(pos, before);
}

#[test]
fn test_depth_zero_searches_one_ply() {
    let mut pos = Position::startpos();
    let mut nodes = 0;
    pick_best_move(&mut pos, 0, false, &mut nodes);
    assert_eq!(nodes, 20);
}

#[test]
fn test_prefers_mate_over_stalemate() {
    // Qb6 stalemates, Qb7 and Qb8 mate
    let mut pos = Position::from_fen("k7/2K5/8/1Q6/8/8/8/8 w - - 0 1").unwrap();
    let mut nodes = 0;
    let (best, score) = pick_best_move(&mut pos, 2, true, &mut nodes).unwrap();
    assert_ne!(best, mv("b5b6"));
    assert_eq!(score, MATE_SCORE);
}

#[test]
fn test_capture_order_prefers_big_victims() {
    // Rook on d2 can take the queen on d5 or the pawn on a2
    let pos = Position::from_fen("4k3/8/8/3q4/8/8/p2R4/4K3 w - - 0 1").unwrap();
    assert!(capture_order(&pos, mv("d2d5")) > capture_order(&pos, mv("d2a2")));

    // Same victim: the pawn attacker goes first
    let pos = Position::from_fen("4k3/8/8/3r4/2P5/8/8/3QK3 w - - 0 1").unwrap();
    assert!(capture_order(&pos, mv("c4d5")) > capture_order(&pos, mv("d1d5")));
}

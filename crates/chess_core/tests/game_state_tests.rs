//! Tests for terminal-state classification
//!
//! This module covers every outcome the classifier reports:
//! - Checkmate (including the short forced mates)
//! - Stalemate
//! - Check
//! - Insufficient material

use chess_core::{GameState, Position, legal_moves, play_coord_moves};

mod common;

fn after_moves(moves: &str) -> Position {
    let mut pos = Position::startpos();
    play_coord_moves(&mut pos, moves).expect("test line must be legal");
    pos
}

// =============================================================================
// Checkmate Tests
// =============================================================================

#[test]
fn test_fools_mate() {
    common::init_tracing();
    let mut pos = after_moves("f2f3 e7e5 g2g4 d8h4");
    assert!(legal_moves(&mut pos).is_empty(), "mated side has no replies");
    assert!(pos.is_check());
    assert_eq!(pos.game_state(), GameState::Checkmate);
    assert!(pos.game_state().is_terminal());
}

#[test]
fn test_scholars_mate() {
    let mut pos = after_moves("e2e4 e7e5 f1c4 b8c6 d1h5 g8f6 h5f7");
    assert!(legal_moves(&mut pos).is_empty());
    assert_eq!(pos.game_state(), GameState::Checkmate);
}

#[test]
fn test_checkmate_from_fen() {
    let mut pos =
        Position::from_fen("r1bqkbnr/pppp1Qpp/2n5/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 1")
            .unwrap();
    assert_eq!(pos.game_state(), GameState::Checkmate);
}

#[test]
fn test_back_rank_mate() {
    let mut pos = Position::from_fen("4R1k1/5ppp/8/8/8/8/5PPP/6K1 b - - 0 1").unwrap();
    assert_eq!(pos.game_state(), GameState::Checkmate);
}

// =============================================================================
// Stalemate Tests
// =============================================================================

#[test]
fn test_stalemate_king_in_corner() {
    // Black king in corner, white queen stalemates
    // Position: Black king on a8, White queen on b6, White king on c7
    let mut pos = Position::from_fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1").unwrap();

    assert!(
        legal_moves(&mut pos).is_empty(),
        "Stalemate position should have no legal moves"
    );
    assert!(!pos.is_check(), "Stalemate means king is not in check");
    assert_eq!(pos.game_state(), GameState::Stalemate);
}

#[test]
fn test_stalemate_king_and_pawn_endgame() {
    // Classic king and pawn vs king stalemate
    // White king on g6, white pawn on g7, black king on g8
    let mut pos = Position::from_fen("6k1/6P1/6K1/8/8/8/8/8 b - - 0 1").unwrap();
    assert_eq!(pos.game_state(), GameState::Stalemate);
}

#[test]
fn test_stalemate_queen_covers_escape_squares() {
    let mut pos = Position::from_fen("k7/8/1Q6/8/8/8/8/1K6 b - - 0 1").unwrap();
    assert_eq!(pos.game_state(), GameState::Stalemate);
}

// =============================================================================
// Check and ongoing games
// =============================================================================

#[test]
fn test_check_with_escapes() {
    let mut pos = after_moves("e2e4 f7f6 d1h5");
    assert_eq!(pos.game_state(), GameState::Check);
    // g7g6 interposes on the diagonal
    assert!(
        legal_moves(&mut pos)
            .iter()
            .any(|mv| mv.to_string() == "g7g6")
    );
}

#[test]
fn test_start_position_continues() {
    let mut pos = Position::startpos();
    assert_eq!(pos.game_state(), GameState::Continue);
    assert!(!pos.game_state().is_terminal());
}

// =============================================================================
// Insufficient Material Tests
// =============================================================================

#[test]
fn test_bare_kings_are_insufficient() {
    let mut pos = Position::from_fen("8/8/8/4k3/8/4K3/8/8 w - - 0 1").unwrap();
    assert!(pos.is_insufficient_material());
    assert_eq!(pos.game_state(), GameState::InsufficientMaterial);
}

#[test]
fn test_any_extra_piece_is_sufficient() {
    // Only bare kings count; a lone minor piece keeps the game going
    let mut pos = Position::from_fen("8/8/8/4k3/8/4K3/8/1N6 w - - 0 1").unwrap();
    assert!(!pos.is_insufficient_material());
    assert_eq!(pos.game_state(), GameState::Continue);
}

#[test]
fn test_capturing_last_piece_reaches_insufficient_material() {
    let mut pos = Position::from_fen("8/8/8/3q4/8/4K3/8/7k b - - 0 1").unwrap();
    play_coord_moves(&mut pos, "d5d4 e3d4").unwrap();
    assert_eq!(pos.game_state(), GameState::InsufficientMaterial);
    pos.unmake_move();
    // queen back on d4, giving check again
    assert_eq!(pos.game_state(), GameState::Check);
}

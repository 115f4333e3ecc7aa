use super::*;

fn sq(text: &str) -> Square {
    Square::parse(text).unwrap()
}

#[test]
fn test_startpos_layout() {
    let pos = Position::startpos();
    assert_eq!(pos.pieces().count(), 32);
    assert_eq!(pos.side_to_move(), Color::White);
    assert_eq!(pos.ply(), 0);
    assert!(pos.history().is_empty());

    assert_eq!(pos.king_sq(Color::White), sq("e1"));
    assert_eq!(pos.king_sq(Color::Black), sq("e8"));
    assert_eq!(
        pos.piece_at(sq("d1")),
        Some(Piece::new(Color::White, PieceKind::Queen))
    );
    assert_eq!(
        pos.piece_at(sq("g8")),
        Some(Piece::new(Color::Black, PieceKind::Knight))
    );
    for col in 0..8 {
        let white = pos.piece_at(Square::new(6, col)).unwrap();
        let black = pos.piece_at(Square::new(1, col)).unwrap();
        assert_eq!((white.kind, white.color), (PieceKind::Pawn, Color::White));
        assert_eq!((black.kind, black.color), (PieceKind::Pawn, Color::Black));
    }
}

#[test]
fn test_from_fen_matches_startpos() {
    let pos = Position::from_fen(STARTPOS_FEN).unwrap();
    assert_eq!(pos, Position::startpos());
}

#[test]
fn test_to_fen_startpos() {
    assert_eq!(Position::startpos().to_fen(), STARTPOS_FEN);
}

#[test]
fn test_fen_en_passant_field() {
    let fen = "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq e6 0 2";
    let pos = Position::from_fen(fen).unwrap();
    assert_eq!(pos.ply(), 2);
    assert_eq!(pos.en_passant_square(), Some(sq("e6")));
    assert_eq!(pos.to_fen(), fen);
}

#[test]
fn test_fen_castling_flags() {
    let pos = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w Kq - 0 1").unwrap();
    assert!(pos.castle_pieces_unmoved(Color::White, 7));
    assert!(!pos.castle_pieces_unmoved(Color::White, 0));
    assert!(!pos.castle_pieces_unmoved(Color::Black, 7));
    assert!(pos.castle_pieces_unmoved(Color::Black, 0));
}

#[test]
fn test_from_fen_rejects_bad_input() {
    assert!(matches!(
        Position::from_fen("8/8/8/8/8/8/8/4K3 w - - 0 1"),
        Err(ChessError::InvalidFen(_))
    ));
    assert!(matches!(
        Position::from_fen("4k3/8/8/8/8/8/8/4X3 w - - 0 1"),
        Err(ChessError::InvalidFen(_))
    ));
    assert!(matches!(
        Position::from_fen("4k3/8/8/8/8/8/8/4K3 w"),
        Err(ChessError::InvalidFen(_))
    ));
    // castling right without a rook in the corner
    assert!(matches!(
        Position::from_fen("4k3/8/8/8/8/8/8/4K3 w K - 0 1"),
        Err(ChessError::InvalidFen(_))
    ));
}

#[test]
fn test_from_fen_rejects_king_left_in_check() {
    // White to move could take the black king
    assert!(matches!(
        Position::from_fen("4k3/8/8/8/8/8/8/K3R3 w - - 0 1"),
        Err(ChessError::InvalidFen(_))
    ));
    // Same board with Black to move is an ordinary check
    let mut pos = Position::from_fen("4k3/8/8/8/8/8/8/K3R3 b - - 0 1").unwrap();
    assert!(pos.is_check());
    assert!(!crate::movegen::legal_moves(&mut pos).is_empty());
}

#[test]
fn test_from_fen_rejects_huge_fullmove_number() {
    assert!(matches!(
        Position::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 4000000000"),
        Err(ChessError::InvalidFen(_))
    ));
    let pos = Position::from_fen("4k3/8/8/8/8/8/8/4K3 b - - 0 100").unwrap();
    assert_eq!(pos.ply(), 199);
}

#[test]
fn test_display_board() {
    let text = Position::startpos().to_string();
    assert!(text.starts_with("8  bR bN bB bQ bK bB bN bR"));
    assert!(text.contains("1  wR wN wB wQ wK wB wN wR"));
    assert!(text.ends_with("White to move, ply 0"));
}

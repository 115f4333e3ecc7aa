use std::fmt;

use crate::error::ChessError;
use crate::history::MoveRecord;
use crate::types::*;

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

pub const STARTPOS_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Complete game state. Created once per game and mutated in place through
/// `make_move` / `unmake_move`; the history stack holds everything needed to
/// walk back to the start.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub(crate) board: [[Option<Piece>; 8]; 8],
    pub(crate) side_to_move: Color,
    pub(crate) kings: [Square; 2],
    pub(crate) ply: u32,
    pub(crate) history: Vec<MoveRecord>,
}

impl Position {
    pub fn startpos() -> Self {
        let mut p = Position {
            board: [[None; 8]; 8],
            side_to_move: Color::White,
            kings: [Square::new(7, 4), Square::new(0, 4)],
            ply: 0,
            history: Vec::new(),
        };

        for color in [Color::White, Color::Black] {
            for (col, &kind) in BACK_RANK.iter().enumerate() {
                p.board[color.back_row() as usize][col] = Some(Piece::new(color, kind));
            }
            for col in 0..8 {
                p.board[color.pawn_row() as usize][col] = Some(Piece::new(color, PieceKind::Pawn));
            }
        }
        p
    }

    /// Forsyth-Edwards Notation parser used by tests and position setup.
    ///
    /// Castling letters mark the matching king and rook as unmoved, the
    /// en-passant field marks the pawn that just double-stepped, and pawns
    /// away from their start row count as moved. The halfmove clock is read
    /// but not kept.
    pub fn from_fen(fen: &str) -> Result<Self, ChessError> {
        let bad = |why: &str| ChessError::InvalidFen(format!("{why} in '{fen}'"));

        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(bad("expected at least 4 fields"));
        }
        let board_part = parts[0];
        let stm_part = parts[1];
        let castle_part = parts[2];
        let ep_part = parts[3];
        let halfmove_part = parts.get(4).copied().unwrap_or("0");
        let fullmove_part = parts.get(5).copied().unwrap_or("1");

        let mut board = [[None; 8]; 8];
        let ranks: Vec<&str> = board_part.split('/').collect();
        if ranks.len() != 8 {
            return Err(bad("board section needs 8 ranks"));
        }

        // FEN lists rank 8 first, which is row 0 here.
        for (row, rank_str) in ranks.iter().enumerate() {
            let mut col = 0usize;
            for ch in rank_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    col += d as usize;
                } else {
                    let color = if ch.is_ascii_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    let kind = PieceKind::from_letter(ch)
                        .ok_or_else(|| bad(&format!("invalid piece char '{ch}'")))?;
                    if col >= 8 {
                        return Err(bad("too many files in a rank"));
                    }
                    board[row][col] = Some(Piece::new(color, kind));
                    col += 1;
                }
                if col > 8 {
                    return Err(bad("too many files in a rank"));
                }
            }
            if col != 8 {
                return Err(bad("not enough files in a rank"));
            }
        }

        let side_to_move = match stm_part {
            "w" => Color::White,
            "b" => Color::Black,
            _ => return Err(bad("invalid side to move")),
        };

        let mut kings = [None, None];
        for sq in Square::all() {
            if let Some(pc) = board[sq.row as usize][sq.col as usize]
                && pc.kind == PieceKind::King
            {
                if kings[pc.color.idx()].is_some() {
                    return Err(bad("more than one king of a color"));
                }
                kings[pc.color.idx()] = Some(sq);
            }
        }
        let (Some(white_king), Some(black_king)) = (kings[0], kings[1]) else {
            return Err(bad("each side needs exactly one king"));
        };

        halfmove_part
            .parse::<u32>()
            .map_err(|_| bad("invalid halfmove clock"))?;
        let fullmove: u32 = fullmove_part
            .parse()
            .map_err(|_| bad("invalid fullmove number"))?;
        let ply = fullmove
            .saturating_sub(1)
            .checked_mul(2)
            .and_then(|p| p.checked_add(side_to_move.idx() as u32))
            .ok_or_else(|| bad("fullmove number out of range"))?;

        let mut pos = Position {
            board,
            side_to_move,
            kings: [white_king, black_king],
            ply,
            history: Vec::new(),
        };

        // Everything starts out "moved" except pawns on their start row and
        // the kings and rooks named by the castling field.
        for sq in Square::all() {
            if let Some(pc) = pos.piece_mut(sq) {
                pc.flags.has_moved = match pc.kind {
                    PieceKind::Pawn => sq.row != pc.color.pawn_row(),
                    PieceKind::King | PieceKind::Rook => true,
                    _ => false,
                };
            }
        }
        if castle_part != "-" {
            for c in castle_part.chars() {
                let (color, rook_col) = match c {
                    'K' => (Color::White, 7),
                    'Q' => (Color::White, 0),
                    'k' => (Color::Black, 7),
                    'q' => (Color::Black, 0),
                    _ => return Err(bad(&format!("invalid castling char '{c}'"))),
                };
                let row = color.back_row();
                let king_sq = Square::new(row, 4);
                let rook_sq = Square::new(row, rook_col);
                let rook_home = matches!(
                    pos.piece_at(rook_sq),
                    Some(r) if r.kind == PieceKind::Rook && r.color == color
                );
                if pos.kings[color.idx()] != king_sq || !rook_home {
                    return Err(bad(&format!("castling right '{c}' without king and rook")));
                }
                if let Some(k) = pos.piece_mut(king_sq) {
                    k.flags.has_moved = false;
                }
                if let Some(r) = pos.piece_mut(rook_sq) {
                    r.flags.has_moved = false;
                }
            }
        }

        if ep_part != "-" {
            let target = Square::parse(ep_part)?;
            let mover = side_to_move.other();
            let pawn_sq = target
                .offset(mover.forward(), 0)
                .ok_or_else(|| bad("en-passant square on the edge"))?;
            match pos.piece_mut(pawn_sq) {
                Some(pc) if pc.kind == PieceKind::Pawn && pc.color == mover => {
                    pc.flags.has_moved = true;
                    pc.flags.just_double_stepped = true;
                    pc.flags.double_step_ply = ply;
                }
                _ => return Err(bad("en-passant square without a double-stepped pawn")),
            }
        }

        if pos.in_check(side_to_move.other()) {
            return Err(bad("side not to move is in check"));
        }

        Ok(pos)
    }

    pub fn to_fen(&self) -> String {
        let mut out = String::new();
        for row in 0..8u8 {
            let mut empty = 0;
            for col in 0..8u8 {
                match self.piece_at(Square::new(row, col)) {
                    None => empty += 1,
                    Some(pc) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        let ch = pc.kind.letter();
                        out.push(match pc.color {
                            Color::White => ch,
                            Color::Black => ch.to_ascii_lowercase(),
                        });
                    }
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
            if row < 7 {
                out.push('/');
            }
        }

        out.push(' ');
        out.push(match self.side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        });

        let mut castling = String::new();
        for (color, rook_col, letter) in [
            (Color::White, 7, 'K'),
            (Color::White, 0, 'Q'),
            (Color::Black, 7, 'k'),
            (Color::Black, 0, 'q'),
        ] {
            if self.castle_pieces_unmoved(color, rook_col) {
                castling.push(letter);
            }
        }
        if castling.is_empty() {
            castling.push('-');
        }
        out.push(' ');
        out.push_str(&castling);

        out.push(' ');
        match self.en_passant_square() {
            Some(sq) => out.push_str(&sq.to_string()),
            None => out.push('-'),
        }

        out.push_str(&format!(" 0 {}", self.ply / 2 + 1));
        out
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Half-moves played since the position was set up (plus the FEN offset).
    pub fn ply(&self) -> u32 {
        self.ply
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub fn king_sq(&self, c: Color) -> Square {
        self.kings[c.idx()]
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board[sq.row as usize][sq.col as usize]
    }

    pub(crate) fn set_piece(&mut self, sq: Square, pc: Option<Piece>) {
        self.board[sq.row as usize][sq.col as usize] = pc;
    }

    pub(crate) fn take_piece(&mut self, sq: Square) -> Option<Piece> {
        self.board[sq.row as usize][sq.col as usize].take()
    }

    fn piece_mut(&mut self, sq: Square) -> Option<&mut Piece> {
        self.board[sq.row as usize][sq.col as usize].as_mut()
    }

    /// Every occupied square with its piece, row-major. This is the view a
    /// board renderer needs.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|pc| (sq, pc)))
    }

    /// King and the rook in column `rook_col` are both on their home squares
    /// and have never moved.
    pub fn castle_pieces_unmoved(&self, c: Color, rook_col: u8) -> bool {
        let row = c.back_row();
        let king_ok = matches!(
            self.piece_at(Square::new(row, 4)),
            Some(k) if k.kind == PieceKind::King && k.color == c && !k.flags.has_moved
        );
        let rook_ok = matches!(
            self.piece_at(Square::new(row, rook_col)),
            Some(r) if r.kind == PieceKind::Rook && r.color == c && !r.flags.has_moved
        );
        king_ok && rook_ok
    }

    /// Square a pawn passed over on the previous ply, if any.
    pub fn en_passant_square(&self) -> Option<Square> {
        let mover = self.side_to_move.other();
        self.pieces()
            .find(|(_, pc)| pc.color == mover && pc.en_passant_target(self.ply))
            .and_then(|(sq, _)| sq.offset(-mover.forward(), 0))
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8u8 {
            write!(f, "{} ", 8 - row)?;
            for col in 0..8u8 {
                match self.piece_at(Square::new(row, col)) {
                    Some(pc) => write!(f, " {pc}")?,
                    None => write!(f, " --")?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "   ")?;
        for file in 'a'..='h' {
            write!(f, " {file} ")?;
        }
        writeln!(f)?;
        write!(f, "{:?} to move, ply {}", self.side_to_move, self.ply)
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;

use std::fmt;

use crate::error::ChessError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}
impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }
    /// Row delta of a pawn step. White advances toward row 0.
    pub fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }
    pub fn back_row(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }
    pub fn pawn_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }
    /// Row on which this color's pawns promote.
    pub fn promotion_row(self) -> u8 {
        self.other().back_row()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::King,
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Pawn,
    ];

    /// Kinds a pawn may turn into.
    pub const PROMOTIONS: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    pub fn idx(self) -> usize {
        self as usize
    }

    pub fn letter(self) -> char {
        match self {
            PieceKind::King => 'K',
            PieceKind::Queen => 'Q',
            PieceKind::Rook => 'R',
            PieceKind::Bishop => 'B',
            PieceKind::Knight => 'N',
            PieceKind::Pawn => 'P',
        }
    }

    pub fn from_letter(c: char) -> Option<PieceKind> {
        match c.to_ascii_uppercase() {
            'K' => Some(PieceKind::King),
            'Q' => Some(PieceKind::Queen),
            'R' => Some(PieceKind::Rook),
            'B' => Some(PieceKind::Bishop),
            'N' => Some(PieceKind::Knight),
            'P' => Some(PieceKind::Pawn),
            _ => None,
        }
    }
}

/// Movement flags carried by each piece and snapshotted into every
/// `MoveRecord`, so unmake only has to put the old piece value back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PieceFlags {
    /// Set once the piece has moved. Castling eligibility for kings and rooks,
    /// double-step eligibility for pawns.
    pub has_moved: bool,
    /// Pawn only: its most recent move was a two-square advance.
    pub just_double_stepped: bool,
    /// Pawn only: position ply right after that double step.
    pub double_step_ply: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
    pub flags: PieceFlags,
}

impl Piece {
    /// A piece that has not moved yet.
    pub fn new(color: Color, kind: PieceKind) -> Self {
        Self {
            color,
            kind,
            flags: PieceFlags::default(),
        }
    }

    /// Whether this pawn can be taken en passant on the given ply.
    pub fn en_passant_target(&self, ply: u32) -> bool {
        self.kind == PieceKind::Pawn
            && self.flags.just_double_stepped
            && self.flags.double_step_ply == ply
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self.color {
            Color::White => 'w',
            Color::Black => 'b',
        };
        write!(f, "{c}{}", self.kind.letter())
    }
}

/// Board coordinate. Row 0 is Black's back rank (rank 8), row 7 White's
/// back rank (rank 1).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < 8 && col < 8, "square out of range");
        Self { row, col }
    }

    /// Square reached by stepping `(dr, dc)`, or `None` off the board.
    pub fn offset(self, dr: i8, dc: i8) -> Option<Square> {
        let r = self.row as i8 + dr;
        let c = self.col as i8 + dc;
        if (0..8).contains(&r) && (0..8).contains(&c) {
            Some(Square {
                row: r as u8,
                col: c as u8,
            })
        } else {
            None
        }
    }

    /// Rank number in algebraic terms, 1..=8.
    pub fn rank(self) -> u8 {
        8 - self.row
    }

    /// Same square seen from the other side of the board.
    pub fn flipped(self) -> Square {
        Square {
            row: 7 - self.row,
            col: self.col,
        }
    }

    /// All 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Square { row, col }))
    }

    pub fn parse(text: &str) -> Result<Square, ChessError> {
        let b = text.as_bytes();
        if b.len() != 2 {
            return Err(ChessError::InvalidSquare(text.to_string()));
        }
        let f = b[0];
        let r = b[1];
        if !(b'a'..=b'h').contains(&f) || !(b'1'..=b'8').contains(&r) {
            return Err(ChessError::InvalidSquare(text.to_string()));
        }
        Ok(Square {
            row: 7 - (r - b'1'),
            col: f - b'a',
        })
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.col) as char;
        write!(f, "{file}{}", self.rank())
    }
}

/// A (from, to) pair. Castling is the king's two-file step; en passant and
/// promotion are recognised from the board when the move is made.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// Outcome classification of a position for the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameState {
    Checkmate,
    Stalemate,
    Check,
    Continue,
    InsufficientMaterial,
}

impl GameState {
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            GameState::Checkmate | GameState::Stalemate | GameState::InsufficientMaterial
        )
    }
}

// Helpers
pub const KING_STEPS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];
pub const KNIGHT_STEPS: [(i8, i8); 8] = [
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
];
pub const ORTHOGONAL: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
pub const DIAGONAL: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
pub const QUEEN_DIRS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
];

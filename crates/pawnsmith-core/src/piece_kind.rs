//! Piece classes, independent of color.

use std::fmt;

/// The class of a chess piece. Each class owns one bit of a [`Piece`](crate::Piece) code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    Pawn = 0x01,
    Knight = 0x02,
    Bishop = 0x04,
    Rook = 0x08,
    Queen = 0x10,
    King = 0x20,
}

impl PieceKind {
    /// Total number of piece kinds.
    pub const COUNT: usize = 6;

    /// All piece kinds, cheapest first.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Return the class bit of this kind.
    #[inline]
    pub const fn bit(self) -> u8 {
        self as u8
    }

    /// Return a dense index (0..5) for table lookups.
    #[inline]
    pub const fn index(self) -> usize {
        (self as u8).trailing_zeros() as usize
    }

    /// Decode a class bit. Returns `None` unless exactly one known class bit is set.
    #[inline]
    pub const fn from_bit(bit: u8) -> Option<PieceKind> {
        match bit {
            0x01 => Some(PieceKind::Pawn),
            0x02 => Some(PieceKind::Knight),
            0x04 => Some(PieceKind::Bishop),
            0x08 => Some(PieceKind::Rook),
            0x10 => Some(PieceKind::Queen),
            0x20 => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Lowercase letter used in position descriptions.
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    /// Parse a piece letter, ignoring case.
    pub fn from_letter(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

//! Bit-packed piece codes stored in each board cell.

use std::fmt;

use crate::color::Color;
use crate::piece_kind::PieceKind;

const WHITE_BIT: u8 = 0x40;
const BLACK_BIT: u8 = 0x80;
const KIND_MASK: u8 = 0x3F;
const COLOR_MASK: u8 = 0xC0;

const STRAIGHT_MOVERS: u8 = PieceKind::Rook.bit() | PieceKind::Queen.bit();
const DIAGONAL_MOVERS: u8 = PieceKind::Bishop.bit() | PieceKind::Queen.bit();

/// The contents of one board cell, packed into a byte.
///
/// Bit layout:
/// - bits 0-5: exactly one [`PieceKind`] class bit
/// - bit 6: white
/// - bit 7: black
///
/// [`Piece::EMPTY`] is zero: no class bit and no color bit.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Piece(u8);

impl Piece {
    /// An empty cell.
    pub const EMPTY: Piece = Piece(0);

    pub const WHITE_PAWN: Piece = Piece::new(PieceKind::Pawn, Color::White);
    pub const WHITE_KNIGHT: Piece = Piece::new(PieceKind::Knight, Color::White);
    pub const WHITE_BISHOP: Piece = Piece::new(PieceKind::Bishop, Color::White);
    pub const WHITE_ROOK: Piece = Piece::new(PieceKind::Rook, Color::White);
    pub const WHITE_QUEEN: Piece = Piece::new(PieceKind::Queen, Color::White);
    pub const WHITE_KING: Piece = Piece::new(PieceKind::King, Color::White);
    pub const BLACK_PAWN: Piece = Piece::new(PieceKind::Pawn, Color::Black);
    pub const BLACK_KNIGHT: Piece = Piece::new(PieceKind::Knight, Color::Black);
    pub const BLACK_BISHOP: Piece = Piece::new(PieceKind::Bishop, Color::Black);
    pub const BLACK_ROOK: Piece = Piece::new(PieceKind::Rook, Color::Black);
    pub const BLACK_QUEEN: Piece = Piece::new(PieceKind::Queen, Color::Black);
    pub const BLACK_KING: Piece = Piece::new(PieceKind::King, Color::Black);

    /// Combine a class and a color into a piece code.
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Piece {
        let color_bit = match color {
            Color::White => WHITE_BIT,
            Color::Black => BLACK_BIT,
        };
        Piece(kind.bit() | color_bit)
    }

    /// Return the raw byte.
    #[inline]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Return `true` for an empty cell.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Return the class of this piece, or `None` for an empty cell.
    #[inline]
    pub const fn kind(self) -> Option<PieceKind> {
        PieceKind::from_bit(self.0 & KIND_MASK)
    }

    /// Return the color of this piece, or `None` for an empty cell.
    #[inline]
    pub const fn color(self) -> Option<Color> {
        match self.0 & COLOR_MASK {
            WHITE_BIT => Some(Color::White),
            BLACK_BIT => Some(Color::Black),
            _ => None,
        }
    }

    /// Return `true` if this piece has the given class.
    #[inline]
    pub const fn is(self, kind: PieceKind) -> bool {
        self.0 & kind.bit() != 0
    }

    /// Return `true` if this is a non-empty piece of `color`.
    #[inline]
    pub const fn is_friendly(self, color: Color) -> bool {
        !self.is_empty() && self.0 & Self::color_bit(color) != 0
    }

    /// Return `true` if this is a non-empty piece of the side opposing `color`.
    #[inline]
    pub const fn is_enemy(self, color: Color) -> bool {
        !self.is_empty() && self.0 & Self::color_bit(color) == 0
    }

    /// Return `true` if this piece slides along ranks and files (rook, queen).
    #[inline]
    pub const fn moves_straight(self) -> bool {
        self.0 & STRAIGHT_MOVERS != 0
    }

    /// Return `true` if this piece slides along diagonals (bishop, queen).
    #[inline]
    pub const fn moves_diagonal(self) -> bool {
        self.0 & DIAGONAL_MOVERS != 0
    }

    /// Same color, different class. Used for promotions.
    #[inline]
    pub const fn with_kind(self, kind: PieceKind) -> Piece {
        Piece((self.0 & COLOR_MASK) | kind.bit())
    }

    /// Letter used in position descriptions: uppercase White, lowercase Black,
    /// `None` for an empty cell.
    pub fn letter(self) -> Option<char> {
        let base = self.kind()?.letter();
        match self.color()? {
            Color::White => Some(base.to_ascii_uppercase()),
            Color::Black => Some(base),
        }
    }

    /// Parse a description letter into a colored piece.
    pub fn from_letter(c: char) -> Option<Piece> {
        let kind = PieceKind::from_letter(c)?;
        let color = if c.is_ascii_uppercase() { Color::White } else { Color::Black };
        Some(Piece::new(kind, color))
    }

    #[inline]
    const fn color_bit(color: Color) -> u8 {
        match color {
            Color::White => WHITE_BIT,
            Color::Black => BLACK_BIT,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter().unwrap_or('.'))
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.color(), self.kind()) {
            (Some(color), Some(kind)) => {
                let prefix = match color {
                    Color::White => 'W',
                    Color::Black => 'B',
                };
                write!(f, "{}{}", prefix, kind.letter().to_ascii_uppercase())
            }
            _ => write!(f, "Empty"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Piece;
    use crate::color::Color;
    use crate::piece_kind::PieceKind;

    #[test]
    fn new_decodes_back() {
        for color in Color::ALL {
            for kind in PieceKind::ALL {
                let piece = Piece::new(kind, color);
                assert_eq!(piece.kind(), Some(kind));
                assert_eq!(piece.color(), Some(color));
                assert_eq!(piece.raw().count_ones(), 2, "{piece:?} must carry two bits");
            }
        }
    }

    #[test]
    fn empty_has_no_class_or_color() {
        assert!(Piece::EMPTY.is_empty());
        assert_eq!(Piece::EMPTY.kind(), None);
        assert_eq!(Piece::EMPTY.color(), None);
        assert!(!Piece::EMPTY.is_friendly(Color::White));
        assert!(!Piece::EMPTY.is_enemy(Color::White));
        assert!(!Piece::EMPTY.is_enemy(Color::Black));
    }

    #[test]
    fn friend_or_foe() {
        assert!(Piece::WHITE_ROOK.is_friendly(Color::White));
        assert!(Piece::WHITE_ROOK.is_enemy(Color::Black));
        assert!(!Piece::BLACK_KING.is_enemy(Color::Black));
    }

    #[test]
    fn slider_geometry() {
        assert!(Piece::WHITE_ROOK.moves_straight());
        assert!(!Piece::WHITE_ROOK.moves_diagonal());
        assert!(Piece::BLACK_BISHOP.moves_diagonal());
        assert!(Piece::BLACK_QUEEN.moves_straight() && Piece::BLACK_QUEEN.moves_diagonal());
        assert!(!Piece::WHITE_KNIGHT.moves_straight() && !Piece::WHITE_KNIGHT.moves_diagonal());
        assert!(!Piece::EMPTY.moves_straight());
    }

    #[test]
    fn promotion_keeps_color() {
        assert_eq!(Piece::BLACK_PAWN.with_kind(PieceKind::Queen), Piece::BLACK_QUEEN);
        assert_eq!(Piece::WHITE_PAWN.with_kind(PieceKind::Knight), Piece::WHITE_KNIGHT);
    }

    #[test]
    fn letters() {
        assert_eq!(Piece::from_letter('K'), Some(Piece::WHITE_KING));
        assert_eq!(Piece::from_letter('n'), Some(Piece::BLACK_KNIGHT));
        assert_eq!(Piece::from_letter('1'), None);
        assert_eq!(Piece::BLACK_QUEEN.letter(), Some('q'));
        assert_eq!(Piece::EMPTY.letter(), None);
        assert_eq!(format!("{}", Piece::EMPTY), ".");
        assert_eq!(format!("{:?}", Piece::WHITE_BISHOP), "WB");
    }
}

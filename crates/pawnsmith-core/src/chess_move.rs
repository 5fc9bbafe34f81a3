//! The move value type produced by generation and consumed by [`Position::apply_move`](crate::Position::apply_move).

use std::fmt;

use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// What kind of transition a move performs beyond relocating the piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Normal,
    PawnDoublePush,
    EnPassantCapture,
    CastleKingside,
    CastleQueenside,
    PromoteToKnight,
    PromoteToBishop,
    PromoteToRook,
    PromoteToQueen,
}

impl MoveKind {
    /// The four promotion kinds, in the order they are generated.
    pub const PROMOTIONS: [MoveKind; 4] = [
        MoveKind::PromoteToKnight,
        MoveKind::PromoteToBishop,
        MoveKind::PromoteToRook,
        MoveKind::PromoteToQueen,
    ];

    /// Class the pawn becomes, for promotion kinds.
    pub const fn promotion(self) -> Option<PieceKind> {
        match self {
            MoveKind::PromoteToKnight => Some(PieceKind::Knight),
            MoveKind::PromoteToBishop => Some(PieceKind::Bishop),
            MoveKind::PromoteToRook => Some(PieceKind::Rook),
            MoveKind::PromoteToQueen => Some(PieceKind::Queen),
            _ => None,
        }
    }

    /// Return `true` for either castle.
    pub const fn is_castle(self) -> bool {
        matches!(self, MoveKind::CastleKingside | MoveKind::CastleQueenside)
    }
}

/// A single move. Immutable once generated.
///
/// `captured` records the piece removed by the move (the enemy pawn for en
/// passant) and is [`Piece::EMPTY`] for quiet moves. It is bookkeeping for
/// display and history; legality never reads it.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    kind: MoveKind,
    start: Square,
    dest: Square,
    captured: Piece,
}

impl Move {
    /// Create a move.
    #[inline]
    pub const fn new(kind: MoveKind, start: Square, dest: Square, captured: Piece) -> Move {
        Move { kind, start, dest, captured }
    }

    /// Create a quiet [`MoveKind::Normal`] move.
    #[inline]
    pub const fn quiet(start: Square, dest: Square) -> Move {
        Move::new(MoveKind::Normal, start, dest, Piece::EMPTY)
    }

    #[inline]
    pub const fn kind(self) -> MoveKind {
        self.kind
    }

    #[inline]
    pub const fn start(self) -> Square {
        self.start
    }

    #[inline]
    pub const fn dest(self) -> Square {
        self.dest
    }

    #[inline]
    pub const fn captured(self) -> Piece {
        self.captured
    }

    /// Return `true` if the move removes an enemy piece.
    #[inline]
    pub const fn is_capture(self) -> bool {
        !self.captured.is_empty()
    }

    /// Return `true` if this move goes from `start` to `dest`.
    ///
    /// Promotions share squares, so an input adapter matching four promotion
    /// moves must pick among them separately.
    #[inline]
    pub fn matches(self, start: Square, dest: Square) -> bool {
        self.start == start && self.dest == dest
    }

    /// Coordinate notation: `e2e4`, `e7e8q`.
    pub fn to_coordinate(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.start, self.dest)?;
        if let Some(kind) = self.kind.promotion() {
            write!(f, "{}", kind.letter())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({} {:?}", self, self.kind)?;
        if self.is_capture() {
            write!(f, " x{:?}", self.captured)?;
        }
        write!(f, ")")
    }
}

//! The position: 64 piece cells, side to move, castling, en passant, and move counters.

use std::fmt;

use crate::castle_rights::CastleRights;
use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Complete chess position state.
///
/// Positions are values: [`Position::apply_move`] returns a new position and
/// never touches the one it was called on.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// Piece code per square, indexed by [`Square::index()`].
    squares: [Piece; Square::COUNT],
    /// Occupied squares per color, one bit per square index.
    occupancy: [u64; Color::COUNT],
    side_to_move: Color,
    castling: CastleRights,
    /// Square a pawn passed over on the previous move, if that move was a double push.
    en_passant: Option<Square>,
    /// Plies since the last capture or pawn move.
    halfmove_clock: u32,
    /// Starts at 1, incremented after each Black move.
    fullmove_number: u32,
}

impl Position {
    /// Return the standard starting position.
    pub fn starting_position() -> Position {
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

        let mut position = Position::empty();
        for color in Color::ALL {
            for (file, kind) in BACK_RANK.into_iter().enumerate() {
                position.put(Square::new(color.back_rank(), file as u8), Piece::new(kind, color));
                position.put(
                    Square::new(color.pawn_rank(), file as u8),
                    Piece::new(PieceKind::Pawn, color),
                );
            }
        }
        position.castling = CastleRights::ALL;
        position
    }

    /// An empty board, White to move, no rights. Used while parsing.
    pub(crate) fn empty() -> Position {
        Position {
            squares: [Piece::EMPTY; Square::COUNT],
            occupancy: [0; Color::COUNT],
            side_to_move: Color::White,
            castling: CastleRights::NONE,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Return the piece code on `sq` ([`Piece::EMPTY`] if vacant).
    #[inline]
    pub fn piece_on(&self, sq: Square) -> Piece {
        self.squares[sq.index()]
    }

    /// Return the piece code at a raw index, `None` when the index is off the board.
    #[inline]
    pub fn piece_at(&self, index: usize) -> Option<Piece> {
        Square::from_index(index).map(|sq| self.piece_on(sq))
    }

    /// Return the piece code at `(rank, file)`, `None` when either coordinate is off the board.
    #[inline]
    pub fn piece_at_coords(&self, rank: i8, file: i8) -> Option<Piece> {
        Square::from_coords(rank, file).map(|sq| self.piece_on(sq))
    }

    /// Iterate over `(square, piece)` for every piece of `color`, in square order.
    ///
    /// Cost is proportional to the number of pieces, not to the board size.
    pub fn pieces_of(&self, color: Color) -> PiecesOf<'_> {
        PiecesOf {
            position: self,
            remaining: self.occupancy[color.index()],
        }
    }

    /// Return the number of pieces `color` has on the board.
    #[inline]
    pub fn piece_count(&self, color: Color) -> u32 {
        self.occupancy[color.index()].count_ones()
    }

    /// Return the square of `color`'s king, or `None` if it has none.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|(_, piece)| piece.is(PieceKind::King))
            .map(|(sq, _)| sq)
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Return a copy with the other side to move.
    #[inline]
    #[must_use]
    pub fn flip_side(&self) -> Position {
        self.with_side_to_move(self.side_to_move.flip())
    }

    /// Return a copy with `color` to move.
    #[inline]
    #[must_use]
    pub fn with_side_to_move(&self, color: Color) -> Position {
        let mut position = *self;
        position.side_to_move = color;
        position
    }

    #[inline]
    pub fn castling(&self) -> CastleRights {
        self.castling
    }

    /// Return `(kingside, queenside)` castling rights for `color`.
    #[inline]
    pub fn castle_rights(&self, color: Color) -> (bool, bool) {
        self.castling.for_color(color)
    }

    /// Return the en-passant target square, if the previous move was a double push.
    #[inline]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[inline]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Return `true` when neither side can possibly deliver mate: bare kings,
    /// or bare kings plus a single knight or bishop.
    pub fn is_insufficient_material(&self) -> bool {
        let mut minors = 0;
        for color in Color::ALL {
            for (_, piece) in self.pieces_of(color) {
                match piece.kind() {
                    Some(PieceKind::King) => {}
                    Some(PieceKind::Knight | PieceKind::Bishop) => minors += 1,
                    _ => return false,
                }
            }
        }
        minors <= 1
    }

    /// Place `piece` on `sq`, replacing whatever was there.
    pub(crate) fn put(&mut self, sq: Square, piece: Piece) {
        self.remove(sq);
        if let Some(color) = piece.color() {
            self.occupancy[color.index()] |= 1u64 << sq.index();
        }
        self.squares[sq.index()] = piece;
    }

    /// Clear `sq` and return what stood there.
    pub(crate) fn remove(&mut self, sq: Square) -> Piece {
        let old = self.squares[sq.index()];
        if let Some(color) = old.color() {
            self.occupancy[color.index()] &= !(1u64 << sq.index());
        }
        self.squares[sq.index()] = Piece::EMPTY;
        old
    }

    #[inline]
    pub(crate) fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    #[inline]
    pub(crate) fn set_castling(&mut self, rights: CastleRights) {
        self.castling = rights;
    }

    #[inline]
    pub(crate) fn set_en_passant(&mut self, sq: Option<Square>) {
        self.en_passant = sq;
    }

    #[inline]
    pub(crate) fn set_counters(&mut self, halfmove_clock: u32, fullmove_number: u32) {
        self.halfmove_clock = halfmove_clock;
        self.fullmove_number = fullmove_number;
    }

    /// Return a pretty-printable wrapper for this position.
    pub fn pretty(&self) -> PrettyPosition<'_> {
        PrettyPosition(self)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::starting_position()
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position(\"{}\")", self)
    }
}

/// Iterator over one color's pieces, see [`Position::pieces_of`].
pub struct PiecesOf<'a> {
    position: &'a Position,
    remaining: u64,
}

impl Iterator for PiecesOf<'_> {
    type Item = (Square, Piece);

    fn next(&mut self) -> Option<(Square, Piece)> {
        if self.remaining == 0 {
            return None;
        }
        let index = self.remaining.trailing_zeros() as usize;
        self.remaining &= self.remaining - 1;
        let sq = Square::from_index_unchecked(index);
        Some((sq, self.position.piece_on(sq)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining.count_ones() as usize;
        (n, Some(n))
    }
}

/// Wrapper for printing a position as an 8x8 grid, rank 8 on top.
pub struct PrettyPosition<'a>(&'a Position);

impl fmt::Display for PrettyPosition<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0u8..8).rev() {
            write!(f, "{}  ", rank + 1)?;
            for file in 0u8..8 {
                let piece = self.0.piece_on(Square::new(rank, file));
                if file < 7 {
                    write!(f, "{piece} ")?;
                } else {
                    write!(f, "{piece}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

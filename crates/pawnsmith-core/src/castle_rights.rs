//! Castling rights: four independent flags packed into a `u8`.

use std::fmt;

use crate::color::Color;
use crate::error::ParseError;

/// Which wing a castle goes toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    /// Both wings.
    pub const ALL: [CastleSide; 2] = [CastleSide::KingSide, CastleSide::QueenSide];

    /// File of the rook that castles on this wing.
    #[inline]
    pub const fn rook_file(self) -> u8 {
        match self {
            CastleSide::KingSide => 7,
            CastleSide::QueenSide => 0,
        }
    }
}

/// Castling rights: bit 0 = white kingside, 1 = white queenside,
/// 2 = black kingside, 3 = black queenside.
///
/// Rights are only ever cleared once a position exists; the constructors here
/// are for setup.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastleRights(u8);

impl CastleRights {
    /// No rights.
    pub const NONE: CastleRights = CastleRights(0);
    /// All four rights.
    pub const ALL: CastleRights = CastleRights(0b1111);

    /// Only the one right for `color` toward `side`.
    #[inline]
    pub const fn single(color: Color, side: CastleSide) -> CastleRights {
        CastleRights(Self::flag(color, side))
    }

    /// Both rights for `color`.
    #[inline]
    pub const fn both(color: Color) -> CastleRights {
        CastleRights(Self::flag(color, CastleSide::KingSide) | Self::flag(color, CastleSide::QueenSide))
    }

    /// Return `true` if no rights remain.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Check whether `color` may still castle toward `side`.
    #[inline]
    pub const fn has(self, color: Color, side: CastleSide) -> bool {
        self.0 & Self::flag(color, side) != 0
    }

    /// Return `(kingside, queenside)` for `color`.
    #[inline]
    pub const fn for_color(self, color: Color) -> (bool, bool) {
        (
            self.has(color, CastleSide::KingSide),
            self.has(color, CastleSide::QueenSide),
        )
    }

    /// Return rights with one flag cleared.
    #[inline]
    #[must_use]
    pub const fn clear(self, color: Color, side: CastleSide) -> CastleRights {
        CastleRights(self.0 & !Self::flag(color, side))
    }

    /// Return rights with both flags for `color` cleared.
    #[inline]
    #[must_use]
    pub const fn clear_color(self, color: Color) -> CastleRights {
        self.clear(color, CastleSide::KingSide)
            .clear(color, CastleSide::QueenSide)
    }

    /// Return rights with every flag in `other` cleared.
    #[inline]
    #[must_use]
    pub const fn remove(self, other: CastleRights) -> CastleRights {
        CastleRights(self.0 & !other.0)
    }

    #[inline]
    const fn flag(color: Color, side: CastleSide) -> u8 {
        match (color, side) {
            (Color::White, CastleSide::KingSide) => 0b0001,
            (Color::White, CastleSide::QueenSide) => 0b0010,
            (Color::Black, CastleSide::KingSide) => 0b0100,
            (Color::Black, CastleSide::QueenSide) => 0b1000,
        }
    }

    /// Parse the castling field of a description (`KQkq`, `Kq`, `-`, ...).
    ///
    /// Each letter may appear at most once.
    pub fn from_field(s: &str) -> Result<CastleRights, ParseError> {
        if s == "-" {
            return Ok(CastleRights::NONE);
        }
        let mut bits = 0u8;
        for c in s.chars() {
            let flag = match c {
                'K' => Self::flag(Color::White, CastleSide::KingSide),
                'Q' => Self::flag(Color::White, CastleSide::QueenSide),
                'k' => Self::flag(Color::Black, CastleSide::KingSide),
                'q' => Self::flag(Color::Black, CastleSide::QueenSide),
                _ => return Err(ParseError::InvalidCastlingChar { character: c }),
            };
            if bits & flag != 0 {
                return Err(ParseError::InvalidCastlingChar { character: c });
            }
            bits |= flag;
        }
        if bits == 0 {
            // empty string: the field itself was missing a value
            return Err(ParseError::InvalidCastlingChar { character: ' ' });
        }
        Ok(CastleRights(bits))
    }
}

impl fmt::Display for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "-");
        }
        for (color, side, c) in [
            (Color::White, CastleSide::KingSide, 'K'),
            (Color::White, CastleSide::QueenSide, 'Q'),
            (Color::Black, CastleSide::KingSide, 'k'),
            (Color::Black, CastleSide::QueenSide, 'q'),
        ] {
            if self.has(color, side) {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CastleRights({self})")
    }
}

//! Board squares, indexed `rank * 8 + file` from a1.

use std::fmt;

/// A square on the board. Index = rank * 8 + file, so a1 = 0, h1 = 7, h8 = 63.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square(u8);

const FILE_NAMES: &[u8; 8] = b"abcdefgh";
const RANK_NAMES: &[u8; 8] = b"12345678";

macro_rules! square_consts {
    ($($name:ident = $index:expr),* $(,)?) => {
        $(pub const $name: Square = Square($index);)*
    };
}

impl Square {
    /// Total number of squares.
    pub const COUNT: usize = 64;

    /// Create a square from a rank and file, both `0..8`. Callers outside the
    /// crate use [`Square::from_coords`].
    #[inline]
    pub(crate) const fn new(rank: u8, file: u8) -> Square {
        debug_assert!(rank < 8 && file < 8);
        Square(rank * 8 + file)
    }

    /// Create a square from signed coordinates, `None` when off the board.
    #[inline]
    pub const fn from_coords(rank: i8, file: i8) -> Option<Square> {
        if rank >= 0 && rank < 8 && file >= 0 && file < 8 {
            Some(Square((rank * 8 + file) as u8))
        } else {
            None
        }
    }

    /// Create a square from an index, `None` when out of range.
    #[inline]
    pub const fn from_index(index: usize) -> Option<Square> {
        if index < 64 { Some(Square(index as u8)) } else { None }
    }

    /// Create a square from an index without bounds checking.
    #[inline]
    pub(crate) const fn from_index_unchecked(index: usize) -> Square {
        debug_assert!(index < 64);
        Square(index as u8)
    }

    /// Parse a square name such as `e4`.
    pub fn from_algebraic(s: &str) -> Option<Square> {
        let [file, rank] = s.as_bytes() else {
            return None;
        };
        let file = FILE_NAMES.iter().position(|b| b == file)?;
        let rank = RANK_NAMES.iter().position(|b| b == rank)?;
        Some(Square::new(rank as u8, file as u8))
    }

    /// Return the index (0..63).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Return the rank (0 = first rank).
    #[inline]
    pub const fn rank(self) -> u8 {
        self.0 >> 3
    }

    /// Return the file (0 = a-file).
    #[inline]
    pub const fn file(self) -> u8 {
        self.0 & 7
    }

    /// Step by a rank and file delta, `None` if that leaves the board.
    #[inline]
    pub const fn offset(self, d_rank: i8, d_file: i8) -> Option<Square> {
        Square::from_coords(self.rank() as i8 + d_rank, self.file() as i8 + d_file)
    }

    /// Iterate over all 64 squares in index order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(Square)
    }

    square_consts! {
        A1 = 0, B1 = 1, C1 = 2, D1 = 3, E1 = 4, F1 = 5, G1 = 6, H1 = 7,
        A2 = 8, B2 = 9, C2 = 10, D2 = 11, E2 = 12, F2 = 13, G2 = 14, H2 = 15,
        A3 = 16, B3 = 17, C3 = 18, D3 = 19, E3 = 20, F3 = 21, G3 = 22, H3 = 23,
        A4 = 24, B4 = 25, C4 = 26, D4 = 27, E4 = 28, F4 = 29, G4 = 30, H4 = 31,
        A5 = 32, B5 = 33, C5 = 34, D5 = 35, E5 = 36, F5 = 37, G5 = 38, H5 = 39,
        A6 = 40, B6 = 41, C6 = 42, D6 = 43, E6 = 44, F6 = 45, G6 = 46, H6 = 47,
        A7 = 48, B7 = 49, C7 = 50, D7 = 51, E7 = 52, F7 = 53, G7 = 54, H7 = 55,
        A8 = 56, B8 = 57, C8 = 58, D8 = 59, E8 = 60, F8 = 61, G8 = 62, H8 = 63,
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = FILE_NAMES[self.file() as usize] as char;
        let rank = RANK_NAMES[self.rank() as usize] as char;
        write!(f, "{file}{rank}")
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self)
    }
}

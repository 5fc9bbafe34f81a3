//! Precomputed per-square move tables.
//!
//! Everything here is a pure function of the square index, evaluated at
//! compile time into [`MOVE_TABLES`] and only ever read afterwards. Neighbor
//! sets are built from rank/file deltas so no offset can wrap across a file
//! edge the way raw index addition would.

use crate::color::Color;
use crate::square::Square;

/// Index steps for the straight rays, in the order of
/// [`MoveTables::straight_distances`]: north, south, east, west.
pub const STRAIGHT_STEPS: [i8; 4] = [8, -8, 1, -1];

/// Index steps for the diagonal rays, in the order of
/// [`MoveTables::diagonal_distances`]: north-west, north-east, south-west, south-east.
pub const DIAGONAL_STEPS: [i8; 4] = [7, 9, -9, -7];

/// Knight jumps as (rank, file) deltas. As index offsets these are
/// +-6, +-10, +-15, +-17.
const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (-2, -1), (-2, 1), (-1, -2), (-1, 2),
    (1, -2), (1, 2), (2, -1), (2, 1),
];

const KING_DELTAS: [(i8, i8); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// A fixed-capacity list of at most 8 squares.
#[derive(Clone, Copy)]
pub struct SquareList {
    squares: [Square; 8],
    len: u8,
}

impl SquareList {
    const EMPTY: SquareList = SquareList {
        squares: [Square::A1; 8],
        len: 0,
    };

    const fn push(mut self, sq: Square) -> SquareList {
        self.squares[self.len as usize] = sq;
        self.len += 1;
        self
    }

    /// Return the squares as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[Square] {
        &self.squares[..self.len as usize]
    }
}

/// All per-square lookup data used by move generation and attack detection.
pub struct MoveTables {
    knight: [SquareList; 64],
    king: [SquareList; 64],
    straight: [[u8; 4]; 64],
    diagonal: [[u8; 4]; 64],
    /// Indexed by the pawn's color, then by the attacked square.
    pawn_attackers: [[SquareList; 64]; 2],
}

/// The process-wide tables.
pub static MOVE_TABLES: MoveTables = MoveTables::compute();

const fn min(a: u8, b: u8) -> u8 {
    if a < b { a } else { b }
}

const fn neighbors(sq: usize, deltas: &[(i8, i8); 8]) -> SquareList {
    let rank = (sq / 8) as i8;
    let file = (sq % 8) as i8;
    let mut list = SquareList::EMPTY;
    let mut d = 0;
    while d < deltas.len() {
        let r = rank + deltas[d].0;
        let f = file + deltas[d].1;
        if r >= 0 && r < 8 && f >= 0 && f < 8 {
            list = list.push(Square::from_index_unchecked((r * 8 + f) as usize));
        }
        d += 1;
    }
    list
}

const fn pawn_sources(sq: usize, color: Color) -> SquareList {
    // a pawn captures one rank forward, so its source is one rank back
    let rank = (sq / 8) as i8 - color.forward();
    let file = (sq % 8) as i8;
    let mut list = SquareList::EMPTY;
    if rank < 0 || rank > 7 {
        return list;
    }
    if file > 0 {
        list = list.push(Square::from_index_unchecked((rank * 8 + file - 1) as usize));
    }
    if file < 7 {
        list = list.push(Square::from_index_unchecked((rank * 8 + file + 1) as usize));
    }
    list
}

impl MoveTables {
    const fn compute() -> MoveTables {
        let mut tables = MoveTables {
            knight: [SquareList::EMPTY; 64],
            king: [SquareList::EMPTY; 64],
            straight: [[0; 4]; 64],
            diagonal: [[0; 4]; 64],
            pawn_attackers: [[SquareList::EMPTY; 64]; 2],
        };

        let mut sq = 0usize;
        while sq < 64 {
            let rank = (sq / 8) as u8;
            let file = (sq % 8) as u8;
            let north = 7 - rank;
            let south = rank;
            let east = 7 - file;
            let west = file;

            tables.knight[sq] = neighbors(sq, &KNIGHT_DELTAS);
            tables.king[sq] = neighbors(sq, &KING_DELTAS);
            tables.straight[sq] = [north, south, east, west];
            tables.diagonal[sq] = [
                min(north, west),
                min(north, east),
                min(south, west),
                min(south, east),
            ];
            tables.pawn_attackers[Color::White.index()][sq] = pawn_sources(sq, Color::White);
            tables.pawn_attackers[Color::Black.index()][sq] = pawn_sources(sq, Color::Black);
            sq += 1;
        }
        tables
    }

    /// Squares a knight on `sq` jumps to.
    #[inline]
    pub fn knight_targets(&self, sq: Square) -> &[Square] {
        self.knight[sq.index()].as_slice()
    }

    /// Squares adjacent to `sq`.
    #[inline]
    pub fn king_targets(&self, sq: Square) -> &[Square] {
        self.king[sq.index()].as_slice()
    }

    /// Steps to the edge going north, south, east, west.
    #[inline]
    pub fn straight_distances(&self, sq: Square) -> [u8; 4] {
        self.straight[sq.index()]
    }

    /// Steps to the edge going north-west, north-east, south-west, south-east.
    #[inline]
    pub fn diagonal_distances(&self, sq: Square) -> [u8; 4] {
        self.diagonal[sq.index()]
    }

    /// Squares from which a pawn of `color` captures onto `sq`.
    #[inline]
    pub fn pawn_attackers(&self, color: Color, sq: Square) -> &[Square] {
        self.pawn_attackers[color.index()][sq.index()].as_slice()
    }
}

#[cfg(test)]
mod tests {
    use super::{DIAGONAL_STEPS, MOVE_TABLES, STRAIGHT_STEPS};
    use crate::color::Color;
    use crate::square::Square;

    #[test]
    fn knight_counts() {
        assert_eq!(MOVE_TABLES.knight_targets(Square::E4).len(), 8);
        assert_eq!(MOVE_TABLES.knight_targets(Square::A1).len(), 2);
        assert_eq!(MOVE_TABLES.knight_targets(Square::B1).len(), 3);
        assert_eq!(MOVE_TABLES.knight_targets(Square::H8).len(), 2);
    }

    #[test]
    fn knight_never_wraps() {
        // g1 + 10 = a3 by raw index, which is not a knight move
        let targets = MOVE_TABLES.knight_targets(Square::G1);
        assert!(!targets.contains(&Square::A3));
        let mut sorted = targets.to_vec();
        sorted.sort();
        assert_eq!(sorted, vec![Square::E2, Square::F3, Square::H3]);
    }

    #[test]
    fn king_counts() {
        assert_eq!(MOVE_TABLES.king_targets(Square::E4).len(), 8);
        assert_eq!(MOVE_TABLES.king_targets(Square::A1).len(), 3);
        assert_eq!(MOVE_TABLES.king_targets(Square::H4).len(), 5);
        assert!(!MOVE_TABLES.king_targets(Square::H4).contains(&Square::A5));
    }

    #[test]
    fn edge_distances() {
        assert_eq!(MOVE_TABLES.straight_distances(Square::A1), [7, 0, 7, 0]);
        assert_eq!(MOVE_TABLES.straight_distances(Square::E4), [4, 3, 3, 4]);
        assert_eq!(MOVE_TABLES.diagonal_distances(Square::A1), [0, 7, 0, 0]);
        assert_eq!(MOVE_TABLES.diagonal_distances(Square::E4), [4, 3, 3, 3]);
    }

    #[test]
    fn rays_stay_on_board() {
        for sq in Square::all() {
            for (steps, dists) in [
                (STRAIGHT_STEPS, MOVE_TABLES.straight_distances(sq)),
                (DIAGONAL_STEPS, MOVE_TABLES.diagonal_distances(sq)),
            ] {
                for (step, dist) in steps.into_iter().zip(dists) {
                    let last = sq.index() as i32 + step as i32 * dist as i32;
                    assert!((0..64).contains(&last), "ray from {sq} leaves the board");
                }
            }
        }
    }

    #[test]
    fn pawn_attackers_sit_behind() {
        let mut white = MOVE_TABLES.pawn_attackers(Color::White, Square::E4).to_vec();
        white.sort();
        assert_eq!(white, vec![Square::D3, Square::F3]);

        let mut black = MOVE_TABLES.pawn_attackers(Color::Black, Square::E4).to_vec();
        black.sort();
        assert_eq!(black, vec![Square::D5, Square::F5]);

        assert_eq!(MOVE_TABLES.pawn_attackers(Color::White, Square::A4), &[Square::B3]);
        assert!(MOVE_TABLES.pawn_attackers(Color::White, Square::C1).is_empty());
        assert!(MOVE_TABLES.pawn_attackers(Color::Black, Square::C8).is_empty());
    }
}

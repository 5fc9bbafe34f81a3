//! Pseudo-legal and legal move generation.

mod attack;
mod king;
mod knights;
mod pawns;
mod sliders;

use crate::chess_move::Move;
use crate::position::Position;
use crate::square::Square;

pub use self::attack::{in_check, is_attacked};

use self::king::gen_king;
use self::knights::gen_knights;
use self::pawns::gen_pawns;
use self::sliders::gen_sliders;

/// Stack-allocated buffer for generated moves. Capacity 256 covers the theoretical max of 218.
#[derive(Clone)]
pub struct MoveList {
    moves: [Move; 256],
    len: u16,
}

impl MoveList {
    const FILLER: Move = Move::quiet(Square::A1, Square::A1);

    /// Create an empty move list.
    pub fn new() -> MoveList {
        MoveList {
            moves: [Self::FILLER; 256],
            len: 0,
        }
    }

    /// Push a move onto the list.
    #[inline]
    pub fn push(&mut self, mv: Move) {
        debug_assert!((self.len as usize) < 256);
        self.moves[self.len as usize] = mv;
        self.len += 1;
    }

    /// Return the number of moves in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Return `true` if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Return a slice of the moves.
    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len as usize]
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }

    /// Return `true` if `mv` is in the list.
    pub fn contains(&self, mv: Move) -> bool {
        self.as_slice().contains(&mv)
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;
    #[inline]
    fn index(&self, index: usize) -> &Move {
        &self.as_slice()[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

/// Generate every move the side to move could make if its own king's safety
/// were ignored. Castling is the exception: it is only emitted when the king's
/// path is safe.
pub fn generate_pseudo_legal_moves(position: &Position) -> MoveList {
    let mut list = MoveList::new();
    gen_pawns(position, &mut list);
    gen_knights(position, &mut list);
    gen_sliders(position, &mut list);
    gen_king(position, &mut list);
    list
}

/// Generate all legal moves for the side to move.
///
/// Each pseudo-legal candidate is replayed on a copy of the position and kept
/// only if the mover's king is not attacked afterwards.
pub fn generate_legal_moves(position: &Position) -> MoveList {
    let us = position.side_to_move();
    let mut list = MoveList::new();
    for &mv in &generate_pseudo_legal_moves(position) {
        // side to move has flipped in the trial, so test `us` explicitly
        let trial = position.apply_move(mv);
        if !in_check(&trial, us) {
            list.push(mv);
        }
    }
    list
}

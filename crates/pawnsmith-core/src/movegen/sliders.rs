//! Rook, bishop, and queen move generation.

use crate::chess_move::{Move, MoveKind};
use crate::position::Position;
use crate::square::Square;
use crate::tables::{DIAGONAL_STEPS, MOVE_TABLES, STRAIGHT_STEPS};

use super::MoveList;

/// Squares along one ray from `from`, nearest first, stopping at the edge.
///
/// `step` is an index offset from [`STRAIGHT_STEPS`] or [`DIAGONAL_STEPS`] and
/// `distance` the matching edge distance, so every square produced is on the board.
pub(crate) fn ray(from: Square, step: i8, distance: u8) -> impl Iterator<Item = Square> {
    (1..=distance as i32).map(move |k| {
        Square::from_index_unchecked((from.index() as i32 + step as i32 * k) as usize)
    })
}

/// Generate pseudo-legal moves for every slider of the side to move.
pub(super) fn gen_sliders(position: &Position, list: &mut MoveList) {
    let us = position.side_to_move();

    for (start, piece) in position.pieces_of(us) {
        if piece.moves_straight() {
            let distances = MOVE_TABLES.straight_distances(start);
            for (step, distance) in STRAIGHT_STEPS.into_iter().zip(distances) {
                walk(position, start, step, distance, list);
            }
        }
        if piece.moves_diagonal() {
            let distances = MOVE_TABLES.diagonal_distances(start);
            for (step, distance) in DIAGONAL_STEPS.into_iter().zip(distances) {
                walk(position, start, step, distance, list);
            }
        }
    }
}

fn walk(position: &Position, start: Square, step: i8, distance: u8, list: &mut MoveList) {
    let us = position.side_to_move();
    for dest in ray(start, step, distance) {
        let target = position.piece_on(dest);
        if target.is_empty() {
            list.push(Move::quiet(start, dest));
            continue;
        }
        if target.is_enemy(us) {
            list.push(Move::new(MoveKind::Normal, start, dest, target));
        }
        break;
    }
}

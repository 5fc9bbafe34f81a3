//! Knight move generation.

use crate::chess_move::{Move, MoveKind};
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::tables::MOVE_TABLES;

use super::MoveList;

/// Generate pseudo-legal knight moves: every table target that is empty or enemy.
pub(super) fn gen_knights(position: &Position, list: &mut MoveList) {
    let us = position.side_to_move();

    for (start, piece) in position.pieces_of(us) {
        if !piece.is(PieceKind::Knight) {
            continue;
        }
        for &dest in MOVE_TABLES.knight_targets(start) {
            let target = position.piece_on(dest);
            if !target.is_friendly(us) {
                list.push(Move::new(MoveKind::Normal, start, dest, target));
            }
        }
    }
}

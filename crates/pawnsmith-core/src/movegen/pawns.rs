//! Pawn move generation: pushes, captures, en passant, and promotions.

use crate::chess_move::{Move, MoveKind};
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;

use super::MoveList;

/// Generate pseudo-legal pawn moves for the side to move.
pub(super) fn gen_pawns(position: &Position, list: &mut MoveList) {
    let us = position.side_to_move();
    let forward = us.forward();
    let enemy_pawn = Piece::new(PieceKind::Pawn, us.flip());

    for (start, piece) in position.pieces_of(us) {
        if !piece.is(PieceKind::Pawn) {
            continue;
        }

        if let Some(one) = start.offset(forward, 0)
            && position.piece_on(one).is_empty()
        {
            push_advance(start, one, Piece::EMPTY, us.promotion_rank(), list);

            if start.rank() == us.pawn_rank()
                && let Some(two) = one.offset(forward, 0)
                && position.piece_on(two).is_empty()
            {
                list.push(Move::new(MoveKind::PawnDoublePush, start, two, Piece::EMPTY));
            }
        }

        for side in [-1, 1] {
            let Some(dest) = start.offset(forward, side) else {
                continue;
            };
            let target = position.piece_on(dest);
            if target.is_enemy(us) {
                push_advance(start, dest, target, us.promotion_rank(), list);
            } else if position.en_passant() == Some(dest) {
                let victim = Square::new(start.rank(), dest.file());
                if position.piece_on(victim) == enemy_pawn {
                    list.push(Move::new(MoveKind::EnPassantCapture, start, dest, enemy_pawn));
                }
            }
        }
    }
}

/// Push a one-rank pawn move, expanded into four promotions on the far rank.
fn push_advance(start: Square, dest: Square, captured: Piece, promotion_rank: u8, list: &mut MoveList) {
    if dest.rank() == promotion_rank {
        for kind in MoveKind::PROMOTIONS {
            list.push(Move::new(kind, start, dest, captured));
        }
    } else {
        list.push(Move::new(MoveKind::Normal, start, dest, captured));
    }
}

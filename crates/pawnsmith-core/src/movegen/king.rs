//! King move and castling generation.

use crate::castle_rights::CastleSide;
use crate::chess_move::{Move, MoveKind};
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;
use crate::tables::MOVE_TABLES;

use super::MoveList;
use super::attack::is_attacked;

/// File the king starts on.
const KING_HOME_FILE: u8 = 4;

/// Generate pseudo-legal king moves plus castling.
///
/// Adjacent-square moves are not checked for safety here, the legality
/// filter handles that. Castling is fully checked, since passing through an
/// attacked square is not something replaying the move can detect.
pub(super) fn gen_king(position: &Position, list: &mut MoveList) {
    let us = position.side_to_move();

    for (start, piece) in position.pieces_of(us) {
        if !piece.is(PieceKind::King) {
            continue;
        }
        for &dest in MOVE_TABLES.king_targets(start) {
            let target = position.piece_on(dest);
            if !target.is_friendly(us) {
                list.push(Move::new(MoveKind::Normal, start, dest, target));
            }
        }
        gen_castles(position, start, list);
    }
}

fn gen_castles(position: &Position, king: Square, list: &mut MoveList) {
    let us = position.side_to_move();
    let rank = us.back_rank();
    if king != Square::new(rank, KING_HOME_FILE) {
        return;
    }

    let rights = position.castling();
    let rook = Piece::new(PieceKind::Rook, us);

    for side in CastleSide::ALL {
        if !rights.has(us, side) {
            continue;
        }
        let rook_file = side.rook_file();
        if position.piece_on(Square::new(rank, rook_file)) != rook {
            continue;
        }

        let (low, high) = if rook_file > KING_HOME_FILE {
            (KING_HOME_FILE + 1, rook_file)
        } else {
            (rook_file + 1, KING_HOME_FILE)
        };
        if (low..high).any(|file| !position.piece_on(Square::new(rank, file)).is_empty()) {
            continue;
        }

        let (transit, dest, kind) = match side {
            CastleSide::KingSide => (5, 6, MoveKind::CastleKingside),
            CastleSide::QueenSide => (3, 2, MoveKind::CastleQueenside),
        };
        let unsafe_path = [KING_HOME_FILE, transit, dest]
            .into_iter()
            .any(|file| is_attacked(position, us, Square::new(rank, file)));
        if unsafe_path {
            continue;
        }

        list.push(Move::new(kind, king, Square::new(rank, dest), Piece::EMPTY));
    }
}

//! Move execution via copy-make.

use tracing::trace;

use crate::castle_rights::{CastleRights, CastleSide};
use crate::chess_move::{Move, MoveKind};
use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;

/// Rights removed when a move starts or ends on a given square.
///
/// Leaving a king's home square drops both of that color's rights. Leaving a
/// rook's corner, or capturing whatever stands on it, drops that one right.
const CASTLE_RIGHTS_REVOKE: [CastleRights; 64] = {
    let mut table = [CastleRights::NONE; 64];
    table[Square::E1.index()] = CastleRights::both(Color::White);
    table[Square::A1.index()] = CastleRights::single(Color::White, CastleSide::QueenSide);
    table[Square::H1.index()] = CastleRights::single(Color::White, CastleSide::KingSide);
    table[Square::E8.index()] = CastleRights::both(Color::Black);
    table[Square::A8.index()] = CastleRights::single(Color::Black, CastleSide::QueenSide);
    table[Square::H8.index()] = CastleRights::single(Color::Black, CastleSide::KingSide);
    table
};

/// Rook (from, to) files for a castle toward `side`.
const fn castle_rook_files(side: CastleSide) -> (u8, u8) {
    match side {
        CastleSide::KingSide => (7, 5),
        CastleSide::QueenSide => (0, 3),
    }
}

impl Position {
    /// Apply `mv` and return the resulting position. `self` is not modified.
    ///
    /// The move is trusted to come from this position's generator. If its
    /// start square is empty the position comes back unchanged.
    #[must_use]
    pub fn apply_move(&self, mv: Move) -> Position {
        let mut next = *self;
        let us = self.side_to_move();
        let them = us.flip();
        let start = mv.start();
        let dest = mv.dest();

        let moving = self.piece_on(start);
        if moving.is_empty() {
            trace!(%mv, "apply_move called with an empty start square");
            return next;
        }

        next.set_en_passant(None);
        let mut captured = false;

        match mv.kind() {
            MoveKind::Normal | MoveKind::PawnDoublePush => {
                captured = !next.remove(dest).is_empty();
                next.remove(start);
                next.put(dest, moving);

                if mv.kind() == MoveKind::PawnDoublePush {
                    next.set_en_passant(start.offset(us.forward(), 0));
                }
            }

            MoveKind::EnPassantCapture => {
                next.remove(start);
                next.put(dest, moving);
                // the victim sits beside the start square, on the destination file
                let victim = Square::new(start.rank(), dest.file());
                captured = next.remove(victim).is(PieceKind::Pawn);
            }

            MoveKind::CastleKingside | MoveKind::CastleQueenside => {
                let side = if mv.kind() == MoveKind::CastleKingside {
                    CastleSide::KingSide
                } else {
                    CastleSide::QueenSide
                };
                let (rook_from, rook_to) = castle_rook_files(side);
                let rank = us.back_rank();

                next.remove(start);
                next.put(dest, moving);
                let rook = next.remove(Square::new(rank, rook_from));
                next.put(Square::new(rank, rook_to), rook);
                next.set_castling(next.castling().clear_color(us));
            }

            MoveKind::PromoteToKnight
            | MoveKind::PromoteToBishop
            | MoveKind::PromoteToRook
            | MoveKind::PromoteToQueen => {
                captured = !next.remove(dest).is_empty();
                next.remove(start);
                let kind = mv.kind().promotion().unwrap_or(PieceKind::Queen);
                next.put(dest, Piece::new(kind, us));
            }
        }

        let rights = next
            .castling()
            .remove(CASTLE_RIGHTS_REVOKE[start.index()])
            .remove(CASTLE_RIGHTS_REVOKE[dest.index()]);
        next.set_castling(rights);

        let halfmove_clock = if moving.is(PieceKind::Pawn) || captured {
            0
        } else {
            self.halfmove_clock() + 1
        };
        let fullmove_number = match us {
            Color::Black => self.fullmove_number() + 1,
            Color::White => self.fullmove_number(),
        };
        next.set_counters(halfmove_clock, fullmove_number);
        next.set_side_to_move(them);

        next
    }
}

//! Attack detection, used both for check and for castling safety.

use tracing::trace;

use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;
use crate::tables::{DIAGONAL_STEPS, MOVE_TABLES, STRAIGHT_STEPS};

use super::sliders::ray;

/// Return `true` if any piece of `color`'s opponent attacks `sq`.
///
/// Walks the eight rays outward from `sq` and stops each one at its first
/// occupier, then probes the pawn, knight, and king tables. Returns on the
/// first attacker found.
pub fn is_attacked(position: &Position, color: Color, sq: Square) -> bool {
    let them = color.flip();

    let straight = MOVE_TABLES.straight_distances(sq);
    for (step, distance) in STRAIGHT_STEPS.into_iter().zip(straight) {
        if let Some(piece) = first_occupier(position, sq, step, distance)
            && piece.is_enemy(color)
            && piece.moves_straight()
        {
            return true;
        }
    }

    let diagonal = MOVE_TABLES.diagonal_distances(sq);
    for (step, distance) in DIAGONAL_STEPS.into_iter().zip(diagonal) {
        if let Some(piece) = first_occupier(position, sq, step, distance)
            && piece.is_enemy(color)
            && piece.moves_diagonal()
        {
            return true;
        }
    }

    let enemy_pawn = Piece::new(PieceKind::Pawn, them);
    if MOVE_TABLES
        .pawn_attackers(them, sq)
        .iter()
        .any(|&from| position.piece_on(from) == enemy_pawn)
    {
        return true;
    }

    let enemy_knight = Piece::new(PieceKind::Knight, them);
    if MOVE_TABLES
        .knight_targets(sq)
        .iter()
        .any(|&from| position.piece_on(from) == enemy_knight)
    {
        return true;
    }

    let enemy_king = Piece::new(PieceKind::King, them);
    MOVE_TABLES
        .king_targets(sq)
        .iter()
        .any(|&from| position.piece_on(from) == enemy_king)
}

/// Return `true` if `color`'s king is attacked.
///
/// A position without a king for `color` is reported as in check.
pub fn in_check(position: &Position, color: Color) -> bool {
    match position.king_square(color) {
        Some(king) => is_attacked(position, color, king),
        None => {
            trace!(color = color.name(), "no king on the board, treating as in check");
            true
        }
    }
}

fn first_occupier(position: &Position, from: Square, step: i8, distance: u8) -> Option<Piece> {
    ray(from, step, distance)
        .map(|sq| position.piece_on(sq))
        .find(|piece| !piece.is_empty())
}

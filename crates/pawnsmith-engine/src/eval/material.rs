//! Material balance evaluation.
//!
//! Sums fixed piece values for each side. Scores are from White's
//! perspective (positive = White ahead).

use pawnsmith_core::{Color, PieceKind, Position};

use super::Evaluate;

/// Piece values in centipawns, indexed by [`PieceKind::index()`].
///
/// | Piece  | value |
/// |--------|-------|
/// | Pawn   |   100 |
/// | Knight |   320 |
/// | Bishop |   330 |
/// | Rook   |   500 |
/// | Queen  |   900 |
/// | King   |     0 |
pub const MATERIAL_VALUE: [i32; PieceKind::COUNT] = [
    100, // Pawn
    320, // Knight
    330, // Bishop
    500, // Rook
    900, // Queen
    0,   // King
];

/// The default evaluator: material only.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialEvaluator;

impl MaterialEvaluator {
    fn side_total(position: &Position, color: Color) -> i32 {
        position
            .pieces_of(color)
            .filter_map(|(_, piece)| piece.kind())
            .map(|kind| MATERIAL_VALUE[kind.index()])
            .sum()
    }
}

impl Evaluate for MaterialEvaluator {
    fn evaluate(&self, position: &Position) -> i32 {
        Self::side_total(position, Color::White) - Self::side_total(position, Color::Black)
    }
}

#[cfg(test)]
mod tests {
    use pawnsmith_core::{PieceKind, Position};

    use super::{MATERIAL_VALUE, MaterialEvaluator};
    use crate::eval::Evaluate;

    #[test]
    fn starting_position_is_zero() {
        assert_eq!(MaterialEvaluator.evaluate(&Position::starting_position()), 0);
    }

    #[test]
    fn king_is_worth_nothing() {
        assert_eq!(MATERIAL_VALUE[PieceKind::King.index()], 0);
        let kings: Position = "4k3/8/8/8/8/8/8/4K3 w - - 0 1".parse().unwrap();
        assert_eq!(MaterialEvaluator.evaluate(&kings), 0);
    }

    #[test]
    fn extra_white_queen() {
        let pos: Position = "4k3/8/8/8/8/8/8/3QK3 w - - 0 1".parse().unwrap();
        assert_eq!(MaterialEvaluator.evaluate(&pos), 900);
    }

    #[test]
    fn black_advantage_is_negative() {
        let pos: Position = "3rk3/1n6/8/8/8/8/P7/4K3 b - - 0 1".parse().unwrap();
        assert_eq!(MaterialEvaluator.evaluate(&pos), 100 - 500 - 320);
    }

    #[test]
    fn closures_are_evaluators() {
        let flat = |_: &Position| 7;
        assert_eq!(flat.evaluate(&Position::starting_position()), 7);
    }
}

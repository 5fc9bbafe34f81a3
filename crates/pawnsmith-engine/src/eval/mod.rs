//! Static evaluation: the oracle the search scores leaf positions with.

pub mod material;

use pawnsmith_core::Position;

pub use material::{MATERIAL_VALUE, MaterialEvaluator};

/// Scores a position from White's point of view.
///
/// Positive favors White, negative favors Black. Implementations must be
/// deterministic and must not depend on anything but the position.
pub trait Evaluate {
    fn evaluate(&self, position: &Position) -> i32;
}

impl<F> Evaluate for F
where
    F: Fn(&Position) -> i32,
{
    fn evaluate(&self, position: &Position) -> i32 {
        self(position)
    }
}

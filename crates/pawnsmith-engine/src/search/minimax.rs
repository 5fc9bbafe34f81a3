//! Fixed-depth minimax with alpha-beta pruning.

use pawnsmith_core::{Position, generate_legal_moves, in_check};

use crate::eval::Evaluate;

/// Search score, White-positive.
///
/// Wider than the evaluator's `i32` so mate sentinels sit strictly outside
/// anything an evaluator can return.
pub type Score = i64;

/// Score representing an unreachable upper/lower bound.
pub const INF: Score = Score::MAX;

/// Scores beyond this magnitude indicate a forced mate. No evaluation exceeds it,
/// `i32::MIN` included.
pub const MATE_THRESHOLD: Score = i32::MAX as Score + 1;

/// Base score for checkmate (raised by the remaining depth, so faster mates score higher).
pub const MATE_SCORE: Score = MATE_THRESHOLD + 1;

/// Per-search state threaded through the recursion.
pub(super) struct SearchContext<'a, E> {
    pub evaluator: &'a E,
    pub nodes: u64,
}

/// Score `position` with `depth` plies remaining.
///
/// `maximizing` is `true` when the side to move here is White. Scores are
/// White-positive: a checkmated White returns `-(MATE_SCORE + depth)`, a
/// checkmated Black the positive equivalent, stalemate and dead positions 0.
pub(super) fn minimax<E: Evaluate>(
    position: &Position,
    depth: u8,
    maximizing: bool,
    mut alpha: Score,
    mut beta: Score,
    ctx: &mut SearchContext<'_, E>,
) -> Score {
    ctx.nodes += 1;

    if position.is_insufficient_material() {
        return 0;
    }

    if depth == 0 {
        return Score::from(ctx.evaluator.evaluate(position));
    }

    let moves = generate_legal_moves(position);

    // No legal moves: checkmate or stalemate
    if moves.is_empty() {
        if !in_check(position, position.side_to_move()) {
            return 0;
        }
        let mate = MATE_SCORE + Score::from(depth);
        return if maximizing { -mate } else { mate };
    }

    if maximizing {
        let mut best = -INF;
        for &mv in &moves {
            let score = minimax(&position.apply_move(mv), depth - 1, false, alpha, beta, ctx);
            best = best.max(score);
            alpha = alpha.max(best);
            if beta <= alpha {
                break;
            }
        }
        best
    } else {
        let mut best = INF;
        for &mv in &moves {
            let score = minimax(&position.apply_move(mv), depth - 1, true, alpha, beta, ctx);
            best = best.min(score);
            beta = beta.min(best);
            if beta <= alpha {
                break;
            }
        }
        best
    }
}

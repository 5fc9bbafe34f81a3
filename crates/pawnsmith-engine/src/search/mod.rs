//! Move selection by fixed-depth minimax.

pub mod minimax;

use pawnsmith_core::{Color, Move, Position};
use tracing::debug;

use crate::eval::{Evaluate, MaterialEvaluator};

use minimax::{INF, Score, SearchContext, minimax};

/// Search parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Plies searched, counting the root move itself. Values below 1 are treated as 1.
    pub depth: u8,
}

impl SearchConfig {
    pub const DEFAULT_DEPTH: u8 = 3;

    pub fn with_depth(depth: u8) -> SearchConfig {
        SearchConfig { depth }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::with_depth(Self::DEFAULT_DEPTH)
    }
}

/// Result of a completed search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Move chosen at the root.
    pub best_move: Move,
    /// Exact minimax score of `best_move`, White-positive.
    pub score: Score,
    /// Positions visited below the root.
    pub nodes: u64,
}

/// Fixed-depth minimax searcher over an [`Evaluate`] oracle.
pub struct Searcher<E = MaterialEvaluator> {
    evaluator: E,
    config: SearchConfig,
}

impl Searcher<MaterialEvaluator> {
    /// Create a material-only searcher at the default depth.
    pub fn new() -> Self {
        Self::with_evaluator(MaterialEvaluator, SearchConfig::default())
    }
}

impl Default for Searcher<MaterialEvaluator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Evaluate> Searcher<E> {
    pub fn with_evaluator(evaluator: E, config: SearchConfig) -> Self {
        Self { evaluator, config }
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Pick a move from `legal_moves` for `mover`.
    ///
    /// White maximizes and Black minimizes the White-positive score. Every
    /// root child gets a full window, so the reported score is exact and the
    /// choice matches an unpruned minimax. On equal scores the later move in
    /// `legal_moves` wins.
    ///
    /// Returns `None` only when `legal_moves` is empty.
    pub fn select_move(
        &self,
        position: &Position,
        legal_moves: &[Move],
        mover: Color,
    ) -> Option<SearchResult> {
        let maximizing = mover == Color::White;
        let remaining = self.config.depth.max(1) - 1;
        let mut ctx = SearchContext {
            evaluator: &self.evaluator,
            nodes: 0,
        };

        let mut best: Option<(Move, Score)> = None;
        for &mv in legal_moves {
            let child = position.apply_move(mv);
            let score = minimax(&child, remaining, !maximizing, -INF, INF, &mut ctx);
            let replace = match best {
                None => true,
                Some((_, best_score)) if maximizing => score >= best_score,
                Some((_, best_score)) => score <= best_score,
            };
            if replace {
                best = Some((mv, score));
            }
        }

        let (best_move, score) = best?;
        debug!(
            side = mover.name(),
            best_move = %best_move,
            score,
            nodes = ctx.nodes,
            depth = self.config.depth,
            "search selected move"
        );
        Some(SearchResult {
            best_move,
            score,
            nodes: ctx.nodes,
        })
    }

    /// Score `position` with `depth` plies left inside the window `[alpha, beta]`.
    ///
    /// `maximizing` states whether the side to move is the maximizing (White) side.
    pub fn score(
        &self,
        position: &Position,
        depth: u8,
        maximizing: bool,
        alpha: Score,
        beta: Score,
    ) -> Score {
        let mut ctx = SearchContext {
            evaluator: &self.evaluator,
            nodes: 0,
        };
        minimax(position, depth, maximizing, alpha, beta, &mut ctx)
    }
}

#[cfg(test)]
mod tests {
    use pawnsmith_core::{Color, Position, Square, generate_legal_moves};

    use super::minimax::{INF, MATE_SCORE, MATE_THRESHOLD};
    use super::{SearchConfig, Searcher};

    fn searcher(depth: u8) -> Searcher {
        Searcher::with_evaluator(crate::eval::MaterialEvaluator, SearchConfig::with_depth(depth))
    }

    #[test]
    fn default_depth_is_three() {
        assert_eq!(SearchConfig::default().depth, 3);
        assert_eq!(Searcher::new().config().depth, 3);
    }

    #[test]
    fn empty_move_list_gives_none() {
        let pos = Position::starting_position();
        assert!(searcher(3).select_move(&pos, &[], Color::White).is_none());
    }

    #[test]
    fn white_takes_hanging_queen() {
        let pos: Position = "4k3/8/8/3q4/8/8/8/3RK3 w - - 0 1".parse().unwrap();
        let moves = generate_legal_moves(&pos);
        let result = searcher(2).select_move(&pos, moves.as_slice(), Color::White).unwrap();
        assert_eq!(result.best_move.to_string(), "d1d5");
        assert_eq!(result.score, 500);
        assert!(result.nodes > 0);
    }

    #[test]
    fn black_minimizes() {
        let pos: Position = "3rk3/8/8/8/3Q4/8/8/4K3 b - - 0 1".parse().unwrap();
        let moves = generate_legal_moves(&pos);
        let result = searcher(2).select_move(&pos, moves.as_slice(), Color::Black).unwrap();
        assert_eq!(result.best_move.to_string(), "d8d4");
        assert_eq!(result.score, -500);
    }

    #[test]
    fn ties_go_to_the_later_move() {
        let pos = Position::starting_position();
        let moves = generate_legal_moves(&pos);
        let flat = Searcher::with_evaluator(|_: &Position| 0, SearchConfig::with_depth(1));

        let white = flat.select_move(&pos, moves.as_slice(), Color::White).unwrap();
        assert_eq!(white.best_move, moves[moves.len() - 1]);

        let black = flat.select_move(&pos, moves.as_slice(), Color::Black).unwrap();
        assert_eq!(black.best_move, moves[moves.len() - 1]);
    }

    #[test]
    fn mate_scores_prefer_faster_mates() {
        // fool's mate, white to move and mated
        let mated: Position = "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3"
            .parse()
            .unwrap();
        let s = searcher(3);
        assert_eq!(s.score(&mated, 2, true, -INF, INF), -(MATE_SCORE + 2));
        assert_eq!(s.score(&mated, 1, true, -INF, INF), -(MATE_SCORE + 1));
        assert!(s.score(&mated, 1, true, -INF, INF) < -MATE_THRESHOLD);
    }

    #[test]
    fn stalemate_scores_zero() {
        let pos: Position = "7k/5Q2/6K1/8/8/8/8/8 b - - 0 1".parse().unwrap();
        assert_eq!(searcher(3).score(&pos, 2, false, -INF, INF), 0);
    }

    #[test]
    fn depth_zero_evaluates() {
        let pos: Position = "4k3/8/8/8/8/8/8/3QK3 w - - 0 1".parse().unwrap();
        assert_eq!(searcher(3).score(&pos, 0, true, -INF, INF), 900);
    }

    #[test]
    fn mate_in_one_for_white() {
        let pos: Position = "r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 4 4"
            .parse()
            .unwrap();
        let moves = generate_legal_moves(&pos);
        let result = searcher(2).select_move(&pos, moves.as_slice(), Color::White).unwrap();
        assert_eq!(result.best_move.start(), Square::H5);
        assert_eq!(result.best_move.dest(), Square::F7);
        assert_eq!(result.score, MATE_SCORE + 1);
    }
}

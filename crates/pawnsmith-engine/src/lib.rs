//! Search, evaluation, and the game loop for pawnsmith.

pub mod eval;
pub mod game;
pub mod search;

pub use eval::{Evaluate, MATERIAL_VALUE, MaterialEvaluator};
pub use game::{EnginePlayer, Game, GameError, GameStatus, MoveSelector, Outcome, ScriptedPlayer, resolve_move};
pub use search::minimax::{INF, MATE_SCORE, MATE_THRESHOLD, Score};
pub use search::{SearchConfig, SearchResult, Searcher};

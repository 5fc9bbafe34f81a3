//! Turn loop: holds the current position and asks each side for its move.

use std::collections::VecDeque;
use std::fmt;

use pawnsmith_core::{Color, Move, MoveList, PieceKind, Position, Square, generate_legal_moves, in_check};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::eval::Evaluate;
use crate::search::Searcher;

/// Errors raised while driving a game.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("malformed move {text:?}: expected coordinates like e2e4 or e7e8q")]
    MalformedMove { text: String },

    #[error("move {text} is not legal in the current position")]
    IllegalMove { text: String },
}

/// Anything that can choose a move for one side.
pub trait MoveSelector {
    /// Pick one of `legal_moves`, or return `None` if no choice is available yet.
    fn select_move(&mut self, position: &Position, legal_moves: &MoveList) -> Option<Move>;
}

/// A side played by the search.
pub struct EnginePlayer<E: Evaluate> {
    searcher: Searcher<E>,
}

impl<E: Evaluate> EnginePlayer<E> {
    pub fn new(searcher: Searcher<E>) -> Self {
        Self { searcher }
    }
}

impl<E: Evaluate> MoveSelector for EnginePlayer<E> {
    fn select_move(&mut self, position: &Position, legal_moves: &MoveList) -> Option<Move> {
        self.searcher
            .select_move(position, legal_moves.as_slice(), position.side_to_move())
            .map(|result| result.best_move)
    }
}

/// A side fed from a queue of coordinate strings, one per turn.
///
/// An entry that does not resolve to a legal move is logged and dropped, and
/// the turn stays open.
#[derive(Debug, Default, Clone)]
pub struct ScriptedPlayer {
    queue: VecDeque<String>,
}

impl ScriptedPlayer {
    pub fn new<I, S>(moves: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            queue: moves.into_iter().map(Into::into).collect(),
        }
    }

    /// Append a move to the end of the queue.
    pub fn push(&mut self, text: impl Into<String>) {
        self.queue.push_back(text.into());
    }

    /// Number of moves still queued.
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl MoveSelector for ScriptedPlayer {
    fn select_move(&mut self, _position: &Position, legal_moves: &MoveList) -> Option<Move> {
        let text = self.queue.pop_front()?;
        match resolve_move(&text, legal_moves) {
            Ok(mv) => Some(mv),
            Err(error) => {
                warn!(%error, "discarding scripted move");
                None
            }
        }
    }
}

/// Find the legal move named by `text` in coordinate notation.
///
/// The move is matched by its start and destination squares. A fifth
/// character picks the promotion piece; a promotion without one becomes a queen.
pub fn resolve_move(text: &str, legal_moves: &MoveList) -> Result<Move, GameError> {
    let malformed = || GameError::MalformedMove {
        text: text.to_string(),
    };

    let text = text.trim();
    let start = text.get(0..2).and_then(Square::from_algebraic).ok_or_else(malformed)?;
    let dest = text.get(2..4).and_then(Square::from_algebraic).ok_or_else(malformed)?;
    let promotion = match text.get(4..) {
        None | Some("") => None,
        Some(suffix) => {
            let mut chars = suffix.chars();
            let kind = chars.next().and_then(PieceKind::from_letter).ok_or_else(malformed)?;
            if chars.next().is_some()
                || !matches!(kind, PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)
            {
                return Err(malformed());
            }
            Some(kind)
        }
    };

    let mut candidates = legal_moves.iter().copied().filter(|mv| mv.matches(start, dest));
    let found = match promotion {
        Some(kind) => candidates.find(|mv| mv.kind().promotion() == Some(kind)),
        None => candidates.find(|mv| matches!(mv.kind().promotion(), None | Some(PieceKind::Queen))),
    };
    found.ok_or_else(|| GameError::IllegalMove {
        text: text.to_string(),
    })
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Checkmate { winner: Color },
    Stalemate,
    InsufficientMaterial,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Checkmate { winner } => write!(f, "{} wins by checkmate", winner.name()),
            Outcome::Stalemate => write!(f, "draw by stalemate"),
            Outcome::InsufficientMaterial => write!(f, "draw by insufficient material"),
        }
    }
}

/// What a call to [`Game::step`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// A move was played.
    Moved(Move),
    /// The side to move has not picked a move yet.
    AwaitingInput,
    /// The game is over; no move was played.
    Finished(Outcome),
}

/// A game between two move selectors.
pub struct Game {
    position: Position,
    legal_moves: MoveList,
    history: Vec<Position>,
    white: Box<dyn MoveSelector>,
    black: Box<dyn MoveSelector>,
}

impl Game {
    pub fn new(position: Position, white: Box<dyn MoveSelector>, black: Box<dyn MoveSelector>) -> Self {
        Self {
            legal_moves: generate_legal_moves(&position),
            position,
            history: Vec::new(),
            white,
            black,
        }
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn legal_moves(&self) -> &MoveList {
        &self.legal_moves
    }

    /// Positions before each move played so far, oldest first.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Classify the current position, `None` while the game is still running.
    pub fn status(&self) -> Option<Outcome> {
        let us = self.position.side_to_move();
        if self.legal_moves.is_empty() {
            return Some(if in_check(&self.position, us) {
                Outcome::Checkmate { winner: us.flip() }
            } else {
                Outcome::Stalemate
            });
        }
        if self.position.is_insufficient_material() {
            return Some(Outcome::InsufficientMaterial);
        }
        None
    }

    /// Ask the side to move for a move and play it.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::IllegalMove`] if the selector hands back a move
    /// that is not in the legal list. The position is left unchanged.
    pub fn step(&mut self) -> Result<GameStatus, GameError> {
        if let Some(outcome) = self.status() {
            return Ok(GameStatus::Finished(outcome));
        }

        let selector = match self.position.side_to_move() {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        };
        let Some(mv) = selector.select_move(&self.position, &self.legal_moves) else {
            return Ok(GameStatus::AwaitingInput);
        };
        if !self.legal_moves.contains(mv) {
            return Err(GameError::IllegalMove { text: mv.to_string() });
        }

        self.play(mv);
        Ok(GameStatus::Moved(mv))
    }

    /// Take back the last move. Returns `false` if there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.history.pop() else {
            return false;
        };
        self.position = previous;
        self.legal_moves = generate_legal_moves(&self.position);
        debug!(position = %self.position, "move undone");
        true
    }

    /// Step until the game ends, a selector stalls, or `max_plies` moves have been played.
    ///
    /// Returns the outcome if the game finished.
    pub fn run(&mut self, max_plies: usize) -> Result<Option<Outcome>, GameError> {
        for _ in 0..max_plies {
            match self.step()? {
                GameStatus::Moved(_) => {}
                GameStatus::AwaitingInput => return Ok(None),
                GameStatus::Finished(outcome) => return Ok(Some(outcome)),
            }
        }
        Ok(self.status())
    }

    fn play(&mut self, mv: Move) {
        let mover = self.position.side_to_move();
        self.history.push(self.position);
        self.position = self.position.apply_move(mv);
        self.legal_moves = generate_legal_moves(&self.position);
        debug!(side = mover.name(), mv = %mv, position = %self.position, "move played");

        if let Some(outcome) = self.status() {
            info!(%outcome, plies = self.history.len(), "game over");
        }
    }
}
